//! Match log input and rating table output
//!
//! The rating core never touches files; these collaborators feed it ordered
//! match records and persist the final table.

pub mod reader;
pub mod writer;

pub use reader::{read_matches, read_matches_from_path, MatchLog, MatchReaderConfig};
pub use writer::{publish_ratings, CsvRatingWriter, InMemoryRatingSink, RatingSink};
