// Core algorithm exports
pub mod analysis;
pub mod matcher;
pub mod scoring;
pub mod text;

pub use analysis::{summarize, MatchSummary};
pub use matcher::{Matcher, DEFAULT_MIN_SCORE};
pub use scoring::{compute_match, compute_match_as_of};
pub use text::{fuzzy_any, fuzzy_eq, parse_year};
