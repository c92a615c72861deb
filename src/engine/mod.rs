//! Engine Module
//!
//! Pure computations over a blog list: aggregate analytics and title search.

mod analytics;
mod search;

pub use analytics::{analyze, AnalyticsResult, PRIVACY_KEYWORD};
pub use search::search;
