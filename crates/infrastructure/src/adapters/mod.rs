//! Adapters for application ports that need no storage.

mod standard_ranker;

pub use standard_ranker::StandardScopeRanker;
