//! Automated daily Spelling Bee player.
//!
//! Fetches the day's answers, orders them by score, and types them into a
//! puzzle surface until the target rank is reached or the list runs out.

pub mod config;
pub mod engine;
pub mod feed;
pub mod report;
pub mod surface;
