//! # Async Background Tasks
//!
//! Spawned work: price refresh and polling, sentiment analysis, whale scans.

pub mod market;
pub mod sentiment;
pub mod whale;
