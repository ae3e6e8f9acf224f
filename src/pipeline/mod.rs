//! Scoring pipeline
//!
//! This module provides configuration, observer hooks, and the runner
//! that sequences the scoring stages.

pub mod config;
pub mod observer;
pub mod runner;
