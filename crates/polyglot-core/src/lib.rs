//! # polyglot-core
//!
//! Error handling and configuration shared by the polyglot crates.

pub mod config;
pub mod error;
