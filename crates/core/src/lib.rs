//! Core types for sift
//!
//! This crate defines the foundational types shared by the search crate:
//! - Error: the error taxonomy (`SourceUnavailable`, `InvalidConfig`)
//! - SearchConfig: engine settings loaded from `sift.toml`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;

pub use config::{SearchConfig, CONFIG_FILE_NAME, DEFAULT_MATCH_PREFIX};
pub use error::{Error, Result};
