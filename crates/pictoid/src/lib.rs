//! `pictoid` - stamp sequential ids onto a JSON list of pictos
//!
//! The library reads a JSON array of objects, sets `id` on each object to its
//! 1-based position, and writes the array back as pretty-printed JSON.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod annotate;
pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod logging;

pub use annotate::{annotate, check, DEFAULT_INPUT_PATH};
pub use config::Config;
pub use document::{Document, Record, ID_FIELD};
pub use error::{Error, Result};
pub use logging::init_logging;
