#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Unified error representation for the squill database access layer
//!
//! This crate normalizes heterogeneous low-level failure signals (engine
//! return codes, OS error numbers) into one structured [`Error`] value that
//! callers can branch on, enrich with diagnostic metadata, and render for
//! logging. It classifies and carries information; it never decides control
//! flow on its own.

pub mod code;
pub mod error;
pub mod extcode;
pub mod infos;
pub mod level;

// Re-export the whole surface at the root
pub use code::{Code, UnknownCode};
pub use error::{Error, INFO_KEY_ERRNO, INFO_KEY_EXT_CODE, INFO_KEY_RC, INFO_KEY_SOURCE};
pub use extcode::{ExtCode, UnknownExtCode};
pub use infos::Infos;
pub use level::Level;

/// Result type alias for squill operations
pub type Result<T> = std::result::Result<T, Error>;
