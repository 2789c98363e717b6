//! Common functionality for nullc.
#![warn(missing_docs)]
pub mod cli;
pub mod log;
pub mod target;
