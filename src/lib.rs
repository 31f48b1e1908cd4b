//! rosethorn - Roses and thorns terminal journal
//!
//! Each day gets two roses (good things) and one thorn (a hard thing),
//! stored in a single JSON file and browsable as a newest-first history.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod tui;

pub use error::{RosethornError, StorageError, ValidationError};
