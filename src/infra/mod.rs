//! Infrastructure layer
//!
//! Handles all I/O operations: reading project descriptors and writing
//! build order documents. This module is the only place where side effects
//! occur.

pub mod discovery;
pub mod document;
pub mod filesystem;
