//! # Engine Module
//!
//! The stateful pieces of a regrid run: configuration, error reporting,
//! progress events, and the rigid-body translation of molecules onto the grid.

pub mod config;
pub mod error;
pub mod progress;
pub mod translate;
