//! # Workflows Module
//!
//! High-level entry points that run a complete procedure from input file to
//! output file.
//!
//! - **Regrid Workflow** ([`regrid`]) - Locates the `Atoms` section, assigns each
//!   molecule a grid cell, translates its atoms, and writes the repaired file.

pub mod regrid;
