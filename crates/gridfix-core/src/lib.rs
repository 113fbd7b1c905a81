//! # gridfix Core Library
//!
//! Repairs LAMMPS data files whose molecules were all generated at the origin
//! by spreading them over a regular, non-overlapping grid.
//!
//! ## Architecture
//!
//! - **[`core`]: The Foundation.** Atom records, the line-preserving data file
//!   reader and writer, and the grid that hands out molecule origins.
//!
//! - **[`engine`]: The Logic Core.** Configuration, errors, progress reporting,
//!   and the rigid-body translation that rewrites atom lines in place.
//!
//! - **[`workflows`]: The Public API.** The one-shot regrid procedure that ties
//!   reading, placement, and writing together.

pub mod core;
pub mod engine;
pub mod workflows;
