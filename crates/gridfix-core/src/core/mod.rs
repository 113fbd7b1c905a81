//! # Core Module
//!
//! Stateless building blocks used by the regrid workflow.
//!
//! - **Atom representation** ([`models`]) - Parsed atom records with their source line
//! - **File I/O** ([`io`]) - Line-preserving reading and writing of LAMMPS data files
//! - **Grid placement** ([`grid`]) - Deterministic molecule origins on a 3D lattice

pub mod grid;
pub mod io;
pub mod models;
