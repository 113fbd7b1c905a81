//! Data structures describing the parsed contents of a data file.

pub mod atom;
