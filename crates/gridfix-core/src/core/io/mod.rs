//! Provides input/output functionality for molecular data files.
//!
//! Only the LAMMPS `Atoms` section in the `id mol type charge x y z` layout is
//! understood; every other line of the file is carried through verbatim.

pub mod lammps;
pub mod traits;
