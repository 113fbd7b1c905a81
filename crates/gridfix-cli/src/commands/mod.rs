pub mod regrid;
