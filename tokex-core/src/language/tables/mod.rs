//! Runtime tables for exception lookup

pub mod exceptions;

pub use exceptions::{Collision, ExceptionTable, ExceptionTableBuilder};
