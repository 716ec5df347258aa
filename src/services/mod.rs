//! Data Services

mod leads;

pub use leads::*;
