//! Report synthesis and export

pub mod findings;
pub mod json;
