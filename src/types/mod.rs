//! Type definitions for costrep

mod cost;
mod error;

pub use cost::*;
pub use error::*;
