pub mod domain;
mod error;
pub mod generator;

pub use domain::*;
pub use error::*;
pub use generator::generate;
