mod health;
mod prototypes;

pub use health::*;
pub use prototypes::*;
