mod answers;
mod prototype;
mod ui_config;

pub use answers::*;
pub use prototype::*;
pub use ui_config::*;
