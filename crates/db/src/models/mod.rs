mod prototype;

pub use prototype::*;
