mod prototype_repository;

pub use prototype_repository::*;
