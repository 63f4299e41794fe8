//! SeaORM entities.

pub mod employer;
