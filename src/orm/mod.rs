//! SeaORM entities for the polls schema.

pub mod choices;
pub mod questions;
