//! SeaORM entities for the Chirp schema.

pub mod follow;
pub mod post;
pub mod user;
