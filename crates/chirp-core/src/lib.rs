//! # Chirp Core
//!
//! The domain layer of the Chirp microblogging backend.
//! This crate contains pure business logic with zero infrastructure dependencies:
//! domain entities, port traits, and the timeline assembly pipeline.

pub mod domain;
pub mod error;
pub mod ports;
pub mod timeline;

pub use error::{DomainError, TimelineError};
pub use timeline::{TimelineConfig, TimelineService};
