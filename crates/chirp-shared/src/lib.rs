//! # Chirp Shared
//!
//! Types shared between the API server and its clients: request/response
//! DTOs and the standard error envelope.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
