//! # HTTP Handlers
//!
//! One module per resource. Handlers are thin adapters: decode the request,
//! call a repository (or the sale orchestrator), encode the response.
//!
//! Success bodies keep the `{"message": ...}` shape of the legacy surface;
//! error bodies are plain text (see [`crate::error::ApiError`]).

pub mod health;
pub mod medicine;
pub mod prescription;
pub mod report;
pub mod sale;
