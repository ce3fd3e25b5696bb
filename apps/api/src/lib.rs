//! # apotek-api: HTTP Surface for Apotek POS
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         API Server                                      │
//! │                                                                         │
//! │  Cashier app ───► HTTP/JSON ───► handlers ───► repositories ───► SQLite│
//! │                                     │                                   │
//! │                                     ▼                                   │
//! │                              ApiError → status code + plain text       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! One tokio task per inbound request; no shared in-process mutable state
//! across requests. The injected [`apotek_db::Database`] handle (router
//! state) is the only shared resource.

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;

pub use routes::router;
