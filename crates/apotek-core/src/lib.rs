//! # apotek-core: Pure Domain Types for Apotek POS
//!
//! This crate holds the domain types and input validation for the pharmacy
//! point-of-sale backend. It performs no I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Apotek POS Architecture                           │
//! │                                                                         │
//! │  HTTP Client (cashier app)                                              │
//! │       │ JSON over HTTP                                                  │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      apps/api (axum)                            │   │
//! │  │    handlers decode payloads, map errors to status codes         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ apotek-core (THIS CRATE) ★                      │   │
//! │  │      Medicine, Sale, SaleRequest, report rows, validation       │   │
//! │  │      NO I/O • NO DATABASE • NO NETWORK                          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    apotek-db (SQLite layer)                     │   │
//! │  │        pool, migrations, repositories, transactions             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Contract
//!
//! Field names are the Indonesian column names of the pharmacy schema
//! (`id_obat`, `nama_obat`, `total_harga`, ...). They double as the JSON
//! field names and as the database column names, so the same struct derives
//! `Serialize`/`Deserialize` and (behind the `sqlx` feature) `FromRow`
//! without any renaming.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, ValidationError};
pub use types::*;
