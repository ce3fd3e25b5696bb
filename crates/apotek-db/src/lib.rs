//! # apotek-db: Database Layer for Apotek POS
//!
//! SQLite storage for the pharmacy POS, with the business rules that belong
//! to the store (stock decrement, subtotal computation, stock-sufficiency
//! checks, reporting views) installed by embedded migrations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Apotek POS Data Flow                             │
//! │                                                                         │
//! │  HTTP handler (POST /api/transaksi)                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apotek-db (THIS CRATE)                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │ medicine.rs   │    │  (embedded)  │  │   │
//! │  │   │               │    │ sale.rs       │    │ 001_init.sql │  │   │
//! │  │   │ SqlitePool    │◄───│ report.rs     │    │ 002_views    │  │   │
//! │  │   │ Management    │    │ prescription  │    │ 003_resep    │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite database (tables + triggers + views)                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Transactional Core
//!
//! [`SaleRepository::create_sale`] is the only multi-statement unit of work
//! in the system: one header insert plus N line-item inserts, committed or
//! rolled back as a whole. Every other operation is a single round trip.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use apotek_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("./apotek.db")).await?;
//! let medicines = db.medicines().list_all().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::medicine::MedicineRepository;
pub use repository::prescription::PrescriptionRepository;
pub use repository::report::ReportRepository;
pub use repository::sale::SaleRepository;
