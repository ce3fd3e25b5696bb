//! # Repository Module
//!
//! Database repository implementations for Apotek POS.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  HTTP handler                                                          │
//! │       │                                                                 │
//! │       │  db.medicines().list_all()                                     │
//! │       │  db.sales().create_sale(&payload)                              │
//! │       ▼                                                                 │
//! │  Repository (thin, stateless, holds a pool clone)                      │
//! │       │                                                                 │
//! │       │  Parameterized SQL                                              │
//! │       ▼                                                                 │
//! │  SQLite database                                                       │
//! │                                                                         │
//! │  Every operation is a single round trip, except:                       │
//! │  • SaleRepository::create_sale (header + N line items, one tx)         │
//! │  • PrescriptionRepository::process (stock decrements, one tx)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`medicine::MedicineRepository`] - Medicine CRUD
//! - [`sale::SaleRepository`] - The transactional create-sale core
//! - [`report::ReportRepository`] - Reporting view pass-throughs
//! - [`prescription::PrescriptionRepository`] - Prescription processing

pub mod medicine;
pub mod prescription;
pub mod report;
pub mod sale;
