//! # Validation Module
//!
//! Field-presence validation for the medicine CRUD path.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Handler (serde)                                              │
//! │  ├── Type validation (deserialization)                                 │
//! │  └── Unknown-field rejection on the create payload                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  └── Presence/range checks on medicine fields                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL / CHECK (stok >= 0)                                      │
//! │  ├── Foreign keys                                                      │
//! │  └── Stock-sufficiency and subtotal triggers                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Note that the sale path has NO layer 2: the payload's declared total and
//! subtotals are forwarded as-is and the store's triggers have the final say.

use crate::error::ValidationError;
use crate::types::{MedicineUpdate, NewMedicine};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Maximum length for medicine names and categories.
const MAX_NAME_LEN: usize = 100;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a medicine name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 100 characters
pub fn validate_medicine_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "nama_obat".to_string(),
        });
    }

    if name.len() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "nama_obat".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a medicine category.
pub fn validate_category(jenis: &str) -> ValidationResult<()> {
    if jenis.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "jenis".to_string(),
        });
    }

    Ok(())
}

/// Validates a unit price.
pub fn validate_unit_price(harga: f64) -> ValidationResult<()> {
    if harga < 0.0 {
        return Err(ValidationError::TooSmall {
            field: "harga".to_string(),
            min: 0,
        });
    }

    Ok(())
}

/// Validates a stock quantity.
pub fn validate_stock(stok: i64) -> ValidationResult<()> {
    if stok < 0 {
        return Err(ValidationError::TooSmall {
            field: "stok".to_string(),
            min: 0,
        });
    }

    Ok(())
}

// =============================================================================
// Payload Validators
// =============================================================================

/// Validates a create-medicine payload.
pub fn validate_new_medicine(payload: &NewMedicine) -> ValidationResult<()> {
    validate_medicine_name(&payload.nama_obat)?;
    validate_category(&payload.jenis)?;
    validate_unit_price(payload.harga)?;
    validate_stock(payload.stok)?;
    Ok(())
}

/// Validates an update-medicine payload.
pub fn validate_medicine_update(payload: &MedicineUpdate) -> ValidationResult<()> {
    validate_medicine_name(&payload.nama_obat)?;
    validate_category(&payload.jenis)?;
    validate_unit_price(payload.harga)?;
    validate_stock(payload.stok)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
