// Domain error types.
//
// - `PurchaseError`: business-rule rejections of a sale. Each one is shown
//   to the operator and, except `InvalidQuantity`, written to the
//   transaction log.
// - `InputError`: a line of operator input that did not parse or was out of
//   range. The line is discarded and the field is asked for again.
//
// Neither kind ends the session; only terminal I/O failures do, and those
// travel as `anyhow::Error`.

use thiserror::Error;

use crate::money::{Money, CURRENCY};

/// Why a purchase attempt was rejected. `name` is always the name as the
/// operator typed it, not the stored book name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PurchaseError {
    #[error("Book '{name}' not found in our inventory.")]
    NotFound { name: String },

    #[error("Invalid quantity. Please enter a positive quantity.")]
    InvalidQuantity { requested: i64 },

    #[error("Not enough money to complete the purchase.")]
    InsufficientFunds {
        name: String,
        required: Money,
        provided: Money,
    },

    #[error("Purchase failed: Not enough stock for '{name}'.")]
    InsufficientStock {
        name: String,
        requested: i64,
        available: u32,
    },
}

impl PurchaseError {
    /// Transaction log line for this rejection. Invalid quantities are
    /// reported but never logged.
    pub fn log_entry(&self) -> Option<String> {
        match self {
            PurchaseError::NotFound { name } => {
                Some(format!("Purchase failed: Book '{}' not found.", name))
            }
            PurchaseError::InvalidQuantity { .. } => None,
            PurchaseError::InsufficientFunds { name, .. } => {
                Some(format!("Purchase failed: Insufficient funds for '{}'.", name))
            }
            PurchaseError::InsufficientStock { name, .. } => {
                Some(format!("Purchase failed: Insufficient stock for '{}'.", name))
            }
        }
    }

    /// Second line shown under the headline, when the rejection carries
    /// figures worth showing.
    pub fn detail(&self) -> Option<String> {
        match self {
            PurchaseError::InsufficientFunds {
                required, provided, ..
            } => Some(format!(
                "Required: {} {cur}, Provided: {} {cur}.",
                required,
                provided,
                cur = CURRENCY
            )),
            PurchaseError::InsufficientStock {
                requested,
                available,
                ..
            } => Some(format!("Requested: {}, Available: {}.", requested, available)),
            _ => None,
        }
    }
}

/// A rejected line of operator input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("'{input}' is not a number")]
    NotANumber { input: String },

    #[error("'{input}' is out of range")]
    OutOfRange { input: String },
}
