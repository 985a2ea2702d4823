//! # Error Module
//!
//! Domain errors for the Minibank ledger, built on thiserror.

use rust_decimal::Decimal;
use thiserror::Error;

/// Core ledger errors.
///
/// The sufficiency check is the only error-producing operation in the
/// system: deposits never fail, and malformed amounts (negative, zero)
/// are accepted without complaint.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// The requested debit exceeds the account's current balance.
    #[error("Sorry, account '{account}' only has a balance of ${balance:.2}")]
    InsufficientBalance { account: String, balance: Decimal },
}

/// Result type alias with LedgerError
pub type LedgerResult<T> = Result<T, LedgerError>;

impl LedgerError {
    pub fn insufficient_balance(account: &str, balance: Decimal) -> Self {
        LedgerError::InsufficientBalance {
            account: account.to_string(),
            balance,
        }
    }

    pub fn is_insufficient_balance(&self) -> bool {
        matches!(self, LedgerError::InsufficientBalance { .. })
    }
}
