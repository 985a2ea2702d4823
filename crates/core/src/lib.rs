//! Minibank Core - Domain types
//!
//! This crate contains the account-ledger toy model:
//! - `Account`: named holder of a mutable balance with deposit, withdraw, transfer
//! - `AccountPolicy`: per-account deposit multiplier and withdrawal fee
//! - `LedgerError`: the insufficient-balance condition
//! - `TransferReceipt`: both legs of a completed transfer

pub mod account;
pub mod error;
pub mod policy;

pub use account::{Account, TransferReceipt};
pub use error::{LedgerError, LedgerResult};
pub use policy::{AccountPolicy, INTEREST_MULTIPLIER};
