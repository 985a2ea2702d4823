//! # Minibank Demos
//!
//! This crate contains example scenarios exercising the Minibank account toy.
//!
//! ## Available Examples
//!
//! 1. **01_account_basics** - Create an account, deposit, withdraw, and hit
//!    the insufficient-balance condition
//! 2. **02_interest_and_fees** - Interest-reward deposits at 105% and
//!    fee-charged withdrawals on a saving account
//! 3. **03_transfers** - Transfers between accounts, including a rejected one
//!    and a value-non-conserving one
//!
//! ## Running Examples
//!
//! ```bash
//! cargo run -p minibank-demos --example 01_account_basics
//! cargo run -p minibank-demos --example 02_interest_and_fees
//! cargo run -p minibank-demos --example 03_transfers
//! ```

// This crate only contains examples, no library code.
