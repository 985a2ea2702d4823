//! # Policy Module
//!
//! Defines AccountPolicy - the per-account deposit multiplier and
//! withdrawal fee. The two behavioral variants (interest-reward deposits,
//! fee-charged withdrawals) are plain numeric tweaks, so they live in one
//! value object chosen at account creation instead of a type hierarchy.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Interest multiplier for reward accounts: deposits are credited at 105%.
pub const INTEREST_MULTIPLIER: Decimal = dec!(1.05);

/// Behavioral knobs for an account, fixed at creation.
///
/// # Examples
/// ```
/// use minibank_core::AccountPolicy;
/// use rust_decimal_macros::dec;
///
/// let standard = AccountPolicy::standard();
/// assert_eq!(standard.credited(dec!(100)), dec!(100));
///
/// let reward = AccountPolicy::interest_reward();
/// assert_eq!(reward.credited(dec!(100)), dec!(105.00));
///
/// let saving = AccountPolicy::saving(dec!(5));
/// assert_eq!(saving.debited(dec!(90)), dec!(95));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountPolicy {
    /// Factor applied to every deposited amount
    pub deposit_multiplier: Decimal,
    /// Fixed surcharge added to every withdrawal
    pub withdrawal_fee: Decimal,
}

impl AccountPolicy {
    /// Plain account: deposits credit at face value, withdrawals cost nothing extra
    pub fn standard() -> Self {
        Self {
            deposit_multiplier: Decimal::ONE,
            withdrawal_fee: Decimal::ZERO,
        }
    }

    /// Interest-reward account: every deposit is credited at 105%
    pub fn interest_reward() -> Self {
        Self {
            deposit_multiplier: INTEREST_MULTIPLIER,
            withdrawal_fee: Decimal::ZERO,
        }
    }

    /// Saving account: 105% deposit credit plus a fixed fee on every withdrawal
    pub fn saving(fee: Decimal) -> Self {
        Self {
            deposit_multiplier: INTEREST_MULTIPLIER,
            withdrawal_fee: fee,
        }
    }

    /// Amount actually credited when `amount` is deposited
    pub fn credited(&self, amount: Decimal) -> Decimal {
        amount * self.deposit_multiplier
    }

    /// Amount actually debited when `amount` is withdrawn
    pub fn debited(&self, amount: Decimal) -> Decimal {
        amount + self.withdrawal_fee
    }

    /// True when deposits and withdrawals pass amounts through unchanged
    pub fn is_standard(&self) -> bool {
        self.deposit_multiplier == Decimal::ONE && self.withdrawal_fee.is_zero()
    }
}

impl Default for AccountPolicy {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for AccountPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x{} deposit, ${:.2} withdrawal fee",
            self.deposit_multiplier, self.withdrawal_fee
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_standard_passes_amounts_through() {
        let policy = AccountPolicy::standard();
        assert_eq!(policy.credited(dec!(500)), dec!(500));
        assert_eq!(policy.debited(dec!(500)), dec!(500));
        assert!(policy.is_standard());
    }

    #[test]
    fn test_interest_reward_credits_105_percent() {
        let policy = AccountPolicy::interest_reward();
        assert_eq!(policy.credited(dec!(100)), dec!(105.00));
        assert_eq!(policy.debited(dec!(100)), dec!(100));
        assert!(!policy.is_standard());
    }

    #[test]
    fn test_saving_adds_fee_on_debit() {
        let policy = AccountPolicy::saving(dec!(5));
        assert_eq!(policy.credited(dec!(100)), dec!(105.00));
        assert_eq!(policy.debited(dec!(90)), dec!(95));
    }

    #[test]
    fn test_default_is_standard() {
        assert_eq!(AccountPolicy::default(), AccountPolicy::standard());
    }

    #[test]
    fn test_negative_amounts_pass_through() {
        // No validation anywhere in the toy model: a negative deposit
        // "credits" a negative amount.
        let policy = AccountPolicy::interest_reward();
        assert_eq!(policy.credited(dec!(-100)), dec!(-105.00));
    }
}
