//! # Account Module
//!
//! Defines Account - a named holder of a mutable balance, plus the four
//! ledger operations: deposit, sufficiency check, withdraw, transfer.
//!
//! Balances only move through the operations; the fields themselves are
//! private. Errors are returned, never swallowed: callers that want the
//! original "Withdraw Interrupted" behavior match on the `Err` and print.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{info, warn};

use crate::error::{LedgerError, LedgerResult};
use crate::policy::AccountPolicy;

/// A named account holding a balance.
///
/// The name is fixed at creation. The balance is mutated only by
/// [`deposit`](Account::deposit), [`withdraw`](Account::withdraw), and
/// [`transfer_to`](Account::transfer_to).
///
/// # Examples
/// ```
/// use minibank_core::Account;
/// use rust_decimal_macros::dec;
///
/// let mut alice = Account::new("Alice", dec!(1000));
/// alice.deposit(dec!(500));
/// assert_eq!(alice.balance(), dec!(1500));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Account holder name, immutable after creation
    name: String,
    /// Current balance
    balance: Decimal,
    /// Deposit/withdrawal behavior, fixed at creation
    policy: AccountPolicy,
    /// Creation time
    created_at: DateTime<Utc>,
}

impl Account {
    /// Create a standard account.
    ///
    /// Any initial balance is accepted, including zero and negative -
    /// the toy model performs no validation.
    pub fn new(name: impl Into<String>, initial_balance: Decimal) -> Self {
        Self::with_policy(name, initial_balance, AccountPolicy::standard())
    }

    /// Create an account with an explicit policy.
    pub fn with_policy(
        name: impl Into<String>,
        initial_balance: Decimal,
        policy: AccountPolicy,
    ) -> Self {
        let account = Self {
            name: name.into(),
            balance: initial_balance,
            policy,
            created_at: Utc::now(),
        };
        info!(
            account = %account.name,
            balance = %account.balance,
            "account created"
        );
        account
    }

    /// Create an interest-reward account (deposits credited at 105%).
    pub fn interest_reward(name: impl Into<String>, initial_balance: Decimal) -> Self {
        Self::with_policy(name, initial_balance, AccountPolicy::interest_reward())
    }

    /// Create a saving account (105% deposit credit, fixed withdrawal fee).
    pub fn saving(name: impl Into<String>, initial_balance: Decimal, fee: Decimal) -> Self {
        Self::with_policy(name, initial_balance, AccountPolicy::saving(fee))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn policy(&self) -> &AccountPolicy {
        &self.policy
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Deposit `amount`, returning the new balance.
    ///
    /// The credited amount is `amount * deposit_multiplier` - face value
    /// for standard accounts, 105% for interest-reward and saving
    /// accounts. Never fails; negative and zero amounts are accepted and
    /// applied as-is (source-faithful, no validation).
    pub fn deposit(&mut self, amount: Decimal) -> Decimal {
        let credited = self.policy.credited(amount);
        self.balance += credited;
        info!(
            account = %self.name,
            amount = %amount,
            credited = %credited,
            balance = %self.balance,
            "deposit complete"
        );
        self.balance
    }

    /// Check that the balance covers a debit of `amount`.
    ///
    /// Succeeds at exact equality. This is the only operation that
    /// produces an error.
    pub fn ensure_funds(&self, amount: Decimal) -> LedgerResult<()> {
        if self.balance >= amount {
            Ok(())
        } else {
            Err(LedgerError::insufficient_balance(&self.name, self.balance))
        }
    }

    /// Withdraw `amount`, returning the new balance.
    ///
    /// The debited total is `amount + withdrawal_fee`; the sufficiency
    /// check runs against that total. On failure the balance is
    /// untouched.
    pub fn withdraw(&mut self, amount: Decimal) -> LedgerResult<Decimal> {
        let debited = self.policy.debited(amount);
        if let Err(err) = self.ensure_funds(debited) {
            info!(
                account = %self.name,
                amount = %amount,
                required = %debited,
                balance = %self.balance,
                "withdraw interrupted"
            );
            return Err(err);
        }
        self.balance -= debited;
        info!(
            account = %self.name,
            amount = %amount,
            debited = %debited,
            balance = %self.balance,
            "withdraw complete"
        );
        Ok(self.balance)
    }

    /// Transfer `amount` to `dest`, returning a receipt for both legs.
    ///
    /// The sequence mirrors the toy model exactly: an outer sufficiency
    /// check on the bare `amount`, then a withdrawal (which re-checks
    /// with this account's fee applied), then a deposit of the original
    /// `amount` into `dest` (which applies the destination's own
    /// multiplier). Value is therefore NOT conserved when either side
    /// has a non-standard policy; the receipt records both legs and a
    /// warning is logged when they differ. On any failure the
    /// destination is never touched.
    pub fn transfer_to(
        &mut self,
        amount: Decimal,
        dest: &mut Account,
    ) -> LedgerResult<TransferReceipt> {
        info!(
            from = %self.name,
            to = %dest.name,
            amount = %amount,
            "beginning transfer"
        );
        if let Err(err) = self.ensure_funds(amount) {
            info!(from = %self.name, to = %dest.name, "transfer interrupted");
            return Err(err);
        }

        let before = self.balance;
        self.withdraw(amount)?;
        let debited = before - self.balance;

        dest.deposit(amount);
        let credited = dest.policy.credited(amount);

        let receipt = TransferReceipt {
            from: self.name.clone(),
            to: dest.name.clone(),
            amount,
            debited,
            credited,
        };
        if !receipt.is_value_conserving() {
            warn!(
                from = %self.name,
                to = %dest.name,
                debited = %debited,
                credited = %credited,
                "transfer did not conserve value"
            );
        }
        info!(from = %self.name, to = %dest.name, "transfer complete");
        Ok(receipt)
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Account '{}' balance = ${:.2}", self.name, self.balance)
    }
}

/// Record of a completed transfer.
///
/// `debited` is what actually left the source (`amount` plus the
/// source's fee); `credited` is what actually landed (`amount` times the
/// destination's multiplier). They coincide only between two standard
/// accounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferReceipt {
    /// Source account name
    pub from: String,
    /// Destination account name
    pub to: String,
    /// Requested transfer amount
    pub amount: Decimal,
    /// Total removed from the source
    pub debited: Decimal,
    /// Total added to the destination
    pub credited: Decimal,
}

impl TransferReceipt {
    /// True when what left the source equals what reached the destination.
    pub fn is_value_conserving(&self) -> bool {
        self.debited == self.credited
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_deposit_adds_amount() {
        let mut alice = Account::new("Alice", dec!(1000.00));
        let balance = alice.deposit(dec!(500));
        assert_eq!(balance, dec!(1500.00));
        assert_eq!(alice.balance(), dec!(1500.00));
    }

    #[test]
    fn test_interest_reward_deposit_credits_105_percent() {
        let mut bob = Account::interest_reward("Bob", Decimal::ZERO);
        let balance = bob.deposit(dec!(100));
        assert_eq!(balance, dec!(105.00));
    }

    #[test]
    fn test_withdraw_within_balance() {
        let mut alice = Account::new("Alice", dec!(1500.00));
        let balance = alice.withdraw(dec!(500)).unwrap();
        assert_eq!(balance, dec!(1000.00));
    }

    #[test]
    fn test_withdraw_over_balance_leaves_balance_unchanged() {
        let mut alice = Account::new("Alice", dec!(1500.00));
        let err = alice.withdraw(dec!(2000)).unwrap_err();
        assert!(err.is_insufficient_balance());
        assert_eq!(alice.balance(), dec!(1500.00));
    }

    #[test]
    fn test_withdraw_exact_balance_succeeds() {
        let mut alice = Account::new("Alice", dec!(100));
        assert_eq!(alice.withdraw(dec!(100)).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_saving_withdraw_charges_fee() {
        let mut carol = Account::saving("Carol", dec!(100), dec!(5));
        let balance = carol.withdraw(dec!(90)).unwrap();
        assert_eq!(balance, dec!(5));
    }

    #[test]
    fn test_saving_withdraw_fails_when_fee_breaks_balance() {
        // 96 + 5 = 101 > 100
        let mut carol = Account::saving("Carol", dec!(100), dec!(5));
        let err = carol.withdraw(dec!(96)).unwrap_err();
        assert!(err.is_insufficient_balance());
        assert_eq!(carol.balance(), dec!(100));
    }

    #[test]
    fn test_saving_withdraw_to_exactly_zero() {
        let mut carol = Account::saving("Carol", dec!(100), dec!(5));
        assert_eq!(carol.withdraw(dec!(95)).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_transfer_moves_amount_between_standard_accounts() {
        let mut a = Account::new("A", dec!(100));
        let mut b = Account::new("B", Decimal::ZERO);
        let receipt = a.transfer_to(dec!(50), &mut b).unwrap();
        assert_eq!(a.balance(), dec!(50));
        assert_eq!(b.balance(), dec!(50));
        assert!(receipt.is_value_conserving());
        assert_eq!(receipt.debited, dec!(50));
        assert_eq!(receipt.credited, dec!(50));
    }

    #[test]
    fn test_transfer_insufficient_leaves_both_untouched() {
        let mut a = Account::new("A", dec!(40));
        let mut b = Account::new("B", dec!(10));
        let err = a.transfer_to(dec!(50), &mut b).unwrap_err();
        assert!(err.is_insufficient_balance());
        assert_eq!(a.balance(), dec!(40));
        assert_eq!(b.balance(), dec!(10));
    }

    #[test]
    fn test_transfer_fee_stays_on_source_ledger() {
        // Saving source pays amount + fee; standard destination receives
        // the bare amount. The fee is not transferred.
        let mut carol = Account::saving("Carol", dec!(200), dec!(5));
        let mut dave = Account::new("Dave", Decimal::ZERO);
        let receipt = carol.transfer_to(dec!(100), &mut dave).unwrap();
        assert_eq!(carol.balance(), dec!(95));
        assert_eq!(dave.balance(), dec!(100));
        assert_eq!(receipt.debited, dec!(105));
        assert_eq!(receipt.credited, dec!(100));
        assert!(!receipt.is_value_conserving());
    }

    #[test]
    fn test_transfer_to_interest_account_credits_105_percent() {
        let mut a = Account::new("A", dec!(100));
        let mut bob = Account::interest_reward("Bob", Decimal::ZERO);
        let receipt = a.transfer_to(dec!(100), &mut bob).unwrap();
        assert_eq!(a.balance(), Decimal::ZERO);
        assert_eq!(bob.balance(), dec!(105.00));
        assert_eq!(receipt.debited, dec!(100));
        assert_eq!(receipt.credited, dec!(105.00));
        assert!(!receipt.is_value_conserving());
    }

    #[test]
    fn test_transfer_blocked_by_fee_never_credits_destination() {
        // Balance covers the bare amount but not amount + fee: the outer
        // check passes, the inner withdrawal fails, and the error
        // propagates before the destination is touched.
        let mut carol = Account::saving("Carol", dec!(100), dec!(5));
        let mut dave = Account::new("Dave", Decimal::ZERO);
        let err = carol.transfer_to(dec!(98), &mut dave).unwrap_err();
        assert!(err.is_insufficient_balance());
        assert_eq!(carol.balance(), dec!(100));
        assert_eq!(dave.balance(), Decimal::ZERO);
    }

    #[test]
    fn test_negative_deposit_accepted() {
        // The toy model has no validation: a negative deposit debits.
        let mut alice = Account::new("Alice", dec!(100));
        assert_eq!(alice.deposit(dec!(-40)), dec!(60));
    }

    #[test]
    fn test_negative_initial_balance_accepted() {
        let alice = Account::new("Alice", dec!(-25));
        assert_eq!(alice.balance(), dec!(-25));
    }

    #[test]
    fn test_display_formats_two_decimals() {
        let alice = Account::new("Alice", dec!(1500));
        assert_eq!(alice.to_string(), "Account 'Alice' balance = $1500.00");
    }
}
