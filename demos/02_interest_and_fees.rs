//! # Example 02: Interest and Fees
//!
//! The two policy variants:
//! 1. Interest-reward account - deposits credited at 105%
//! 2. Saving account - 105% deposit credit plus a fixed withdrawal fee
//!
//! Run with: `cargo run -p minibank-demos --example 02_interest_and_fees`

use minibank_core::Account;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn main() {
    tracing_subscriber::fmt::init();

    println!("=== Example 02: Interest and Fees ===\n");

    let mut bob = Account::interest_reward("Bob", Decimal::ZERO);
    println!("{}", bob);

    println!("\nDepositing $100 (credited at 105%)...");
    bob.deposit(dec!(100));
    println!("Deposit Complete.");
    println!("{}", bob);

    let mut carol = Account::saving("Carol", dec!(100.00), dec!(5));
    println!("\n{}", carol);
    println!("Withdrawal fee: ${:.2}", carol.policy().withdrawal_fee);

    // 90 + 5 fee = 95, covered by the balance of 100
    println!("\nWithdrawing $90 (costs $95 with the fee)...");
    match carol.withdraw(dec!(90)) {
        Ok(_) => {
            println!("Withdraw Complete.");
            println!("{}", carol);
        }
        Err(err) => println!("Withdraw Interrupted: {}", err),
    }

    // 10 + 5 fee = 15, but only 5 remains
    println!("\nWithdrawing $10 (costs $15 with the fee)...");
    match carol.withdraw(dec!(10)) {
        Ok(_) => {
            println!("Withdraw Complete.");
            println!("{}", carol);
        }
        Err(err) => println!("Withdraw Interrupted: {}", err),
    }
    println!("{}", carol);
}
