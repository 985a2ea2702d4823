//! # Example 01: Account Basics
//!
//! The plain-account walk-through:
//! 1. Create an account with an opening balance
//! 2. Deposit and watch the balance move
//! 3. Withdraw within the balance
//! 4. Overdraw and see the withdrawal rejected, balance untouched
//!
//! Run with: `cargo run -p minibank-demos --example 01_account_basics`

use minibank_core::Account;
use rust_decimal_macros::dec;

fn main() {
    tracing_subscriber::fmt::init();

    println!("=== Example 01: Account Basics ===\n");

    let mut alice = Account::new("Alice", dec!(1000.00));
    println!("{}", alice);

    println!("\nDepositing $500...");
    alice.deposit(dec!(500));
    println!("Deposit Complete.");
    println!("{}", alice);

    println!("\nWithdrawing $600...");
    match alice.withdraw(dec!(600)) {
        Ok(_) => {
            println!("Withdraw Complete.");
            println!("{}", alice);
        }
        Err(err) => println!("Withdraw Interrupted: {}", err),
    }

    println!("\nWithdrawing $2000...");
    match alice.withdraw(dec!(2000)) {
        Ok(_) => {
            println!("Withdraw Complete.");
            println!("{}", alice);
        }
        Err(err) => println!("Withdraw Interrupted: {}", err),
    }
    println!("{}", alice);
}
