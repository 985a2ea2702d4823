//! # Example 03: Transfers
//!
//! Transfers between accounts:
//! 1. A clean transfer between two standard accounts
//! 2. A rejected transfer - neither balance moves
//! 3. A saving-to-interest transfer, where the fee stays on the source
//!    and the destination credits 105% - value is not conserved, and the
//!    receipt says so
//!
//! Run with: `cargo run -p minibank-demos --example 03_transfers`

use minibank_core::{Account, TransferReceipt};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn print_receipt(receipt: &TransferReceipt) {
    println!("Transfer Complete!");
    println!(
        "  {} -> {}: ${:.2} requested, ${:.2} debited, ${:.2} credited",
        receipt.from, receipt.to, receipt.amount, receipt.debited, receipt.credited
    );
    if !receipt.is_value_conserving() {
        println!("  (value not conserved - fee and interest apply per account)");
    }
}

fn main() {
    tracing_subscriber::fmt::init();

    println!("=== Example 03: Transfers ===\n");

    let mut a = Account::new("A", dec!(100.00));
    let mut b = Account::new("B", Decimal::ZERO);

    println!("\n********\n\nBeginning Transfer of $50, A -> B...");
    match a.transfer_to(dec!(50), &mut b) {
        Ok(receipt) => print_receipt(&receipt),
        Err(err) => println!("Transfer Interrupted: {}", err),
    }
    println!("{}", a);
    println!("{}", b);

    println!("\n********\n\nBeginning Transfer of $500, A -> B...");
    match a.transfer_to(dec!(500), &mut b) {
        Ok(receipt) => print_receipt(&receipt),
        Err(err) => println!("Transfer Interrupted: {}", err),
    }
    println!("{}", a);
    println!("{}", b);

    let mut carol = Account::saving("Carol", dec!(200.00), dec!(5));
    let mut bob = Account::interest_reward("Bob", Decimal::ZERO);

    println!("\n********\n\nBeginning Transfer of $100, Carol -> Bob...");
    match carol.transfer_to(dec!(100), &mut bob) {
        Ok(receipt) => print_receipt(&receipt),
        Err(err) => println!("Transfer Interrupted: {}", err),
    }
    println!("{}", carol);
    println!("{}", bob);
}
