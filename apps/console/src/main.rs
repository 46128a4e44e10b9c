//! # bodega Console Menu
//!
//! The interactive store front. Everything here is presentation: prompts,
//! parsing, and printing. Every decision that matters is a call into
//! `bodega-core`.
//!
//! ## Session Flow
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │  --- Store Menu ---                                       │
//! │  1. List all products in store                            │
//! │  2. Show total amount in store                            │
//! │  3. Make an order                                         │
//! │  4. Quit                                                  │
//! │                                                           │
//! │  Option 3 collects (product #, amount) pairs until an     │
//! │  empty line, then submits them as ONE order batch.        │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! Core errors are printed as-is and the menu re-prompts; the app never
//! retries on its own.

use std::io::{self, Write};

use tracing::debug;
use tracing_subscriber::EnvFilter;

use bodega_core::{CoreResult, Money, OrderLine, Product, Promotion, Store};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs stay out of the menu unless RUST_LOG asks for them
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let mut store = seed_inventory()?;
    debug!(products = store.len(), "inventory seeded");

    run_menu(&mut store)?;
    Ok(())
}

// =============================================================================
// Demo Inventory
// =============================================================================

/// The initial stock: stocked electronics, a non-stocked license, and a
/// per-order-limited shipping fee, with a promotion on three of them.
fn seed_inventory() -> CoreResult<Store> {
    let mut macbook = Product::new("MacBook Air M2", Money::from_major_minor(1450, 0), 100)?;
    macbook.set_promotion(Some(Promotion::half_price_on_pairs("Second Half Price!")));

    let mut earbuds =
        Product::new("Bose QuietComfort Earbuds", Money::from_major_minor(250, 0), 500)?;
    earbuds.set_promotion(Some(Promotion::one_free_per_three("Third One Free!")));

    let pixel = Product::new("Google Pixel 7", Money::from_major_minor(500, 0), 250)?;

    let mut license = Product::non_stocked("Windows License", Money::from_major_minor(125, 0))?;
    license.set_promotion(Some(Promotion::percent_off("30% off!", 30)?));

    let shipping = Product::limited("Shipping", Money::from_major_minor(10, 0), 250, 1)?;

    Ok(Store::new(vec![macbook, earbuds, pixel, license, shipping]))
}

// =============================================================================
// Menu Loop
// =============================================================================

fn run_menu(store: &mut Store) -> io::Result<()> {
    loop {
        println!();
        println!("--- Store Menu ---");
        println!("1. List all products in store");
        println!("2. Show total amount in store");
        println!("3. Make an order");
        println!("4. Quit");

        let choice = match prompt("Choose an option (1-4): ")? {
            Some(line) => line,
            None => break, // stdin closed
        };
        debug!(choice = %choice, "menu selection");
        println!("-----");

        match choice.as_str() {
            "1" => list_products(store),
            "2" => println!("Total of {} items in store", store.total_quantity()),
            "3" => make_order(store)?,
            "4" => break,
            _ => println!("Please pick an option between 1 and 4."),
        }
    }

    Ok(())
}

fn list_products(store: &Store) {
    for (index, product) in store.active_products().iter().enumerate() {
        println!("{}. {}", index + 1, product.describe());
    }
}

/// Collects order lines until an empty input, then submits them as one
/// batch. Selection is by the 1-based number shown by [`list_products`].
fn make_order(store: &mut Store) -> io::Result<()> {
    list_products(store);
    println!("-----");
    println!("When you want to finish the order, enter an empty line.");

    let product_ids: Vec<_> = store.active_products().iter().map(|p| p.id()).collect();
    let mut lines: Vec<OrderLine> = Vec::new();

    loop {
        let number = match prompt("Which product # do you want? ")? {
            Some(line) if !line.is_empty() => line,
            _ => break,
        };
        let amount = match prompt("How many do you want? ")? {
            Some(line) if !line.is_empty() => line,
            _ => break,
        };

        let index: usize = match number.parse() {
            Ok(n) => n,
            Err(_) => {
                println!("Product # must be a number.");
                continue;
            }
        };
        let Some(product_id) = index.checked_sub(1).and_then(|i| product_ids.get(i)) else {
            println!("There is no product #{}.", number);
            continue;
        };
        let quantity: i64 = match amount.parse() {
            Ok(n) => n,
            Err(_) => {
                println!("Amount must be a whole number.");
                continue;
            }
        };

        lines.push(OrderLine::new(*product_id, quantity));
        println!("Product added to the order!");
    }

    if lines.is_empty() {
        return Ok(());
    }

    debug!(lines = lines.len(), "submitting order");
    match store.order(&lines) {
        Ok(total) => println!("Order placed! Total: {}", total),
        Err(err) => println!("Order failed: {}", err),
    }

    Ok(())
}

// =============================================================================
// Input Helpers
// =============================================================================

/// Prints a prompt and reads one trimmed line. `None` means stdin closed.
fn prompt(message: &str) -> io::Result<Option<String>> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

// =============================================================================
// Unit Tests
// =============================================================================
