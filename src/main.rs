//! Order Desk - Binary Entry Point
//!
//! Runs a scripted admin/customer session against a fresh desk and prints
//! what an operator would see. `--verbose` (or `RUST_LOG=order_desk=debug`)
//! adds the lookup trail on stderr.

use clap::Parser;

use order_desk::logging::init_logger;
use order_desk::types::price::parse_price;
use order_desk::{DeskConfig, DeskError, OrderDesk};

#[derive(Parser, Debug)]
#[command(name = "order-desk")]
#[command(about = "Scripted order desk session")]
struct Cli {
    #[arg(short, long, help = "Enable debug logging")]
    verbose: bool,

    #[arg(long, default_value = "64", help = "Pre-allocated slots per collection")]
    capacity: usize,
}

/// Print an outcome; empty results read as a note, rejections as an error
fn report<T>(result: Result<T, DeskError>, on_ok: impl FnOnce(T)) {
    match result {
        Ok(value) => on_ok(value),
        Err(e) if e.is_empty_result() => println!("{}", e),
        Err(e) => println!("Error: {}", e),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    println!("===========================================");
    println!("  Order Desk - scripted session");
    println!("===========================================");

    let config = DeskConfig::default()
        .with_customer_capacity(cli.capacity)
        .with_product_capacity(cli.capacity)
        .with_order_capacity(cli.capacity);
    let mut desk = OrderDesk::with_config(&config);

    println!("\n[admin] registering customers and products");
    for (id, name) in [(1, "Alice"), (2, "Bob"), (-3, "Carol")] {
        let customer = desk.add_customer(id, name);
        println!("Customer {} added.", customer.name);
    }
    for (id, name, price) in [(10, "Widget", "9.99"), (5, "Bolt", "0.125"), (10, "Duplicate", "1")] {
        let Some(price) = parse_price(price) else {
            println!("Invalid price for product {}.", id);
            continue;
        };
        report(desk.add_product(id, name, price), |p| {
            println!("Product {} added.", p.name)
        });
    }

    println!("\n--- Customers ---");
    report(desk.list_customers(), |customers| {
        customers.iter().for_each(|c| println!("{}", c))
    });

    println!("\n--- Products ---");
    report(desk.list_products(), |products| {
        products.iter().for_each(|p| println!("{}", p))
    });

    println!("\n[customer] placing orders");
    for (order_id, customer_id, product_id) in [(100, 1, 10), (101, -3, 5), (102, 3, 10), (103, 1, 99)] {
        report(desk.place_order(order_id, customer_id, product_id), |o| {
            println!(
                "Order {} placed by Customer {} for Product {}.",
                o.order_id, o.customer_id, o.product_id
            )
        });
    }

    println!("\n--- Orders ---");
    report(desk.list_orders(), |orders| {
        orders.iter().for_each(|o| println!("{}", o))
    });

    println!("\n[customer] undo");
    report(desk.undo_last_order(), |undone| println!("{}", undone));

    for customer_id in [1, 2] {
        println!("\n--- Order History for Customer {} ---", customer_id);
        report(desk.customer_history(customer_id), |orders| {
            orders.iter().for_each(|o| println!("{}", o.history_line()))
        });
    }

    println!(
        "\n{} customers, {} products, {} orders, {} undo records",
        desk.customers().len(),
        desk.products().len(),
        desk.orders().len(),
        desk.undo_stack().len()
    );
    match desk.ledger_digest_hex() {
        Ok(hex) => println!("Ledger digest: {}", hex),
        Err(e) => println!("Error: {}", e),
    }
}
