// ============================================================================
// Basic Usage Example
// ============================================================================

use value_objects::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Value Objects Example ===\n");

    // Numbers
    println!("Numbers:");
    let a = Integer::new(34)?;
    let b = Integer::new(-3)?;
    println!("  {} / {} = {} (floored)", a, b, a.divide(&b)?);
    println!("  {} rem {} = {} (sign of the dividend)", a, b, a.remainder(&b)?);

    let x = Real::new(7)?;
    let y = Real::new(2.0)?;
    println!("  {} / {} = {}", x, y, x.divide(&y)?);

    if let Err(err) = a.divide(&Integer::zero()) {
        println!("  {} / 0 -> {}", a, err);
    }

    let mixed = AnyNumber::from(a).add(&AnyNumber::from(y));
    if let Err(err) = mixed {
        println!("  {} + {} -> {}", a, y, err);
    }

    // Money
    println!("\nMoney:");
    let net = Money::new(10_000, Currency::Eur)?;
    let gross = net.multiply(1.19)?;
    println!("  net {} * 1.19 = {}", net, gross);

    let (deposit, balance) = gross.split(1, 2)?;
    println!("  split 1:2 -> deposit {}, balance {}", deposit, balance);

    let dollars = Money::new(500, Currency::Usd)?;
    if let Err(err) = gross.add(&dollars) {
        println!("  {} + {} -> [{}] {}", gross, dollars, err.code(), err);
    }

    if let Err(err) = Money::new(1, Currency::Eur)?.split(1, 1) {
        println!("  1 € split 1:1 -> [{}] {}", err.code(), err);
    }

    Ok(())
}
