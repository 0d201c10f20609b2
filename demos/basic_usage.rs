// ============================================================================
// Basic Usage Example
// ============================================================================

use num2persian::prelude::*;
use num_bigint::BigInt;
use rust_decimal::Decimal;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== num2persian Example ===\n");

    println!("Cardinals:");
    for n in [0i64, 21, 1234, -500, 1_000_000, i64::MIN] {
        println!("  {:>22} -> {}", n, convert(n));
    }

    println!("\nBeyond the named scale tiers:");
    for zeros in [33usize, 36, 39] {
        let value: BigInt = format!("1{}", "0".repeat(zeros)).parse().unwrap_or_default();
        println!("  10^{} -> {}", zeros, convert_arbitrary_precision(&value));
    }

    println!("\nDecimals:");
    println!("  3.14 (2)  -> {}", convert_decimal(3.14, 2));
    println!("  0.999 (2) -> {}", convert_decimal(0.999, 2));
    println!("  1.005 (2) -> {}", convert_rust_decimal(Decimal::new(1005, 3), 2));
    println!("  NaN       -> {}", convert_decimal(f64::NAN, 2));

    println!("\nOrdinals:");
    for n in [1i64, 2, 3, 21, 23, 100] {
        println!("  {:>3} -> {}", n, convert_ordinal(n));
    }

    println!("\nCurrency:");
    println!("  {}", to_toman(1_500_000));
    println!("  {}", to_rial(15_000_000));
    println!("  {}", toman_to_rial(1000));

    println!("\nText input:");
    for text in ["1234567", "42.5", "12.34.56"] {
        match convert_from_text(text) {
            Ok(words) => println!("  {:?} -> {}", text, words),
            Err(err) => println!("  {:?} -> error: {}", text, err),
        }
    }

    let converter = match PersianConverter::try_new(ConverterConfig::accounting()) {
        Ok(converter) => converter,
        Err(reason) => {
            eprintln!("invalid configuration: {}", reason);
            return;
        }
    };
    println!("\nAccounting converter:");
    println!("  {}", converter.decimal(1250.5));
    println!("  {}", converter.currency(75_000));
}
