// ============================================================================
// Cancellation Example
// ============================================================================
//
// Run with: cargo run --example cancellation --features logging

use shadow_real::prelude::*;
use std::sync::Arc;

type R = Real<Single, Tracked>;

fn main() -> Result<(), AuditError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Shadow Real Example ===\n");

    let tolerance = Tolerance::new(1e-6, Tolerance::DEFAULT_RELATIVE)?;
    let mut report = DriftReport::with_observer(tolerance, Arc::new(LoggingObserver));

    // Difference of squares, two algebraically equal formulations
    let c = R::new(100.00001);
    let d = R::new(100.0);
    let e = c * c - d * d;
    let f = (c + d) * (c - d);

    println!("c*c - d*d     = {e}");
    println!("(c+d)*(c-d)   = {f}");
    let _ = report.record("c*c - d*d", e);
    let _ = report.record("(c+d)*(c-d)", f);

    // A small addend absorbed by a large one
    let a = R::new(1e6);
    let b = R::new(1.2);
    let one = (a + b) - a;
    println!("(a+b) - a     = {one}");
    let _ = report.record("(a+b) - a", one);

    // Naive accumulation
    let mut acc = R::new(0.0);
    for _ in 0..10_000 {
        acc += 0.1_f32;
    }
    println!("sum of 0.1    = {acc}");
    let _ = report.record("naive sum", acc);

    println!("\n=== Drift Report ===");
    print!("{report}");

    if let Some(worst) = report.worst() {
        println!(
            "\nWorst: {} (relative error {:e})",
            worst.label,
            worst.error().abs() / worst.exact.abs()
        );
    }

    match report.check() {
        Ok(()) => println!("All samples within tolerance"),
        Err(error) => println!("First violation: {error}"),
    }

    Ok(())
}
