//! Redo Invalidation
//!
//! This example shows the one irreversible rule of the navigator:
//! visiting a new page discards the forward (redo) stack for good.
//!
//! Run with: cargo run --example redo_invalidation

use waypoint::run;

fn main() {
    println!("=== Redo Invalidation ===\n");

    let script = [
        "Visit About",
        "Visit Gallery",
        "Back",
        "Visit Contact",
        "Forward",
    ];

    println!("Script:");
    for raw in &script {
        println!("  {raw}");
    }

    let page = run(script).unwrap();

    println!("\nFinal page: {page}");
    println!("\nGoing Back from Gallery made Gallery redoable. Visiting");
    println!("Contact then cleared the forward stack, so the trailing");
    println!("Forward had nowhere to go and the session stayed on Contact.");

    println!("\n=== Example Complete ===");
}
