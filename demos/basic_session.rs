//! Basic Navigation Session
//!
//! This example walks a session through a short browsing script.
//!
//! Key concepts:
//! - Parsing raw command strings once at the boundary
//! - Pure state threading through a fold
//! - No-op Back/Forward on empty stacks
//!
//! Run with: cargo run --example basic_session

use waypoint::{Command, Session};

fn main() {
    println!("=== Basic Navigation Session ===\n");

    let script = [
        "Back",
        "Visit About Us",
        "Visit Gallery",
        "Back",
        "Forward",
        "Back",
        "Back",
    ];

    let mut session = Session::new();
    println!("Starting on: {}\n", session.current_page());

    for raw in script {
        let command: Command = raw.parse().unwrap();
        session.apply(&command);
        println!("{raw:<16} -> {}", session.current_page());
    }

    println!("\nFinal page: {}", session.current_page());

    let path: Vec<&str> = session
        .trail()
        .get_path()
        .into_iter()
        .map(|page| page.name())
        .collect();
    println!("Path taken:  {}", path.join(" -> "));
    println!(
        "Moves made:  {} (the first Back was a no-op and left no trace)",
        session.trail().moves().len()
    );

    println!("\n=== Example Complete ===");
}
