// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic usage example for the nested configuration store.
//!
//! This example demonstrates:
//! - Loading a JSON document into a store
//! - Retrieving values with typed accessors (string, int, bool, float)
//! - Writing and deleting values by dot-separated path
//! - Saving the tree back to disk
//!
//! To run this example:
//! ```bash
//! cargo run --example basic_usage
//! ```

use nestcfg::prelude::*;

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    println!("=== nestcfg: Basic Usage ===\n");

    // Start from a JSON document
    let mut store = ConfigStore::new();
    store.load_str(
        r#"{
            "app": {"name": "DemoApp", "debug": "yes"},
            "server": {"host": "localhost", "port": 8080, "ratio": 0.75},
            "tags": ["alpha", "beta"]
        }"#,
        Format::Json,
    )?;
    println!("Configuration loaded.\n");

    // Example 1: Typed reads
    println!("--- Example 1: Typed Accessors ---");
    println!("app.name (string): {}", store.get_string("app.name")?);
    println!("server.port (int): {}", store.get_int("server.port")?);
    println!("server.ratio (float): {}", store.get_float("server.ratio")?);
    println!("app.debug (bool): {}", store.get_bool("app.debug")?);
    println!("tags (strings): {:?}", store.get_string_vec("tags")?);

    // Example 2: Failed conversions carry the key and types
    println!("\n--- Example 2: Conversion Errors ---");
    match store.get_int("app.name") {
        Ok(value) => println!("unexpected: {value}"),
        Err(e) => println!("app.name as int fails: {e}"),
    }

    // Example 3: Writing values, creating intermediate levels as needed
    println!("\n--- Example 3: Writing Values ---");
    store.set("server.tls.enabled", true)?;
    store.set("server.tls.port", 8443)?;
    println!(
        "server.tls.enabled = {}",
        store.get_bool("server.tls.enabled")?
    );
    println!("server.tls.port = {}", store.get_int("server.tls.port")?);

    // Example 4: Deleting a key
    println!("\n--- Example 4: Deleting Values ---");
    store.delete("app.debug")?;
    println!("app.debug exists after delete: {}", store.has("app.debug"));

    // Example 5: Case-insensitive lookups
    println!("\n--- Example 5: Case-Insensitive Lookups ---");
    let mut relaxed = ConfigStore::builder().case_sensitive(false).build();
    relaxed.set("Server.Host", "db.internal")?;
    println!("SERVER.HOST resolves to: {}", relaxed.get_string("SERVER.HOST")?);

    // Example 6: Saving the tree to disk
    println!("\n--- Example 6: Saving ---");
    let dir = std::env::temp_dir().join("nestcfg-demo");
    let path = dir.join("config.json");
    store.save_to_file(&path.to_string_lossy(), Format::Json)?;
    println!("Saved to {}", path.display());

    let mut reloaded = ConfigStore::new();
    reloaded.load_file(&path.to_string_lossy())?;
    println!(
        "Reloaded server.tls.port = {}",
        reloaded.get_int("server.tls.port")?
    );

    println!("\n=== Example Complete ===");
    Ok(())
}
