//! Building Selectors
//!
//! This example demonstrates fluent selector construction and combination.
//!
//! Key concepts:
//! - Every factory call starts a fresh, independent builder
//! - Appends are validated against the CSS grammar order as they happen
//! - Combined selectors are joined with a combinator token and render-only
//!
//! Run with: cargo run --example build_selectors

use selectra::{SelectorError, SelectorFactory};

fn main() -> Result<(), SelectorError> {
    println!("=== Building Selectors Example ===\n");

    let simple = SelectorFactory::id("main")?
        .class("container")?
        .class("editable")?;
    println!("Compound selector: {}", simple.render());

    let link = SelectorFactory::element("a")?
        .attr(r#"href$=".png""#)?
        .pseudo_class("focus")?;
    println!("Attribute selector: {}", link.render());

    let combined = SelectorFactory::combine(
        SelectorFactory::element("div")?.id("main")?,
        "+",
        SelectorFactory::combine(
            SelectorFactory::element("table")?.id("data")?,
            "~",
            SelectorFactory::element("tr")?.pseudo_class("nth-of-type(even)")?,
        ),
    );
    println!("Combined selector: {}", combined.render());

    // Appends that break the grammar order fail without corrupting anything.
    let out_of_order = SelectorFactory::class("container")?.id("main");
    match out_of_order {
        Ok(_) => println!("unexpected: out-of-order append succeeded"),
        Err(error) => println!("Rejected as expected: {error}"),
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
