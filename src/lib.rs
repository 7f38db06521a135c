//! Selectra: a fluent CSS selector builder
//!
//! Selectra assembles CSS compound selectors from typed fragments (element,
//! id, class, attribute, pseudo-class, pseudo-element) while enforcing the
//! ordering and cardinality rules of the selector grammar, and combines
//! already-built selectors with a combinator token into complex selectors.
//!
//! Construction is validated as it happens: fragments must arrive in grammar
//! order (`element#id.class[attr]:pseudo-class::pseudo-element`), and the
//! element, id and pseudo-element parts may each appear at most once. A
//! violation aborts the failing append and leaves the builder untouched.
//!
//! Selectra builds selector text; it never parses it. Fragment bodies such as
//! `href$=".png"` or `nth-of-type(even)` are taken verbatim from the caller.
//!
//! # Core Concepts
//!
//! - **Fragment**: one selector part, with a fixed rank in the grammar order
//! - **SelectorBuilder**: a mutable accumulator validating each append
//! - **SelectorFactory**: a stateless facade starting each fluent chain
//!
//! # Example
//!
//! ```rust
//! use selectra::{SelectorError, SelectorFactory};
//!
//! fn build() -> Result<(), SelectorError> {
//!     let selector = SelectorFactory::element("a")?
//!         .attr(r#"href$=".png""#)?
//!         .pseudo_class("focus")?;
//!     assert_eq!(selector.render(), r#"a[href$=".png"]:focus"#);
//!
//!     let combined = SelectorFactory::combine(
//!         SelectorFactory::element("div")?.id("main")?,
//!         "+",
//!         SelectorFactory::element("table")?.id("data")?,
//!     );
//!     assert_eq!(combined.render(), "div#main + table#data");
//!     Ok(())
//! }
//! # build().unwrap();
//! ```

pub mod puzzles;
pub mod selector;

// Re-export commonly used types
pub use selector::{Fragment, SelectorBuilder, SelectorError, SelectorFactory};
