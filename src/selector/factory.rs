//! Stateless facade for starting selector chains.

use crate::selector::builder::SelectorBuilder;
use crate::selector::error::SelectorError;

/// Entry point for building selectors.
///
/// Every constructor creates a brand-new [`SelectorBuilder`] and applies the
/// first fragment to it; chains started from different calls never share
/// state. The facade itself holds nothing between calls.
///
/// # Example
///
/// ```rust
/// use selectra::{SelectorError, SelectorFactory};
///
/// fn build() -> Result<String, SelectorError> {
///     let selector = SelectorFactory::id("main")?
///         .class("container")?
///         .class("editable")?;
///     Ok(selector.render())
/// }
/// assert_eq!(build().unwrap(), "#main.container.editable");
/// ```
pub struct SelectorFactory;

impl SelectorFactory {
    /// Start a selector with a type (element) fragment.
    pub fn element(value: impl Into<String>) -> Result<SelectorBuilder, SelectorError> {
        SelectorBuilder::new().element(value)
    }

    /// Start a selector with an id fragment.
    pub fn id(value: impl Into<String>) -> Result<SelectorBuilder, SelectorError> {
        SelectorBuilder::new().id(value)
    }

    /// Start a selector with a class fragment.
    pub fn class(value: impl Into<String>) -> Result<SelectorBuilder, SelectorError> {
        SelectorBuilder::new().class(value)
    }

    /// Start a selector with an attribute fragment.
    pub fn attr(value: impl Into<String>) -> Result<SelectorBuilder, SelectorError> {
        SelectorBuilder::new().attr(value)
    }

    /// Start a selector with a pseudo-class fragment.
    pub fn pseudo_class(value: impl Into<String>) -> Result<SelectorBuilder, SelectorError> {
        SelectorBuilder::new().pseudo_class(value)
    }

    /// Start a selector with a pseudo-element fragment.
    pub fn pseudo_element(value: impl Into<String>) -> Result<SelectorBuilder, SelectorError> {
        SelectorBuilder::new().pseudo_element(value)
    }

    /// Join two built selectors with a combinator token.
    ///
    /// Delegates to [`SelectorBuilder::combine`]; the result is render-only.
    pub fn combine(
        left: SelectorBuilder,
        combinator: &str,
        right: SelectorBuilder,
    ) -> SelectorBuilder {
        SelectorBuilder::combine(left, combinator, right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_entry_call_starts_an_independent_builder() {
        let first = SelectorFactory::element("div").unwrap();
        let second = SelectorFactory::element("span").unwrap();

        assert_eq!(first.render(), "div");
        assert_eq!(second.render(), "span");
    }

    #[test]
    fn chains_continue_on_the_returned_builder() {
        let selector = SelectorFactory::element("a")
            .unwrap()
            .attr(r#"href$=".png""#)
            .unwrap()
            .pseudo_class("focus")
            .unwrap();

        assert_eq!(selector.render(), r#"a[href$=".png"]:focus"#);
    }

    #[test]
    fn every_fragment_kind_can_start_a_chain() {
        assert_eq!(SelectorFactory::element("div").unwrap().render(), "div");
        assert_eq!(SelectorFactory::id("main").unwrap().render(), "#main");
        assert_eq!(SelectorFactory::class("row").unwrap().render(), ".row");
        assert_eq!(
            SelectorFactory::attr("checked").unwrap().render(),
            "[checked]"
        );
        assert_eq!(
            SelectorFactory::pseudo_class("hover").unwrap().render(),
            ":hover"
        );
        assert_eq!(
            SelectorFactory::pseudo_element("after").unwrap().render(),
            "::after"
        );
    }

    #[test]
    fn combine_delegates_to_the_builder() {
        let combined = SelectorFactory::combine(
            SelectorFactory::element("div").unwrap().id("main").unwrap(),
            "+",
            SelectorFactory::element("table").unwrap().id("data").unwrap(),
        );

        assert_eq!(combined.render(), "div#main + table#data");
    }

    #[test]
    fn deeply_nested_combine_matches_the_flattened_text() {
        let combined = SelectorFactory::combine(
            SelectorFactory::element("div")
                .unwrap()
                .id("main")
                .unwrap()
                .class("container")
                .unwrap()
                .class("draggable")
                .unwrap(),
            "+",
            SelectorFactory::combine(
                SelectorFactory::element("table").unwrap().id("data").unwrap(),
                "~",
                SelectorFactory::combine(
                    SelectorFactory::element("tr")
                        .unwrap()
                        .pseudo_class("nth-of-type(even)")
                        .unwrap(),
                    " ",
                    SelectorFactory::element("td")
                        .unwrap()
                        .pseudo_class("nth-of-type(even)")
                        .unwrap(),
                ),
            ),
        );

        assert_eq!(
            combined.render(),
            "div#main.container.draggable + table#data ~ tr:nth-of-type(even)   td:nth-of-type(even)"
        );
    }
}
