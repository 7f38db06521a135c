//! The selector accumulator.
//!
//! [`SelectorBuilder`] receives fragments through a fluent, consuming-self
//! API, validates each against the grammar's ordering and cardinality rules,
//! and renders the accumulated parts to canonical selector text. Two built
//! selectors can be joined with a combinator via [`SelectorBuilder::combine`].

use crate::selector::error::SelectorError;
use crate::selector::fragment::Fragment;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A mutable accumulator for one CSS compound selector.
///
/// Each append method takes ownership, validates the fragment, and returns
/// the builder for further chaining. Validation happens before any mutation,
/// so a failed append carries no partial effect. [`SelectorBuilder::render`]
/// is a pure read; a builder may be rendered repeatedly and appended to
/// between renders while the ordering rules still permit it.
///
/// The ordering rule is about rank regression, not repetition: once a
/// fragment of some rank has been appended, every later fragment must have an
/// equal or higher rank, even if its kind was never used before.
///
/// # Example
///
/// ```rust
/// use selectra::{SelectorBuilder, SelectorError};
///
/// fn build() -> Result<String, SelectorError> {
///     let selector = SelectorBuilder::new()
///         .id("main")?
///         .class("container")?
///         .class("editable")?;
///     Ok(selector.render())
/// }
/// assert_eq!(build().unwrap(), "#main.container.editable");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorBuilder {
    element: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<String>,
    pseudo_classes: Vec<String>,
    pseudo_element: Option<String>,
    /// Highest fragment rank appended so far; 0 before any append.
    cursor: u8,
    /// Pre-rendered text of a combined selector; set only by `combine`.
    combined: Option<String>,
}

impl SelectorBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the type (element) fragment, e.g. `div`.
    pub fn element(mut self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.admit(Fragment::Element)?;
        self.element = Some(value.into());
        Ok(self)
    }

    /// Append the id fragment, rendered as `#value`.
    pub fn id(mut self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.admit(Fragment::Id)?;
        self.id = Some(value.into());
        Ok(self)
    }

    /// Append a class fragment, rendered as `.value`. May be repeated;
    /// insertion order is preserved in the output.
    pub fn class(mut self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.admit(Fragment::Class)?;
        self.classes.push(value.into());
        Ok(self)
    }

    /// Append an attribute fragment, rendered as `[value]`. May be repeated.
    ///
    /// The body is taken verbatim, e.g. `href$=".png"`; no CSS token
    /// validation is performed.
    pub fn attr(mut self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.admit(Fragment::Attribute)?;
        self.attributes.push(value.into());
        Ok(self)
    }

    /// Append a pseudo-class fragment, rendered as `:value`. May be repeated.
    pub fn pseudo_class(mut self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.admit(Fragment::PseudoClass)?;
        self.pseudo_classes.push(value.into());
        Ok(self)
    }

    /// Append the pseudo-element fragment, rendered as `::value`.
    pub fn pseudo_element(mut self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.admit(Fragment::PseudoElement)?;
        self.pseudo_element = Some(value.into());
        Ok(self)
    }

    /// Join two built selectors with a combinator token.
    ///
    /// The result renders as `left + " " + combinator + " " + right`, with
    /// exactly one space on each side of the token regardless of its content.
    /// The token itself is opaque; conventionally one of the CSS combinators
    /// (` `, `>`, `+`, `~`), but nothing is validated. The result is intended
    /// as render-only; nesting `combine` calls simply nests the rendered
    /// substrings.
    ///
    /// # Example
    ///
    /// ```rust
    /// use selectra::{SelectorBuilder, SelectorError};
    ///
    /// fn build() -> Result<String, SelectorError> {
    ///     let left = SelectorBuilder::new().element("div")?.id("main")?;
    ///     let right = SelectorBuilder::new().element("table")?.id("data")?;
    ///     Ok(SelectorBuilder::combine(left, "+", right).render())
    /// }
    /// assert_eq!(build().unwrap(), "div#main + table#data");
    /// ```
    pub fn combine(left: Self, combinator: &str, right: Self) -> Self {
        Self {
            combined: Some(format!("{} {} {}", left.render(), combinator, right.render())),
            ..Self::default()
        }
    }

    /// Render the selector to canonical text.
    ///
    /// Fragments appear in fixed grammar order with their per-kind prefixes;
    /// empty slots are omitted entirely. Pure: rendering twice without
    /// intervening appends yields identical text.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Check both grammar preconditions, then advance the cursor.
    ///
    /// Runs before any slot mutation so a rejected fragment leaves the
    /// builder exactly as it was.
    fn admit(&mut self, fragment: Fragment) -> Result<(), SelectorError> {
        if fragment.rank() < self.cursor {
            return Err(SelectorError::OrderViolation);
        }
        if fragment.is_singular() && self.slot_taken(fragment) {
            return Err(SelectorError::DuplicateSingular);
        }
        self.cursor = fragment.rank();
        Ok(())
    }

    fn slot_taken(&self, fragment: Fragment) -> bool {
        match fragment {
            Fragment::Element => self.element.is_some(),
            Fragment::Id => self.id.is_some(),
            Fragment::PseudoElement => self.pseudo_element.is_some(),
            Fragment::Class | Fragment::Attribute | Fragment::PseudoClass => false,
        }
    }
}

impl fmt::Display for SelectorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(element) = &self.element {
            f.write_str(element)?;
        }
        if let Some(id) = &self.id {
            write!(f, "#{id}")?;
        }
        for class in &self.classes {
            write!(f, ".{class}")?;
        }
        for attribute in &self.attributes {
            write!(f, "[{attribute}]")?;
        }
        for pseudo_class in &self.pseudo_classes {
            write!(f, ":{pseudo_class}")?;
        }
        if let Some(pseudo_element) = &self.pseudo_element {
            write!(f, "::{pseudo_element}")?;
        }
        if let Some(combined) = &self.combined {
            f.write_str(combined)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_builder_renders_empty_text() {
        assert_eq!(SelectorBuilder::new().render(), "");
    }

    #[test]
    fn id_and_repeated_classes_render_in_insertion_order() {
        let selector = SelectorBuilder::new()
            .id("main")
            .unwrap()
            .class("container")
            .unwrap()
            .class("editable")
            .unwrap();

        assert_eq!(selector.render(), "#main.container.editable");
    }

    #[test]
    fn element_attribute_and_pseudo_class_render_with_prefixes() {
        let selector = SelectorBuilder::new()
            .element("a")
            .unwrap()
            .attr(r#"href$=".png""#)
            .unwrap()
            .pseudo_class("focus")
            .unwrap();

        assert_eq!(selector.render(), r#"a[href$=".png"]:focus"#);
    }

    #[test]
    fn all_six_fragment_kinds_render_in_grammar_order() {
        let selector = SelectorBuilder::new()
            .element("input")
            .unwrap()
            .id("login")
            .unwrap()
            .class("wide")
            .unwrap()
            .attr("type=\"text\"")
            .unwrap()
            .pseudo_class("focus")
            .unwrap()
            .pseudo_element("placeholder")
            .unwrap();

        assert_eq!(
            selector.render(),
            "input#login.wide[type=\"text\"]:focus::placeholder"
        );
    }

    #[test]
    fn render_is_repeatable_and_non_consuming() {
        let selector = SelectorBuilder::new().element("div").unwrap();
        assert_eq!(selector.render(), selector.render());

        // Appending is still legal after a render if order rules permit it.
        let selector = selector.class("row").unwrap();
        assert_eq!(selector.render(), "div.row");
    }

    #[test]
    fn lower_rank_after_higher_rank_is_an_order_violation() {
        let selector = SelectorBuilder::new()
            .element("div")
            .unwrap()
            .id("main")
            .unwrap()
            .class("draggable")
            .unwrap();

        let result = selector.element("span");
        assert!(matches!(result, Err(SelectorError::OrderViolation)));
    }

    #[test]
    fn order_violation_fires_for_unused_kinds_too() {
        // id was never appended, but its rank is below class.
        let selector = SelectorBuilder::new().class("container").unwrap();
        let result = selector.id("main");
        assert!(matches!(result, Err(SelectorError::OrderViolation)));
    }

    #[test]
    fn equal_rank_reappend_is_not_an_order_violation() {
        let selector = SelectorBuilder::new()
            .pseudo_class("hover")
            .unwrap()
            .pseudo_class("focus")
            .unwrap();

        assert_eq!(selector.render(), ":hover:focus");
    }

    #[test]
    fn second_id_is_a_duplicate_singular() {
        let result = SelectorBuilder::new().id("x").unwrap().id("y");
        assert!(matches!(result, Err(SelectorError::DuplicateSingular)));
    }

    #[test]
    fn second_element_fails_even_with_fragments_interleaved() {
        let selector = SelectorBuilder::new().element("p").unwrap();
        // The interleaved class raises the cursor past element's rank, so the
        // regression check reports the order violation first.
        let result = selector.class("note").unwrap().element("div");
        assert!(result.is_err());
    }

    #[test]
    fn second_pseudo_element_is_a_duplicate_singular() {
        let result = SelectorBuilder::new()
            .pseudo_element("before")
            .unwrap()
            .pseudo_element("after");
        assert!(matches!(result, Err(SelectorError::DuplicateSingular)));
    }

    #[test]
    fn failed_append_leaves_prior_state_intact() {
        let selector = SelectorBuilder::new().id("x").unwrap();
        let snapshot = selector.clone();

        assert!(snapshot.render() == selector.render());
        assert!(selector.id("y").is_err());
        assert_eq!(snapshot.render(), "#x");
    }

    #[test]
    fn combine_joins_with_single_spaces() {
        let left = SelectorBuilder::new()
            .element("div")
            .unwrap()
            .id("main")
            .unwrap();
        let right = SelectorBuilder::new()
            .element("table")
            .unwrap()
            .id("data")
            .unwrap();

        let combined = SelectorBuilder::combine(left, "+", right);
        assert_eq!(combined.render(), "div#main + table#data");
    }

    #[test]
    fn nested_combine_nests_rendered_substrings() {
        let a = SelectorBuilder::new().element("p").unwrap();
        let b = SelectorBuilder::new().element("div").unwrap();
        let c = SelectorBuilder::new().element("span").unwrap();

        let inner = SelectorBuilder::combine(b, "~", c);
        let combined = SelectorBuilder::combine(a, "+", inner);
        assert_eq!(combined.render(), "p + div ~ span");
    }

    #[test]
    fn descendant_combinator_keeps_its_surrounding_spaces() {
        let left = SelectorBuilder::new().element("ul").unwrap();
        let right = SelectorBuilder::new().element("li").unwrap();

        // A space token yields the classic three-character separator.
        let combined = SelectorBuilder::combine(left, " ", right);
        assert_eq!(combined.render(), "ul   li");
    }

    #[test]
    fn combined_builder_renders_stored_text_verbatim() {
        let combined = SelectorBuilder::combine(
            SelectorBuilder::new().element("tr").unwrap(),
            ">",
            SelectorBuilder::new().element("td").unwrap(),
        );

        assert_eq!(combined.render(), "tr > td");
        assert_eq!(combined.render(), combined.to_string());
    }

    #[test]
    fn builder_round_trips_through_json() {
        let selector = SelectorBuilder::new()
            .element("div")
            .unwrap()
            .class("row")
            .unwrap();

        let json = serde_json::to_string(&selector).unwrap();
        let deserialized: SelectorBuilder = serde_json::from_str(&json).unwrap();
        assert_eq!(selector, deserialized);
        assert_eq!(deserialized.render(), "div.row");
    }
}
