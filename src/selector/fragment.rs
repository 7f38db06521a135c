//! Fragment kinds and the ordering/cardinality policy.
//!
//! The CSS grammar fixes both the order in which selector parts may appear
//! and which parts may appear more than once. Both rules live here as pure
//! methods on [`Fragment`]; the builder consults them on every append.

use serde::{Deserialize, Serialize};

/// One kind of CSS selector part, declared in the order the grammar
/// requires them to appear.
///
/// All methods are pure. The variant order is load-bearing: [`Fragment::rank`]
/// is derived from it.
///
/// # Example
///
/// ```rust
/// use selectra::Fragment;
///
/// assert!(Fragment::Element.rank() < Fragment::PseudoElement.rank());
/// assert!(Fragment::Id.is_singular());
/// assert!(!Fragment::Class.is_singular());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum Fragment {
    /// Type selector, e.g. `div`.
    Element,
    /// Id selector, rendered as `#value`.
    Id,
    /// Class selector, rendered as `.value`.
    Class,
    /// Attribute selector, rendered as `[value]`.
    Attribute,
    /// Pseudo-class, rendered as `:value`.
    PseudoClass,
    /// Pseudo-element, rendered as `::value`.
    PseudoElement,
}

impl Fragment {
    /// Position of this fragment kind in the mandatory grammar order, 1..=6.
    pub fn rank(self) -> u8 {
        match self {
            Self::Element => 1,
            Self::Id => 2,
            Self::Class => 3,
            Self::Attribute => 4,
            Self::PseudoClass => 5,
            Self::PseudoElement => 6,
        }
    }

    /// Whether this fragment kind may appear at most once per selector.
    pub fn is_singular(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }

    /// The kind's name as it appears in CSS terminology.
    pub fn name(self) -> &'static str {
        match self {
            Self::Element => "element",
            Self::Id => "id",
            Self::Class => "class",
            Self::Attribute => "attribute",
            Self::PseudoClass => "pseudo-class",
            Self::PseudoElement => "pseudo-element",
        }
    }
}
