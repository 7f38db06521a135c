//! Validated construction of CSS selectors.
//!
//! This module provides the fragment ordering policy, the fluent
//! [`SelectorBuilder`], and the [`SelectorFactory`] facade that starts each
//! builder chain. Appends are checked against the selector grammar as they
//! arrive, so an invalid construction order surfaces immediately instead of
//! producing malformed selector text.

pub mod builder;
pub mod error;
pub mod factory;
pub mod fragment;

pub use builder::SelectorBuilder;
pub use error::SelectorError;
pub use factory::SelectorFactory;
pub use fragment::Fragment;
