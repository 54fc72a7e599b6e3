//! Fluent builder for CSS selectors.
//!
//! # Scope
//!
//! This crate builds selectors part by part and renders them to text:
//! - **Compound selectors** ([§ 4.2](https://www.w3.org/TR/selectors-4/#compound))
//!   - Type, ID, class, attribute, pseudo-class and pseudo-element parts
//!   - Parts must be added in that order; type, ID and pseudo-element at most once
//!
//! - **Complex selectors** ([§ 4.3](https://www.w3.org/TR/selectors-4/#complex))
//!   - Two selectors joined by a [`Combinator`], nested to the right
//!
//! # Not Implemented
//!
//! - Parsing selector text
//! - Validating part contents against the CSS grammar
//! - Specificity and matching
//!
//! # Example
//!
//! ```
//! use selkit::{Combinator, combine, element};
//!
//! let head = element("div").id("main")?.class("container")?;
//! let selector = combine(head, Combinator::NextSibling, element("table").id("data")?)?;
//! assert_eq!(selector.render(), "div#main.container + table#data");
//! # Ok::<(), selkit::SelectorError>(())
//! ```

/// Combinator tokens per [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators).
pub mod combinator;
/// Builder errors.
pub mod error;
/// Entry points that seed a fresh selector with its first part.
pub mod facade;
/// Selector part kinds and their fixed ordering.
pub mod part;
/// The selector accumulator and its renderer.
pub mod selector;

pub use combinator::Combinator;
pub use error::SelectorError;
pub use facade::{attr, class, combine, element, id, pseudo_class, pseudo_element};
pub use part::{Part, PartKind};
pub use selector::{Chain, Selector};
