//! Selector part kinds.
//!
//! Every part of a compound selector has a fixed rank. A [`Selector`] only
//! accepts parts whose rank is at least the rank of the last accepted part,
//! which yields the canonical order
//! `element #id .class [attr] :pseudo-class ::pseudo-element`, followed by the
//! combinator that links the next compound selector.

use strum_macros::{Display, EnumString};

use crate::combinator::Combinator;
use crate::selector::Selector;

/// The kind of a selector part, in rank order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum PartKind {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors), e.g. `div`
    #[strum(to_string = "element", serialize = "tag")]
    Element,
    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors), e.g. `#main`
    Id,
    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html), e.g. `.nav`
    Class,
    /// [§ 6.4 Attribute selector](https://www.w3.org/TR/selectors-4/#attribute-selectors), e.g. `[href]`
    #[strum(to_string = "attribute", serialize = "attr")]
    Attribute,
    /// [§ 4 Pseudo-class](https://www.w3.org/TR/selectors-4/#pseudo-classes), e.g. `:focus`
    PseudoClass,
    /// Pseudo-element, e.g. `::before`
    PseudoElement,
    /// Combinator plus the selector it links to.
    Combinator,
}

impl PartKind {
    /// All kinds, indexed by rank.
    pub const ORDER: [Self; 7] = [
        Self::Element,
        Self::Id,
        Self::Class,
        Self::Attribute,
        Self::PseudoClass,
        Self::PseudoElement,
        Self::Combinator,
    ];

    /// Position of this kind in the required ordering.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Element => 0,
            Self::Id => 1,
            Self::Class => 2,
            Self::Attribute => 3,
            Self::PseudoClass => 4,
            Self::PseudoElement => 5,
            Self::Combinator => 6,
        }
    }

    /// The kind with the given rank, if any.
    #[must_use]
    pub fn from_rank(rank: u8) -> Option<Self> {
        Self::ORDER.get(usize::from(rank)).copied()
    }

    /// Whether a selector may hold at most one part of this kind.
    #[must_use]
    pub const fn is_singleton(self) -> bool {
        matches!(
            self,
            Self::Element | Self::Id | Self::PseudoElement | Self::Combinator
        )
    }
}

/// A part together with its value, as accepted by [`Selector::set_part`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Part {
    /// Element (type) name.
    Element(String),
    /// ID without the leading `#`.
    Id(String),
    /// Class name without the leading `.`.
    Class(String),
    /// Raw attribute body without brackets, e.g. `href$=".png"`.
    Attribute(String),
    /// Pseudo-class without the leading `:`.
    PseudoClass(String),
    /// Pseudo-element without the leading `::`.
    PseudoElement(String),
    /// Combinator and the right-hand selector it links to.
    Combinator(Combinator, Box<Selector>),
}

impl Part {
    /// The kind of this part.
    #[must_use]
    pub const fn kind(&self) -> PartKind {
        match self {
            Self::Element(_) => PartKind::Element,
            Self::Id(_) => PartKind::Id,
            Self::Class(_) => PartKind::Class,
            Self::Attribute(_) => PartKind::Attribute,
            Self::PseudoClass(_) => PartKind::PseudoClass,
            Self::PseudoElement(_) => PartKind::PseudoElement,
            Self::Combinator(..) => PartKind::Combinator,
        }
    }

    /// Build a value part of the given kind.
    ///
    /// Returns `None` for [`PartKind::Combinator`], which needs a linked
    /// selector rather than a string.
    #[must_use]
    pub fn with_value(kind: PartKind, value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        match kind {
            PartKind::Element => Some(Self::Element(value)),
            PartKind::Id => Some(Self::Id(value)),
            PartKind::Class => Some(Self::Class(value)),
            PartKind::Attribute => Some(Self::Attribute(value)),
            PartKind::PseudoClass => Some(Self::PseudoClass(value)),
            PartKind::PseudoElement => Some(Self::PseudoElement(value)),
            PartKind::Combinator => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranks_follow_order_table() {
        for (index, kind) in PartKind::ORDER.iter().enumerate() {
            assert_eq!(usize::from(kind.rank()), index);
            assert_eq!(PartKind::from_rank(kind.rank()), Some(*kind));
        }
        assert_eq!(PartKind::from_rank(7), None);
    }

    #[test]
    fn test_ord_matches_rank() {
        assert!(PartKind::Element < PartKind::Id);
        assert!(PartKind::PseudoClass < PartKind::PseudoElement);
        assert!(PartKind::PseudoElement < PartKind::Combinator);
    }

    #[test]
    fn test_singletons() {
        let singletons: Vec<PartKind> = PartKind::ORDER
            .into_iter()
            .filter(|kind| kind.is_singleton())
            .collect();
        assert_eq!(
            singletons,
            [
                PartKind::Element,
                PartKind::Id,
                PartKind::PseudoElement,
                PartKind::Combinator
            ]
        );
    }

    #[test]
    fn test_display_is_kebab_case() {
        assert_eq!(PartKind::Element.to_string(), "element");
        assert_eq!(PartKind::Attribute.to_string(), "attribute");
        assert_eq!(PartKind::PseudoClass.to_string(), "pseudo-class");
        assert_eq!(PartKind::PseudoElement.to_string(), "pseudo-element");
    }

    #[test]
    fn test_parse_kind_names_and_aliases() {
        assert_eq!("element".parse::<PartKind>(), Ok(PartKind::Element));
        assert_eq!("tag".parse::<PartKind>(), Ok(PartKind::Element));
        assert_eq!("attr".parse::<PartKind>(), Ok(PartKind::Attribute));
        assert_eq!("attribute".parse::<PartKind>(), Ok(PartKind::Attribute));
        assert_eq!("pseudo-element".parse::<PartKind>(), Ok(PartKind::PseudoElement));
        assert!("pseudo".parse::<PartKind>().is_err());
    }

    #[test]
    fn test_with_value() {
        assert_eq!(
            Part::with_value(PartKind::Class, "nav"),
            Some(Part::Class("nav".to_string()))
        );
        assert_eq!(Part::with_value(PartKind::Combinator, ">"), None);
        assert_eq!(
            Part::with_value(PartKind::PseudoClass, "hover").map(|part| part.kind()),
            Some(PartKind::PseudoClass)
        );
    }
}
