//! Hints about part values that build fine but are probably mistakes.

use selkit::{PartKind, Selector};

/// Collect hints for every compound selector in the chain.
pub fn collect(selector: &Selector) -> Vec<String> {
    let mut hints = Vec::new();

    for compound in selector.chain() {
        if let Some(name) = compound.element_name() {
            check(&mut hints, PartKind::Element, name);
        }
        if let Some(id) = compound.id_name() {
            check(&mut hints, PartKind::Id, id);
        }
        for class in compound.classes() {
            check(&mut hints, PartKind::Class, class);
        }
        for body in compound.attributes() {
            check(&mut hints, PartKind::Attribute, body);
        }
        for name in compound.pseudo_classes() {
            check(&mut hints, PartKind::PseudoClass, name);
        }
        if let Some(name) = compound.pseudo_element_name() {
            check(&mut hints, PartKind::PseudoElement, name);
        }
    }

    hints
}

fn check(hints: &mut Vec<String>, kind: PartKind, value: &str) {
    if value.is_empty() {
        hints.push(format!("empty {kind} value"));
        return;
    }

    let doubled = match kind {
        PartKind::Id => value.starts_with('#'),
        PartKind::Class => value.starts_with('.'),
        PartKind::Attribute => value.starts_with('[') && value.ends_with(']'),
        PartKind::PseudoClass | PartKind::PseudoElement => value.starts_with(':'),
        PartKind::Element | PartKind::Combinator => false,
    };

    if doubled {
        hints.push(format!(
            "{kind} {value:?} already includes its delimiter, which will be written twice"
        ));
    }
}
