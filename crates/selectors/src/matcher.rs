//! CSS selector matching engine.
//! Spec: <https://www.w3.org/TR/selectors-3/>

use crate::{
    Combinator, ComplexSelector, CompoundSelector, ElementAdapter, SelectorList, SimpleSelector,
};

/// Match a selector list against an element.
/// Spec: Section 3, 4
pub fn matches_selector_list<A: ElementAdapter>(
    adapter: &A,
    element: A::Handle,
    list: &SelectorList,
) -> bool {
    list.selectors
        .iter()
        .any(|selector| matches_complex(adapter, element, selector))
}

/// Match a complex selector against an element.
/// Spec: Section 3, 11 — right-to-left matching with ancestor backtracking
/// for descendant combinators.
pub fn matches_complex<A: ElementAdapter>(
    adapter: &A,
    element: A::Handle,
    sel: &ComplexSelector,
) -> bool {
    let Some((combinator, rightmost)) = sel.rest.last() else {
        return matches_compound(adapter, element, &sel.first);
    };
    if !matches_compound(adapter, element, rightmost) {
        return false;
    }
    matches_left(adapter, element, sel, sel.rest.len() - 1, *combinator)
}

/// Match everything to the left of compound `index` in `sel`, given the
/// combinator that relates it to the already-matched element.
fn matches_left<A: ElementAdapter>(
    adapter: &A,
    element: A::Handle,
    sel: &ComplexSelector,
    index: usize,
    combinator: Combinator,
) -> bool {
    let (left_compound, left_combinator) = if index == 0 {
        (&sel.first, None)
    } else {
        let pair = &sel.rest[index - 1];
        (&pair.1, Some(pair.0))
    };

    match combinator {
        Combinator::Child => {
            let Some(parent) = adapter.parent(element) else {
                return false;
            };
            if !matches_compound(adapter, parent, left_compound) {
                return false;
            }
            match left_combinator {
                None => true,
                Some(next) => matches_left(adapter, parent, sel, index - 1, next),
            }
        }
        Combinator::Descendant => {
            let mut ancestor = adapter.parent(element);
            while let Some(candidate) = ancestor {
                if matches_compound(adapter, candidate, left_compound) {
                    match left_combinator {
                        None => return true,
                        Some(next) => {
                            if matches_left(adapter, candidate, sel, index - 1, next) {
                                return true;
                            }
                            // Backtrack: keep climbing for another candidate.
                        }
                    }
                }
                ancestor = adapter.parent(candidate);
            }
            false
        }
    }
}

/// Match a compound selector against a single element.
/// Spec: Section 5–8
pub fn matches_compound<A: ElementAdapter>(
    adapter: &A,
    element: A::Handle,
    compound: &CompoundSelector,
) -> bool {
    compound.simples.iter().all(|simple| match simple {
        SimpleSelector::Universal => true,
        SimpleSelector::Type(type_name) => {
            type_name.is_empty() || adapter.tag_name(element) == type_name.as_str()
        }
        SimpleSelector::Class(class_name) => adapter.has_class(element, class_name),
        SimpleSelector::Id(id_value) => adapter
            .element_id(element)
            .is_some_and(|value| value == id_value.as_str()),
        SimpleSelector::AttrExists(name) => adapter.attr(element, name).is_some(),
        SimpleSelector::AttrEquals { name, value } => adapter
            .attr(element, name)
            .is_some_and(|attr_value| attr_value == value.as_str()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_complex_selector;
    use std::collections::HashMap;

    /// A tiny fixed tree for matcher tests: nodes keyed by index.
    struct FakeTree {
        parents: HashMap<usize, usize>,
        tags: HashMap<usize, String>,
        ids: HashMap<usize, String>,
        classes: HashMap<usize, Vec<String>>,
        attrs: HashMap<usize, HashMap<String, String>>,
    }

    impl ElementAdapter for FakeTree {
        type Handle = usize;

        fn parent(&self, element: usize) -> Option<usize> {
            self.parents.get(&element).copied()
        }
        fn tag_name(&self, element: usize) -> &str {
            self.tags.get(&element).map_or("", String::as_str)
        }
        fn element_id(&self, element: usize) -> Option<&str> {
            self.ids.get(&element).map(String::as_str)
        }
        fn has_class(&self, element: usize, class: &str) -> bool {
            self.classes
                .get(&element)
                .is_some_and(|list| list.iter().any(|token| token == class))
        }
        fn attr(&self, element: usize, name: &str) -> Option<&str> {
            self.attrs
                .get(&element)
                .and_then(|map| map.get(name))
                .map(String::as_str)
        }
    }

    /// div#root > ul.tab__nav > li > a.lazy[data-src=x]
    fn fixture() -> FakeTree {
        let mut tree = FakeTree {
            parents: HashMap::new(),
            tags: HashMap::new(),
            ids: HashMap::new(),
            classes: HashMap::new(),
            attrs: HashMap::new(),
        };
        tree.tags.insert(0, "div".into());
        tree.ids.insert(0, "root".into());
        tree.tags.insert(1, "ul".into());
        tree.classes.insert(1, vec!["tab__nav".into()]);
        tree.parents.insert(1, 0);
        tree.tags.insert(2, "li".into());
        tree.parents.insert(2, 1);
        tree.tags.insert(3, "a".into());
        tree.classes.insert(3, vec!["lazy".into()]);
        tree.attrs
            .insert(3, HashMap::from([("data-src".into(), "x".into())]));
        tree.parents.insert(3, 2);
        tree
    }

    fn matches(tree: &FakeTree, element: usize, selector: &str) -> bool {
        matches_complex(tree, element, &parse_complex_selector(selector).unwrap())
    }

    #[test]
    fn matches_simple_selectors() {
        let tree = fixture();
        assert!(matches(&tree, 0, "#root"));
        assert!(matches(&tree, 1, ".tab__nav"));
        assert!(matches(&tree, 3, "a.lazy"));
        assert!(matches(&tree, 3, "[data-src]"));
        assert!(matches(&tree, 3, "[data-src=x]"));
        assert!(!matches(&tree, 3, "[data-src=y]"));
        assert!(!matches(&tree, 2, ".tab__nav"));
    }

    #[test]
    fn matches_combinators() {
        let tree = fixture();
        assert!(matches(&tree, 3, ".tab__nav a"));
        assert!(matches(&tree, 3, "#root a.lazy"));
        assert!(matches(&tree, 2, "ul > li"));
        assert!(matches(&tree, 3, "#root ul a"));
        assert!(!matches(&tree, 3, ".tab__nav > a"));
        assert!(!matches(&tree, 1, "li ul"));
    }
}
