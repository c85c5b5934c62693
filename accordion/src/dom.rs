//! DOM query/manipulation capability.
//!
//! The widget talks to its subtree exclusively through the [`Dom`] trait, so
//! any environment's DOM binding can be plugged in. [`MemoryDom`] is the
//! reference binding: an id-keyed node store with data attributes, classes and
//! heights, enough to exercise the full widget in tests and demos.

use std::collections::HashMap;

/// DOM capability the accordion is bound against.
///
/// All mutating calls are fire-and-forget: a binding silently ignores ids it
/// does not know about, mirroring how the widget degrades on missing nodes.
pub trait Dom {
    /// Whether a node with this id exists.
    fn contains(&self, id: &str) -> bool;

    /// Ids of all descendants of `root` matching `selector`, in document
    /// order. Selector support is binding-defined; the reference binding
    /// understands attribute selectors of the form `[data-key=value]`.
    fn descendants_matching(&self, root: &str, selector: &str) -> Vec<String>;

    /// Write attributes on a node, replacing existing values.
    fn set_attributes(&mut self, id: &str, attrs: &[(&str, &str)]);

    /// Remove attributes from a node.
    fn remove_attributes(&mut self, id: &str, names: &[&str]);

    /// Add a class to a node (no-op when already present).
    fn add_class(&mut self, id: &str, class: &str);

    /// Remove a class from a node.
    fn remove_class(&mut self, id: &str, class: &str);

    /// Whether a node currently carries a class.
    fn has_class(&self, id: &str, class: &str) -> bool;

    /// Measure a node's rendered height. An applied inline height wins over
    /// the natural content height, which is why the widget clears inline
    /// heights before re-measuring.
    fn measure_height(&self, id: &str) -> u16;

    /// Apply an inline height to a node.
    fn set_height(&mut self, id: &str, height: u16);

    /// Remove any applied inline height, restoring the natural height.
    fn clear_height(&mut self, id: &str);

    /// Move input focus to a node.
    fn focus(&mut self, id: &str);
}

/// One node in a [`MemoryDom`].
#[derive(Debug, Default)]
pub struct Node {
    parent: Option<String>,
    data: HashMap<String, String>,
    attrs: HashMap<String, String>,
    classes: Vec<String>,
    natural_height: u16,
    inline_height: Option<u16>,
}

impl Node {
    /// Set a `data-*` marker used for selector matching.
    pub fn data(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.data.insert(key.into(), value.into());
        self
    }

    /// Set the node's natural content height.
    pub fn natural_height(&mut self, height: u16) -> &mut Self {
        self.natural_height = height;
        self
    }
}

/// In-memory reference [`Dom`] binding.
///
/// # Example
///
/// ```
/// use accordion::{Dom, MemoryDom};
///
/// let mut dom = MemoryDom::new();
/// dom.insert("faq");
/// dom.insert_under("q1", "faq").data("role", "trigger");
/// assert_eq!(
///     dom.descendants_matching("faq", "[data-role=trigger]"),
///     vec!["q1".to_string()],
/// );
/// ```
#[derive(Debug, Default)]
pub struct MemoryDom {
    nodes: HashMap<String, Node>,
    // Document order of node ids
    order: Vec<String>,
    focused: Option<String>,
}

impl MemoryDom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a root-level node and return it for builder-style setup.
    pub fn insert(&mut self, id: impl Into<String>) -> &mut Node {
        self.insert_node(id.into(), None)
    }

    /// Insert a node under a parent and return it for builder-style setup.
    pub fn insert_under(&mut self, id: impl Into<String>, parent: &str) -> &mut Node {
        self.insert_node(id.into(), Some(parent.to_string()))
    }

    fn insert_node(&mut self, id: String, parent: Option<String>) -> &mut Node {
        if !self.nodes.contains_key(&id) {
            self.order.push(id.clone());
        }
        let node = self.nodes.entry(id).or_default();
        node.parent = parent;
        node
    }

    /// Read an attribute value.
    pub fn attr(&self, id: &str, name: &str) -> Option<&str> {
        self.nodes.get(id)?.attrs.get(name).map(String::as_str)
    }

    /// The applied inline height, if any.
    pub fn inline_height(&self, id: &str) -> Option<u16> {
        self.nodes.get(id)?.inline_height
    }

    /// Change a node's natural content height (e.g. to simulate a reflow).
    pub fn set_natural_height(&mut self, id: &str, height: u16) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.natural_height = height;
        }
    }

    /// The id of the currently focused node.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    fn is_descendant_of(&self, id: &str, root: &str) -> bool {
        let mut current = self.nodes.get(id).and_then(|n| n.parent.as_deref());
        while let Some(parent) = current {
            if parent == root {
                return true;
            }
            current = self.nodes.get(parent).and_then(|n| n.parent.as_deref());
        }
        false
    }
}

/// Match a node against an attribute selector: `[key=value]`, `[key="value"]`
/// or bare presence `[key]`. The `data-` prefix on the key is optional.
fn selector_matches(node: &Node, selector: &str) -> bool {
    let Some(body) = selector
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
    else {
        return false;
    };

    match body.split_once('=') {
        Some((key, value)) => {
            let key = key.trim();
            let key = key.strip_prefix("data-").unwrap_or(key);
            let value = value.trim().trim_matches('"');
            node.data.get(key).is_some_and(|v| v == value)
        }
        None => {
            let key = body.trim();
            let key = key.strip_prefix("data-").unwrap_or(key);
            node.data.contains_key(key)
        }
    }
}

impl Dom for MemoryDom {
    fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    fn descendants_matching(&self, root: &str, selector: &str) -> Vec<String> {
        self.order
            .iter()
            .filter(|id| self.is_descendant_of(id, root))
            .filter(|id| selector_matches(&self.nodes[id.as_str()], selector))
            .cloned()
            .collect()
    }

    fn set_attributes(&mut self, id: &str, attrs: &[(&str, &str)]) {
        if let Some(node) = self.nodes.get_mut(id) {
            for (name, value) in attrs {
                node.attrs.insert((*name).to_string(), (*value).to_string());
            }
        }
    }

    fn remove_attributes(&mut self, id: &str, names: &[&str]) {
        if let Some(node) = self.nodes.get_mut(id) {
            for name in names {
                node.attrs.remove(*name);
            }
        }
    }

    fn add_class(&mut self, id: &str, class: &str) {
        if let Some(node) = self.nodes.get_mut(id) {
            if !node.classes.iter().any(|c| c == class) {
                node.classes.push(class.to_string());
            }
        }
    }

    fn remove_class(&mut self, id: &str, class: &str) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.classes.retain(|c| c != class);
        }
    }

    fn has_class(&self, id: &str, class: &str) -> bool {
        self.nodes
            .get(id)
            .is_some_and(|node| node.classes.iter().any(|c| c == class))
    }

    fn measure_height(&self, id: &str) -> u16 {
        self.nodes
            .get(id)
            .map(|node| node.inline_height.unwrap_or(node.natural_height))
            .unwrap_or(0)
    }

    fn set_height(&mut self, id: &str, height: u16) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.inline_height = Some(height);
        }
    }

    fn clear_height(&mut self, id: &str) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.inline_height = None;
        }
    }

    fn focus(&mut self, id: &str) {
        if self.nodes.contains_key(id) {
            self.focused = Some(id.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MemoryDom {
        let mut dom = MemoryDom::new();
        dom.insert("root");
        dom.insert_under("a", "root").data("role", "trigger");
        dom.insert_under("b", "root")
            .data("role", "panel")
            .natural_height(4);
        dom.insert_under("c", "b").data("role", "trigger");
        dom.insert("outside").data("role", "trigger");
        dom
    }

    #[test]
    fn test_descendants_matching_scopes_to_root() {
        let dom = sample();
        // Nested descendants match, nodes outside the root do not
        assert_eq!(
            dom.descendants_matching("root", "[data-role=trigger]"),
            vec!["a".to_string(), "c".to_string()],
        );
        assert_eq!(
            dom.descendants_matching("root", "[data-role=panel]"),
            vec!["b".to_string()],
        );
    }

    #[test]
    fn test_selector_forms() {
        let dom = sample();
        assert_eq!(
            dom.descendants_matching("root", "[data-role=\"panel\"]"),
            vec!["b".to_string()],
        );
        assert_eq!(
            dom.descendants_matching("root", "[role=panel]"),
            vec!["b".to_string()],
        );
        // Bare presence selector
        assert_eq!(dom.descendants_matching("root", "[data-role]").len(), 3);
        // Not an attribute selector
        assert!(dom.descendants_matching("root", ".panel").is_empty());
    }

    #[test]
    fn test_measure_prefers_inline_height() {
        let mut dom = sample();
        assert_eq!(dom.measure_height("b"), 4);
        dom.set_height("b", 0);
        assert_eq!(dom.measure_height("b"), 0);
        dom.clear_height("b");
        assert_eq!(dom.measure_height("b"), 4);
    }

    #[test]
    fn test_mutations_on_unknown_ids_are_ignored() {
        let mut dom = sample();
        dom.set_attributes("nope", &[("aria-expanded", "true")]);
        dom.add_class("nope", "is-open");
        dom.focus("nope");
        assert!(dom.attr("nope", "aria-expanded").is_none());
        assert!(dom.focused().is_none());
    }

    #[test]
    fn test_class_ops() {
        let mut dom = sample();
        dom.add_class("a", "is-open");
        dom.add_class("a", "is-open");
        assert!(dom.has_class("a", "is-open"));
        dom.remove_class("a", "is-open");
        assert!(!dom.has_class("a", "is-open"));
    }
}
