//! Interactive-element predicate.
//!
//! An element counts as interactive if it, or any ancestor, is one of the
//! configured tags (`a`, `button`), carries one of the configured classes
//! (`btn`), or declares one of the configured roles (`role="button"`).
//! Matching runs against the live hierarchy on every event, so content
//! swapped in after mount is classified correctly without re-registering
//! anything. Hosts with a native `closest()` answer the whole query from the
//! selector list; everything else falls back to walking parents here.

use crate::config::CursorConfig;

/// Read-only view of a node in the host's element hierarchy.
pub trait ElementNode: Sized {
    /// Tag name as reported by the host (any case).
    fn tag_name(&self) -> String;

    /// Whether the element's class list contains `class`.
    fn has_class(&self, class: &str) -> bool;

    /// Value of attribute `name`, if present.
    fn attribute(&self, name: &str) -> Option<String>;

    /// Containing element, `None` at the root.
    fn parent_element(&self) -> Option<Self>;

    /// Whether this element or an ancestor matches the CSS `selector`, when
    /// the host can answer that natively. `None` means "walk it yourself".
    fn closest_match(&self, _selector: &str) -> Option<bool> {
        None
    }
}

/// Classifies elements as clickable for hover feedback.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractiveMatcher {
    tags: Vec<String>,
    classes: Vec<String>,
    roles: Vec<String>,
    selector: String,
}

impl Default for InteractiveMatcher {
    fn default() -> Self {
        Self::from_config(&CursorConfig::default())
    }
}

impl InteractiveMatcher {
    pub fn new(tags: Vec<String>, classes: Vec<String>, roles: Vec<String>) -> Self {
        let mut parts: Vec<String> = Vec::new();
        parts.extend(tags.iter().cloned());
        parts.extend(classes.iter().map(|c| format!(".{}", c)));
        parts.extend(roles.iter().map(|r| format!("[role=\"{}\"]", r)));

        Self {
            tags,
            classes,
            roles,
            selector: parts.join(", "),
        }
    }

    pub fn from_config(config: &CursorConfig) -> Self {
        Self::new(
            config.interactive_tags.clone(),
            config.interactive_classes.clone(),
            config.interactive_roles.clone(),
        )
    }

    /// Whether `element` itself is interactive, ignoring ancestors.
    pub fn matches_element<E: ElementNode>(&self, element: &E) -> bool {
        let tag = element.tag_name();
        if self.tags.iter().any(|t| t.eq_ignore_ascii_case(&tag)) {
            return true;
        }

        if self.classes.iter().any(|c| element.has_class(c)) {
            return true;
        }

        match element.attribute("role") {
            Some(role) => {
                let role = role.trim();
                self.roles.iter().any(|r| r == role)
            },
            None => false,
        }
    }

    /// Whether `element` or any ancestor is interactive.
    pub fn matches<E: ElementNode>(&self, element: &E) -> bool {
        if let Some(hit) = element.closest_match(self.css_selector()) {
            return hit;
        }

        if self.matches_element(element) {
            return true;
        }

        let mut current = element.parent_element();
        while let Some(node) = current {
            if self.matches_element(&node) {
                return true;
            }
            current = node.parent_element();
        }

        false
    }

    /// Equivalent CSS selector list, handed to `ElementNode::closest_match`.
    pub fn css_selector(&self) -> &str {
        &self.selector
    }
}
