//! In-memory page backing the [`UiPort`] trait

use super::UiPort;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
struct Element {
    content: String,
    text: String,
    value: Option<String>,
    visible: bool,
}

/// A page is a flat map of identified elements. Elements not added at
/// construction time simply do not exist, which the binder and renderer
/// treat as "skip this trigger/sink".
#[derive(Clone, Default)]
pub struct Page {
    elements: Arc<RwLock<HashMap<String, Element>>>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_element(self, id: &str) -> Self {
        self.elements
            .write()
            .insert(id.to_string(), Element::default());
        self
    }

    pub fn with_input(self, id: &str, value: &str) -> Self {
        self.elements.write().insert(
            id.to_string(),
            Element {
                value: Some(value.to_string()),
                ..Element::default()
            },
        );
        self
    }

    /// Writes an input's value, creating the element if needed. Used by the
    /// console front-end to fill a form before dispatching its submission.
    pub fn set_input(&self, id: &str, value: &str) {
        let mut elements = self.elements.write();
        let element = elements.entry(id.to_string()).or_default();
        element.value = Some(value.to_string());
    }
}

impl UiPort for Page {
    fn has_element(&self, id: &str) -> bool {
        self.elements.read().contains_key(id)
    }

    fn input_value(&self, id: &str) -> Option<String> {
        self.elements.read().get(id).and_then(|e| e.value.clone())
    }

    fn content(&self, id: &str) -> Option<String> {
        self.elements.read().get(id).map(|e| e.content.clone())
    }

    fn text(&self, id: &str) -> Option<String> {
        self.elements.read().get(id).map(|e| e.text.clone())
    }

    fn is_visible(&self, id: &str) -> Option<bool> {
        self.elements.read().get(id).map(|e| e.visible)
    }

    fn set_content(&self, id: &str, html: &str) {
        if let Some(element) = self.elements.write().get_mut(id) {
            element.content = html.to_string();
        }
    }

    fn set_text(&self, id: &str, text: &str) {
        if let Some(element) = self.elements.write().get_mut(id) {
            element.text = text.to_string();
        }
    }

    fn set_visible(&self, id: &str, visible: bool) {
        if let Some(element) = self.elements.write().get_mut(id) {
            element.visible = visible;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_element_lookups() {
        let page = Page::new();

        assert!(!page.has_element("get-results"));
        assert_eq!(page.input_value("post-id"), None);
        assert_eq!(page.content("get-results"), None);
        assert_eq!(page.is_visible("error"), None);
    }

    #[test]
    fn test_writes_to_absent_elements_are_dropped() {
        let page = Page::new();

        page.set_content("get-results", "<p>hi</p>");
        page.set_visible("error", true);

        assert_eq!(page.content("get-results"), None);
        assert_eq!(page.is_visible("error"), None);
    }

    #[test]
    fn test_content_is_replaced_not_appended() {
        let page = Page::new().with_element("get-results");

        page.set_content("get-results", "first");
        page.set_content("get-results", "second");

        assert_eq!(page.content("get-results"), Some("second".to_string()));
    }

    #[test]
    fn test_input_values() {
        let page = Page::new().with_input("put-id", "5").with_element("put-title");

        assert_eq!(page.input_value("put-id"), Some("5".to_string()));
        // element exists but holds no value
        assert_eq!(page.input_value("put-title"), None);

        page.set_input("put-title", "X");
        assert_eq!(page.input_value("put-title"), Some("X".to_string()));
    }
}
