//! UI surface abstraction
//!
//! Dispatch logic never touches a concrete page directly; it goes through
//! [`UiPort`], keyed by the stable element ids in [`ids`]. The visual side
//! (layout, styling) belongs entirely to the port implementation.

pub mod page;

pub use page::Page;

/// Stable element ids forming the contract with the UI surface.
pub mod ids {
    pub const FETCH_BTN: &str = "fetch-btn";
    pub const XHR_BTN: &str = "xhr-btn";
    pub const POST_FORM: &str = "post-form";
    pub const PUT_FORM: &str = "put-form";
    pub const DELETE_FORM: &str = "delete-form";

    pub const GET_RESULTS: &str = "get-results";
    pub const POST_RESULTS: &str = "post-results";
    pub const PUT_RESULTS: &str = "put-results";
    pub const DELETE_RESULTS: &str = "delete-results";

    pub const ERROR_BANNER: &str = "error";
    pub const ERROR_TYPE: &str = "error-type";
    pub const ERROR_MESSAGE: &str = "error-message";

    pub const DELETE_ID: &str = "delete-id";
}

/// Capability set the dispatchers need from a page: look elements up, read
/// input values, replace content, toggle visibility. Writes aimed at an
/// absent element are silently dropped.
pub trait UiPort: Send + Sync {
    fn has_element(&self, id: &str) -> bool;

    /// Current value of an input element, or `None` if the element is absent.
    fn input_value(&self, id: &str) -> Option<String>;

    fn content(&self, id: &str) -> Option<String>;

    fn text(&self, id: &str) -> Option<String>;

    fn is_visible(&self, id: &str) -> Option<bool>;

    /// Replaces (never appends to) the element's rendered content.
    fn set_content(&self, id: &str, html: &str);

    fn set_text(&self, id: &str, text: &str);

    fn set_visible(&self, id: &str, visible: bool);
}
