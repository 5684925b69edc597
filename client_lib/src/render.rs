//! Result rendering
//!
//! Remote fields are injected into the fragment verbatim, no escaping.

use crate::models::ResourceRecord;
use crate::ui::UiPort;

/// Replaces the sink's content with a fragment built from the record:
/// heading from `title` (or "Success"), paragraph from `body` falling back
/// to `message`, and an ID line only when the record carries an id.
/// An absent sink makes this a no-op.
pub fn render_into(ui: &dyn UiPort, sink: &str, record: &ResourceRecord) {
    if !ui.has_element(sink) {
        return;
    }

    // an empty string counts as missing, like the page's `||` fallbacks
    let title = record
        .title
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or("Success");
    let body = record
        .body
        .as_deref()
        .filter(|s| !s.is_empty())
        .or(record.message.as_deref())
        .unwrap_or("");
    let id_line = record
        .id_text()
        .map(|id| format!("\n    <p>ID: {}</p>", id))
        .unwrap_or_default();

    let fragment = format!(
        "<div class=\"result-item\">\n    <h3>{}</h3>\n    <p>{}</p>{}\n</div>",
        title, body, id_line
    );

    ui.set_content(sink, &fragment);
}
