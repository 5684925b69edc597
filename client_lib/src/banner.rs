//! Shared error banner

use crate::ui::{ids, UiPort};
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

/// Writes the category and message into the banner's text slots, shows the
/// banner, and arms a one-shot timer that hides it after `hide_delay`.
///
/// Every failure arms its own timer; timers are never cancelled or
/// coalesced, and each one hides the banner unconditionally at expiry.
pub fn show_error(ui: &Arc<dyn UiPort>, hide_delay: Duration, category: &str, message: Option<&str>) {
    warn!(category, message = message.unwrap_or(""), "showing error banner");

    ui.set_text(ids::ERROR_TYPE, category);
    ui.set_text(ids::ERROR_MESSAGE, message.unwrap_or(""));
    ui.set_visible(ids::ERROR_BANNER, true);

    let ui = Arc::clone(ui);
    tokio::spawn(async move {
        tokio::time::sleep(hide_delay).await;
        ui.set_visible(ids::ERROR_BANNER, false);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::Page;
    use tokio::task::yield_now;
    use tokio::time::advance;

    fn banner_page() -> Arc<dyn UiPort> {
        Arc::new(
            Page::new()
                .with_element(ids::ERROR_BANNER)
                .with_element(ids::ERROR_TYPE)
                .with_element(ids::ERROR_MESSAGE),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_banner_shows_then_hides_after_delay() {
        let page = banner_page();

        show_error(&page, Duration::from_millis(6000), "Fetch Error", Some("HTTP error! status: 500"));
        yield_now().await;

        assert_eq!(page.is_visible(ids::ERROR_BANNER), Some(true));
        assert_eq!(page.text(ids::ERROR_TYPE), Some("Fetch Error".to_string()));
        assert_eq!(
            page.text(ids::ERROR_MESSAGE),
            Some("HTTP error! status: 500".to_string())
        );

        advance(Duration::from_millis(5999)).await;
        yield_now().await;
        assert_eq!(page.is_visible(ids::ERROR_BANNER), Some(true));

        advance(Duration::from_millis(1)).await;
        yield_now().await;
        assert_eq!(page.is_visible(ids::ERROR_BANNER), Some(false));
    }

    #[tokio::test(start_paused = true)]
    async fn test_missing_message_leaves_slot_empty() {
        let page = banner_page();

        show_error(&page, Duration::from_millis(6000), "Network Error", None);
        yield_now().await;

        assert_eq!(page.text(ids::ERROR_TYPE), Some("Network Error".to_string()));
        assert_eq!(page.text(ids::ERROR_MESSAGE), Some(String::new()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_earlier_timer_hides_a_newer_error() {
        let page = banner_page();
        let delay = Duration::from_millis(6000);

        show_error(&page, delay, "Fetch Error", Some("HTTP error! status: 500"));
        yield_now().await;

        advance(Duration::from_millis(3000)).await;
        yield_now().await;

        show_error(&page, delay, "PUT Error", Some("Request failed with status 404"));
        yield_now().await;
        assert_eq!(page.is_visible(ids::ERROR_BANNER), Some(true));

        // first timer expires and hides the banner even though a newer
        // error is still within its own window
        advance(Duration::from_millis(3000)).await;
        yield_now().await;
        assert_eq!(page.is_visible(ids::ERROR_BANNER), Some(false));
        assert_eq!(page.text(ids::ERROR_TYPE), Some("PUT Error".to_string()));
    }
}
