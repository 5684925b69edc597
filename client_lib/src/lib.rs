//! Core library wiring page triggers to the remote posts API and rendering
//! the responses back into the page.

pub mod banner;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod models;
pub mod render;
pub mod transport;
pub mod ui;

pub use config::AppConfig;
pub use dispatch::{EventBindings, Trigger};
pub use error::{AppError, Result};
pub use models::{ResourceRecord, SubmissionPayload};
pub use render::render_into;
pub use transport::{FetchTransport, HttpTransport, TransportResponse, XhrTransport};
pub use ui::{ids, Page, UiPort};

use std::sync::Arc;
use std::time::Duration;

/// Shared context for the dispatchers: the page behind its port, the two
/// transports, and the endpoint/banner configuration.
pub struct App {
    pub app_name: String,
    pub version: String,
    config: AppConfig,
    ui: Arc<dyn UiPort>,
    fetch: Arc<dyn HttpTransport>,
    xhr: Arc<dyn HttpTransport>,
}

impl App {
    pub fn new(ui: Arc<dyn UiPort>, config: AppConfig) -> Self {
        Self {
            app_name: "Placeholder Console".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            config,
            ui,
            fetch: Arc::new(FetchTransport::new()),
            xhr: Arc::new(XhrTransport::new()),
        }
    }

    /// Swaps in explicit transports. Tests use this to point both paths at
    /// instrumented implementations.
    pub fn with_transports(
        mut self,
        fetch: Arc<dyn HttpTransport>,
        xhr: Arc<dyn HttpTransport>,
    ) -> Self {
        self.fetch = fetch;
        self.xhr = xhr;
        self
    }

    /// Inspects the page once and wires every trigger whose element exists.
    pub fn bind_events(self: &Arc<Self>) -> EventBindings {
        EventBindings::bind(Arc::clone(self))
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn ui(&self) -> &Arc<dyn UiPort> {
        &self.ui
    }

    pub fn fetch_transport(&self) -> &Arc<dyn HttpTransport> {
        &self.fetch
    }

    pub fn xhr_transport(&self) -> &Arc<dyn HttpTransport> {
        &self.xhr
    }

    pub fn hide_delay(&self) -> Duration {
        Duration::from_millis(self.config.banner.hide_delay_ms)
    }

    /// `{base}/posts`
    pub fn collection_url(&self) -> String {
        format!("{}/posts", self.config.api.base_url)
    }

    /// `{base}/posts/{id}`
    pub fn item_url(&self, id: &str) -> String {
        format!("{}/posts/{}", self.config.api.base_url, id)
    }
}
