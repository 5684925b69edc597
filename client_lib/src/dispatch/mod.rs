//! Trigger binding and dispatch
//!
//! Mirrors the page's five interactive triggers. Binding happens once,
//! against whatever elements the page actually has; a trigger whose element
//! is missing is simply left unwired and dispatching it is a no-op. There
//! is no unbind path.

pub mod handlers;

use crate::error::Result;
use crate::ui::ids;
use crate::App;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    FetchButton,
    XhrButton,
    PostForm,
    PutForm,
    DeleteForm,
}

impl Trigger {
    pub const ALL: [Trigger; 5] = [
        Trigger::FetchButton,
        Trigger::XhrButton,
        Trigger::PostForm,
        Trigger::PutForm,
        Trigger::DeleteForm,
    ];

    pub fn element_id(self) -> &'static str {
        match self {
            Trigger::FetchButton => ids::FETCH_BTN,
            Trigger::XhrButton => ids::XHR_BTN,
            Trigger::PostForm => ids::POST_FORM,
            Trigger::PutForm => ids::PUT_FORM,
            Trigger::DeleteForm => ids::DELETE_FORM,
        }
    }
}

pub struct EventBindings {
    app: Arc<App>,
    wired: HashSet<Trigger>,
}

impl EventBindings {
    pub(crate) fn bind(app: Arc<App>) -> Self {
        let wired: HashSet<Trigger> = Trigger::ALL
            .iter()
            .copied()
            .filter(|trigger| app.ui().has_element(trigger.element_id()))
            .collect();

        for trigger in &wired {
            debug!(element = trigger.element_id(), "wired trigger");
        }

        Self { app, wired }
    }

    pub fn is_wired(&self, trigger: Trigger) -> bool {
        self.wired.contains(&trigger)
    }

    /// Runs the handler bound to `trigger`. Unwired triggers are no-ops.
    ///
    /// An `Err` here is the analogue of an uncaught handler exception (only
    /// the unguarded JSON decodes on the XHR-style paths produce one);
    /// everything else is surfaced through the banner and returns `Ok`.
    pub async fn dispatch(&self, trigger: Trigger) -> Result<()> {
        if !self.wired.contains(&trigger) {
            return Ok(());
        }

        match trigger {
            Trigger::FetchButton => handlers::handle_fetch_request(&self.app).await,
            Trigger::XhrButton => handlers::handle_xhr_request(&self.app).await,
            Trigger::PostForm => handlers::handle_post_submit(&self.app).await,
            Trigger::PutForm => handlers::handle_put_submit(&self.app).await,
            Trigger::DeleteForm => handlers::handle_delete_submit(&self.app).await,
        }
    }
}
