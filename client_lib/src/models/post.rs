//! Request and response models for the remote posts API

use crate::ui::UiPort;
use serde::{Deserialize, Serialize};

/// Payload assembled from a form's scoped inputs before submission.
///
/// Absent inputs yield absent fields, and absent fields are omitted from the
/// serialized body entirely.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubmissionPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    #[serde(rename = "userId")]
    pub user_id: u64,
}

impl SubmissionPayload {
    /// Reads the `{kind}-id`, `{kind}-title` and `{kind}-body` inputs.
    /// A missing input is an absent field, never an error.
    pub fn from_form(ui: &dyn UiPort, kind: &str, user_id: u64) -> Self {
        Self {
            id: ui.input_value(&format!("{}-id", kind)),
            title: ui.input_value(&format!("{}-title", kind)),
            body: ui.input_value(&format!("{}-body", kind)),
            user_id,
        }
    }
}

/// The shape returned by the remote service. Every field is optional and
/// `id` is untyped (the service sends numbers, echoed forms send strings).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ResourceRecord {
    pub id: Option<serde_json::Value>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl ResourceRecord {
    /// Synthesized confirmation record for a completed DELETE. Carries the
    /// response status and a fixed message instead of the remote body.
    pub fn deleted(status: u16, post_id: &str) -> Self {
        Self {
            message: Some(format!("Post {} deleted!", post_id)),
            status: Some(status),
            ..Self::default()
        }
    }

    /// The id as it should appear in rendered output, without JSON quoting.
    pub fn id_text(&self) -> Option<String> {
        self.id.as_ref().map(|id| match id {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }
}
