//! Dialog service for Slack API.

use crate::args::{Args, ToArgs};
use crate::blocks::Dialog;
use crate::client::{Ack, ApiClient};
use crate::errors::SlackResult;
use async_trait::async_trait;
use tracing::instrument;

/// Request to open a legacy dialog
#[derive(Debug, Clone, PartialEq)]
pub struct OpenDialogRequest {
    /// Trigger ID from interaction
    pub trigger_id: String,
    /// Dialog definition
    pub dialog: Dialog,
}

impl OpenDialogRequest {
    /// Create a new request
    pub fn new(trigger_id: impl Into<String>, dialog: Dialog) -> Self {
        Self {
            trigger_id: trigger_id.into(),
            dialog,
        }
    }
}

impl ToArgs for OpenDialogRequest {
    fn to_args(&self) -> SlackResult<Args> {
        Args::new()
            .with("trigger_id", &self.trigger_id)
            .with_json("dialog", &self.dialog)
    }
}

/// Trait for dialog service operations
#[async_trait]
pub trait DialogServiceTrait: Send + Sync {
    /// Open a dialog
    async fn open(&self, request: OpenDialogRequest) -> SlackResult<()>;
}

/// Dialog service implementation
#[derive(Debug, Clone)]
pub struct DialogService {
    api: ApiClient,
}

impl DialogService {
    /// Create a new dialog service
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl DialogServiceTrait for DialogService {
    #[instrument(
        skip(self, request),
        fields(trigger_id = %request.trigger_id, callback_id = %request.dialog.callback_id)
    )]
    async fn open(&self, request: OpenDialogRequest) -> SlackResult<()> {
        let _: Ack = self.api.post("dialog.open", &request.to_args()?).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::DialogElement;

    #[test]
    fn test_dialog_is_sent_as_json_text() {
        let dialog = Dialog::new("cb", "Title").element(DialogElement::text("Name", "name"));
        let fields = OpenDialogRequest::new("trig", dialog).to_args().unwrap().to_form_fields();

        assert_eq!(fields[0].0, "trigger_id");
        assert_eq!(fields[1].0, "dialog");
        let dialog: serde_json::Value = serde_json::from_str(&fields[1].1).unwrap();
        assert_eq!(dialog["elements"][0]["name"], "name");
    }
}
