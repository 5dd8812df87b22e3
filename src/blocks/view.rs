//! Modal and home tab views.

use super::composition::TextObject;
use super::layout::Block;
use crate::types::TeamId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// View type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewType {
    /// Modal view
    Modal,
    /// Home tab view
    Home,
}

/// View definition for modals and home tabs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct View {
    /// View type
    #[serde(rename = "type")]
    pub view_type: ViewType,
    /// Title (modal only, max 24 chars)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<TextObject>,
    /// Submit button text (modal only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submit: Option<TextObject>,
    /// Close button text (modal only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close: Option<TextObject>,
    /// Blocks in the view (max 100)
    #[serde(default)]
    pub blocks: Vec<Block>,
    /// Private metadata (max 3000 chars)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_metadata: Option<String>,
    /// Callback ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_id: Option<String>,
    /// Close every view in the stack when this one closes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clear_on_close: Option<bool>,
    /// Send `view_closed` when the user closes the view
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notify_on_close: Option<bool>,
    /// App-assigned unique ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    /// Disable the submit button until an input is filled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submit_disabled: Option<bool>,
}

impl View {
    fn empty(view_type: ViewType) -> Self {
        Self {
            view_type,
            title: None,
            submit: None,
            close: None,
            blocks: Vec::new(),
            private_metadata: None,
            callback_id: None,
            clear_on_close: None,
            notify_on_close: None,
            external_id: None,
            submit_disabled: None,
        }
    }

    /// Create a new modal view
    pub fn modal(title: impl Into<String>) -> Self {
        Self {
            title: Some(TextObject::plain(title)),
            ..Self::empty(ViewType::Modal)
        }
    }

    /// Create a new home tab view
    pub fn home() -> Self {
        Self::empty(ViewType::Home)
    }

    /// Set blocks
    pub fn blocks(mut self, blocks: Vec<Block>) -> Self {
        self.blocks = blocks;
        self
    }

    /// Add a block
    pub fn block(mut self, block: impl Into<Block>) -> Self {
        self.blocks.push(block.into());
        self
    }

    /// Set submit button
    pub fn submit(mut self, text: impl Into<String>) -> Self {
        self.submit = Some(TextObject::plain(text));
        self
    }

    /// Set close button
    pub fn close(mut self, text: impl Into<String>) -> Self {
        self.close = Some(TextObject::plain(text));
        self
    }

    /// Set private metadata
    pub fn private_metadata(mut self, metadata: impl Into<String>) -> Self {
        self.private_metadata = Some(metadata.into());
        self
    }

    /// Set callback ID
    pub fn callback_id(mut self, id: impl Into<String>) -> Self {
        self.callback_id = Some(id.into());
        self
    }

    /// Set external ID
    pub fn external_id(mut self, id: impl Into<String>) -> Self {
        self.external_id = Some(id.into());
        self
    }

    /// Notify on close
    pub fn notify_on_close(mut self, notify: bool) -> Self {
        self.notify_on_close = Some(notify);
        self
    }

    /// Clear on close
    pub fn clear_on_close(mut self, clear: bool) -> Self {
        self.clear_on_close = Some(clear);
        self
    }

    /// Disable submit button
    pub fn submit_disabled(mut self, disabled: bool) -> Self {
        self.submit_disabled = Some(disabled);
        self
    }
}

/// View as returned by the `views.*` endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewInfo {
    /// View ID
    pub id: String,
    /// Team ID
    #[serde(default)]
    pub team_id: Option<TeamId>,
    /// View type
    #[serde(rename = "type")]
    pub view_type: ViewType,
    /// Title
    #[serde(default)]
    pub title: Option<TextObject>,
    /// Blocks
    #[serde(default)]
    pub blocks: Vec<Block>,
    /// Private metadata
    #[serde(default)]
    pub private_metadata: Option<String>,
    /// Callback ID
    #[serde(default)]
    pub callback_id: Option<String>,
    /// Submitted and in-progress input values
    #[serde(default)]
    pub state: Option<ViewState>,
    /// Hash for optimistic locking on update
    #[serde(default)]
    pub hash: Option<String>,
    /// Clear on close flag
    #[serde(default)]
    pub clear_on_close: Option<bool>,
    /// Notify on close flag
    #[serde(default)]
    pub notify_on_close: Option<bool>,
    /// Root view ID of the stack
    #[serde(default)]
    pub root_view_id: Option<String>,
    /// Previous view ID in the stack
    #[serde(default)]
    pub previous_view_id: Option<String>,
    /// App ID
    #[serde(default)]
    pub app_id: Option<String>,
    /// External ID
    #[serde(default)]
    pub external_id: Option<String>,
    /// Bot ID
    #[serde(default)]
    pub bot_id: Option<String>,
}

/// View state containing input values keyed by block ID then action ID
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    /// Values by block ID and action ID
    #[serde(default)]
    pub values: Value,
}

impl ViewState {
    /// Raw value object for `block_id` / `action_id`
    pub fn value(&self, block_id: &str, action_id: &str) -> Option<&Value> {
        self.values.get(block_id)?.get(action_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::PlainTextInputElement;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_modal_shape() {
        let view = View::modal("Feedback")
            .submit("Send")
            .callback_id("feedback")
            .block(Block::input("Comment", PlainTextInputElement::new("comment")));

        let value = serde_json::to_value(&view).unwrap();
        assert_eq!(value["type"], "modal");
        assert_eq!(value["title"]["text"], "Feedback");
        assert_eq!(value["submit"]["text"], "Send");
        assert_eq!(value["blocks"][0]["type"], "input");
        assert!(value.get("close").is_none());
        assert!(value.get("external_id").is_none());
    }

    #[test]
    fn test_home_has_no_title() {
        let value = serde_json::to_value(View::home().block(Block::divider())).unwrap();
        assert_eq!(value, json!({"type": "home", "blocks": [{"type": "divider"}]}));
    }

    #[test]
    fn test_view_info_state_lookup() {
        let info: ViewInfo = serde_json::from_value(json!({
            "id": "V1",
            "team_id": "T1",
            "type": "modal",
            "hash": "156772938.1827394",
            "state": {"values": {"b1": {"comment": {"type": "plain_text_input", "value": "hi"}}}}
        }))
        .unwrap();

        assert_eq!(info.hash.as_deref(), Some("156772938.1827394"));
        let state = info.state.unwrap();
        assert_eq!(state.value("b1", "comment").unwrap()["value"], "hi");
        assert!(state.value("b2", "comment").is_none());
    }
}
