//! Composition objects shared by blocks and elements.

use serde::{Deserialize, Serialize};

/// Text object, either plain text or mrkdwn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TextObject {
    /// `plain_text`
    PlainText {
        /// Text content
        text: String,
        /// Render emoji shortcodes
        #[serde(default, skip_serializing_if = "Option::is_none")]
        emoji: Option<bool>,
    },
    /// `mrkdwn`
    Mrkdwn {
        /// Text content
        text: String,
        /// Skip link and mention auto-parsing
        #[serde(default, skip_serializing_if = "Option::is_none")]
        verbatim: Option<bool>,
    },
}

impl TextObject {
    /// Plain text with emoji rendering on
    pub fn plain(text: impl Into<String>) -> Self {
        TextObject::PlainText {
            text: text.into(),
            emoji: Some(true),
        }
    }

    /// Mrkdwn text
    pub fn markdown(text: impl Into<String>) -> Self {
        TextObject::Mrkdwn {
            text: text.into(),
            verbatim: None,
        }
    }

    /// The text content, whatever the kind
    pub fn text(&self) -> &str {
        match self {
            TextObject::PlainText { text, .. } | TextObject::Mrkdwn { text, .. } => text,
        }
    }
}

/// Option in a select menu, overflow menu, checkbox or radio group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionObject {
    /// Label shown to the user
    pub text: TextObject,
    /// Value sent back in interaction payloads
    pub value: String,
    /// Secondary line under the label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<TextObject>,
    /// URL opened when chosen (overflow menus only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl OptionObject {
    /// Create an option with a plain-text label
    pub fn new(text: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            text: TextObject::plain(text),
            value: value.into(),
            description: None,
            url: None,
        }
    }

    /// Set the description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(TextObject::plain(description));
        self
    }
}

/// Labelled group of options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionGroup {
    /// Group label
    pub label: TextObject,
    /// Options in the group
    pub options: Vec<OptionObject>,
}

impl OptionGroup {
    /// Create an option group
    pub fn new(label: impl Into<String>, options: Vec<OptionObject>) -> Self {
        Self {
            label: TextObject::plain(label),
            options,
        }
    }
}

/// Button style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonStyle {
    /// Green
    Primary,
    /// Red
    Danger,
}

/// Confirmation prompt shown before an interactive element acts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfirmationDialog {
    /// Dialog title
    pub title: TextObject,
    /// Explanatory text
    pub text: TextObject,
    /// Confirm button label
    pub confirm: TextObject,
    /// Deny button label
    pub deny: TextObject,
    /// Confirm button style
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<ButtonStyle>,
}

impl ConfirmationDialog {
    /// Create a confirmation dialog
    pub fn new(
        title: impl Into<String>,
        text: impl Into<String>,
        confirm: impl Into<String>,
        deny: impl Into<String>,
    ) -> Self {
        Self {
            title: TextObject::plain(title),
            text: TextObject::markdown(text),
            confirm: TextObject::plain(confirm),
            deny: TextObject::plain(deny),
            style: None,
        }
    }

    /// Set the confirm button style
    pub fn style(mut self, style: ButtonStyle) -> Self {
        self.style = Some(style);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_text_object_shape() {
        assert_eq!(
            serde_json::to_value(TextObject::plain("Hi")).unwrap(),
            json!({"type": "plain_text", "text": "Hi", "emoji": true})
        );
        assert_eq!(
            serde_json::to_value(TextObject::markdown("*Hi*")).unwrap(),
            json!({"type": "mrkdwn", "text": "*Hi*"})
        );
    }

    #[test]
    fn test_option_object_omits_unset_fields() {
        let option = OptionObject::new("Red", "red");
        assert_eq!(
            serde_json::to_value(option).unwrap(),
            json!({"text": {"type": "plain_text", "text": "Red", "emoji": true}, "value": "red"})
        );
    }

    #[test]
    fn test_confirmation_dialog_round_trip() {
        let confirm = ConfirmationDialog::new("Sure?", "This *cannot* be undone", "Yes", "No")
            .style(ButtonStyle::Danger);
        let value = serde_json::to_value(&confirm).unwrap();
        assert_eq!(value["style"], "danger");
        let back: ConfirmationDialog = serde_json::from_value(value).unwrap();
        assert_eq!(back, confirm);
    }
}
