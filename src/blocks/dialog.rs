//! Legacy dialogs opened through `dialog.open`.

use serde::{Deserialize, Serialize};

/// Dialog definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dialog {
    /// Callback ID echoed in the submission payload
    pub callback_id: String,
    /// Title (max 24 chars)
    pub title: String,
    /// Submit button label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submit_label: Option<String>,
    /// Send `dialog_cancellation` when the user cancels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notify_on_cancel: Option<bool>,
    /// Opaque state echoed in the submission payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Form elements (max 10)
    pub elements: Vec<DialogElement>,
}

impl Dialog {
    /// Create a dialog
    pub fn new(callback_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            callback_id: callback_id.into(),
            title: title.into(),
            submit_label: None,
            notify_on_cancel: None,
            state: None,
            elements: Vec::new(),
        }
    }

    /// Add an element
    pub fn element(mut self, element: impl Into<DialogElement>) -> Self {
        self.elements.push(element.into());
        self
    }

    /// Set the submit label
    pub fn submit_label(mut self, label: impl Into<String>) -> Self {
        self.submit_label = Some(label.into());
        self
    }

    /// Notify on cancel
    pub fn notify_on_cancel(mut self, notify: bool) -> Self {
        self.notify_on_cancel = Some(notify);
        self
    }

    /// Set the state string
    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }
}

/// Dialog form element, tagged by `type`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DialogElement {
    /// Single-line text field
    Text(DialogTextElement),
    /// Multi-line text area
    Textarea(DialogTextElement),
    /// Select menu
    Select(DialogSelectElement),
}

impl DialogElement {
    /// Single-line text field
    pub fn text(label: impl Into<String>, name: impl Into<String>) -> Self {
        DialogElement::Text(DialogTextElement::new(label, name))
    }

    /// Multi-line text area
    pub fn textarea(label: impl Into<String>, name: impl Into<String>) -> Self {
        DialogElement::Textarea(DialogTextElement::new(label, name))
    }

    /// Name the submission value is keyed by
    pub fn name(&self) -> &str {
        match self {
            DialogElement::Text(e) | DialogElement::Textarea(e) => &e.name,
            DialogElement::Select(e) => &e.name,
        }
    }
}

impl From<DialogSelectElement> for DialogElement {
    fn from(e: DialogSelectElement) -> Self {
        DialogElement::Select(e)
    }
}

/// Keyboard hint for text fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialogTextSubtype {
    /// Email address
    Email,
    /// Number
    Number,
    /// Telephone number
    Tel,
    /// URL
    Url,
}

/// Text or textarea element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogTextElement {
    /// Label (max 48 chars)
    pub label: String,
    /// Submission key
    pub name: String,
    /// May be left empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optional: Option<bool>,
    /// Helper text under the field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    /// Placeholder
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Prefilled value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Keyboard hint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtype: Option<DialogTextSubtype>,
    /// Minimum length
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u32>,
    /// Maximum length
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
}

impl DialogTextElement {
    /// Create a text element
    pub fn new(label: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            name: name.into(),
            optional: None,
            hint: None,
            placeholder: None,
            value: None,
            subtype: None,
            min_length: None,
            max_length: None,
        }
    }

    /// Allow an empty value
    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = Some(optional);
        self
    }

    /// Set the hint
    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Prefill the value
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set the subtype
    pub fn subtype(mut self, subtype: DialogTextSubtype) -> Self {
        self.subtype = Some(subtype);
        self
    }

    /// Set the length bounds
    pub fn length(mut self, min: u32, max: u32) -> Self {
        self.min_length = Some(min);
        self.max_length = Some(max);
        self
    }
}

/// Where a select element gets its options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialogDataSource {
    /// Options listed in the element
    Static,
    /// Workspace users
    Users,
    /// Public channels
    Channels,
    /// Any conversation the user can see
    Conversations,
    /// Loaded from the app's options URL
    External,
}

/// Dialog select option
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogOption {
    /// Label
    pub label: String,
    /// Submitted value
    pub value: String,
}

impl DialogOption {
    /// Create an option
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Labelled group of dialog options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogOptionGroup {
    /// Group label
    pub label: String,
    /// Options
    pub options: Vec<DialogOption>,
}

/// Select element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogSelectElement {
    /// Label
    pub label: String,
    /// Submission key
    pub name: String,
    /// May be left empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optional: Option<bool>,
    /// Placeholder
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Preselected value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Option source
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_source: Option<DialogDataSource>,
    /// Options (static source)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<DialogOption>,
    /// Option groups (static source)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub option_groups: Vec<DialogOptionGroup>,
    /// Preselected options (external source)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub selected_options: Vec<DialogOption>,
    /// Characters typed before options are requested (external source)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_query_length: Option<u32>,
}

impl DialogSelectElement {
    /// Select with a static option list
    pub fn new(label: impl Into<String>, name: impl Into<String>, options: Vec<DialogOption>) -> Self {
        Self {
            label: label.into(),
            name: name.into(),
            optional: None,
            placeholder: None,
            value: None,
            data_source: None,
            options,
            option_groups: Vec::new(),
            selected_options: Vec::new(),
            min_query_length: None,
        }
    }

    /// Select fed by a dynamic source
    pub fn from_source(
        label: impl Into<String>,
        name: impl Into<String>,
        data_source: DialogDataSource,
    ) -> Self {
        Self {
            data_source: Some(data_source),
            ..Self::new(label, name, Vec::new())
        }
    }

    /// Allow an empty value
    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = Some(optional);
        self
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Preselect a value
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set the minimum query length
    pub fn min_query_length(mut self, length: u32) -> Self {
        self.min_query_length = Some(length);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_dialog_shape() {
        let dialog = Dialog::new("ryde-46e2b0", "Request a Ride")
            .submit_label("Request")
            .element(DialogElement::text("Pickup Location", "loc_origin"))
            .element(DialogElement::Textarea(
                DialogTextElement::new("Notes", "notes").optional(true).hint("Gate code, etc."),
            ))
            .element(DialogSelectElement::new(
                "Size",
                "size",
                vec![DialogOption::new("Small", "s"), DialogOption::new("Large", "l")],
            ));

        assert_eq!(
            serde_json::to_value(&dialog).unwrap(),
            json!({
                "callback_id": "ryde-46e2b0",
                "title": "Request a Ride",
                "submit_label": "Request",
                "elements": [
                    {"type": "text", "label": "Pickup Location", "name": "loc_origin"},
                    {"type": "textarea", "label": "Notes", "name": "notes", "optional": true, "hint": "Gate code, etc."},
                    {"type": "select", "label": "Size", "name": "size", "options": [
                        {"label": "Small", "value": "s"},
                        {"label": "Large", "value": "l"}
                    ]}
                ]
            })
        );
    }

    #[test]
    fn test_dynamic_select() {
        let element: DialogElement =
            DialogSelectElement::from_source("Assignee", "assignee", DialogDataSource::Users).into();
        let value = serde_json::to_value(&element).unwrap();
        assert_eq!(value["data_source"], "users");
        assert!(value.get("options").is_none());
        assert_eq!(element.name(), "assignee");
    }

    #[test]
    fn test_text_subtype() {
        let element = DialogTextElement::new("Email", "email")
            .subtype(DialogTextSubtype::Email)
            .length(3, 150);
        let value = serde_json::to_value(&element).unwrap();
        assert_eq!(value["subtype"], "email");
        assert_eq!(value["min_length"], 3);
        assert_eq!(value["max_length"], 150);
    }
}
