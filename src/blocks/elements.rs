//! Interactive and display elements placed inside blocks.

use super::composition::{ButtonStyle, ConfirmationDialog, OptionGroup, OptionObject, TextObject};
use super::tagged;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Block element, tagged by `type`
#[derive(Debug, Clone, PartialEq)]
pub enum BlockElement {
    /// `button`
    Button(ButtonElement),
    /// `static_select`
    StaticSelect(StaticSelectElement),
    /// `external_select`
    ExternalSelect(ExternalSelectElement),
    /// `users_select`
    UsersSelect(UsersSelectElement),
    /// `conversations_select`
    ConversationsSelect(ConversationsSelectElement),
    /// `channels_select`
    ChannelsSelect(ChannelsSelectElement),
    /// `overflow`
    Overflow(OverflowElement),
    /// `datepicker`
    Datepicker(DatePickerElement),
    /// `plain_text_input`
    PlainTextInput(PlainTextInputElement),
    /// `checkboxes`
    Checkboxes(CheckboxesElement),
    /// `radio_buttons`
    RadioButtons(RadioButtonsElement),
    /// `image`
    Image(ImageElement),
    /// Element type this crate does not model, kept as received
    Unknown(Value),
}

impl Serialize for BlockElement {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            BlockElement::Button(e) => tagged::write("button", e, serializer),
            BlockElement::StaticSelect(e) => tagged::write("static_select", e, serializer),
            BlockElement::ExternalSelect(e) => tagged::write("external_select", e, serializer),
            BlockElement::UsersSelect(e) => tagged::write("users_select", e, serializer),
            BlockElement::ConversationsSelect(e) => {
                tagged::write("conversations_select", e, serializer)
            }
            BlockElement::ChannelsSelect(e) => tagged::write("channels_select", e, serializer),
            BlockElement::Overflow(e) => tagged::write("overflow", e, serializer),
            BlockElement::Datepicker(e) => tagged::write("datepicker", e, serializer),
            BlockElement::PlainTextInput(e) => tagged::write("plain_text_input", e, serializer),
            BlockElement::Checkboxes(e) => tagged::write("checkboxes", e, serializer),
            BlockElement::RadioButtons(e) => tagged::write("radio_buttons", e, serializer),
            BlockElement::Image(e) => tagged::write("image", e, serializer),
            BlockElement::Unknown(raw) => raw.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for BlockElement {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (tag, value) = tagged::read(deserializer)?;
        let decoded = match tag.as_deref() {
            Some("button") => serde_json::from_value(value).map(BlockElement::Button),
            Some("static_select") => serde_json::from_value(value).map(BlockElement::StaticSelect),
            Some("external_select") => serde_json::from_value(value).map(BlockElement::ExternalSelect),
            Some("users_select") => serde_json::from_value(value).map(BlockElement::UsersSelect),
            Some("conversations_select") => serde_json::from_value(value).map(BlockElement::ConversationsSelect),
            Some("channels_select") => serde_json::from_value(value).map(BlockElement::ChannelsSelect),
            Some("overflow") => serde_json::from_value(value).map(BlockElement::Overflow),
            Some("datepicker") => serde_json::from_value(value).map(BlockElement::Datepicker),
            Some("plain_text_input") => serde_json::from_value(value).map(BlockElement::PlainTextInput),
            Some("checkboxes") => serde_json::from_value(value).map(BlockElement::Checkboxes),
            Some("radio_buttons") => serde_json::from_value(value).map(BlockElement::RadioButtons),
            Some("image") => serde_json::from_value(value).map(BlockElement::Image),
            _ => Ok(BlockElement::Unknown(value)),
        };
        decoded.map_err(D::Error::custom)
    }
}

impl BlockElement {
    /// Action ID of an interactive element
    pub fn action_id(&self) -> Option<&str> {
        match self {
            BlockElement::Button(e) => Some(&e.action_id),
            BlockElement::StaticSelect(e) => Some(&e.action_id),
            BlockElement::ExternalSelect(e) => Some(&e.action_id),
            BlockElement::UsersSelect(e) => Some(&e.action_id),
            BlockElement::ConversationsSelect(e) => Some(&e.action_id),
            BlockElement::ChannelsSelect(e) => Some(&e.action_id),
            BlockElement::Overflow(e) => Some(&e.action_id),
            BlockElement::Datepicker(e) => Some(&e.action_id),
            BlockElement::PlainTextInput(e) => Some(&e.action_id),
            BlockElement::Checkboxes(e) => Some(&e.action_id),
            BlockElement::RadioButtons(e) => Some(&e.action_id),
            BlockElement::Image(_) | BlockElement::Unknown(_) => None,
        }
    }
}

/// Button element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonElement {
    /// Label
    pub text: TextObject,
    /// Action ID
    pub action_id: String,
    /// URL opened in the browser
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Value sent back in interaction payloads
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Visual style
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<ButtonStyle>,
    /// Confirmation prompt
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirm: Option<ConfirmationDialog>,
}

impl ButtonElement {
    /// Create a button
    pub fn new(text: impl Into<String>, action_id: impl Into<String>) -> Self {
        Self {
            text: TextObject::plain(text),
            action_id: action_id.into(),
            url: None,
            value: None,
            style: None,
            confirm: None,
        }
    }

    /// Set the value
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set the URL
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set the style
    pub fn style(mut self, style: ButtonStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Set the confirmation prompt
    pub fn confirm(mut self, confirm: ConfirmationDialog) -> Self {
        self.confirm = Some(confirm);
        self
    }
}

impl From<ButtonElement> for BlockElement {
    fn from(e: ButtonElement) -> Self {
        BlockElement::Button(e)
    }
}

/// Select menu with a fixed option list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticSelectElement {
    /// Action ID
    pub action_id: String,
    /// Placeholder text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<TextObject>,
    /// Options (mutually exclusive with `option_groups`)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<OptionObject>,
    /// Option groups
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub option_groups: Vec<OptionGroup>,
    /// Preselected option
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_option: Option<OptionObject>,
    /// Confirmation prompt
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirm: Option<ConfirmationDialog>,
}

impl StaticSelectElement {
    /// Create a static select
    pub fn new(action_id: impl Into<String>, options: Vec<OptionObject>) -> Self {
        Self {
            action_id: action_id.into(),
            placeholder: None,
            options,
            option_groups: Vec::new(),
            initial_option: None,
            confirm: None,
        }
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(TextObject::plain(placeholder));
        self
    }

    /// Set the preselected option
    pub fn initial_option(mut self, option: OptionObject) -> Self {
        self.initial_option = Some(option);
        self
    }
}

impl From<StaticSelectElement> for BlockElement {
    fn from(e: StaticSelectElement) -> Self {
        BlockElement::StaticSelect(e)
    }
}

/// Select menu whose options are loaded from the app
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalSelectElement {
    /// Action ID
    pub action_id: String,
    /// Placeholder text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<TextObject>,
    /// Preselected option
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_option: Option<OptionObject>,
    /// Characters typed before options are requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_query_length: Option<u32>,
}

/// Select menu listing workspace users
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsersSelectElement {
    /// Action ID
    pub action_id: String,
    /// Placeholder text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<TextObject>,
    /// Preselected user ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_user: Option<String>,
}

/// Select menu listing conversations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationsSelectElement {
    /// Action ID
    pub action_id: String,
    /// Placeholder text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<TextObject>,
    /// Preselected conversation ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_conversation: Option<String>,
    /// Default to the conversation the surface was opened from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_to_current_conversation: Option<bool>,
}

/// Select menu listing public channels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelsSelectElement {
    /// Action ID
    pub action_id: String,
    /// Placeholder text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<TextObject>,
    /// Preselected channel ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_channel: Option<String>,
}

/// Overflow ("...") menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverflowElement {
    /// Action ID
    pub action_id: String,
    /// Menu options (2 to 5)
    pub options: Vec<OptionObject>,
    /// Confirmation prompt
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirm: Option<ConfirmationDialog>,
}

/// Date picker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatePickerElement {
    /// Action ID
    pub action_id: String,
    /// Placeholder text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<TextObject>,
    /// Preselected date, `YYYY-MM-DD`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_date: Option<String>,
}

impl DatePickerElement {
    /// Create a date picker
    pub fn new(action_id: impl Into<String>) -> Self {
        Self {
            action_id: action_id.into(),
            placeholder: None,
            initial_date: None,
        }
    }

    /// Preselect a date
    pub fn initial_date(mut self, date: chrono::NaiveDate) -> Self {
        self.initial_date = Some(date.format("%Y-%m-%d").to_string());
        self
    }
}

/// Free-text input, only valid inside input blocks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlainTextInputElement {
    /// Action ID
    pub action_id: String,
    /// Placeholder text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<TextObject>,
    /// Prefilled value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_value: Option<String>,
    /// Multi-line input
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiline: Option<bool>,
    /// Minimum length
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u32>,
    /// Maximum length
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
}

impl PlainTextInputElement {
    /// Create a text input
    pub fn new(action_id: impl Into<String>) -> Self {
        Self {
            action_id: action_id.into(),
            placeholder: None,
            initial_value: None,
            multiline: None,
            min_length: None,
            max_length: None,
        }
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(TextObject::plain(placeholder));
        self
    }

    /// Accept multiple lines
    pub fn multiline(mut self, multiline: bool) -> Self {
        self.multiline = Some(multiline);
        self
    }

    /// Set the maximum length
    pub fn max_length(mut self, max_length: u32) -> Self {
        self.max_length = Some(max_length);
        self
    }
}

impl From<PlainTextInputElement> for BlockElement {
    fn from(e: PlainTextInputElement) -> Self {
        BlockElement::PlainTextInput(e)
    }
}

/// Checkbox group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckboxesElement {
    /// Action ID
    pub action_id: String,
    /// Options
    pub options: Vec<OptionObject>,
    /// Initially checked options
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub initial_options: Vec<OptionObject>,
}

/// Radio button group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadioButtonsElement {
    /// Action ID
    pub action_id: String,
    /// Options
    pub options: Vec<OptionObject>,
    /// Initially selected option
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_option: Option<OptionObject>,
}

/// Image element (inside section accessories and context blocks)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageElement {
    /// Image URL
    pub image_url: String,
    /// Alt text
    pub alt_text: String,
}

impl ImageElement {
    /// Create an image element
    pub fn new(image_url: impl Into<String>, alt_text: impl Into<String>) -> Self {
        Self {
            image_url: image_url.into(),
            alt_text: alt_text.into(),
        }
    }
}

impl From<ImageElement> for BlockElement {
    fn from(e: ImageElement) -> Self {
        BlockElement::Image(e)
    }
}
