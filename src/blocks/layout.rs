//! Layout blocks.

use super::composition::TextObject;
use super::elements::BlockElement;
use super::tagged;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{json, Value};

/// Layout block, tagged by `type`
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// `section`
    Section(SectionBlock),
    /// `divider`
    Divider(DividerBlock),
    /// `image`
    Image(ImageBlock),
    /// `actions`
    Actions(ActionsBlock),
    /// `context`
    Context(ContextBlock),
    /// `input`
    Input(InputBlock),
    /// `header`
    Header(HeaderBlock),
    /// Block type this crate does not model, kept as received
    Unknown(Value),
}

impl Serialize for Block {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Block::Section(b) => tagged::write("section", b, serializer),
            Block::Divider(b) => tagged::write("divider", b, serializer),
            Block::Image(b) => tagged::write("image", b, serializer),
            Block::Actions(b) => tagged::write("actions", b, serializer),
            Block::Context(b) => tagged::write("context", b, serializer),
            Block::Input(b) => tagged::write("input", b, serializer),
            Block::Header(b) => tagged::write("header", b, serializer),
            Block::Unknown(raw) => raw.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Block {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (tag, value) = tagged::read(deserializer)?;
        let decoded = match tag.as_deref() {
            Some("section") => serde_json::from_value(value).map(Block::Section),
            Some("divider") => serde_json::from_value(value).map(Block::Divider),
            Some("image") => serde_json::from_value(value).map(Block::Image),
            Some("actions") => serde_json::from_value(value).map(Block::Actions),
            Some("context") => serde_json::from_value(value).map(Block::Context),
            Some("input") => serde_json::from_value(value).map(Block::Input),
            Some("header") => serde_json::from_value(value).map(Block::Header),
            _ => Ok(Block::Unknown(value)),
        };
        decoded.map_err(D::Error::custom)
    }
}

impl Block {
    /// Section with mrkdwn text
    pub fn section(text: impl Into<String>) -> Self {
        Block::Section(SectionBlock::new(TextObject::markdown(text)))
    }

    /// Divider
    pub fn divider() -> Self {
        Block::Divider(DividerBlock::default())
    }

    /// Header with plain text
    pub fn header(text: impl Into<String>) -> Self {
        Block::Header(HeaderBlock {
            text: TextObject::plain(text),
            block_id: None,
        })
    }

    /// Image block
    pub fn image(image_url: impl Into<String>, alt_text: impl Into<String>) -> Self {
        Block::Image(ImageBlock {
            image_url: image_url.into(),
            alt_text: alt_text.into(),
            title: None,
            block_id: None,
        })
    }

    /// Actions block holding interactive elements
    pub fn actions(elements: Vec<BlockElement>) -> Self {
        Block::Actions(ActionsBlock {
            elements,
            block_id: None,
        })
    }

    /// Context block
    pub fn context(elements: Vec<ContextElement>) -> Self {
        Block::Context(ContextBlock {
            elements,
            block_id: None,
        })
    }

    /// Input block wrapping `element`
    pub fn input(label: impl Into<String>, element: impl Into<BlockElement>) -> Self {
        Block::Input(InputBlock::new(label, element))
    }

    /// Block ID, if one was set
    pub fn block_id(&self) -> Option<&str> {
        match self {
            Block::Section(b) => b.block_id.as_deref(),
            Block::Divider(b) => b.block_id.as_deref(),
            Block::Image(b) => b.block_id.as_deref(),
            Block::Actions(b) => b.block_id.as_deref(),
            Block::Context(b) => b.block_id.as_deref(),
            Block::Input(b) => b.block_id.as_deref(),
            Block::Header(b) => b.block_id.as_deref(),
            Block::Unknown(raw) => raw.get("block_id").and_then(Value::as_str),
        }
    }
}

/// Section block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionBlock {
    /// Main text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<TextObject>,
    /// Block ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
    /// Two-column fields
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<TextObject>,
    /// Element shown to the right of the text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessory: Option<BlockElement>,
}

impl SectionBlock {
    /// Create a section with text
    pub fn new(text: TextObject) -> Self {
        Self {
            text: Some(text),
            block_id: None,
            fields: Vec::new(),
            accessory: None,
        }
    }

    /// Set the block ID
    pub fn block_id(mut self, block_id: impl Into<String>) -> Self {
        self.block_id = Some(block_id.into());
        self
    }

    /// Add a field
    pub fn field(mut self, field: TextObject) -> Self {
        self.fields.push(field);
        self
    }

    /// Set the accessory
    pub fn accessory(mut self, accessory: impl Into<BlockElement>) -> Self {
        self.accessory = Some(accessory.into());
        self
    }
}

impl From<SectionBlock> for Block {
    fn from(b: SectionBlock) -> Self {
        Block::Section(b)
    }
}

/// Divider block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DividerBlock {
    /// Block ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
}

/// Image block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageBlock {
    /// Image URL
    pub image_url: String,
    /// Alt text
    pub alt_text: String,
    /// Title shown above the image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<TextObject>,
    /// Block ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
}

/// Actions block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionsBlock {
    /// Interactive elements (up to 25)
    pub elements: Vec<BlockElement>,
    /// Block ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
}

/// Context block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextBlock {
    /// Text and image elements (up to 10)
    pub elements: Vec<ContextElement>,
    /// Block ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
}

/// Element allowed in a context block
#[derive(Debug, Clone, PartialEq)]
pub enum ContextElement {
    /// `plain_text`
    PlainText {
        /// Text content
        text: String,
        /// Render emoji shortcodes
        emoji: Option<bool>,
    },
    /// `mrkdwn`
    Mrkdwn {
        /// Text content
        text: String,
        /// Skip link and mention auto-parsing
        verbatim: Option<bool>,
    },
    /// `image`
    Image {
        /// Image URL
        image_url: String,
        /// Alt text
        alt_text: String,
    },
    /// Element type this crate does not model, kept as received
    Unknown(Value),
}

#[derive(Deserialize)]
struct ContextImage {
    image_url: String,
    alt_text: String,
}

impl Serialize for ContextElement {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ContextElement::PlainText { text, emoji } => TextObject::PlainText {
                text: text.clone(),
                emoji: *emoji,
            }
            .serialize(serializer),
            ContextElement::Mrkdwn { text, verbatim } => TextObject::Mrkdwn {
                text: text.clone(),
                verbatim: *verbatim,
            }
            .serialize(serializer),
            ContextElement::Image {
                image_url,
                alt_text,
            } => tagged::write(
                "image",
                &json!({"image_url": image_url, "alt_text": alt_text}),
                serializer,
            ),
            ContextElement::Unknown(raw) => raw.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for ContextElement {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (tag, value) = tagged::read(deserializer)?;
        let decoded = match tag.as_deref() {
            Some("plain_text") | Some("mrkdwn") => {
                serde_json::from_value::<TextObject>(value).map(ContextElement::from)
            }
            Some("image") => serde_json::from_value::<ContextImage>(value).map(
                |ContextImage {
                     image_url,
                     alt_text,
                 }| ContextElement::Image {
                    image_url,
                    alt_text,
                },
            ),
            _ => Ok(ContextElement::Unknown(value)),
        };
        decoded.map_err(D::Error::custom)
    }
}

impl From<TextObject> for ContextElement {
    fn from(text: TextObject) -> Self {
        match text {
            TextObject::PlainText { text, emoji } => ContextElement::PlainText { text, emoji },
            TextObject::Mrkdwn { text, verbatim } => ContextElement::Mrkdwn { text, verbatim },
        }
    }
}

/// Input block, used in modals and home tabs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputBlock {
    /// Label
    pub label: TextObject,
    /// Input element
    pub element: BlockElement,
    /// Block ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
    /// Hint shown under the input
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<TextObject>,
    /// May be left empty on submit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optional: Option<bool>,
    /// Send a block action when the value changes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dispatch_action: Option<bool>,
}

impl InputBlock {
    /// Create an input block
    pub fn new(label: impl Into<String>, element: impl Into<BlockElement>) -> Self {
        Self {
            label: TextObject::plain(label),
            element: element.into(),
            block_id: None,
            hint: None,
            optional: None,
            dispatch_action: None,
        }
    }

    /// Set the block ID
    pub fn block_id(mut self, block_id: impl Into<String>) -> Self {
        self.block_id = Some(block_id.into());
        self
    }

    /// Set the hint
    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(TextObject::plain(hint));
        self
    }

    /// Allow an empty value
    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = Some(optional);
        self
    }
}

impl From<InputBlock> for Block {
    fn from(b: InputBlock) -> Self {
        Block::Input(b)
    }
}

/// Header block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderBlock {
    /// Plain text, max 150 characters
    pub text: TextObject,
    /// Block ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::{ButtonElement, ImageElement, PlainTextInputElement};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_section_with_accessory() {
        let block: Block = SectionBlock::new(TextObject::markdown("*Deploy* ready"))
            .block_id("deploy")
            .accessory(ImageElement::new("https://example.com/a.png", "logo"))
            .into();

        assert_eq!(
            serde_json::to_value(&block).unwrap(),
            json!({
                "type": "section",
                "text": {"type": "mrkdwn", "text": "*Deploy* ready"},
                "block_id": "deploy",
                "accessory": {
                    "type": "image",
                    "image_url": "https://example.com/a.png",
                    "alt_text": "logo"
                }
            })
        );
        assert_eq!(block.block_id(), Some("deploy"));
    }

    #[test]
    fn test_simple_blocks() {
        assert_eq!(
            serde_json::to_value(Block::divider()).unwrap(),
            json!({"type": "divider"})
        );
        assert_eq!(
            serde_json::to_value(Block::header("Status")).unwrap(),
            json!({"type": "header", "text": {"type": "plain_text", "text": "Status", "emoji": true}})
        );
    }

    #[test]
    fn test_actions_and_context() {
        let blocks = vec![
            Block::actions(vec![ButtonElement::new("Go", "go").into()]),
            Block::context(vec![TextObject::markdown("by <@U1>").into()]),
        ];
        let value = serde_json::to_value(&blocks).unwrap();
        assert_eq!(value[0]["elements"][0]["type"], "button");
        assert_eq!(value[1]["elements"][0], json!({"type": "mrkdwn", "text": "by <@U1>"}));
    }

    #[test]
    fn test_input_block_round_trip() {
        let block: Block = InputBlock::new("Reason", PlainTextInputElement::new("reason").multiline(true))
            .hint("Be brief")
            .optional(true)
            .into();
        let value = serde_json::to_value(&block).unwrap();
        assert_eq!(value["element"]["type"], "plain_text_input");
        let back: Block = serde_json::from_value(value).unwrap();
        assert_eq!(back, block);
    }

    #[test]
    fn test_unknown_block_is_tolerated() {
        let blocks: Vec<Block> = serde_json::from_value(json!([
            {"type": "rich_text", "elements": []},
            {"type": "divider", "block_id": "d1"}
        ]))
        .unwrap();

        assert!(matches!(blocks[0], Block::Unknown(_)));
        assert_eq!(blocks[1].block_id(), Some("d1"));
    }

    #[test]
    fn test_unknown_block_serializes_as_received() {
        let rich_text = json!({
            "type": "rich_text",
            "block_id": "rt1",
            "elements": [{
                "type": "rich_text_section",
                "elements": [{"type": "text", "text": "ship it"}]
            }]
        });

        let block: Block = serde_json::from_value(rich_text.clone()).unwrap();

        assert_eq!(block.block_id(), Some("rt1"));
        assert_eq!(serde_json::to_value(&block).unwrap(), rich_text);
    }

    #[test]
    fn test_context_tolerates_unmodelled_elements() {
        let raw = json!({
            "type": "context",
            "elements": [
                {"type": "mrkdwn", "text": "by <@U1>"},
                {"type": "image", "image_url": "https://example.com/a.png", "alt_text": "avatar"},
                {"type": "user", "user_id": "U1"}
            ]
        });

        let block: Block = serde_json::from_value(raw.clone()).unwrap();

        match &block {
            Block::Context(context) => {
                assert_eq!(
                    context.elements[1],
                    ContextElement::Image {
                        image_url: "https://example.com/a.png".to_string(),
                        alt_text: "avatar".to_string(),
                    }
                );
                assert!(matches!(context.elements[2], ContextElement::Unknown(_)));
            }
            other => panic!("unexpected block: {:?}", other),
        }
        assert_eq!(serde_json::to_value(&block).unwrap(), raw);
    }

    #[test]
    fn test_known_block_with_bad_body_fails() {
        let result = serde_json::from_value::<Block>(json!({"type": "header"}));
        assert!(result.is_err());
    }
}
