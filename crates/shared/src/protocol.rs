use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::{CommandId, EventType};

/// Event posted by the chat platform to the bot webhook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundEvent {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub event_type: EventType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: Message,
}

/// The platform sends `null` for unset fields; decode them like missing ones.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl InboundEvent {
    /// The slash command carried by a `MESSAGE` event, if any.
    pub fn slash_command(&self) -> Option<CommandId> {
        if self.event_type != EventType::Message {
            return None;
        }
        self.message
            .slash_command
            .as_ref()
            .map(|command| command.command_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Message {
    #[serde(deserialize_with = "null_as_default")]
    pub sender: User,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slash_command: Option<SlashCommand>,
    #[serde(deserialize_with = "null_as_default")]
    pub argument_text: String,
    #[serde(deserialize_with = "null_as_default")]
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct User {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub display_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlashCommand {
    pub command_id: CommandId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextResponse {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardResponse {
    pub cards: Vec<Card>,
}

/// Body written back to the platform: plain text or cards, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OutboundResponse {
    Text(TextResponse),
    Cards(CardResponse),
}

impl OutboundResponse {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(TextResponse { text: text.into() })
    }

    pub fn card(card: Card) -> Self {
        Self::Cards(CardResponse { cards: vec![card] })
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(response) => Some(&response.text),
            Self::Cards(_) => None,
        }
    }

    pub fn cards(&self) -> &[Card] {
        match self {
            Self::Text(_) => &[],
            Self::Cards(response) => &response.cards,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<CardHeader>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<Section>,
}

impl Card {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            header: Some(CardHeader {
                title: title.into(),
            }),
            sections: Vec::new(),
        }
    }

    pub fn with_paragraph(mut self, text: impl Into<String>) -> Self {
        self.sections.push(Section {
            widgets: vec![WidgetMarkup::paragraph(text)],
        });
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.header.as_ref().map(|header| header.title.as_str())
    }

    /// Texts of every paragraph widget, in section order.
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.sections
            .iter()
            .flat_map(|section| section.widgets.iter())
            .filter_map(|widget| widget.text_paragraph.as_ref())
            .map(|paragraph| paragraph.text.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardHeader {
    pub title: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    #[serde(default)]
    pub widgets: Vec<WidgetMarkup>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetMarkup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_paragraph: Option<TextParagraph>,
}

impl WidgetMarkup {
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self {
            text_paragraph: Some(TextParagraph { text: text.into() }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextParagraph {
    pub text: String,
}

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;
