use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Platform-assigned slash command id.
///
/// The chat platform encodes 64-bit ids as JSON strings (`"3"`), older
/// payloads and hand-written fixtures use plain numbers. Both decode; encoding
/// always produces the string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommandId(pub i64);

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for CommandId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCommandId {
    Number(i64),
    Text(String),
}

impl<'de> Deserialize<'de> for CommandId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match RawCommandId::deserialize(deserializer)? {
            RawCommandId::Number(id) => Ok(Self(id)),
            RawCommandId::Text(raw) => raw
                .trim()
                .parse::<i64>()
                .map(Self)
                .map_err(|_| de::Error::custom(format!("invalid command id `{raw}`"))),
        }
    }
}

/// Kind of event the platform delivers to the webhook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    Message,
    AddedToSpace,
    RemovedFromSpace,
    CardClicked,
    #[default]
    #[serde(other)]
    Unknown,
}
