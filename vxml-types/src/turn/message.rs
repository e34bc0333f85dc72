//! Message turns: play a sequence of audio items.
//!
//! See <https://www.w3.org/TR/voicexml20/#dml4.1.8>.

use super::{Turn, TurnKind, optional_non_empty};
use crate::{audio::AudioItem, error::ValidationError, json::JsonSerializable};
use serde_json::{Value, json};

/// Payload of a message turn.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Message {
    audio_items: Vec<AudioItem>,
    language: Option<String>,
    barge_in: Option<bool>,
}

impl Message {
    /// Start building a message turn.
    pub fn builder(name: impl Into<String>) -> MessageBuilder {
        MessageBuilder {
            name: name.into(),
            audio_items: Vec::new(),
            language: None,
            barge_in: None,
        }
    }

    /// The audio items, in play order. Never empty.
    pub fn audio_items(&self) -> &[AudioItem] {
        &self.audio_items
    }

    /// Language tag (e.g. `en-US`); `None` defers to the platform.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// `Some(true)` enables barge-in, `Some(false)` disables it, `None`
    /// defers to the platform.
    pub fn barge_in(&self) -> Option<bool> {
        self.barge_in
    }
}

impl JsonSerializable for Message {
    fn as_json(&self) -> Value {
        json!({
            "audioItems": self.audio_items.as_json(),
            "language": self.language,
            "bargeIn": self.barge_in,
        })
    }
}

/// Builder for message turns.
#[derive(Debug, Clone)]
pub struct MessageBuilder {
    name: String,
    audio_items: Vec<AudioItem>,
    language: Option<String>,
    barge_in: Option<bool>,
}

impl MessageBuilder {
    /// Append one audio item.
    pub fn audio_item(mut self, item: AudioItem) -> Self {
        self.audio_items.push(item);
        self
    }

    /// Append several audio items, keeping their order.
    pub fn audio_items(mut self, items: impl IntoIterator<Item = AudioItem>) -> Self {
        self.audio_items.extend(items);
        self
    }

    /// Set the language tag.
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Set the barge-in flag. `None` restores the platform default.
    pub fn barge_in(mut self, barge_in: Option<bool>) -> Self {
        self.barge_in = barge_in;
        self
    }

    /// Validate and freeze the turn.
    pub fn build(self) -> Result<Turn, ValidationError> {
        if self.audio_items.is_empty() {
            return Err(ValidationError::Empty {
                field: "audioItems",
            });
        }
        let message = Message {
            audio_items: self.audio_items,
            language: optional_non_empty(self.language, "language")?,
            barge_in: self.barge_in,
        };
        Turn::new(self.name, TurnKind::Message(message))
    }
}
