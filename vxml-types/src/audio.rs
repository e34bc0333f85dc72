//! Audio items played by prompts.

use crate::{duration::DurationMs, error::ValidationError, json::JsonSerializable};
use serde_json::{Value, json};

/// One element of a prompt, played in sequence with its siblings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AudioItem {
    /// Text rendered by the platform's speech synthesizer.
    SpeechSynthesis {
        /// The text to speak.
        text: String,
    },
    /// A recorded prompt fetched from a URI.
    AudioFile {
        /// URI of the audio resource.
        location: String,
        /// Text spoken instead when the resource cannot be played.
        alternative: Option<String>,
    },
    /// A silence.
    Pause {
        /// Length of the silence.
        duration: DurationMs,
    },
    /// Audio held in a script variable, typically a previous recording.
    Recording {
        /// ECMAScript expression evaluating to the audio.
        expression: String,
    },
}

impl AudioItem {
    /// Synthesized speech. The text must not be empty.
    pub fn speech(text: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self::SpeechSynthesis {
            text: non_empty(text.into(), "text")?,
        })
    }

    /// A recorded prompt. The location must not be empty.
    pub fn audio_file(location: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self::AudioFile {
            location: non_empty(location.into(), "location")?,
            alternative: None,
        })
    }

    /// A recorded prompt with a spoken fallback.
    pub fn audio_file_with_alternative(
        location: impl Into<String>,
        alternative: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self::AudioFile {
            location: non_empty(location.into(), "location")?,
            alternative: Some(non_empty(alternative.into(), "alternative")?),
        })
    }

    /// A silence of the given length.
    pub fn pause(duration: DurationMs) -> Self {
        Self::Pause { duration }
    }

    /// Audio evaluated from an ECMAScript expression.
    pub fn recording(expression: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self::Recording {
            expression: non_empty(expression.into(), "expression")?,
        })
    }

    /// Short type tag used in the canonical JSON form.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::SpeechSynthesis { .. } => "speechSynthesis",
            Self::AudioFile { .. } => "audioFile",
            Self::Pause { .. } => "pause",
            Self::Recording { .. } => "recording",
        }
    }
}

impl JsonSerializable for AudioItem {
    fn as_json(&self) -> Value {
        match self {
            Self::SpeechSynthesis { text } => json!({
                "type": self.type_name(),
                "text": text,
            }),
            Self::AudioFile {
                location,
                alternative,
            } => json!({
                "type": self.type_name(),
                "location": location,
                "alternative": alternative,
            }),
            Self::Pause { duration } => json!({
                "type": self.type_name(),
                "duration": duration.as_millis(),
            }),
            Self::Recording { expression } => json!({
                "type": self.type_name(),
                "expression": expression,
            }),
        }
    }
}

pub(crate) fn non_empty(value: String, field: &'static str) -> Result<String, ValidationError> {
    if value.is_empty() {
        Err(ValidationError::Empty { field })
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_rejected() {
        assert_eq!(
            AudioItem::speech(""),
            Err(ValidationError::Empty { field: "text" })
        );
    }

    #[test]
    fn missing_alternative_is_null_in_json() {
        let item = AudioItem::audio_file("welcome.wav").unwrap();
        assert_eq!(
            item.as_json(),
            json!({"type": "audioFile", "location": "welcome.wav", "alternative": null})
        );
    }

    #[test]
    fn pause_serializes_millis() {
        let item = AudioItem::pause(DurationMs::from_millis(750));
        assert_eq!(item.as_json(), json!({"type": "pause", "duration": 750}));
    }
}
