//! Transfer turns: connect the caller to another party.
//!
//! Three styles exist. A **blind** transfer hands the call to the
//! network and releases it; the outcome is never observed. A **bridge**
//! transfer keeps the original call leg and resumes the dialogue when
//! the transferred call ends. A **consultation** transfer behaves like a
//! blind transfer once connected, but the outcome of the call setup is
//! observed and the caller is not dropped if it fails. Bridge and
//! consultation are the supervised styles: their outcome is reported as
//! a [`TransferStatus`](crate::transfer_status::TransferStatus).
//!
//! See <https://www.w3.org/TR/voicexml21/#sec-xfer-consultation>.

use super::{Turn, TurnKind, optional_non_empty};
use crate::{
    audio::{AudioItem, non_empty},
    duration::DurationMs,
    error::ValidationError,
    json::JsonSerializable,
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::fmt;

/// How the original call leg is handled during a transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferStyle {
    /// Keep the caller; resume when the transferred call ends.
    Bridge,
    /// Release the caller immediately.
    Blind,
    /// Observe call setup, then release the caller on success.
    Consultation,
}

impl TransferStyle {
    /// The markup value of this style.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bridge => "bridge",
            Self::Blind => "blind",
            Self::Consultation => "consultation",
        }
    }

    /// True when the transfer outcome is observed before the original
    /// call leg is released.
    pub fn is_supervised(&self) -> bool {
        !matches!(self, Self::Blind)
    }

    /// True when a successful transfer drops the original call leg, which
    /// the interpreter reports as `connection.disconnect.transfer`.
    pub fn releases_caller(&self) -> bool {
        !matches!(self, Self::Bridge)
    }
}

impl fmt::Display for TransferStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload of a transfer turn.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Transfer {
    destination: String,
    style: TransferStyle,
    aai: Option<String>,
    transfer_audio: Option<String>,
    audio_items: Vec<AudioItem>,
    connect_timeout: Option<DurationMs>,
    max_time: Option<DurationMs>,
}

impl Transfer {
    /// Start building a transfer turn of the given style.
    pub fn builder(name: impl Into<String>, style: TransferStyle) -> TransferBuilder {
        TransferBuilder {
            name: name.into(),
            destination: None,
            style,
            aai: None,
            transfer_audio: None,
            audio_items: Vec::new(),
            connect_timeout: None,
            max_time: None,
        }
    }

    /// URI of the destination (telephone number, SIP address).
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// The transfer style.
    pub fn style(&self) -> TransferStyle {
        self.style
    }

    /// Application-to-application information sent to the destination.
    pub fn aai(&self) -> Option<&str> {
        self.aai.as_deref()
    }

    /// URI of audio played to the caller while the transfer connects.
    pub fn transfer_audio(&self) -> Option<&str> {
        self.transfer_audio.as_deref()
    }

    /// Audio played before the transfer starts. May be empty.
    pub fn audio_items(&self) -> &[AudioItem] {
        &self.audio_items
    }

    /// Time to wait for the destination to answer. Supervised styles only.
    pub fn connect_timeout(&self) -> Option<DurationMs> {
        self.connect_timeout
    }

    /// Maximum duration of the transferred call. Bridge only.
    pub fn max_time(&self) -> Option<DurationMs> {
        self.max_time
    }
}

impl JsonSerializable for Transfer {
    fn as_json(&self) -> Value {
        json!({
            "destination": self.destination,
            "transferType": self.style.as_str(),
            "aai": self.aai,
            "transferAudio": self.transfer_audio,
            "audioItems": self.audio_items.as_json(),
            "connectTimeout": self.connect_timeout.map(|d| d.as_millis()),
            "maxTime": self.max_time.map(|d| d.as_millis()),
        })
    }
}

/// Builder for transfer turns.
#[derive(Debug, Clone)]
pub struct TransferBuilder {
    name: String,
    destination: Option<String>,
    style: TransferStyle,
    aai: Option<String>,
    transfer_audio: Option<String>,
    audio_items: Vec<AudioItem>,
    connect_timeout: Option<DurationMs>,
    max_time: Option<DurationMs>,
}

impl TransferBuilder {
    /// Shorthand for a blind transfer builder.
    pub fn blind(name: impl Into<String>) -> Self {
        Transfer::builder(name, TransferStyle::Blind)
    }

    /// Shorthand for a bridge transfer builder.
    pub fn bridge(name: impl Into<String>) -> Self {
        Transfer::builder(name, TransferStyle::Bridge)
    }

    /// Shorthand for a consultation transfer builder.
    pub fn consultation(name: impl Into<String>) -> Self {
        Transfer::builder(name, TransferStyle::Consultation)
    }

    /// Set the destination URI. Required.
    pub fn destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = Some(destination.into());
        self
    }

    /// Set the application-to-application information.
    pub fn aai(mut self, aai: impl Into<String>) -> Self {
        self.aai = Some(aai.into());
        self
    }

    /// Set the audio played while connecting.
    pub fn transfer_audio(mut self, uri: impl Into<String>) -> Self {
        self.transfer_audio = Some(uri.into());
        self
    }

    /// Append an audio item played before the transfer.
    pub fn audio_item(mut self, item: AudioItem) -> Self {
        self.audio_items.push(item);
        self
    }

    /// Set the connect timeout.
    pub fn connect_timeout(mut self, timeout: DurationMs) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Set the maximum call duration.
    pub fn max_time(mut self, max_time: DurationMs) -> Self {
        self.max_time = Some(max_time);
        self
    }

    /// Validate and freeze the turn.
    pub fn build(self) -> Result<Turn, ValidationError> {
        let destination = self
            .destination
            .ok_or(ValidationError::Missing {
                field: "destination",
            })
            .and_then(|d| non_empty(d, "destination"))?;
        if self.connect_timeout.is_some() && !self.style.is_supervised() {
            return Err(ValidationError::UnsupportedTransferOption {
                option: "connectTimeout",
                style: self.style.as_str(),
            });
        }
        if self.max_time.is_some() && self.style != TransferStyle::Bridge {
            return Err(ValidationError::UnsupportedTransferOption {
                option: "maxTime",
                style: self.style.as_str(),
            });
        }
        let transfer = Transfer {
            destination,
            style: self.style,
            aai: optional_non_empty(self.aai, "aai")?,
            transfer_audio: optional_non_empty(self.transfer_audio, "transferAudio")?,
            audio_items: self.audio_items,
            connect_timeout: self.connect_timeout,
            max_time: self.max_time,
        };
        Turn::new(self.name, TurnKind::Transfer(transfer))
    }
}
