//! Outcome of a supervised call transfer.
//!
//! The set of outcomes is closed: whatever code a carrier reports is
//! mapped onto one of the eight [`TransferStatus`] members. Codes the
//! model does not recognize become [`TransferStatus::Unknown`], which
//! keeps the original code for diagnostics.
//!
//! See <https://www.w3.org/TR/voicexml20/#dml2.3.7.2.2>.

use crate::json::JsonSerializable;
use serde_json::Value;
use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// The callee did not answer within the connect timeout.
pub const NO_ANSWER: &str = "noanswer";
/// The caller hung up during the transfer.
pub const NEAR_END_DISCONNECT: &str = "near_end_disconnect";
/// The callee hung up.
pub const FAR_END_DISCONNECT: &str = "far_end_disconnect";
/// The network dropped the connection.
pub const NETWORK_DISCONNECT: &str = "network_disconnect";
/// The transfer reached its maximum duration.
pub const MAXTIME_DISCONNECT: &str = "maxtime_disconnect";
/// The callee line was busy.
pub const BUSY: &str = "busy";
/// An intermediate network refused the call.
pub const NETWORK_BUSY: &str = "network_busy";
/// Any other outcome.
pub const UNKNOWN: &str = "unknown";

/// The observed outcome of a bridge or consultation transfer.
///
/// Equality and hashing consider the outcome only. The raw carrier code
/// kept by [`Unknown`](Self::Unknown) is diagnostic data and does not
/// take part in comparisons or in the canonical JSON form.
#[derive(Debug, Clone)]
pub enum TransferStatus {
    /// See [`NO_ANSWER`].
    NoAnswer,
    /// See [`NEAR_END_DISCONNECT`].
    NearEndDisconnect,
    /// See [`FAR_END_DISCONNECT`].
    FarEndDisconnect,
    /// See [`NETWORK_DISCONNECT`].
    NetworkDisconnect,
    /// See [`MAXTIME_DISCONNECT`].
    MaxTimeDisconnect,
    /// See [`BUSY`].
    Busy,
    /// See [`NETWORK_BUSY`].
    NetworkBusy,
    /// See [`UNKNOWN`].
    Unknown {
        /// The code as reported, when it was not `unknown` itself.
        raw: Option<String>,
    },
}

impl TransferStatus {
    /// Every outcome, in the order the compiler emits completion branches.
    pub const ALL: [TransferStatus; 8] = [
        Self::NoAnswer,
        Self::NearEndDisconnect,
        Self::FarEndDisconnect,
        Self::NetworkDisconnect,
        Self::MaxTimeDisconnect,
        Self::Busy,
        Self::NetworkBusy,
        Self::Unknown { raw: None },
    ];

    /// Map a reported code onto the closed outcome set. Never fails.
    pub fn from_code(code: &str) -> Self {
        match code {
            NO_ANSWER => Self::NoAnswer,
            NEAR_END_DISCONNECT => Self::NearEndDisconnect,
            FAR_END_DISCONNECT => Self::FarEndDisconnect,
            NETWORK_DISCONNECT => Self::NetworkDisconnect,
            MAXTIME_DISCONNECT => Self::MaxTimeDisconnect,
            BUSY => Self::Busy,
            NETWORK_BUSY => Self::NetworkBusy,
            UNKNOWN => Self::Unknown { raw: None },
            other => Self::Unknown {
                raw: Some(other.to_owned()),
            },
        }
    }

    /// The canonical code of this outcome.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NoAnswer => NO_ANSWER,
            Self::NearEndDisconnect => NEAR_END_DISCONNECT,
            Self::FarEndDisconnect => FAR_END_DISCONNECT,
            Self::NetworkDisconnect => NETWORK_DISCONNECT,
            Self::MaxTimeDisconnect => MAXTIME_DISCONNECT,
            Self::Busy => BUSY,
            Self::NetworkBusy => NETWORK_BUSY,
            Self::Unknown { .. } => UNKNOWN,
        }
    }

    /// The unrecognized code this status was coerced from, if any.
    pub fn raw_code(&self) -> Option<&str> {
        match self {
            Self::Unknown { raw } => raw.as_deref(),
            _ => None,
        }
    }

    /// True for outcomes where the connection was established and later
    /// dropped.
    pub fn is_disconnect(&self) -> bool {
        matches!(
            self,
            Self::NearEndDisconnect
                | Self::FarEndDisconnect
                | Self::NetworkDisconnect
                | Self::MaxTimeDisconnect
        )
    }

    /// True when the callee could not be reached at all.
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::NoAnswer | Self::Busy | Self::NetworkBusy)
    }
}

impl PartialEq for TransferStatus {
    fn eq(&self, other: &Self) -> bool {
        self.code() == other.code()
    }
}

impl Eq for TransferStatus {}

impl Hash for TransferStatus {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code().hash(state);
    }
}

impl FromStr for TransferStatus {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_code(s))
    }
}

impl fmt::Display for TransferStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.raw_code() {
            Some(raw) => write!(f, "{UNKNOWN} ({raw})"),
            None => f.write_str(self.code()),
        }
    }
}

impl JsonSerializable for TransferStatus {
    fn as_json(&self) -> Value {
        Value::from(self.code())
    }
}
