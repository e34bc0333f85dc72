//! The turn taxonomy: one step of a voice dialogue.
//!
//! A [`Turn`] is a name, an ordered list of document adapters and one
//! variant payload from the sealed [`TurnKind`] set. Turns are built
//! through validating constructors ([`Turn::message`],
//! [`Turn::object_call`], [`Turn::transfer`]) or the per-variant
//! builders, and are immutable afterwards apart from adapter appends.

pub mod message;
pub mod object_call;
pub mod transfer;

use crate::{
    adapter::{AdapterRef, DocumentAdapter},
    audio::{AudioItem, non_empty},
    error::ValidationError,
    json::JsonSerializable,
};
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

pub use message::{Message, MessageBuilder};
pub use object_call::{ObjectCall, ObjectCallBuilder, Parameter, ParameterBuilder, ParameterValueType};
pub use transfer::{Transfer, TransferBuilder, TransferStyle};

const NAME_PROPERTY: &str = "name";
const DATA_PROPERTY: &str = "data";

/// The variant payload of a turn.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TurnKind {
    /// Play a sequence of audio items.
    Message(Message),
    /// Invoke a platform object.
    ObjectCall(ObjectCall),
    /// Transfer the call.
    Transfer(Transfer),
}

impl TurnKind {
    /// Short type tag of the variant.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Message(_) => "message",
            Self::ObjectCall(_) => "object",
            Self::Transfer(_) => "transfer",
        }
    }

    fn data(&self) -> Value {
        match self {
            Self::Message(message) => message.as_json(),
            Self::ObjectCall(object_call) => object_call.as_json(),
            Self::Transfer(transfer) => transfer.as_json(),
        }
    }

    /// Members added next to `name` and `data`. Output turns add none.
    fn top_level_properties(&self, _object: &mut Map<String, Value>) {
        match self {
            Self::Message(_) | Self::ObjectCall(_) | Self::Transfer(_) => {}
        }
    }
}

/// One compiled step of a voice dialogue.
///
/// Equality and hashing are structural over the name, the adapters
/// (compared by identity) and every variant field.
///
/// # Concurrency
///
/// A turn is `Send + Sync` and may be compiled from many threads at
/// once. Adapters must all be registered before the turn is shared;
/// [`add_adapter`](Self::add_adapter) takes `&mut self` for that reason.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Turn {
    name: String,
    adapters: Vec<AdapterRef>,
    kind: TurnKind,
}

impl Turn {
    /// Validate the name and wrap a variant payload.
    pub fn new(name: impl Into<String>, kind: TurnKind) -> Result<Self, ValidationError> {
        Ok(Self {
            name: non_empty(name.into(), "name")?,
            adapters: Vec::new(),
            kind,
        })
    }

    /// A message turn with default language and barge-in. At least one
    /// audio item is required.
    pub fn message(
        name: impl Into<String>,
        audio_items: impl IntoIterator<Item = AudioItem>,
    ) -> Result<Self, ValidationError> {
        Message::builder(name).audio_items(audio_items).build()
    }

    /// An object call with no attributes, parameters or script.
    pub fn object_call(name: impl Into<String>) -> Result<Self, ValidationError> {
        ObjectCall::builder(name).build()
    }

    /// A transfer of the given style to `destination`.
    pub fn transfer(
        name: impl Into<String>,
        destination: impl Into<String>,
        style: TransferStyle,
    ) -> Result<Self, ValidationError> {
        Transfer::builder(name, style).destination(destination).build()
    }

    /// The turn name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The variant payload.
    pub fn kind(&self) -> &TurnKind {
        &self.kind
    }

    /// Short type tag of the variant (`message`, `object`, `transfer`).
    pub fn type_name(&self) -> &'static str {
        self.kind.type_name()
    }

    /// Registered adapters, in registration order.
    pub fn adapters(&self) -> &[AdapterRef] {
        &self.adapters
    }

    /// Append an adapter to run after compilation.
    pub fn add_adapter(&mut self, adapter: impl Into<AdapterRef>) {
        self.adapters.push(adapter.into());
    }

    /// Builder-style [`add_adapter`](Self::add_adapter) taking an
    /// adapter by value.
    pub fn with_adapter(mut self, adapter: impl DocumentAdapter + 'static) -> Self {
        self.adapters.push(AdapterRef::new(adapter));
        self
    }

    /// Append an already shared adapter.
    pub fn add_shared_adapter(&mut self, adapter: Arc<dyn DocumentAdapter>) {
        self.adapters.push(AdapterRef::from_arc(adapter));
    }

    /// The message payload, if this is a message turn.
    pub fn as_message(&self) -> Option<&Message> {
        match &self.kind {
            TurnKind::Message(m) => Some(m),
            _ => None,
        }
    }

    /// The object call payload, if this is an object call turn.
    pub fn as_object_call(&self) -> Option<&ObjectCall> {
        match &self.kind {
            TurnKind::ObjectCall(o) => Some(o),
            _ => None,
        }
    }

    /// The transfer payload, if this is a transfer turn.
    pub fn as_transfer(&self) -> Option<&Transfer> {
        match &self.kind {
            TurnKind::Transfer(t) => Some(t),
            _ => None,
        }
    }
}

impl JsonSerializable for Turn {
    fn as_json(&self) -> Value {
        let mut object = Map::new();
        object.insert(NAME_PROPERTY.into(), Value::from(self.name.as_str()));
        object.insert(DATA_PROPERTY.into(), self.kind.data());
        self.kind.top_level_properties(&mut object);
        Value::Object(object)
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_json())
    }
}

/// Reject an explicitly set optional string that is empty.
pub(crate) fn optional_non_empty(
    value: Option<String>,
    field: &'static str,
) -> Result<Option<String>, ValidationError> {
    value.map(|v| non_empty(v, field)).transpose()
}
