//! The document compiler.

use crate::{
    context::{DialogueContext, RenderingContext},
    elements::*,
    message, object_call, transfer,
};
use vxml_adapters::{AdapterPipeline, apply};
use vxml_types::{AdapterRef, Document, Element, RenderError, RenderFailure, Turn, TurnKind};

/// Compile `turn` into a document under `context`.
///
/// The variant content is rendered into a single form, then the turn's
/// adapters run over the document in registration order. The first
/// failure aborts compilation and is reported against the turn's name.
pub fn compile(turn: &Turn, context: &dyn RenderingContext) -> Result<Document, RenderError> {
    tracing::debug!(
        turn = turn.name(),
        kind = turn.type_name(),
        adapters = turn.adapters().len(),
        "vxml.render.start"
    );
    let mut document = render(turn, context).map_err(|e| failed(turn, e))?;
    apply(turn.adapters(), &mut document).map_err(|e| failed(turn, e.into()))?;
    well_formed(&document).map_err(|e| failed(turn, e))?;
    tracing::debug!(
        turn = turn.name(),
        elements = document.root().descendants().len(),
        "vxml.render.complete"
    );
    Ok(document)
}

fn render(turn: &Turn, context: &dyn RenderingContext) -> Result<Document, RenderFailure> {
    check_context(context)?;
    let mut form = Element::new(FORM).with_attribute(ID_ATTRIBUTE, context.form_id());
    match turn.kind() {
        TurnKind::Message(m) => message::fill_form(&mut form, m, context)?,
        TurnKind::ObjectCall(o) => object_call::fill_form(&mut form, o, context)?,
        TurnKind::Transfer(t) => transfer::fill_form(&mut form, t, context)?,
    }

    let root = Element::new(VXML)
        .with_attribute(VERSION_ATTRIBUTE, VXML_VERSION)
        .with_attribute(XMLNS_ATTRIBUTE, VXML_NAMESPACE)
        .with_optional_attribute(APPLICATION_ATTRIBUTE, context.application_root())
        .with_child(form);
    Ok(Document::new(root))
}

/// Names the context contributes to every document must be usable.
fn check_context(context: &dyn RenderingContext) -> Result<(), RenderFailure> {
    let required = [
        ("scope object", context.scope_object()),
        ("value result function", context.value_result_function()),
        ("transfer status function", context.transfer_status_function()),
        ("submit target", context.submit_target()),
        ("form id", context.form_id()),
    ];
    if let Some((what, _)) = required.iter().find(|(_, value)| value.is_empty()) {
        return Err(unrenderable(&format!("rendering context has an empty {what}")));
    }
    let optional = [
        ("application root", context.application_root()),
        ("fetch attempts attribute", context.fetch_attempts_attribute()),
        ("fetch attempt timeout attribute", context.fetch_attempt_timeout_attribute()),
    ];
    if let Some((what, _)) = optional.iter().find(|(_, value)| *value == Some("")) {
        return Err(unrenderable(&format!("rendering context has an empty {what}")));
    }
    Ok(())
}

fn well_formed(document: &Document) -> Result<(), RenderFailure> {
    match document.find_invalid_char() {
        Some(c) => Err(unrenderable(&format!(
            "character U+{:04X} cannot appear in markup",
            u32::from(c)
        ))),
        None => Ok(()),
    }
}

fn failed(turn: &Turn, failure: RenderFailure) -> RenderError {
    if let RenderFailure::Unrenderable(reason) = &failure {
        tracing::warn!(turn = turn.name(), reason = %reason, "vxml.render.failed");
    }
    RenderError::new(turn.name(), failure)
}

/// A reusable compiler: a rendering context plus adapters applied to
/// every document it produces.
///
/// Compiler-wide adapters run after the turn's own adapters.
///
/// # Example
///
/// ```
/// use vxml_render::{Compiler, DialogueContext};
/// use vxml_types::{AudioItem, Turn};
///
/// let compiler = Compiler::new(DialogueContext::new());
/// let turn = Turn::message("greeting", [AudioItem::speech("Welcome").unwrap()]).unwrap();
/// let document = compiler.compile(&turn).unwrap();
/// assert_eq!(document.find_all("prompt").len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Compiler<C = DialogueContext> {
    context: C,
    adapters: AdapterPipeline,
}

impl<C: RenderingContext> Compiler<C> {
    /// Create a compiler over `context` with no compiler-wide adapters.
    pub fn new(context: C) -> Self {
        Self {
            context,
            adapters: AdapterPipeline::new(),
        }
    }

    /// Append an adapter applied to every compiled document.
    pub fn add_adapter(&mut self, adapter: impl Into<AdapterRef>) {
        self.adapters.add(adapter);
    }

    /// The rendering context.
    pub fn context(&self) -> &C {
        &self.context
    }

    /// Compile `turn`, then run the compiler-wide adapters.
    pub fn compile(&self, turn: &Turn) -> Result<Document, RenderError> {
        let mut document = compile(turn, &self.context)?;
        self.adapters
            .run(&mut document)
            .map_err(|e| RenderError::new(turn.name(), e))?;
        well_formed(&document).map_err(|e| failed(turn, e))?;
        Ok(document)
    }

    /// Compile `turn` straight to markup.
    pub fn compile_to_string(&self, turn: &Turn) -> Result<String, RenderError> {
        self.compile(turn).map(|document| document.to_xml())
    }
}
