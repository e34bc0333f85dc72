//! Element and attribute names, and the building blocks shared by the
//! per-variant renderers.

use crate::context::RenderingContext;
use vxml_types::{AudioItem, Element, FetchConfiguration, Node, RenderFailure};

pub(crate) const VXML: &str = "vxml";
pub(crate) const FORM: &str = "form";
pub(crate) const BLOCK: &str = "block";
pub(crate) const PROMPT: &str = "prompt";
pub(crate) const AUDIO: &str = "audio";
pub(crate) const BREAK: &str = "break";
pub(crate) const OBJECT: &str = "object";
pub(crate) const PARAM: &str = "param";
pub(crate) const FILLED: &str = "filled";
pub(crate) const VAR: &str = "var";
pub(crate) const SCRIPT: &str = "script";
pub(crate) const GOTO: &str = "goto";
pub(crate) const TRANSFER: &str = "transfer";
pub(crate) const IF: &str = "if";
pub(crate) const ELSEIF: &str = "elseif";
pub(crate) const ELSE: &str = "else";
pub(crate) const CATCH: &str = "catch";

pub(crate) const VXML_VERSION: &str = "2.1";
pub(crate) const VXML_NAMESPACE: &str = "http://www.w3.org/2001/vxml";

pub(crate) const APPLICATION_ATTRIBUTE: &str = "application";
pub(crate) const ARCHIVE_ATTRIBUTE: &str = "archive";
pub(crate) const BARGEIN_ATTRIBUTE: &str = "bargein";
pub(crate) const CLASSID_ATTRIBUTE: &str = "classid";
pub(crate) const CODEBASE_ATTRIBUTE: &str = "codebase";
pub(crate) const CODETYPE_ATTRIBUTE: &str = "codetype";
pub(crate) const CONNECTTIMEOUT_ATTRIBUTE: &str = "connecttimeout";
pub(crate) const COND_ATTRIBUTE: &str = "cond";
pub(crate) const DATA_ATTRIBUTE: &str = "data";
pub(crate) const DEST_ATTRIBUTE: &str = "dest";
pub(crate) const EVENT_ATTRIBUTE: &str = "event";
pub(crate) const EXPR_ATTRIBUTE: &str = "expr";
pub(crate) const ID_ATTRIBUTE: &str = "id";
pub(crate) const LANG_ATTRIBUTE: &str = "xml:lang";
pub(crate) const MAXTIME_ATTRIBUTE: &str = "maxtime";
pub(crate) const NAME_ATTRIBUTE: &str = "name";
pub(crate) const NEXT_ATTRIBUTE: &str = "next";
pub(crate) const SRC_ATTRIBUTE: &str = "src";
pub(crate) const TIME_ATTRIBUTE: &str = "time";
pub(crate) const TRANSFERAUDIO_ATTRIBUTE: &str = "transferaudio";
pub(crate) const AAI_ATTRIBUTE: &str = "aai";
pub(crate) const TYPE_ATTRIBUTE: &str = "type";
pub(crate) const VALUE_ATTRIBUTE: &str = "value";
pub(crate) const VALUETYPE_ATTRIBUTE: &str = "valuetype";
pub(crate) const VERSION_ATTRIBUTE: &str = "version";
pub(crate) const XMLNS_ATTRIBUTE: &str = "xmlns";

pub(crate) const FETCHHINT_ATTRIBUTE: &str = "fetchhint";
pub(crate) const FETCHTIMEOUT_ATTRIBUTE: &str = "fetchtimeout";
pub(crate) const MAXAGE_ATTRIBUTE: &str = "maxage";
pub(crate) const MAXSTALE_ATTRIBUTE: &str = "maxstale";

/// `<goto next="…"/>` to the dialogue's continuation target.
pub(crate) fn goto_submit(context: &dyn RenderingContext) -> Element {
    Element::new(GOTO).with_attribute(NEXT_ATTRIBUTE, context.submit_target())
}

/// `<script>` holding `code`.
pub(crate) fn script(code: impl Into<String>) -> Element {
    Element::new(SCRIPT).with_text(code)
}

/// `<prompt>` playing `items` in order.
pub(crate) fn prompt(items: &[AudioItem]) -> Result<Element, RenderFailure> {
    let mut prompt = Element::new(PROMPT);
    append_audio_items(&mut prompt, items)?;
    Ok(prompt)
}

/// Append the markup of each audio item to `parent`, in order.
///
/// Adjacent synthesized texts are separated by a single space.
pub(crate) fn append_audio_items(
    parent: &mut Element,
    items: &[AudioItem],
) -> Result<(), RenderFailure> {
    for item in items {
        match item {
            AudioItem::SpeechSynthesis { text } => {
                if text.is_empty() {
                    return Err(unrenderable("speech synthesis with empty text"));
                }
                if matches!(parent.children().last(), Some(Node::Text(_))) {
                    parent.append_text(" ");
                }
                parent.append_text(text.as_str());
            }
            AudioItem::AudioFile {
                location,
                alternative,
            } => {
                if location.is_empty() {
                    return Err(unrenderable("audio file with empty location"));
                }
                let mut audio = Element::new(AUDIO).with_attribute(SRC_ATTRIBUTE, location.as_str());
                if let Some(alternative) = alternative {
                    audio.append_text(alternative.as_str());
                }
                parent.append_element(audio);
            }
            AudioItem::Pause { duration } => {
                parent.append_element(
                    Element::new(BREAK).with_attribute(TIME_ATTRIBUTE, duration.to_string()),
                );
            }
            AudioItem::Recording { expression } => {
                if expression.is_empty() {
                    return Err(unrenderable("recording with empty expression"));
                }
                parent.append_element(
                    Element::new(AUDIO).with_attribute(EXPR_ATTRIBUTE, expression.as_str()),
                );
            }
        }
    }
    Ok(())
}

/// Set the fetch attributes of `config` on `element`.
///
/// Cache ages are whole seconds, rounded up; timeouts are time designations. Attempt
/// settings have no standard attribute and are only rendered under the
/// names the context declares.
pub(crate) fn set_fetch_attributes(
    element: &mut Element,
    config: &FetchConfiguration,
    context: &dyn RenderingContext,
) {
    element
        .set_optional_attribute(FETCHHINT_ATTRIBUTE, config.fetch_hint().map(|h| h.as_str()))
        .set_optional_attribute(
            FETCHTIMEOUT_ATTRIBUTE,
            config.fetch_timeout().map(|d| d.to_string()),
        )
        .set_optional_attribute(
            MAXAGE_ATTRIBUTE,
            config.max_age().map(|d| d.as_secs_rounded_up().to_string()),
        )
        .set_optional_attribute(
            MAXSTALE_ATTRIBUTE,
            config.max_stale().map(|d| d.as_secs_rounded_up().to_string()),
        );
    if let Some(attribute) = context.fetch_attempts_attribute() {
        element.set_optional_attribute(attribute, config.fetch_attempts().map(|n| n.to_string()));
    }
    if let Some(attribute) = context.fetch_attempt_timeout_attribute() {
        element.set_optional_attribute(
            attribute,
            config.fetch_attempt_timeout().map(|d| d.to_string()),
        );
    }
}

pub(crate) fn unrenderable(reason: &str) -> RenderFailure {
    RenderFailure::Unrenderable(reason.to_owned())
}
