//! Message turns: one block, one prompt, then continue.

use crate::{context::RenderingContext, elements::*};
use vxml_types::{Element, Message, RenderFailure};

pub(crate) fn fill_form(
    form: &mut Element,
    message: &Message,
    context: &dyn RenderingContext,
) -> Result<(), RenderFailure> {
    let mut prompt = Element::new(PROMPT);
    prompt
        .set_optional_attribute(LANG_ATTRIBUTE, message.language())
        .set_optional_attribute(BARGEIN_ATTRIBUTE, message.barge_in().map(|b| b.to_string()));
    append_audio_items(&mut prompt, message.audio_items())?;

    let mut block = Element::new(BLOCK);
    block
        .append_element(prompt)
        .append_element(goto_submit(context));
    form.append_element(block);
    Ok(())
}
