//! Object call turns: invoke a platform object and report its result.

use crate::{context::RenderingContext, elements::*};
use vxml_types::{Element, ObjectCall, Parameter, RenderFailure};

/// Form item name of the invoked object.
const OBJECT_ITEM: &str = "object";
/// Dialog-scoped expression holding the object result.
const OBJECT_RESULT: &str = "dialog.object";

pub(crate) fn fill_form(
    form: &mut Element,
    object_call: &ObjectCall,
    context: &dyn RenderingContext,
) -> Result<(), RenderFailure> {
    let mut object = Element::new(OBJECT).with_attribute(NAME_ATTRIBUTE, OBJECT_ITEM);

    let archives = object_call.archives();
    if archives.iter().any(String::is_empty) {
        return Err(unrenderable("object call with an empty archive URI"));
    }
    if !archives.is_empty() {
        object.set_attribute(ARCHIVE_ATTRIBUTE, archives.join(" "));
    }
    object
        .set_optional_attribute(CLASSID_ATTRIBUTE, object_call.class_id())
        .set_optional_attribute(CODEBASE_ATTRIBUTE, object_call.code_base())
        .set_optional_attribute(CODETYPE_ATTRIBUTE, object_call.code_type())
        .set_optional_attribute(DATA_ATTRIBUTE, object_call.data())
        .set_optional_attribute(TYPE_ATTRIBUTE, object_call.media_type());
    if let Some(fetch) = object_call.fetch_configuration() {
        set_fetch_attributes(&mut object, fetch, context);
    }

    for parameter in object_call.parameters() {
        object.append_element(param(parameter));
    }

    let mut filled = Element::new(FILLED);
    filled.append_element(
        Element::new(VAR)
            .with_attribute(NAME_ATTRIBUTE, OBJECT_ITEM)
            .with_attribute(EXPR_ATTRIBUTE, OBJECT_RESULT),
    );
    if let Some(code) = object_call.post_object_script() {
        filled.append_element(script(code));
    }
    filled
        .append_element(script(context.value_result_call(OBJECT_ITEM)))
        .append_element(goto_submit(context));
    object.append_element(filled);

    form.append_element(object);
    Ok(())
}

fn param(parameter: &Parameter) -> Element {
    Element::new(PARAM)
        .with_attribute(NAME_ATTRIBUTE, parameter.name())
        .with_optional_attribute(VALUE_ATTRIBUTE, parameter.value())
        .with_optional_attribute(EXPR_ATTRIBUTE, parameter.expression())
        .with_optional_attribute(TYPE_ATTRIBUTE, parameter.media_type())
        .with_optional_attribute(
            VALUETYPE_ATTRIBUTE,
            parameter.value_type().map(|t| t.as_str()),
        )
}
