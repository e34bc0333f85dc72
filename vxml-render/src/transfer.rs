//! Transfer turns.
//!
//! Supervised transfers report their outcome through one completion
//! branch per [`TransferStatus`]; anything the interpreter reports
//! outside that set is passed on raw and coerced by the receiver. A
//! blind transfer has no outcome: success shows up as the disconnect
//! event, which is caught so the dialogue still continues.

use crate::{context::RenderingContext, elements::*};
use vxml_types::{Element, RenderFailure, Transfer, TransferStatus};

/// Form item name of the transfer; also its result variable.
const TRANSFER_ITEM: &str = "transfer";
/// Event thrown when a transfer hands the call off.
const DISCONNECT_TRANSFER_EVENT: &str = "connection.disconnect.transfer";

pub(crate) fn fill_form(
    form: &mut Element,
    transfer: &Transfer,
    context: &dyn RenderingContext,
) -> Result<(), RenderFailure> {
    if transfer.destination().is_empty() {
        return Err(unrenderable("transfer with empty destination"));
    }

    let mut element = Element::new(TRANSFER).with_attribute(NAME_ATTRIBUTE, TRANSFER_ITEM);
    element
        .set_attribute(DEST_ATTRIBUTE, transfer.destination())
        .set_attribute(TYPE_ATTRIBUTE, transfer.style().as_str())
        .set_optional_attribute(
            CONNECTTIMEOUT_ATTRIBUTE,
            transfer.connect_timeout().map(|d| d.to_string()),
        )
        .set_optional_attribute(MAXTIME_ATTRIBUTE, transfer.max_time().map(|d| d.to_string()))
        .set_optional_attribute(TRANSFERAUDIO_ATTRIBUTE, transfer.transfer_audio())
        .set_optional_attribute(AAI_ATTRIBUTE, transfer.aai());

    if !transfer.audio_items().is_empty() {
        element.append_element(prompt(transfer.audio_items())?);
    }

    if transfer.style().releases_caller() {
        element.append_element(
            Element::new(CATCH)
                .with_attribute(EVENT_ATTRIBUTE, DISCONNECT_TRANSFER_EVENT)
                .with_child(goto_submit(context)),
        );
    }
    if transfer.style().is_supervised() {
        element.append_element(outcome_branches(context));
    } else {
        element.append_element(Element::new(FILLED).with_child(goto_submit(context)));
    }

    form.append_element(element);
    Ok(())
}

/// `<filled>` with one `<if>`/`<elseif>` branch per known outcome and a
/// trailing `<else/>` forwarding the raw value.
fn outcome_branches(context: &dyn RenderingContext) -> Element {
    let mut branches = Element::new(IF);
    for (index, status) in TransferStatus::ALL.iter().enumerate() {
        let condition = format!("{TRANSFER_ITEM} == '{}'", status.code());
        if index == 0 {
            branches.set_attribute(COND_ATTRIBUTE, condition);
        } else {
            branches.append_element(Element::new(ELSEIF).with_attribute(COND_ATTRIBUTE, condition));
        }
        report(&mut branches, &format!("'{}'", status.code()), context);
    }
    branches.append_element(Element::new(ELSE));
    report(&mut branches, TRANSFER_ITEM, context);

    Element::new(FILLED).with_child(branches)
}

fn report(branch: &mut Element, expression: &str, context: &dyn RenderingContext) {
    branch
        .append_element(script(context.transfer_status_call(expression)))
        .append_element(goto_submit(context));
}
