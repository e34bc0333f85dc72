//! Document compilation per turn variant.

use std::sync::Arc;
use vxml_render::{Compiler, DialogueContext, RenderConfig, RenderingContext, compile};
use vxml_types::test_utils::{FailingAdapter, RecordingAdapter};
use vxml_types::*;

fn ctx() -> DialogueContext {
    DialogueContext::new()
}

fn form(document: &Document) -> &Element {
    document.root().first_child("form").unwrap()
}

fn _assert_send_sync<T: Send + Sync>() {}

#[test]
fn compiler_is_send_sync() {
    _assert_send_sync::<Compiler>();
    _assert_send_sync::<DialogueContext>();
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Document frame
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[test]
fn root_and_form() {
    let turn = Turn::message("m", [AudioItem::speech("hi").unwrap()]).unwrap();
    let doc = compile(&turn, &ctx()).unwrap();
    let root = doc.root();
    assert_eq!(root.name(), "vxml");
    assert_eq!(root.attribute_names(), vec!["version", "xmlns", "application"]);
    assert_eq!(root.attribute("version"), Some("2.1"));
    assert_eq!(root.attribute("xmlns"), Some("http://www.w3.org/2001/vxml"));
    assert_eq!(root.attribute("application"), Some("root.vxml"));
    assert_eq!(form(&doc).attribute("id"), Some("form"));
}

#[test]
fn application_root_is_optional() {
    let context = DialogueContext::from_config(RenderConfig {
        application_root: None,
        form_id: "main".into(),
        ..RenderConfig::default()
    })
    .unwrap();
    let turn = Turn::message("m", [AudioItem::speech("hi").unwrap()]).unwrap();
    let doc = compile(&turn, &context).unwrap();
    assert_eq!(doc.root().attribute("application"), None);
    assert_eq!(form(&doc).attribute("id"), Some("main"));
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Message
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[test]
fn message_has_one_prompt_with_items_in_order() {
    let turn = Message::builder("greeting")
        .audio_item(AudioItem::audio_file_with_alternative("welcome.wav", "Welcome").unwrap())
        .audio_item(AudioItem::pause(DurationMs::from_millis(250)))
        .audio_item(AudioItem::speech("How can I help?").unwrap())
        .audio_item(AudioItem::recording("application.name").unwrap())
        .build()
        .unwrap();
    let doc = compile(&turn, &ctx()).unwrap();

    let prompts = doc.find_all("prompt");
    assert_eq!(prompts.len(), 1);
    let prompt = prompts[0];
    assert!(prompt.attribute_names().is_empty());

    let children = prompt.children();
    assert_eq!(children.len(), 4);
    match &children[0] {
        Node::Element(e) => {
            assert_eq!(e.name(), "audio");
            assert_eq!(e.attribute("src"), Some("welcome.wav"));
            assert_eq!(e.text(), "Welcome");
        }
        other => panic!("expected <audio>, got {other:?}"),
    }
    match &children[1] {
        Node::Element(e) => assert_eq!(e.attribute("time"), Some("250ms")),
        other => panic!("expected <break>, got {other:?}"),
    }
    assert_eq!(children[2], Node::Text("How can I help?".into()));
    match &children[3] {
        Node::Element(e) => assert_eq!(e.attribute("expr"), Some("application.name")),
        other => panic!("expected <audio expr>, got {other:?}"),
    }
}

#[test]
fn message_block_ends_with_goto() {
    let turn = Turn::message("m", [AudioItem::speech("bye").unwrap()]).unwrap();
    let doc = compile(&turn, &ctx()).unwrap();
    let block = form(&doc).first_child("block").unwrap();
    let names: Vec<_> = block.child_elements().map(Element::name).collect();
    assert_eq!(names, vec!["prompt", "goto"]);
    assert_eq!(
        block.first_child("goto").unwrap().attribute("next"),
        Some("root.vxml#submit")
    );
}

#[test]
fn message_language_then_bargein() {
    let turn = Message::builder("m")
        .audio_item(AudioItem::speech("bonjour").unwrap())
        .language("fr-CA")
        .barge_in(Some(false))
        .build()
        .unwrap();
    let doc = compile(&turn, &ctx()).unwrap();
    let prompt = doc.find_all("prompt")[0];
    assert_eq!(prompt.attribute_names(), vec!["xml:lang", "bargein"]);
    assert_eq!(prompt.attribute("bargein"), Some("false"));
}

#[test]
fn adjacent_speech_is_space_separated() {
    let turn = Turn::message(
        "m",
        [
            AudioItem::speech("Hello").unwrap(),
            AudioItem::speech("world").unwrap(),
        ],
    )
    .unwrap();
    let doc = compile(&turn, &ctx()).unwrap();
    assert_eq!(doc.find_all("prompt")[0].text(), "Hello world");
}

#[test]
fn hand_built_empty_audio_is_unrenderable() {
    let turn = Message::builder("broken")
        .audio_item(AudioItem::AudioFile {
            location: String::new(),
            alternative: None,
        })
        .build()
        .unwrap();
    let err = compile(&turn, &ctx()).unwrap_err();
    assert_eq!(err.turn(), "broken");
    assert!(matches!(err.source, RenderFailure::Unrenderable(_)));
    assert!(err.adapter_error().is_none());
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Object call
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[test]
fn archives_joined_by_space() {
    let turn = ObjectCall::builder("obj")
        .archives(["a", "b"])
        .build()
        .unwrap();
    let doc = compile(&turn, &ctx()).unwrap();
    assert_eq!(doc.find_all("object")[0].attribute("archive"), Some("a b"));
}

#[test]
fn no_archive_attribute_when_empty() {
    let turn = Turn::object_call("obj").unwrap();
    let doc = compile(&turn, &ctx()).unwrap();
    let object = doc.find_all("object")[0];
    assert_eq!(object.attribute("archive"), None);
    assert_eq!(object.attribute_names(), vec!["name"]);
}

#[test]
fn object_attribute_order() {
    let fetch = Arc::new(
        FetchConfiguration::builder()
            .fetch_hint(FetchHint::Prefetch)
            .fetch_timeout(DurationMs::from_millis(1500))
            .max_age(DurationMs::from_millis(60_900))
            .max_stale(DurationMs::from_secs(0))
            .build()
            .unwrap(),
    );
    let turn = ObjectCall::builder("obj")
        .media_type("application/x-cti")
        .data("cti.dat")
        .code_type("application/java")
        .code_base("http://example.com/")
        .class_id("builtin://cti")
        .archive("cti.jar")
        .fetch_configuration(fetch)
        .build()
        .unwrap();
    let doc = compile(&turn, &ctx()).unwrap();
    let object = doc.find_all("object")[0];
    assert_eq!(
        object.attribute_names(),
        vec![
            "name", "archive", "classid", "codebase", "codetype", "data", "type", "fetchhint",
            "fetchtimeout", "maxage", "maxstale",
        ]
    );
    assert_eq!(object.attribute("fetchtimeout"), Some("1500ms"));
    assert_eq!(object.attribute("maxage"), Some("61"));
    assert_eq!(object.attribute("maxstale"), Some("0"));
}

#[test]
fn sub_second_cache_hints_keep_caching() {
    let fetch = Arc::new(
        FetchConfiguration::builder()
            .max_age(DurationMs::from_millis(500))
            .max_stale(DurationMs::from_millis(1))
            .build()
            .unwrap(),
    );
    let turn = ObjectCall::builder("obj")
        .fetch_configuration(fetch)
        .build()
        .unwrap();
    let doc = compile(&turn, &ctx()).unwrap();
    let object = doc.find_all("object")[0];
    assert_eq!(object.attribute("maxage"), Some("1"));
    assert_eq!(object.attribute("maxstale"), Some("1"));
}

#[test]
fn fetch_attempts_need_a_platform_attribute() {
    let fetch = Arc::new(
        FetchConfiguration::builder()
            .fetch_attempts(3)
            .fetch_attempt_timeout(DurationMs::from_secs(2))
            .build()
            .unwrap(),
    );
    let turn = ObjectCall::builder("obj")
        .fetch_configuration(fetch)
        .build()
        .unwrap();

    let doc = compile(&turn, &ctx()).unwrap();
    assert_eq!(doc.find_all("object")[0].attribute_names(), vec!["name"]);

    let context = DialogueContext::from_config(RenderConfig {
        fetch_attempts_attribute: Some("vendor:fetchattempts".into()),
        fetch_attempt_timeout_attribute: Some("vendor:fetchattempttimeout".into()),
        ..RenderConfig::default()
    })
    .unwrap();
    let doc = compile(&turn, &context).unwrap();
    let object = doc.find_all("object")[0];
    assert_eq!(object.attribute("vendor:fetchattempts"), Some("3"));
    assert_eq!(object.attribute("vendor:fetchattempttimeout"), Some("2000ms"));
}

#[test]
fn params_in_order_with_present_attributes_only() {
    let turn = ObjectCall::builder("obj")
        .parameter(Parameter::with_value("first", "1").unwrap())
        .parameter(
            Parameter::builder("second")
                .expression("session.connection.remote.uri")
                .media_type("text/plain")
                .value_type(ParameterValueType::Ref)
                .build()
                .unwrap(),
        )
        .build()
        .unwrap();
    let doc = compile(&turn, &ctx()).unwrap();
    let params = doc.find_all("param");
    assert_eq!(params.len(), 2);
    assert_eq!(params[0].attribute_names(), vec!["name", "value"]);
    assert_eq!(params[0].attribute("name"), Some("first"));
    assert_eq!(params[1].attribute_names(), vec!["name", "expr", "type", "valuetype"]);
    assert_eq!(params[1].attribute("valuetype"), Some("ref"));
}

#[test]
fn filled_reports_the_result() {
    let turn = ObjectCall::builder("obj")
        .post_object_script("object.extra = 1;")
        .build()
        .unwrap();
    let doc = compile(&turn, &ctx()).unwrap();
    let filled = doc.find_all("filled")[0];
    let children: Vec<_> = filled.child_elements().collect();
    assert_eq!(children.len(), 4);

    assert_eq!(children[0].name(), "var");
    assert_eq!(children[0].attribute("name"), Some("object"));
    assert_eq!(children[0].attribute("expr"), Some("dialog.object"));
    assert_eq!(children[1].text(), "object.extra = 1;");
    assert_eq!(
        children[2].text(),
        "application.dialogue.addValueResult(object);"
    );
    assert_eq!(children[3].name(), "goto");
}

#[test]
fn filled_without_script_has_three_children() {
    let doc = compile(&Turn::object_call("obj").unwrap(), &ctx()).unwrap();
    assert_eq!(doc.find_all("filled")[0].child_elements().count(), 3);
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Transfer
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

fn scripts(doc: &Document) -> Vec<String> {
    doc.find_all("script").into_iter().map(Element::text).collect()
}

#[test]
fn consultation_reports_busy() {
    let turn = Turn::transfer("xfer", "tel:5551234", TransferStyle::Consultation).unwrap();
    let doc = compile(&turn, &ctx()).unwrap();

    let transfer = doc.find_all("transfer")[0];
    assert_eq!(transfer.attribute("type"), Some("consultation"));
    assert!(
        scripts(&doc)
            .iter()
            .any(|s| s == "application.dialogue.addTransferStatusResult('busy');")
    );
    assert!(
        doc.find_all("if")[0]
            .attribute("cond")
            .is_some_and(|c| c.contains("noanswer"))
    );
    assert!(
        doc.find_all("elseif")
            .iter()
            .any(|e| e.attribute("cond") == Some("transfer == 'busy'"))
    );
}

#[test]
fn supervised_branches_cover_every_status() {
    let turn = Transfer::builder("xfer", TransferStyle::Bridge)
        .destination("sip:agent@example.com")
        .build()
        .unwrap();
    let doc = compile(&turn, &ctx()).unwrap();

    assert_eq!(doc.find_all("elseif").len(), TransferStatus::ALL.len() - 1);
    assert_eq!(doc.find_all("else").len(), 1);
    let scripts = scripts(&doc);
    assert_eq!(scripts.len(), TransferStatus::ALL.len() + 1);
    assert_eq!(
        scripts.last().map(String::as_str),
        Some("application.dialogue.addTransferStatusResult(transfer);")
    );
    assert_eq!(doc.find_all("goto").len(), TransferStatus::ALL.len() + 1);
    assert!(doc.find_all("catch").is_empty());
}

#[test]
fn consultation_catches_the_hand_off() {
    let turn = Turn::transfer("xfer", "tel:5551234", TransferStyle::Consultation).unwrap();
    let doc = compile(&turn, &ctx()).unwrap();

    let transfer = doc.find_all("transfer")[0];
    let children: Vec<_> = transfer.child_elements().map(Element::name).collect();
    assert_eq!(children, vec!["catch", "filled"]);
    let catch = transfer.first_child("catch").unwrap();
    assert_eq!(catch.attribute("event"), Some("connection.disconnect.transfer"));
    assert_eq!(
        catch.first_child("goto").unwrap().attribute("next"),
        Some("root.vxml#submit")
    );
    assert_eq!(doc.find_all("if").len(), 1);
}

#[test]
fn blind_has_no_outcome_branch() {
    let turn = Turn::transfer("xfer", "tel:5551234", TransferStyle::Blind).unwrap();
    let doc = compile(&turn, &ctx()).unwrap();

    assert!(doc.find_all("if").is_empty());
    assert!(scripts(&doc).is_empty());
    let catches = doc.find_all("catch");
    assert_eq!(catches.len(), 1);
    assert_eq!(
        catches[0].attribute("event"),
        Some("connection.disconnect.transfer")
    );
    assert_eq!(catches[0].first_child("goto").unwrap().attribute("next"), Some("root.vxml#submit"));
    let filled = doc.find_all("filled");
    assert_eq!(filled.len(), 1);
    assert_eq!(filled[0].child_elements().count(), 1);
}

#[test]
fn transfer_attribute_order() {
    let turn = Transfer::builder("xfer", TransferStyle::Bridge)
        .aai("account=42")
        .transfer_audio("hold.wav")
        .max_time(DurationMs::from_secs(600))
        .connect_timeout(DurationMs::from_secs(20))
        .destination("tel:5551234")
        .audio_item(AudioItem::speech("Please hold.").unwrap())
        .build()
        .unwrap();
    let doc = compile(&turn, &ctx()).unwrap();
    let transfer = doc.find_all("transfer")[0];
    assert_eq!(
        transfer.attribute_names(),
        vec![
            "name",
            "dest",
            "type",
            "connecttimeout",
            "maxtime",
            "transferaudio",
            "aai"
        ]
    );
    assert_eq!(transfer.attribute("connecttimeout"), Some("20000ms"));
    assert_eq!(transfer.attribute("maxtime"), Some("600000ms"));

    let first = transfer.child_elements().next().unwrap();
    assert_eq!(first.name(), "prompt");
    assert_eq!(first.text(), "Please hold.");
}

#[test]
fn transfer_without_audio_has_no_prompt() {
    let turn = Turn::transfer("xfer", "tel:5551234", TransferStyle::Bridge).unwrap();
    let doc = compile(&turn, &ctx()).unwrap();
    assert!(doc.find_all("prompt").is_empty());
    assert_eq!(
        doc.find_all("transfer")[0].attribute_names(),
        vec!["name", "dest", "type"]
    );
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Adapters
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[test]
fn failing_adapter_names_the_turn() {
    let turn = Turn::message("greeting", [AudioItem::speech("hi").unwrap()])
        .unwrap()
        .with_adapter(FailingAdapter::new("boom"));
    let err = compile(&turn, &ctx()).unwrap_err();
    assert_eq!(err.turn(), "greeting");
    assert!(matches!(err.adapter_error(), Some(AdapterError::Failed(m)) if m == "boom"));
    assert_eq!(
        err.to_string(),
        "failed to render turn 'greeting': adapter failed: boom"
    );
}

#[test]
fn adapters_see_the_compiled_document() {
    let recorder = Arc::new(RecordingAdapter::stamping("stamp", "xml:lang", "en-US"));
    let mut turn = Turn::object_call("obj").unwrap();
    turn.add_adapter(Arc::clone(&recorder));

    let doc = compile(&turn, &ctx()).unwrap();
    let seen = recorder.documents();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].document.find_all("object").len(), 1);
    assert_eq!(doc.root().attribute("xml:lang"), Some("en-US"));
}

#[test]
fn compiler_adapters_run_after_turn_adapters() {
    let turn_adapter = Arc::new(RecordingAdapter::stamping("turn", "xml:lang", "en-US"));
    let compiler_adapter = Arc::new(RecordingAdapter::new("compiler"));

    let mut compiler = Compiler::new(ctx());
    compiler.add_adapter(Arc::clone(&compiler_adapter));

    let mut turn = Turn::object_call("obj").unwrap();
    turn.add_adapter(Arc::clone(&turn_adapter));
    compiler.compile(&turn).unwrap();

    assert_eq!(
        compiler_adapter.documents()[0].document.root().attribute("xml:lang"),
        Some("en-US")
    );
}

#[test]
fn compiler_adapter_failure_names_the_turn() {
    let mut compiler = Compiler::new(ctx());
    compiler.add_adapter(Arc::new(FailingAdapter::new("nope")));
    let err = compiler.compile(&Turn::object_call("obj").unwrap()).unwrap_err();
    assert_eq!(err.turn(), "obj");
    assert!(err.adapter_error().is_some());
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Markup
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[test]
fn message_markup() {
    let turn = Message::builder("greeting")
        .audio_item(AudioItem::speech("Fish & chips").unwrap())
        .barge_in(Some(true))
        .build()
        .unwrap();
    let xml = Compiler::new(ctx()).compile_to_string(&turn).unwrap();
    assert_eq!(
        xml,
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <vxml version=\"2.1\" xmlns=\"http://www.w3.org/2001/vxml\" application=\"root.vxml\">\
         <form id=\"form\"><block><prompt bargein=\"true\">Fish &amp; chips</prompt>\
         <goto next=\"root.vxml#submit\"/></block></form></vxml>"
    );
}

#[test]
fn attribute_whitespace_is_preserved() {
    let turn = ObjectCall::builder("obj")
        .parameter(Parameter::with_value("p", "line1\nline2\tend").unwrap())
        .build()
        .unwrap();
    let xml = Compiler::new(ctx()).compile_to_string(&turn).unwrap();
    assert!(xml.contains("<param name=\"p\" value=\"line1&#10;line2&#9;end\"/>"));
}

#[test]
fn control_characters_are_unrenderable() {
    let turn = ObjectCall::builder("obj")
        .parameter(Parameter::with_value("p", "line1\nline2\u{1}").unwrap())
        .build()
        .unwrap();
    let err = Compiler::new(ctx()).compile_to_string(&turn).unwrap_err();
    assert_eq!(err.turn(), "obj");
    assert!(err.adapter_error().is_none());
    assert!(err.to_string().contains("U+0001"), "{err}");
}

#[test]
fn adapters_cannot_inject_control_characters() {
    let mut compiler = Compiler::new(ctx());
    compiler.add_adapter(Arc::new(RecordingAdapter::stamping(
        "stamp",
        "xml:lang",
        "en\u{1B}US",
    )));
    let err = compiler
        .compile(&Turn::message("m", [AudioItem::speech("hi").unwrap()]).unwrap())
        .unwrap_err();
    assert!(err.to_string().contains("U+001B"), "{err}");
}

struct BareContext {
    form_id: &'static str,
    submit_target: &'static str,
}

impl RenderingContext for BareContext {
    fn scope_object(&self) -> &str {
        "application.dialogue"
    }

    fn value_result_function(&self) -> &str {
        "addValueResult"
    }

    fn transfer_status_function(&self) -> &str {
        "addTransferStatusResult"
    }

    fn submit_target(&self) -> &str {
        self.submit_target
    }

    fn application_root(&self) -> Option<&str> {
        None
    }

    fn form_id(&self) -> &str {
        self.form_id
    }
}

#[test]
fn empty_context_names_are_unrenderable() {
    let turn = Turn::message("m", [AudioItem::speech("hi").unwrap()]).unwrap();

    let err = compile(&turn, &BareContext { form_id: "", submit_target: "next.vxml" })
        .unwrap_err();
    assert!(err.to_string().contains("empty form id"), "{err}");

    let err = compile(&turn, &BareContext { form_id: "main", submit_target: "" })
        .unwrap_err();
    assert!(err.to_string().contains("empty submit target"), "{err}");

    let xml = Compiler::new(BareContext { form_id: "main", submit_target: "next.vxml" })
        .compile_to_string(&turn)
        .unwrap();
    assert!(xml.contains("<form id=\"main\">"));
    assert!(xml.contains("<goto next=\"next.vxml\"/>"));
}

#[test]
fn compilation_is_repeatable() {
    let turn = Turn::transfer("xfer", "tel:5551234", TransferStyle::Consultation).unwrap();
    let compiler = Compiler::new(ctx());
    assert_eq!(compiler.compile(&turn).unwrap(), compiler.compile(&turn).unwrap());
}
