use log_accumulator::{LogAccumulator, RenderFormat, RenderedLog};

fn quiet_log() -> LogAccumulator {
    let mut log = LogAccumulator::new();
    log.set_include_timestamp(false);
    log.set_show_filename(false);
    log.set_show_function(false);
    log
}

#[test]
fn test_entries_keep_insertion_order() {
    let mut log = quiet_log();
    for message in ["one", "two", "three"] {
        log.add(message);
    }

    let messages: Vec<_> = log.entries().iter().map(|e| e.message()).collect();
    assert_eq!(messages, ["one", "two", "three"]);
    assert_eq!(log.render_text(), "one\ntwo\nthree\n");
}

#[test]
fn test_clear_then_add_starts_over() {
    let mut log = quiet_log();
    log.set_include_line_numbers(true);
    log.add("old 1");
    log.add("old 2");

    log.clear();
    log.add("new");

    assert_eq!(log.len(), 1);
    assert_eq!(log.render_text(), "    1: new\n");
}

#[test]
fn test_clear_on_empty_log_is_noop() {
    let mut log = LogAccumulator::new();
    log.clear();
    log.clear();
    assert!(log.is_empty());
    assert_eq!(log.render("raw").as_entries().map(|e| e.len()), Some(0));
}

#[test]
fn test_clear_keeps_configuration_and_types() {
    let mut log = quiet_log();
    log.register_type("tag", "^TAG:");
    log.set_date_format("%Y");
    log.add("TAG: a");
    log.clear();

    assert_eq!(log.config().date_format, "%Y");
    assert!(!log.config().include_timestamp);
    assert_eq!(log.message_types().pattern("tag"), Some("^TAG:"));
}

#[test]
fn test_labels_captured_at_add_time() {
    let mut log = LogAccumulator::new();
    log.set_include_timestamp(false);

    log.add("before");
    log.set_current_file("net.rs");
    log.set_current_function("send");
    log.add("during");
    log.set_current_file("disk.rs");
    log.set_current_function("flush");
    log.add("after");

    assert_eq!(
        log.render_text(),
        "unknown/unknown : before\nnet.rs/send : during\ndisk.rs/flush : after\n"
    );
    assert_eq!(log.current_file(), "disk.rs");
    assert_eq!(log.current_function(), "flush");
}

#[test]
fn test_configuration_applies_to_earlier_entries() {
    let mut log = quiet_log();
    log.add("a");
    log.add("b");
    log.set_include_line_numbers(true);
    assert_eq!(log.render_text(), "    1: a\n    2: b\n");
    log.set_include_line_numbers(false);
    assert_eq!(log.render_text(), "a\nb\n");
}

#[test]
fn test_unknown_format_falls_back_to_raw() {
    let mut log = LogAccumulator::new();
    log.add("x");
    log.add("y");

    assert_eq!(log.render("bogus"), log.render("raw"));
    assert_eq!(log.render("bogus"), log.render(RenderFormat::Raw));
    match log.render("bogus") {
        RenderedLog::Raw(entries) => assert_eq!(entries.len(), 2),
        other => panic!("expected raw entries, got {:?}", other),
    }
}

#[test]
fn test_format_names_are_case_insensitive() {
    let mut log = quiet_log();
    log.add("x");
    assert_eq!(log.render("TEXT"), RenderedLog::Text("x\n".to_string()));
    assert_eq!(log.render("Html"), log.render("html"));
}

#[test]
fn test_raw_entries_serialize() {
    let mut log = LogAccumulator::new();
    log.set_current_file("main.rs");
    log.add("boot");

    let entries = log.render("raw").as_entries().unwrap();
    let json = serde_json::to_value(entries).unwrap();
    assert_eq!(json[0]["message"], "boot");
    assert_eq!(json[0]["filename"], "main.rs");
    assert_eq!(json[0]["function"], "unknown");
}
