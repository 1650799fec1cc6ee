//! The `serve` message loop.

use serde_json::Value;

use crate::common::TestProject;

/// Run `serve` with `input` on stdin and parse each stdout line as JSON.
fn serve(project: &TestProject, input: &str) -> Vec<Value> {
    let output = project.dsforge().arg("serve").write_stdin(input).output().unwrap();
    assert!(output.status.success(), "serve failed: {}", String::from_utf8_lossy(&output.stderr));

    String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

fn notifications(events: &[Value]) -> Vec<(&str, bool)> {
    events
        .iter()
        .filter(|e| e["event"] == "notify")
        .map(|e| (e["message"].as_str().unwrap_or_default(), e["error"].as_bool().unwrap_or(false)))
        .collect()
}

#[test]
fn design_system_message_round_trip() {
    let project = TestProject::new().unwrap();

    let events = serve(&project, "{\"type\":\"create-design-system\"}\n");

    let posted = events.iter().find(|e| e["event"] == "post-message").unwrap();
    assert_eq!(posted["payload"]["type"], "design-system-created");
    assert_eq!(posted["payload"]["variables"].as_array().map(Vec::len), Some(42));
    assert_eq!(
        notifications(&events),
        vec![("Design system created: 2 collections, 42 variables, 40 text styles", false)]
    );

    // the loop saved the document
    assert_eq!(project.read_document().unwrap().text_styles.len(), 40);
}

#[test]
fn messages_share_one_session() {
    let project = TestProject::new().unwrap();
    let input = [
        r#"{"type":"create-custom-spacing","path":"Spacing/tight","base":4,"factor":1.5}"#,
        r#"{"type":"create-custom-spacing","path":"Spacing/loose","base":8,"factor":2}"#,
        r#"{"type":"get-variables"}"#,
    ]
    .join("\n");

    let events = serve(&project, &input);

    assert_eq!(
        notifications(&events),
        vec![("Custom spacing system created", false), ("Custom spacing system created", false)]
    );
    let update = events.iter().find(|e| e["event"] == "post-message").unwrap();
    assert_eq!(update["payload"]["type"], "variables-update");
    assert_eq!(update["payload"]["collections"].as_array().map(Vec::len), Some(1));
    assert_eq!(update["payload"]["variables"].as_array().map(Vec::len), Some(18));
}

#[test]
fn failures_are_reported_and_the_loop_continues() {
    let project = TestProject::new().unwrap();
    let input = [
        "not json",
        r#"{"type":"create-typography-preset","preset":"fancy"}"#,
        r#"{"type":"no-such-message"}"#,
        r#"{"preset":"modern"}"#,
        r#"{"type":"create-text-style","name":"Caption","properties":{"fontSize":11}}"#,
    ]
    .join("\n");

    let events = serve(&project, &input);
    let notes = notifications(&events);

    assert_eq!(notes.len(), 4);
    assert!(notes[0].1 && notes[0].0.starts_with("Error: Invalid '<unparsed>' message"));
    assert!(notes[1].1 && notes[1].0.contains("Unknown typography preset: fancy"));
    assert!(notes[2].1 && notes[2].0.starts_with("Error: Invalid '<missing>' message"));
    assert_eq!(notes[3], ("Text style created: Caption", false));

    let document = project.read_document().unwrap();
    assert_eq!(document.text_styles[0].font_size, 11.0);
}

#[test]
fn close_stops_reading() {
    let project = TestProject::new().unwrap();
    let input = [
        r#"{"type":"close"}"#,
        r#"{"type":"create-custom-typography","name":"Body","baseSize":16,"factor":1.2}"#,
    ]
    .join("\n");

    let events = serve(&project, &input);
    assert!(events.is_empty());
    assert!(project.read_document().unwrap().text_styles.is_empty());
}
