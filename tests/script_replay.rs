mod common;

use common::{recording_form, temp_file};
use signup_form::form::{Field, FormValues};
use signup_form::script::{load_script, parse_script, replay, ScriptError};
use std::path::Path;

#[test]
fn replay_drives_change_blur_and_submit() {
    let events = parse_script(
        r#"{"event":"change","field":"name","value":"Mark"}
{"event":"blur","field":"password"}
{"event":"submit"}
"#,
    )
    .unwrap();
    let (mut form, submissions) = recording_form(|props| props);

    replay(&mut form, events);

    assert_eq!(form.error(Field::Password), Some("password is required"));
    assert_eq!(submissions.borrow().as_slice(), &[FormValues::new("Mark", "", "")]);
}

#[test]
fn replay_dispatches_raw_intents() {
    let events = parse_script(
        r#"{"event":"dispatch","intent":{"type":"setFieldError","field":"name","error":"we messed up"}}
{"event":"dispatch","intent":{"type":"setFieldValue","field":"email","value":"a@b.c"}}
{"event":"dispatch","intent":{"type":"somethingNew","payload":1}}
"#,
    )
    .unwrap();
    let (mut form, submissions) = recording_form(|props| props);

    replay(&mut form, events);

    assert_eq!(form.error(Field::Name), Some("we messed up"));
    assert_eq!(form.value(Field::Email), "a@b.c");
    assert!(submissions.borrow().is_empty());
}

#[test]
fn load_script_reads_file() {
    let (_dir, path) = temp_file("submit.jsonl", "{\"event\":\"submit\"}\n");
    assert_eq!(load_script(&path).unwrap().len(), 1);
}

#[test]
fn load_script_reports_missing_file() {
    let err = load_script(Path::new("/nonexistent/script.jsonl")).unwrap_err();
    assert!(matches!(err, ScriptError::ReadError { .. }));
}

#[test]
fn unknown_field_is_rejected() {
    let err = parse_script(r#"{"event":"blur","field":"age"}"#).unwrap_err();
    assert!(matches!(err, ScriptError::ParseError { line: 1, .. }));
}
