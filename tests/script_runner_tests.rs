//! Running event scripts through the shim
use std::fs;

use login_form_engine::shim::{run, run_events, OutputFormat, Record};
use login_form_engine::{parse_script, AuthOutcome, Config, FormEngine};
use serde_json::Value;
use tempfile::NamedTempFile;
use tokio::io::BufReader;

const LOGIN_SCRIPT: &str = "\
# a user filling in the form
email user@example
email user@example.com
password secret
submit
";

fn json_lines(output: &[u8]) -> Vec<Value> {
    String::from_utf8_lossy(output)
        .lines()
        .map(|line| serde_json::from_str(line).expect("valid json line"))
        .collect()
}

#[tokio::test]
async fn test_script_file_produces_expected_records() {
    let script = NamedTempFile::new().expect("temp script");
    fs::write(script.path(), LOGIN_SCRIPT).expect("write script");

    let file = tokio::fs::File::open(script.path()).await.expect("open script");
    let mut engine = FormEngine::default();
    let mut out = Vec::new();
    let summary = run(&mut engine, BufReader::new(file), &mut out, OutputFormat::Json)
        .await
        .expect("run script");

    assert_eq!(summary.events, 4);
    assert_eq!(summary.logins, 1);

    let records = json_lines(&out);
    let messages: Vec<&str> = records
        .iter()
        .filter(|r| r["event"] == "state")
        .map(|r| r["message"].as_str().expect("message string"))
        .collect();
    assert_eq!(
        messages,
        vec![
            "",
            "E-mail address is not valid.",
            "Please provide a password.",
            "",
            "",
        ]
    );
    assert_eq!(records.last().expect("records")["event"], "login_succeeded");
}

#[tokio::test]
async fn test_failing_outcome_produces_no_login() {
    let config = Config {
        auth_outcome: AuthOutcome::Fail,
        ..Config::default()
    };
    let mut engine = FormEngine::from_config(&config).expect("engine");
    let mut out = Vec::new();
    let summary = run(&mut engine, LOGIN_SCRIPT.as_bytes(), &mut out, OutputFormat::Json)
        .await
        .expect("run script");

    assert_eq!(summary.submissions, 1);
    assert_eq!(summary.logins, 0);
    let last = json_lines(&out).pop().expect("records");
    assert_eq!(last["message"], config.failure_message.as_str());
    assert_eq!(last["message_visible"], true);
}

#[test]
fn test_run_events_matches_streaming_run() {
    let events = parse_script(LOGIN_SCRIPT).expect("parse");
    let mut engine = FormEngine::default();
    let records = run_events(&mut engine, &events);

    assert_eq!(records.len(), 6);
    assert_eq!(records[5], Record::LoginSucceeded);
    assert_eq!(engine.submissions(), 1);
}
