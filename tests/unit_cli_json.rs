#![allow(missing_docs)]

use std::process::{Command, Output};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;
use xdrview_testkit::{SAMPLE_ACCOUNT_ADDRESS, payment_envelope};

#[test]
fn tree_json_output_is_a_single_element_sequence() {
	let input = STANDARD.encode(payment_envelope());
	let json = run_json(&["tree", &input, "--type", "TransactionEnvelope", "--json"]);

	let items = json.as_array().expect("top-level sequence");
	assert_eq!(items.len(), 1, "expected exactly one root");

	let root = &items[0];
	assert_eq!(root["type"], "TransactionEnvelope");
	assert_eq!(root["value"], "[envelopeTypeTx]");

	let tx = &root["nodes"][0]["nodes"][0];
	assert_eq!(tx["type"], "tx");
	assert_eq!(tx["nodes"][0]["nodes"][0]["value"]["value"], SAMPLE_ACCOUNT_ADDRESS);
}

#[test]
fn tree_plain_output_indents_fields() {
	let input = STANDARD.encode(payment_envelope());
	let output = run(&["tree", &input, "--type", "TransactionEnvelope"]);
	assert!(output.status.success(), "command should succeed");

	let stdout = String::from_utf8_lossy(&output.stdout);
	assert!(stdout.starts_with("TransactionEnvelope: [envelopeTypeTx]"), "unexpected root line: {stdout}");
	assert!(stdout.contains("amount: 150.0000000 (raw 1500000000)"), "missing amount line: {stdout}");
	assert!(stdout.contains("memo: [memoText]"), "missing memo marker: {stdout}");
	assert!(stdout.contains("      operations: Array[1]"), "missing indented operations: {stdout}");
}

#[test]
fn tree_reads_input_from_file() {
	let path = std::env::temp_dir().join(format!("xdrview-cli-{}.txt", std::process::id()));
	std::fs::write(&path, STANDARD.encode(payment_envelope())).expect("fixture file writes");

	let path_arg = path.display().to_string();
	let json = run_json(&["tree", "--file", &path_arg, "--type", "TransactionEnvelope", "--json"]);
	std::fs::remove_file(&path).ok();

	assert_eq!(json[0]["type"], "TransactionEnvelope");
}

#[test]
fn tree_failure_reports_type_on_stderr() {
	let output = run(&["tree", "AAAA", "--type", "NotARealType"]);
	assert!(!output.status.success(), "command should fail");

	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.starts_with("error:"), "unexpected stderr: {stderr}");
	assert!(stderr.contains("NotARealType"), "stderr should name the type: {stderr}");
}

#[test]
fn tree_decode_limits_are_adjustable() {
	let input = STANDARD.encode(payment_envelope());
	let output = run(&["tree", &input, "--type", "TransactionEnvelope", "--max-depth", "2"]);
	assert!(!output.status.success(), "tight depth limit should fail");

	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("depth"), "stderr should mention the depth limit: {stderr}");
}

#[test]
fn types_listing_filters_case_insensitively() {
	let output = run(&["types", "--contains", "scval"]);
	assert!(output.status.success(), "command should succeed");

	let stdout = String::from_utf8_lossy(&output.stdout);
	let names: Vec<&str> = stdout.lines().collect();
	assert!(names.contains(&"ScVal"), "expected ScVal in {names:?}");
	assert!(names.contains(&"ScValType"), "expected ScValType in {names:?}");
	assert!(!names.contains(&"Transaction"), "filter should exclude unrelated names");
}

#[test]
fn types_json_output_reports_count() {
	let json = run_json(&["types", "--contains", "envelope", "--json"]);

	let types = json["types"].as_array().expect("types array");
	assert_eq!(json["count"].as_u64(), Some(types.len() as u64));
	assert!(types.iter().any(|item| item == "TransactionEnvelope"), "expected TransactionEnvelope in {types:?}");
}

fn run(args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_xdrview")).args(args).output().expect("command executes")
}

fn run_json(args: &[&str]) -> Value {
	let output = run(args);
	assert!(
		output.status.success(),
		"command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}
