mod common;

use common::TestResult;
use common::fixtures::three_section_layout;
use std::io::Write;
use std::process::{Command, Output};

fn run_cli(layout: &str, args: &[&str]) -> Result<Output, Box<dyn std::error::Error>> {
    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(layout.as_bytes())?;

    let output = Command::new(env!("CARGO_BIN_EXE_pagenav"))
        .arg(file.path())
        .args(args)
        .output()?;
    Ok(output)
}

#[test]
fn test_cli_text_report() -> TestResult {
    let output = run_cli(
        &three_section_layout().to_string(),
        &["--scroll", "750", "--click", "#contact", "--back-to-top"],
    )?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("load"));
    assert!(lines[0].contains("active=home"));
    assert!(lines[1].starts_with("scroll 750"));
    assert!(lines[1].contains("active=about"));
    assert!(lines[2].contains("(scrolled to #contact)"));
    assert!(lines[3].starts_with("back-to-top"));
    assert!(lines[3].contains("back-to-top=hidden"));
    Ok(())
}

#[test]
fn test_cli_json_report() -> TestResult {
    let output = run_cli(
        &three_section_layout().to_string(),
        &["--scroll", "1700", "--json"],
    )?;
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    let steps = report.as_array().ok_or("expected a JSON array")?;
    assert_eq!(steps.len(), 2);
    assert_eq!(steps[1]["event"], "scroll 1700");
    assert_eq!(steps[1]["state"]["activeSection"], "contact");
    assert_eq!(steps[1]["state"]["backToTopVisible"], true);
    assert!(steps[1]["scrolledTo"].is_null());
    Ok(())
}

#[test]
fn test_cli_rejects_invalid_layout() -> TestResult {
    let output = run_cli(r#"{ "sections": [ { "id": "", "top": 0 } ] }"#, &[])?;
    assert!(!output.status.success());

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("EmptySectionId"));
    Ok(())
}

#[test]
fn test_cli_replays_events_in_argument_order() -> TestResult {
    let output = run_cli(
        &three_section_layout().to_string(),
        &["--scroll", "2000", "--click", "#home", "--scroll", "900"],
    )?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[1].starts_with("scroll 2000"));
    assert!(lines[2].starts_with("click #home"));
    assert!(lines[3].starts_with("scroll 900"));
    assert!(lines[3].contains("active=about"));
    Ok(())
}
