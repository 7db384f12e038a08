// src/report/format.rs
use crate::config::CheckRequest;
use crate::health::Classification;
use std::collections::HashMap;

pub const SUSPICIOUS_VERDICT: &str =
    "Warning: response contains overlapping or multiple content markers";
pub const CLEAN_VERDICT: &str =
    "Response looks clean: no overlapping or multiple content markers found";

pub fn startup_line(request: &CheckRequest) -> String {
    format!("Checking {}", request.url())
}

pub fn status_line(status_code: u16) -> String {
    format!("Status: {}", status_code)
}

/// Headers as an indented `name: value` block, sorted by name.
pub fn headers_block(headers: &HashMap<String, String>) -> String {
    let mut names: Vec<&String> = headers.keys().collect();
    names.sort();

    let mut block = String::from("Headers:");
    for name in names {
        block.push_str("\n  ");
        block.push_str(name);
        block.push_str(": ");
        block.push_str(&headers[name]);
    }
    block
}

pub fn body_length_line(body_length: usize) -> String {
    format!("Body length: {} bytes", body_length)
}

pub fn verdict_line(classification: Classification) -> &'static str {
    match classification {
        Classification::Suspicious => SUSPICIOUS_VERDICT,
        Classification::Clean => CLEAN_VERDICT,
    }
}

pub fn error_line(reason: &str) -> String {
    format!("Error: {}", reason)
}
