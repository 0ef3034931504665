use std::sync::atomic::{AtomicBool, Ordering};

use yansi::Paint;

static SILENT: AtomicBool = AtomicBool::new(false);

pub fn set_silent(silent: bool) {
    SILENT.store(silent, Ordering::Relaxed);
}

fn log_output(msg: String) {
    if !SILENT.load(Ordering::Relaxed) {
        println!("{}", msg);
    }
}

/// Echo the outgoing request in curl form so every lookup can be replayed
/// from a plain terminal.
pub fn log_request(url: &str) {
    let mut parts = Vec::new();
    parts.push(Paint::new("curl").fg(yansi::Color::Green).bold().to_string());
    parts.push(format!("-X {}", Paint::new("GET").fg(yansi::Color::Yellow).bold()));
    parts.push(format!("'{}'", Paint::new(url).fg(yansi::Color::Cyan)));
    log_output(format!("Request:\n{}", parts.join(" ")));
}

/// Echo the raw response body, dimmed so it reads as background detail.
pub fn log_response(body: &str) {
    // Grayed out color (dimmed/dark gray)
    let response_str = Paint::new(body).rgb(100, 100, 100).to_string();
    log_output(format!("Response:\n{}", response_str));
}
