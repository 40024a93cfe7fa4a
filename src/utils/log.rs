// src/utils/log.rs

//! Console presentation helpers on top of the `log` facade.
//!
//! Banners, numbered steps and summaries all go out at INFO level so the
//! logger configuration decides whether they are shown.

const RULE_WIDTH: usize = 60;

/// Format a numbered step line.
pub fn format_step(step_num: usize, total: usize, message: &str) -> String {
    format!("[STEP {}/{}] {}", step_num, total, message)
}

/// Format summary lines: a title followed by indented `key: value` items.
pub fn format_summary(title: &str, items: &[(&str, String)]) -> Vec<String> {
    let mut lines = Vec::with_capacity(items.len() + 1);
    lines.push(format!("[SUMMARY] {}", title));
    for (key, value) in items {
        lines.push(format!("    {}: {}", key, value));
    }
    lines
}

/// Log a step in a process
pub fn step(step_num: usize, total: usize, message: &str) {
    log::info!("{}", format_step(step_num, total, message));
}

/// Log a header
pub fn header(title: &str) {
    let border = "═".repeat(RULE_WIDTH);
    log::info!("{}", border);
    log::info!("  {}", title);
    log::info!("{}", border);
}

/// Log a sub-item (indented)
pub fn sub_item(message: &str) {
    log::info!("    {}", message);
}

/// Log a summary section
pub fn summary(title: &str, items: &[(&str, String)]) {
    for line in format_summary(title, items) {
        log::info!("{}", line);
    }
}
