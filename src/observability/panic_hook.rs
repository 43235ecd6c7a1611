//! Crash report printed to stderr when the binary panics.

use super::context::{current_context, AnalysisContext};
use crate::common::truncate_chars;
use std::panic::PanicHookInfo;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const RULE: &str = "────────────────────────────────────────────────────────────";

pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("{}", crash_report(info, &current_context()));
        if std::env::var("RUST_BACKTRACE").is_ok() {
            eprintln!("{}", std::backtrace::Backtrace::capture());
        }
    }));
}

fn crash_report(info: &PanicHookInfo<'_>, context: &AnalysisContext) -> String {
    let location = info
        .location()
        .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()));
    render_report(&panic_message(info), location.as_deref(), context)
}

fn render_report(message: &str, location: Option<&str>, context: &AnalysisContext) -> String {
    let mut lines = vec![
        RULE.to_string(),
        format!("commentscope {VERSION} crashed ({})", std::env::consts::OS),
        format!("Time:     {}", chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")),
        format!("Panic:    {}", truncate_chars(message, 200)),
    ];
    if let Some(location) = location {
        lines.push(format!("Location: {location}"));
    }
    match context.phase {
        Some(phase) => lines.push(format!("Phase:    {phase}")),
        None => lines.push("Phase:    (not started)".to_string()),
    }
    if let Some(input) = &context.input {
        lines.push(format!("Input:    {}", input.display()));
    }
    if std::env::var("RUST_BACKTRACE").is_err() {
        lines.push("Run with RUST_BACKTRACE=1 for a stack trace".to_string());
    }
    lines.push(RULE.to_string());
    lines.join("\n")
}

fn panic_message(info: &PanicHookInfo<'_>) -> String {
    if let Some(s) = info.payload().downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observability::AnalysisPhase;
    use std::path::PathBuf;

    #[test]
    fn test_report_names_phase_and_input() {
        let context = AnalysisContext {
            phase: Some(AnalysisPhase::Analytics),
            input: Some(PathBuf::from("chat.json")),
        };
        let report = render_report("index out of bounds", Some("src/x.rs:1:2"), &context);
        assert!(report.contains("Panic:    index out of bounds"));
        assert!(report.contains("Location: src/x.rs:1:2"));
        assert!(report.contains("Phase:    analytics"));
        assert!(report.contains("Input:    chat.json"));
    }

    #[test]
    fn test_report_without_context() {
        let report = render_report("boom", None, &AnalysisContext::new());
        assert!(report.contains("Phase:    (not started)"));
        assert!(!report.contains("Input:"));
    }
}
