//! CLI formatted output
//!
//! Command-line friendly error display with configuration source context.

use automa_api::AutomaError;

/// Print an error followed by the offending config line in context
pub fn print_error_with_source(e: &AutomaError, source: &str) {
    eprintln!("❌ {}", e);

    if let Some(error_line) = e.line() {
        print_source_context(source, error_line);
    }
}

/// Print the lines around `error_line`, marking the failing one
pub fn print_source_context(source: &str, error_line: usize) {
    const CONTEXT_LINES: usize = 2;

    let lines: Vec<&str> = source.lines().collect();
    let total_lines = lines.len();

    // a missing-section error can point one line past the end of the input
    if error_line == 0 || error_line > total_lines {
        return;
    }

    let start_line = error_line.saturating_sub(CONTEXT_LINES).max(1);
    let end_line = (error_line + CONTEXT_LINES).min(total_lines);

    let max_line_num_width = end_line.to_string().len();

    let separator: String = "-".repeat(max_line_num_width + 2);
    eprintln!("{}|--", separator);

    for line_idx in start_line..=end_line {
        let line_content = lines[line_idx - 1];
        let marker = if line_idx == error_line { ">" } else { " " };
        eprintln!(
            "{} {:>width$} | {}",
            marker,
            line_idx,
            line_content,
            width = max_line_num_width
        );
    }

    eprintln!("{}|--", separator);
}
