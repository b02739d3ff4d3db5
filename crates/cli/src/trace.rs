use rootwalk_application::ports::{ResolutionTrace, TraceEvent};
use std::io::Write;

/// Prints each hop to stdout, indented two spaces per depth level.
pub struct StdoutTrace;

impl ResolutionTrace for StdoutTrace {
    fn record(&self, event: &TraceEvent) {
        let line = render(event);
        let mut stdout = std::io::stdout().lock();
        let _ = writeln!(stdout, "{}", line);
    }
}

pub fn render(event: &TraceEvent) -> String {
    let indent = "  ".repeat(event.depth() as usize);
    format!("{}{}", indent, event)
}
