//! Terminal output: styled status messages on stderr, data on stdout.

use console::{Style, Term};

/// Terminal output formatter.
pub(crate) struct Output {
    status: Term,
    data: Term,
    green: Style,
    yellow: Style,
    red: Style,
    bold: Style,
}

impl Output {
    /// Create a new output formatter.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            status: Term::stderr(),
            data: Term::stdout(),
            green: Style::new().green(),
            yellow: Style::new().yellow(),
            red: Style::new().red(),
            bold: Style::new().bold(),
        }
    }

    /// Print an info message.
    pub(crate) fn info(&self, msg: &str) {
        let _ = self.status.write_line(msg);
    }

    /// Print a success message (green).
    pub(crate) fn success(&self, msg: &str) {
        let _ = self.status.write_line(&self.green.apply_to(msg).to_string());
    }

    /// Print a warning message (yellow).
    pub(crate) fn warning(&self, msg: &str) {
        let _ = self.status.write_line(&self.yellow.apply_to(msg).to_string());
    }

    /// Print an error message (red).
    pub(crate) fn error(&self, msg: &str) {
        let _ = self.status.write_line(&self.red.apply_to(msg).to_string());
    }

    /// Print command output.
    pub(crate) fn data(&self, line: &str) {
        let _ = self.data.write_line(line);
    }

    /// Print command output with a bold label.
    pub(crate) fn field(&self, label: &str, value: &str) {
        let _ = self
            .data
            .write_line(&format!("{} {value}", self.bold.apply_to(label)));
    }

    /// Print raw command output without adding a newline.
    pub(crate) fn raw(&self, text: &str) {
        let _ = self.data.write_str(text);
    }
}
