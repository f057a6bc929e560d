use std::io::{BufRead, Write};

use gatehouse_core::Modal;

/// Modal bound to the terminal.
///
/// Prints the message and, in blocking mode, waits for Enter before
/// returning - the terminal equivalent of a modal dialog that holds the UI
/// until dismissed. Non-blocking mode only prints, for scripted runs.
#[derive(Debug, Clone)]
pub struct TerminalModal {
    wait_for_dismissal: bool,
}

impl TerminalModal {
    pub fn new() -> Self {
        Self {
            wait_for_dismissal: true,
        }
    }

    /// Print alerts without waiting for Enter.
    pub fn non_blocking() -> Self {
        Self {
            wait_for_dismissal: false,
        }
    }
}

impl Default for TerminalModal {
    fn default() -> Self {
        Self::new()
    }
}

impl Modal for TerminalModal {
    fn alert(&self, message: &str) {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        // Terminal output failing leaves nothing sensible to surface the
        // alert on, so write errors are ignored.
        let _ = writeln!(out, "[!] {message}");

        if self.wait_for_dismissal {
            let _ = write!(out, "    (press Enter to dismiss) ");
            let _ = out.flush();
            let mut dismissed = String::new();
            let _ = std::io::stdin().lock().read_line(&mut dismissed);
        }
    }
}
