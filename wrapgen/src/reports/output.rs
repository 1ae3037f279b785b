//! Output trait for rendering reports.

/// Target output for reports.
///
/// Reports describe *what* to output; implementations decide *how*.
pub trait Output {
    /// Start a new section with a heading.
    fn section(&mut self, name: &str);

    fn key_value(&mut self, key: &str, value: &str);

    fn list_item(&mut self, text: &str);

    /// An added or updated item (e.g., a written file).
    fn added_item(&mut self, text: &str);

    /// A failed item, with the reason on its own line.
    fn failed_item(&mut self, text: &str, reason: &str);

    fn error(&mut self, msg: &str);

    fn warning(&mut self, msg: &str);

    /// Render a separator/divider with a label.
    fn divider(&mut self, label: &str);

    /// Render a block of preformatted text.
    fn preformatted(&mut self, text: &str);

    fn newline(&mut self);
}

/// A report that can render itself to an output.
pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Terminal output: results on stdout, problems on stderr.
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for TerminalOutput {
    fn section(&mut self, name: &str) {
        println!("{}:", name);
    }

    fn key_value(&mut self, key: &str, value: &str) {
        println!("{}: {}", key, value);
    }

    fn list_item(&mut self, text: &str) {
        println!("  - {}", text);
    }

    fn added_item(&mut self, text: &str) {
        println!("  + {}", text);
    }

    fn failed_item(&mut self, text: &str, reason: &str) {
        eprintln!("  x {}", text);
        eprintln!("      {}", reason);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("error: {}", msg);
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("warning: {}", msg);
    }

    fn divider(&mut self, label: &str) {
        println!("── {} ──", label);
    }

    fn preformatted(&mut self, text: &str) {
        println!("{}", text);
    }

    fn newline(&mut self) {
        println!();
    }
}
