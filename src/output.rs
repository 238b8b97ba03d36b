//! Terminal output formatting for the rrss CLI.
//!
//! Cargo-style status lines with right-aligned colored verbs, plus
//! truecolor swatches for palette display. Status output goes to stderr;
//! stdout is reserved for machine-readable output (JSON, Typst source,
//! palette tables).

use std::io::{self, IsTerminal, Write};

use crate::types::Color;

/// ANSI escape codes.
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

/// Width for right-aligned verb column.
const VERB_WIDTH: usize = 12;

/// Terminal-aware status printer.
pub struct Printer {
    err_color: bool,
    out_color: bool,
}

impl Printer {
    pub fn new() -> Self {
        Self {
            err_color: io::stderr().is_terminal(),
            out_color: io::stdout().is_terminal(),
        }
    }

    /// Print a status line with a green bold verb.
    /// e.g. "   Recoloring photo.jpg (sunset, intensity 0.7)"
    pub fn status(&self, verb: &str, message: &str) {
        self.print_line(GREEN, verb, message);
    }

    /// Print an informational line with a cyan bold verb.
    pub fn info(&self, verb: &str, message: &str) {
        self.print_line(CYAN, verb, message);
    }

    /// Print a warning line with a yellow bold verb.
    pub fn warning(&self, verb: &str, message: &str) {
        self.print_line(YELLOW, verb, message);
    }

    /// Print an error line with a red bold verb.
    pub fn error(&self, verb: &str, message: &str) {
        self.print_line(RED, verb, message);
    }

    /// Format a string as dim/grey.
    pub fn dim(&self, text: &str) -> String {
        if self.err_color {
            format!("{DIM}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    /// Format a string as bold.
    pub fn bold(&self, text: &str) -> String {
        if self.err_color {
            format!("{BOLD}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    /// A block of the given color for stdout tables, via a truecolor
    /// background. Falls back to plain spaces without a terminal.
    pub fn swatch(&self, color: Color) -> String {
        if self.out_color {
            format!("\x1b[48;2;{};{};{}m      {RESET}", color.r, color.g, color.b)
        } else {
            "      ".to_string()
        }
    }

    fn print_line(&self, color: &str, verb: &str, message: &str) {
        let mut stderr = io::stderr().lock();
        if self.err_color {
            let _ = writeln!(stderr, "{BOLD}{color}{verb:>VERB_WIDTH$}{RESET} {message}");
        } else {
            let _ = writeln!(stderr, "{verb:>VERB_WIDTH$} {message}");
        }
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

/// Pluralize a count: `plural(1, "color", "colors")` → "1 color".
pub fn plural(n: usize, singular: &str, pluralized: &str) -> String {
    if n == 1 {
        format!("{} {}", n, singular)
    } else {
        format!("{} {}", n, pluralized)
    }
}

/// Human-readable file size for status lines.
pub fn display_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{}B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.0}K", bytes as f64 / 1024.0)
    } else {
        format!("{:.1}M", bytes as f64 / (1024.0 * 1024.0))
    }
}

/// Return a relative display path when possible, absolute otherwise.
pub fn display_path(path: &std::path::Path) -> String {
    if let Ok(cwd) = std::env::current_dir() {
        if let Ok(relative) = path.strip_prefix(&cwd) {
            let s = relative.display().to_string();
            if s.is_empty() {
                return ".".to_string();
            }
            return s;
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural() {
        assert_eq!(plural(1, "color", "colors"), "1 color");
        assert_eq!(plural(0, "color", "colors"), "0 colors");
        assert_eq!(plural(12, "post", "posts"), "12 posts");
    }

    #[test]
    fn test_display_size() {
        assert_eq!(display_size(512), "512B");
        assert_eq!(display_size(2048), "2K");
        assert_eq!(display_size(3 * 1024 * 1024), "3.0M");
    }

    #[test]
    fn test_display_path_absolute() {
        use std::path::Path;
        let p = Path::new("/nonexistent/path/to/file");
        assert_eq!(display_path(p), "/nonexistent/path/to/file");
    }
}
