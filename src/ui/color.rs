//! Color and emoji helpers for terminal output

pub struct Colors;

impl Colors {
    pub const RESET: &'static str = "\x1b[0m";
    pub const BOLD: &'static str = "\x1b[1m";
    pub const DIM: &'static str = "\x1b[2m";

    pub const CYAN: &'static str = "\x1b[36m";

    pub const BRIGHT_RED: &'static str = "\x1b[91m";
    pub const BRIGHT_GREEN: &'static str = "\x1b[92m";
    pub const BRIGHT_YELLOW: &'static str = "\x1b[93m";
    pub const BRIGHT_CYAN: &'static str = "\x1b[96m";
    pub const BRIGHT_WHITE: &'static str = "\x1b[97m";
}

/// Apply color to text if terminal supports it
pub fn colorize(text: &str, color: &str) -> String {
    paint(text, color, supports_formatting())
}

/// Apply color to text when `enabled`
pub fn paint(text: &str, color: &str, enabled: bool) -> String {
    if enabled {
        format!("{}{}{}", color, text, Colors::RESET)
    } else {
        text.to_string()
    }
}

/// Bold and colored, for headers
pub fn emphasize(text: &str, color: &str) -> String {
    colorize(text, &format!("{}{}", Colors::BOLD, color))
}

/// Terminal capability detection
pub fn supports_formatting() -> bool {
    use std::env;
    use std::io::IsTerminal;

    // Check if colors are explicitly disabled
    if env::var("NO_COLOR").is_ok() || env::var("FORCE_COLOR").as_deref() == Ok("0") {
        return false;
    }

    if env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    // Disable formatting when running tests
    if cfg!(test) || env::var("RUST_TEST_TIME_UNIT").is_ok() {
        return false;
    }

    // Output is redirected into a file or pipe
    if !std::io::stdout().is_terminal() {
        return false;
    }

    if let Ok(term) = env::var("TERM") {
        if term == "dumb" || term.is_empty() {
            return false;
        }

        if term.contains("color")
            || term.contains("256")
            || term.starts_with("xterm")
            || term.starts_with("screen")
            || term.starts_with("tmux")
            || term == "linux"
        {
            return true;
        }
    }

    if let Ok(term_program) = env::var("TERM_PROGRAM") {
        match term_program.as_str() {
            "Apple_Terminal" | "iTerm.app" | "vscode" | "Hyper" | "Alacritty" | "kitty"
            | "WezTerm" => return true,
            _ => {}
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_enabled() {
        assert_eq!(paint("same", Colors::BRIGHT_GREEN, true), "\x1b[92msame\x1b[0m");
    }

    #[test]
    fn test_paint_disabled() {
        assert_eq!(paint("same", Colors::BRIGHT_GREEN, false), "same");
        assert_eq!(paint("", Colors::BRIGHT_RED, false), "");
    }

    #[test]
    fn test_colorize_is_plain_under_test() {
        // cfg!(test) turns formatting off regardless of the terminal
        assert!(!supports_formatting() || std::env::var("FORCE_COLOR").is_ok());
        if !supports_formatting() {
            assert_eq!(colorize("old only", Colors::BRIGHT_YELLOW), "old only");
            assert_eq!(emphasize("Summary", Colors::BRIGHT_CYAN), "Summary");
        }
    }

    #[test]
    fn test_color_constants() {
        let constants = [
            Colors::RESET,
            Colors::BOLD,
            Colors::DIM,
            Colors::CYAN,
            Colors::BRIGHT_RED,
            Colors::BRIGHT_GREEN,
            Colors::BRIGHT_YELLOW,
            Colors::BRIGHT_CYAN,
            Colors::BRIGHT_WHITE,
        ];

        let mut unique_values = std::collections::HashSet::new();
        for constant in &constants {
            assert!(constant.starts_with('\x1b'));
            assert!(unique_values.insert(*constant), "duplicate: {constant:?}");
        }
    }
}
