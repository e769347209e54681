//! Shell completion generation for sitecmp

use clap::Command;
use clap_complete::{Generator, generate};
use std::io::Write;

/// Generate shell completions for the given shell on stdout
pub fn print_completions<G: Generator>(generator: G, app: &mut Command) {
    write_completions(generator, app, &mut std::io::stdout());
}

/// Generate shell completions into `out`
pub fn write_completions<G: Generator>(generator: G, app: &mut Command, out: &mut dyn Write) {
    let name = app.get_name().to_string();
    generate(generator, app, name, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::cli::Cli;
    use clap::CommandFactory;
    use clap_complete::Shell;

    fn completions_for(shell: Shell) -> String {
        let mut app = Cli::command();
        let mut buffer = Vec::new();
        write_completions(shell, &mut app, &mut buffer);
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_bash_completions_mention_flags() {
        let script = completions_for(Shell::Bash);
        assert!(script.contains("sitecmp"));
        assert!(script.contains("--demo"));
        assert!(script.contains("--exclude-pattern"));
    }

    #[test]
    fn test_completions_for_every_shell() {
        for shell in [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell, Shell::Elvish] {
            assert!(!completions_for(shell).is_empty(), "empty script for {shell}");
        }
    }
}
