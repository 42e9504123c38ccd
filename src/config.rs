// Runtime settings. There are no flags or config files; everything here is
// either a built-in default or detected from the environment the binary
// was started in.

use std::io::IsTerminal;

/// Directive used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_DIRECTIVE: &str = "bookstore_cli=warn";

/// Requested console; `Auto` decides from stdin at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleMode {
    Auto,
    Terminal,
    Plain,
}

/// The console actually used for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleKind {
    Terminal,
    Plain,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub log_directive: String,
    pub console: ConsoleMode,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_directive: DEFAULT_LOG_DIRECTIVE.to_string(),
            console: ConsoleMode::Auto,
        }
    }
}

impl Config {
    /// Console for this process, checking whether stdin is a terminal.
    pub fn detect_console(&self) -> ConsoleKind {
        self.console_kind(std::io::stdin().is_terminal())
    }

    pub fn console_kind(&self, stdin_is_terminal: bool) -> ConsoleKind {
        match self.console {
            ConsoleMode::Terminal => ConsoleKind::Terminal,
            ConsoleMode::Plain => ConsoleKind::Plain,
            ConsoleMode::Auto if stdin_is_terminal => ConsoleKind::Terminal,
            ConsoleMode::Auto => ConsoleKind::Plain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_follows_stdin() {
        let config = Config::default();
        assert_eq!(config.console_kind(true), ConsoleKind::Terminal);
        assert_eq!(config.console_kind(false), ConsoleKind::Plain);
    }

    #[test]
    fn test_explicit_mode_is_kept() {
        let plain = Config {
            console: ConsoleMode::Plain,
            ..Config::default()
        };
        assert_eq!(plain.console_kind(true), ConsoleKind::Plain);

        let terminal = Config {
            console: ConsoleMode::Terminal,
            ..Config::default()
        };
        assert_eq!(terminal.console_kind(false), ConsoleKind::Terminal);
    }
}
