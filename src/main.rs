// Entrypoint for the bookstore CLI.
// - Keeps `main` small: set up logging, pick a console, hand both to the
//   menu loop.
// - Returns `anyhow::Result` so terminal I/O failures surface with context.

use bookstore_cli::config::{Config, ConsoleKind};
use bookstore_cli::console::{LineConsole, TermConsole};
use bookstore_cli::store::Bookstore;
use bookstore_cli::ui::main_menu;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let config = Config::default();
    init_tracing(&config);

    let mut store = Bookstore::new();
    match config.detect_console() {
        ConsoleKind::Plain => {
            let stdin = std::io::stdin();
            let mut console = LineConsole::new(stdin.lock(), std::io::stdout());
            main_menu(&mut store, &mut console)?;
        }
        ConsoleKind::Terminal => {
            main_menu(&mut store, &mut TermConsole::new())?;
        }
    }
    Ok(())
}

/// Diagnostics go to stderr so they never mix with the menu on stdout.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
