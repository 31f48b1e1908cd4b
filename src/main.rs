use clap::Parser;
use rosethorn::cli::Cli;
use rosethorn::domain::today_key;
use rosethorn::error::RosethornError;
use rosethorn::infrastructure::{logging, Config, EntryStore};
use rosethorn::tui::{self, App};

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(_cli: Cli) -> Result<(), RosethornError> {
    let cwd = std::env::current_dir()?;
    let config = Config::resolve(&cwd)?;

    let log_path = config.log_path();
    if let Err(e) = logging::init(&log_path) {
        eprintln!("Warning: logging disabled ({}): {}", log_path.display(), e);
    }

    let store = EntryStore::new(config.journal_path(&cwd));
    tracing::info!(journal = %store.path().display(), "opening journal");

    tui::run(App::new(store, today_key()))
}
