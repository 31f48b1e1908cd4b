//! CLI definition

use clap::Parser;

/// The binary takes no arguments; it opens the journal shell.
#[derive(Parser, Debug)]
#[command(name = "rosethorn")]
#[command(
    about = "Roses and thorns journal: two good things and one hard thing, every day",
    long_about = "Roses and thorns journal: two good things and one hard thing, every day.\n\n\
                  The journal file defaults to roses_thorns_journal.json in the current \
                  directory. Override it with journal_file in rosethorn.toml or the \
                  ROSETHORN_JOURNAL environment variable."
)]
#[command(version)]
pub struct Cli {}
