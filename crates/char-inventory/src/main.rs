//! Writes the character inventory of `index.html` and `fallback.html` to `chars.txt`.

use std::{
    io::{self, IsTerminal},
    process::ExitCode,
};

use char_inventory::InventoryConfig;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> ExitCode {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_ansi(io::stdout().is_terminal())
        .finish();
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed installing logger: {err}");
    }

    match char_inventory::run(&InventoryConfig::default()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(
                %err,
                source = %err.io_error(),
                "failed creating character inventory"
            );
            ExitCode::FAILURE
        }
    }
}
