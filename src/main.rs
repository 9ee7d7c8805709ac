// records-console - a tiny menu for keeping named records in SQLite
//
// Opens the database, runs the menu until the user quits, then closes it.

use records_console_lib::{Config, Console, Database};
use std::io;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// One thread is plenty: every step waits on the user or on SQLite anyway
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let config = Config::default();
    let db = Database::new(&config.db_path).await?;
    if db.was_created() {
        println!("Database created.");
    }

    let stdin = io::stdin();
    let mut console = Console::new(db, stdin.lock(), io::stdout());
    let outcome = console.run().await;

    // Close no matter how the loop ended
    let (db, _) = console.into_parts();
    db.close().await;

    outcome?;
    Ok(())
}

// Logs go to stderr so they never land in the middle of the menu
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}
