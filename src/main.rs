use dlplus_storefront::{
    config,
    errors::Result,
    shell::{
        ConsoleNotifier, Storefront,
        commands::{self, Command, Flow, HELP},
    },
};
use dotenvy::dotenv;
use std::io::{self, BufRead, Write};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible). Standard output is the
    //    storefront itself, so logs go to stderr and default to warnings only.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    // 2. Load .env file; env vars can be set externally
    dotenv().ok();

    // 3. Load configuration and seed the storefront
    let app_config = config::load_app_configuration()?;
    let mut store = Storefront::from_config(&app_config, ConsoleNotifier)
        .inspect(|store| info!("Storefront ready with {} products", store.catalog().len()))
        .inspect_err(|e| warn!("Failed to load the catalog: {e}"))?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    writeln!(stdout, "Welcome to DLPlus!\n{HELP}")?;

    let mut line = String::new();
    loop {
        write!(stdout, "[cart: {}]> ", store.header_badge())?;
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        match line
            .parse::<Command>()
            .and_then(|command| commands::run(&mut store, command))
        {
            Ok(Flow::Continue(output)) if output.is_empty() => {}
            Ok(Flow::Continue(output)) => writeln!(stdout, "{output}")?,
            Ok(Flow::Quit) => break,
            Err(e) => {
                warn!("{e}");
                writeln!(stdout, "❌ {e}")?;
            }
        }
    }

    info!("Goodbye");
    Ok(())
}
