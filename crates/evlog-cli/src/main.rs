use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use evlog_api::HttpClient;
use evlog_core::{Bounds, PULL_INTERVAL, Sink, StopFlag};
use evlog_cli::{Cli, Config, summary};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support; log lines go to stderr
    // so stdout stays clean for the fetched log stream.
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let client =
        HttpClient::new(&config.host, &config.api_key).context("failed to build API client")?;

    let output = cli.output.as_ref().or(config.output.as_ref());
    let mut sink = match output {
        Some(path) => {
            tracing::info!(path = %path.display(), "output file");
            Sink::file(path).with_context(|| format!("failed to open {}", path.display()))?
        }
        None => Sink::stdout(),
    };

    // Signal-to-flag adapter: SIGINT/SIGTERM only raise the stop flag; the
    // poll loop finishes its current window before observing it.
    let stop = StopFlag::new();
    {
        let stop = stop.clone();
        ctrlc::set_handler(move || stop.trigger()).context("failed to register signal handler")?;
    }

    tracing::info!(
        pid = std::process::id(),
        category = %cli.log_type,
        poll_interval_secs = PULL_INTERVAL.as_secs(),
        "starting log fetch"
    );

    let bounds = Bounds {
        start: cli.start,
        end: cli.end,
    };
    let run_summary = evlog_core::run(&client, cli.log_type, cli.tail, bounds, &mut sink, &stop)
        .context("failed writing to output")?;
    drop(sink);

    if !cli.tail && !cli.batch {
        print!("{}", summary::render(&run_summary));
    }
    tracing::info!(
        lines = run_summary.counters.lines_written,
        "log lines were fetched"
    );

    Ok(())
}
