use clap::Parser;
use snapsweep::cli::Cli;
use snapsweep::clock::SystemClock;
use snapsweep::config::Config;
use snapsweep::EXIT_FATAL;

fn main() {
    // silent on success unless RUST_LOG asks for more
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let _cli = Cli::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(EXIT_FATAL);
        }
    };

    let report = match snapsweep::run(&config, &SystemClock) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(EXIT_FATAL);
        }
    };

    if let Some(summary) = report.failure_summary() {
        eprintln!("{summary}");
    }
    std::process::exit(report.exit_code());
}
