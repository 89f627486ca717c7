use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    // Load .env early; ignore if missing.
    dotenvy::dotenv().ok();

    // Diagnostics go to stderr so the report on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("newslog=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = newslog::cli::Cli::parse();
    if let Err(err) = newslog::run(cli) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
