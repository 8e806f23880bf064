use anyhow::Context;
use clap::Parser;

mod cli;
mod commands;
mod context;
mod output;
mod ui;

fn main() {
    if let Err(error) = run() {
        eprintln!("alp error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    let config = alp_config::AlpConfig::load_with_dotenv().context("failed to load alp config")?;
    context::warn_unconfigured(&config);

    let format = context::resolve_format(&flags, &config);
    ui::init(format, flags.quiet);

    if let cli::Commands::Schema(args) = &cli.command {
        return commands::schema::handle(args, format);
    }

    let ctx = context::AppContext::init(&config, &flags)
        .context("failed to initialize alp application context")?;

    commands::dispatch::dispatch(&cli.command, &ctx)
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("ALP_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
