use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use scatterscope::app::{load_dataset, OverviewView};
use scatterscope::{AppConfig, AppContext};

#[derive(Parser, Debug)]
#[command(name = "scatterscope", version, about = "Navigate the genre explorer from the terminal")]
struct Cli {
    /// TOML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the route table
    Routes,
    /// Show which view a path activates
    Resolve { path: String },
    /// Walk through steps, printing the active view after each
    ///
    /// A step is a path such as `/details/jazz`, `back`, `forward`, or
    /// `select=GENRE` to pick a genre from the overview.
    Browse {
        /// JSON array of records to explore
        #[arg(short, long)]
        data: Option<PathBuf>,

        steps: Vec<String>,
    },
}

fn init_tracing(config: &AppConfig, verbose: bool) {
    let fallback = if verbose { "debug" } else { config.log_filter.as_str() };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_step(ctx: &AppContext, step: &str) -> anyhow::Result<()> {
    match step {
        "back" => {
            if ctx.router().back().is_none() {
                tracing::warn!("already at the oldest entry");
            }
        }
        "forward" => {
            if ctx.router().forward().is_none() {
                tracing::warn!("already at the newest entry");
            }
        }
        _ => {
            if let Some(genre) = step.strip_prefix("select=") {
                OverviewView::select(ctx, genre)
                    .with_context(|| format!("failed to select genre `{genre}`"))?;
            } else if step.starts_with('/') {
                ctx.navigate(step)
                    .with_context(|| format!("failed to navigate to `{step}`"))?;
            } else {
                bail!("unrecognised step `{step}`");
            }
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_or_default(cli.config.as_deref()).context("failed to load config")?;
    init_tracing(&config, cli.verbose);

    let ctx = AppContext::new(config).context("failed to build application")?;

    match cli.command {
        Command::Routes => {
            for route in ctx.router().table().routes() {
                let props = if route.props { "props" } else { "-" };
                println!("{:<20} {:<12} {:<10} {}", route.pattern, route.name, route.view, props);
            }
        }
        Command::Resolve { path } => {
            let matched = ctx.router().resolve(&path)?;
            println!("{} ({})", matched.view, matched.name);
            for (name, value) in matched.props.iter() {
                println!("  {name} = {value:?}");
            }
        }
        Command::Browse { data, steps } => {
            let ctx = match data {
                Some(path) => ctx.with_dataset(load_dataset(&path)?),
                None => ctx,
            };
            println!("{}", ctx.render());
            for step in &steps {
                run_step(&ctx, step)?;
                println!("\n> {step}\n{}", ctx.render());
            }
        }
    }

    Ok(())
}
