//! Charts CLI - Main entry point

mod demo;
mod snippet;

use anyhow::Context;
use charts_core::ChartKind;
use charts_foundation::{ChartsConfig, Modifiers, CHARTS_CONFIG_FILE};
use clap::{Parser, Subcommand};
use demo::DemoApp;
use std::path::PathBuf;
use std::str::FromStr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// charts-demo - build every chart kind and click on it from the terminal
#[derive(Parser, Debug)]
#[command(name = "charts-demo")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Chart kind (line, bar, radar, pie, doughnut, polar)
    #[arg(short, long)]
    kind: Option<String>,

    /// Seed for the random month values
    #[arg(long)]
    seed: Option<u64>,

    /// Config file to use instead of the global/project ones
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Print the recorded render commands as JSON
    #[arg(long)]
    json: bool,

    /// Do not print render commands, even if the config enables them
    #[arg(long, conflicts_with = "json")]
    no_json: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the chart and the code that builds it
    Show,
    /// Click on a label of the chart
    Click {
        /// Label to click (e.g. March)
        label: String,

        #[arg(long)]
        shift: bool,

        #[arg(long)]
        ctrl: bool,

        #[arg(long)]
        alt: bool,

        #[arg(long)]
        meta: bool,

        /// Number of clicks
        #[arg(short = 'n', long, default_value = "1")]
        times: usize,
    },
    /// Show every chart kind in turn
    Tour,
    /// Write the effective config to .charts/charts.json
    Init {
        /// Overwrite an existing project config
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let mut config = match &args.config {
        Some(path) => ChartsConfig::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => ChartsConfig::load().context("Failed to load config")?,
    };
    apply_args(&args, &mut config);
    let print_json = config.record_commands;

    if let Some(Command::Init { force }) = &args.command {
        return init_project(&config, *force);
    }

    let kind = ChartKind::from_str(&config.default_kind)?;
    let mut app = DemoApp::new(&config)?;
    app.show(kind)?;

    match args.command.unwrap_or(Command::Show) {
        Command::Show => {
            print_chart(&app, print_json)?;
        }
        Command::Click {
            label,
            shift,
            ctrl,
            alt,
            meta,
            times,
        } => {
            let modifiers = Modifiers::new()
                .with_shift(shift)
                .with_ctrl(ctrl)
                .with_alt(alt)
                .with_meta(meta);

            let mut invoked = 0;
            for _ in 0..times {
                invoked += app.click(&label, modifiers)?;
            }
            tracing::debug!(label = %label, times, invoked, "Clicks dispatched");

            print_rows(&app);
            if print_json {
                println!("{}", app.commands().to_json()?);
            }
        }
        Command::Tour => {
            for kind in ChartKind::ALL {
                app.show(kind)?;
                println!("== {} ==", kind);
                print_chart(&app, print_json)?;
            }
        }
        Command::Init { .. } => {}
    }

    Ok(())
}

/// 명령줄 옵션이 설정 파일 값을 덮어씀
fn apply_args(args: &Args, config: &mut ChartsConfig) {
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(kind) = &args.kind {
        config.default_kind = kind.clone();
    }
    if args.json {
        config.record_commands = true;
    }
    if args.no_json {
        config.record_commands = false;
    }
}

fn init_project(config: &ChartsConfig, force: bool) -> anyhow::Result<()> {
    config.validate()?;
    let root = std::env::current_dir().context("Cannot get current directory")?;
    let path = root.join(".charts").join(CHARTS_CONFIG_FILE);
    if path.exists() && !force {
        anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
    }

    let path = config.save_project(&root)?;
    println!("Wrote {}", path.display());
    Ok(())
}

fn print_chart(app: &DemoApp, json: bool) -> anyhow::Result<()> {
    print!("{}", app.code());
    if json {
        println!("{}", app.commands().to_json()?);
    }
    Ok(())
}

fn print_rows(app: &DemoApp) {
    let Some(chart) = app.current() else {
        println!("No chart is displayed.");
        return;
    };
    println!("{} chart", chart.kind());
    for (label, value) in chart.rows() {
        println!("  {:<10} {}", label, value);
    }
}
