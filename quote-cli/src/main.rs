use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use quote_cli::config::AppConfig;
use quote_cli::render::ConsoleRenderer;
use quote_cli::{logging, script, session};
use quote_core::QuoteWizard;
use quote_core::models::{AddOn, CoverageLevel};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Group life insurance quotes.
///
/// Prices plans directly, or runs the intake wizard from a scripted session.
#[derive(Debug, Parser)]
#[command(name = "group-life-quote", version)]
struct Cli {
    /// TOML configuration file with `[logging]`, `[rates]` and `[seed]` tables.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter used when `RUST_LOG` is unset. Overrides the config file.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the monthly premium for a plan.
    Premium {
        /// Coverage level: `basic` or `comprehensive`.
        #[arg(long, value_parser = parse_level)]
        level: CoverageLevel,

        /// Number of employees needing coverage.
        #[arg(long)]
        employees: u32,

        /// Add-on rider, repeatable: `accidental-death`, `critical-illness`,
        /// `waiver-of-premium`.
        #[arg(long = "add-on", value_parser = parse_add_on)]
        add_ons: Vec<AddOn>,
    },

    /// Replay a CSV session script and print every wizard signal.
    Replay {
        /// Script with `action,step,field,value` columns.
        script: PathBuf,
    },

    /// Run a complete session from the seed profile.
    Demo {
        /// Start on the plan step with the seed standing in for the first
        /// two steps.
        #[arg(long)]
        plan_only: bool,
    },
}

fn parse_level(s: &str) -> Result<CoverageLevel, String> {
    CoverageLevel::parse(s).ok_or_else(|| format!("expected basic or comprehensive, got '{s}'"))
}

fn parse_add_on(s: &str) -> Result<AddOn, String> {
    AddOn::parse(s).ok_or_else(|| {
        let known: Vec<_> = AddOn::ALL.iter().map(AddOn::as_str).collect();
        format!("expected one of {}, got '{s}'", known.join(", "))
    })
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    logging::init_logging(&config.logging)?;
    debug!(?config, "configuration loaded");

    let calculator = config.calculator()?;
    let mut renderer = ConsoleRenderer::new(io::stdout().lock());

    match cli.command {
        Command::Premium {
            level,
            employees,
            add_ons,
        } => {
            let breakdown = calculator.calculate(level, &add_ons.into_iter().collect(), employees);
            renderer.render_premium(&breakdown)?;
        }
        Command::Replay { script } => {
            let events = script::load_from_file(&script)
                .with_context(|| format!("failed to load script '{}'", script.display()))?;
            info!(events = events.len(), "replaying session script");

            let mut wizard = QuoteWizard::new().with_calculator(calculator);
            session::replay(&mut wizard, events, &mut renderer)?;
        }
        Command::Demo { plan_only } => {
            let wizard = if plan_only {
                QuoteWizard::standalone_plan(&config.seed)
                    .context("seed profile does not pass validation")?
            } else {
                QuoteWizard::new()
            };
            let mut wizard = wizard.with_calculator(calculator);
            session::replay(
                &mut wizard,
                session::demo_events(&config.seed, plan_only),
                &mut renderer,
            )?;
        }
    }

    Ok(())
}
