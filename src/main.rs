//! DSP Planner - Command Line Interface
//!
//! Computes the production chain for an item at a target rate.
//! Run with `--help` to see all available options.

use clap::{Parser, ValueEnum};
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use dsp_planner::{
    display::{display_plan, to_json},
    planner::{PlanRequest, Planner, PlannerConfig},
};

/// Output format for the computed plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Indented text table
    Table,
    /// Pretty-printed JSON
    Json,
}

/// Command-line arguments for the planner.
#[derive(Parser, Debug)]
#[command(name = "dsp-planner")]
#[command(
    author,
    version,
    about = "Compute production chains for crafting recipes",
    long_about = None
)]
struct Args {
    /// Item to produce (case-insensitive)
    #[arg(short, long, required_unless_present = "list")]
    item: Option<String>,

    /// Target output in items per second
    #[arg(short, long, default_value = "1.0")]
    rate: f64,

    /// Recipe table (.json or .csv)
    #[arg(short, long, default_value = "data/items.json")]
    data: PathBuf,

    /// Recipe variant override, e.g. --variant "Graphene=1" (repeatable)
    #[arg(short, long = "variant", value_name = "ITEM=INDEX", value_parser = parse_variant)]
    variants: Vec<(String, usize)>,

    /// Depth assigned to the requested item
    #[arg(long, default_value = "1")]
    start_depth: u32,

    /// List every visit instead of merging duplicate items
    #[arg(long, default_value = "false")]
    raw: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    format: OutputFormat,

    /// Write the result to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// List producible items and exit
    #[arg(long, default_value = "false")]
    list: bool,
}

fn parse_variant(s: &str) -> Result<(String, usize), String> {
    let (item, index) = s
        .rsplit_once('=')
        .ok_or_else(|| format!("expected ITEM=INDEX, got '{}'", s))?;
    let index = index
        .trim()
        .parse()
        .map_err(|_| format!("variant index must be a non-negative integer, got '{}'", index))?;
    Ok((item.trim().to_string(), index))
}

/// Logs go to stderr so JSON on stdout stays clean. `RUST_LOG` overrides the
/// default `warn` level.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();
    let args = Args::parse();

    let config = PlannerConfig {
        data_source: args.data.clone(),
    };
    let planner = Planner::from_config(&config)?;

    if args.list {
        for item in planner.catalog().items() {
            let variants = planner.catalog().variants(item).len();
            if variants > 1 {
                println!("{} ({} variants)", item, variants);
            } else {
                println!("{}", item);
            }
        }
        return Ok(());
    }

    let Some(item) = args.item else {
        return Err("--item is required".into());
    };

    let mut request = PlanRequest::new(item, args.rate);
    request.start_depth = args.start_depth;
    for (variant_item, index) in &args.variants {
        request = request.with_variant(variant_item, *index);
    }

    let nodes = if args.raw {
        planner.plan_raw(&request)
    } else {
        planner.plan(&request)
    };

    match (args.format, &args.output) {
        (OutputFormat::Table, None) => display_plan(&request.item, request.rate, &nodes),
        (OutputFormat::Table, Some(path)) => {
            fs::write(path, dsp_planner::display::render_table(&nodes))?;
            info!(path = %path.display(), "plan written");
        }
        (OutputFormat::Json, None) => println!("{}", to_json(&nodes)?),
        (OutputFormat::Json, Some(path)) => {
            fs::write(path, to_json(&nodes)?)?;
            info!(path = %path.display(), "plan written");
        }
    }

    Ok(())
}
