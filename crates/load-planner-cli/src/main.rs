use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use load_planner_core::config::SortOrder;
use load_planner_core::{Dimensions, Item, PlanResult, PlannerConfig, plan_with_config};
use serde::Deserialize;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(
    name = "load-planner",
    about = "Plan how boxes are loaded into a container",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action=ArgAction::Count, global=true, help_heading = "Logging")]
    verbose: u8,
    /// Quiet mode (overrides verbose)
    #[arg(
        short,
        long,
        default_value_t = false,
        global = true,
        help_heading = "Logging"
    )]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Plan the container and items listed in a YAML/JSON manifest
    Plan(PlanArgs),
    /// Plan the built-in six-crate sample
    Demo(OutputArgs),
    /// Simple timing bench (random items, plans once, prints time + utilization)
    Bench(BenchArgs),
}

#[derive(Parser, Debug, Clone)]
struct PlanArgs {
    /// Manifest file (YAML or JSON)
    #[arg(help_heading = "Input")]
    manifest: PathBuf,
    /// Processing order: volume_weight_desc|weight_desc|height_desc|name_asc|none (overrides the manifest)
    #[arg(long, help_heading = "Planning")]
    sort_order: Option<String>,
    /// Print the merged configuration (after manifest/CLI) and exit
    #[arg(long, default_value_t = false, help_heading = "Planning")]
    print_config: bool,
    /// Output format for --print-config: json|yaml
    #[arg(long, default_value = "json", value_parser = ["json", "yaml"], help_heading = "Planning")]
    print_config_format: String,
    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Parser, Debug, Clone)]
struct OutputArgs {
    /// Report format: text | json
    #[arg(long, default_value = "text", value_parser = ["text", "json"], help_heading = "Output")]
    format: String,
    /// Write the report to this file instead of stdout
    #[arg(short, long, help_heading = "Output")]
    out: Option<PathBuf>,
    /// Export plan stats (JSON) to this file
    #[arg(long, help_heading = "Output")]
    export_stats: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
struct BenchArgs {
    /// Number of random items
    #[arg(long, default_value_t = 1000)]
    count: usize,
    /// RNG seed
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Container size as HxWxD
    #[arg(long, default_value = "260x240x1200")]
    container: String,
    /// Smallest generated side
    #[arg(long, default_value_t = 10)]
    min_side: u32,
    /// Largest generated side
    #[arg(long, default_value_t = 80)]
    max_side: u32,
}

/// Manifest file: a container plus the items to load.
#[derive(Deserialize, Debug)]
struct Manifest {
    container: Dimensions,
    items: Vec<ManifestItem>,
    #[serde(default)]
    sort_order: Option<String>,
}

#[derive(Deserialize, Debug)]
struct ManifestItem {
    name: String,
    height: f64,
    width: f64,
    depth: f64,
    #[serde(default)]
    weight: f64,
}

impl From<ManifestItem> for Item {
    fn from(m: ManifestItem) -> Self {
        Item::new(m.name, m.height, m.width, m.depth, m.weight)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing_with_level(cli.quiet, cli.verbose);
    match &cli.command {
        Commands::Plan(args) => run_plan(args),
        Commands::Demo(args) => run_demo(args),
        Commands::Bench(b) => run_bench(b),
    }
}

fn run_plan(args: &PlanArgs) -> anyhow::Result<()> {
    let manifest = load_manifest(&args.manifest)?;
    let sort_order = match args.sort_order.as_deref().or(manifest.sort_order.as_deref()) {
        Some(s) => parse_sort_order(s)?,
        None => PlannerConfig::default().sort_order,
    };
    let cfg = PlannerConfig::builder().sort_order(sort_order).build();

    if args.print_config {
        match args.print_config_format.as_str() {
            "yaml" => println!("{}", serde_yaml::to_string(&cfg)?),
            _ => println!("{}", serde_json::to_string_pretty(&cfg)?),
        }
        return Ok(());
    }

    let container = manifest.container;
    let items: Vec<Item> = manifest.items.into_iter().map(Item::from).collect();
    info!(count = items.len(), "loaded manifest items");
    let result = plan_with_config(container, &items, &cfg)?;
    emit(&result, &args.output)
}

fn run_demo(args: &OutputArgs) -> anyhow::Result<()> {
    let container = Dimensions::new(100.0, 100.0, 240.0);
    let items = vec![
        Item::new("crateA", 50.0, 40.0, 60.0, 80.0),
        Item::new("crateB", 30.0, 30.0, 30.0, 40.0),
        Item::new("crateC", 20.0, 60.0, 40.0, 50.0),
        Item::new("crateD", 80.0, 40.0, 50.0, 90.0),
        Item::new("crateE", 10.0, 90.0, 30.0, 20.0),
        Item::new("crateF", 40.0, 40.0, 40.0, 60.0),
    ];
    let result = plan_with_config(container, &items, &PlannerConfig::default())?;
    emit(&result, args)
}

/// Writes the report (and stats if requested) for a finished plan.
fn emit(result: &PlanResult, out: &OutputArgs) -> anyhow::Result<()> {
    let stats = result.stats();
    info!(
        placed = stats.num_placed,
        skipped = stats.num_skipped,
        layers = stats.num_layers,
        utilization = format!("{:.2}%", stats.utilization * 100.0),
        "stats"
    );
    if !result.is_complete() {
        warn!(skipped = result.skipped.len(), "some items could not be placed");
    }

    let report = match out.format.as_str() {
        "json" => load_planner_core::to_json_string(result)?,
        "text" => render_text(result),
        other => anyhow::bail!("unknown report format: {}", other),
    };
    match &out.out {
        Some(path) => {
            fs::write(path, &report).with_context(|| format!("write {}", path.display()))?;
            info!(?path, "report written");
        }
        None => println!("{}", report),
    }

    if let Some(stats_path) = &out.export_stats {
        fs::write(stats_path, serde_json::to_string_pretty(&stats)?)
            .with_context(|| format!("write {}", stats_path.display()))?;
        info!(?stats_path, "stats exported");
    }
    Ok(())
}

fn render_text(result: &PlanResult) -> String {
    let c = &result.container;
    let mut s = String::new();
    let _ = writeln!(
        s,
        "Container {} x {} x {} (h x w x d)",
        c.height, c.width, c.depth
    );
    for p in &result.placements {
        let d = &p.item.dims;
        let _ = writeln!(
            s,
            "  {:<16} at ({}, {}, {})  size {} x {} x {}  weight {}",
            p.item.name,
            p.position.x,
            p.position.y,
            p.position.z,
            d.height,
            d.width,
            d.depth,
            p.item.weight
        );
    }
    if !result.skipped.is_empty() {
        let _ = writeln!(s, "Skipped:");
        for (name, reason) in result.skipped_with_reasons() {
            let _ = writeln!(s, "  {:<16} {}", name, reason);
        }
    }
    let _ = write!(s, "{}", result.stats().summary());
    s
}

fn run_bench(b: &BenchArgs) -> anyhow::Result<()> {
    use rand::{Rng, SeedableRng};
    if b.min_side == 0 || b.min_side > b.max_side {
        anyhow::bail!("invalid side range {}..={}", b.min_side, b.max_side);
    }
    let container = parse_container(&b.container)?;
    let mut rng = rand::rngs::StdRng::seed_from_u64(b.seed);
    let items: Vec<Item> = (0..b.count)
        .map(|i| {
            let h = rng.gen_range(b.min_side..=b.max_side) as f64;
            let w = rng.gen_range(b.min_side..=b.max_side) as f64;
            let d = rng.gen_range(b.min_side..=b.max_side) as f64;
            let weight = rng.gen_range(1..=100) as f64;
            Item::new(format!("item_{}", i), h, w, d, weight)
        })
        .collect();
    let start = Instant::now();
    let result = plan_with_config(container, &items, &PlannerConfig::default())?;
    let dur = start.elapsed();
    let stats = result.stats();
    println!(
        "placed={} skipped={} utilization={:.2}% time={}",
        stats.num_placed,
        stats.num_skipped,
        stats.utilization * 100.0,
        bench_fmt_dur(dur)
    );
    Ok(())
}

fn bench_fmt_dur(d: Duration) -> String {
    let ms = d.as_secs_f64() * 1000.0;
    if ms >= 1.0 {
        format!("{:.1}ms", ms)
    } else {
        format!("{}us", d.as_micros())
    }
}

fn load_manifest(path: &Path) -> anyhow::Result<Manifest> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read manifest {}", path.display()))?;
    // YAML is a superset of JSON, so one parser covers both.
    let manifest: Manifest = serde_yaml::from_str(&text)
        .with_context(|| format!("parse manifest {}", path.display()))?;
    Ok(manifest)
}

fn parse_container(s: &str) -> anyhow::Result<Dimensions> {
    let parts: Vec<&str> = s.split(['x', 'X']).collect();
    if parts.len() != 3 {
        anyhow::bail!("container must be HxWxD, got {}", s);
    }
    let mut v = [0.0f64; 3];
    for (slot, part) in v.iter_mut().zip(parts) {
        *slot = part
            .trim()
            .parse()
            .with_context(|| format!("invalid container dimension: {}", part))?;
    }
    Ok(Dimensions::new(v[0], v[1], v[2]))
}

fn parse_sort_order(s: &str) -> anyhow::Result<SortOrder> {
    s.parse()
        .map_err(|_| anyhow::anyhow!("unknown sort order: {}", s))
}

fn init_tracing_with_level(quiet: bool, verbose: u8) {
    let level = if quiet {
        "error".to_string()
    } else {
        match verbose {
            0 => "info".into(),
            1 => "debug".into(),
            _ => "trace".into(),
        }
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
