use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use seatmap::geom2::Polygon;
use seatmap::rows::{quad, Strategy};
use seatmap::{LayoutCfg, Seat, VenueLayout, VenueSpec};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

mod provenance;
mod rows_csv;

#[derive(Parser)]
#[command(name = "seatmap")]
#[command(about = "Seat layouts for polygonal venue sections")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StrategyArg {
    /// Horizontal scan lines
    Scan,
    /// Interpolate between the sides of 4-sided sections
    Quad,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StageArg {
    Top,
    Bottom,
}

#[derive(Subcommand)]
enum Action {
    /// Generate seats; without --out only the validation report is printed
    Generate {
        #[arg(long)]
        venue: PathBuf,
        /// CSV with section,row,seats[,start,end,direction]
        #[arg(long)]
        rows: Option<PathBuf>,
        /// JSON layout config; missing fields keep their defaults
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long, value_enum)]
        strategy: Option<StrategyArg>,
        #[arg(long, value_enum)]
        stage: Option<StageArg>,
        #[arg(long)]
        out: Option<PathBuf>,
        /// Print the report and write nothing
        #[arg(long)]
        dry_run: bool,
        /// Exit non-zero unless the report is clean
        #[arg(long)]
        strict: bool,
    },
    /// Print outline facts per section
    Inspect {
        #[arg(long)]
        venue: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

struct GenerateArgs {
    venue: PathBuf,
    rows: Option<PathBuf>,
    config: Option<PathBuf>,
    strategy: Option<StrategyArg>,
    stage: Option<StageArg>,
    out: Option<PathBuf>,
    dry_run: bool,
    strict: bool,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Generate {
            venue,
            rows,
            config,
            strategy,
            stage,
            out,
            dry_run,
            strict,
        } => generate(GenerateArgs {
            venue,
            rows,
            config,
            strategy,
            stage,
            out,
            dry_run,
            strict,
        }),
        Action::Inspect { venue } => inspect(&venue),
        Action::Report => report(),
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))
}

fn load_cfg(args: &GenerateArgs) -> Result<LayoutCfg> {
    let mut cfg = match &args.config {
        Some(path) => read_json::<LayoutCfg>(path)?,
        None => LayoutCfg::default(),
    };
    if let Some(s) = args.strategy {
        cfg.strategy = match s {
            StrategyArg::Scan => Strategy::HorizontalScan,
            StrategyArg::Quad => Strategy::EdgeInterpolated,
        };
    }
    if let Some(s) = args.stage {
        cfg.stage = match s {
            StageArg::Top => seatmap::layout::StageSide::Top,
            StageArg::Bottom => seatmap::layout::StageSide::Bottom,
        };
    }
    cfg.validate()?;
    Ok(cfg)
}

#[derive(Serialize)]
struct SectionSummary<'a> {
    id: &'a str,
    name: &'a str,
    zone: seatmap::section::Zone,
    capacity: usize,
}

#[derive(Serialize)]
struct SeatsDoc<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    venue: Option<&'a str>,
    sections: Vec<SectionSummary<'a>>,
    seats: Vec<&'a Seat>,
}

fn seats_doc<'a>(venue: &'a VenueSpec, layout: &'a VenueLayout) -> SeatsDoc<'a> {
    SeatsDoc {
        venue: venue.name.as_deref(),
        sections: layout
            .sections
            .iter()
            .map(|s| SectionSummary {
                id: &s.id,
                name: &s.name,
                zone: s.zone,
                capacity: s.capacity(),
            })
            .collect(),
        seats: layout.seats().collect(),
    }
}

fn generate(args: GenerateArgs) -> Result<()> {
    let cfg = load_cfg(&args)?;
    let mut venue: VenueSpec = read_json(&args.venue)?;
    if let Some(rows) = &args.rows {
        let parsed = rows_csv::read_rows_csv(rows)?;
        let touched = rows_csv::apply_rows(&mut venue, parsed)?;
        tracing::info!(sections = touched, "rows replaced from csv");
    }
    tracing::info!(
        venue = %args.venue.display(),
        sections = venue.sections.len(),
        strategy = ?cfg.strategy,
        "generate"
    );

    let layout = seatmap::generate_venue(&venue, &cfg)?;
    let report = layout.report();

    match (&args.out, args.dry_run) {
        (Some(out), false) => {
            write_json(out, &seats_doc(&venue, &layout))?;
            let report_path = provenance::sibling(out, "report.json");
            write_json(&report_path, &report)?;
            let prov = provenance::Sidecar::new(serde_json::json!({
                "venue": &args.venue,
                "rows": &args.rows,
                "config": cfg,
            }))
            .output(&report_path)
            .write_next_to(out)?;
            tracing::info!(
                out = %out.display(),
                provenance = %prov.display(),
                seats = report.total_seats,
                "written"
            );
        }
        _ => {
            tracing::info!("dry run: nothing written");
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    if args.strict && !report.is_clean() {
        bail!(
            "report not clean: {} failed section(s), {} warning(s)",
            report.failures.len(),
            report.warning_count()
        );
    }
    Ok(())
}

#[derive(Serialize)]
struct OutlineFacts<'a> {
    id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    vertices: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bounds: Option<seatmap::geom2::Bounds2>,
    #[serde(skip_serializing_if = "Option::is_none")]
    area: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    convex: Option<bool>,
    /// Edge-interpolated rows apply.
    #[serde(skip_serializing_if = "Option::is_none")]
    quad: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn outline_facts<'a>(
    id: &'a str,
    outline: Result<Polygon, seatmap::LayoutError>,
) -> OutlineFacts<'a> {
    match outline {
        Ok(p) => OutlineFacts {
            id,
            vertices: Some(p.len()),
            bounds: Some(p.bounds()),
            area: Some(p.area()),
            convex: Some(p.is_convex()),
            quad: Some(quad::classify(p.vertices()).is_some()),
            error: None,
        },
        Err(e) => OutlineFacts {
            id,
            vertices: None,
            bounds: None,
            area: None,
            convex: None,
            quad: None,
            error: Some(e.to_string()),
        },
    }
}

fn inspect(venue: &Path) -> Result<()> {
    let parsed: VenueSpec = read_json(venue)?;
    let facts: Vec<OutlineFacts> = parsed
        .sections
        .iter()
        .map(|s| outline_facts(&s.id, s.outline()))
        .collect();
    tracing::info!(sections = facts.len(), "inspect");
    println!("{}", serde_json::to_string_pretty(&facts)?);
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::code_rev(),
        "seatmap_version": seatmap::VERSION,
        "default_config": LayoutCfg::default(),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
