mod logic;
mod util;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::time::Instant;

use hazard_game::{LectureCatalog, StyleConfig};
use logic::reports::{self, QaReport};
use logic::{run_catalog, validate_catalog};
use util::{parse_policies, parse_seeds};

const BUNDLED_LECTURES: &str = include_str!("../../hazard-web/static/assets/data/lectures.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ReportFormat {
    Console,
    Json,
    Markdown,
}

#[derive(Debug, Parser)]
#[command(name = "hazard-tester", version)]
#[command(about = "Content QA for hazard lessons - validates lecture data and plays decision decks")]
struct Args {
    /// Lecture catalog JSON to check (defaults to the bundled catalog)
    #[arg(long)]
    content: Option<PathBuf>,

    /// Policies to play with (comma-separated: oracle,first,last,random,all)
    #[arg(long, default_value = "all")]
    policies: String,

    /// Seeds for randomized policies (comma-separated)
    #[arg(long, default_value = "1337")]
    seeds: String,

    /// Output report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Only validate content; skip scripted playthroughs
    #[arg(long)]
    validate_only: bool,

    /// Write the stylesheet config JSON (fonts, brand palette, content globs) and exit
    #[arg(long, value_name = "PATH")]
    emit_style_config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    if maybe_emit_style_config(&args)? {
        return Ok(());
    }

    if args.report == ReportFormat::Console {
        announce_banner();
    }

    let start_time = Instant::now();
    let (source, catalog) = load_catalog(&args)?;
    log::info!("loaded {} lecture(s) from {source}", catalog.len());

    let validation = validate_catalog(&catalog);
    for problem in &validation.problems {
        log::warn!("{problem}");
    }

    let playthroughs = if args.validate_only {
        Vec::new()
    } else {
        let strategies = parse_policies(&args.policies)?;
        let seeds = parse_seeds(&args.seeds)?;
        run_catalog(&catalog, &strategies, &seeds)
    };

    let report = QaReport::new(source, validation, playthroughs, start_time.elapsed());
    write_report(&args, &report)?;

    if !report.passed() {
        std::process::exit(1);
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn maybe_emit_style_config(args: &Args) -> Result<bool> {
    let Some(path) = &args.emit_style_config else {
        return Ok(false);
    };
    let config = StyleConfig::standard().to_config_json();
    let mut output_target = OutputTarget::new(Some(path.clone()))?;
    writeln!(
        output_target.writer(),
        "{}",
        serde_json::to_string_pretty(&config)?
    )?;
    output_target.flush_inner()?;
    log::info!("wrote style config to {}", path.display());
    Ok(true)
}

fn announce_banner() {
    println!("{}", "🌋 Hazard Lesson Tester".bright_cyan().bold());
    println!("{}", "=======================".cyan());
}

fn load_catalog(args: &Args) -> Result<(String, LectureCatalog)> {
    match &args.content {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let catalog = LectureCatalog::from_json(&json)
                .with_context(|| format!("failed to parse {}", path.display()))?;
            Ok((path.display().to_string(), catalog))
        }
        None => {
            let catalog = LectureCatalog::from_json(BUNDLED_LECTURES)
                .context("failed to parse bundled lectures")?;
            Ok(("bundled lectures.json".to_string(), catalog))
        }
    }
}

fn write_report(args: &Args, report: &QaReport) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;
    match args.report {
        ReportFormat::Console => reports::write_console_report(&mut output_target, report)?,
        ReportFormat::Json => reports::write_json_report(&mut output_target, report)?,
        ReportFormat::Markdown => reports::write_markdown_report(&mut output_target, report)?,
    }
    output_target.flush_inner()?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        self.writer().flush()
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}
