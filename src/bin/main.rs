use clap::{Parser, Subcommand};
use std::io::{stdin, stdout, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use verb_core::charts::ChartKind;
use verb_core::config::{load_config, save_config, AppConfig, DEFAULT_CONFIG_PATH};
use verb_core::error::{Result, VerbInfoError};
use verb_core::persistence::save_snapshot;
use verb_core::{ui, VerbInfoEngine};

#[derive(Parser)]
#[command(name = "verb_info")]
#[command(about = "Look up Hindi verbs and explore statistics over the verb list")]
struct Args {
    /// JSON config file
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Lookup dataset (overrides the config)
    #[arg(long)]
    lookup_csv: Option<PathBuf>,

    /// Statistics dataset (overrides the config)
    #[arg(long)]
    stats_csv: Option<PathBuf>,

    /// Dataset snapshot to read instead of the CSVs
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Print chart series and statistics as JSON
    #[arg(long)]
    json: bool,

    /// Write the effective settings (config plus the flags above) to --config and exit
    #[arg(long)]
    save_config: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Look up one verb form or romanized gloss
    Lookup { query: String },
    /// Longest, shortest, average length and total
    Stats,
    /// Top verbs by frequency
    Top { n: Option<usize> },
    /// Draw one chart: histogram, scatter, zipf or top
    Chart { kind: ChartKind },
    /// Write both datasets to a binary snapshot
    Snapshot { out: PathBuf },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[ERROR] {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let config = effective_config(&args);
    if args.save_config {
        save_config(&config, &args.config)?;
        println!("Settings written to '{}'", args.config.display());
        return Ok(());
    }

    let engine = VerbInfoEngine::load(&config)?;
    let mut out = stdout();

    match args.command {
        Some(Command::Lookup { query }) => {
            ui::render_lookup(&mut out, &query, engine.lookup(&query), config.submission_url.as_deref())?
        }
        Some(Command::Stats) => {
            let summary = engine.summary()?;
            if args.json {
                writeln!(out, "{}", serde_json::to_string_pretty(&summary)?)?;
            } else {
                ui::render_summary(&mut out, &summary)?;
            }
        }
        Some(Command::Top { n }) => show_chart(&mut out, &engine, ChartKind::Top, n, args.json)?,
        Some(Command::Chart { kind }) => show_chart(&mut out, &engine, kind, None, args.json)?,
        Some(Command::Snapshot { out: path }) => {
            save_snapshot(&engine.datasets(), &path).map_err(VerbInfoError::SnapshotWrite)?;
            println!("Snapshot written to '{}'", path.display());
        }
        None => interactive(&engine, &config)?,
    }
    Ok(())
}

fn effective_config(args: &Args) -> AppConfig {
    let mut config = load_config(&args.config);
    apply_overrides(&mut config, args);
    config
}

fn apply_overrides(config: &mut AppConfig, args: &Args) {
    if let Some(path) = &args.lookup_csv {
        config.lookup_csv = path.clone();
    }
    if let Some(path) = &args.stats_csv {
        config.stats_csv = path.clone();
    }
    if let Some(path) = &args.snapshot {
        config.snapshot_path = Some(path.clone());
    }
}

fn show_chart<W: Write>(
    out: &mut W,
    engine: &VerbInfoEngine,
    kind: ChartKind,
    top_n: Option<usize>,
    json: bool,
) -> Result<()> {
    let series = engine.chart(kind, top_n);
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&series)?)?;
    } else {
        ui::render_chart(out, &series)?;
    }
    Ok(())
}

fn interactive(engine: &VerbInfoEngine, config: &AppConfig) -> Result<()> {
    let mut out = stdout();
    ui::clear_screen(&mut out)?;
    ui::render_banner(&mut out)?;

    loop {
        print!("\n> ");
        out.flush()?;

        let mut input = String::new();
        if stdin().read_line(&mut input)? == 0 {
            break;
        }
        let cmd = input.trim();

        match cmd {
            "exit" | ":q" => break,
            "" => continue,
            ":help" => ui::render_help(&mut out)?,
            ":stats" => match engine.summary() {
                Ok(summary) => ui::render_summary(&mut out, &summary)?,
                Err(e) => eprintln!("[ERROR] {}", e),
            },
            ":hist" => show_chart(&mut out, engine, ChartKind::Histogram, None, false)?,
            ":scatter" => show_chart(&mut out, engine, ChartKind::Scatter, None, false)?,
            ":zipf" => show_chart(&mut out, engine, ChartKind::Zipf, None, false)?,
            s if s.starts_with(":top") => {
                let n = s[4..].trim().parse::<usize>().ok();
                show_chart(&mut out, engine, ChartKind::Top, n, false)?;
            }
            s if s.starts_with(':') => {
                println!("Unknown command '{}'.", s);
                ui::render_help(&mut out)?;
            }
            query => ui::render_lookup(
                &mut out,
                query,
                engine.lookup(query),
                config.submission_url.as_deref(),
            )?,
        }
    }
    Ok(())
}
