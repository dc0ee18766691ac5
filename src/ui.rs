// File: src/ui.rs
//! Terminal rendering for the front end. Everything writes to a caller
//! supplied `Write` so it can be pointed at stdout or a buffer.

use crate::charts::{ChartSeries, HistogramBar, LeaderboardEntry, Point};
use crate::core::types::{Summary, VerbRecord};
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, Write};

const BAR_WIDTH: usize = 40;
const GRID_WIDTH: usize = 60;
const GRID_HEIGHT: usize = 18;

pub fn clear_screen<W: Write>(w: &mut W) -> io::Result<()> {
    queue!(w, Clear(ClearType::All), MoveTo(0, 0))?;
    w.flush()
}

pub fn render_banner<W: Write>(w: &mut W) -> io::Result<()> {
    writeln!(w, "{}", "Hindi Verb Info Checker".bold())?;
    writeln!(w, "---------------------------------------------------------------")?;
    writeln!(w, "Check if your favourite Hindi verb is in the list (Devanagari or romanized).")?;
    writeln!(w, "Type ':help' for commands, 'exit' to quit.\n")
}

pub fn render_help<W: Write>(w: &mut W) -> io::Result<()> {
    writeln!(w, "  <verb>     look up a verb form or romanized gloss")?;
    writeln!(w, "  :stats     fun facts about the verb list")?;
    writeln!(w, "  :hist      distribution of verb lengths")?;
    writeln!(w, "  :scatter   frequency vs root length")?;
    writeln!(w, "  :zipf      Zipf's law plot")?;
    writeln!(w, "  :top [n]   top verbs by frequency")?;
    writeln!(w, "  exit       quit")
}

pub fn render_lookup<W: Write>(
    w: &mut W,
    query: &str,
    found: Option<&VerbRecord>,
    submission_url: Option<&str>,
) -> io::Result<()> {
    match found {
        Some(record) => {
            writeln!(w, "{}", format!("'{}' is found!", query.trim()).green())?;
            writeln!(w, "  Root:                  {}", record.root)?;
            writeln!(w, "  Verb forms:            {}", record.verb_forms)?;
            writeln!(w, "  Count of verb forms:   {}", record.count_vf)?;
            writeln!(w, "  Frequency:             {}", record.frequency)?;
            writeln!(
                w,
                "  English gloss:         {}",
                record.romanized.as_deref().unwrap_or("-")
            )
        }
        None => {
            writeln!(w, "{}", format!("'{}' is NOT found in the verb forms.", query.trim()).red())?;
            if let Some(url) = submission_url {
                writeln!(w, "If your verb is not in our list, submit it here: {}", url)?;
            }
            Ok(())
        }
    }
}

pub fn render_summary<W: Write>(w: &mut W, summary: &Summary) -> io::Result<()> {
    writeln!(w, "{}", "Verb Statistics & Fun Facts".bold())?;
    writeln!(
        w,
        "  Longest verb:          {} (length {})",
        summary.longest.root, summary.longest.root_length
    )?;
    writeln!(
        w,
        "  Shortest verb:         {} (length {})",
        summary.shortest.root, summary.shortest.root_length
    )?;
    writeln!(w, "  Average verb length:   {:.2}", summary.average_length)?;
    writeln!(w, "  Total verbs:           {}", summary.total_count)
}

pub fn render_chart<W: Write>(w: &mut W, series: &ChartSeries) -> io::Result<()> {
    match series {
        ChartSeries::LengthDistribution { bars } => render_histogram(w, bars),
        ChartSeries::FrequencyVsLength { points } => render_grid(
            w,
            "Frequency vs Root Length",
            "Root Length",
            "Frequency",
            points,
        ),
        ChartSeries::Zipf { points } => render_grid(
            w,
            "Zipf's Law: log(Rank) vs log(Frequency)",
            "log10(Rank)",
            "log10(Frequency)",
            points,
        ),
        ChartSeries::Leaderboard { entries } => render_leaderboard(w, entries),
    }
}

fn bar(value: f64, max: f64) -> String {
    let len = if max > 0.0 {
        ((value / max) * BAR_WIDTH as f64).round() as usize
    } else {
        0
    };
    "█".repeat(len)
}

fn render_histogram<W: Write>(w: &mut W, bars: &[HistogramBar]) -> io::Result<()> {
    writeln!(w, "{}", "Distribution of Verb Lengths".bold())?;
    writeln!(w, "Root Length | Number of Verbs")?;
    let max = bars.iter().map(|b| b.count).max().unwrap_or(0) as f64;
    for b in bars {
        writeln!(
            w,
            "{:>11} | {} {}",
            b.root_length,
            bar(b.count as f64, max).cyan(),
            b.count
        )?;
    }
    Ok(())
}

fn render_leaderboard<W: Write>(w: &mut W, entries: &[LeaderboardEntry]) -> io::Result<()> {
    writeln!(w, "{}", format!("Top {} Verbs by Frequency", entries.len()).bold())?;
    let label_width = entries
        .iter()
        .map(|e| e.label.chars().count())
        .max()
        .unwrap_or(0);
    let max = entries.iter().map(|e| e.frequency).fold(0.0, f64::max);
    for e in entries {
        let pad = label_width.saturating_sub(e.label.chars().count());
        writeln!(
            w,
            "{:>3}. {}{} | {} {} (root {}, length {})",
            e.rank,
            e.label,
            " ".repeat(pad),
            bar(e.frequency, max).green(),
            e.frequency,
            e.root,
            e.root_length
        )?;
    }
    Ok(())
}

fn render_grid<W: Write>(
    w: &mut W,
    title: &str,
    x_label: &str,
    y_label: &str,
    points: &[Point],
) -> io::Result<()> {
    writeln!(w, "{}", title.bold())?;
    if points.is_empty() {
        return writeln!(w, "(no data)");
    }

    let (min_x, max_x) = bounds(points.iter().map(|p| p.x));
    let (min_y, max_y) = bounds(points.iter().map(|p| p.y));
    let mut grid = vec![vec![' '; GRID_WIDTH]; GRID_HEIGHT];
    for p in points {
        let col = scale(p.x, min_x, max_x, GRID_WIDTH);
        let row = GRID_HEIGHT - 1 - scale(p.y, min_y, max_y, GRID_HEIGHT);
        grid[row][col] = '•';
    }

    writeln!(w, "{}", y_label)?;
    for (i, line) in grid.iter().enumerate() {
        let tick = match i {
            0 => format!("{:>10.2}", max_y),
            _ if i == GRID_HEIGHT - 1 => format!("{:>10.2}", min_y),
            _ => " ".repeat(10),
        };
        let line: String = line.iter().collect();
        writeln!(w, "{} |{}", tick, line.as_str().yellow())?;
    }
    writeln!(w, "{} +{}", " ".repeat(10), "-".repeat(GRID_WIDTH))?;
    writeln!(
        w,
        "{}  {:<.2}{}{:>.2}",
        " ".repeat(10),
        min_x,
        " ".repeat(GRID_WIDTH.saturating_sub(12)),
        max_x
    )?;
    writeln!(w, "{}{}", " ".repeat(12 + GRID_WIDTH / 2 - x_label.len() / 2), x_label)
}

fn bounds<I: Iterator<Item = f64>>(values: I) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)))
}

/// Maps `v` in `[min, max]` onto `0..cells`.
fn scale(v: f64, min: f64, max: f64, cells: usize) -> usize {
    if max <= min {
        return 0;
    }
    let pos = ((v - min) / (max - min) * (cells - 1) as f64).round() as usize;
    pos.min(cells - 1)
}
