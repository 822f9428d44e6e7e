use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use huddle::{annotate, load_roster, partition, render_html, report};

/// CLI arguments for huddle
#[derive(Parser, Debug)]
#[command(name = "huddle")]
#[command(author, version, about = "Splits a roster into small discussion groups with shared talking points")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Partition a roster into groups and derive talking points
    Match {
        /// Roster file: a .json record file or a newline-delimited name list
        roster: PathBuf,

        /// Number of people per group
        group_size: usize,

        /// Write the JSON report here instead of stdout
        #[arg(short, long, value_name = "FILE")]
        out: Option<PathBuf>,

        /// Seed for reproducible runs
        #[arg(long, value_name = "N")]
        seed: Option<u64>,
    },
    /// Render a previously generated match report as HTML
    Render {
        /// JSON report produced by `huddle match`
        report: PathBuf,

        /// Output HTML file
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Match {
            roster,
            group_size,
            out,
            seed,
        } => run_match(&roster, group_size, out.as_deref(), seed),
        Command::Render { report, output } => run_render(&report, &output),
    }
}

fn run_match(
    roster_path: &Path,
    group_size: usize,
    out: Option<&Path>,
    seed: Option<u64>,
) -> Result<()> {
    let seed = seed.unwrap_or_else(rand::random);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    eprintln!("[huddle] Using seed {}", seed);

    let roster = load_roster(roster_path)?;

    let groups = partition(&roster, group_size, &mut rng)?;
    eprintln!(
        "[huddle] ✓ Partitioned {} people into {} groups of up to {}",
        roster.len(),
        groups.len(),
        group_size
    );

    let mut annotated = Vec::with_capacity(groups.len());
    for group in &groups {
        annotated.push(annotate(group, &mut rng)?);
    }
    eprintln!("[huddle] ✓ Annotated {} groups", annotated.len());

    match out {
        Some(path) => report::write_report(&annotated, path)?,
        None => println!("{}", report::to_json(&annotated)?),
    }

    Ok(())
}

fn run_render(report_path: &Path, output_path: &Path) -> Result<()> {
    let groups = report::read_report(report_path)?;

    let html = render_html(&groups);
    fs::write(output_path, html)
        .context(format!("Failed to write HTML output: {}", output_path.display()))?;

    eprintln!(
        "[render] ✓ Rendered {} groups to {}",
        groups.len(),
        output_path.display()
    );
    Ok(())
}
