use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use itercomb::util::binomial;
use itercomb::{CombinationError, EnumerationConfig, ZeroSizePolicy};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "itercomb", about = "Enumerate order-preserving combinations")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print every selection of SIZE items, one per line.
    List {
        /// Number of items per selection.
        size: usize,
        /// Items to choose from (ignored when --input is given).
        items: Vec<String>,
        /// Read items from a file, one per line.
        #[arg(long)]
        input: Option<PathBuf>,
        /// Stop after this many selections.
        #[arg(long)]
        limit: Option<usize>,
        /// Prefix each selection with its source positions.
        #[arg(long)]
        positions: bool,
        /// Separator placed between items of a selection.
        #[arg(long, default_value = " ")]
        separator: String,
        /// Treat SIZE 0 as a single empty selection.
        #[arg(long)]
        include_empty: bool,
    },
    /// Print how many selections of SIZE exist for LEN items.
    Count {
        /// Number of items per selection.
        size: usize,
        /// Number of items to choose from.
        len: usize,
        /// Treat SIZE 0 as a single empty selection.
        #[arg(long)]
        include_empty: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List {
            size,
            items,
            input,
            limit,
            positions,
            separator,
            include_empty,
        } => {
            let config = EnumerationConfig::new(size)
                .with_limit(limit)
                .with_positions(positions)
                .with_separator(separator)
                .with_zero_size_policy(zero_size_policy(include_empty));
            let items = match input {
                Some(path) => read_items_file(&path)?,
                None => items,
            };
            run_list(&config, &items)?
        }
        Commands::Count {
            size,
            len,
            include_empty,
        } => run_count(size, len, include_empty)?,
    }

    Ok(())
}

fn zero_size_policy(include_empty: bool) -> ZeroSizePolicy {
    if include_empty {
        ZeroSizePolicy::SingleEmpty
    } else {
        ZeroSizePolicy::Exhausted
    }
}

fn run_list(config: &EnumerationConfig, items: &[String]) -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_selections(config, items, &mut out)?;
    out.flush().context("failed to flush output")?;
    Ok(())
}

/// Write one line per selection to `out`, returning how many were written.
fn write_selections<W: Write>(
    config: &EnumerationConfig,
    items: &[String],
    out: &mut W,
) -> Result<usize> {
    config.validate().context("invalid list options")?;

    let engine = config.engine(items);
    tracing::debug!(
        size = engine.selection_size(),
        len = engine.source_len(),
        total = ?engine.count(),
        "enumerating selections"
    );

    let mut traversal = engine.iter();
    let mut emitted = 0usize;

    while !traversal.is_exhausted() {
        if config.limit.is_some_and(|limit| emitted >= limit) {
            break;
        }
        let selection = traversal.try_current()?;
        let line = selection.join(config.separator.as_str());
        match traversal.positions() {
            Some(positions) if config.show_positions => {
                let joined: Vec<String> = positions.iter().map(usize::to_string).collect();
                writeln!(out, "{}\t{}", joined.join(","), line)?;
            }
            _ => writeln!(out, "{line}")?,
        }
        emitted += 1;
        traversal.advance();
    }

    Ok(emitted)
}

fn run_count(size: usize, len: usize, include_empty: bool) -> Result<()> {
    println!("{}", count_selections(size, len, include_empty)?);
    Ok(())
}

fn count_selections(size: usize, len: usize, include_empty: bool) -> Result<usize> {
    if size == 0 {
        return Ok(usize::from(include_empty));
    }
    let total = binomial(len, size)
        .ok_or(CombinationError::CountOverflow { len, size })
        .with_context(|| format!("cannot count selections of {size} from {len} items"))?;
    Ok(total)
}

fn read_items_file(path: &Path) -> Result<Vec<String>> {
    let reader = BufReader::new(
        File::open(path).with_context(|| format!("failed to open items file {}", path.display()))?,
    );
    parse_items(reader).with_context(|| format!("failed to read {}", path.display()))
}

/// One item per line, trimmed; blank lines are skipped.
fn parse_items<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut items = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let item = line.trim();
        if item.is_empty() {
            continue;
        }
        items.push(item.to_string());
    }
    Ok(items)
}
