use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use colored::Colorize;

use ortho_engine::{
    orthogonalize_vectors, parse_vector_set_literal, read_vector_set, write_vector_set,
    OrthoParams,
};

/// Find the orthogonal set of a vector set.
#[derive(Parser)]
#[command(name = "ortho", version, about = "Find the orthogonal set of a vector set")]
struct Cli {
    /// Input file: one vector per line, entries separated by the delimiter.
    /// Lines not starting with a digit, a sign, or '(' are skipped.
    input: Option<PathBuf>,

    /// Inline vector set literal, e.g. "[[1,0,i],[-1,i,1],[0,-1,i+1]]".
    #[arg(long, value_name = "LITERAL", conflicts_with = "input")]
    set: Option<String>,

    /// Entry delimiter for reading and writing files.
    #[arg(long, default_value_t = ',')]
    delimiter: char,

    /// Skip normalization and output the raw orthogonal residuals.
    #[arg(long)]
    no_normalize: bool,

    /// Decimal places for rounding the output entries.
    #[arg(long, default_value_t = 3, conflicts_with = "no_round")]
    precision: u32,

    /// Leave output entries unrounded.
    #[arg(long)]
    no_round: bool,

    /// Write the result to this file, one vector per line.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let vectors = match (&cli.input, &cli.set) {
        (Some(path), None) => read_vector_set(path, cli.delimiter)
            .with_context(|| format!("reading vector set from {}", path.display()))?,
        (None, Some(literal)) => {
            parse_vector_set_literal(literal).context("parsing inline vector set")?
        }
        _ => bail!("provide an input file or --set \"[[...],[...]]\""),
    };

    let params = OrthoParams {
        normalize: !cli.no_normalize,
        precision: if cli.no_round { None } else { Some(cli.precision) },
    };

    let ortho = orthogonalize_vectors(vectors, &params)?;

    let label = if params.normalize { "orthonormal" } else { "orthogonal" };
    println!("{}", format!("The {label} set is:").bright_white().bold());
    print!("{ortho}");

    if let Some(path) = &cli.output {
        write_vector_set(path, ortho.vectors(), cli.delimiter)
            .with_context(|| format!("writing result to {}", path.display()))?;
        println!("{}", format!("Saved to {}", path.display()).bright_green());
    }

    Ok(())
}
