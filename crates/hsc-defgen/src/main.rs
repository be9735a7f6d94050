use std::fs;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use hsc_definitions::{emit_table, BuiltinDescriptions, DefinitionTable, EmitMode};

/// Generate the built-in definition table for the HSC compiler.
///
/// Reads the JSON description of the engine's built-in functions and
/// globals, builds the name-sorted definition table, and writes it out as
/// a Rust module.
///
/// EXAMPLES:
///     hsc-defgen definitions.json definitions_generated.rs
///     hsc-defgen definitions.json definitions_generated.rs --table-only
///     hsc-defgen definitions.json definitions_generated.rs --check
#[derive(Parser)]
#[command(name = "hsc-defgen")]
#[command(version)]
struct Cli {
    /// Path to the definition description (JSON)
    definitions: PathBuf,

    /// Path of the generated Rust module
    output: PathBuf,

    /// Emit only the static table, without the bundled search routine
    #[arg(long)]
    table_only: bool,

    /// Verify the output file is up to date instead of writing it
    #[arg(long)]
    check: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let file = fs::File::open(&cli.definitions)
        .with_context(|| format!("failed to open {}", cli.definitions.display()))?;
    let descriptions = BuiltinDescriptions::from_json_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse {}", cli.definitions.display()))?;
    let table = DefinitionTable::build(descriptions)
        .with_context(|| format!("invalid definition description {}", cli.definitions.display()))?;

    let mode = if cli.table_only {
        EmitMode::TableOnly
    } else {
        EmitMode::TableWithSearch
    };
    let generated = emit_table(&table, mode);

    if cli.check {
        let existing = fs::read_to_string(&cli.output)
            .with_context(|| format!("failed to read {}", cli.output.display()))?;
        if existing != generated {
            bail!(
                "{} is out of date; rerun hsc-defgen to regenerate it",
                cli.output.display()
            );
        }
    } else {
        fs::write(&cli.output, &generated)
            .with_context(|| format!("failed to write {}", cli.output.display()))?;
    }

    Ok(())
}
