//! relont CLI
//!
//! Converts `[A]-(relation)->[B]` statement files into an OWL ontology:
//! - `convert`: statements → RDF/XML (or Turtle / N-Triples)
//! - `tables`: print the effective predicate tables as JSON

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use relont_dsl::RelationTables;
use relont_rdfowl::{Converter, ConverterConfig, RdfFormat, DEFAULT_BASE_IRI};
use std::path::{Path, PathBuf};

const DEFAULT_INPUT: &str = "../supporting-files/ontology.rela";
const DEFAULT_OUTPUT: &str = "../supporting-files/ontology.xml";

#[derive(Parser)]
#[command(name = "relont")]
#[command(
    author,
    version,
    about = "relont: relation statements to OWL ontology"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a statement file into a serialized ontology graph.
    Convert {
        /// Input statements, one `[A]-(relation)->[B]` per line
        #[arg(default_value = DEFAULT_INPUT)]
        input: PathBuf,
        /// Output ontology file
        #[arg(short, long, default_value = DEFAULT_OUTPUT)]
        out: PathBuf,
        /// Output format: rdfxml, turtle, ntriples (default: from extension)
        #[arg(long)]
        format: Option<RdfFormat>,
        /// Base namespace for concept and relation IRIs
        #[arg(long, default_value = DEFAULT_BASE_IRI)]
        base_iri: String,
        /// Replacement predicate tables (JSON)
        #[arg(long)]
        tables: Option<PathBuf>,
        /// Do not print per-line diagnostics to stdout
        #[arg(short, long)]
        quiet: bool,
        /// Also write the run report and per-line records as JSON
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Print the effective predicate tables as JSON.
    Tables {
        /// Replacement predicate tables (JSON) to validate and print
        #[arg(long)]
        tables: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Convert {
            input,
            out,
            format,
            base_iri,
            tables,
            quiet,
            report,
        } => {
            let tables = load_tables(tables.as_deref())?;
            let config = ConverterConfig {
                base_iri,
                tables,
                format,
            };
            cmd_convert(&input, &out, config, quiet, report.as_deref())?;
        }
        Commands::Tables { tables } => {
            let tables = load_tables(tables.as_deref())?;
            println!("{}", tables.to_json_pretty()?);
        }
    }
    Ok(())
}

fn load_tables(path: Option<&Path>) -> Result<RelationTables> {
    match path {
        Some(path) => RelationTables::from_json_path(path)
            .with_context(|| format!("failed to load relation tables from {}", path.display())),
        None => Ok(RelationTables::default()),
    }
}

fn cmd_convert(
    input: &Path,
    out: &Path,
    config: ConverterConfig,
    quiet: bool,
    report_path: Option<&Path>,
) -> Result<()> {
    eprintln!(
        "{} relations {}",
        "Converting".green().bold(),
        input.display()
    );

    let format = config.format;
    let converter = Converter::new(config);
    let conversion = converter
        .convert_file(input)
        .with_context(|| format!("failed to read {}", input.display()))?;

    if !quiet {
        for diagnostic in &conversion.diagnostics {
            println!("{diagnostic}");
        }
    }

    let written = conversion
        .write(out, format)
        .with_context(|| format!("failed to write {}", out.display()))?;

    if let Some(path) = report_path {
        let json = serde_json::to_string_pretty(&conversion.summary())?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report {}", path.display()))?;
    }

    let report = &conversion.report;
    eprintln!(
        "  {} {} lines ({} parsed, {} skipped)",
        "→".cyan(),
        report.lines_read,
        report.lines_parsed,
        report.lines_skipped
    );
    eprintln!(
        "  {} {} triples, {} subclass edges, {} object properties",
        "→".cyan(),
        report.triples,
        report.hierarchical_edges,
        report.relation_nodes
    );
    eprintln!(
        "{} {} ({written})",
        "wrote".green().bold(),
        out.display().to_string().bold()
    );
    Ok(())
}
