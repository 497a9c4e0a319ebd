//! ptxdiff CLI
//!
//! Formats PTX kernel diff reports and renders per-kernel instruction graphs.

use clap::{Parser, Subcommand};
use ptxdiff::render::{GraphRenderer, GraphvizRenderer, DEFAULT_GRAPH_PATH};
use ptxdiff::{create_instruction_graph, load_diff_report, load_ptx_data, to_dot, write_report, OutputFormat};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "ptxdiff")]
#[command(author, version, about = "PTX kernel diff visualization")]
#[command(long_about = "
Consumes the JSON output of an external PTX differ and renders it for humans:
HTML-fragment diff reports for embedding in a comparison page, and per-kernel
instruction chain graphs laid out by Graphviz.
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format a precomputed kernel diff report
    Report {
        /// Diff report JSON file
        #[arg(short, long, value_name = "FILE")]
        diff: PathBuf,

        /// Output format (html, text, json)
        #[arg(short, long, default_value = "html")]
        format: String,
    },

    /// Build the instruction chain graph for one kernel
    Graph {
        /// PTX instruction data JSON file
        #[arg(short, long, value_name = "FILE")]
        ptx: PathBuf,

        /// Kernel to graph
        #[arg(short, long, value_name = "NAME")]
        kernel: String,

        /// Image output path (extension selects png/svg/pdf)
        #[arg(short, long, default_value = DEFAULT_GRAPH_PATH)]
        output: PathBuf,

        /// Print DOT text to stdout instead of rendering an image
        #[arg(long)]
        dot: bool,

        /// Graphviz layout engine executable
        #[arg(long, default_value = "dot")]
        engine: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Report { diff, format } => {
            let report = load_diff_report(&diff)?;
            let format = parse_format(&format)?;
            write_report(&report, format)?;
        }

        Commands::Graph {
            ptx,
            kernel,
            output,
            dot,
            engine,
        } => {
            let data = load_ptx_data(&ptx)?;
            let graph = create_instruction_graph(&data, &kernel)?;

            if dot {
                print!("{}", to_dot(&graph));
            } else {
                let renderer = GraphvizRenderer::with_engine(&engine);
                renderer.render(&graph, &output)?;
                println!("Wrote {}", output.display());
            }
        }
    }

    Ok(())
}

fn parse_format(name: &str) -> Result<OutputFormat, String> {
    match name {
        "html" => Ok(OutputFormat::Html),
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        other => Err(format!(
            "unknown format '{other}' (expected html, text, or json)"
        )),
    }
}
