use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};

use crate::adapters::oracle::scripted::ScriptedOracle;
use crate::app::dto::ExploreRequest;
use crate::app::engine::ClosureEngine;
use crate::domain::explorer::ALL_LAYERS;

/// Type-closure explorer over method graph dumps.
#[derive(Debug, Parser)]
#[command(name = "tctool", version, about)]
pub struct Cli {
    /// Path to the method graph JSON dump.
    #[arg(global = true, long, default_value = "graph.json")]
    pub graph: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print a one-line summary of the dumped method.
    Summary,
    /// Walk the type graph breadth-first and print the dependency report.
    Explore {
        /// Maximum layer to expand, -1 for no limit.
        #[arg(long, default_value_t = ALL_LAYERS)]
        depth: i32,
        /// Keep at most this many constructors/subtypes per node.
        #[arg(long)]
        max_branch: Option<usize>,
        /// Root type names; defaults to the method's parameter types.
        #[arg(long)]
        root: Vec<String>,
    },
    /// Resolve constructors for every method parameter using scripted replies.
    Resolve {
        /// File of oracle replies separated by `---` lines.
        #[arg(long)]
        replies: PathBuf,
        #[arg(long)]
        max_branch: Option<usize>,
        /// Emit the transcript as JSON instead of the text report.
        #[arg(long)]
        json: bool,
    },
}

pub fn run(cli: Cli) -> Result<()> {
    let engine = ClosureEngine::load_from_json(&cli.graph)?;

    match cli.command {
        Command::Summary => print_summary(&engine),
        Command::Explore {
            depth,
            max_branch,
            root,
        } => {
            let request = ExploreRequest {
                roots: (!root.is_empty()).then_some(root),
                max_depth: depth,
                max_branch,
            };
            let response = engine.explore(&request);
            println!("Types reached: {}", response.type_count);
            print!("{}", response.report);
            Ok(())
        }
        Command::Resolve {
            replies,
            max_branch,
            json,
        } => {
            let oracle = ScriptedOracle::from_file(&replies)?;
            let response = engine.resolve(&oracle, max_branch)?;
            if json {
                let rendered = serde_json::to_string_pretty(&response)
                    .context("Failed to serialize resolve result")?;
                println!("{rendered}");
            } else {
                if let Some(class_report) = &response.class_report {
                    print!("{class_report}");
                }
                print!("{}", response.report);
            }
            Ok(())
        }
    }
}

fn print_summary(engine: &ClosureEngine) -> Result<()> {
    let summary = engine.summary();
    println!(
        "{} {}.{}",
        if summary.is_static { "static" } else { "instance" },
        summary.class_name,
        summary.method_name
    );
    println!("  returns: {}", summary.return_type);
    println!("  parameters: {}", summary.parameter_count);
    println!("  types in graph: {}", summary.type_count);
    Ok(())
}
