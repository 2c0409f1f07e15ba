//! graphlens CLI: directed graph analytics with an MCP server.
//!
//! Usage:
//!   graphlens analyze [FILE|-] [--compact]
//!   graphlens validate [FILE|-]
//!   graphlens mcp

use clap::{Args, Parser, Subcommand};
use graphlens::config::load_config;
use graphlens::{io, AnalysisConfig, ApiError, GraphLensApi};
use serde_json::Value;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(
    name = "graphlens",
    version,
    about = "Structural statistics and centrality for directed graphs"
)]
struct Cli {
    #[command(flatten)]
    limits: LimitArgs,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct LimitArgs {
    /// Path to a YAML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Largest accepted node count
    #[arg(long, global = true, env = "GRAPHLENS_MAX_NODES")]
    max_nodes: Option<usize>,
    /// Largest accepted edge count
    #[arg(long, global = true, env = "GRAPHLENS_MAX_EDGES")]
    max_edges: Option<usize>,
    /// Analysis deadline in seconds
    #[arg(long, global = true, env = "GRAPHLENS_TIMEOUT")]
    timeout: Option<u64>,
    /// Compute centrality on a separate thread
    #[arg(long, global = true)]
    parallel: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a {nodes, edges} JSON graph and print the report
    Analyze {
        /// Input file, or '-' for stdin
        #[arg(default_value = "-")]
        input: PathBuf,
        /// Print the report on one line
        #[arg(long)]
        compact: bool,
    },
    /// Check that a graph is well-formed and within limits
    Validate {
        /// Input file, or '-' for stdin
        #[arg(default_value = "-")]
        input: PathBuf,
    },
    /// Start the MCP (Model Context Protocol) server on stdio
    Mcp,
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("graphlens=info"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn resolve_config(args: &LimitArgs) -> Result<AnalysisConfig, String> {
    let mut config = load_config(args.config.as_deref()).map_err(|e| e.to_string())?;
    if let Some(n) = args.max_nodes {
        config.max_nodes = n;
    }
    if let Some(n) = args.max_edges {
        config.max_edges = n;
    }
    if let Some(t) = args.timeout {
        config.timeout_seconds = t;
    }
    if args.parallel {
        config.parallel = true;
    }
    Ok(config)
}

fn read_input(path: &Path) -> std::io::Result<String> {
    let mut text = String::new();
    if path == Path::new("-") {
        std::io::stdin().read_to_string(&mut text)?;
    } else {
        std::fs::File::open(path)?.read_to_string(&mut text)?;
    }
    Ok(text)
}

fn print_json(value: &Value, compact: bool) {
    let text = if compact {
        value.to_string()
    } else {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
    };
    println!("{}", text);
}

fn is_failure(value: &Value) -> bool {
    value.get("success") == Some(&Value::Bool(false))
}

fn cmd_analyze(api: &GraphLensApi, input: &Path, compact: bool) -> i32 {
    let text = match read_input(input) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error: cannot read '{}': {}", input.display(), e);
            return 1;
        }
    };
    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            error!("failed to create tokio runtime: {}", e);
            return 1;
        }
    };
    let value = rt.block_on(api.analyze_body(&text));
    print_json(&value, compact);
    if is_failure(&value) {
        1
    } else {
        0
    }
}

fn cmd_validate(api: &GraphLensApi, input: &Path) -> i32 {
    let text = match read_input(input) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error: cannot read '{}': {}", input.display(), e);
            return 1;
        }
    };
    let result = io::parse_graph(&text)
        .map_err(|e| ApiError::Analysis(e.into()))
        .and_then(|spec| api.validate(&spec));
    match result {
        Ok(summary) => {
            print_json(&serde_json::json!(summary), false);
            0
        }
        Err(e) => {
            print_json(&e.to_json(), false);
            1
        }
    }
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let config = match resolve_config(&cli.limits) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let code = match cli.command {
        Commands::Analyze { input, compact } => {
            cmd_analyze(&GraphLensApi::new(config), &input, compact)
        }
        Commands::Validate { input } => cmd_validate(&GraphLensApi::new(config), &input),
        Commands::Mcp => graphlens::mcp::run_mcp_server(config),
    };
    std::process::exit(code);
}
