//! lexql CLI
//!
//! Tokenizes and parses SQL from the command line, or serves the HTTP adapter.

use std::io::{self, Read};
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use lexql_router::{Router, DEFAULT_MAX_BODY_BYTES};

/// Tokenizer and parser for a small subset of SQL SELECT.
#[derive(Parser)]
#[command(name = "lexql")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    /// Pretty-print JSON output.
    #[arg(short, long)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the token stream as JSON.
    Tokens {
        /// SQL text; read from stdin when omitted or `-`.
        sql: Option<String>,
    },

    /// Print the parsed statement as JSON.
    Parse {
        /// SQL text; read from stdin when omitted or `-`.
        sql: Option<String>,
    },

    /// Serve the HTTP adapter.
    Serve {
        /// Address to listen on.
        #[arg(short, long, env = "LEXQL_ADDR", default_value = "127.0.0.1:3000")]
        addr: SocketAddr,

        /// Largest accepted request body, in bytes.
        #[arg(long, env = "LEXQL_MAX_BODY_BYTES", default_value_t = DEFAULT_MAX_BODY_BYTES)]
        max_body_bytes: usize,
    },
}

/// Returns `sql`, or all of stdin when it is absent or `-`.
fn read_sql(sql: Option<String>) -> anyhow::Result<String> {
    match sql {
        Some(s) if s != "-" => Ok(s),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read SQL from stdin")?;
            Ok(buf)
        }
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{out}");
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays valid JSON.
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(io::stderr)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Tokens { sql } => {
            let sql = read_sql(sql)?;
            print_json(&lexql_core::tokenize(&sql), cli.pretty)?;
        }

        Commands::Parse { sql } => {
            let sql = read_sql(sql)?;
            let statement = lexql_core::parse_sql(&sql)?;
            print_json(&statement, cli.pretty)?;
        }

        Commands::Serve {
            addr,
            max_body_bytes,
        } => {
            info!(%addr, max_body_bytes, "starting lexql server");
            lexql_router::serve(addr, Arc::new(Router::sql_api()), max_body_bytes).await?;
        }
    }

    Ok(())
}
