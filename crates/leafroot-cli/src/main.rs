//! Leafroot CLI - canonical leaves, keyword disclosure and Merkle proofs for document trees.

use clap::{Parser, Subcommand};

mod commands;
mod input;
mod logging;
mod output;

use commands::{canonicalize, commit, disclose, keywords, locate, prove, verify};

#[derive(Parser)]
#[command(name = "leafroot")]
#[command(about = "Canonical leaf commitments and keyword disclosure for parsed document trees")]
struct Cli {
    /// Log debug events (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the canonical leaves of a document tree
    Canonicalize {
        /// Input document JSON file (or stdin if not provided)
        input: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the keywords declared in the document metadata
    Keywords {
        /// Input document JSON file (or stdin if not provided)
        input: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Find elements whose text contains a keyword
    Locate {
        /// Input document JSON file (or stdin if not provided)
        input: Option<String>,
        /// Keyword to search for (repeatable; defaults to the document's keywords)
        #[arg(short, long = "keyword")]
        keywords: Vec<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Build the Merkle commitment over the canonical leaves
    Commit {
        /// Input document JSON file (or stdin if not provided)
        input: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Produce inclusion bundles for a leaf or for every leaf under a path
    Prove {
        /// Input document JSON file (or stdin if not provided)
        input: Option<String>,
        /// Exact leaf string to prove
        #[arg(long, conflicts_with = "path", required_unless_present = "path")]
        leaf: Option<String>,
        /// Canonical path whose leaves should be proven
        #[arg(long)]
        path: Option<String>,
    },
    /// Verify an inclusion bundle
    Verify {
        /// Bundle JSON file (or stdin if not provided)
        bundle: Option<String>,
        /// Verify against this root instead of the bundle's own
        #[arg(long)]
        root: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Commit a document and disclose the leaves matching its keywords
    Disclose {
        /// Input document JSON file (or stdin if not provided)
        input: Option<String>,
        /// Keyword to disclose (repeatable; defaults to the document's keywords)
        #[arg(short, long = "keyword")]
        keywords: Vec<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Canonicalize { input, json } => canonicalize::run(input, json),
        Commands::Keywords { input, json } => keywords::run(input, json),
        Commands::Locate {
            input,
            keywords,
            json,
        } => locate::run(input, keywords, json),
        Commands::Commit { input, json } => commit::run(input, json),
        Commands::Prove { input, leaf, path } => prove::run(input, leaf, path),
        Commands::Verify { bundle, root, json } => verify::run(bundle, root, json),
        Commands::Disclose {
            input,
            keywords,
            json,
        } => disclose::run(input, keywords, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
