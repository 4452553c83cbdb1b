//! sigdoc — list the function signatures of a project in a README.
//!
//! Walks a project directory, pulls function signatures out of every file
//! with per-language regular expressions, and renders them as markdown (or
//! JSON):
//!
//! ```text
//! sigdoc ./my-service go
//! sigdoc ./webapp javascript -o docs/ --sources-only
//! ```

mod discover;
mod extract;
mod model;
mod output;
mod prompt;
mod render;
mod scan;
mod toc;

use anyhow::Result;
use clap::Parser;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const LONG_ABOUT: &str = "\
Generate a README listing every file in a project and the function
signatures found in it.

Supported languages: go, java, python, javascript. Any other language name
is accepted; files are then listed without functions.

Signatures are found with regular expressions, not a parser. Declarations
inside comments or strings are reported too, nesting is ignored, and
unusual forms (Go methods with receivers, multi-line Python signatures,
JavaScript class methods) are missed.";

#[derive(Parser)]
#[command(
    name = "sigdoc",
    about = "Generate a README of function signatures for a project",
    long_about = LONG_ABOUT
)]
struct Cli {
    /// Project directory to scan. Prompted for if omitted.
    project_dir: Option<PathBuf>,

    /// Language: go, java, python or javascript. Prompted for if omitted.
    language: Option<String>,

    /// Output file or directory; `-` writes to stdout [default: README.md]
    #[arg(short = 'o', long)]
    output: Option<String>,

    /// Output format: markdown (default) or json
    #[arg(short = 'f', long, default_value = "markdown")]
    format: String,

    /// Document title [default: project directory name]
    #[arg(short = 't', long)]
    title: Option<String>,

    /// Skip paths matching this glob (relative to the project). Repeatable.
    #[arg(short = 'e', long = "exclude")]
    exclude: Vec<String>,

    /// Only scan files with the language's source extensions
    #[arg(long)]
    sources_only: bool,

    /// Leave files without functions out of the document
    #[arg(long)]
    skip_empty: bool,

    /// Worker threads for extraction (0 = one per CPU)
    #[arg(short = 'j', long, default_value_t = 0)]
    jobs: usize,

    /// Files larger than this many bytes are listed without functions
    #[arg(long, default_value_t = extract::MAX_SOURCE_BYTES)]
    max_file_size: usize,

    /// Never prompt; fail if an argument is missing
    #[arg(long)]
    no_input: bool,

    /// Debug logging on stderr
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let prompter = prompt::Prompter::new(cli.no_input);
    let project_dir = match cli.project_dir.clone() {
        Some(dir) => dir,
        None => prompter.project_dir()?,
    };
    let language = match cli.language.clone() {
        Some(language) => language,
        None => prompter.language()?,
    };

    let resolved = extract::resolve(&language);
    if resolved.is_none() {
        warn!(
            language = %language,
            "unsupported language, files will be listed without functions"
        );
    }

    let renderer = render::create_renderer(&cli.format)?;
    let filter = discover::PathFilter::new(resolved, &cli.exclude, cli.sources_only)?;

    let files = discover::walk(&project_dir, &filter)?;
    info!(files = files.len(), root = %project_dir.display(), "scanning");

    let mut records = scan::scan(&files, &language, cli.max_file_size, cli.jobs)?;
    if cli.skip_empty {
        records.retain(|r| !r.functions.is_empty());
    }

    let doc = model::Document {
        title: cli
            .title
            .clone()
            .unwrap_or_else(|| project_title(&project_dir)),
        language,
        files: records,
    };

    let target = output::resolve(cli.output.as_deref(), renderer.file_extension());
    output::write(&target, &renderer.render(&doc))?;
    if let output::OutputTarget::File(path) = &target {
        println!("Documentation written to {}", path.display());
    }

    Ok(())
}

/// Log to stderr; `--verbose` wins over `RUST_LOG`, which wins over `warn`.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

/// The project directory's own name, e.g. `my-service` for `./my-service/`.
fn project_title(dir: &Path) -> String {
    fs::canonicalize(dir)
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| "Project Name".to_string())
}
