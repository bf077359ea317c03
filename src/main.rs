use clap::Parser;
use layouter::{LayoutDocument, LayoutOptions, PipelineError, layout_document};
use std::path::PathBuf;

/// Lays out a composite-table document and prints the resulting boxes as JSON.
#[derive(Parser, Debug)]
#[command(name = "layouter", version, about)]
struct Cli {
    /// Path to the JSON document
    document: PathBuf,

    /// Profile to lay out with (defaults to the document's first profile)
    #[arg(long)]
    profile: Option<String>,

    /// Stack the columns regardless of the profile
    #[arg(long)]
    breaking: bool,

    /// Only print the nodes carrying this label
    #[arg(long)]
    select: Option<String>,

    /// Pretty-print the output
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<(), PipelineError> {
    env_logger::init();
    let cli = Cli::parse();

    log::info!("Loading document from {}", cli.document.display());
    let document = LayoutDocument::from_path(&cli.document)?;
    let options = LayoutOptions {
        profile: cli.profile,
        breaking: cli.breaking,
        select: cli.select,
    };

    let laid_out = layout_document(&document, &options)?;
    let json = if cli.pretty {
        serde_json::to_string_pretty(&laid_out)?
    } else {
        serde_json::to_string(&laid_out)?
    };
    println!("{json}");
    Ok(())
}
