//! Emoji analyzer CLI
//!
//! Reads web-element groups from a JSON file (as captured by a DOM
//! inspector), analyzes each group, and prints the chosen emoji with its
//! confidence and reasoning. Can also query the rule table directly for
//! context suggestions.

use anyhow::Context as _;
use clap::Parser;
use emoji_analyzer::{batch_analyze_elements, get_emoji_suggestions, parse_element_groups};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "emoji-analyzer")]
#[command(version)]
#[command(about = "Classify web elements and pick best-fit emoji", long_about = None)]
struct Cli {
    /// JSON file containing an array of elements or element groups
    #[arg(value_name = "FILE", required_unless_present = "suggest")]
    input: Option<PathBuf>,

    /// Print emoji suggestions for a context instead of analyzing a file
    #[arg(long, short = 's', value_name = "CONTEXT")]
    suggest: Option<String>,

    /// Maximum number of suggestions to print
    #[arg(long, short = 'n', default_value = "5")]
    count: usize,

    /// Emit full analysis JSON instead of summary lines
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if let Some(context) = cli.suggest {
        let suggestions = get_emoji_suggestions(&context, cli.count);
        if suggestions.is_empty() {
            eprintln!("No suggestions for context '{}'", context);
        } else {
            println!("{}", suggestions.join(" "));
        }
        return Ok(());
    }

    let path = cli.input.expect("clap enforces input unless --suggest");
    let payload = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let groups = parse_element_groups(&payload)
        .with_context(|| format!("failed to parse element groups from {}", path.display()))?;

    let analyses = batch_analyze_elements(&groups);

    for (i, analysis) in analyses.iter().enumerate() {
        if cli.json {
            println!("{}", analysis.to_json()?);
        } else {
            println!(
                "group {}: {} (confidence {:.2}) {}",
                i + 1,
                analysis.emoji,
                analysis.confidence,
                analysis.reasoning
            );
        }
    }

    Ok(())
}
