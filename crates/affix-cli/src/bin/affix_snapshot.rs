// affix-snapshot: Parse a dictionary and write its tables as JSON.
//
// The output can be loaded later with `--snapshot FILE`, skipping .aff/.dic
// parsing and compound rule compilation.
//
// Usage:
//   affix-snapshot [-d DICT_PATH] [-l LANG] [-o FILE] [--pretty]

use std::path::PathBuf;

use affix_cli::DictArgs;
use affix_spell::SuggestOptions;
use clap::Parser;
use tracing::info;

#[derive(Parser)]
#[command(name = "affix-snapshot", version, about = "Write a dictionary snapshot as JSON")]
struct Cli {
    #[command(flatten)]
    dict: DictArgs,

    /// Output file; stdout when omitted
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Pretty-print the JSON
    #[arg(long)]
    pretty: bool,
}

fn main() {
    let cli = Cli::parse();
    affix_cli::init_tracing();

    let checker = affix_cli::load_spellchecker(&cli.dict, SuggestOptions::default())
        .unwrap_or_else(|e| affix_cli::fatal(&e));
    let snapshot = checker
        .dictionary()
        .unwrap_or_else(|e| affix_cli::fatal(&e.to_string()))
        .snapshot();
    let json = affix_cli::snapshot_json(&snapshot, cli.pretty).unwrap_or_else(|e| affix_cli::fatal(&e));

    match &cli.output {
        Some(path) => {
            std::fs::write(path, json)
                .unwrap_or_else(|e| affix_cli::fatal(&format!("failed to write {}: {e}", path.display())));
            info!(path = %path.display(), words = snapshot.words.len(), "snapshot written");
        }
        None => println!("{json}"),
    }
}
