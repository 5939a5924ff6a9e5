// affix-suggest: Generate spelling suggestions.
//
// Prints suggestions for each misspelled word given on the command line, or
// read from stdin (one per line). Correctly spelled words are reported as such.
//
// Usage:
//   affix-suggest [-d DICT_PATH] [-l LANG] [-n N] [--max-edit-distance N] [WORD...]

use std::io::{self, Write};

use affix_cli::DictArgs;
use affix_spell::SuggestOptions;
use clap::Parser;

#[derive(Parser)]
#[command(name = "affix-suggest", version, about = "Generate spelling suggestions")]
struct Cli {
    #[command(flatten)]
    dict: DictArgs,

    /// Maximum number of suggestions
    #[arg(short = 'n', long, default_value_t = 5)]
    max_suggestions: usize,

    /// Edit distance searched for candidates
    #[arg(long, default_value_t = 2)]
    max_edit_distance: usize,

    /// Words to correct; read from stdin when omitted
    words: Vec<String>,
}

fn main() {
    let cli = Cli::parse();
    affix_cli::init_tracing();

    let options = SuggestOptions {
        max_suggestions: cli.max_suggestions,
        max_edit_distance: cli.max_edit_distance,
        ..SuggestOptions::default()
    };
    let checker =
        affix_cli::load_spellchecker(&cli.dict, options).unwrap_or_else(|e| affix_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    affix_cli::for_each_word(&cli.words, |word| {
        let correct = checker.check(word).unwrap_or_else(|e| affix_cli::fatal(&e.to_string()));
        if correct {
            let _ = writeln!(out, "{word} (correct)");
            return;
        }
        let suggestions = checker
            .suggest(word)
            .unwrap_or_else(|e| affix_cli::fatal(&e.to_string()));
        if suggestions.is_empty() {
            let _ = writeln!(out, "{word}: (no suggestions)");
        } else {
            let _ = writeln!(out, "{word}:");
            for s in &suggestions {
                let _ = writeln!(out, "  {s}");
            }
        }
    });
}
