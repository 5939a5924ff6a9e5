// affix-spell: Check spelling of words.
//
// Reads words from the command line, or from stdin (one per line), and
// reports whether each word is correctly spelled:
//   C: word    (correct)
//   W: word    (wrong / misspelled)
//   S: word    (suggestion, with --suggest)
//
// Usage:
//   affix-spell [-d DICT_PATH] [-l LANG] [--snapshot FILE] [-s] [WORD...]

use std::io::{self, Write};

use affix_cli::DictArgs;
use affix_spell::SuggestOptions;
use clap::Parser;

#[derive(Parser)]
#[command(name = "affix-spell", version, about = "Check spelling of words")]
struct Cli {
    #[command(flatten)]
    dict: DictArgs,

    /// Also print suggestions for misspelled words
    #[arg(short, long)]
    suggest: bool,

    /// Words to check; read from stdin when omitted
    words: Vec<String>,
}

fn main() {
    let cli = Cli::parse();
    affix_cli::init_tracing();

    let checker = affix_cli::load_spellchecker(&cli.dict, SuggestOptions::default())
        .unwrap_or_else(|e| affix_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    affix_cli::for_each_word(&cli.words, |word| {
        let correct = checker.check(word).unwrap_or_else(|e| affix_cli::fatal(&e.to_string()));
        if correct {
            let _ = writeln!(out, "C: {word}");
            return;
        }
        let _ = writeln!(out, "W: {word}");
        if cli.suggest {
            let suggestions = checker
                .suggest(word)
                .unwrap_or_else(|e| affix_cli::fatal(&e.to_string()));
            for suggestion in suggestions {
                let _ = writeln!(out, "S: {suggestion}");
            }
        }
    });
}
