// affix-cli: shared utilities for the command-line tools.

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use std::process;

use affix_dict::DictionarySnapshot;
use affix_spell::{Spellchecker, SuggestOptions};
use clap::Args;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Environment variable naming an extra dictionary directory.
pub const DICT_PATH_ENV: &str = "AFFIX_DICT_PATH";

/// Where to load the dictionary from.
#[derive(Debug, Clone, Args)]
pub struct DictArgs {
    /// Directory containing <LANG>.aff and <LANG>.dic
    #[arg(short = 'd', long, value_name = "PATH")]
    pub dict_path: Option<PathBuf>,

    /// Dictionary name, e.g. en_US
    #[arg(short, long, default_value = "en_US")]
    pub lang: String,

    /// Load a JSON snapshot written by affix-snapshot instead of .aff/.dic files
    #[arg(long, value_name = "FILE", conflicts_with = "dict_path")]
    pub snapshot: Option<PathBuf>,
}

/// Install a stderr subscriber filtered by `RUST_LOG` (default `warn`).
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();
}

/// Build a spellchecker from the dictionary described by `args`.
///
/// A `--snapshot` file is loaded directly. Otherwise the search order for
/// `<lang>.aff`/`<lang>.dic` is:
/// 1. `--dict-path` (if provided)
/// 2. `AFFIX_DICT_PATH` environment variable
/// 3. `~/.hunspell`
/// 4. System hunspell/myspell directories
/// 5. Current working directory
pub fn load_spellchecker(args: &DictArgs, options: SuggestOptions) -> Result<Spellchecker, String> {
    let mut checker = Spellchecker::with_options(options);

    if let Some(path) = &args.snapshot {
        let snapshot = read_snapshot(path)?;
        checker
            .use_snapshot(snapshot)
            .map_err(|e| format!("failed to load snapshot {}: {e}", path.display()))?;
        return Ok(checker);
    }

    let (aff_path, dic_path) = find_dictionary(args.dict_path.as_deref(), &args.lang)?;
    debug!(aff = %aff_path.display(), dic = %dic_path.display(), "loading dictionary");
    let aff = read_text(&aff_path)?;
    let dic = read_text(&dic_path)?;
    checker
        .parse(&aff, &dic)
        .map_err(|e| format!("failed to parse {}: {e}", args.lang))?;
    Ok(checker)
}

/// Locate `<lang>.aff` and `<lang>.dic` in the first search directory that
/// holds both.
pub fn find_dictionary(dict_path: Option<&Path>, lang: &str) -> Result<(PathBuf, PathBuf), String> {
    let search_paths = build_search_paths(dict_path);

    for dir in &search_paths {
        let aff = dir.join(format!("{lang}.aff"));
        let dic = dir.join(format!("{lang}.dic"));
        if aff.is_file() && dic.is_file() {
            return Ok((aff, dic));
        }
    }

    Err(format!(
        "could not find {lang}.aff and {lang}.dic in any of the search paths:\n{}",
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Build the list of directories to search for dictionary files.
fn build_search_paths(dict_path: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(p) = dict_path {
        paths.push(p.to_path_buf());
    }

    if let Ok(env_path) = std::env::var(DICT_PATH_ENV) {
        paths.push(PathBuf::from(env_path));
    }

    if let Some(home) = home_dir() {
        paths.push(home.join(".hunspell"));
        #[cfg(target_os = "macos")]
        paths.push(home.join("Library").join("Spelling"));
    }

    paths.push(PathBuf::from("/usr/share/hunspell"));
    paths.push(PathBuf::from("/usr/share/myspell"));
    paths.push(PathBuf::from("/usr/share/myspell/dicts"));

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd);
    }

    paths
}

fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

fn read_text(path: &Path) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| format!("failed to read {}: {e}", path.display()))
}

/// Read a JSON dictionary snapshot.
pub fn read_snapshot(path: &Path) -> Result<DictionarySnapshot, String> {
    let text = read_text(path)?;
    serde_json::from_str(&text).map_err(|e| format!("invalid snapshot {}: {e}", path.display()))
}

/// Serialize a dictionary snapshot as JSON.
pub fn snapshot_json(snapshot: &DictionarySnapshot, pretty: bool) -> Result<String, String> {
    let json = if pretty {
        serde_json::to_string_pretty(snapshot)
    } else {
        serde_json::to_string(snapshot)
    };
    json.map_err(|e| format!("failed to serialize snapshot: {e}"))
}

/// Call `f` for each word: the given arguments if any, otherwise each
/// non-empty line of stdin.
pub fn for_each_word(words: &[String], mut f: impl FnMut(&str)) {
    if !words.is_empty() {
        for word in words {
            f(word);
        }
        return;
    }

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let word = line.trim();
        if !word.is_empty() {
            f(word);
        }
    }
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}
