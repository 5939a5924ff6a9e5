// Affix file (.aff) directives consumed by the dictionary tables
//
// Only the directives that feed the word-level tables are interpreted:
// FLAG, REP, COMPOUNDRULE, TRY, numeric thresholds, and single-flag
// declarations. Prefix/suffix rule blocks are skipped; stems in the word
// list are used as-is.

use affix_core::flags::{COMPOUNDMIN, KEEPCASE, NOSUGGEST, ONLYINCOMPOUND};
use affix_core::{FlagMode, FlagTable, RuleCode};
use tracing::trace;

use crate::DictError;
use crate::replacement::Replacement;

/// Directives whose single argument is a number rather than a flag.
const NUMERIC_DIRECTIVES: &[&str] = &[
    COMPOUNDMIN,
    "COMPOUNDWORDMAX",
    "MAXCPDSUGS",
    "MAXNGRAMSUGS",
    "MAXDIFF",
];

/// Directives with string or table payloads that carry no flag.
const IGNORED_DIRECTIVES: &[&str] = &[
    "SET",
    "LANG",
    "KEY",
    "WORDCHARS",
    "IGNORE",
    "NAME",
    "HOME",
    "VERSION",
    "AF",
    "AM",
    "MAP",
    "PHONE",
    "BREAK",
    "ICONV",
    "OCONV",
    "CHECKCOMPOUNDPATTERN",
    "COMPOUNDSYLLABLE",
    "SYLLABLENUM",
];

/// Flags the spellchecker interprets; a malformed value for one of these
/// is an error rather than a skipped line.
const CORE_FLAGS: &[&str] = &[KEEPCASE, ONLYINCOMPOUND, NOSUGGEST];

/// Word-level data extracted from an affix file.
#[derive(Debug, Clone, Default)]
pub struct AffixData {
    pub flag_mode: FlagMode,
    pub flags: FlagTable,
    pub replacements: Vec<Replacement>,
    /// Raw `COMPOUNDRULE` patterns over rule codes, in file order.
    pub compound_rules: Vec<String>,
    /// Characters to try when generating edits (`TRY`).
    pub try_chars: Option<String>,
}

/// Parse affix file text.
pub fn parse_aff(source: &str) -> Result<AffixData, DictError> {
    let lines: Vec<&str> = source.trim_start_matches('\u{FEFF}').lines().collect();
    let mut data = AffixData::default();
    let mut i = 0;

    while i < lines.len() {
        let line_no = i + 1;
        let parts = tokens(lines[i]);
        i += 1;

        let Some(&directive) = parts.first() else {
            continue;
        };
        if directive.starts_with('#') {
            continue;
        }

        match directive {
            "FLAG" => {
                let value = argument(&parts, line_no)?;
                data.flag_mode = FlagMode::from_directive(value)
                    .map_err(|source| DictError::Flag { line: line_no, source })?;
            }
            "PFX" | "SFX" => {
                // Header: PFX flag cross_product count
                let count = parts.get(3).and_then(|c| c.parse::<usize>().ok()).unwrap_or(0);
                trace!(directive, count, "skipping affix rule block");
                i += count.min(lines.len() - i);
            }
            "REP" => {
                let count = table_count(&parts, line_no)?;
                for (row_no, row) in table_rows(&lines, &mut i, "REP", count) {
                    match row.as_slice() {
                        [_, from, to, ..] => data
                            .replacements
                            .push(Replacement::new(underscore_to_space(from), underscore_to_space(to))),
                        _ => {
                            return Err(DictError::Malformed {
                                line: row_no,
                                message: "REP entry needs a pattern and a replacement".into(),
                            });
                        }
                    }
                }
            }
            "COMPOUNDRULE" => {
                let count = table_count(&parts, line_no)?;
                for (row_no, row) in table_rows(&lines, &mut i, "COMPOUNDRULE", count) {
                    match row.get(1) {
                        Some(pattern) => data.compound_rules.push((*pattern).to_string()),
                        None => {
                            return Err(DictError::Malformed {
                                line: row_no,
                                message: "COMPOUNDRULE entry needs a pattern".into(),
                            });
                        }
                    }
                }
            }
            "TRY" => {
                data.try_chars = Some(argument(&parts, line_no)?.to_string());
            }
            _ if NUMERIC_DIRECTIVES.contains(&directive) => {
                let value = argument(&parts, line_no)?;
                let number = value.parse::<u32>().map_err(|_| DictError::Malformed {
                    line: line_no,
                    message: format!("{directive} expects a number, got {value:?}"),
                })?;
                data.flags.insert(directive, RuleCode(number));
            }
            _ if IGNORED_DIRECTIVES.contains(&directive) => {}
            _ if parts.len() >= 2 => match data.flag_mode.parse_code(parts[1]) {
                Ok(code) => data.flags.insert(directive, code),
                Err(source) if CORE_FLAGS.contains(&directive) => {
                    return Err(DictError::Flag { line: line_no, source });
                }
                Err(err) => trace!(directive, %err, "skipping unparsable flag directive"),
            },
            _ => trace!(directive, line = line_no, "ignoring directive"),
        }
    }

    Ok(data)
}

/// Whitespace-separated tokens of a line, dropping a trailing `#` comment
/// that follows the directive and its first argument.
fn tokens(line: &str) -> Vec<&str> {
    let mut parts: Vec<&str> = line.split_whitespace().collect();
    if let Some(pos) = parts.iter().skip(2).position(|part| part.starts_with('#')) {
        parts.truncate(pos + 2);
    }
    parts
}

fn argument<'a>(parts: &[&'a str], line: usize) -> Result<&'a str, DictError> {
    parts.get(1).copied().ok_or_else(|| DictError::Malformed {
        line,
        message: format!("{} requires an argument", parts[0]),
    })
}

fn table_count(parts: &[&str], line: usize) -> Result<usize, DictError> {
    let value = argument(parts, line)?;
    value.parse::<usize>().map_err(|_| DictError::Malformed {
        line,
        message: format!("{} table size must be a number, got {value:?}", parts[0]),
    })
}

/// Consume up to `count` rows of a table directive. Blank and comment lines
/// are skipped; reading stops early at the first other line that does not
/// repeat the directive name.
fn table_rows<'a>(
    lines: &[&'a str],
    i: &mut usize,
    name: &str,
    count: usize,
) -> Vec<(usize, Vec<&'a str>)> {
    let mut rows = Vec::with_capacity(count);
    while rows.len() < count && *i < lines.len() {
        let parts = tokens(lines[*i]);
        if parts.is_empty() || parts[0].starts_with('#') {
            *i += 1;
            continue;
        }
        if parts[0] != name {
            trace!(name, expected = count, found = rows.len(), "table ended early");
            break;
        }
        rows.push((*i + 1, parts));
        *i += 1;
    }
    rows
}

/// Underscores stand for spaces in replacement patterns.
fn underscore_to_space(s: &str) -> String {
    s.replace('_', " ")
}
