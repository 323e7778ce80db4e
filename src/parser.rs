use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;

use tracing::trace;

use crate::error::Error;
use crate::model::Entry;

/// Parse dotenv entries from UTF-8 text.
///
/// Parsing is lenient: comments, blank lines and malformed lines are dropped
/// rather than reported. Duplicate keys keep the last assignment.
pub fn parse_str(input: &str) -> Vec<Entry> {
    parse_str_with_source(input, None).entries
}

/// Parse dotenv entries from a buffered reader.
pub fn parse_reader<R: BufRead>(mut reader: R) -> Result<Vec<Entry>, Error> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    let text = std::str::from_utf8(&buf)?;
    Ok(parse_str(text))
}

pub(crate) struct Parsed {
    pub(crate) entries: Vec<Entry>,
    pub(crate) skipped: usize,
}

pub(crate) fn parse_str_with_source(input: &str, source: Option<&Path>) -> Parsed {
    let mut entries = Vec::new();
    let mut by_key = HashMap::<String, usize>::new();
    let mut skipped = 0usize;

    for (idx, line) in input.split('\n').enumerate() {
        let line_num = u32::try_from(idx + 1).unwrap_or(u32::MAX);
        let entry = match parse_line(line, line_num, source) {
            Line::Blank => continue,
            Line::Malformed => {
                trace!(line = line_num, "dropping malformed dotenv line");
                skipped += 1;
                continue;
            }
            Line::Entry(entry) => entry,
        };

        if let Some(existing_idx) = by_key.get(&entry.key).copied() {
            entries[existing_idx] = entry;
        } else {
            by_key.insert(entry.key.clone(), entries.len());
            entries.push(entry);
        }
    }

    Parsed { entries, skipped }
}

enum Line {
    Blank,
    Malformed,
    Entry(Entry),
}

fn parse_line(line: &str, line_num: u32, source: Option<&Path>) -> Line {
    let working = trim(line);
    if working.is_empty() || working.starts_with('#') {
        return Line::Blank;
    }

    let Some((key, value)) = working.split_once('=') else {
        return Line::Malformed;
    };

    let key = trim(key);
    let value = strip_quotes(trim(value));
    // The process environment cannot hold these, and the table must stay in
    // step with it.
    if key.is_empty() || key.contains('\0') || value.contains('\0') {
        return Line::Malformed;
    }

    Line::Entry(Entry {
        key: key.to_owned(),
        value: value.to_owned(),
        source: source.map(Path::to_path_buf),
        line: line_num,
    })
}

fn trim(input: &str) -> &str {
    input.trim_matches(is_space)
}

fn is_space(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

/// Strip one matching pair of outer quotes. The inside is kept verbatim.
fn strip_quotes(value: &str) -> &str {
    let bytes = value.as_bytes();
    match (bytes.first(), bytes.last()) {
        (Some(&first), Some(&last))
            if bytes.len() >= 2 && (first == b'"' || first == b'\'') && first == last =>
        {
            &value[1..value.len() - 1]
        }
        _ => value,
    }
}
