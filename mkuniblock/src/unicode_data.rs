//! Loads the set of assigned code points from `UnicodeData.txt`.

use crate::error::ParseError;
use anyhow::Result;
use mkuniblock_common::character_set::CodePointSet;
use tracing::debug;

pub(crate) fn parse_hex(line: usize, value: &str) -> Result<u32, ParseError> {
    let value = value.trim();
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ParseError::InvalidHex { line, value: value.to_string() });
    }
    u32::from_str_radix(value, 16)
        .map_err(|_| ParseError::InvalidHex { line, value: value.to_string() })
}

/// Builds the set of all code points listed in the database.
///
/// Large blocks (CJK ideographs, Hangul syllables, private use areas, ...) are not listed
/// character by character. Instead they appear as a pair of rows named `<..., First>` and
/// `<..., Last>`, and every code point between the two is assigned.
pub fn load_unicode_data(text: &str) -> Result<CodePointSet> {
    let mut chars = CodePointSet::new();

    // (line, code point) of a `First` row still waiting for its `Last`
    let mut pending_first: Option<(usize, u32)> = None;
    let mut paired_ranges = 0;

    for (idx, row) in text.lines().enumerate() {
        let line = idx + 1;
        if row.trim().is_empty() {
            continue;
        }

        let mut fields = row.split(';');
        let (Some(code), Some(name)) = (fields.next(), fields.next()) else {
            return Err(ParseError::FieldCount { line, expected: "at least 2", found: 1 }.into());
        };
        let ch = parse_hex(line, code)?;

        if name.contains("First") {
            if let Some((pending_line, _)) = pending_first {
                return Err(ParseError::NestedFirst { line, pending_line }.into());
            }
            pending_first = Some((line, ch));
        } else if name.contains("Last") {
            let Some((first_line, start)) = pending_first.take() else {
                return Err(ParseError::UnmatchedLast { line }.into());
            };
            if ch < start {
                return Err(ParseError::InvalidRange {
                    line,
                    value: format!("{start:04X} (line {first_line})..{ch:04X}"),
                }
                .into());
            }
            chars.insert_range(start..=ch);
            paired_ranges += 1;
        } else {
            chars.insert(ch);
        }
    }

    if let Some((line, _)) = pending_first {
        return Err(ParseError::UnclosedFirst { line }.into());
    }

    debug!("Loaded {} assigned code points ({paired_ranges} paired ranges).", chars.len());
    Ok(chars)
}
