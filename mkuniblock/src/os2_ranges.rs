//! Parses the OS/2 `ulUnicodeRange` bit assignment table.
//!
//! The table is the one published in the OpenType specification (the "ur" section of the OS/2
//! table documentation), saved as tab separated text. Every row has four fields: the bit number,
//! the block name, a `start-end` hexadecimal range and a trailing field we don't use. Bits that
//! cover more than one block continue onto further rows that leave out the bit number.

use crate::{error::ParseError, unicode_data::parse_hex};
use anyhow::Result;
use tracing::debug;

/// The textual bit number of the reserved block at the end of the table.
pub const RESERVED_BITS: &str = "123-127";

/// A single row of the OS/2 Unicode range table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Os2Range {
    pub bit: u8,
    pub name: String,
    pub start: u32,
    pub end: u32,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum BitField {
    Bit(u8),
    Reserved,
}
impl BitField {
    fn parse(line: usize, value: &str) -> Result<BitField, ParseError> {
        let value = value.trim();
        if value == RESERVED_BITS {
            return Ok(BitField::Reserved);
        }
        match value.parse::<u8>() {
            Ok(bit) if bit < 128 => Ok(BitField::Bit(bit)),
            _ => Err(ParseError::InvalidBit { line, value: value.to_string() }),
        }
    }
}

fn parse_code_point_range(line: usize, value: &str) -> Result<(u32, u32), ParseError> {
    let invalid = || ParseError::InvalidRange { line, value: value.to_string() };
    let mut split = value.split('-');
    let (Some(start), Some(end), None) = (split.next(), split.next(), split.next()) else {
        return Err(invalid());
    };
    let start = parse_hex(line, start)?;
    let end = parse_hex(line, end)?;
    if start > end {
        return Err(invalid());
    }
    Ok((start, end))
}

/// Parses the range table, in file order. The reserved trailing block is left out.
pub fn parse_os2_ranges(text: &str) -> Result<Vec<Os2Range>> {
    let mut ranges = Vec::new();
    let mut prev_bit = None;
    let mut skipped = 0;

    for (idx, row) in text.lines().enumerate() {
        let line = idx + 1;
        if row.trim().is_empty() {
            continue;
        }

        let mut fields: Vec<&str> = row.split('\t').collect();
        let lead = fields[0].trim();
        let bit = if lead.is_empty() || !lead.starts_with(|c: char| c.is_ascii_digit()) {
            // continuation row: either the bit column is blank or it is missing entirely
            let Some(bit) = prev_bit else {
                return Err(ParseError::OrphanContinuation { line }.into());
            };
            if lead.is_empty() {
                fields.remove(0);
            }
            bit
        } else {
            fields.remove(0);
            BitField::parse(line, lead)?
        };
        prev_bit = Some(bit);

        let BitField::Bit(bit) = bit else {
            skipped += 1;
            continue;
        };
        let &[name, range, _] = &fields[..] else {
            return Err(ParseError::FieldCount { line, expected: "4", found: fields.len() + 1 }.into());
        };
        let (start, end) = parse_code_point_range(line, range.trim())?;
        ranges.push(Os2Range { bit, name: name.to_string(), start, end });
    }

    debug!("Parsed {} OS/2 ranges ({skipped} reserved rows skipped).", ranges.len());
    Ok(ranges)
}
