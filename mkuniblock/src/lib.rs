//! Generates the OS/2 Unicode block table used by makeotf (`uniblock.h`).
//!
//! The table is built from two reference files: the OS/2 `ulUnicodeRange` bit assignments from
//! the OpenType specification, and the Unicode character database. Each OS/2 range becomes one
//! row holding its bounds, its bit and the number of characters assigned in it.

mod annotate;
mod error;
mod os2_ranges;
mod render;
mod unicode_data;

pub use annotate::{
    annotate_range, annotate_ranges, fix_title_casing, UniblockRecord, FLAG_ON_ANY_CHAR_BITS,
    NON_PLANE_0_BIT,
};
pub use error::ParseError;
pub use mkuniblock_common::{character_set::CodePointSet, paths::InputPaths};
pub use os2_ranges::{parse_os2_ranges, Os2Range, RESERVED_BITS};
pub use render::UniblockTable;
pub use unicode_data::load_unicode_data;

use anyhow::{Context, Result};
use mkuniblock_common::paths::{path_to_string, read_input};
use tracing::info;

fn build_table(chars: &CodePointSet, ranges: &[Os2Range]) -> UniblockTable {
    let records = annotate_ranges(ranges, chars);
    info!(
        "Generated {} blocks from {} OS/2 ranges and {} assigned code points.",
        records.len(),
        ranges.len(),
        chars.len(),
    );
    UniblockTable::new(records)
}

/// Builds the table from the text of the two reference files.
pub fn generate_from_text(unicode_data: &str, os2_ranges: &str) -> Result<UniblockTable> {
    let chars = load_unicode_data(unicode_data)?;
    let ranges = parse_os2_ranges(os2_ranges)?;
    Ok(build_table(&chars, &ranges))
}

/// Reads both reference files and builds the table.
///
/// Both files are read and parsed completely before anything is returned, so a failure never
/// produces a partial table.
pub fn generate(paths: &InputPaths) -> Result<UniblockTable> {
    let unicode_data = read_input(&paths.unicode_data)?;
    let os2_ranges = read_input(&paths.os2_ranges)?;

    let chars = load_unicode_data(&unicode_data)
        .with_context(|| format!("failed to parse '{}'", path_to_string(&paths.unicode_data)))?;
    let ranges = parse_os2_ranges(&os2_ranges)
        .with_context(|| format!("failed to parse '{}'", path_to_string(&paths.os2_ranges)))?;
    Ok(build_table(&chars, &ranges))
}
