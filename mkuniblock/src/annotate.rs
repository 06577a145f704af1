use crate::os2_ranges::Os2Range;
use mkuniblock_common::character_set::CodePointSet;
use tracing::debug;

/// Bit 57 ("Non-Plane 0") is set by makeotf itself whenever a font maps anything outside the
/// BMP (see `SUPP_UV_BITNUM` in map.c), so it must not also appear in the block table.
pub const NON_PLANE_0_BIT: u8 = 57;

/// Bits that should be set if a font maps *any* character in the block.
///
/// These are the private use areas and the CJK blocks. They are huge, and fonts covering them
/// usually only cover a fraction of the block, so the number of characters in the block is
/// useless as a coverage threshold. Giving them a count of 1 makes makeotf set the bit as soon
/// as a single character from the block is present.
pub const FLAG_ON_ANY_CHAR_BITS: &[u8] = &[28, 48, 52, 54, 55, 56, 59, 60, 61, 65, 90];

/// Conjunctions the range table capitalizes that the block names keep in lowercase.
const LOWERCASE_CONJUNCTIONS: &[&str] = &["And", "For"];

/// A block of the generated table.
///
/// The field order matches the sort order of the generated table.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct UniblockRecord {
    pub start: u32,
    pub end: u32,
    pub count: u64,
    pub bit: u8,
    pub name: String,
}

/// Lowercases `And` and `For` where they appear as separate words in a block name.
pub fn fix_title_casing(name: &str) -> String {
    let mut name = name.to_string();
    for conjunction in LOWERCASE_CONJUNCTIONS {
        let with_spaces = format!(" {conjunction} ");
        if name.contains(&with_spaces) {
            name = name.replace(&with_spaces, &with_spaces.to_lowercase());
        }
    }
    name
}

/// Computes the table entry for a range, or `None` if the range is not part of the table.
pub fn annotate_range(range: &Os2Range, chars: &CodePointSet) -> Option<UniblockRecord> {
    if range.bit == NON_PLANE_0_BIT {
        debug!("Excluding bit {} ({:?}).", range.bit, range.name);
        return None;
    }

    let count = if FLAG_ON_ANY_CHAR_BITS.contains(&range.bit) {
        1
    } else {
        chars.count_in_range(range.start, range.end)
    };

    Some(UniblockRecord {
        start: range.start,
        end: range.end,
        count,
        bit: range.bit,
        name: fix_title_casing(&range.name),
    })
}

pub fn annotate_ranges(ranges: &[Os2Range], chars: &CodePointSet) -> Vec<UniblockRecord> {
    ranges
        .iter()
        .filter_map(|range| annotate_range(range, chars))
        .collect()
}
