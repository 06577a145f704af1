use crate::annotate::UniblockRecord;
use std::fmt::{Display, Formatter};

const HEADER: &str = "\
/*
   Copyright 2014 Adobe
   All Rights Reserved.
   This software is licensed as OpenSource, under the Apache License, Version 2.0.
   This license is available at: http://opensource.org/licenses/Apache-2.0.
*/

/*
   DO NOT EDIT: this file was generated by mkuniblock.

   Unicode block information (struct type: UnicodeBlock). Ordered by first
   Unicode value in range. Ranges do not overlap. Bit 57 \"Non-Plane 0\" is
   handled separately in map.c (search on SUPP_UV_BITNUM).
*/
";

/// The Unicode block table, in the order it is written out.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UniblockTable {
    records: Vec<UniblockRecord>,
}
impl UniblockTable {
    pub fn new(mut records: Vec<UniblockRecord>) -> Self {
        records.sort();
        UniblockTable { records }
    }

    pub fn records(&self) -> &[UniblockRecord] {
        &self.records
    }

    /// Returns the table as the body of a `UnicodeBlock` array, for use in `uniblock.h`.
    pub fn render(&self) -> impl Display + '_ {
        UniblockTableDisplay(self)
    }
}

struct UniblockTableDisplay<'a>(&'a UniblockTable);
impl Display for UniblockTableDisplay<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{HEADER}")?;
        for record in &self.0.records {
            writeln!(f, "{}", RecordDisplay(record))?;
        }
        Ok(())
    }
}

struct RecordDisplay<'a>(&'a UniblockRecord);
impl Display for RecordDisplay<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let record = self.0;
        let start = format!("0x{:04X}", record.start);
        let end = format!("0x{:04X}", record.end);
        let name = format!("\"{}\"", record.name);
        write!(
            f,
            "    {{ {start:>8}, {end:>8}, {:5}, 0, {:3}, 0, {name:<41} }},",
            record.count, record.bit,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(start: u32, end: u32, count: u64, bit: u8, name: &str) -> UniblockRecord {
        UniblockRecord { start, end, count, bit, name: name.to_string() }
    }

    #[test]
    fn row_layout() {
        let row = RecordDisplay(&record(0x0000, 0x007F, 95, 0, "Basic Latin")).to_string();
        assert_eq!(
            row,
            "    {   0x0000,   0x007F,    95, 0,   0, 0, \"Basic Latin\"                             },"
        );

        let row = RecordDisplay(&record(0x10000, 0x1007F, 88, 101, "Linear B Syllabary")).to_string();
        assert_eq!(
            row,
            "    {  0x10000,  0x1007F,    88, 0, 101, 0, \"Linear B Syllabary\"                      },"
        );
    }

    #[test]
    fn long_names_are_not_truncated() {
        let name = "Unified Canadian Aboriginal Syllabics Extended";
        let row = RecordDisplay(&record(0x18B0, 0x18FF, 70, 72, name)).to_string();
        assert!(row.ends_with(&format!("\"{name}\" }},")), "{row}");
    }

    #[test]
    fn records_are_sorted_by_start() {
        let table = UniblockTable::new(vec![
            record(0x0100, 0x017F, 128, 29, "Latin Extended-A"),
            record(0x0000, 0x007F, 95, 0, "Basic Latin"),
            record(0x0080, 0x00FF, 96, 1, "Latin-1 Supplement"),
        ]);
        let starts: Vec<_> = table.records().iter().map(|x| x.start).collect();
        assert_eq!(starts, vec![0x0000, 0x0080, 0x0100]);
    }

    #[test]
    fn ties_are_broken_by_the_remaining_fields() {
        let table = UniblockTable::new(vec![
            record(0x0000, 0x007F, 95, 1, "B"),
            record(0x0000, 0x007F, 95, 0, "Z"),
            record(0x0000, 0x007F, 3, 9, "A"),
            record(0x0000, 0x0010, 95, 9, "A"),
        ]);
        let order: Vec<_> = table.records().iter().map(|x| (x.end, x.count, x.bit)).collect();
        assert_eq!(order, vec![(0x10, 95, 9), (0x7F, 3, 9), (0x7F, 95, 0), (0x7F, 95, 1)]);
    }

    #[test]
    fn header_precedes_rows() {
        let table = UniblockTable::new(vec![record(0x0000, 0x007F, 95, 0, "Basic Latin")]);
        let text = table.render().to_string();
        assert!(text.starts_with("/*\n   Copyright 2014 Adobe\n"));
        assert!(text.contains("DO NOT EDIT"));
        let rows: Vec<_> = text.lines().filter(|x| x.starts_with("    {")).collect();
        assert_eq!(rows.len(), 1);
        assert!(text.ends_with("},\n"));
    }
}
