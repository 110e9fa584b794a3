//! JSON output formatter

use anyhow::Result;
use onsei_core::PhoneticCounts;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Sorted count tables as written to the output
///
/// Each table is a list of `[key, count]` pairs, highest count first, with
/// ties in key enumeration order.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct StatsReport {
    /// Vowel and mora-marker counts
    pub vowel: Vec<(String, u64)>,
    /// Consonant cluster counts
    pub consonant: Vec<(String, u64)>,
    /// Vowel-pair counts
    pub vowel_combination: Vec<(String, u64)>,
    /// Consonant combination counts, when requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consonant_combination: Option<Vec<(String, u64)>>,
}

impl StatsReport {
    /// Build a report from merged tables
    pub fn from_counts(counts: &PhoneticCounts, include_combinations: bool) -> Self {
        Self {
            vowel: counts.vowels.sorted_by_count(),
            consonant: counts.consonants.sorted_by_count(),
            vowel_combination: counts.vowel_pairs.sorted_by_count(),
            consonant_combination: include_combinations
                .then(|| counts.consonant_combinations.sorted_by_count()),
        }
    }
}

/// JSON formatter - writes one report object
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self { writer, pretty }
    }

    /// Write `report` followed by a newline
    pub fn write_report(&mut self, report: &StatsReport) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, report)?;
        } else {
            serde_json::to_writer(&mut self.writer, report)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use onsei_core::stats::{LinearScanner, PhoneticScanner};

    fn kata() -> PhoneticCounts {
        let mut counts = PhoneticCounts::new();
        LinearScanner.scan("kata", &mut counts);
        counts
    }

    fn render(report: &StatsReport, pretty: bool) -> String {
        let mut buffer = Vec::new();
        JsonFormatter::new(&mut buffer, pretty)
            .write_report(report)
            .unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_report_is_sorted() {
        let report = StatsReport::from_counts(&kata(), false);
        assert_eq!(report.vowel[0], ("a".to_string(), 2));
        assert_eq!(report.vowel[1], ("e".to_string(), 0));
        assert_eq!(report.consonant[0], ("k".to_string(), 1));
        assert_eq!(report.consonant[1], ("t".to_string(), 1));
        assert_eq!(report.vowel_combination[0], ("aa".to_string(), 1));
        assert!(report.consonant_combination.is_none());
    }

    #[test]
    fn test_compact_json_shape() {
        let json = render(&StatsReport::from_counts(&kata(), false), false);
        assert!(json.starts_with(r#"{"vowel":[["a",2],["e",0]"#));
        assert!(json.contains(r#""consonant":[["k",1],["t",1]"#));
        assert!(json.contains(r#""vowel_combination":[["aa",1]"#));
        assert!(!json.contains("consonant_combination"));
        assert!(json.ends_with("}\n"));
    }

    #[test]
    fn test_combinations_are_optional() {
        let report = StatsReport::from_counts(&kata(), true);
        let combinations = report.consonant_combination.as_ref().unwrap();
        assert_eq!(combinations.len(), 2025);
        assert_eq!(combinations[0], ("ata".to_string(), 1));

        let json = render(&report, true);
        let parsed: StatsReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }
}
