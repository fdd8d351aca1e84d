//! Fixed-width table of student records.

use crate::core::record::StudentRecord;

pub const TABLE_RULE: &str = "----------------------------------------------------------";

pub fn header() -> String {
    format!("| {:<5} | {:<25} | {:<10} | {:<5} |", "ID", "Name", "Score", "Grade")
}

/// One table row: id, name, two-decimal score, letter grade.
pub fn row(record: &StudentRecord) -> String {
    format!(
        "| {:<5} | {:<25} | {:<10.2} | {:<5} |",
        record.id,
        record.name,
        record.score.value(),
        record.score.grade()
    )
}

/// Full table in insertion order, framed by rules. Empty input yields no lines.
pub fn table(records: &[StudentRecord]) -> Vec<String> {
    if records.is_empty() {
        return Vec::new();
    }
    let mut lines = Vec::with_capacity(records.len() + 4);
    lines.push(TABLE_RULE.to_string());
    lines.push(header());
    lines.push(TABLE_RULE.to_string());
    lines.extend(records.iter().map(row));
    lines.push(TABLE_RULE.to_string());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::Score;

    fn record(id: i32, name: &str, score: f64) -> StudentRecord {
        StudentRecord {
            id,
            name: name.to_string(),
            score: Score::new(score).expect("valid score"),
        }
    }

    #[test]
    fn row_is_fixed_width() {
        assert_eq!(
            row(&record(42, "Ada", 91.5)),
            "| 42    | Ada                       | 91.50      | A     |"
        );
    }

    #[test]
    fn header_matches_row_width() {
        let sample = row(&record(1, "x", 1.0));
        assert_eq!(header().len(), sample.len());
        assert_eq!(TABLE_RULE.len(), sample.len());
    }

    #[test]
    fn table_lists_in_insertion_order() {
        let lines = table(&[record(2, "Bo", 55.0), record(1, "Al", 70.0)]);
        assert_eq!(lines.len(), 6);
        assert!(lines[3].starts_with("| 2 "));
        assert!(lines[3].ends_with("| F     |"));
        assert!(lines[4].starts_with("| 1 "));
        assert!(lines[4].ends_with("| C     |"));
    }

    #[test]
    fn empty_table_has_no_lines() {
        assert!(table(&[]).is_empty());
    }
}
