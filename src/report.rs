use std::collections::BTreeMap;

use crate::{events::LoanEvent, ledger::LoanRecord, patron::Patron};

/// Console reporting over lending activity
#[derive(Debug)]
pub struct LendingReport;

impl LendingReport {
    /// Print a patron's current listing with a header
    pub fn print_held_books(patron: &Patron) {
        println!("=== Books held by {} (id {}) ===", patron.name(), patron.id());
        for line in patron.list_held_books() {
            println!(" - {line}");
        }
    }

    /// Print the recorded history as numbered lines
    pub fn print_history(records: &[LoanRecord]) {
        println!("{}", Self::render_history(records));
    }

    /// Render the recorded history as numbered lines under a header
    #[must_use]
    #[allow(clippy::arithmetic_side_effects)]
    pub fn render_history(records: &[LoanRecord]) -> String {
        let mut lines = vec!["=== Lending History ===".to_string()];

        if records.is_empty() {
            lines.push("No lending activity recorded yet.".to_string());
        }

        for (i, record) in records.iter().enumerate() {
            lines.push(format!(
                "{}. {} --({})",
                i + 1,
                record.book,
                Self::format_event(&record.event)
            ));
        }

        lines.join("\n")
    }

    /// Generate a markdown table of the recorded history
    #[must_use]
    #[allow(clippy::arithmetic_side_effects)]
    pub fn history_table(records: &[LoanRecord]) -> String {
        if records.is_empty() {
            return "No lending activity recorded yet.".to_string();
        }

        let mut table = String::from("| # | Book | Event | Patron |\n");
        table.push_str("|---|------|-------|--------|\n");

        for (i, record) in records.iter().enumerate() {
            // Book descriptions contain a literal `|`; escape it so every
            // row keeps the header's four columns.
            table.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                i + 1,
                record.book.replace('|', "\\|"),
                Self::format_event(&record.event),
                record.event.patron()
            ));
        }

        table
    }

    /// Serialize the recorded history as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns an error if the records cannot be serialized.
    pub fn history_json(records: &[LoanRecord]) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(records)
    }

    /// Print summary statistics over the recorded history
    pub fn print_stats(records: &[LoanRecord]) {
        println!("=== Lending Statistics ===");
        println!("Events recorded: {}", records.len());

        let granted = records.iter().filter(|record| record.event.succeeded()).count();
        println!("Granted: {granted}");
        println!("Refused: {}", records.len().saturating_sub(granted));

        println!("\nEvents per patron:");
        for (patron, count) in Self::per_patron_counts(records) {
            println!("  {patron}: {count}");
        }
    }

    /// Count how many events each patron took part in, sorted by name
    #[must_use]
    #[allow(clippy::arithmetic_side_effects)]
    pub fn per_patron_counts(records: &[LoanRecord]) -> Vec<(&str, usize)> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for record in records {
            *counts.entry(record.event.patron()).or_insert(0) += 1;
        }
        counts.into_iter().collect()
    }

    /// Format an event for display
    fn format_event(event: &LoanEvent) -> &'static str {
        match event {
            LoanEvent::Borrowed(_) => "Borrowed",
            LoanEvent::BorrowRefused(_) => "Borrow refused",
            LoanEvent::Returned(_) => "Returned",
            LoanEvent::ReturnRefused(_) => "Return refused",
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        events::LoanEvent, ledger::LoanRecord, report::LendingReport, timestamp::TimeStamp,
    };

    /// Helper building a record without going through a ledger
    fn record(event: LoanEvent) -> LoanRecord {
        LoanRecord {
            book: "1984 - George Orwell (ID: 123-123) | Lent".to_string(),
            event,
            timestamp: TimeStamp::now(),
        }
    }

    #[test]
    fn empty_history_table_reports_no_activity() {
        assert_eq!(LendingReport::history_table(&[]), "No lending activity recorded yet.");
    }

    #[test]
    fn history_table_lists_each_record() {
        let records = vec![
            record(LoanEvent::Borrowed("Alice".to_string())),
            record(LoanEvent::BorrowRefused("Bruno".to_string())),
        ];

        let table = LendingReport::history_table(&records);
        assert!(table.starts_with("| # | Book | Event | Patron |"));
        assert!(
            table.contains("| 1 | 1984 - George Orwell (ID: 123-123) \\| Lent | Borrowed | Alice |")
        );
        assert!(
            table.contains(
                "| 2 | 1984 - George Orwell (ID: 123-123) \\| Lent | Borrow refused | Bruno |"
            )
        );
    }

    #[test]
    fn history_table_rows_keep_four_columns() {
        let records = vec![record(LoanEvent::Borrowed("Alice".to_string()))];

        let table = LendingReport::history_table(&records);
        for line in table.lines().filter(|line| !line.starts_with("|---")) {
            // The `|` inside the book description is escaped, so every row
            // has exactly the header's three inner column separators
            assert_eq!(line.matches(" | ").count(), 3, "misaligned row: {line}");
        }
    }

    #[test]
    fn render_history_numbers_records() {
        let records = vec![
            record(LoanEvent::Borrowed("Alice".to_string())),
            record(LoanEvent::Returned("Alice".to_string())),
        ];

        let rendered = LendingReport::render_history(&records);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.first().copied(), Some("=== Lending History ==="));
        assert_eq!(
            lines.get(1).copied(),
            Some("1. 1984 - George Orwell (ID: 123-123) | Lent --(Borrowed)")
        );
        assert_eq!(
            lines.get(2).copied(),
            Some("2. 1984 - George Orwell (ID: 123-123) | Lent --(Returned)")
        );
    }

    #[test]
    fn render_history_reports_no_activity_when_empty() {
        let rendered = LendingReport::render_history(&[]);
        assert!(rendered.ends_with("No lending activity recorded yet."));
    }

    #[test]
    fn per_patron_counts_are_sorted_by_name() {
        let records = vec![
            record(LoanEvent::Borrowed("Zara".to_string())),
            record(LoanEvent::Borrowed("Alice".to_string())),
            record(LoanEvent::BorrowRefused("Zara".to_string())),
        ];

        assert_eq!(LendingReport::per_patron_counts(&records), vec![("Alice", 1), ("Zara", 2)]);
    }

    #[test]
    #[allow(clippy::expect_used)]
    fn history_json_names_the_event() {
        let records = vec![record(LoanEvent::Returned("Alice".to_string()))];

        let json = LendingReport::history_json(&records).expect("records should serialize");
        assert!(json.contains("Returned"));
        assert!(json.contains("Alice"));
    }
}
