//! Browse-history use case

use crate::domain::Journal;
use crate::error::StorageError;
use crate::infrastructure::JournalRepository;

/// Text shown when the journal holds no entries
pub const NO_ENTRIES: &str = "No entries found.";

const SEPARATOR_WIDTH: usize = 40;

/// Turns a journal into the text block shown on the history screen
pub struct HistoryView;

impl HistoryView {
    /// Render every entry, most recent date first.
    ///
    /// Each entry is a date line, a roses line, a thorn line and a separator.
    pub fn render(journal: &Journal) -> String {
        if journal.is_empty() {
            return NO_ENTRIES.to_string();
        }

        let separator = "―".repeat(SEPARATOR_WIDTH);
        let mut lines = Vec::with_capacity(journal.len() * 4);
        for (date, entry) in journal.newest_first() {
            lines.push(format!("📅 {}", date));
            lines.push(format!("🌹 Roses: • {}", entry.roses.join(" • ")));
            lines.push(format!("🌵 Thorn: {}", entry.thorn));
            lines.push(separator.clone());
        }

        lines.join("\n")
    }
}

/// Load the journal and render it for display
pub fn show_history<R: JournalRepository>(repository: &R) -> Result<String, StorageError> {
    let journal = repository.load()?;
    Ok(HistoryView::render(&journal))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::JournalEntry;

    fn entry(a: &str, b: &str, thorn: &str) -> JournalEntry {
        JournalEntry::new([a.to_string(), b.to_string()], thorn.to_string())
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(HistoryView::render(&Journal::new()), "No entries found.");
    }

    #[test]
    fn test_render_single_entry() {
        let mut journal = Journal::new();
        journal.insert(
            "2024-06-01",
            entry("Finished project", "Sunny weather", "Missed the bus"),
        );

        let output = HistoryView::render(&journal);
        let expected = format!(
            "📅 2024-06-01\n\
             🌹 Roses: • Finished project • Sunny weather\n\
             🌵 Thorn: Missed the bus\n\
             {}",
            "―".repeat(40)
        );
        assert_eq!(output, expected);
    }

    #[test]
    fn test_render_newest_first() {
        let mut journal = Journal::new();
        journal.insert("2024-01-01", entry("a", "b", "jan"));
        journal.insert("2024-03-05", entry("a", "b", "mar"));
        journal.insert("2024-02-10", entry("a", "b", "feb"));

        let output = HistoryView::render(&journal);
        let mar = output.find("2024-03-05").unwrap();
        let feb = output.find("2024-02-10").unwrap();
        let jan = output.find("2024-01-01").unwrap();
        assert!(mar < feb && feb < jan);
        assert_eq!(output.lines().count(), 12);
    }

    #[test]
    fn test_render_has_no_trailing_newline() {
        let mut journal = Journal::new();
        journal.insert("2024-06-01", entry("a", "b", "c"));

        assert!(!HistoryView::render(&journal).ends_with('\n'));
    }
}
