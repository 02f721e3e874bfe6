//! Session command history
//!
//! An append-only, in-memory record of submitted commands with a navigation
//! cursor and fuzzy search. Nothing is persisted between sessions.

use crate::models::ExecutedCommand;

/// In-memory command history with cursor navigation
#[derive(Debug, Clone, Default)]
pub struct CommandHistory {
    entries: Vec<ExecutedCommand>,
    /// Navigation position; `entries.len()` means "past the newest entry"
    cursor: usize,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a command and park the cursor past the newest entry
    pub fn push(&mut self, command: ExecutedCommand) {
        self.entries.push(command);
        self.cursor = self.entries.len();
    }

    pub fn entries(&self) -> &[ExecutedCommand] {
        &self.entries
    }

    /// Command lines in submission order
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(ExecutedCommand::command_line).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Step back one entry; stays on the oldest once reached
    pub fn previous(&mut self) -> Option<&ExecutedCommand> {
        if self.entries.is_empty() {
            return None;
        }
        self.cursor = self.cursor.saturating_sub(1);
        self.entries.get(self.cursor)
    }

    /// Step forward one entry; `None` once past the newest
    pub fn next(&mut self) -> Option<&ExecutedCommand> {
        if self.cursor < self.entries.len() {
            self.cursor += 1;
        }
        self.entries.get(self.cursor)
    }

    /// Entries matching `query` as a fuzzy subsequence, best score first
    ///
    /// Each match carries its zero-based position in the history. Equal
    /// scores keep submission order.
    pub fn search(&self, query: &str) -> Vec<(usize, &ExecutedCommand)> {
        let query_lower = query.to_lowercase();

        let mut results: Vec<(usize, usize, &ExecutedCommand)> = self
            .entries
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| {
                let score = fuzzy_score(&query_lower, &entry.command_line().to_lowercase());
                (score > 0).then_some((score, index, entry))
            })
            .collect();

        results.sort_by(|a, b| b.0.cmp(&a.0));
        results
            .into_iter()
            .map(|(_, index, entry)| (index, entry))
            .collect()
    }
}

/// Simple fuzzy scoring algorithm
/// Returns a score based on how well the query matches the target
pub fn fuzzy_score(query: &str, target: &str) -> usize {
    let query_chars: Vec<char> = query.chars().collect();
    let target_chars: Vec<char> = target.chars().collect();

    let mut query_idx = 0;
    let mut target_idx = 0;
    let mut score = 0;
    let mut consecutive = 0;

    while query_idx < query_chars.len() && target_idx < target_chars.len() {
        if query_chars[query_idx] == target_chars[target_idx] {
            score += 1 + consecutive * 5; // Bonus for consecutive matches
            consecutive += 1;
            query_idx += 1;
        } else {
            consecutive = 0;
        }
        target_idx += 1;
    }

    // Only count as a match if all query characters were found
    if query_idx == query_chars.len() {
        score
    } else {
        0
    }
}
