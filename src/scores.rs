//! Session score table.
//!
//! Scores are kept in memory for the lifetime of the process; nothing is written
//! to disk. The table is printed the way the classic game printed its high
//! score list: rank, player, score and level, best total first.

use std::io::{self, Write};

use anyhow::Result;

use crate::core::{GameSummary, ScoreSink};
use crate::types::Level;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreEntry {
    pub player: String,
    pub score: u32,
    pub level: Level,
}

impl ScoreEntry {
    pub fn total(&self) -> u32 {
        self.score.saturating_mul(self.level.get())
    }
}

pub struct SessionScores<W = io::Stdout> {
    player: String,
    entries: Vec<ScoreEntry>,
    out: W,
}

impl SessionScores<io::Stdout> {
    /// Table for the current user, printed to stdout.
    pub fn for_current_user() -> Self {
        let player = std::env::var("USER")
            .or_else(|_| std::env::var("LOGNAME"))
            .unwrap_or_else(|_| "anonymous".to_string());
        Self::with_writer(player, io::stdout())
    }
}

impl<W: Write> SessionScores<W> {
    pub fn with_writer(player: impl Into<String>, out: W) -> Self {
        Self {
            player: player.into(),
            entries: Vec::new(),
            out,
        }
    }

    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    pub fn into_writer(self) -> W {
        self.out
    }
}

impl<W: Write> ScoreSink for SessionScores<W> {
    fn record_score(&mut self, summary: &GameSummary) -> Result<()> {
        self.entries.push(ScoreEntry {
            player: self.player.clone(),
            score: summary.score,
            level: summary.level,
        });
        self.entries.sort_by(|a, b| b.total().cmp(&a.total()));
        Ok(())
    }

    fn show_scores(&mut self, level: Option<Level>) -> Result<()> {
        let shown = self
            .entries
            .iter()
            .filter(|entry| level.map_or(true, |level| entry.level == level));

        match level {
            Some(level) => writeln!(self.out, "\nScores for level {level}:")?,
            None => writeln!(self.out, "\nScores:")?,
        }
        writeln!(self.out, "Rank  Score   Name                      (points/level)")?;
        for (rank, entry) in shown.enumerate() {
            writeln!(
                self.out,
                "{:>3}  {:>6}  {:<24}  ({} x {})",
                rank + 1,
                entry.total(),
                entry.player,
                entry.score,
                entry.level
            )?;
        }
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EndReason;

    fn summary(score: u32, level: u32) -> GameSummary {
        GameSummary {
            score,
            level: Level::new(level).unwrap(),
            rows_cleared: 0,
            reason: EndReason::GameOver,
        }
    }

    #[test]
    fn best_total_is_ranked_first() {
        let mut scores = SessionScores::with_writer("ann", Vec::new());
        scores.record_score(&summary(10, 2)).unwrap();
        scores.record_score(&summary(7, 5)).unwrap();
        let totals: Vec<_> = scores.entries().iter().map(ScoreEntry::total).collect();
        assert_eq!(totals, [35, 20]);
    }

    #[test]
    fn level_filter_limits_rows() {
        let mut scores = SessionScores::with_writer("ann", Vec::new());
        scores.record_score(&summary(10, 2)).unwrap();
        scores.record_score(&summary(7, 5)).unwrap();
        scores.show_scores(Some(Level::new(5).unwrap())).unwrap();

        let text = String::from_utf8(scores.into_writer()).unwrap();
        assert!(text.contains("Scores for level 5:"));
        assert!(text.contains("(7 x 5)"));
        assert!(!text.contains("(10 x 2)"));
    }

    #[test]
    fn unfiltered_table_lists_everything() {
        let mut scores = SessionScores::with_writer("bo", Vec::new());
        scores.record_score(&summary(3, 1)).unwrap();
        scores.record_score(&summary(4, 1)).unwrap();
        scores.show_scores(None).unwrap();

        let text = String::from_utf8(scores.into_writer()).unwrap();
        let rows: Vec<_> = text.lines().filter(|l| l.contains("bo")).collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].starts_with("  1       4"));
    }
}
