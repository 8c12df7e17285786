//! A single pass of the reference quiz over a list of references.
//!
//! The session owns the shuffled order, the attempts left on the current
//! item and the parsed target the answer field is formatted against.
//! Fetching and showing the verse text is the caller's business.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::autoformat::format_against;
use crate::bible::{parse_target, references_match, ParsedTarget};
use crate::error::{Error, Result};
use crate::input::{guard_edit, Edit, EditOutcome};
use crate::types::Mode;

/// Result of submitting an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    /// The answer names the current reference.
    Correct,
    /// Wrong, but the player may try again.
    Wrong {
        /// Attempts remaining on this item.
        attempts_left: u32,
    },
    /// Wrong on the last attempt; the reference is shown.
    Revealed {
        /// The reference that was expected.
        reference: String,
    },
}

/// One run through a shuffled list of references.
#[derive(Debug, Clone)]
pub struct QuizSession {
    references: Vec<String>,
    order: Vec<usize>,
    position: usize,
    mode: Mode,
    attempts_per_item: u32,
    attempts_left: u32,
    settled: bool,
    correct: usize,
    target: ParsedTarget,
}

impl QuizSession {
    /// Start a session over `references` in an order drawn from `rng`.
    pub fn new<R: Rng + ?Sized>(
        references: Vec<String>,
        mode: Mode,
        attempts: u32,
        rng: &mut R,
    ) -> Result<Self> {
        if references.is_empty() {
            return Err(Error::Quiz("no references to quiz on".to_string()));
        }
        if attempts == 0 {
            return Err(Error::Quiz("at least one attempt per reference is required".to_string()));
        }

        let mut order: Vec<usize> = (0..references.len()).collect();
        order.shuffle(rng);
        let target = parse_target(&references[order[0]]);
        tracing::info!(items = references.len(), %mode, attempts, "starting quiz");

        Ok(Self {
            references,
            order,
            position: 0,
            mode,
            attempts_per_item: attempts,
            attempts_left: attempts,
            settled: false,
            correct: 0,
            target,
        })
    }

    /// The reference currently being asked, or `None` once finished.
    pub fn current(&self) -> Option<&str> {
        self.order
            .get(self.position)
            .map(|&i| self.references[i].as_str())
    }

    /// Parsed shape of the current reference.
    pub const fn target(&self) -> &ParsedTarget {
        &self.target
    }

    /// Matching mode of this session.
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Whether an item is still being asked.
    pub fn is_active(&self) -> bool {
        self.position < self.order.len()
    }

    /// Attempts left on the current item.
    pub const fn attempts_left(&self) -> u32 {
        self.attempts_left
    }

    /// Items answered correctly so far.
    pub const fn score(&self) -> usize {
        self.correct
    }

    /// Number of items in the session.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Always false; sessions are never built empty.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Share of items already moved past, rounded to a whole percent.
    pub fn progress_percent(&self) -> u32 {
        let done = self.position.min(self.order.len());
        let percent = (done * 100 + self.order.len() / 2) / self.order.len();
        u32::try_from(percent).unwrap_or(100)
    }

    /// Autoformat the answer field for the current item.
    pub fn format_input(&self, raw: &str) -> String {
        if !self.is_active() {
            return raw.to_string();
        }
        format_against(raw, &self.target, self.mode)
    }

    /// Run a pending edit on the answer field through the lock guard.
    pub fn guard_edit(&self, buffer: &str, edit: Edit) -> EditOutcome {
        if !self.is_active() {
            return EditOutcome::Allow;
        }
        guard_edit(buffer, &self.target, edit)
    }

    /// Check an answer for the current item.
    ///
    /// Returns `None` for a blank answer, when the item is already settled,
    /// or when the session is finished.
    pub fn submit(&mut self, guess: &str) -> Option<Feedback> {
        if guess.trim().is_empty() || self.settled {
            return None;
        }
        let actual = self.current()?.to_string();

        if references_match(guess, &actual, self.mode) {
            self.settled = true;
            self.correct += 1;
            return Some(Feedback::Correct);
        }
        if self.attempts_left > 1 {
            self.attempts_left -= 1;
            return Some(Feedback::Wrong { attempts_left: self.attempts_left });
        }
        self.attempts_left = 0;
        self.settled = true;
        Some(Feedback::Revealed { reference: actual })
    }

    /// Move to the next item. Returns false when there is none.
    pub fn advance(&mut self) -> bool {
        if !self.is_active() {
            return false;
        }
        self.position += 1;
        self.attempts_left = self.attempts_per_item;
        self.settled = false;
        self.target = self.current().map(parse_target).unwrap_or_default();
        if !self.is_active() {
            tracing::info!(score = self.correct, items = self.order.len(), "quiz finished");
        }
        self.is_active()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn session(refs: &[&str], attempts: u32) -> QuizSession {
        let mut rng = SmallRng::seed_from_u64(7);
        let refs = refs.iter().map(ToString::to_string).collect();
        QuizSession::new(refs, Mode::Initial, attempts, &mut rng).unwrap()
    }

    #[test]
    fn test_empty_deck_rejected() {
        let mut rng = SmallRng::seed_from_u64(1);
        assert!(matches!(
            QuizSession::new(Vec::new(), Mode::Full, 2, &mut rng),
            Err(Error::Quiz(_))
        ));
        assert!(QuizSession::new(vec!["John 3:16".into()], Mode::Full, 0, &mut rng).is_err());
    }

    #[test]
    fn test_order_is_a_permutation() {
        let refs = ["Genesis 1:1", "John 3:16", "Romans 8:28", "Psalm 23"];
        let mut quiz = session(&refs, 1);
        let mut seen = Vec::new();
        while let Some(r) = quiz.current() {
            seen.push(r.to_string());
            quiz.advance();
        }
        seen.sort();
        let mut expected: Vec<String> = refs.iter().map(ToString::to_string).collect();
        expected.sort();
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_correct_answer() {
        let mut quiz = session(&["John 3:16"], 2);
        assert_eq!(quiz.submit("j 3:16"), Some(Feedback::Correct));
        // settled until advanced
        assert_eq!(quiz.submit("j 3:16"), None);
        assert_eq!(quiz.score(), 1);
        assert!(!quiz.advance());
        assert!(!quiz.is_active());
        assert_eq!(quiz.progress_percent(), 100);
    }

    #[test]
    fn test_attempts_then_reveal() {
        let mut quiz = session(&["John 3:16"], 2);
        assert_eq!(quiz.submit(""), None);
        assert_eq!(quiz.submit("j 3:17"), Some(Feedback::Wrong { attempts_left: 1 }));
        assert_eq!(
            quiz.submit("j 3:18"),
            Some(Feedback::Revealed { reference: "John 3:16".to_string() })
        );
        assert_eq!(quiz.attempts_left(), 0);
        assert_eq!(quiz.score(), 0);
    }

    #[test]
    fn test_advance_resets_attempts_and_target() {
        let mut quiz = session(&["John 3:16", "Romans 8:28"], 2);
        let first = quiz.current().unwrap().to_string();
        quiz.submit("nowhere 1:1");
        assert_eq!(quiz.attempts_left(), 1);
        assert_eq!(quiz.progress_percent(), 0);
        assert!(quiz.advance());
        assert_eq!(quiz.attempts_left(), 2);
        assert_ne!(quiz.current().unwrap(), first);
        assert_eq!(quiz.target(), &parse_target(quiz.current().unwrap()));
        assert_eq!(quiz.progress_percent(), 50);
    }

    #[test]
    fn test_format_input_uses_current_target() {
        let mut quiz = session(&["Psalm 103:8-11"], 1);
        assert_eq!(quiz.format_input("p1038"), "Psalm 103:8-");
        assert_eq!(
            quiz.guard_edit("Psalm 103:", Edit::at(crate::input::EditKey::Backspace, 10)),
            EditOutcome::MoveCaret(10)
        );
        quiz.advance();
        assert_eq!(quiz.format_input("p1038"), "p1038");
    }
}
