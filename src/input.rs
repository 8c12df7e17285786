//! Edit guarding for the answer field.
//!
//! Once part of the answer is confirmed (see
//! [`compute_lock_boundary`](crate::autoformat::compute_lock_boundary)), key
//! presses that would change it in place are redirected: deletions move the
//! caret to the boundary, and typed characters are inserted right after it.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::autoformat::compute_lock_boundary;
use crate::bible::ParsedTarget;

/// The part of a key press the guard cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKey {
    /// Delete backwards.
    Backspace,
    /// Delete forwards.
    Delete,
    /// Insert a single printable character.
    Char(char),
    /// Navigation, chords and everything else.
    Other,
}

impl From<KeyEvent> for EditKey {
    fn from(key: KeyEvent) -> Self {
        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return Self::Other;
        }
        match key.code {
            KeyCode::Backspace => Self::Backspace,
            KeyCode::Delete => Self::Delete,
            KeyCode::Char(c) => Self::Char(c),
            _ => Self::Other,
        }
    }
}

/// A pending edit: the key and the caret selection it applies to.
///
/// Offsets are in chars. A collapsed caret has `start == end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edit {
    /// Key being pressed.
    pub key: EditKey,
    /// Selection start.
    pub start: usize,
    /// Selection end.
    pub end: usize,
}

impl Edit {
    /// An edit at a collapsed caret.
    pub const fn at(key: EditKey, caret: usize) -> Self {
        Self { key, start: caret, end: caret }
    }
}

/// What the caller should do with a pending edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// Apply the edit normally.
    Allow,
    /// Drop the edit and place the caret at this offset.
    MoveCaret(usize),
    /// Drop the edit, replace the buffer and place the caret.
    Replace {
        /// The new buffer contents.
        buffer: String,
        /// Caret offset in chars.
        caret: usize,
    },
}

/// Decide how a pending edit interacts with the confirmed prefix.
pub fn guard_edit(buffer: &str, target: &ParsedTarget, edit: Edit) -> EditOutcome {
    let lock = compute_lock_boundary(buffer, target);
    if lock == 0 {
        return EditOutcome::Allow;
    }
    match edit.key {
        EditKey::Backspace if edit.start <= lock && edit.end <= lock => EditOutcome::MoveCaret(lock),
        EditKey::Delete if edit.start < lock => EditOutcome::MoveCaret(lock),
        EditKey::Char(c) if edit.start < lock => {
            let split = buffer.char_indices().nth(lock).map_or(buffer.len(), |(i, _)| i);
            let mut next = String::with_capacity(buffer.len() + c.len_utf8());
            next.push_str(&buffer[..split]);
            next.push(c);
            next.push_str(&buffer[split..]);
            EditOutcome::Replace { buffer: next, caret: lock + 1 }
        }
        _ => EditOutcome::Allow,
    }
}

/// State an input handler needs to judge a key press.
pub struct InputContext<'a> {
    /// Current answer buffer.
    pub buffer: &'a str,
    /// Selection start, in chars.
    pub selection_start: usize,
    /// Selection end, in chars.
    pub selection_end: usize,
    /// Parsed reference of the current quiz item.
    pub target: &'a ParsedTarget,
    /// Whether a quiz item is currently being answered.
    pub active: bool,
}

/// Trait for handling keyboard input on the answer field.
pub trait InputHandler {
    /// Handle a key event.
    ///
    /// # Arguments
    /// * `key` - The key event to handle
    /// * `ctx` - Buffer, selection and target for the current item
    ///
    /// # Returns
    /// What to do with the edit.
    fn handle(&mut self, key: KeyEvent, ctx: &InputContext<'_>) -> EditOutcome;

    /// Get the name of this handler (for debugging).
    fn name(&self) -> &'static str;
}

/// Handler that protects the confirmed prefix of the answer.
#[derive(Debug, Default)]
pub struct LockGuardHandler;

impl InputHandler for LockGuardHandler {
    fn handle(&mut self, key: KeyEvent, ctx: &InputContext<'_>) -> EditOutcome {
        if !ctx.active {
            return EditOutcome::Allow;
        }
        let edit = Edit {
            key: EditKey::from(key),
            start: ctx.selection_start,
            end: ctx.selection_end,
        };
        let outcome = guard_edit(ctx.buffer, ctx.target, edit);
        if outcome != EditOutcome::Allow {
            tracing::debug!(?edit, ?outcome, "edit redirected by lock guard");
        }
        outcome
    }

    fn name(&self) -> &'static str {
        "LockGuardHandler"
    }
}
