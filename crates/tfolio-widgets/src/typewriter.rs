//! Typewriter animation over a list of role strings.
//!
//! # Invariants
//!
//! 1. **Cyclic order**: after role *i* is fully typed and fully deleted,
//!    the next role typed is `(i + 1) % n`. There is no terminal state.
//!
//! 2. **Single chain**: the machine itself holds no timer. Each
//!    [`Typewriter::tick`] returns the delay until the next tick; the
//!    caller schedules it through the runtime's single tick slot, so
//!    restarting (building a fresh `Typewriter` and scheduling its first
//!    tick) implicitly cancels the previous chain.
//!
//! 3. **Empty role list is inert**: `tick` returns `None`, the shown text
//!    stays empty, nothing is ever scheduled.
//!
//! Stepping is grapheme-cluster based, so multi-byte and combining
//! sequences reveal and delete one visible unit at a time.

use std::time::Duration;

use unicode_segmentation::UnicodeSegmentation;

/// Delay between ticks while revealing characters.
pub const TYPE_INTERVAL: Duration = Duration::from_millis(150);
/// Delay between ticks while deleting; faster than typing.
pub const DELETE_INTERVAL: Duration = Duration::from_millis(75);
/// Hold with the full role visible before deletion starts.
pub const HOLD_INTERVAL: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Revealing one grapheme per tick.
    Typing,
    /// Full role shown; the next tick fires after the hold and starts
    /// deletion.
    Holding,
    /// Removing one grapheme per tick.
    Deleting,
}

/// The typing animation state machine.
#[derive(Debug, Clone)]
pub struct Typewriter {
    roles: Vec<String>,
    role: usize,
    /// Graphemes of the current role revealed so far.
    shown: usize,
    phase: Phase,
}

impl Typewriter {
    /// Build a machine from an already-derived role list.
    #[must_use]
    pub fn new(roles: Vec<String>) -> Self {
        Self {
            roles,
            role: 0,
            shown: 0,
            phase: Phase::Typing,
        }
    }

    /// Build a machine from a comma-delimited source string, the way the
    /// page's role-list element is written. Derivation happens here, at
    /// animation start; a language switch re-derives from the freshly
    /// translated text.
    #[must_use]
    pub fn start(source: &str) -> Self {
        Self::new(parse_roles(source))
    }

    /// Split a comma-delimited source into trimmed, non-empty roles.
    #[must_use]
    pub fn parse_roles(source: &str) -> Vec<String> {
        parse_roles(source)
    }

    /// Whether there is nothing to animate.
    #[must_use]
    pub fn is_inert(&self) -> bool {
        self.roles.is_empty()
    }

    /// Index of the role currently being typed or deleted.
    #[must_use]
    pub fn role_index(&self) -> usize {
        self.role
    }

    /// The delay before the first tick of a fresh machine, or `None` when
    /// there is nothing to animate.
    #[must_use]
    pub fn first_delay(&self) -> Option<Duration> {
        if self.is_inert() {
            None
        } else {
            Some(TYPE_INTERVAL)
        }
    }

    /// The currently visible text: the first `shown` graphemes of the
    /// current role.
    #[must_use]
    pub fn text(&self) -> String {
        match self.roles.get(self.role) {
            Some(role) => role.graphemes(true).take(self.shown).collect(),
            None => String::new(),
        }
    }

    /// Advance one step and return the delay until the next tick, or
    /// `None` for an empty role list.
    pub fn tick(&mut self) -> Option<Duration> {
        let role_len = self.roles.get(self.role)?.graphemes(true).count();

        let delay = match self.phase {
            Phase::Typing => {
                if self.shown < role_len {
                    self.shown += 1;
                }
                if self.shown == role_len {
                    self.phase = Phase::Holding;
                    HOLD_INTERVAL
                } else {
                    TYPE_INTERVAL
                }
            }
            Phase::Holding => {
                // The tick that fires after the hold removes the first
                // grapheme, matching the original timing.
                self.phase = Phase::Deleting;
                self.delete_step()
            }
            Phase::Deleting => self.delete_step(),
        };
        Some(delay)
    }

    fn delete_step(&mut self) -> Duration {
        self.shown = self.shown.saturating_sub(1);
        if self.shown == 0 {
            self.role = (self.role + 1) % self.roles.len();
            self.phase = Phase::Typing;
            TYPE_INTERVAL
        } else {
            DELETE_INTERVAL
        }
    }
}

fn parse_roles(source: &str) -> Vec<String> {
    source
        .split(',')
        .map(str::trim)
        .filter(|role| !role.is_empty())
        .map(String::from)
        .collect()
}
