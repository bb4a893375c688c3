#![forbid(unsafe_code)]

//! Elm-style runtime for the tfolio page.
//!
//! A [`Model`] owns all state; [`Cmd`] values returned from `update` request
//! side effects (quit, scheduled ticks, background tasks); [`Program`] runs
//! the event loop against a crossterm terminal.
//!
//! # Tick discipline
//!
//! Exactly one [`Cmd::Tick`] deadline may be outstanding at a time; issuing
//! a new one replaces whatever was pending. This is the runtime-level
//! guarantee that restartable animations cannot leave a stale callback
//! racing a fresh one. Fixed-cadence work (particles, scroll easing) uses
//! [`Every`] subscriptions instead and does not touch the tick slot.

pub mod backend;
pub mod program;
pub mod subscription;

pub use program::{Cmd, Model, Program, ProgramConfig, TickSlot};
pub use subscription::{Every, Subscription};
