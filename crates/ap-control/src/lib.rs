//! `ap-control` — the autopilot controller.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`goal`]    | `Goal` / `ActiveGoal` — the movement goal as a tagged union |
//! | [`pilot`]   | `Autopilot` — state, activation operations, `update()`      |
//! | [`steer`]   | Target resolution, velocity/heading update, task mirroring  |
//! | [`balance`] | Output-facility resource balancer                           |
//! | [`dump`]    | Debounced auto-deposit of the carried stack                 |
//! | [`error`]   | `ControlError`, `ControlResult<T>`                          |
//!
//! # Tick model
//!
//! The host driver calls [`Autopilot::update`] exactly once per simulation
//! tick, passing a [`Host`][ap_host::Host] implementation and the tick's
//! [`SimTime`][ap_core::SimTime].  One update runs, in order:
//!
//! 1. the resource balancer (independent of the movement goal),
//! 2. the auto-deposit manager (independent of the movement goal),
//! 3. steering plus leader-task mirroring (only while a goal is active).
//!
//! Everything is single-threaded and cooperative.  Stale host handles are
//! detected on every read-path and degrade by dropping the affected goal or
//! tracking reference; `update()` never fails.

pub mod balance;
pub mod dump;
pub mod error;
pub mod goal;
pub mod pilot;
pub mod steer;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{ControlError, ControlResult};
pub use goal::{ActiveGoal, Goal};
pub use pilot::Autopilot;
