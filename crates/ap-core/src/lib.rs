//! `ap-core` — foundational types for the `rust_ap` autopilot framework.
//!
//! This crate is a dependency of every other `ap-*` crate.  It intentionally
//! has no `ap-*` dependencies and no required external ones (only optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module   | Contents                                            |
//! |----------|-----------------------------------------------------|
//! | [`ids`]  | `CellId`, `UnitId`, `ItemId`, `BlockId`, `Team`     |
//! | [`vec2`] | `Vec2`, angular slerp, sine wobble helper           |
//! | [`time`] | `SimTime` (per-tick snapshot), `Interval` (debounce)|
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod ids;
pub mod time;
pub mod vec2;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::{BlockId, CellId, ItemId, Team, UnitId};
pub use time::{Interval, SimTime};
pub use vec2::{Vec2, sin_wave, slerp_angle};
