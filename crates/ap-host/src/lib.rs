//! `ap-host` — the boundary between the autopilot and the host simulation.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`stack`]   | `ItemStack` — the agent's carried inventory               |
//! | [`plan`]    | `BuildPlan` — a place/remove construction task            |
//! | [`world`]   | `WorldView` — cell, unit, and inventory lookups           |
//! | [`agent`]   | `AgentBody` — the bound agent's mutable body              |
//! | [`catalog`] | `ItemCatalog` — item registry in definition order         |
//! | [`command`] | `CommandSink` — fire-and-forget command issuance          |
//!
//! # Design notes
//!
//! The controller never reaches into host internals: everything it needs is
//! expressed as one of four narrow capability traits that the host implements
//! and hands to `Autopilot::update` each tick.  All lookups that follow a weak
//! handle (`CellId`, `UnitId`) return `Option`, so a referent destroyed
//! between ticks degrades to `None` rather than a dangling access.
//!
//! [`Host`] is a blanket umbrella over the four traits so signatures stay
//! short; any type implementing all four gets it for free.

pub mod agent;
pub mod catalog;
pub mod command;
pub mod plan;
pub mod stack;
pub mod world;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use agent::AgentBody;
pub use catalog::ItemCatalog;
pub use command::CommandSink;
pub use plan::BuildPlan;
pub use stack::ItemStack;
pub use world::WorldView;

/// Everything the autopilot needs from the host, in one bound.
pub trait Host: WorldView + ItemCatalog + AgentBody + CommandSink {}

impl<T: WorldView + ItemCatalog + AgentBody + CommandSink> Host for T {}
