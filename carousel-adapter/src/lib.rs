//! Adapter utilities for the `carousel` crate.
//!
//! The `carousel` crate is UI-agnostic and owns the decision logic. This crate provides small,
//! framework-neutral helpers commonly needed by hosts:
//!
//! - Raw pointer/touch/hover/click routing with post-drag click suppression
//! - An explicit instance registry owned by the page bootstrap
//! - Ready-made option presets (hero slider, tour list, review grid, ...)
//! - `SimHost`: a deterministic in-memory host with a virtual clock, for tests and demos
//!
//! This crate is intentionally framework-agnostic (no DOM/wasm bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod input;
mod presets;
mod registry;
mod sim;


pub use input::{InputEvent, InputOutcome, InputRouter, Point, PointerKind};
pub use presets::Preset;
pub use registry::{InstanceId, Registry, Teardown};
pub use sim::{Drive, FRAME_INTERVAL_MS, SimHost, Wake};
