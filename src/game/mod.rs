//! Game simulation core.
//!
//! A bird falls under gravity, the player flaps to rise, and scrolling pipe
//! pairs must be threaded through their gaps. All logic is pure over the
//! [`types::World`] aggregate with an injected RNG; rendering, audio, and
//! persistence live behind the [`session::SessionEvent`] seam.

pub mod geometry;
pub mod logic;
pub mod session;
pub mod types;
