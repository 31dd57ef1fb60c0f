//! Pancanga Engine - calendar conversions through the kollavarsham library
//!
//! This crate implements [`pancanga_core::CalendarEngine`] by running a small
//! embedded script under Node.js for every conversion:
//! - Settings stay in this process and travel with each request
//! - One JSON request on the child's stdin, one JSON response on its stdout
//! - Spawn failures, crashes and bad output map onto [`EngineError`] variants
//!
//! [`EngineError`]: pancanga_core::EngineError

pub mod bridge;
pub mod wire;

pub use bridge::{BridgeConfig, KollavarshamBridge, BRIDGE_SCRIPT, MISSING_LIBRARY_EXIT};
pub use wire::{Request, Response, WireDate, WireResult};
