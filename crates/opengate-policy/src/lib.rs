//! Vehicle safety policy contract for OpenGate.
//!
//! The transport layer selects one policy at startup and drives it
//! synchronously: `rx` on every received frame, `tx` on every frame the
//! upstream controller wants to place on the bus. Policies are pure state
//! machines — no threads, no I/O, no allocation on the hot path — and every
//! `tx` decision is a plain allow/deny: rejected frames are dropped, never
//! modified or clamped.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]

pub mod config;
pub mod policy;
pub mod reject;
pub mod silent;

pub use config::{ConfigError, GateConfig, PolicyKind};
pub use policy::{ForwardDecision, SafetyPolicy};
pub use reject::RejectReason;
pub use silent::SilentPolicy;
