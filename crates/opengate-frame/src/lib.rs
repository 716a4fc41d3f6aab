//! Decoded CAN frame contract, raw signal codecs, and tick primitives.
//!
//! This crate is intentionally I/O-free and allocation-free. The transport
//! layer owns wire decoding and frame timing; safety policies consume the
//! decoded fields defined here. Everything in this crate is pure and can be
//! tested without bus hardware or OS-level CAN plumbing.
//!
//! # RT Safety
//!
//! - No heap allocations
//! - O(1) time complexity for all operations
//! - No syscalls or I/O (except `SystemTickSource`, which reads the process
//!   monotonic clock and is meant for the embedding process, not for tests)

#![deny(static_mut_refs)]
#![deny(clippy::unwrap_used)]

pub mod can;
pub mod signal;
pub mod tick;

pub use can::{CAN_MAX_DLC, CanFrame};
pub use signal::{be16, signed_be16, to_signed};
pub use tick::{ManualTickSource, SystemTickSource, TickSource, Ticks};
