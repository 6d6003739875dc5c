//! Audio transport seam and the derived game clock.
//!
//! This module provides:
//! - [`AudioTransport`]: trait the host's audio element adapter implements
//! - [`VirtualTransport`]: manually-advanced transport for headless runs
//! - [`GameClock`]: millisecond game clock derived from the transport position

mod clock;
mod transport;

pub use clock::GameClock;
pub use transport::{AudioTransport, VirtualTransport};
