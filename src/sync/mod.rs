//! The synchronization components: interaction-state tracking, marker
//! reconciliation, view framing, bounding-box projection, and the
//! refinement scheduler.

pub mod framing;
pub mod interaction;
pub mod projector;
pub mod reconcile;
mod scheduler;
