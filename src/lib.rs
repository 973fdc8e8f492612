//! Public library API for rendering typed debugger values.

/// Value model, snapshots, and the cycle-safe inspector.
pub mod inspect;
