//! Top-level facade crate for kaizen.
//!
//! Re-exports the core primitives and the report library so users can depend on a single crate.

pub mod core {
    pub use kaizen_core::*;
}

pub mod report {
    pub use kaizen_report::*;
}
