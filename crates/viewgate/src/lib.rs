//! Top-level facade crate for viewgate.
//!
//! Re-exports the core rule types and the host integration layer so users can
//! depend on a single crate.

pub mod core {
    pub use viewgate_core::*;
}

pub mod host {
    pub use viewgate_host::*;
}
