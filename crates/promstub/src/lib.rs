//! Top-level facade crate for promstub.
//!
//! Re-exports the payload types and the server library so users can depend on a single crate.

pub mod core {
    pub use promstub_core::*;
}

pub mod server {
    pub use promstub_server::*;
}
