//! Slugmend slug-repair hooks - integration test support.
//!
//! This crate re-exports the workspace crates so integration tests can use
//! `slugmend_test::` paths without caring which member a module lives in.

pub mod core {
    pub use slugmend_core::*;
}

pub mod hooks {
    pub use slugmend_hooks::*;
}
