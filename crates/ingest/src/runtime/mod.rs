//! Runtime module — process lifecycle: logging init and boot.

pub mod boot;

pub use boot::{boot, init_logging};
