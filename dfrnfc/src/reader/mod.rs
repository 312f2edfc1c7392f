// dfrnfc/src/reader/mod.rs

pub mod handle;

pub use handle::{Initialized, Reader, Uninitialized};
