//! Arithmetic module
//!
//! The four arithmetic primitives and the operation dispatch layer
//! translating CLI tokens into calls on them.

pub mod dispatch;
pub mod ops;

pub use dispatch::*;
pub use ops::*;
