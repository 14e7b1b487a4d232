//! Core types for filmi.

pub mod generation;
pub mod request;
pub mod response;
pub mod safety;
pub mod usage;

pub use generation::*;
pub use request::*;
pub use response::*;
pub use safety::*;
pub use usage::*;
