//! Per-concern settings sections and their resolved variants
//!
//! Each concern module holds the permissive settings section users author,
//! the closed enum it resolves to, and the resolution function the
//! [`Resolver`](crate::Resolver) dispatches to.

pub mod cache;
pub mod input;
pub mod remote;
pub mod reporting;
pub mod storage;

pub use cache::*;
pub use input::*;
pub use remote::*;
pub use reporting::*;
pub use storage::*;
