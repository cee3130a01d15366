//! Value Objects
//!
//! Immutable types compared by value.

mod invocation;

pub use invocation::Invocation;
