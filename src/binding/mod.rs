//! Binding subsystem: materializing instances from trees and back.
//!
//! The binder applies per-field precedence (nested recursion, source value,
//! declared default, error) and the serializer walks instances back into
//! the generic tree form. Both allocate fresh output on every call; nothing
//! is cached or shared between calls beyond the registry.

mod binder;
mod instance;
mod serializer;

pub use binder::Binder;
pub use instance::{BoundValue, Instance};
pub use serializer::serialize;
