//! FFI crate exposing flicklist core use-cases to the Flutter shell.

pub mod api;
