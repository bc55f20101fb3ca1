//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `flicklist_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("flicklist_core ping={}", flicklist_core::ping());
    println!("flicklist_core version={}", flicklist_core::core_version());
}
