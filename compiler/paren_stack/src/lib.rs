//! Host stack growth for deeply nested programs.
//!
//! Parsing and evaluation both recurse once per nesting level of the source.
//! The interpreter's own call-depth limit bounds user-visible recursion, but
//! the native stack a single level consumes varies with build profile, so the
//! recursive entry points run under [`ensure_sufficient_stack`] and grow the
//! stack on a fresh segment instead of aborting the process.
//!
//! On `wasm32` the guard is a plain call.

/// Grow when less than this much stack remains.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first moving to a new stack segment if the current one is nearly
/// exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

/// Remaining host stack in bytes, when the platform can report it.
#[cfg(not(target_arch = "wasm32"))]
pub fn remaining_stack() -> Option<usize> {
    stacker::remaining_stack()
}

#[cfg(target_arch = "wasm32")]
pub fn remaining_stack() -> Option<usize> {
    None
}
