//! Stack growth for recursive parsing and evaluation.
//!
//! Quill's parser descends once per nested `(` / `{` and the evaluator once
//! per nested combination, so input depth maps directly onto call depth.
//! Wrapping each recursive step in [`ensure_sufficient_stack`] lets deeply
//! nested input run on a segmented stack instead of overflowing the thread's
//! fixed one. Depth is not capped: input nested deeper than available memory
//! still fails.
//!
//! # Platform Support
//!
//! - **Native targets**: `stacker` grows the stack on demand.
//! - **WASM targets**: plain call (WASM manages its own stack).

/// If less than this much stack remains, grow before recursing (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each new stack segment (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if the remaining space is below the red zone.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - just call directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
