//! Umbrella crate for the sprawl workspace.
//!
//! Re-exports the [`grid`] container crate and the [`cover`] land-cover
//! coverage crate so downstream users can depend on a single package.

#[doc(inline)]
pub use cover;
#[doc(inline)]
pub use grid;
