#![warn(clippy::unwrap_used)]

//! Dense 2-D grids and layered grid stacks with a compact binary file format.
//!
//! A [`DenseGrid`] is a row-major in-memory grid of numeric cells, a
//! [`GridStack`] is a contiguous pile of equally sized grids (one layer per
//! simulation step). Stacks persist in the `.grids` container described in
//! [`stackio`].

pub type Result<T = ()> = std::result::Result<T, Error>;

mod cell;
mod datatype;
mod densegrid;
mod error;
pub mod fs;
mod gridnum;
mod gridsize;
mod gridstack;
pub mod stackio;
#[cfg(test)]
mod testutils;

pub use cell::Cell;
pub use cell::CellIterator;
pub use datatype::GridDataType;
#[doc(inline)]
pub use densegrid::DenseGrid;
#[doc(inline)]
pub use error::Error;
pub use gridnum::GridNum;
#[doc(inline)]
pub use gridsize::GridSize;
#[doc(inline)]
pub use gridstack::GridStack;
