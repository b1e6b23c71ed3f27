#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "std")]
pub mod cases;
mod census;
mod common;
mod config;
mod coord;
mod extract;
#[cfg(feature = "std")]
mod logging;
pub mod lookup;
mod merger;
mod registry;
#[cfg(feature = "std")]
pub mod report;
mod ship;

pub use census::*;
pub use common::*;
pub use config::*;
pub use coord::*;
pub use extract::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use lookup::{NeighborLookup, PairwiseScan, SpatialIndex};
pub use merger::*;
pub use registry::*;
pub use ship::*;
