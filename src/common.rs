//! Errors raised by the census pipeline.

use alloc::vec::Vec;

use crate::coord::Coordinate;

/// Errors returned by census operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CensusError {
    /// A connected group is longer than the registry can count.
    ShipTooLarge {
        size: usize,
        max: usize,
        coordinates: Vec<Coordinate>,
    },
}

impl core::fmt::Display for CensusError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CensusError::ShipTooLarge {
                size,
                max,
                coordinates,
            } => write!(
                f,
                "ShipTooLarge: ship of size {} exceeds maximum {} at {:?}",
                size, max, coordinates
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CensusError {}
