//! Size histogram of the final ships.

use alloc::collections::BTreeMap;

use crate::common::CensusError;
use crate::ship::{Fleet, Ship};

/// What to do with a ship longer than the registry has buckets for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OversizePolicy {
    /// Fail with [`CensusError::ShipTooLarge`].
    #[default]
    Reject,
    /// Count it in the last bucket.
    Clamp,
}

/// Ship counts by size: index `k` holds the number of ships with `k + 1` cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
#[cfg_attr(feature = "std", serde(transparent))]
pub struct ShipRegistry<const N: usize> {
    #[cfg_attr(feature = "std", serde(with = "counts_serde"))]
    counts: [usize; N],
}

impl<const N: usize> ShipRegistry<N> {
    /// All buckets zero.
    pub const fn new() -> Self {
        Self { counts: [0; N] }
    }

    /// Count one ship under `policy`.
    pub fn record(&mut self, ship: &Ship, policy: OversizePolicy) -> Result<(), CensusError> {
        let size = ship.len();
        if size == 0 || N == 0 {
            return Ok(());
        }
        let bucket = if size <= N {
            size - 1
        } else {
            match policy {
                OversizePolicy::Clamp => N - 1,
                OversizePolicy::Reject => {
                    return Err(CensusError::ShipTooLarge {
                        size,
                        max: N,
                        coordinates: ship.sorted(),
                    })
                }
            }
        };
        self.counts[bucket] += 1;
        Ok(())
    }

    /// Bucket every live ship in `fleet`. Read-only on the fleet, so repeat calls agree.
    pub fn tabulate(fleet: &Fleet, policy: OversizePolicy) -> Result<Self, CensusError> {
        let mut registry = Self::new();
        for ship in fleet.ships() {
            registry.record(ship, policy)?;
        }
        Ok(registry)
    }

    pub fn counts(&self) -> &[usize; N] {
        &self.counts
    }

    /// Ships with exactly `size` cells; `None` outside `1..=N`.
    pub fn get(&self, size: usize) -> Option<usize> {
        size.checked_sub(1).and_then(|i| self.counts.get(i)).copied()
    }

    /// Number of ships counted.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn into_array(self) -> [usize; N] {
        self.counts
    }
}

impl<const N: usize> Default for ShipRegistry<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> From<ShipRegistry<N>> for [usize; N] {
    fn from(registry: ShipRegistry<N>) -> Self {
        registry.counts
    }
}

/// Unbounded alternative to [`ShipRegistry`]: ship size → number of ships.
pub fn size_histogram(fleet: &Fleet) -> BTreeMap<usize, usize> {
    let mut sizes = BTreeMap::new();
    for ship in fleet.ships() {
        *sizes.entry(ship.len()).or_insert(0) += 1;
    }
    sizes
}

#[cfg(feature = "std")]
mod counts_serde {
    use serde::Serializer;

    pub fn serialize<S: Serializer, const N: usize>(
        counts: &[usize; N],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(counts.iter())
    }
}
