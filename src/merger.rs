//! Incremental merging of occupied cells into ships.

use alloc::vec::Vec;
use core::cmp::Reverse;
use log::trace;

use crate::coord::Coordinate;
use crate::lookup::{NeighborLookup, SpatialIndex};
use crate::ship::{Fleet, ShipId};

/// Builds ships one cell at a time.
///
/// After every [`insert`](Self::insert) no two live ships touch each other:
/// a cell that borders several ships fuses all of them into one.
#[derive(Debug, Clone, Default)]
pub struct ShipMerger<L: NeighborLookup = SpatialIndex> {
    fleet: Fleet,
    lookup: L,
    cells: usize,
}

impl<L: NeighborLookup> ShipMerger<L> {
    pub fn new() -> Self {
        Self {
            fleet: Fleet::new(),
            lookup: L::default(),
            cells: 0,
        }
    }

    /// Add one occupied cell and return the ship that now holds it.
    ///
    /// Re-inserting a cell that is already part of a ship changes nothing.
    pub fn insert(&mut self, coord: Coordinate) -> Option<ShipId> {
        if self.lookup.is_known(&self.fleet, coord) {
            return None;
        }
        let touching = self.lookup.adjacent_ships(&self.fleet, coord);

        // The largest neighbour survives so the fewest cells get relabelled.
        let keeper = touching.iter().copied().max_by_key(|&id| {
            let size = self.fleet.get(id).map_or(0, |ship| ship.len());
            (size, Reverse(id))
        });

        let id = match keeper {
            None => self.fleet.launch(coord),
            Some(keeper) => {
                for &other in touching.iter().filter(|&&other| other != keeper) {
                    if let Some(moved) = self.fleet.absorb(keeper, other) {
                        for &cell in moved {
                            self.lookup.assign(cell, keeper);
                        }
                    }
                }
                self.fleet.enlist(keeper, coord);
                if touching.len() > 1 {
                    trace!("{:?} fused {} ships into {:?}", coord, touching.len(), keeper);
                }
                keeper
            }
        };
        self.lookup.assign(coord, id);
        self.cells += 1;
        Some(id)
    }

    /// Distinct cells inserted so far.
    pub fn cell_count(&self) -> usize {
        self.cells
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn into_fleet(self) -> Fleet {
        self.fleet
    }

    /// Canonical partition of the inserted cells; see [`Fleet::partition`].
    pub fn partition(&self) -> Vec<Vec<Coordinate>> {
        self.fleet.partition()
    }
}

/// Inserts cells in iteration order.
impl<L: NeighborLookup> Extend<Coordinate> for ShipMerger<L> {
    fn extend<I: IntoIterator<Item = Coordinate>>(&mut self, iter: I) {
        for coord in iter {
            self.insert(coord);
        }
    }
}

impl<L: NeighborLookup> FromIterator<Coordinate> for ShipMerger<L> {
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        let mut merger = Self::new();
        merger.extend(iter);
        merger
    }
}

/// Merge `coords` with the default spatial index and return the final fleet.
pub fn merge_ships<I: IntoIterator<Item = Coordinate>>(coords: I) -> Fleet {
    coords.into_iter().collect::<ShipMerger>().into_fleet()
}
