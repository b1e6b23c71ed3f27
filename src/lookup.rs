//! Strategies for finding which ships touch a newly inserted cell.
//!
//! [`SpatialIndex`] is what the merger uses by default: it keeps a
//! row → column → ship map and probes only the four orthogonal neighbours,
//! so a whole pass is linear in the number of occupied cells.
//! [`PairwiseScan`] walks every known cell instead. It is quadratic and is
//! kept as a reference to check the index against.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::coord::Coordinate;
use crate::ship::{Fleet, ShipId};

/// Adjacent-ship lookup given a coordinate.
pub trait NeighborLookup: Default {
    /// Live ships with at least one cell adjacent to `coord`, without duplicates.
    fn adjacent_ships(&self, fleet: &Fleet, coord: Coordinate) -> Vec<ShipId>;

    /// Record that `coord` now belongs to `ship`, replacing any earlier owner.
    fn assign(&mut self, coord: Coordinate, ship: ShipId);

    /// Returns `true` if `coord` is already part of some ship.
    fn is_known(&self, fleet: &Fleet, coord: Coordinate) -> bool;
}

/// Brute-force lookup: distance check against every cell of every ship.
#[derive(Debug, Clone, Copy, Default)]
pub struct PairwiseScan;

impl NeighborLookup for PairwiseScan {
    fn adjacent_ships(&self, fleet: &Fleet, coord: Coordinate) -> Vec<ShipId> {
        fleet
            .iter()
            .filter(|(_, ship)| ship.is_adjacent_to(coord))
            .map(|(id, _)| id)
            .collect()
    }

    fn assign(&mut self, _coord: Coordinate, _ship: ShipId) {}

    fn is_known(&self, fleet: &Fleet, coord: Coordinate) -> bool {
        fleet.ships().any(|ship| ship.contains(coord))
    }
}

/// Two-level row/column map from occupied cell to owning ship.
#[derive(Debug, Clone, Default)]
pub struct SpatialIndex {
    rows: BTreeMap<usize, BTreeMap<usize, ShipId>>,
}

impl SpatialIndex {
    /// Owner of `coord`, if it has been assigned.
    pub fn owner(&self, coord: Coordinate) -> Option<ShipId> {
        self.rows.get(&coord.row)?.get(&coord.col).copied()
    }

    /// Number of indexed cells.
    pub fn len(&self) -> usize {
        self.rows.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl NeighborLookup for SpatialIndex {
    fn adjacent_ships(&self, _fleet: &Fleet, coord: Coordinate) -> Vec<ShipId> {
        let mut found: Vec<ShipId> = Vec::with_capacity(4);
        for id in coord.neighbors().filter_map(|n| self.owner(n)) {
            if !found.contains(&id) {
                found.push(id);
            }
        }
        found
    }

    fn assign(&mut self, coord: Coordinate, ship: ShipId) {
        self.rows.entry(coord.row).or_default().insert(coord.col, ship);
    }

    fn is_known(&self, _fleet: &Fleet, coord: Coordinate) -> bool {
        self.owner(coord).is_some()
    }
}
