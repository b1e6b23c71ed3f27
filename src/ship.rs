//! Ships (connected groups of occupied cells) and the working fleet that owns them.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::coord::Coordinate;

/// Slot of a ship inside a [`Fleet`]. Only meaningful while that ship is alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShipId(usize);

impl ShipId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A non-empty set of coordinates known to be connected.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    coords: Vec<Coordinate>,
}

impl Ship {
    /// A one-cell ship.
    pub fn new(coord: Coordinate) -> Self {
        Ship { coords: vec![coord] }
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Member cells in the order they joined.
    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coords
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        self.coords.contains(&coord)
    }

    /// Returns `true` if any member shares an edge with `coord`.
    pub fn is_adjacent_to(&self, coord: Coordinate) -> bool {
        self.coords.iter().any(|c| c.is_adjacent(coord))
    }

    /// Member cells sorted row-major.
    pub fn sorted(&self) -> Vec<Coordinate> {
        let mut cells = self.coords.clone();
        cells.sort_unstable();
        cells
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ship {{ len: {}, cells: {:?} }}", self.len(), self.coords)
    }
}

/// Working set of ships during a merge pass.
///
/// Ships live in slots; a merged-away ship leaves an empty slot behind so
/// other ids stay valid.
#[derive(Clone, Default)]
pub struct Fleet {
    slots: Vec<Option<Ship>>,
    live: usize,
}

impl Fleet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new one-cell ship and return its id.
    pub fn launch(&mut self, coord: Coordinate) -> ShipId {
        self.slots.push(Some(Ship::new(coord)));
        self.live += 1;
        ShipId(self.slots.len() - 1)
    }

    /// Add `coord` to an existing ship. Returns `false` if `id` is not alive.
    pub fn enlist(&mut self, id: ShipId, coord: Coordinate) -> bool {
        match self.slots.get_mut(id.0) {
            Some(Some(ship)) => {
                ship.coords.push(coord);
                true
            }
            _ => false,
        }
    }

    /// Move every cell of `from` into `into` and retire `from`.
    ///
    /// Returns the moved cells, or `None` if either id is dead or both are the same ship.
    pub fn absorb(&mut self, into: ShipId, from: ShipId) -> Option<&[Coordinate]> {
        if into == from || self.get(into).is_none() {
            return None;
        }
        let taken = self.slots.get_mut(from.0)?.take()?;
        self.live -= 1;
        let ship = self.slots[into.0].as_mut()?;
        let start = ship.coords.len();
        ship.coords.extend(taken.coords);
        Some(&ship.coords[start..])
    }

    pub fn get(&self, id: ShipId) -> Option<&Ship> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    /// Number of live ships.
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Live ships with their ids, in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (ShipId, &Ship)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|ship| (ShipId(i), ship)))
    }

    /// Live ships only.
    pub fn ships(&self) -> impl Iterator<Item = &Ship> + '_ {
        self.slots.iter().flatten()
    }

    /// Canonical form: each ship sorted, ships sorted by their first cell.
    /// Two fleets describe the same partition iff their partitions are equal.
    pub fn partition(&self) -> Vec<Vec<Coordinate>> {
        let mut groups: Vec<Vec<Coordinate>> = self.ships().map(Ship::sorted).collect();
        groups.sort_unstable();
        groups
    }
}

impl fmt::Debug for Fleet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.ships()).finish()
    }
}
