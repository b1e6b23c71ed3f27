//! Extractor → merger → tabulator in one pass.

use log::debug;

use crate::common::CensusError;
use crate::config::{CensusConfig, SHIP_MAX_LENGTH};
use crate::extract::extract_coordinates;
use crate::lookup::{NeighborLookup, SpatialIndex};
use crate::merger::ShipMerger;
use crate::registry::ShipRegistry;

/// Count the ships in `rows` by size, using lookup strategy `L`.
pub fn census_with<const N: usize, L, I, S>(
    rows: I,
    config: &CensusConfig,
) -> Result<ShipRegistry<N>, CensusError>
where
    L: NeighborLookup,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let coords = extract_coordinates(rows, config.marker);
    let merger: ShipMerger<L> = coords.iter().copied().collect();
    debug!(
        "census: {} occupied cells, {} ships",
        coords.len(),
        merger.fleet().len()
    );
    ShipRegistry::tabulate(merger.fleet(), config.policy)
}

/// Count the ships in `rows` by size with the spatial index.
pub fn census<const N: usize, I, S>(
    rows: I,
    config: &CensusConfig,
) -> Result<ShipRegistry<N>, CensusError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    census_with::<N, SpatialIndex, I, S>(rows, config)
}

/// Reference entry point: `#` cells, sizes `1..=SHIP_MAX_LENGTH`, oversized ships rejected.
///
/// ```
/// assert_eq!(shipcount::solution(["#.", "##"]), Ok([0, 0, 1]));
/// ```
pub fn solution<I, S>(rows: I) -> Result<[usize; SHIP_MAX_LENGTH], CensusError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    census::<SHIP_MAX_LENGTH, I, S>(rows, &CensusConfig::default()).map(ShipRegistry::into_array)
}
