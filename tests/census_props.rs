use std::collections::BTreeSet;

use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use shipcount::{
    extract_coordinates, Coordinate, OversizePolicy, PairwiseScan, ShipMerger, ShipRegistry,
    SpatialIndex,
};

fn random_rows(seed: u64) -> Vec<String> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let height = rng.random_range(0..12);
    (0..height)
        .map(|_| {
            let width = rng.random_range(0..12);
            (0..width)
                .map(|_| if rng.random_bool(0.45) { '#' } else { '.' })
                .collect()
        })
        .collect()
}

fn rows_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[#.]{0,10}", 0..10)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Every occupied cell ends up in exactly one ship.
    #[test]
    fn ships_partition_occupied_cells(rows in rows_strategy()) {
        let coords = extract_coordinates(&rows, '#');
        let merger: ShipMerger = coords.iter().copied().collect();
        let mut seen: Vec<Coordinate> = merger.fleet().ships().flat_map(|s| s.coordinates().to_vec()).collect();
        seen.sort_unstable();
        prop_assert_eq!(seen, coords);
        prop_assert!(merger.fleet().ships().all(|s| !s.is_empty()));
    }

    /// No cell of one ship touches a cell of another.
    #[test]
    fn final_ships_do_not_touch(seed in any::<u64>()) {
        let rows = random_rows(seed);
        let merger: ShipMerger = extract_coordinates(&rows, '#').into_iter().collect();
        let ships: Vec<_> = merger.fleet().ships().collect();
        for (i, a) in ships.iter().enumerate() {
            for b in &ships[i + 1..] {
                for &cell in a.coordinates() {
                    prop_assert!(!b.is_adjacent_to(cell));
                }
            }
        }
    }

    /// Feeding cells in any order yields the same ships.
    #[test]
    fn insertion_order_does_not_matter(
        shuffled in rows_strategy().prop_flat_map(|rows| {
            let coords = extract_coordinates(&rows, '#');
            (Just(coords.clone()), Just(coords).prop_shuffle())
        })
    ) {
        let (ordered, permuted) = shuffled;
        let a: ShipMerger = ordered.into_iter().collect();
        let b: ShipMerger = permuted.into_iter().collect();
        prop_assert_eq!(a.partition(), b.partition());
    }

    /// The spatial index agrees with the brute-force scan.
    #[test]
    fn spatial_index_matches_pairwise_scan(seed in any::<u64>()) {
        let coords = extract_coordinates(random_rows(seed), '#');
        let spatial: ShipMerger<SpatialIndex> = coords.iter().copied().collect();
        let pairwise: ShipMerger<PairwiseScan> = coords.iter().copied().collect();
        prop_assert_eq!(spatial.partition(), pairwise.partition());
    }

    /// Ships are maximal: each one is a single orthogonally connected group.
    #[test]
    fn every_ship_is_connected(rows in rows_strategy()) {
        let merger: ShipMerger = extract_coordinates(&rows, '#').into_iter().collect();
        for ship in merger.fleet().ships() {
            let cells: BTreeSet<Coordinate> = ship.coordinates().iter().copied().collect();
            let mut reached = BTreeSet::new();
            let mut stack = vec![ship.coordinates()[0]];
            while let Some(cell) = stack.pop() {
                if reached.insert(cell) {
                    stack.extend(cell.neighbors().filter(|n| cells.contains(n)));
                }
            }
            prop_assert_eq!(reached, cells);
        }
    }

    /// Tabulating twice gives the same counts, and clamping never loses a ship.
    #[test]
    fn tabulation_is_repeatable(seed in any::<u64>()) {
        let merger: ShipMerger = extract_coordinates(random_rows(seed), '#').into_iter().collect();
        let first = ShipRegistry::<3>::tabulate(merger.fleet(), OversizePolicy::Clamp).unwrap();
        let second = ShipRegistry::<3>::tabulate(merger.fleet(), OversizePolicy::Clamp).unwrap();
        prop_assert_eq!(first, second);
        prop_assert_eq!(first.total(), merger.fleet().len());

        let oversized = merger.fleet().ships().any(|s| s.len() > 3);
        let rejected = ShipRegistry::<3>::tabulate(merger.fleet(), OversizePolicy::Reject);
        prop_assert_eq!(rejected.is_err(), oversized);
        if let Ok(strict) = rejected {
            prop_assert_eq!(strict, first);
        }
    }
}
