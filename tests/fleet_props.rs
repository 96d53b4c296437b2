use naval_battle::fleet::{check_fleet, is_in_bounds};
use naval_battle::{Board, FleetConfig, FleetGenerator};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

#[test]
fn default_fleets_are_always_legal() {
    let generator = FleetGenerator::new(FleetConfig::default()).unwrap();
    let mut rng = SmallRng::seed_from_u64(2024);
    for _ in 0..10_000 {
        let ships = generator.generate(&mut rng);
        assert_eq!(ships.len(), 5);
        check_fleet(&ships, 10, 10).unwrap();
    }
}

#[test]
fn generated_counts_follow_config() {
    let config = FleetConfig::new(12, 8)
        .with_ships(1, 3)
        .with_ships(2, 2)
        .with_ships(4, 1);
    let generator = FleetGenerator::new(config).unwrap();
    let mut rng = SmallRng::seed_from_u64(5);
    let ships = generator.generate(&mut rng);
    let count = |len| ships.iter().filter(|s| s.len() == len).count();
    assert_eq!((count(1), count(2), count(4)), (3, 2, 1));
    assert!(ships.iter().all(|s| is_in_bounds(s, 12, 8)));
    assert!(Board::new(ships, 12, 8).is_ok());
}

#[test]
fn different_seeds_give_different_fleets() {
    let generator = FleetGenerator::new(FleetConfig::default()).unwrap();
    let a = generator.generate(&mut SmallRng::seed_from_u64(1));
    let b = generator.generate(&mut SmallRng::seed_from_u64(2));
    let same_seed = generator.generate(&mut SmallRng::seed_from_u64(1));
    assert_ne!(a, b);
    assert_eq!(a, same_seed);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn roomy_fleets_are_legal(
        seed in any::<u64>(),
        width in 8usize..=14,
        height in 8usize..=14,
        singles in 0usize..=3,
        pairs in 0usize..=2,
        triples in 0usize..=2,
    ) {
        let config = FleetConfig::new(width, height)
            .with_ships(1, singles)
            .with_ships(2, pairs)
            .with_ships(3, triples)
            .with_ships(5, 1);
        let generator = FleetGenerator::new(config.clone()).unwrap();
        let mut rng = SmallRng::seed_from_u64(seed);
        let ships = generator.generate(&mut rng);
        prop_assert_eq!(ships.len(), config.ship_count());
        prop_assert!(check_fleet(&ships, width, height).is_ok());
    }
}
