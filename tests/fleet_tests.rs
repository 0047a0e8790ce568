use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    random_ship, Board, Cell, FleetError, FleetGenerator, BOARD_SIZE, FLEET, NUM_SHIPS,
    TOTAL_SHIP_CELLS,
};

#[test]
fn test_generated_fleet_complete() {
    let mut rng = SmallRng::seed_from_u64(42);
    let board = FleetGenerator::new().generate(&mut rng).unwrap();
    assert_eq!(board.ships().len(), NUM_SHIPS);
    let lengths: Vec<_> = board.ships().iter().map(|s| s.length()).collect();
    assert_eq!(lengths, FLEET.to_vec());
    let ship_cells = board
        .grid()
        .iter()
        .flatten()
        .filter(|&&c| c == Cell::Ship)
        .count();
    assert_eq!(ship_cells, TOTAL_SHIP_CELLS);
    assert!(board.fired_upon().is_empty());
    assert_eq!(board.destroyed_count(), 0);
}

#[test]
fn test_same_seed_same_layout() {
    let generator = FleetGenerator::new();
    let a = generator.generate(&mut SmallRng::seed_from_u64(7)).unwrap();
    let b = generator.generate(&mut SmallRng::seed_from_u64(7)).unwrap();
    assert_eq!(a.grid(), b.grid());
    assert_eq!(a.ships(), b.ships());
}

#[test]
fn test_budget_exhausted() {
    let mut rng = SmallRng::seed_from_u64(1);
    // seven ships can never fit in six attempts
    let generator = FleetGenerator::with_limits(6, 3);
    assert_eq!(
        generator.try_generate(&mut rng).unwrap_err(),
        FleetError::Exhausted { attempts: 6 }
    );
    assert_eq!(
        generator.generate(&mut rng).unwrap_err(),
        FleetError::GaveUp { boards: 3 }
    );
}

#[test]
fn test_random_ship_on_grid_origin() {
    let mut rng = SmallRng::seed_from_u64(99);
    for _ in 0..500 {
        let ship = random_ship(&mut rng, 2);
        let origin = ship.origin();
        assert!((0..BOARD_SIZE as i32).contains(&origin.row));
        assert!((0..BOARD_SIZE as i32).contains(&origin.col));
        assert_eq!(ship.remaining_hp(), 2);
    }
}

#[test]
fn test_generated_board_default_visible() {
    let mut rng = SmallRng::seed_from_u64(3);
    let board: Board = FleetGenerator::default().generate(&mut rng).unwrap();
    assert!(!board.hidden());
}
