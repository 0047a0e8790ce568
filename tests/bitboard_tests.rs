use seabattle::{BitBoard, CellSet, Coordinate};

#[test]
fn test_insert_reports_fresh_cells() {
    let mut set = CellSet::new();
    assert!(set.insert(Coordinate::new(1, 2)));
    assert!(!set.insert(Coordinate::new(1, 2)));
    assert!(set.contains(Coordinate::new(1, 2)));
    assert!(!set.contains(Coordinate::new(2, 1)));
    assert_eq!(set.count_ones(), 1);
    set.clear_all();
    assert!(set.is_empty());
}

#[test]
fn test_off_grid_cells_ignored() {
    let mut set = CellSet::new();
    assert!(!set.insert(Coordinate::new(6, 0)));
    assert!(!set.insert(Coordinate::new(0, -1)));
    assert!(set.is_empty());
    assert!(!set.contains(Coordinate::new(-1, 3)));
    assert!(CellSet::in_bounds(Coordinate::new(5, 5)));
    assert!(!CellSet::in_bounds(Coordinate::new(5, 6)));
}

#[test]
fn test_corner_cells_distinct() {
    let mut set = BitBoard::<u16, 4>::new();
    assert!(set.insert(Coordinate::new(0, 0)));
    assert!(set.insert(Coordinate::new(3, 3)));
    assert!(set.insert(Coordinate::new(0, 3)));
    assert_eq!(set.count_ones(), 3);
    assert!(!set.contains(Coordinate::new(3, 0)));
    assert_eq!(set, {
        let mut other = BitBoard::<u16, 4>::default();
        other.insert(Coordinate::new(0, 3));
        other.insert(Coordinate::new(3, 3));
        other.insert(Coordinate::new(0, 0));
        other
    });
}
