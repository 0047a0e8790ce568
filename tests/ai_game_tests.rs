use std::collections::VecDeque;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    Actor, AutomatedActor, Board, BoardError, Coordinate, FireOutcome, FleetError,
    FleetGenerator, Match, MatchStatus, Observer, Orientation, Ship, Side, NUM_SHIPS,
};

/// Actor firing at a fixed list of targets.
struct Scripted(VecDeque<Coordinate>);

impl Actor for Scripted {
    fn choose_target(&mut self, _own: &Board, _opponent: &Board) -> anyhow::Result<Coordinate> {
        self.0
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("script exhausted"))
    }
}

#[derive(Default)]
struct Recorder {
    shots: Vec<(Side, Coordinate, Result<FireOutcome, BoardError>)>,
    finished: Option<Side>,
}

impl Observer for Recorder {
    fn shot(&mut self, side: Side, target: Coordinate, result: &Result<FireOutcome, BoardError>) {
        self.shots.push((side, target, result.clone()));
    }

    fn finished(&mut self, winner: Side, _game: &Match) {
        self.finished = Some(winner);
    }
}

fn boards(seed: u64) -> (Board, Board) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let generator = FleetGenerator::new();
    (
        generator.generate(&mut rng).unwrap(),
        generator.generate(&mut rng).unwrap(),
    )
}

fn ship_cells(board: &Board) -> VecDeque<Coordinate> {
    board.ships().iter().flat_map(|s| s.occupied_cells()).collect()
}

fn water_cell(board: &Board) -> Coordinate {
    (0..6)
        .flat_map(|r| (0..6).map(move |c| Coordinate::new(r, c)))
        .find(|&c| !board.ships().iter().any(|s| s.occupies(c)))
        .unwrap()
}

#[test]
fn test_ai_vs_ai_game() {
    let mut rng = SmallRng::seed_from_u64(123);
    let p1 = AutomatedActor::new(SmallRng::seed_from_u64(1));
    let p2 = AutomatedActor::new(SmallRng::seed_from_u64(2));
    let mut game = Match::generate(&mut rng, Box::new(p1), Box::new(p2)).unwrap();
    assert!(game.board(Side::Automated).hidden());
    assert!(!game.board(Side::Human).hidden());

    let mut recorder = Recorder::default();
    let winner = game.run(&mut recorder).unwrap();

    let loser = winner.opponent();
    assert_eq!(game.board(loser).destroyed_count(), NUM_SHIPS);
    assert!(game.board(winner).destroyed_count() < NUM_SHIPS);
    assert_eq!(game.status(), MatchStatus::Finished { loser });
    assert_eq!(game.winner(), Some(winner));
    assert_eq!(recorder.finished, Some(winner));
    let accepted = recorder.shots.iter().filter(|(_, _, r)| r.is_ok()).count();
    assert_eq!(accepted, game.shots());
    // at most one accepted shot per cell per board
    assert!(game.shots() <= 2 * 36);
}

#[test]
fn test_hits_keep_the_turn() {
    let (human_board, automated_board) = boards(5);
    let targets = ship_cells(&automated_board);
    let mut game = Match::new(
        Box::new(Scripted(targets)),
        human_board,
        Box::new(Scripted(VecDeque::new())),
        automated_board,
    )
    .unwrap();
    let mut recorder = Recorder::default();
    let winner = game.run(&mut recorder).unwrap();

    assert_eq!(winner, Side::Human);
    assert_eq!(game.shots(), 10);
    assert!(recorder.shots.iter().all(|(side, _, _)| *side == Side::Human));
    let sinkings = recorder
        .shots
        .iter()
        .filter(|(_, _, r)| *r == Ok(FireOutcome::Sunk))
        .count();
    assert_eq!(sinkings, NUM_SHIPS);
}

#[test]
fn test_miss_passes_the_turn() {
    let (human_board, automated_board) = boards(9);
    let miss = water_cell(&automated_board);
    let reply = water_cell(&human_board);
    let mut game = Match::new(
        Box::new(Scripted(VecDeque::from([miss]))),
        human_board,
        Box::new(Scripted(VecDeque::from([reply]))),
        automated_board,
    )
    .unwrap();
    assert_eq!(game.active(), Side::Human);
    assert_eq!(game.play_shot(&mut ()).unwrap(), MatchStatus::InProgress);
    assert_eq!(game.active(), Side::Automated);
    game.play_shot(&mut ()).unwrap();
    assert_eq!(game.active(), Side::Human);
    assert_eq!(game.shots(), 2);
}

#[test]
fn test_rejected_targets_retried_same_turn() {
    let (human_board, automated_board) = boards(11);
    let miss = water_cell(&automated_board);
    let script = VecDeque::from([Coordinate::new(-1, 0), Coordinate::new(0, 6), miss]);
    let mut game = Match::new(
        Box::new(Scripted(script)),
        human_board,
        Box::new(Scripted(VecDeque::new())),
        automated_board,
    )
    .unwrap();
    let mut recorder = Recorder::default();
    game.play_shot(&mut recorder).unwrap();
    let results: Vec<_> = recorder.shots.iter().map(|(_, _, r)| r.clone()).collect();
    assert_eq!(
        results,
        vec![
            Err(BoardError::OutOfBounds),
            Err(BoardError::OutOfBounds),
            Ok(FireOutcome::Miss)
        ]
    );
    assert_eq!(game.shots(), 1);
    assert_eq!(game.active(), Side::Automated);
}

#[test]
fn test_actor_error_ends_match() {
    let (human_board, automated_board) = boards(13);
    let mut game = Match::new(
        Box::new(Scripted(VecDeque::new())),
        human_board,
        Box::new(Scripted(VecDeque::new())),
        automated_board,
    )
    .unwrap();
    assert!(game.run(&mut ()).is_err());
    assert_eq!(game.status(), MatchStatus::InProgress);
}

#[test]
fn test_partial_fleet_rejected() {
    let lone_ship = || {
        let mut board = Board::new(false);
        board
            .place_ship(Ship::new(1, Coordinate::new(0, 0), Orientation::Horizontal))
            .unwrap();
        board
    };
    let (full, _) = boards(17);
    let result = Match::new(
        Box::new(AutomatedActor::new(SmallRng::seed_from_u64(1))),
        lone_ship(),
        Box::new(AutomatedActor::new(SmallRng::seed_from_u64(2))),
        full.clone(),
    );
    assert_eq!(result.err(), Some(FleetError::Incomplete { ships: 1 }));

    let result = Match::new(
        Box::new(AutomatedActor::new(SmallRng::seed_from_u64(1))),
        full,
        Box::new(AutomatedActor::new(SmallRng::seed_from_u64(2))),
        Board::new(false),
    );
    assert_eq!(result.err(), Some(FleetError::Incomplete { ships: 0 }));
}

#[test]
fn test_wrong_fleet_lengths_rejected() {
    // seven single-cell ships: right count, wrong composition
    let mut board = Board::new(false);
    for (row, col) in [(0, 0), (0, 2), (0, 4), (2, 0), (2, 2), (2, 4), (4, 0)] {
        board
            .place_ship(Ship::new(1, Coordinate::new(row, col), Orientation::Vertical))
            .unwrap();
    }
    let (_, full) = boards(19);
    let result = Match::new(
        Box::new(Scripted(VecDeque::new())),
        board,
        Box::new(Scripted(VecDeque::new())),
        full,
    );
    assert_eq!(result.err(), Some(FleetError::Incomplete { ships: 7 }));
}
