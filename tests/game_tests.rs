use naval_battle::{
    AiPlayer, AttackResult, Board, FleetConfig, GameEngine, GameStatus, Player, RandomPlayer,
    Ship, Side,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn random_side(name: &str, rng: &mut SmallRng, player: Box<dyn Player>) -> Side {
    let board = Board::random(rng, &FleetConfig::default()).unwrap();
    Side::new(name, board, player)
}

#[test]
fn test_ai_vs_random_game() {
    let mut rng = SmallRng::seed_from_u64(123);
    let first = random_side("alice", &mut rng, Box::new(AiPlayer::new(10, 10)));
    let second = random_side("bob", &mut rng, Box::new(RandomPlayer::new(10, 10)));
    let mut engine = GameEngine::new(first, second);
    assert_eq!(engine.status(), GameStatus::InProgress);

    let summary = engine.run(&mut rng).unwrap();
    assert_eq!(engine.status(), GameStatus::Won(summary.winner));
    assert!(engine.side(1 - summary.winner).has_lost());
    assert!(!engine.side(summary.winner).has_lost());
    assert_eq!(engine.side(summary.winner).name(), summary.winner_name);
    assert!(summary.attacks.iter().all(|&n| n <= 100));
    // sides alternate, first side never falls behind
    assert!(summary.attacks[0] == summary.attacks[1] || summary.attacks[0] == summary.attacks[1] + 1);

    assert!(engine.play_turn(&mut rng).unwrap().is_none());
}

#[test]
fn test_turns_alternate() {
    let mut rng = SmallRng::seed_from_u64(9);
    let first = random_side("alice", &mut rng, Box::new(RandomPlayer::new(10, 10)));
    let second = random_side("bob", &mut rng, Box::new(AiPlayer::new(10, 10)));
    let mut engine = GameEngine::new(first, second);
    for expected in [0, 1, 0, 1] {
        assert_eq!(engine.current(), expected);
        let report = engine.play_turn(&mut rng).unwrap().unwrap();
        assert_eq!(report.attacker, expected);
    }
}

#[test]
fn test_single_ship_game_scenario() {
    let mut rng = SmallRng::seed_from_u64(77);
    let first = random_side("hunter", &mut rng, Box::new(AiPlayer::new(10, 10)));
    let target = Board::new(vec![Ship::new((3, 3), (3, 5)).unwrap()], 10, 10).unwrap();
    let second = Side::new("target", target, Box::new(RandomPlayer::new(10, 10)));
    let mut engine = GameEngine::new(first, second);

    let mut hits = Vec::new();
    while let Some(report) = engine.play_turn(&mut rng).unwrap() {
        if report.attacker == 0 && report.result.is_hit() {
            hits.push(report);
        }
    }
    assert_eq!(engine.status(), GameStatus::Won(0));
    assert!(engine.side(1).has_lost());
    assert_eq!(hits.len(), 3);
    assert!(hits[..2].iter().all(|r| r.result == AttackResult::Hit));
    assert_eq!(hits[2].result, AttackResult::Sunk);
}

#[test]
fn test_ai_beats_random_most_of_the_time() {
    let mut ai_wins = 0;
    for seed in 0..200u64 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let first = random_side("ai", &mut rng, Box::new(AiPlayer::new(10, 10)));
        let second = random_side("random", &mut rng, Box::new(RandomPlayer::new(10, 10)));
        let summary = GameEngine::new(first, second).run(&mut rng).unwrap();
        if summary.winner == 0 {
            ai_wins += 1;
        }
    }
    assert!(ai_wins > 150, "ai won only {} of 200", ai_wins);
}

#[test]
fn test_run_on_finished_game_reports_same_winner() {
    let mut rng = SmallRng::seed_from_u64(31);
    let first = random_side("alice", &mut rng, Box::new(AiPlayer::new(10, 10)));
    let second = random_side("bob", &mut rng, Box::new(AiPlayer::new(10, 10)));
    let mut engine = GameEngine::new(first, second);
    let summary = engine.run(&mut rng).unwrap();
    let again = engine.run(&mut rng).unwrap();
    assert_eq!(summary, again);
}
