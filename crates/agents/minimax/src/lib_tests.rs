use super::*;
use isolation_core::Player;

fn open_board() -> Board {
    let mut board = Board::new(5, 5);
    board.place_player(Player::One, 2, 2);
    board.place_player(Player::Two, 0, 0);
    board
}

#[test]
fn construction_fails_fast_on_bad_config() {
    let mut config = SearchConfig::default();
    config.search_depth = 0;
    assert!(SearchAgent::new(config).is_err());

    let mut config = SearchConfig::default();
    config.timeout_ms = 0.0;
    assert!(SearchAgent::new(config).is_err());
}

#[test]
fn empty_legal_moves_short_circuits_without_searching() {
    let board = open_board();
    // A search would probe the clock; an empty move list must not.
    let probe = || -> f64 { panic!("probe consulted with no legal moves") };
    let budget = TimeBudget::new(&probe, 10.0);

    let mut agent = SearchAgent::default();
    let chosen = agent.choose_move(&board, &[], &budget);
    assert_eq!(chosen, Move::NONE);
    assert_eq!(agent.nodes(), 0);
}

#[test]
fn expired_clock_on_first_check_returns_the_sentinel() {
    let board = open_board();
    let probe = || 1.0;
    let budget = TimeBudget::new(&probe, 10.0);

    let mut agent = SearchAgent::default();
    let legal = board.active_legal_moves();
    let chosen = agent.choose_move(&board, &legal, &budget);
    assert_eq!(chosen, Move::NONE);
}

#[test]
fn fixed_depth_agent_matches_a_direct_search() {
    let board = open_board();
    let probe = || f64::INFINITY;
    let budget = TimeBudget::new(&probe, 10.0);

    let mut config = SearchConfig::default();
    config.iterative = false;
    config.search_depth = 3;
    let mut agent = SearchAgent::new(config).expect("valid config");

    let legal = board.active_legal_moves();
    let chosen = agent.choose_move(&board, &legal, &budget);
    assert!(agent.nodes() > 0);

    let direct = agent.search(&board, 3, &budget).expect("no timeout");
    assert_eq!(Some(chosen), direct.best_move);
}

#[test]
fn iterative_without_timeout_matches_final_fixed_depth() {
    // Small board so the deepening cap (blank cells) is quickly reached.
    let mut board = Board::new(3, 3);
    board.place_player(Player::One, 0, 2);
    board.place_player(Player::Two, 2, 0);
    let probe = || f64::INFINITY;
    let budget = TimeBudget::new(&probe, 10.0);
    let legal = board.active_legal_moves();

    let mut iterative = SearchAgent::default();
    let deepened = iterative.choose_move(&board, &legal, &budget);

    let mut config = SearchConfig::default();
    config.iterative = false;
    config.search_depth = board.blank_spaces();
    let mut fixed = SearchAgent::new(config).expect("valid config");
    let single = fixed.choose_move(&board, &legal, &budget);

    assert_eq!(deepened, single);
    assert!(!deepened.is_none());
}

#[test]
fn deepening_agent_plays_on_in_a_lost_position() {
    // Every line from this 3x3 position loses for player one, and the
    // deepening loop reaches depths that prove it. The agent must still
    // play a legal move instead of forfeiting with the sentinel.
    let mut board = Board::new(3, 3);
    board.place_player(Player::One, 0, 2);
    board.place_player(Player::Two, 2, 0);
    let legal = board.active_legal_moves();

    let probe = || f64::INFINITY;
    let budget = TimeBudget::new(&probe, 10.0);

    let mut agent = SearchAgent::default();
    let chosen = agent.choose_move(&board, &legal, &budget);
    assert!(legal.contains(&chosen));
}

#[test]
fn live_clock_interrupts_but_still_answers_in_time() {
    use isolation_core::MoveClock;
    use std::time::Duration;

    let mut board = Board::new(9, 9);
    board.place_player(Player::One, 4, 4);
    board.place_player(Player::Two, 0, 0);
    let legal = board.active_legal_moves();

    let clock = MoveClock::start(Duration::from_millis(60));
    let probe = || clock.time_left_ms();
    let budget = TimeBudget::new(&probe, 15.0);

    // Iterative deepening on a 9x9 board cannot finish inside 60ms; the
    // driver must hand back the last completed depth with time to spare.
    let mut agent = SearchAgent::default();
    let chosen = agent.choose_move(&board, &legal, &budget);
    assert!(clock.time_left_ms() > 0.0);
    assert!(chosen.is_none() || legal.contains(&chosen));
    assert!(agent.nodes() > 0);
}

#[test]
fn both_methods_return_a_legal_move() {
    let board = open_board();
    let probe = || f64::INFINITY;
    let budget = TimeBudget::new(&probe, 10.0);
    let legal = board.active_legal_moves();

    for method in [SearchMethod::Minimax, SearchMethod::Alphabeta] {
        let mut config = SearchConfig::default();
        config.method = method;
        let mut agent = SearchAgent::new(config).expect("valid config");
        let chosen = agent.choose_move(&board, &legal, &budget);
        assert!(legal.contains(&chosen), "{method:?} chose {chosen:?}");
    }
}
