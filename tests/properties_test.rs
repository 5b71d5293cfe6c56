//! Property tests over arbitrary move sequences.

use proptest::prelude::*;
use tictactoe_rounds::{
    GameEngine, GameStatus, InvariantSet, Player, Position, RoundInvariants, rules,
};

fn position() -> impl Strategy<Value = Position> {
    (0usize..9).prop_map(|i| Position::from_index(i).unwrap())
}

/// Either a move or a reset.
#[derive(Debug, Clone, Copy)]
enum Action {
    Move(Position),
    Reset,
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        9 => position().prop_map(Action::Move),
        1 => Just(Action::Reset),
    ]
}

proptest! {
    #[test]
    fn marks_stay_balanced(moves in prop::collection::vec(position(), 0..30)) {
        let mut engine = GameEngine::new();
        for pos in moves {
            engine.apply_move(pos);
            let board = engine.state().board();
            let (x, o) = (board.count(Player::X), board.count(Player::O));
            prop_assert!(x == o || x == o + 1);
            prop_assert!(RoundInvariants::check_all(engine.state()).is_ok());
        }
    }

    #[test]
    fn rejected_moves_change_nothing(moves in prop::collection::vec(position(), 0..30)) {
        let mut engine = GameEngine::new();
        for pos in moves {
            let before = engine.snapshot();
            let result = engine.apply_move(pos);
            if result.rejection().is_some() {
                prop_assert_eq!(engine.snapshot(), before.clone());
                prop_assert_eq!(result.state(), before.state());
            } else {
                prop_assert_eq!(result.state(), engine.state());
            }
        }
    }

    #[test]
    fn status_matches_rules(moves in prop::collection::vec(position(), 0..30)) {
        let mut engine = GameEngine::new();
        let mut concluded = false;
        for pos in moves {
            let result = engine.apply_move(pos);
            let status = engine.state().status();

            // Once concluded, a round never goes back to InProgress.
            prop_assert!(!(concluded && status == GameStatus::InProgress));
            concluded = status.is_over();

            prop_assert_eq!(status, rules::evaluate(engine.state().board()));
            prop_assert_eq!(result.outcome(), if result.is_accepted() { status.outcome() } else { None });
        }
    }

    #[test]
    fn reset_round_trips_and_score_never_decreases(
        actions in prop::collection::vec(action(), 0..60)
    ) {
        let mut engine = GameEngine::new();
        let mut rounds = 0;
        for action in actions {
            let score_before = *engine.score();
            match action {
                Action::Move(pos) => {
                    if engine.apply_move(pos).outcome().is_some() {
                        rounds += 1;
                    }
                }
                Action::Reset => {
                    let fresh = engine.reset_round();
                    prop_assert_eq!(fresh.status(), GameStatus::InProgress);
                    prop_assert_eq!(fresh.current_player(), Player::X);
                    prop_assert_eq!(fresh.board().occupied(), 0);
                    prop_assert_eq!(engine.score(), &score_before);
                }
            }
            let score = engine.score();
            prop_assert!(score.wins(Player::X) >= score_before.wins(Player::X));
            prop_assert!(score.wins(Player::O) >= score_before.wins(Player::O));
            prop_assert!(score.draws() >= score_before.draws());
        }
        prop_assert_eq!(engine.score().rounds_played(), rounds);
    }
}
