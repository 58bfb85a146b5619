//! Tests for the engine driven by explicit wake-up scripts.

use botmatch::{
    BoardView, Coordinate, Engine, Game, MoveRejected, Renderer, Role, Status, Step, Symbol, Wake,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    Players(Symbol, Symbol),
    Board(BoardView),
    Result(Status),
    Clear,
}

#[derive(Debug, Default)]
struct Log(Vec<Call>);

impl Renderer for Log {
    fn render_players(&mut self, automated: Symbol, human: Symbol) {
        self.0.push(Call::Players(automated, human));
    }

    fn render_board(&mut self, board: &BoardView) {
        self.0.push(Call::Board(*board));
    }

    fn render_result(&mut self, status: Status) {
        self.0.push(Call::Result(status));
    }

    fn clear_result(&mut self) {
        self.0.push(Call::Clear);
    }
}

fn at(row: u8, col: u8) -> Coordinate {
    Coordinate::new(row, col).unwrap()
}

#[test]
fn test_start_sequence() {
    let mut engine = Engine::with_game(
        Game::with_starter(Role::Automated),
        Log::default(),
        StdRng::seed_from_u64(0),
    );
    engine.start();

    let calls = &engine.renderer().0;
    assert_eq!(calls[0], Call::Players(Symbol::X, Symbol::O));
    assert_eq!(calls[1], Call::Clear);
    assert!(matches!(calls[2], Call::Board(b) if b.open_cells().count() == 0));
}

#[test]
fn test_script_alternates_turns() {
    let mut engine = Engine::with_game(
        Game::with_starter(Role::Human),
        Log::default(),
        StdRng::seed_from_u64(8),
    );

    let steps = engine.run([
        Wake::HumanMove(at(1, 1)),
        Wake::HumanMove(at(0, 0)),
        Wake::TimerElapsed,
        Wake::TimerElapsed,
    ]);

    assert!(matches!(steps[0], Step::Moved { role: Role::Human, .. }));
    assert_eq!(
        steps[1],
        Step::Ignored(MoveRejected::NotYourTurn(Role::Human))
    );
    assert!(matches!(steps[2], Step::Moved { role: Role::Automated, .. }));
    assert_eq!(
        steps[3],
        Step::Ignored(MoveRejected::NotYourTurn(Role::Automated))
    );
    assert_eq!(engine.game().players().total_claimed(), 2);
}

#[test]
fn test_reset_discards_outcome() {
    let moves = [at(1, 0), at(0, 0), at(1, 1), at(0, 1), at(1, 2)];
    let game = Game::replay(Role::Automated, &moves).unwrap();
    assert_eq!(game.status(), Status::AutomatedWon);

    let mut engine = Engine::with_game(game, Log::default(), StdRng::seed_from_u64(4));
    assert_eq!(engine.step(Wake::Reset), Step::Reset);

    assert_eq!(engine.game().status(), Status::InProgress);
    assert_eq!(engine.game().players().total_claimed(), 0);
    assert!(matches!(engine.renderer().0[0], Call::Players(..)));
}

#[test]
fn test_result_rendered_once_on_terminal_move() {
    let moves = [at(1, 0), at(0, 0), at(1, 1), at(0, 1)];
    let game = Game::replay(Role::Automated, &moves).unwrap();
    let mut engine = Engine::with_game(game, Log::default(), StdRng::seed_from_u64(0));

    // The bot picks at random; keep ticking until the game ends.
    while !engine.game().is_ended() {
        if engine.awaits_timer() {
            engine.step(Wake::TimerElapsed);
        } else {
            let open = engine.game().board().open_cells().next().unwrap();
            engine.step(Wake::HumanMove(open));
        }
    }

    let results: Vec<_> = engine
        .renderer()
        .0
        .iter()
        .filter(|c| matches!(c, Call::Result(_)))
        .collect();
    assert_eq!(results, vec![&Call::Result(engine.game().status())]);
    assert_eq!(engine.renderer().0.last(), Some(&Call::Result(engine.game().status())));
}
