use rand::rngs::StdRng;
use rand::SeedableRng;
use tic_tac_toe_game::{
    handle_command, Command, Frontend, Game, PlayerInfo, Seat, StartRequest, Status,
    ValidationError, LINES,
};

#[derive(Default)]
struct Recorder {
    cells: [Option<char>; 9],
    rebuilds: usize,
    messages: Vec<String>,
    errors: Vec<ValidationError>,
    scheduled: Vec<u64>,
}

impl Frontend for Recorder {
    fn update_cell(&mut self, index: usize, cell: Option<char>) {
        self.cells[index] = cell;
    }

    fn rebuild_board(&mut self) {
        self.cells = [None; 9];
        self.rebuilds += 1;
    }

    fn notify(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }

    fn report_error(&mut self, error: &ValidationError) {
        self.errors.push(error.clone());
    }

    fn schedule_computer_move(&mut self, token: u64) {
        self.scheduled.push(token);
    }
}

fn start_request(symbols: (char, char), vs_computer: bool) -> Command {
    Command::Start(StartRequest {
        player1: PlayerInfo::new("Alice", Some(symbols.0)),
        player2: PlayerInfo::new("Bob", Some(symbols.1)),
        vs_computer,
    })
}

struct Table {
    game: Game,
    ui: Recorder,
    rng: StdRng,
}

impl Table {
    fn new() -> Self {
        Table {
            game: Game::new(),
            ui: Recorder::default(),
            rng: StdRng::seed_from_u64(42),
        }
    }

    fn send(&mut self, command: Command) {
        handle_command(&mut self.game, command, &mut self.ui, &mut self.rng);
    }

    /// Fires the most recently scheduled computer move.
    fn fire_latest(&mut self) {
        let token = *self.ui.scheduled.last().expect("a computer move was scheduled");
        self.send(Command::ComputerMove { token });
    }

    fn click(&mut self, cells: &[usize]) {
        for &index in cells {
            self.send(Command::SelectCell { index });
        }
    }
}

#[test]
fn alice_wins_top_row() {
    let mut table = Table::new();
    table.send(start_request(('X', 'O'), false));
    table.click(&[0, 3, 1, 4, 2]);

    assert_eq!(table.game.status(), Status::Won { winner: Seat::One });
    assert_eq!(table.game.winner().unwrap().name(), "Alice");
    assert_eq!(table.ui.messages, vec!["Alice wins!".to_string()]);
    assert_eq!(&table.ui.cells[..3], &[Some('X'); 3]);
}

#[test]
fn full_board_without_line_is_a_draw() {
    let mut table = Table::new();
    table.send(start_request(('X', 'O'), false));
    table.click(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert_eq!(table.game.status(), Status::Draw);
    assert_eq!(table.ui.messages, vec!["It's a draw!".to_string()]);
    assert!(table.game.board().is_full());
    assert_eq!(table.game.history().len(), 9);
}

#[test]
fn last_move_completing_a_line_wins_even_on_a_full_board() {
    let mut table = Table::new();
    table.send(start_request(('X', 'O'), false));
    table.click(&[0, 1, 2, 3, 4, 5, 7, 6, 8]);

    assert_eq!(table.game.status(), Status::Won { winner: Seat::One });
    assert_eq!(table.ui.messages, vec!["Alice wins!".to_string()]);
}

#[test]
fn every_line_wins_for_its_owner() {
    for line in LINES {
        let mut game = Game::new();
        game.start(
            PlayerInfo::new("Alice", Some('X')),
            PlayerInfo::new("Bob", Some('O')),
            false,
        )
        .unwrap();

        // Bob only gets two moves before Alice's third
        let mut spare = (0..9).filter(|i| !line.contains(i));
        for (turn, &index) in line.iter().enumerate() {
            game.apply_move(index);
            if turn < 2 {
                let reply = spare.next().unwrap();
                game.apply_move(reply);
            }
        }

        assert_eq!(
            game.status(),
            Status::Won { winner: Seat::One },
            "line {line:?}"
        );
        assert_eq!(game.current_seat(), Seat::One);
        assert!(game.check_win());
    }
}

#[test]
fn duplicate_symbols_are_reported_and_game_stays_idle() {
    let mut table = Table::new();
    table.send(start_request(('X', 'X'), false));

    assert_eq!(table.game.status(), Status::Idle);
    assert_eq!(
        table.ui.errors,
        vec![ValidationError::DuplicateSymbol { symbol: 'X' }]
    );
    assert_eq!(table.ui.rebuilds, 0);
}

#[test]
fn computer_reply_is_scheduled_and_played() {
    let mut table = Table::new();
    table.send(start_request(('X', 'O'), true));
    table.click(&[0]);

    assert_eq!(table.ui.scheduled.len(), 1);
    assert!(table.game.awaiting_computer());

    // clicks while the computer is thinking are dropped
    table.click(&[5]);
    assert_eq!(table.game.history().len(), 1);

    table.fire_latest();
    let history = table.game.history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[1].seat, Seat::Two);
    assert_ne!(history[1].index, 0);
    assert_eq!(table.ui.cells[history[1].index], Some('O'));
    assert_eq!(table.game.current_seat(), Seat::One);
}

#[test]
fn undo_clears_rendered_cells() {
    let mut table = Table::new();
    table.send(start_request(('X', 'O'), true));
    table.click(&[4]);
    table.fire_latest();

    table.send(Command::Undo);
    assert_eq!(table.ui.cells, [None; 9]);
    assert!(table.game.history().is_empty());
    assert_eq!(table.game.current_seat(), Seat::One);
}

#[test]
fn stale_computer_move_after_cancel_is_ignored() {
    let mut table = Table::new();
    table.send(start_request(('X', 'O'), true));
    table.click(&[0]);
    table.send(Command::Cancel);
    table.fire_latest();

    assert_eq!(table.game.status(), Status::Idle);
    assert!(table.game.history().is_empty());
    assert_eq!(table.ui.cells, [None; 9]);
}

#[test]
fn stale_computer_move_does_not_play_the_next_round() {
    let mut table = Table::new();
    table.send(start_request(('X', 'O'), true));
    table.click(&[0]);
    let stale = table.ui.scheduled[0];

    table.send(Command::Cancel);
    table.send(start_request(('X', 'O'), true));
    table.click(&[4]);
    assert!(table.game.awaiting_computer());

    table.send(Command::ComputerMove { token: stale });
    assert_eq!(table.game.history().len(), 1);
    assert!(table.game.awaiting_computer());

    table.fire_latest();
    assert_eq!(table.game.history().len(), 2);
    assert_eq!(table.game.current_seat(), Seat::One);
}

#[test]
fn restart_keeps_the_scoreboard() {
    let mut table = Table::new();
    table.send(start_request(('X', 'O'), false));
    table.click(&[0, 3, 1, 4, 2]);
    table.send(Command::Restart);

    assert!(table.game.is_active());
    assert_eq!(table.game.player(Seat::One).unwrap().score(), 1);

    table.send(Command::ResetScores);
    assert_eq!(table.game.player(Seat::One).unwrap().score(), 0);
}

#[test]
fn command_serializes_with_type_tag() {
    let json = serde_json::to_value(Command::SelectCell { index: 4 }).unwrap();
    assert_eq!(json["type"], "SELECT_CELL");
    assert_eq!(json["index"], 4);

    let json = serde_json::to_value(Command::ComputerMove { token: 7 }).unwrap();
    assert_eq!(json["type"], "COMPUTER_MOVE");
    assert_eq!(json["token"], 7);
}
