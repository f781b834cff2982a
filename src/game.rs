/*
Turn sequencing for one game. The session owns the board, both players and
the RNG; progress is driven by explicit calls rather than callbacks:

AwaitingHumanMove --apply_move--> (check end, switch) --> ...
ComputerThinking --request_computer_move--> (check end, switch) --> ...
GameOver: terminal, consult result()/winning_line()
*/

use crate::board::*;
use crate::engine::config::*;
use crate::engine::eval::*;
use crate::engine::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum GameState {
    AwaitingHumanMove,
    ComputerThinking,
    GameOver,
}

pub struct GameSession {
    board: Board,
    players: [Player; 2],
    active: usize,
    turn_count: u32,
    state: GameState,
    config: PolicyConfig,
    rng: SmallRng,
}

impl GameSession {
    pub fn new(players: [Player; 2], config: PolicyConfig) -> GameSession {
        Self::with_rng(players, config, SmallRng::from_entropy())
    }

    // seeded construction for deterministic tests
    pub fn with_rng(players: [Player; 2], config: PolicyConfig, rng: SmallRng) -> GameSession {
        assert_ne!(players[0].mark, players[1].mark);
        let state = Self::turn_state(&players[0]);
        GameSession {
            board: Board::new(),
            players,
            active: 0,
            turn_count: 0,
            state,
            config,
            rng,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn active_player(&self) -> &Player {
        &self.players[self.active]
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn player_with_mark(&self, mark: Mark) -> &Player {
        self.players.iter().find(|p| p.mark == mark).unwrap()
    }

    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    pub fn result(&self) -> GameResult {
        game_result(&self.board)
    }

    pub fn winning_line(&self) -> Option<[Idx; 3]> {
        match game_result(&self.board) {
            GameResult::Won(mark) => winning_line(&self.board, mark),
            _ => None,
        }
    }

    // human turn. The cell must be empty and the session in AwaitingHumanMove.
    pub fn apply_move(&mut self, index: Idx) {
        assert_eq!(self.state, GameState::AwaitingHumanMove);
        assert!(!self.board.is_occupied(index), "cell {} taken", index);
        let mark = self.active_player().mark;
        self.board.place(index, mark);
        self.advance();
    }

    // computer turn: decide, apply, return the chosen cell
    pub fn request_computer_move(&mut self) -> Idx {
        assert_eq!(self.state, GameState::ComputerThinking);
        let player = self.players[self.active].clone();
        let opponent = player.mark.other();
        let index = if self.config.force_easy_first_move && self.turn_count == 0 {
            random_move(&self.board, &mut self.rng)
        } else {
            decide_move(
                &mut self.board,
                &player,
                opponent,
                &self.config,
                &mut self.rng,
            )
        };
        self.board.place(index, player.mark);
        self.advance();
        return index;
    }

    fn advance(&mut self) {
        self.turn_count += 1;
        if game_result(&self.board) != GameResult::Ongoing {
            self.state = GameState::GameOver;
            return;
        }
        self.active = 1 - self.active;
        self.state = Self::turn_state(self.active_player());
    }

    fn turn_state(player: &Player) -> GameState {
        if player.is_computer() {
            GameState::ComputerThinking
        } else {
            GameState::AwaitingHumanMove
        }
    }
}
