use std::io::{self, BufRead, Stdin};
use std::process::exit;
use std::str::SplitWhitespace;

use ttt::board::*;
use ttt::engine::config::PolicyConfig;
use ttt::engine::eval::GameResult;
use ttt::engine::{Difficulty, Player};
use ttt::game::{GameSession, GameState};

struct GameContext {
    history: Vec<String>,
}

impl GameContext {
    fn new() -> GameContext {
        GameContext {
            history: Vec::new(),
        }
    }
}

fn next_line(stdin: &mut Stdin) -> String {
    stdin
        .lock()
        .lines()
        .next()
        .expect("there was no next line")
        .expect("the line could not be read")
}

fn read_player(stdin: &mut Stdin, mark: Mark) -> Player {
    loop {
        println!("Player {}: human or computer? [h/c]", mark);
        let line = next_line(stdin);
        match line.trim() {
            "h" => {
                println!("Name?");
                let name = next_line(stdin);
                let name = name.trim();
                let name = if name.is_empty() {
                    format!("Player {}", mark)
                } else {
                    name.to_string()
                };
                return Player::human(&name, mark);
            }
            "c" => loop {
                println!("Difficulty? [easy/medium/hard]");
                match next_line(stdin).parse::<Difficulty>() {
                    Ok(difficulty) => return Player::computer(mark, difficulty),
                    Err(err) => println!("ERROR: {}", err),
                }
            },
            _ => println!("ERROR: enter 'h' or 'c'"),
        }
    }
}

fn command_help(_: &mut SplitWhitespace, _: &mut GameSession, _: &mut GameContext) -> bool {
    static HELP_TEXT: &'static str = "
COMMANDS
========
h                       Display this message.
p                       Print current board.
m <i>                   Place your mark on cell i (0-8, row-major
                            from the top-left).
l                       Output move list history.
q                       Quit this program.
";
    println!("{}", HELP_TEXT);
    return false;
}

fn command_print(_: &mut SplitWhitespace, session: &mut GameSession, _: &mut GameContext) -> bool {
    println!("{}", session.board());
    return false;
}

fn command_make_move(
    tokens: &mut SplitWhitespace,
    session: &mut GameSession,
    context: &mut GameContext,
) -> bool {
    let index = match tokens.next() {
        Some(val) => val,
        None => {
            println!("ERROR: Need 1 argument!");
            return false;
        }
    };

    let index: Idx = match index.parse() {
        Ok(val) => val,
        Err(err) => {
            println!("ERROR parsing index: {:?}", err);
            return false;
        }
    };

    if index >= BOARD_SIZE {
        println!("move index out of bounds! (0-8)");
        return false;
    }
    if session.board().is_occupied(index) {
        println!("ERROR: cell taken");
        return false;
    }

    session.apply_move(index);
    context.history.push(index.to_string());
    return true;
}

fn command_list(_: &mut SplitWhitespace, _: &mut GameSession, context: &mut GameContext) -> bool {
    println!("{}", context.history.join(", "));
    return false;
}

fn main() {
    let mut stdin = io::stdin();
    println!("Tic-tac-toe. Cells are numbered 0-8, row-major from the top-left.");
    let player_x = read_player(&mut stdin, Mark::X);
    let player_o = read_player(&mut stdin, Mark::O);
    let mut session = GameSession::new([player_x, player_o], PolicyConfig::default());
    let mut context = GameContext::new();

    loop {
        match session.state() {
            GameState::GameOver => {
                println!("{}", session.board());
                match session.result() {
                    GameResult::Won(mark) => {
                        println!("{} wins!", session.player_with_mark(mark).name);
                        if let Some(line) = session.winning_line() {
                            println!("Winning line: {} {} {}", line[0], line[1], line[2]);
                        }
                    }
                    GameResult::Draw => println!("It's a tie!"),
                    GameResult::Ongoing => unreachable!(),
                }
                println!("History: {}", context.history.join(", "));
                return;
            }
            GameState::ComputerThinking => {
                let name = session.active_player().name.clone();
                println!("{} is thinking...", name);
                let index = session.request_computer_move();
                context.history.push(index.to_string());
                println!("{} played {}", name, index);
                println!();
            }
            GameState::AwaitingHumanMove => {
                println!("{}", session.board());
                println!("{}, your move.", session.active_player().name);
                let mut move_made = false;
                while !move_made {
                    println!("Enter command. 'h' for help.");
                    let line = next_line(&mut stdin);
                    let mut tokens = line.split_whitespace();
                    // function returns true if a move is made
                    let func: fn(&mut SplitWhitespace, &mut GameSession, &mut GameContext) -> bool =
                        match tokens.next() {
                            Some("h") => command_help,
                            Some("p") => command_print,
                            Some("m") => command_make_move,
                            Some("l") => command_list,
                            Some("q") => |_, _, _| exit(0),
                            Some(_) => command_help,
                            None => |_, _, _| false,
                        };

                    move_made = func(&mut tokens, &mut session, &mut context);
                }
            }
        }
    }
}
