//! Interactive text console.
//!
//! A line-oriented session for playing against the engine from a terminal
//! or driving it from a test harness.
//!
//! ## Supported Commands
//!
//! - `board` - Print the board and whose turn it is
//! - `depth [n]` - Show or set the search depth in plies
//! - `eval` - Print the material balance (positive = White ahead)
//! - `genmove` - Let the engine move for the side to move
//! - `help` - List all commands
//! - `legal` - List the legal moves for the side to move
//! - `move <fromto>` - Play a move (e.g. `move e2e4`); the engine replies
//! - `new` - Start a fresh game
//! - `quit` - Exit
//! - `random` - Play a uniformly random legal move
//! - `status` - Report turn, check, checkmate, or stalemate
//!
//! ## Example
//!
//! ```ignore
//! use minichess::console::Console;
//! let mut console = Console::new();
//! console.run()?;
//! ```

use std::io::{self, BufRead, Write};

use anyhow::Result;

use crate::constants::DEFAULT_DEPTH;
use crate::eval::material;
use crate::movegen::{legal_moves, random_move};
use crate::position::{Position, move_name, parse_move};
use crate::search::search;

/// The list of known console commands.
const KNOWN_COMMANDS: &[&str] = &[
    "board", "depth", "eval", "genmove", "help", "legal", "move", "new", "quit", "random",
    "status",
];

/// Console session state.
pub struct Console {
    /// Current game position
    pos: Position,
    /// Search depth in plies
    depth: u32,
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl Console {
    /// Create a console with the default search depth.
    pub fn new() -> Self {
        Self::with_depth(DEFAULT_DEPTH)
    }

    /// Create a console with a specified search depth.
    pub fn with_depth(depth: u32) -> Self {
        Self {
            pos: Position::new(),
            depth: depth.max(1),
        }
    }

    /// Run the command loop, reading from stdin and writing to stdout.
    pub fn run(&mut self) -> Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();

        writeln!(stdout, "{}{}", self.pos.board, self.status_line())?;
        for line in stdin.lock().lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let parts: Vec<&str> = line.split_whitespace().collect();
            let command = parts[0].to_lowercase();
            let args = &parts[1..];

            let (success, message) = self.execute(&command, args);
            if success {
                if !message.is_empty() {
                    writeln!(stdout, "{message}")?;
                }
            } else {
                writeln!(stdout, "error: {message}")?;
            }
            stdout.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Execute a console command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "board" => (true, self.board_report()),

            "new" => {
                self.pos = Position::new();
                (true, self.board_report())
            }

            "depth" => match args.first() {
                None => (true, self.depth.to_string()),
                Some(arg) => match arg.parse::<u32>() {
                    Ok(d) if d >= 1 => {
                        self.depth = d;
                        (true, String::new())
                    }
                    _ => (false, "invalid depth".to_string()),
                },
            },

            "eval" => (true, format!("material {:+}", material(&self.pos.board))),

            "legal" => {
                let moves = legal_moves(&self.pos);
                if moves.is_empty() {
                    (true, "(none)".to_string())
                } else {
                    let names: Vec<String> = moves.into_iter().map(move_name).collect();
                    (true, names.join(" "))
                }
            }

            "move" => {
                let Some(arg) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let Some(mv) = parse_move(arg) else {
                    return (false, "cannot parse move, expected e.g. e2e4".to_string());
                };
                if let Err(err) = self.pos.play_move(mv) {
                    return (false, err.to_string());
                }

                // The engine answers unless the game just ended.
                let mut reply = String::new();
                let result = search(&self.pos, self.depth);
                if let Some(engine_mv) = result.best {
                    self.pos.make_move(engine_mv);
                    reply = format!(
                        "reply {} (score {:+}, {} nodes)\n",
                        move_name(engine_mv),
                        result.score,
                        result.nodes
                    );
                }
                (true, format!("{reply}{}", self.board_report()))
            }

            "genmove" => {
                let result = search(&self.pos, self.depth);
                match result.best {
                    Some(mv) => {
                        self.pos.make_move(mv);
                        (
                            true,
                            format!(
                                "{} (score {:+}, {} nodes)\n{}",
                                move_name(mv),
                                result.score,
                                result.nodes,
                                self.board_report()
                            ),
                        )
                    }
                    None => (true, self.status_line()),
                }
            }

            "random" => match random_move(&self.pos) {
                Some(mv) => {
                    self.pos.make_move(mv);
                    (true, format!("{}\n{}", move_name(mv), self.board_report()))
                }
                None => (true, self.status_line()),
            },

            "status" => (true, self.status_line()),

            "help" => (true, KNOWN_COMMANDS.join(" ")),

            "quit" => (true, String::new()),

            _ => (false, format!("unknown command: {command}")),
        }
    }

    fn board_report(&self) -> String {
        format!("{}{}", self.pos.board, self.status_line())
    }

    /// One-line game status: turn, check, checkmate, or stalemate.
    ///
    /// An empty legal-move list alone is ambiguous; the check test tells
    /// checkmate and stalemate apart.
    fn status_line(&self) -> String {
        let side = self.pos.side_to_move;
        let checked = self.pos.in_check(side);
        if legal_moves(&self.pos).is_empty() {
            if checked {
                format!("checkmate, {} wins", side.other())
            } else {
                "stalemate".to_string()
            }
        } else if checked {
            format!("{side} to move, in check")
        } else {
            format!("{side} to move")
        }
    }
}
