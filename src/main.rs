//! minichess: a small chess engine.
//!
//! ## Usage
//!
//! - `minichess` - Show a demo
//! - `minichess play` - Play against the engine in the terminal
//! - `minichess demo` - Run the search demo

use anyhow::Result;
use clap::{Parser, Subcommand};

use minichess::board::{Board, Color};
use minichess::console::Console;
use minichess::constants::DEFAULT_DEPTH;
use minichess::position::{Position, move_name};
use minichess::search::search;

/// minichess: a small chess engine
#[derive(Parser)]
#[command(name = "minichess")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the engine in an interactive console
    Play {
        /// Search depth in plies
        #[arg(short, long, default_value_t = DEFAULT_DEPTH)]
        depth: u32,
    },
    /// Run a simple demo of the engine
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Play { depth }) => {
            let mut console = Console::with_depth(depth);
            console.run()
        }
        Some(Commands::Demo) | None => {
            run_demo();
            Ok(())
        }
    }
}

fn run_demo() {
    println!("minichess: a small chess engine\n");

    // Demo 1: search the starting position
    println!("=== Opening Search ===");
    let pos = Position::new();
    println!("{}", pos.board);
    println!("Searching {DEFAULT_DEPTH} plies...");
    let result = search(&pos, DEFAULT_DEPTH);
    if let Some(mv) = result.best {
        println!(
            "Best move: {} (score {:+}, {} nodes)\n",
            move_name(mv),
            result.score,
            result.nodes
        );
    }

    // Demo 2: find a back-rank mate
    println!("=== Mate In One ===");
    let board = Board::from_ascii(
        ".......k
         ......pp
         ........
         ........
         ........
         ........
         ........
         R...K...",
    );
    if let Some(board) = board {
        let pos = Position::from_board(board, Color::White);
        println!("{}", pos.board);
        let result = search(&pos, 2);
        if let Some(mv) = result.best {
            println!("Best move: {} (score {:+})", move_name(mv), result.score);
        }
    }
}
