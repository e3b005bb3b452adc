//! Tengen: a 9x9 Go engine with minimax search.
//!
//! ## Usage
//!
//! - `tengen` - Watch the engine play against a random opponent
//! - `tengen demo` - Same as above
//! - `tengen play` - Play against the engine on the terminal

use std::io::{self, BufRead, Write};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use tengen::board::Color;
use tengen::game::GameState;
use tengen::search::Minimax;

/// Tengen: a 9x9 Go engine with minimax search
#[derive(Parser)]
#[command(name = "tengen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Watch a quick game: minimax Black against a random-moving White
    Demo,
    /// Play Black against the engine on the terminal
    Play,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Play) => run_play(),
        Some(Commands::Demo) | None => run_demo(),
    }
}

/// Minimax (Black) against a uniformly random legal mover (White).
fn run_demo() -> Result<()> {
    println!("Tengen: minimax Black vs random White\n");

    let mut game = GameState::new();
    let mut ai = Minimax::with_limits(Color::Black, 2, Duration::from_secs(2));

    // Cap the demo well below a full game.
    for _ in 0..30 {
        if game.is_game_over() {
            break;
        }
        match game.current_player() {
            Color::Black => match ai.best_move(game.board()) {
                Some((row, col)) => {
                    game.make_move(row, col);
                    let stats = ai.stats();
                    println!(
                        "{} plays ({row}, {col}) after {} nodes",
                        ai.color(),
                        stats.nodes_explored
                    );
                }
                None => {
                    println!("{} passes", ai.color());
                    game.pass_turn();
                }
            },
            Color::White => {
                let moves = game.legal_moves();
                if moves.is_empty() {
                    println!("White passes");
                    game.pass_turn();
                } else {
                    let (row, col) = moves[fastrand::usize(..moves.len())];
                    game.make_move(row, col);
                    println!("White plays ({row}, {col})");
                }
            }
        }
    }

    println!("\n{}", game.board());
    let (black, white) = game.score();
    println!("Score: Black {black} - White {white} (komi included)");
    if let Some(winner) = game.winner() {
        println!("Winner: {winner}");
    }
    Ok(())
}

/// Terminal game: the human plays Black, the engine answers as White.
fn run_play() -> Result<()> {
    println!("You are Black. Enter `row col`, `pass`, or `quit`.\n");

    let mut game = GameState::new();
    let mut ai = Minimax::new(Color::White);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    print!("{}\n> ", game.board());
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        match parse_input(line.trim()) {
            Ok(Input::Quit) => break,
            Ok(Input::Pass) => game.pass_turn(),
            Ok(Input::Move(row, col)) => {
                if !game.make_move(row, col) {
                    println!("illegal move, try again");
                    print!("> ");
                    stdout.flush()?;
                    continue;
                }
            }
            Err(err) => {
                println!("{err}");
                print!("> ");
                stdout.flush()?;
                continue;
            }
        }

        if !game.is_game_over() {
            match ai.best_move(game.board()) {
                Some((row, col)) => {
                    game.make_move(row, col);
                    println!("White plays ({row}, {col})");
                }
                None => {
                    println!("White passes");
                    game.pass_turn();
                }
            }
        }

        if game.is_game_over() {
            break;
        }
        print!("{}\n> ", game.board());
        stdout.flush()?;
    }

    println!("\n{}", game.board());
    let (black, white) = game.score();
    println!("Score: Black {black} - White {white} (komi included)");
    if let Some(winner) = game.winner() {
        println!("Winner: {winner}");
    }
    Ok(())
}

enum Input {
    Move(usize, usize),
    Pass,
    Quit,
}

fn parse_input(line: &str) -> Result<Input> {
    match line {
        "pass" => return Ok(Input::Pass),
        "quit" | "exit" => return Ok(Input::Quit),
        _ => {}
    }
    let mut parts = line.split_whitespace();
    let (Some(row), Some(col)) = (parts.next(), parts.next()) else {
        bail!("expected `row col`, `pass`, or `quit`");
    };
    if parts.next().is_some() {
        bail!("expected exactly two coordinates");
    }
    let row = row.parse().context("row is not a number")?;
    let col = col.parse().context("col is not a number")?;
    Ok(Input::Move(row, col))
}
