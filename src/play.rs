use log::{debug, info};

use crate::config::Options;
use crate::error::AppError;
use crate::game::GameState;
use crate::input::{parse_command, Command};
use crate::snake::Direction::{self, *};
use crate::term::TermManager;

const DEMO_MOVES: [Direction; 5] = [Right, Right, Down, Down, Left];

fn new_game(opts: &Options) -> Result<GameState, AppError> {
    let game = match opts.seed {
        Some(seed) => GameState::with_seed(opts.width, opts.height, seed)?,
        None => GameState::new(opts.width, opts.height)?,
    };
    Ok(game)
}

/// Interactive game: one tick per line typed by the player.
pub fn play(opts: &Options) -> Result<(), AppError> {
    let mut game = new_game(opts)?;
    let mut term = TermManager::new();

    term.show_message(&[
        "",
        "  WELCOME TO SNAKE GAME!",
        "",
        "- Use W/A/S/D or the words up/down/left/right",
        "- Type your direction and press Enter",
        "- Eat the food (*) to grow",
        "- Avoid walls (#) and yourself",
        "- Type Q to quit",
        "",
    ])?;
    term.prompt("Press Enter to start...")?;
    if term.read_line().is_none() {
        return Ok(());
    }

    while !game.is_game_over() {
        term.draw(&game)?;
        term.prompt("Direction: ")?;

        let command = term.read_line().map_or(Command::Quit, |line| parse_command(&line));
        debug!("[Play] {:?}", command);

        match command {
            Command::Quit => {
                info!("[Play] Player quit with score {}", game.score());
                term.show_message(&["", "Thanks for playing!"])?;
                return Ok(());
            },
            Command::Turn(dir) => game.set_direction(dir),
            Command::Continue => {},
        }

        game.update();
    }

    term.draw(&game)?;
    term.prompt("Press Enter to exit...")?;
    term.read_line();
    Ok(())
}

/// Scripted run of a few moves that prints what happens after each one.
pub fn demo(opts: &Options) -> Result<(), AppError> {
    let mut game = new_game(opts)?;
    let banner = "=".repeat(50);

    println!("\n{}\n  SNAKE GAME DEMO\n{}", banner, banner);
    println!("\nThis demo simulates a few moves of the game.\n");

    println!("Initial state:");
    println!("Snake position: {:?}", game.snake().segments());
    println!("Food position: {:?}", game.food());
    println!("Score: {}", game.score());
    println!("Direction: {}\n", game.direction().name());

    for (i, &dir) in DEMO_MOVES.iter().enumerate() {
        if game.is_game_over() {
            break;
        }

        println!("Move {}: Going {}", i + 1, dir.name());
        let score = game.score();
        game.set_direction(dir);
        game.update();

        println!("  Snake head: {:?}", game.head());
        println!("  Snake length: {}", game.snake().len());
        println!("  Score: {}", game.score());
        if game.score() > score {
            println!("  >>> Food eaten! New food at {:?}", game.food());
        }
        println!();
    }

    if game.is_game_over() {
        println!("Game Over!");
        println!("Final score: {}", game.score());
    } else {
        println!("Demo complete! The game is working correctly.");
        println!("Final snake length: {}", game.snake().len());
        println!("Final score: {}", game.score());
    }

    println!("\n{}\nTo play the full game, run: snake\n{}\n", banner, banner);
    Ok(())
}
