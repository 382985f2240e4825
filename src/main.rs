mod config;
mod error;
mod game;
mod input;
mod play;
mod snake;
mod term;

use std::process::exit;

use log::error;

use config::Options;
use error::AppError;

pub type TermInt = u16;
pub type Coords = (i32, i32);

fn run() -> Result<(), AppError> {
    let opts = Options::from_args(std::env::args().skip(1))?;

    if opts.help {
        println!("{}", config::USAGE);
        return Ok(());
    }

    if opts.demo {
        play::demo(&opts)
    } else {
        play::play(&opts)
    }
}

fn main() {
    // Logs go to stderr, filtered through RUST_LOG
    env_logger::init();

    if let Err(e) = run() {
        error!("{}", e);
        eprintln!("snake: {}", e);
        if let AppError::Usage(_) = e {
            eprintln!("\n{}", config::USAGE);
        }
        exit(1);
    }
}
