use std::io::{self, BufRead, Stdout, Write, stdout};

use crossterm::{cursor, queue, style, terminal};
use crossterm::terminal::ClearType;

use crate::game::GameState;

const WALL_CHAR: char = '#';
const FOOD_CHAR: char = '*';
const HEAD_CHAR: char = 'O';
const BODY_CHAR: char = 'o';
const EMPTY_CHAR: char = ' ';

pub struct TermManager {
    stdout: Stdout,
}

impl TermManager {
    pub fn new() -> Self {
        TermManager { stdout: stdout() }
    }

    /// Redraws the whole screen from the current game state.
    pub fn draw(&mut self, game: &GameState) -> crossterm::Result<()> {
        self.clear()?;
        self.print_lines(&screen_lines(game))?;
        self.flush()
    }

    pub fn print_lines<S: AsRef<str>>(&mut self, lines: &[S]) -> crossterm::Result<()> {
        for line in lines {
            queue!(self.stdout, style::Print(line.as_ref()), style::Print("\n"))?;
        }
        Ok(())
    }

    pub fn show_message(&mut self, lines: &[&str]) -> crossterm::Result<()> {
        self.print_lines(lines)?;
        self.flush()
    }

    pub fn prompt(&mut self, text: &str) -> crossterm::Result<()> {
        queue!(self.stdout, style::Print(text))?;
        self.flush()
    }

    /// Blocks until a full line is typed. `None` when the input is closed or
    /// unreadable, which callers treat as a request to quit.
    pub fn read_line(&self) -> Option<String> {
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line),
        }
    }

    pub fn clear(&mut self) -> crossterm::Result<()> {
        queue!(self.stdout, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))
    }

    pub fn flush(&mut self) -> crossterm::Result<()> {
        self.stdout.flush()?;
        Ok(())
    }
}

/// Draws the board, walls included, one string per row.
pub fn board_lines(game: &GameState) -> Vec<String> {
    let (width, height) = (game.width() as usize, game.height() as usize);
    let mut screen = vec![vec![EMPTY_CHAR; width]; height];

    for x in 0..width {
        screen[0][x] = WALL_CHAR;
        screen[height - 1][x] = WALL_CHAR;
    }
    for row in screen.iter_mut() {
        row[0] = WALL_CHAR;
        row[width - 1] = WALL_CHAR;
    }

    let (fx, fy) = game.food();
    screen[fy as usize][fx as usize] = FOOD_CHAR;

    for (i, &(x, y)) in game.snake().iter().enumerate() {
        screen[y as usize][x as usize] = if i == 0 { HEAD_CHAR } else { BODY_CHAR };
    }

    screen.into_iter().map(|row| row.into_iter().collect()).collect()
}

fn screen_lines(game: &GameState) -> Vec<String> {
    let rule = "=".repeat(game.width() as usize + 2);
    let mut lines = vec![
        rule.clone(),
        format!("  SNAKE GAME - Score: {}", game.score()),
        rule,
        String::new(),
    ];

    lines.extend(board_lines(game));
    lines.push(String::new());

    if game.is_game_over() {
        lines.push(if game.won() { "YOU WON!" } else { "GAME OVER!" }.to_string());
        lines.push(format!("Final Score: {}", game.score()));
        lines.push(String::new());
    } else {
        lines.push("Controls: W/A/S/D or up/down/left/right (then Enter) | Q to quit".to_string());
        lines.push(format!("Snake length: {}", game.snake().len()));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_glyphs() {
        let game = GameState::with_seed(8, 5, 1).unwrap();
        let lines = board_lines(&game);

        assert_eq!(lines.len(), 5);
        assert!(lines.iter().all(|l| l.chars().count() == 8));
        assert_eq!(lines[0], "########");
        assert_eq!(lines[4], "########");

        // Snake sits on row 2 with its head at x = 4
        let row: Vec<char> = lines[2].chars().collect();
        assert_eq!(&row[2..5], &[BODY_CHAR, BODY_CHAR, HEAD_CHAR]);

        let (fx, fy) = game.food();
        assert_eq!(lines[fy as usize].chars().nth(fx as usize), Some(FOOD_CHAR));
        assert_eq!(lines.iter().flat_map(|l| l.chars()).filter(|&c| c == FOOD_CHAR).count(), 1);
    }

    #[test]
    fn test_screen_footer() {
        let mut game = GameState::with_seed(20, 15, 2).unwrap();
        let lines = screen_lines(&game);
        assert_eq!(lines[1], "  SNAKE GAME - Score: 0");
        assert_eq!(lines.last().map(String::as_str), Some("Snake length: 3"));

        game.set_direction(crate::snake::Direction::Up);
        for _ in 0..10 {
            game.update();
        }
        assert!(game.is_game_over());
        assert!(screen_lines(&game).iter().any(|l| l == "GAME OVER!"));
    }
}
