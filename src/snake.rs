use std::collections::VecDeque;

use crate::Coords;
use Direction::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    pub fn delta(self) -> Coords {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Up => "up",
            Down => "down",
            Left => "left",
            Right => "right",
        }
    }
}

/// Segments are stored head first.
#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Coords>,
}

impl Snake {
    /// Lays `size` segments trailing behind `head`, so that the snake is
    /// already facing `direction`.
    pub fn new(head: Coords, size: i32, direction: Direction) -> Self {
        let diff = direction.delta();

        let body = (0..size)
            .map(|i| (head.0 - diff.0 * i, head.1 - diff.1 * i))
            .collect();
        Snake { body }
    }

    #[cfg(test)]
    pub fn from_segments(segments: &[Coords]) -> Self {
        Snake { body: segments.iter().copied().collect() }
    }

    pub fn head(&self) -> Coords {
        // A snake is never built empty
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn contains(&self, pos: &Coords) -> bool {
        self.body.contains(pos)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Coords> + '_ {
        self.body.iter()
    }

    pub fn segments(&self) -> Vec<Coords> {
        self.body.iter().copied().collect()
    }

    pub fn push_head(&mut self, pos: Coords) {
        self.body.push_front(pos);
    }

    pub fn pop_tail(&mut self) -> Option<Coords> {
        self.body.pop_back()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trails_behind_head() {
        let snake = Snake::new((10, 7), 3, Right);
        assert_eq!(snake.segments(), vec![(10, 7), (9, 7), (8, 7)]);

        let snake = Snake::new((4, 4), 2, Up);
        assert_eq!(snake.segments(), vec![(4, 4), (4, 5)]);
    }

    #[test]
    fn test_opposites() {
        for dir in [Up, Down, Left, Right].iter() {
            let (dx, dy) = dir.delta();
            assert_eq!(dir.opposite().delta(), (-dx, -dy));
            assert_eq!(dir.opposite().opposite(), *dir);
        }
    }

    #[test]
    fn test_push_and_pop() {
        let mut snake = Snake::new((5, 5), 2, Right);
        snake.push_head((6, 5));
        assert_eq!(snake.head(), (6, 5));
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.pop_tail(), Some((4, 5)));
        assert!(!snake.contains(&(4, 5)));
    }
}
