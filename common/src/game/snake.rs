use std::collections::VecDeque;

use super::settings::GameSettings;
use super::types::{Direction, Point};

#[derive(Clone, Debug)]
pub struct Snake {
    pub body: VecDeque<Point>,
    pub direction: Direction,
    pub pending_direction: Option<Direction>,
    pending_growth: bool,
    start_position: Point,
    start_direction: Direction,
}

impl Snake {
    pub fn new(settings: &GameSettings) -> Self {
        let mut snake = Self {
            body: VecDeque::new(),
            direction: settings.start_direction,
            pending_direction: None,
            pending_growth: false,
            start_position: settings.start_position,
            start_direction: settings.start_direction,
        };
        snake.reset();
        snake
    }

    pub fn head(&self) -> Point {
        *self.body.front().expect("Snake body should never be empty")
    }

    /// Buffers a turn for the next `advance`. A reversal of the current
    /// direction is dropped silently; the check is against the committed
    /// direction, not the pending one, so two quick presses within one
    /// tick cannot queue a 180-degree turn.
    pub fn request_direction(&mut self, direction: Direction) {
        if !direction.is_opposite(&self.direction) {
            self.pending_direction = Some(direction);
        }
    }

    pub fn grow(&mut self) {
        self.pending_growth = true;
    }

    /// Moves one cell: commits the pending direction, pushes the new head
    /// and pops the tail unless growth is pending. No bounds check here;
    /// the rules engine inspects the head afterwards.
    pub fn advance(&mut self) {
        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }

        let next_head = self.head().offset(self.direction);
        self.body.push_front(next_head);

        if self.pending_growth {
            self.pending_growth = false;
        } else {
            self.body
                .pop_back()
                .expect("Snake body should never be empty");
        }
    }

    /// True when the head occupies the same cell as any other segment.
    pub fn hits_itself(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|&segment| segment == head)
    }

    pub fn reset(&mut self) {
        self.body.clear();
        self.body.push_back(self.start_position);
        self.body
            .push_back(self.start_position.offset(opposite(self.start_direction)));
        self.direction = self.start_direction;
        self.pending_direction = None;
        self.pending_growth = false;
    }
}

fn opposite(direction: Direction) -> Direction {
    match direction {
        Direction::Left => Direction::Right,
        Direction::Right => Direction::Left,
        Direction::Up => Direction::Down,
        Direction::Down => Direction::Up,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_snake() -> Snake {
        Snake::new(&GameSettings::default())
    }

    #[test]
    fn test_initial_body_and_direction() {
        let snake = create_snake();
        let body: Vec<Point> = snake.body.iter().copied().collect();
        assert_eq!(body, vec![Point::new(6, 9), Point::new(5, 9)]);
        assert_eq!(snake.direction, Direction::Right);
    }

    #[test]
    fn test_advance_moves_head_and_drops_tail() {
        let mut snake = create_snake();
        snake.advance();
        let body: Vec<Point> = snake.body.iter().copied().collect();
        assert_eq!(body, vec![Point::new(7, 9), Point::new(6, 9)]);
    }

    #[test]
    fn test_advance_keeps_tail_when_growth_pending() {
        let mut snake = create_snake();
        snake.grow();
        snake.advance();
        assert_eq!(snake.body.len(), 3);
        assert_eq!(snake.head(), Point::new(7, 9));

        // Flag is consumed by the first advance.
        snake.advance();
        assert_eq!(snake.body.len(), 3);
    }

    #[test]
    fn test_request_direction_rejects_reversal() {
        let mut snake = create_snake();
        snake.request_direction(Direction::Left);
        assert_eq!(snake.pending_direction, None);
    }

    #[test]
    fn test_reversal_check_uses_current_direction_not_pending() {
        let mut snake = create_snake();
        snake.request_direction(Direction::Up);
        // Down is opposite to the pending Up but not to the current Right,
        // so the later press wins.
        snake.request_direction(Direction::Down);
        assert_eq!(snake.pending_direction, Some(Direction::Down));
    }

    #[test]
    fn test_last_valid_request_wins() {
        let mut snake = create_snake();
        snake.request_direction(Direction::Up);
        snake.request_direction(Direction::Left);
        assert_eq!(snake.pending_direction, Some(Direction::Up));

        snake.advance();
        assert_eq!(snake.direction, Direction::Up);
    }

    #[test]
    fn test_body_length_never_decreases() {
        let mut snake = create_snake();
        let mut prev_len = snake.body.len();
        for step in 0..10 {
            if step % 3 == 0 {
                snake.grow();
            }
            snake.advance();
            let len = snake.body.len();
            assert!(len == prev_len || len == prev_len + 1);
            prev_len = len;
        }
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut snake = create_snake();
        snake.grow();
        snake.advance();
        snake.request_direction(Direction::Up);

        snake.reset();
        let once: Vec<Point> = snake.body.iter().copied().collect();
        snake.reset();
        let twice: Vec<Point> = snake.body.iter().copied().collect();

        assert_eq!(once, twice);
        assert_eq!(snake.direction, Direction::Right);
        assert_eq!(snake.pending_direction, None);
        assert_eq!(snake.body.len(), 2);
    }

    #[test]
    fn test_hits_itself() {
        let mut snake = create_snake();
        assert!(!snake.hits_itself());

        // Grow into a loop: right, down, left, up brings the head back
        // onto the body.
        for direction in [
            Direction::Down,
            Direction::Left,
            Direction::Up,
        ] {
            snake.grow();
            snake.advance();
            snake.request_direction(direction);
        }
        snake.grow();
        snake.advance();
        assert!(snake.hits_itself());
    }
}
