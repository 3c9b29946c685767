use std::collections::VecDeque;

use super::session_rng::SessionRng;
use super::types::{FieldSize, Point};

#[derive(Clone, Debug)]
pub struct Food {
    position: Point,
}

impl Food {
    pub fn spawn(occupied: &VecDeque<Point>, field: &FieldSize, rng: &mut SessionRng) -> Self {
        Self {
            position: random_free_cell(occupied, field, rng),
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Picks a fresh uniformly random cell that is not occupied by the
    /// snake. Rejection sampling without an attempt cap: the snake covers
    /// a small fraction of the field in any reachable state.
    pub fn relocate(&mut self, occupied: &VecDeque<Point>, field: &FieldSize, rng: &mut SessionRng) {
        self.position = random_free_cell(occupied, field, rng);
    }

    #[cfg(test)]
    pub(crate) fn place_at(&mut self, position: Point) {
        self.position = position;
    }
}

fn random_free_cell(occupied: &VecDeque<Point>, field: &FieldSize, rng: &mut SessionRng) -> Point {
    loop {
        let position = Point::new(
            rng.random_range(0..field.width),
            rng.random_range(0..field.height),
        );
        if !occupied.contains(&position) {
            return position;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_avoids_occupied_cells() {
        let field = FieldSize::new(20, 20);
        let occupied: VecDeque<Point> =
            [Point::new(6, 9), Point::new(5, 9)].into_iter().collect();
        let mut rng = SessionRng::new(42);

        for _ in 0..200 {
            let food = Food::spawn(&occupied, &field, &mut rng);
            assert!(!occupied.contains(&food.position()));
            assert!(field.contains(food.position()));
        }
    }

    #[test]
    fn test_relocate_avoids_dense_occupancy() {
        // Leave a single free cell; relocation must land on it.
        let field = FieldSize::new(3, 1);
        let occupied: VecDeque<Point> =
            [Point::new(0, 0), Point::new(2, 0)].into_iter().collect();
        let mut rng = SessionRng::new(7);

        let mut food = Food::spawn(&occupied, &field, &mut rng);
        assert_eq!(food.position(), Point::new(1, 0));

        food.relocate(&occupied, &field, &mut rng);
        assert_eq!(food.position(), Point::new(1, 0));
    }

    #[test]
    fn test_same_seed_same_placement() {
        let field = FieldSize::new(20, 20);
        let occupied = VecDeque::new();

        let mut first = SessionRng::new(1234);
        let mut second = SessionRng::new(1234);
        assert_eq!(
            Food::spawn(&occupied, &field, &mut first).position(),
            Food::spawn(&occupied, &field, &mut second).position(),
        );
    }
}
