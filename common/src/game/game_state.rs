use crate::log;

use super::events::{GameEvent, GameOverReason};
use super::food::Food;
use super::session_rng::SessionRng;
use super::settings::GameSettings;
use super::snake::Snake;
use super::types::{GamePhase, KeyInput, Point};

/// The single aggregate of the simulation: snake, food, phase, score and
/// high score. Mutated only through `tick` and `handle_key`; the renderer
/// goes through the read-only accessors.
pub struct Game {
    snake: Snake,
    food: Food,
    phase: GamePhase,
    score: u32,
    high_score: u32,
    settings: GameSettings,
}

impl Game {
    pub fn new(settings: GameSettings, high_score: u32, rng: &mut SessionRng) -> Self {
        let snake = Snake::new(&settings);
        let food = Food::spawn(&snake.body, &settings.field_size, rng);
        Self {
            snake,
            food,
            phase: GamePhase::Start,
            score: 0,
            high_score,
            settings,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    /// One fixed-interval simulation step. A no-op outside `Playing`.
    ///
    /// Check order matters: food first so an eat on the final tick still
    /// counts, then walls, then self-collision. Eating never exempts the
    /// new head from the collision checks, and the wall check wins when
    /// both would fire.
    pub fn tick(&mut self, rng: &mut SessionRng) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.phase != GamePhase::Playing {
            return events;
        }

        self.snake.advance();
        let head = self.snake.head();

        if head == self.food.position() {
            self.food
                .relocate(&self.snake.body, &self.settings.field_size, rng);
            self.snake.grow();
            self.score += 1;
            log!("Food eaten at ({}, {}). Score: {}", head.x, head.y, self.score);
            events.push(GameEvent::FoodEaten { score: self.score });
        }

        if !self.settings.field_size.contains(head) {
            self.finish_run(GameOverReason::WallCollision, head, &mut events);
        } else if self.snake.hits_itself() {
            self.finish_run(GameOverReason::SelfCollision, head, &mut events);
        }

        events
    }

    /// Feeds one keyboard event into the state machine.
    pub fn handle_key(&mut self, key: KeyInput, rng: &mut SessionRng) -> Vec<GameEvent> {
        let mut events = Vec::new();
        match self.phase {
            GamePhase::Start => {
                self.phase = GamePhase::Playing;
                events.push(GameEvent::GameStarted);
            }
            GamePhase::Playing => {
                if let KeyInput::Direction(direction) = key {
                    self.snake.request_direction(direction);
                }
            }
            GamePhase::GameOver => {
                self.score = 0;
                self.snake.reset();
                self.food
                    .relocate(&self.snake.body, &self.settings.field_size, rng);
                self.phase = GamePhase::Playing;
                events.push(GameEvent::GameRestarted);
            }
        }
        events
    }

    fn finish_run(&mut self, reason: GameOverReason, head: Point, events: &mut Vec<GameEvent>) {
        let new_record = self.score > self.high_score;
        if new_record {
            self.high_score = self.score;
        }
        self.phase = GamePhase::GameOver;
        log!(
            "Game over ({:?}) at ({}, {}). Score: {}, high score: {}",
            reason,
            head.x,
            head.y,
            self.score,
            self.high_score
        );
        events.push(GameEvent::GameOver {
            reason,
            score: self.score,
            high_score: self.high_score,
            new_record,
        });
    }
}
