use crate::consts::{self, TITLE};
use crate::clock::Pacer;
use crate::food::Food;
use crate::grid::Direction;
use crate::input::{Command, InputSource};
use crate::render::{Screen, Sprite};
use crate::snake::Snake;
use log::{debug, info};
use rand::rngs::ThreadRng;
use rand::Rng;
use std::collections::HashSet;
use std::io;

pub struct Game<R = ThreadRng> {
    rng: R,
    snake: Snake,
    food: Food,
    score: u32,
    full_redraw: bool,
}

impl Game<ThreadRng> {
    pub fn new() -> Self {
        Game::with_rng(rand::thread_rng())
    }
}

impl Default for Game<ThreadRng> {
    fn default() -> Self {
        Game::new()
    }
}

impl<R: Rng> Game<R> {
    pub fn with_rng(mut rng: R) -> Self {
        let snake = Snake::new();
        let food = Food::new(&snake.occupied_cells(), &mut rng);
        Game {
            rng,
            snake,
            food,
            score: 0,
            full_redraw: true,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn steer(&mut self, direction: Direction) {
        self.snake.set_pending_direction(direction);
    }

    /// Runs one step of the game and renders the result.
    pub fn tick<S: Screen>(&mut self, screen: &mut S) -> io::Result<()> {
        self.snake.apply_pending_direction();
        self.snake.advance();

        if self.snake.head() == self.food.position() {
            self.snake.queue_growth();
            self.score += 1;
            debug!("food eaten, score {}", self.score);
            screen.set_title(&consts::score_title(self.score))?;
            self.food.relocate(&self.snake.occupied_cells(), &mut self.rng);
        }

        if self.snake.has_self_collision() {
            info!(
                "snake ran into itself at {:?} with length {}, final score {}",
                self.snake.position(),
                self.snake.len(),
                self.score
            );
            self.snake.reset();
            self.food.relocate(&HashSet::new(), &mut self.rng);
            self.score = 0;
            screen.set_title(TITLE)?;
            self.full_redraw = true;
        }

        self.render(screen)
    }

    fn render<S: Screen>(&mut self, screen: &mut S) -> io::Result<()> {
        if self.full_redraw {
            screen.clear()?;
            self.full_redraw = false;
        }
        self.food.draw(screen)?;
        self.snake.draw(screen)?;
        screen.present()
    }

    /// Drives the game at the pacer's rate until a quit command arrives.
    pub fn run<S, I, P>(&mut self, screen: &mut S, input: &mut I, pacer: &mut P) -> io::Result<()>
    where
        S: Screen,
        I: InputSource,
        P: Pacer,
    {
        screen.set_title(TITLE)?;
        self.full_redraw = true;
        self.render(screen)?;

        loop {
            pacer.wait_next_tick();
            for command in input.poll()? {
                match command {
                    Command::Quit => {
                        info!("quit requested, score {}", self.score);
                        return Ok(());
                    }
                    Command::Turn(direction) => self.steer(direction),
                }
            }
            self.tick(screen)?;
        }
    }
}

#[cfg(test)]
impl<R: Rng> Game<R> {
    pub(crate) fn with_state(rng: R, snake: Snake, food: Food) -> Self {
        Game {
            rng,
            snake,
            food,
            score: 0,
            full_redraw: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::tests::NoWait;
    use crate::consts::{CELL_SIZE, FOOD_COLOR, SNAKE_HEAD_COLOR};
    use crate::grid::{self, Cell};
    use crate::input::tests::ScriptedInput;
    use crate::render::tests::{Op, RecordingScreen};
    use rand::{rngs::StdRng, SeedableRng};

    fn seeded() -> StdRng {
        StdRng::seed_from_u64(0x5EED)
    }

    #[test]
    fn new_game_starts_at_center_with_free_food() {
        let game = Game::with_rng(seeded());
        assert_eq!(game.score(), 0);
        assert_eq!(game.snake().len(), 1);
        assert_eq!(game.snake().head(), grid::center());
        assert_ne!(game.food().position(), grid::center());
    }

    #[test]
    fn one_tick_without_input_moves_one_cell_right() {
        let snake = Snake::new();
        let food = Food::at(Cell::ORIGIN);
        let mut game = Game::with_state(seeded(), snake, food);
        let mut screen = RecordingScreen::default();

        game.tick(&mut screen).unwrap();

        let head = game.snake().head();
        assert_eq!(head, Cell::new(grid::center().x + CELL_SIZE, grid::center().y));
        assert_eq!(game.snake().len(), 1);
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn eating_food_grows_scores_and_relocates() {
        let snake = Snake::new();
        let next = grid::center().step(Direction::Right);
        let mut game = Game::with_state(seeded(), snake, Food::at(next));
        let mut screen = RecordingScreen::default();

        game.tick(&mut screen).unwrap();
        assert_eq!(game.score(), 1);
        assert_eq!(screen.title(), Some("Snake - Score: 1"));
        assert!(game.snake().growth_queued());
        assert!(!game.snake().occupied_cells().contains(&game.food().position()));

        // Growth lands on the following move.
        game.tick(&mut screen).unwrap();
        assert_eq!(game.snake().len(), 2);
        assert!(!game.snake().growth_queued());
    }

    #[test]
    fn self_collision_resets_snake_and_score() {
        // Heading left at (1,1); turning down runs into (1,2).
        let body = [
            Cell::at(1, 1),
            Cell::at(2, 1),
            Cell::at(2, 2),
            Cell::at(1, 2),
            Cell::at(0, 2),
            Cell::at(0, 1),
        ];
        let snake = Snake::from_cells(&body, Direction::Left);
        let mut game = Game::with_state(seeded(), snake, Food::at(Cell::at(20, 20)));
        game.score = 4;
        let mut screen = RecordingScreen::default();

        game.steer(Direction::Down);
        game.tick(&mut screen).unwrap();

        assert_eq!(game.snake().len(), 1);
        assert_eq!(game.snake().head(), grid::center());
        assert_eq!(game.snake().direction(), Direction::Right);
        assert_eq!(game.score(), 0);
        assert_eq!(screen.title(), Some(TITLE));
        assert_eq!(screen.ops.first(), Some(&Op::Clear));
    }

    #[test]
    fn collision_check_uses_head_against_fourth_segment() {
        let c = Cell::at(6, 6);
        let snake = Snake::from_cells(
            &[c, Cell::at(7, 6), Cell::at(7, 7), c, Cell::at(5, 6)],
            Direction::Left,
        );
        assert!(snake.has_self_collision());
    }

    #[test]
    fn reversal_input_is_ignored_by_the_loop() {
        let mut game = Game::with_state(seeded(), Snake::new(), Food::at(Cell::ORIGIN));
        let mut screen = RecordingScreen::default();
        let mut input = ScriptedInput::new(vec![vec![Command::Turn(Direction::Left)]]);

        game.run(&mut screen, &mut input, &mut NoWait).unwrap();

        assert_eq!(game.snake().direction(), Direction::Right);
        assert_eq!(
            game.snake().head(),
            grid::center().step(Direction::Right)
        );
    }

    #[test]
    fn run_applies_turns_and_stops_on_quit() {
        let mut game = Game::with_state(seeded(), Snake::new(), Food::at(Cell::ORIGIN));
        let mut screen = RecordingScreen::default();
        let mut input = ScriptedInput::new(vec![
            vec![],
            vec![Command::Turn(Direction::Up)],
            vec![],
            vec![Command::Quit, Command::Turn(Direction::Left)],
        ]);

        game.run(&mut screen, &mut input, &mut NoWait).unwrap();

        let expected = grid::center()
            .step(Direction::Right)
            .step(Direction::Up)
            .step(Direction::Up);
        assert_eq!(game.snake().head(), expected);
        assert_eq!(game.snake().direction(), Direction::Up);
        assert_eq!(screen.titles.first().map(String::as_str), Some(TITLE));
    }

    #[test]
    fn steady_ticks_redraw_incrementally() {
        let mut game = Game::with_state(seeded(), Snake::new(), Food::at(Cell::ORIGIN));
        let mut screen = RecordingScreen::default();
        game.tick(&mut screen).unwrap();
        screen.take_ops();

        let before = game.snake().head();
        game.tick(&mut screen).unwrap();
        let head = game.snake().head();
        assert_eq!(
            screen.take_ops(),
            vec![
                Op::Fill(Cell::ORIGIN, FOOD_COLOR),
                Op::ClearCell(before),
                Op::Fill(head, SNAKE_HEAD_COLOR),
                Op::Present,
            ]
        );
    }

    #[test]
    fn wrapped_laps_never_trigger_collision_for_short_snake() {
        let mut game = Game::with_state(seeded(), Snake::new(), Food::at(Cell::ORIGIN));
        let mut screen = RecordingScreen::default();
        for _ in 0..200 {
            game.tick(&mut screen).unwrap();
        }
        assert_eq!(game.snake().len(), 1);
        assert_eq!(game.score(), 0);
    }
}
