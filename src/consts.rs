use crossterm::style::Color;
use simplelog::LevelFilter;
use std::time::Duration;

pub const CELL_SIZE: i32 = 20;
pub const BOARD_WIDTH: i32 = 640;
pub const BOARD_HEIGHT: i32 = 480;

pub const GRID_WIDTH: i32 = BOARD_WIDTH / CELL_SIZE;
pub const GRID_HEIGHT: i32 = BOARD_HEIGHT / CELL_SIZE;

pub const TICKS_PER_SECOND: u32 = 10;

pub const fn tick_period() -> Duration {
    Duration::from_nanos(1_000_000_000 / TICKS_PER_SECOND as u64)
}

pub const BACKGROUND_COLOR: Color = Color::Rgb { r: 0, g: 0, b: 0 };
pub const BORDER_COLOR: Color = Color::Rgb {
    r: 93,
    g: 216,
    b: 228,
};
pub const FOOD_COLOR: Color = Color::Rgb { r: 255, g: 0, b: 0 };
pub const SNAKE_COLOR: Color = Color::Rgb { r: 0, g: 255, b: 0 };
pub const SNAKE_HEAD_COLOR: Color = Color::Rgb { r: 0, g: 200, b: 0 };

pub const TITLE: &str = "Snake";

pub fn score_title(score: u32) -> String {
    format!("{TITLE} - Score: {score}")
}

pub const LOG_FILE: &str = "snake.log";
pub const LOG_LEVEL: LevelFilter = LevelFilter::Info;

// Below this length single-step movement cannot produce a real overlap.
pub const MIN_COLLISION_LENGTH: usize = 5;
