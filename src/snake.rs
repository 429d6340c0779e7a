use crate::consts::{MIN_COLLISION_LENGTH, SNAKE_COLOR, SNAKE_HEAD_COLOR};
use crate::grid::{self, Cell, Direction};
use crate::render::{Screen, Sprite};
use std::collections::{HashSet, VecDeque};
use std::io;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    // Head at the front. Never empty.
    body: VecDeque<Cell>,
    direction: Direction,
    pending: Option<Direction>,
    grow_queued: bool,
    freed: Option<Cell>,
}

impl Snake {
    pub fn new() -> Self {
        let mut snake = Snake {
            body: VecDeque::new(),
            direction: Direction::Right,
            pending: None,
            grow_queued: false,
            freed: None,
        };
        snake.reset();
        snake
    }

    /// Builds a snake from explicit segments, head first.
    #[cfg(test)]
    pub(crate) fn from_cells(cells: &[Cell], direction: Direction) -> Self {
        assert!(!cells.is_empty(), "a snake needs at least one segment");
        Snake {
            body: cells.iter().copied().collect(),
            direction,
            pending: None,
            grow_queued: false,
            freed: None,
        }
    }

    pub fn reset(&mut self) {
        self.body.clear();
        self.body.push_back(grid::center());
        self.direction = Direction::Right;
        self.pending = None;
        self.grow_queued = false;
        self.freed = None;
    }

    /// Requests a turn for the next tick. A request to reverse onto the
    /// current direction is dropped; otherwise the latest request wins.
    pub fn set_pending_direction(&mut self, direction: Direction) {
        if direction == self.direction.opposite() {
            return;
        }
        self.pending = Some(direction);
    }

    pub fn apply_pending_direction(&mut self) {
        if let Some(direction) = self.pending.take() {
            self.direction = direction;
        }
    }

    pub fn advance(&mut self) {
        let new_head = self.head().step(self.direction);
        self.body.push_front(new_head);
        if self.grow_queued {
            self.grow_queued = false;
            self.freed = None;
        } else {
            self.freed = self.body.pop_back();
        }
    }

    pub fn queue_growth(&mut self) {
        self.grow_queued = true;
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }

    pub fn occupied_cells(&self) -> HashSet<Cell> {
        self.cells().collect()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending
    }

    pub fn growth_queued(&self) -> bool {
        self.grow_queued
    }

    /// The cell vacated by the tail on the last move, if any.
    pub fn freed(&self) -> Option<Cell> {
        self.freed
    }

    pub fn has_self_collision(&self) -> bool {
        if self.body.len() < MIN_COLLISION_LENGTH {
            return false;
        }
        let head = self.head();
        self.body.iter().skip(1).any(|&cell| cell == head)
    }
}

impl Default for Snake {
    fn default() -> Self {
        Snake::new()
    }
}

impl Sprite for Snake {
    fn position(&self) -> Cell {
        self.head()
    }

    fn draw<S: Screen>(&self, screen: &mut S) -> io::Result<()> {
        if let Some(cell) = self.freed {
            screen.clear_cell(cell)?;
        }
        for cell in self.cells().skip(1) {
            screen.fill_cell(cell, SNAKE_COLOR)?;
        }
        // Head last so it stays visible over any overlapping segment.
        screen.fill_cell(self.head(), SNAKE_HEAD_COLOR)
    }
}
