use crate::consts::FOOD_COLOR;
use crate::grid::{self, Cell};
use crate::render::{Screen, Sprite};
use log::{debug, warn};
use rand::{seq::IteratorRandom, Rng};
use std::collections::HashSet;
use std::io;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Food {
    position: Cell,
}

impl Food {
    pub fn new<R: Rng>(excluded: &HashSet<Cell>, rng: &mut R) -> Self {
        let mut food = Food {
            position: Cell::ORIGIN,
        };
        food.relocate(excluded, rng);
        food
    }

    #[cfg(test)]
    pub(crate) fn at(position: Cell) -> Self {
        Food { position }
    }

    /// Moves the food to a uniformly chosen cell outside `excluded`. A fully
    /// occupied board puts it at the origin instead.
    pub fn relocate<R: Rng>(&mut self, excluded: &HashSet<Cell>, rng: &mut R) {
        self.position = match grid::cells()
            .filter(|cell| !excluded.contains(cell))
            .choose(rng)
        {
            Some(cell) => cell,
            None => {
                warn!("no free cell left for food, placing it at the origin");
                Cell::ORIGIN
            }
        };
        debug!("food placed at {:?}", self.position);
    }
}

impl Sprite for Food {
    fn position(&self) -> Cell {
        self.position
    }

    fn draw<S: Screen>(&self, screen: &mut S) -> io::Result<()> {
        screen.fill_cell(self.position, FOOD_COLOR)
    }
}
