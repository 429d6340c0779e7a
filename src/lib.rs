//! A snake that wraps around the edges of a fixed board, eats food, grows,
//! and starts over when it runs into itself.

pub mod clock;
pub mod consts;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod render;
pub mod snake;
