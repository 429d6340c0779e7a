use crate::grid::Direction;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    Quit,
}

impl Command {
    pub fn from_event(event: Event) -> Option<Command> {
        match event {
            Event::Key(key) => Command::from_key_event(key),
            _ => None,
        }
    }

    fn from_key_event(key: KeyEvent) -> Option<Command> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        match key.code {
            KeyCode::Up => Some(Command::Turn(Direction::Up)),
            KeyCode::Down => Some(Command::Turn(Direction::Down)),
            KeyCode::Left => Some(Command::Turn(Direction::Left)),
            KeyCode::Right => Some(Command::Turn(Direction::Right)),
            KeyCode::Esc | KeyCode::Char('q') => Some(Command::Quit),
            // Raw mode swallows SIGINT.
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Command::Quit)
            }
            _ => None,
        }
    }
}

pub trait InputSource {
    /// Returns every command waiting since the last poll without blocking.
    fn poll(&mut self) -> io::Result<Vec<Command>>;
}

pub struct Keyboard;

impl InputSource for Keyboard {
    fn poll(&mut self) -> io::Result<Vec<Command>> {
        let mut commands = Vec::new();
        while event::poll(Duration::ZERO)? {
            if let Some(command) = Command::from_event(event::read()?) {
                commands.push(command);
            }
        }
        Ok(commands)
    }
}
