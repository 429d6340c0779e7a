use crate::consts::{BACKGROUND_COLOR, BORDER_COLOR, GRID_HEIGHT, GRID_WIDTH};
use crate::grid::Cell;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use log::warn;
use std::io::{self, stdout, Stdout, Write};

/// Drawing surface the game renders onto once per tick.
pub trait Screen {
    /// Paints the whole board with the background color.
    fn clear(&mut self) -> io::Result<()>;

    /// Draws a filled square with a border outline at `cell`.
    fn fill_cell(&mut self, cell: Cell, color: Color) -> io::Result<()>;

    fn clear_cell(&mut self, cell: Cell) -> io::Result<()>;

    fn set_title(&mut self, title: &str) -> io::Result<()>;

    /// Makes everything drawn since the last call visible.
    fn present(&mut self) -> io::Result<()>;
}

/// Something with a board position that knows how to draw itself.
pub trait Sprite {
    fn position(&self) -> Cell;

    fn draw<S: Screen>(&self, screen: &mut S) -> io::Result<()>;
}

// A grid cell is two terminal columns wide; the frame takes one column/row.
const CELL_COLUMNS: u16 = 2;
const FRAME_WIDTH: u16 = GRID_WIDTH as u16 * CELL_COLUMNS + 2;
const FRAME_HEIGHT: u16 = GRID_HEIGHT as u16 + 2;

/// Terminal-backed [`Screen`]. Raw mode, the alternate screen and the
/// hidden cursor are held for the lifetime of the value.
pub struct Terminal {
    out: Stdout,
    title: String,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = stdout();
        if let Err(e) = execute!(out, EnterAlternateScreen, Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(e);
        }
        Ok(Terminal {
            out,
            title: String::new(),
        })
    }

    fn origin(cell: Cell) -> (u16, u16) {
        (
            1 + cell.column() as u16 * CELL_COLUMNS,
            1 + cell.row() as u16,
        )
    }

    fn draw_frame(&mut self) -> io::Result<()> {
        queue!(
            self.out,
            SetForegroundColor(BORDER_COLOR),
            SetBackgroundColor(BACKGROUND_COLOR)
        )?;
        let horizontal = "─".repeat(FRAME_WIDTH as usize - 2);
        queue!(
            self.out,
            MoveTo(0, 0),
            Print(format!("┌{horizontal}┐")),
            MoveTo(0, FRAME_HEIGHT - 1),
            Print(format!("└{horizontal}┘"))
        )?;
        for y in 1..FRAME_HEIGHT - 1 {
            queue!(
                self.out,
                MoveTo(0, y),
                Print('│'),
                MoveTo(FRAME_WIDTH - 1, y),
                Print('│')
            )?;
        }
        Ok(())
    }

    fn draw_status(&mut self) -> io::Result<()> {
        queue!(
            self.out,
            ResetColor,
            MoveTo(0, FRAME_HEIGHT),
            Clear(ClearType::CurrentLine),
            Print(&self.title),
            MoveTo(0, FRAME_HEIGHT + 1),
            Clear(ClearType::CurrentLine),
            Print("Arrow keys to steer, Esc or 'q' to quit")
        )
    }
}

impl Screen for Terminal {
    fn clear(&mut self) -> io::Result<()> {
        queue!(
            self.out,
            ResetColor,
            Clear(ClearType::All),
            SetBackgroundColor(BACKGROUND_COLOR)
        )?;
        let blank = " ".repeat((FRAME_WIDTH - 2) as usize);
        for y in 1..FRAME_HEIGHT - 1 {
            queue!(self.out, MoveTo(1, y), Print(&blank))?;
        }
        self.draw_frame()?;
        self.draw_status()
    }

    fn fill_cell(&mut self, cell: Cell, color: Color) -> io::Result<()> {
        let (x, y) = Terminal::origin(cell);
        queue!(
            self.out,
            MoveTo(x, y),
            SetForegroundColor(BORDER_COLOR),
            SetBackgroundColor(color),
            Print("[]")
        )
    }

    fn clear_cell(&mut self, cell: Cell) -> io::Result<()> {
        let (x, y) = Terminal::origin(cell);
        queue!(
            self.out,
            MoveTo(x, y),
            SetBackgroundColor(BACKGROUND_COLOR),
            Print("  ")
        )
    }

    fn set_title(&mut self, title: &str) -> io::Result<()> {
        title.clone_into(&mut self.title);
        queue!(self.out, SetTitle(title))?;
        self.draw_status()
    }

    fn present(&mut self) -> io::Result<()> {
        queue!(self.out, ResetColor)?;
        self.out.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        if let Err(e) = execute!(self.out, ResetColor, Show, LeaveAlternateScreen) {
            warn!("failed to restore terminal screen: {e}");
        }
        if let Err(e) = terminal::disable_raw_mode() {
            warn!("failed to leave raw mode: {e}");
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Eq)]
    pub(crate) enum Op {
        Clear,
        Fill(Cell, Color),
        ClearCell(Cell),
        Present,
    }

    /// In-memory [`Screen`] that records every call.
    #[derive(Default)]
    pub(crate) struct RecordingScreen {
        pub(crate) ops: Vec<Op>,
        pub(crate) titles: Vec<String>,
    }

    impl RecordingScreen {
        pub(crate) fn title(&self) -> Option<&str> {
            self.titles.last().map(String::as_str)
        }

        pub(crate) fn take_ops(&mut self) -> Vec<Op> {
            std::mem::take(&mut self.ops)
        }
    }

    impl Screen for RecordingScreen {
        fn clear(&mut self) -> io::Result<()> {
            self.ops.push(Op::Clear);
            Ok(())
        }

        fn fill_cell(&mut self, cell: Cell, color: Color) -> io::Result<()> {
            self.ops.push(Op::Fill(cell, color));
            Ok(())
        }

        fn clear_cell(&mut self, cell: Cell) -> io::Result<()> {
            self.ops.push(Op::ClearCell(cell));
            Ok(())
        }

        fn set_title(&mut self, title: &str) -> io::Result<()> {
            self.titles.push(title.to_owned());
            Ok(())
        }

        fn present(&mut self) -> io::Result<()> {
            self.ops.push(Op::Present);
            Ok(())
        }
    }

    #[test]
    fn cells_map_to_double_width_terminal_columns() {
        assert_eq!(Terminal::origin(Cell::ORIGIN), (1, 1));
        assert_eq!(Terminal::origin(Cell::at(3, 2)), (7, 3));
        assert_eq!(
            Terminal::origin(Cell::at(GRID_WIDTH - 1, GRID_HEIGHT - 1)),
            (FRAME_WIDTH - 3, FRAME_HEIGHT - 2)
        );
    }
}
