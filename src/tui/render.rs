//! In-place frame rendering.
//!
//! A frame is the prompt line, one line per item and the hint line. Every
//! redraw first moves the cursor back up over the previous frame, so the
//! terminal never scrolls after the first frame. Each line is cleared and
//! starts at column 0; lines end in `\r\n` because raw mode disables the
//! terminal's own newline translation.

use std::io::{self, Write};

use crossterm::cursor::MoveUp;
use crossterm::queue;
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::terminal::{Clear, ClearType};

use crate::core::state::Menu;

const SELECTED_MARKER: &str = "> ";
const UNSELECTED_MARKER: &str = "  ";

#[derive(Debug, Default)]
pub struct Renderer {
    /// Lines occupied by the last frame (0 before the first render).
    rendered_lines: u16,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rendered_lines(&self) -> u16 {
        self.rendered_lines
    }

    pub fn render<W: Write>(&mut self, out: &mut W, menu: &Menu) -> io::Result<()> {
        if self.rendered_lines > 0 {
            queue!(out, MoveUp(self.rendered_lines))?;
        }

        begin_line(out)?;
        queue!(out, Print(menu.prompt()), Print("\r\n"))?;

        for (i, item) in menu.items().iter().enumerate() {
            begin_line(out)?;
            if i == menu.selected() {
                queue!(
                    out,
                    SetAttribute(Attribute::Reverse),
                    Print(SELECTED_MARKER),
                    Print(item),
                    SetAttribute(Attribute::Reset),
                    Print("\r\n")
                )?;
            } else {
                queue!(out, Print(UNSELECTED_MARKER), Print(item), Print("\r\n"))?;
            }
        }

        begin_line(out)?;
        queue!(out, Print(menu.hint()), Print("\r\n"))?;
        out.flush()?;

        self.rendered_lines = u16::try_from(menu.items().len() + 2).unwrap_or(u16::MAX);
        Ok(())
    }
}

fn begin_line<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, Clear(ClearType::CurrentLine), Print('\r'))
}
