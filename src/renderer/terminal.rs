//! Crossterm output: raw mode, alternate screen, half-block flush

use std::io::{self, Write};

use crossterm::{
    cursor, execute, queue,
    style::{self, Color},
    terminal,
};

use super::canvas::{Canvas, Rgb};
use super::scene::{
    CANVAS_HEIGHT, CANVAS_WIDTH, HUD_ROWS, TextLine, draw_playfield, hud_lines, overlay_lines,
};
use crate::sim::GameState;

fn color(c: Rgb) -> Color {
    Color::Rgb {
        r: c.0,
        g: c.1,
        b: c.2,
    }
}

/// Terminal size needed to show the whole playfield
pub fn required_size() -> (u16, u16) {
    (CANVAS_WIDTH as u16, (HUD_ROWS + CANVAS_HEIGHT / 2) as u16)
}

/// Owns the terminal while the game runs; restores it on drop
pub struct TerminalRenderer<W: Write> {
    out: W,
    canvas: Canvas,
    active: bool,
}

impl<W: Write> TerminalRenderer<W> {
    /// Switch the terminal to raw mode on the alternate screen
    pub fn new(mut out: W) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(terminal::ClearType::All)
        )?;
        Ok(Self {
            out,
            canvas: Canvas::new(CANVAS_WIDTH, CANVAS_HEIGHT),
            active: true,
        })
    }

    /// Draw one frame
    pub fn draw(&mut self, state: &GameState, fps: Option<u32>) -> io::Result<()> {
        let (cols, rows) = terminal::size()?;
        let (need_cols, need_rows) = required_size();
        if cols < need_cols || rows < need_rows {
            queue!(
                self.out,
                terminal::Clear(terminal::ClearType::All),
                cursor::MoveTo(0, 0),
                style::ResetColor,
                style::Print(format!(
                    "Terminal too small: {}x{} needed, {}x{} available",
                    need_cols, need_rows, cols, rows
                ))
            )?;
            return self.out.flush();
        }

        draw_playfield(&mut self.canvas, state);

        queue!(self.out, style::ResetColor)?;
        for row in 0..HUD_ROWS as u16 {
            queue!(
                self.out,
                cursor::MoveTo(0, row),
                terminal::Clear(terminal::ClearType::CurrentLine)
            )?;
        }
        self.flush_canvas()?;

        for line in hud_lines(state, fps)
            .iter()
            .chain(overlay_lines(state).iter())
        {
            self.print_line(line)?;
        }

        queue!(self.out, style::ResetColor)?;
        self.out.flush()
    }

    fn print_line(&mut self, line: &TextLine) -> io::Result<()> {
        queue!(self.out, cursor::MoveTo(line.col, line.row))?;
        // Text over the playfield keeps the background of the cell it covers
        let row = line.row as usize;
        if row >= HUD_ROWS {
            queue!(self.out, style::SetForegroundColor(color(line.color)))?;
            let cell_row = row - HUD_ROWS;
            for (i, ch) in line.text.chars().enumerate() {
                let col = line.col as usize + i;
                if col >= self.canvas.width() || cell_row >= self.canvas.cell_rows() {
                    break;
                }
                let (upper, _) = self.canvas.cell(col, cell_row);
                queue!(
                    self.out,
                    style::SetBackgroundColor(color(upper)),
                    style::Print(ch)
                )?;
            }
        } else {
            queue!(
                self.out,
                style::ResetColor,
                style::SetForegroundColor(color(line.color)),
                style::Print(&line.text)
            )?;
        }
        Ok(())
    }

    fn flush_canvas(&mut self) -> io::Result<()> {
        let mut prev_fg = None;
        let mut prev_bg = None;
        for row in 0..self.canvas.cell_rows() {
            queue!(self.out, cursor::MoveTo(0, (HUD_ROWS + row) as u16))?;
            for col in 0..self.canvas.width() {
                let (top, bot) = self.canvas.cell(col, row);
                if prev_bg != Some(bot) {
                    queue!(self.out, style::SetBackgroundColor(color(bot)))?;
                    prev_bg = Some(bot);
                }
                if top == bot {
                    queue!(self.out, style::Print(' '))?;
                } else {
                    if prev_fg != Some(top) {
                        queue!(self.out, style::SetForegroundColor(color(top)))?;
                        prev_fg = Some(top);
                    }
                    queue!(self.out, style::Print('\u{2580}'))?; // ▀
                }
            }
        }
        Ok(())
    }

    /// Leave raw mode and the alternate screen
    pub fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        execute!(
            self.out,
            style::ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        )?;
        terminal::disable_raw_mode()
    }
}

impl<W: Write> Drop for TerminalRenderer<W> {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            log::error!("Failed to restore terminal: {}", e);
        }
    }
}
