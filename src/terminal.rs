use std::io::{self, Stdout, Write};

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    style::{self, Color, Stylize},
    terminal::{self, ClearType},
    ExecutableCommand, QueueableCommand,
};

use crate::renderer::TerminalRenderer;

const CELL_WIDTH: usize = 7;

/// Raw-mode alternate screen, restored when dropped.
pub struct Terminal {
    stdout: Stdout,
}

impl Terminal {
    pub fn enter() -> Result<Self> {
        terminal::enable_raw_mode().context("failed to enable raw mode")?;
        // built before the remaining setup so that Drop undoes raw mode on failure
        let mut guard = Self {
            stdout: io::stdout(),
        };
        guard
            .stdout
            .execute(terminal::EnterAlternateScreen)?
            .execute(cursor::Hide)?;
        Ok(guard)
    }

    pub fn draw(&mut self, renderer: &TerminalRenderer) -> Result<()> {
        let out = &mut self.stdout;
        out.queue(terminal::Clear(ClearType::All))?
            .queue(cursor::MoveTo(0, 0))?;

        let header = format!(
            " 2048 | Score: {} | Best: {}",
            renderer.score(),
            renderer.best()
        );
        out.queue(style::Print(format!("\r\n {}\r\n\r\n", header.bold())))?;

        let cells = renderer.cells();
        let size = cells.ncols();
        horizontal_line(out, size, '┌', '┬', '┐')?;
        for (r, row) in cells.rows().into_iter().enumerate() {
            for line in 0..3 {
                out.queue(style::Print(" │"))?;
                for value in row.iter() {
                    let text = match value {
                        Some(v) if line == 1 => format!("{:^width$}", v, width = CELL_WIDTH),
                        _ => " ".repeat(CELL_WIDTH),
                    };
                    out.queue(style::Print(tile_style(text, *value)))?
                        .queue(style::Print("│"))?;
                }
                out.queue(style::Print("\r\n"))?;
            }
            if r + 1 < size {
                horizontal_line(out, size, '├', '┼', '┤')?;
            } else {
                horizontal_line(out, size, '└', '┴', '┘')?;
            }
        }

        out.queue(style::Print("\r\n"))?;
        if let Some(status) = renderer.status() {
            out.queue(style::Print(format!(" {}\r\n\r\n", status.red().bold())))?;
        } else {
            out.queue(style::Print("\r\n\r\n"))?;
        }
        out.queue(style::Print(" Controls: ".grey()))?
            .queue(style::Print("[Arrows/WASD] Move  [R] Reset  [Q] Quit\r\n"))?;
        out.flush().context("failed to flush terminal")?;
        Ok(())
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = self.stdout.execute(cursor::Show);
        let _ = self.stdout.execute(terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

fn horizontal_line(
    out: &mut Stdout,
    size: usize,
    left: char,
    cross: char,
    right: char,
) -> Result<()> {
    let segment = "─".repeat(CELL_WIDTH);
    let inner = vec![segment; size].join(cross.to_string().as_str());
    out.queue(style::Print(format!(" {}{}{}\r\n", left, inner, right)))?;
    Ok(())
}

fn tile_style(text: String, value: Option<u32>) -> style::StyledContent<String> {
    match value {
        None => text.reset(),
        Some(2) | Some(4) => text.with(Color::Black).on(Color::White),
        Some(8) | Some(16) => text.with(Color::White).on(Color::DarkYellow),
        Some(32) | Some(64) => text.with(Color::White).on(Color::Red),
        Some(v) if v < 2048 => text.with(Color::Black).on(Color::Yellow),
        Some(_) => text.with(Color::White).on(Color::Magenta).bold(),
    }
}
