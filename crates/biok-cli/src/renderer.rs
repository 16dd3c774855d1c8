//! Terminal rendering of markdown output and the reveal shuffle.
//!
//! Rich output goes through termimad; with `--no-color` the markdown is
//! printed as is and the shuffle frames are not drawn at all.

use std::io::{self, Write};

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Green);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to the terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            for line in markdown.lines() {
                if line.starts_with('#') {
                    println!("\x1b[32m{line}\x1b[0m");
                } else {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        } else {
            print!("{markdown}");
        }
        Ok(())
    }

    /// Draw one shuffle frame over the previous one.
    pub fn frame(&self, title: &str) -> Result<()> {
        if self.rich_enabled {
            let mut stdout = io::stdout().lock();
            write!(stdout, "\r\x1b[2K🎲 {title}")?;
            stdout.flush()?;
        }
        Ok(())
    }

    /// Erase the last shuffle frame.
    pub fn clear_frame(&self) -> Result<()> {
        if self.rich_enabled {
            let mut stdout = io::stdout().lock();
            write!(stdout, "\r\x1b[2K")?;
            stdout.flush()?;
        }
        Ok(())
    }

    /// Print a prompt without a trailing newline.
    pub fn prompt(&self, question: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{question}")?;
        stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
