//! Terminal output.
//!
//! Results are markdown. With colors enabled termimad lays them out (tables
//! included); `--no-color` prints the markdown source unchanged, which is
//! also what the integration tests compare against.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

enum Output {
    Rich(Box<MadSkin>),
    Plain,
}

/// Prints markdown either styled or as plain text.
pub struct TerminalRenderer {
    output: Output,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let output = if rich_enabled {
            Output::Rich(Box::new(fleet_skin()))
        } else {
            Output::Plain
        };

        Self { output }
    }

    pub fn is_rich(&self) -> bool {
        matches!(self.output, Output::Rich(_))
    }

    /// Render markdown text to terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        match &self.output {
            // Tables need the whole text to size their columns
            Output::Rich(skin) => skin.print_text(markdown),
            Output::Plain => print!("{markdown}"),
        }
        Ok(())
    }
}

fn fleet_skin() -> MadSkin {
    let mut skin = MadSkin::default();
    skin.set_headers_fg(Color::Blue);
    skin.bold.set_fg(Color::Yellow);
    skin.italic.set_fg(Color::Magenta);
    skin.table.set_fg(Color::DarkGrey);
    skin
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_color_is_plain() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.is_rich());
        assert!(renderer.render("# Fleet dashboard\n").is_ok());
    }

    #[test]
    fn test_color_is_rich() {
        assert!(TerminalRenderer::new(true).is_rich());
    }
}
