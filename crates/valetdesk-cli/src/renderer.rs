//! Terminal rendering for the markdown produced by `valetdesk_core::display`.
//!
//! Rich mode styles headers, emphasis and status badges with termimad;
//! plain mode writes the markdown through untouched.

use std::io::{self, Write};

use anyhow::{Context, Result};
use termimad::{crossterm::style::Color, MadSkin};

const ACTIVE_BADGE: &str = "● ACTIVE";
const COMPLETED_BADGE: &str = "✓ COMPLETED";

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Cyan);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::DarkGrey);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to stdout.
    pub fn render(&self, markdown: &str) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();

        if !self.rich_enabled {
            out.write_all(markdown.as_bytes())
                .context("Failed to write output")?;
            return out.flush().context("Failed to flush output");
        }

        for line in markdown.lines() {
            let written = if line.starts_with('#') {
                // Keep the hash marks; termimad would strip them
                writeln!(out, "\x1b[36m{}\x1b[0m", colorize_badges(line))
            } else {
                writeln!(out, "{}", self.skin.inline(line))
            };
            written.context("Failed to write output")?;
        }
        out.flush().context("Failed to flush output")
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Green for active, grey for completed; the header color resumes after.
fn colorize_badges(line: &str) -> String {
    line.replace(ACTIVE_BADGE, &format!("\x1b[32m{ACTIVE_BADGE}\x1b[36m"))
        .replace(COMPLETED_BADGE, &format!("\x1b[90m{COMPLETED_BADGE}\x1b[36m"))
}
