//! Output management and formatting.
//!
//! [`OutputManager`] is also the [`Reporter`] the orchestrator talks to, so
//! pipeline status lines and CLI messages share one look.

use std::io;

use console::Term;
use owo_colors::{OwoColorize, Style};
use svcgen_core::{application::Reporter, domain::StatusLevel};
use tracing::warn;

use crate::cli::GlobalArgs;
use crate::config::AppConfig;

/// Colour for each status level.
pub type StyleFn = fn(StatusLevel) -> Style;

/// Default palette: blue info, green success, yellow warning, red error.
pub fn style_for(level: StatusLevel) -> Style {
    let style = Style::new().bold();
    match level {
        StatusLevel::Info => style.blue(),
        StatusLevel::Success => style.green(),
        StatusLevel::Warning => style.yellow(),
        StatusLevel::Error => style.red(),
    }
}

/// Glyph printed before a status line.
pub fn glyph(level: StatusLevel) -> &'static str {
    match level {
        StatusLevel::Info => "\u{2139}",    // ℹ
        StatusLevel::Success => "\u{2713}", // ✓
        StatusLevel::Warning => "\u{26a0}", // ⚠
        StatusLevel::Error => "\u{2717}",   // ✗
    }
}

/// Manages CLI output based on configuration.
#[derive(Clone)]
pub struct OutputManager {
    quiet: bool,
    no_color: bool,
    style: StyleFn,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        Self {
            quiet: args.quiet,
            no_color: args.no_color || config.output.no_color,
            style: style_for,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Status line `<glyph> <msg>`. Error lines are *not* suppressed in
    /// quiet mode.
    pub fn status(&self, level: StatusLevel, msg: &str) -> io::Result<()> {
        if self.quiet && level != StatusLevel::Error {
            return Ok(());
        }
        self.term.write_line(&self.render(level, msg))
    }

    /// The exact text [`Self::status`] writes.
    pub fn render(&self, level: StatusLevel, msg: &str) -> String {
        let line = format!("{} {msg}", glyph(level));
        if self.no_color {
            line
        } else {
            line.style((self.style)(level)).to_string()
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }
}

impl Reporter for OutputManager {
    fn report(&self, level: StatusLevel, message: &str) {
        if let Err(e) = self.status(level, message) {
            warn!(error = %e, "Failed to write status line");
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
