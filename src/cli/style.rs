//! Terminal styling for run output
//!
//! A run prints a handful of line shapes:
//!
//! ```text
//! Checking...
//! - Repository has no modified or untracked files. Skipping.
//! → Pushing...
//!   ✓ Pushed create-pull-request/patch-abc1234
//!   ✓ Created pull request #42 (create-pull-request/patch-abc1234 → main)
//!     https://github.com/owner/repo/pull/42
//! ```
//!
//! Each fragment gets a [`Tone`]; whether ANSI codes are emitted is decided
//! per stream by `owo-colors` (`NO_COLOR`, `CLICOLOR_FORCE`, TTY checks).
//! Pull request URLs become OSC 8 links where the terminal supports them.

use owo_colors::{OwoColorize, Stream, Style};
use std::fmt::{self, Display};

/// Role of a styled fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Branch names and PR numbers (cyan)
    Accent,
    /// Completed steps (green)
    Success,
    /// Failures (red, stderr)
    Error,
    /// Dry-run notices (yellow)
    Warn,
    /// Skip reasons and step details (dim)
    Muted,
    /// Phase headings (bold)
    Emphasis,
}

impl Tone {
    const fn style(self) -> Style {
        match self {
            Self::Accent => Style::new().cyan(),
            Self::Success => Style::new().green(),
            Self::Error => Style::new().red(),
            Self::Warn => Style::new().yellow(),
            Self::Muted => Style::new().dimmed(),
            Self::Emphasis => Style::new().bold(),
        }
    }

    const fn stream(self) -> Stream {
        match self {
            Self::Error => Stream::Stderr,
            _ => Stream::Stdout,
        }
    }
}

/// A fragment rendered with a [`Tone`] when its stream supports color
#[derive(Debug, Clone)]
pub struct Styled<T> {
    value: T,
    tone: Tone,
    stream: Stream,
}

impl<T> Styled<T> {
    const fn new(value: T, tone: Tone) -> Self {
        Self {
            value,
            tone,
            stream: tone.stream(),
        }
    }

    /// Decide color support against stderr
    #[must_use]
    pub const fn for_stderr(mut self) -> Self {
        self.stream = Stream::Stderr;
        self
    }

    /// Decide color support against stdout
    #[must_use]
    pub const fn for_stdout(mut self) -> Self {
        self.stream = Stream::Stdout;
        self
    }
}

impl<T: Display> Display for Styled<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let style = self.tone.style();
        write!(
            f,
            "{}",
            self.value.if_supports_color(self.stream, |v| v.style(style))
        )
    }
}

/// Tone shorthands for anything printable
pub trait Stylize: Display {
    /// Cyan
    fn accent(&self) -> Styled<&Self> {
        Styled::new(self, Tone::Accent)
    }

    /// Green
    fn success(&self) -> Styled<&Self> {
        Styled::new(self, Tone::Success)
    }

    /// Red, checked against stderr
    fn error(&self) -> Styled<&Self> {
        Styled::new(self, Tone::Error)
    }

    /// Yellow
    fn warn(&self) -> Styled<&Self> {
        Styled::new(self, Tone::Warn)
    }

    /// Dim
    fn muted(&self) -> Styled<&Self> {
        Styled::new(self, Tone::Muted)
    }

    /// Bold
    fn emphasis(&self) -> Styled<&Self> {
        Styled::new(self, Tone::Emphasis)
    }
}

impl<T: Display + ?Sized> Stylize for T {}

/// Step finished
pub const fn check() -> Styled<&'static str> {
    Styled::new("✓", Tone::Success)
}

/// Step failed
pub const fn cross() -> Styled<&'static str> {
    Styled::new("✗", Tone::Error)
}

/// Step started
pub const fn arrow() -> Styled<&'static str> {
    Styled::new("→", Tone::Accent)
}

/// Run skipped
pub const fn skip() -> Styled<&'static str> {
    Styled::new("-", Tone::Muted)
}

/// `url` as an OSC 8 link on stdout, or as plain text where unsupported
pub fn link(url: &str) -> String {
    if supports_hyperlinks::on(supports_hyperlinks::Stream::Stdout) {
        terminal_link::Link::new(url, url).to_string()
    } else {
        url.to_string()
    }
}
