//! Semantic color palette.

use owo_colors::{OwoColorize, Stream, Style};

/// What a piece of output means, independent of how it is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Success,
    Error,
    Muted,
    Header,
}

impl Role {
    pub fn style(self) -> Style {
        match self {
            Self::Success => Style::new().green().bold(),
            Self::Error => Style::new().red().bold(),
            Self::Muted => Style::new().dimmed(),
            Self::Header => Style::new().bold(),
        }
    }

    /// Renders `value`, styled only when colors are enabled and `stream` is a
    /// color-capable terminal.
    pub fn paint(self, value: &dyn std::fmt::Display, stream: Stream) -> String {
        if super::no_color() {
            return value.to_string();
        }
        value
            .if_supports_color(stream, |text| text.style(self.style()))
            .to_string()
    }
}

/// Extension methods applying a [`Role`] for stdout.
pub trait SemanticStyle {
    fn success(&self) -> String;
    fn error(&self) -> String;
    fn muted(&self) -> String;
    fn header(&self) -> String;
}

impl<T: std::fmt::Display> SemanticStyle for T {
    fn success(&self) -> String {
        Role::Success.paint(self, Stream::Stdout)
    }

    fn error(&self) -> String {
        Role::Error.paint(self, Stream::Stdout)
    }

    fn muted(&self) -> String {
        Role::Muted.paint(self, Stream::Stdout)
    }

    fn header(&self) -> String {
        Role::Header.paint(self, Stream::Stdout)
    }
}
