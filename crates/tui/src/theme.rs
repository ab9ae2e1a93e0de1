//! Colour palettes and the finance frame pulse.

use std::time::Duration;

use glance_config::ThemeMode;
use ratatui::style::{Color, Modifier, Style};

/// Colours used by every widget for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Screen background.
    pub background: Color,
    /// Input fields and idle buttons.
    pub surface: Color,
    /// Header bar background.
    pub header: Color,
    /// Body text.
    pub text: Color,
    /// Secondary text and placeholders.
    pub muted: Color,
    /// Active buttons.
    pub accent: Color,
    /// Text on accent backgrounds.
    pub on_accent: Color,
    /// Unfocused widget borders.
    pub border: Color,
    /// Border of the focused widget.
    pub focus: Color,
    /// Error messages.
    pub error: Color,
    /// Links.
    pub link: Color,
    /// Maximum temperatures.
    pub warm: Color,
    /// Minimum temperatures.
    pub cool: Color,
}

impl Palette {
    /// The dark palette.
    pub const DARK: Self = Self {
        background: Color::Rgb(0x23, 0x25, 0x26),
        surface: Color::Rgb(0x41, 0x43, 0x45),
        header: Color::Rgb(0x1e, 0x3c, 0x72),
        text: Color::White,
        muted: Color::Gray,
        accent: Color::Rgb(0x3b, 0x82, 0xf6),
        on_accent: Color::White,
        border: Color::DarkGray,
        focus: Color::Cyan,
        error: Color::Rgb(0xef, 0x44, 0x44),
        link: Color::Rgb(0x60, 0xa5, 0xfa),
        warm: Color::Rgb(0xf8, 0x71, 0x71),
        cool: Color::Rgb(0x60, 0xa5, 0xfa),
    };

    /// The light palette.
    pub const LIGHT: Self = Self {
        background: Color::Rgb(0xf3, 0xf4, 0xf6),
        surface: Color::Rgb(0xe5, 0xe7, 0xeb),
        header: Color::Rgb(0xbf, 0xdb, 0xfe),
        text: Color::Black,
        muted: Color::DarkGray,
        accent: Color::Rgb(0x25, 0x63, 0xeb),
        on_accent: Color::White,
        border: Color::Gray,
        focus: Color::Blue,
        error: Color::Rgb(0xdc, 0x26, 0x26),
        link: Color::Rgb(0x25, 0x63, 0xeb),
        warm: Color::Rgb(0xdc, 0x26, 0x26),
        cool: Color::Rgb(0x25, 0x63, 0xeb),
    };

    /// Returns the palette for a theme.
    #[must_use]
    pub const fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::DARK,
            ThemeMode::Light => Self::LIGHT,
        }
    }

    /// Base style for the screen.
    #[must_use]
    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    /// Style of an active (selected) button.
    #[must_use]
    pub fn active(&self) -> Style {
        Style::default()
            .fg(self.on_accent)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style of an idle button.
    #[must_use]
    pub fn idle(&self) -> Style {
        Style::default().fg(self.text).bg(self.surface)
    }

    /// Style of secondary text.
    #[must_use]
    pub fn dim(&self) -> Style {
        Style::default().fg(self.muted)
    }
}

/// Keyframes of the finance frame colour.
pub const PULSE_STOPS: [(u8, u8, u8); 5] = [
    (0x1a, 0x20, 0x2c),
    (0x2d, 0x37, 0x48),
    (0x4a, 0x55, 0x68),
    (0x2d, 0x37, 0x48),
    (0x1a, 0x20, 0x2c),
];

/// Time to play [`PULSE_STOPS`] once.
pub const PULSE_PERIOD: Duration = Duration::from_secs(5);

/// Returns the finance frame colour `elapsed` after startup.
///
/// The keyframes play forward over [`PULSE_PERIOD`], then backward, forever.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use ratatui::style::Color;
/// use glance_tui::theme::pulse_color;
///
/// assert_eq!(pulse_color(Duration::ZERO), Color::Rgb(0x1a, 0x20, 0x2c));
/// assert_eq!(pulse_color(Duration::from_millis(2500)), Color::Rgb(0x4a, 0x55, 0x68));
/// ```
#[must_use]
pub fn pulse_color(elapsed: Duration) -> Color {
    let period = PULSE_PERIOD.as_secs_f64();
    let cycle = elapsed.as_secs_f64() % (2.0 * period);
    let progress = (if cycle > period { 2.0 * period - cycle } else { cycle }) / period;

    let last = PULSE_STOPS.len() - 1;
    let position = progress * last as f64;
    let index = (position.floor() as usize).min(last - 1);
    let fraction = position - index as f64;

    let (from, to) = (PULSE_STOPS[index], PULSE_STOPS[index + 1]);
    Color::Rgb(
        mix(from.0, to.0, fraction),
        mix(from.1, to.1, fraction),
        mix(from.2, to.2, fraction),
    )
}

fn mix(from: u8, to: u8, fraction: f64) -> u8 {
    let value = f64::from(from) + (f64::from(to) - f64::from(from)) * fraction;
    value.round().clamp(0.0, 255.0) as u8
}
