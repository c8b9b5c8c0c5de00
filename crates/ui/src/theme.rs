use ratatui::style::{Color, Modifier, Style};
use relayhub_core::ModelDescriptor;

/// Which palette to draw with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeVariant {
    #[default]
    Light,
    Dark,
}

impl ThemeVariant {
    pub fn from_dark_mode(dark_mode: bool) -> Self {
        if dark_mode { Self::Dark } else { Self::Light }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Resolved colors for one variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePalette {
    pub bg: Color,
    pub fg: Color,
    pub panel_bg: Color,
    pub muted: Color,
    pub border: Color,
    pub accent: Color,
    pub green: Color,
    pub yellow: Color,
    pub red: Color,
}

/// Color theme for the relay hub
///
/// The dark palette is the iceberg scheme; the light palette is its
/// daytime counterpart.
#[derive(Debug, Clone, Copy)]
pub struct Theme;

impl Theme {
    pub const DARK: ThemePalette = ThemePalette {
        bg: Color::Rgb(22, 24, 33),
        fg: Color::Rgb(198, 200, 209),
        panel_bg: Color::Rgb(30, 33, 50),
        muted: Color::Rgb(107, 112, 137),
        border: Color::Rgb(60, 65, 90),
        accent: Color::Rgb(132, 160, 198),
        green: Color::Rgb(180, 190, 130),
        yellow: Color::Rgb(226, 164, 120),
        red: Color::Rgb(226, 120, 120),
    };

    pub const LIGHT: ThemePalette = ThemePalette {
        bg: Color::Rgb(232, 233, 236),
        fg: Color::Rgb(51, 55, 79),
        panel_bg: Color::Rgb(220, 223, 231),
        muted: Color::Rgb(138, 144, 168),
        border: Color::Rgb(167, 176, 198),
        accent: Color::Rgb(45, 83, 155),
        green: Color::Rgb(102, 134, 22),
        yellow: Color::Rgb(193, 89, 33),
        red: Color::Rgb(204, 81, 122),
    };

    pub fn palette(variant: ThemeVariant) -> ThemePalette {
        match variant {
            ThemeVariant::Light => Self::LIGHT,
            ThemeVariant::Dark => Self::DARK,
        }
    }

    /// Button color for a model, falling back to the palette accent
    pub fn model_color(model: &ModelDescriptor, palette: ThemePalette) -> Color {
        model
            .rgb()
            .map(|(r, g, b)| Color::Rgb(r, g, b))
            .unwrap_or(palette.accent)
    }

    /// Readable label color on top of `bg`
    pub fn contrast_fg(bg: Color) -> Color {
        match bg {
            Color::Rgb(r, g, b) => {
                let luma = 299 * u32::from(r) + 587 * u32::from(g) + 114 * u32::from(b);
                if luma > 150_000 { Color::Black } else { Color::White }
            }
            _ => Color::White,
        }
    }

    pub fn base(palette: ThemePalette) -> Style {
        Style::default().fg(palette.fg).bg(palette.bg)
    }

    pub fn panel(palette: ThemePalette) -> Style {
        Style::default().fg(palette.fg).bg(palette.panel_bg)
    }

    pub fn muted(palette: ThemePalette) -> Style {
        Style::default().fg(palette.muted)
    }

    pub fn border(palette: ThemePalette) -> Style {
        Style::default().fg(palette.border)
    }

    pub fn title(palette: ThemePalette) -> Style {
        Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)
    }

    /// Filled button in the model's own color
    pub fn button(model: &ModelDescriptor, palette: ThemePalette, selected: bool) -> Style {
        let bg = Self::model_color(model, palette);
        let style = Style::default().fg(Self::contrast_fg(bg)).bg(bg);
        if selected { style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED) } else { style }
    }
}
