use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    // Primary colors
    pub primary: ColorSpec,
    pub banner: ColorSpec,

    // Text colors
    pub text: ColorSpec,
    pub text_muted: ColorSpec,
    pub link: ColorSpec,

    // Background colors
    pub background: ColorSpec,

    // Outcome colors
    pub clear: ColorSpec,
    pub not_clear: ColorSpec,
    pub warning: ColorSpec,

    // UI element colors
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub button_bg: ColorSpec,
    pub button_fg: ColorSpec,
}

/// Color specification that can be serialized/deserialized.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        ColorSpec { r, g, b }
    }

    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }

    pub fn to_rgb(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    /// Light scheme: black text on white, as on a phone in light mode.
    ///
    pub fn light() -> Self {
        Theme {
            name: "light".to_string(),
            primary: ColorSpec::new(0, 122, 255),     // Blue
            banner: ColorSpec::new(165, 0, 52),       // Chapman red
            text: ColorSpec::new(0, 0, 0),            // Black
            text_muted: ColorSpec::new(110, 110, 115), // Gray
            link: ColorSpec::new(0, 122, 255),        // Blue
            background: ColorSpec::new(255, 255, 255), // White
            clear: ColorSpec::new(52, 199, 89),       // Green
            not_clear: ColorSpec::new(255, 59, 48),   // Red
            warning: ColorSpec::new(255, 59, 48),     // Red
            border_active: ColorSpec::new(0, 122, 255),
            border_normal: ColorSpec::new(199, 199, 204),
            button_bg: ColorSpec::new(0, 122, 255),
            button_fg: ColorSpec::new(255, 255, 255),
        }
    }

    /// Dark scheme: white text on black.
    ///
    pub fn dark() -> Self {
        Theme {
            name: "dark".to_string(),
            primary: ColorSpec::new(10, 132, 255),
            banner: ColorSpec::new(255, 69, 58),
            text: ColorSpec::new(255, 255, 255),
            text_muted: ColorSpec::new(152, 152, 157),
            link: ColorSpec::new(10, 132, 255),
            background: ColorSpec::new(0, 0, 0),
            clear: ColorSpec::new(48, 209, 88),
            not_clear: ColorSpec::new(255, 69, 58),
            warning: ColorSpec::new(255, 69, 58),
            border_active: ColorSpec::new(10, 132, 255),
            border_normal: ColorSpec::new(72, 72, 74),
            button_bg: ColorSpec::new(10, 132, 255),
            button_fg: ColorSpec::new(255, 255, 255),
        }
    }

    /// Get all available themes.
    ///
    pub fn all() -> Vec<Theme> {
        vec![Self::light(), Self::dark()]
    }

    /// Find a theme by name, falling back to the light theme.
    ///
    pub fn by_name(name: &str) -> Self {
        Self::all()
            .into_iter()
            .find(|theme| theme.name == name)
            .unwrap_or_default()
    }
}
