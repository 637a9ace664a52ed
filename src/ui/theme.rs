use ratatui::style::Color;

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug)]
pub struct Theme {
    pub name: String,
    // Primary colors
    pub primary: ColorSpec,
    pub accent: ColorSpec,
    pub banner: ColorSpec,

    // Text colors
    pub text: ColorSpec,
    pub text_muted: ColorSpec,

    // Status colors
    pub success: ColorSpec,
    pub warning: ColorSpec,
    pub error: ColorSpec,
    pub info: ColorSpec,

    // UI element colors
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub highlight_bg: ColorSpec,
    pub highlight_fg: ColorSpec,
}

/// Color specification in RGB components.
///
#[derive(Clone, Debug)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

impl Theme {
    /// Get the default theme (Tokyo Night).
    ///
    pub fn default() -> Self {
        Self::tokyo_night()
    }

    /// Tokyo Night theme.
    ///
    pub fn tokyo_night() -> Self {
        Theme {
            name: "tokyo-night".to_string(),
            primary: ColorSpec {
                r: 125,
                g: 207,
                b: 255,
            }, // Blue
            accent: ColorSpec {
                r: 255,
                g: 159,
                b: 196,
            }, // Magenta
            banner: ColorSpec {
                r: 255,
                g: 159,
                b: 196,
            }, // Magenta
            text: ColorSpec {
                r: 169,
                g: 177,
                b: 214,
            }, // Foreground
            text_muted: ColorSpec {
                r: 117,
                g: 121,
                b: 148,
            }, // Comment
            success: ColorSpec {
                r: 158,
                g: 206,
                b: 106,
            }, // Green
            warning: ColorSpec {
                r: 255,
                g: 202,
                b: 40,
            }, // Yellow
            error: ColorSpec {
                r: 247,
                g: 118,
                b: 142,
            }, // Red
            info: ColorSpec {
                r: 125,
                g: 207,
                b: 255,
            }, // Blue
            border_active: ColorSpec {
                r: 125,
                g: 207,
                b: 255,
            }, // Blue
            border_normal: ColorSpec {
                r: 117,
                g: 121,
                b: 148,
            }, // Comment
            highlight_bg: ColorSpec {
                r: 125,
                g: 207,
                b: 255,
            }, // Blue
            highlight_fg: ColorSpec {
                r: 26,
                g: 27,
                b: 38,
            }, // Background
        }
    }

    /// Dracula theme.
    ///
    pub fn dracula() -> Self {
        Theme {
            name: "dracula".to_string(),
            primary: ColorSpec {
                r: 189,
                g: 147,
                b: 249,
            }, // Purple
            accent: ColorSpec {
                r: 255,
                g: 121,
                b: 198,
            }, // Pink
            banner: ColorSpec {
                r: 255,
                g: 121,
                b: 198,
            }, // Pink
            text: ColorSpec {
                r: 248,
                g: 248,
                b: 242,
            }, // Foreground
            text_muted: ColorSpec {
                r: 98,
                g: 114,
                b: 164,
            }, // Comment
            success: ColorSpec {
                r: 80,
                g: 250,
                b: 123,
            }, // Green
            warning: ColorSpec {
                r: 255,
                g: 184,
                b: 108,
            }, // Orange
            error: ColorSpec {
                r: 255,
                g: 85,
                b: 85,
            }, // Red
            info: ColorSpec {
                r: 139,
                g: 233,
                b: 253,
            }, // Cyan
            border_active: ColorSpec {
                r: 189,
                g: 147,
                b: 249,
            }, // Purple
            border_normal: ColorSpec {
                r: 98,
                g: 114,
                b: 164,
            }, // Comment
            highlight_bg: ColorSpec {
                r: 139,
                g: 233,
                b: 253,
            }, // Cyan
            highlight_fg: ColorSpec {
                r: 40,
                g: 42,
                b: 54,
            }, // Background
        }
    }

    /// Catppuccin Mocha theme.
    ///
    pub fn catppuccin_mocha() -> Self {
        Theme {
            name: "catppuccin-mocha".to_string(),
            primary: ColorSpec {
                r: 203,
                g: 166,
                b: 247,
            }, // Mauve
            accent: ColorSpec {
                r: 250,
                g: 179,
                b: 135,
            }, // Peach
            banner: ColorSpec {
                r: 245,
                g: 189,
                b: 230,
            }, // Pink
            text: ColorSpec {
                r: 205,
                g: 214,
                b: 244,
            }, // Text
            text_muted: ColorSpec {
                r: 166,
                g: 173,
                b: 200,
            }, // Subtext0
            success: ColorSpec {
                r: 166,
                g: 227,
                b: 161,
            }, // Green
            warning: ColorSpec {
                r: 249,
                g: 226,
                b: 175,
            }, // Yellow
            error: ColorSpec {
                r: 243,
                g: 139,
                b: 168,
            }, // Red
            info: ColorSpec {
                r: 137,
                g: 180,
                b: 250,
            }, // Blue
            border_active: ColorSpec {
                r: 203,
                g: 166,
                b: 247,
            }, // Mauve
            border_normal: ColorSpec {
                r: 166,
                g: 173,
                b: 200,
            }, // Subtext0
            highlight_bg: ColorSpec {
                r: 137,
                g: 180,
                b: 250,
            }, // Blue
            highlight_fg: ColorSpec {
                r: 17,
                g: 17,
                b: 27,
            }, // Base
        }
    }

    /// Rose Pine theme.
    ///
    pub fn rose_pine() -> Self {
        Theme {
            name: "rose-pine".to_string(),
            primary: ColorSpec {
                r: 196,
                g: 167,
                b: 231,
            }, // Purple
            accent: ColorSpec {
                r: 235,
                g: 111,
                b: 146,
            }, // Love
            banner: ColorSpec {
                r: 235,
                g: 111,
                b: 146,
            }, // Love
            text: ColorSpec {
                r: 224,
                g: 222,
                b: 244,
            }, // Text
            text_muted: ColorSpec {
                r: 86,
                g: 82,
                b: 100,
            }, // Muted
            success: ColorSpec {
                r: 49,
                g: 116,
                b: 143,
            }, // Pine
            warning: ColorSpec {
                r: 246,
                g: 193,
                b: 119,
            }, // Gold
            error: ColorSpec {
                r: 235,
                g: 111,
                b: 146,
            }, // Love
            info: ColorSpec {
                r: 156,
                g: 207,
                b: 216,
            }, // Foam
            border_active: ColorSpec {
                r: 196,
                g: 167,
                b: 231,
            }, // Purple
            border_normal: ColorSpec {
                r: 144,
                g: 140,
                b: 170,
            }, // Subtext
            highlight_bg: ColorSpec {
                r: 156,
                g: 207,
                b: 216,
            }, // Foam
            highlight_fg: ColorSpec {
                r: 25,
                g: 23,
                b: 36,
            }, // Base
        }
    }

    /// Get a theme by name.
    ///
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "tokyo-night" => Some(Self::tokyo_night()),
            "dracula" => Some(Self::dracula()),
            "catppuccin-mocha" => Some(Self::catppuccin_mocha()),
            "rose-pine" => Some(Self::rose_pine()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_known_themes() {
        for name in ["tokyo-night", "dracula", "catppuccin-mocha", "rose-pine"] {
            let theme = Theme::from_name(name).unwrap();
            assert_eq!(theme.name, name);
        }
    }

    #[test]
    fn test_from_name_unknown_theme() {
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn test_color_spec_to_color() {
        let spec = ColorSpec { r: 1, g: 2, b: 3 };
        assert_eq!(spec.to_color(), Color::Rgb(1, 2, 3));
    }
}
