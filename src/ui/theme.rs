// Bloom palette (dark variant reads best on terminal backgrounds)

use ratatui::style::Color;

pub const GREEN_900: Color = Color::Rgb(0x2D, 0x3B, 0x2D);
pub const GREEN_300: Color = Color::Rgb(0xB8, 0xC9, 0xB8);
pub const PINK_100: Color = Color::Rgb(0xFF, 0xF1, 0xF1);
pub const GRAY: Color = Color::Rgb(0x23, 0x23, 0x23);
pub const WHITE_150: Color = Color::Rgb(0x3A, 0x3A, 0x3A);
pub const WHITE_850: Color = Color::Rgb(0xD9, 0xD9, 0xD9);

pub const PRIMARY: Color = GREEN_900;
pub const SECONDARY: Color = GREEN_300;
pub const BACKGROUND: Color = GRAY;
pub const SURFACE: Color = WHITE_150;
pub const ON_PRIMARY: Color = Color::White;
pub const ON_SECONDARY: Color = GRAY;
pub const ON_BACKGROUND: Color = WHITE_850;
pub const DIVIDER: Color = Color::DarkGray;
pub const HOTKEY: Color = Color::Yellow;
pub const FOOTER_BG: Color = Color::DarkGray;
