// Catppuccin Mocha palette used for chart generation
use plotters::style::RGBColor;

pub const BASE: RGBColor = RGBColor(30, 30, 46);
pub const TEXT: RGBColor = RGBColor(205, 214, 244);
pub const SURFACE0: RGBColor = RGBColor(49, 50, 68);
pub const SURFACE1: RGBColor = RGBColor(69, 71, 90);
pub const BLUE: RGBColor = RGBColor(137, 180, 250);
pub const GREEN: RGBColor = RGBColor(166, 227, 161);
pub const RED: RGBColor = RGBColor(243, 139, 168);
