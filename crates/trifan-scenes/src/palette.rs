use trifan_engine::Color;

pub const INK: Color = Color::rgb(10, 10, 10);
pub const CYAN: Color = Color::rgb(0, 204, 204);
pub const OCHRE: Color = Color::rgb(204, 204, 0);
pub const WOOD: Color = Color::rgb(202, 152, 101);
pub const AXLE: Color = Color::rgb(129, 132, 203);
pub const RED: Color = Color::rgb(204, 77, 77);
pub const GREY: Color = Color::rgb(128, 128, 128);
pub const FLAG: Color = Color::rgb(204, 204, 10);

/// Surface clear color.
pub const BACKGROUND: Color = Color::WHITE;
