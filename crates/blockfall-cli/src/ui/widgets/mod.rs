use ratatui::{
    layout::{Rect, Size},
    widgets::Block as BlockWidget,
};

pub(crate) use self::{
    board_display::*, board_view::*, cell_display::*, key_binding_display::*, stats_display::*,
};

mod board_display;
mod board_view;
mod cell_display;
mod key_binding_display;
mod stats_display;

mod color {
    use blockfall_engine::PieceColor;
    use ratatui::style::Color;

    pub const YELLOW: Color = Color::Rgb(255, 255, 0);
    pub const RED: Color = Color::Rgb(255, 0, 0);
    pub const GRAY: Color = Color::Rgb(127, 127, 127);
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);

    pub const fn piece(color: PieceColor) -> Color {
        let (r, g, b) = color.rgb();
        Color::Rgb(r, g, b)
    }
}

mod style {
    use blockfall_engine::PieceColor;
    use ratatui::style::{Color, Style};

    use super::color;

    const fn fg_bg(fg: Color, bg: Color) -> Style {
        Style::new().fg(fg).bg(bg)
    }

    const fn bg_only(color: Color) -> Style {
        Style::new().fg(color).bg(color)
    }

    pub const DEFAULT: Style = fg_bg(color::WHITE, color::BLACK);
    pub const EMPTY_DOT: Style = fg_bg(color::GRAY, color::BLACK);
    pub const READY_POPUP: Style = fg_bg(color::BLACK, color::YELLOW);
    pub const GAME_OVER_POPUP: Style = fg_bg(color::WHITE, color::RED);

    pub const fn piece(color: PieceColor) -> Style {
        bg_only(color::piece(color))
    }
}

/// Size needed to draw `content` inside the optional `block`, borders and
/// padding included.
fn framed_size(block: Option<&BlockWidget>, content: Size) -> Size {
    let Some(block) = block else {
        return content;
    };
    // Any area larger than the block's own decoration will do.
    let outer = Rect::new(0, 0, content.width + 32, content.height + 32);
    let inner = block.inner(outer);
    Size::new(
        content.width + outer.width - inner.width,
        content.height + outer.height - inner.height,
    )
}
