use ratatui::{
    prelude::{Buffer, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// Alternative keys for one action, e.g. `(&["Space", "↑"], "Rotate")`.
pub(crate) type KeyBinding = (&'static [&'static str], &'static str);

const KEY_STYLE: Style = Style::new().fg(Color::Cyan);
const SEPARATOR_STYLE: Style = Style::new().fg(Color::DarkGray);
const ACTION_STYLE: Style = Style::new().fg(Color::White);

/// Single centered help line: `←/→ Move | ↓ Down | ...`.
#[derive(Debug)]
pub(crate) struct KeyBindingDisplay<'a> {
    bindings: &'a [KeyBinding],
}

impl<'a> KeyBindingDisplay<'a> {
    pub(crate) fn new(bindings: &'a [KeyBinding]) -> Self {
        Self { bindings }
    }

    fn line(&self) -> Line<'static> {
        let mut spans = vec![];
        for (i, (keys, action)) in self.bindings.iter().copied().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", SEPARATOR_STYLE));
            }
            for (j, key) in keys.iter().copied().enumerate() {
                if j > 0 {
                    spans.push(Span::styled("/", SEPARATOR_STYLE));
                }
                spans.push(Span::styled(key, KEY_STYLE));
            }
            spans.push(Span::raw(" "));
            spans.push(Span::styled(action, ACTION_STYLE));
        }
        Line::from(spans).centered()
    }
}

impl Widget for KeyBindingDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.line().render(area, buf);
    }
}
