use crate::icon::{Glyph, GlyphRenderer, GlyphVariant};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

/// Draws glyphs as terminal symbols. `style` is read as a colour name
/// (`"red"`, `"#ff8800"`); anything else is ignored.
pub struct TerminalGlyphs;

fn symbol(name: &str) -> &'static str {
    match name {
        "plus" => "+",
        "minus" => "-",
        "chevron-left" => "‹",
        "chevron-right" => "›",
        "chevron-up" => "˄",
        "chevron-down" => "˅",
        "calendar" | "calendar-alt" => "▦",
        "calendar-plus" => "⊞",
        "calendar-minus" => "⊟",
        "columns" => "▥",
        "edit" => "✎",
        "camera" => "◉",
        "file-alt" => "▤",
        "microscope" => "⚗",
        "pills" => "⬭",
        "user" => "☺",
        "users" => "☻",
        "user-plus" => "☺+",
        "user-minus" => "☺-",
        "user-shield" => "⛨",
        "save" => "⎘",
        "cog" => "⚙",
        _ => "?",
    }
}

impl GlyphRenderer for TerminalGlyphs {
    type Output = Span<'static>;

    fn render(&self, glyph: &Glyph<'_>) -> Self::Output {
        let mut style = Style::default();
        if glyph.variant == GlyphVariant::Filled {
            style = style.add_modifier(Modifier::BOLD);
        }
        if let Some(color) = glyph.style.and_then(|s| s.parse::<Color>().ok()) {
            style = style.fg(color);
        }
        Span::styled(symbol(glyph.name), style)
    }
}
