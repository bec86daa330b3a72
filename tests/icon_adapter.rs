use carecal::Error;
use carecal::engine::PointerInput;
use carecal::icon::{Glyph, GlyphRenderer, GlyphVariant, Icon, IconKind};
use std::cell::Cell;
use std::rc::Rc;

/// Renders to the `[prefix, name]` pair plus passthrough attributes.
struct PairRenderer;

impl GlyphRenderer for PairRenderer {
    type Output = (String, String, Option<String>, Option<String>);

    fn render(&self, glyph: &Glyph<'_>) -> Self::Output {
        let [prefix, name] = glyph.icon_pair();
        (
            prefix.to_string(),
            name.to_string(),
            glyph.class_name.map(str::to_string),
            glyph.style.map(str::to_string),
        )
    }
}

#[test]
fn test_glyph_table() {
    let expected = [
        ("add", "plus"),
        ("admin", "user-shield"),
        ("appointment", "calendar"),
        ("appointment-add", "calendar-plus"),
        ("appointment-remove", "calendar-minus"),
        ("calendar", "calendar-alt"),
        ("dashboard", "columns"),
        ("down-arrow", "chevron-down"),
        ("edit", "edit"),
        ("image", "camera"),
        ("incident", "file-alt"),
        ("lab", "microscope"),
        ("left-arrow", "chevron-left"),
        ("medication", "pills"),
        ("patient", "user"),
        ("patient-add", "user-plus"),
        ("patient-remove", "user-minus"),
        ("patients", "users"),
        ("remove", "minus"),
        ("right-arrow", "chevron-right"),
        ("save", "save"),
        ("setting", "cog"),
        ("up-arrow", "chevron-up"),
    ];
    assert_eq!(IconKind::all().count(), expected.len());

    for (id, glyph) in expected {
        let kind: IconKind = id.parse().unwrap();
        assert_eq!(kind.id(), id);
        assert_eq!(kind.glyph_name(), glyph);
        assert_eq!(IconKind::from_glyph_name(glyph), Some(kind));
    }
}

#[test]
fn test_unknown_identifier_is_rejected_at_the_boundary() {
    assert!(matches!(
        "stethoscope".parse::<IconKind>(),
        Err(Error::UnknownIcon(id)) if id == "stethoscope"
    ));
    assert!(serde_json::from_str::<IconKind>("\"stethoscope\"").is_err());
    assert_eq!(IconKind::from_glyph_name("heart"), None);
}

#[test]
fn test_variant_follows_outline_flag() {
    let filled = Icon::new(IconKind::Patient);
    assert_eq!(filled.glyph().variant, GlyphVariant::Filled);
    assert_eq!(filled.render(&PairRenderer).0, "fas");

    let outline = Icon::new(IconKind::Patient).outline(true);
    assert_eq!(outline.glyph().variant, GlyphVariant::Outline);
    assert_eq!(
        outline.render(&PairRenderer),
        ("far".to_string(), "user".to_string(), None, None)
    );
}

#[test]
fn test_class_and_style_pass_through() {
    let icon = Icon::new(IconKind::Save)
        .class_name("icon-lg")
        .style("color: green");
    assert_eq!(
        icon.render(&PairRenderer),
        (
            "fas".to_string(),
            "save".to_string(),
            Some("icon-lg".to_string()),
            Some("color: green".to_string()),
        )
    );
}

#[test]
fn test_click_is_forwarded_verbatim() {
    let seen = Rc::new(Cell::new(None));
    let spy = seen.clone();
    let icon = Icon::new(IconKind::Add).on_click(move |input| spy.set(Some(*input)));

    let input = PointerInput { column: 3, row: 7 };
    icon.click(&input);
    assert_eq!(seen.get(), Some(input));

    // No handler: nothing happens.
    Icon::new(IconKind::Add).click(&input);
}
