use palette::Srgb;
use role_preview::gradient::{Decoration, parse_color, srgb_to_hex};

#[test]
fn test_css_contains_stops_in_order() {
    let deco = Decoration::new("#000000", "#ffffff");
    let css = deco.css();

    assert!(css.contains("linear-gradient(135deg, #000000, #ffffff)"));
    let first = css.find("#000000").unwrap();
    let second = css.find("#ffffff").unwrap();
    assert!(first < second);
}

#[test]
fn test_css_clips_to_text_with_transparent_fill() {
    let css = Decoration::new("#4cadd0", "#b2f9ff").css();
    assert!(css.contains("background-clip: text;"));
    assert!(css.contains("-webkit-background-clip: text;"));
    assert!(css.contains("color: transparent;"));
}

#[test]
fn test_css_passes_garbage_through() {
    // No validation: whatever the user typed reaches the stylesheet
    let css = Decoration::new("not a color", "#ffffff").css();
    assert!(css.contains("linear-gradient(135deg, not a color, #ffffff)"));
}

#[test]
fn test_sample_endpoints_are_exact() {
    let deco = Decoration::new("#000000", "#ffffff");
    assert_eq!(deco.sample(0.0), Srgb::new(0u8, 0, 0));
    assert_eq!(deco.sample(1.0), Srgb::new(255u8, 255, 255));
}

#[test]
fn test_sample_midpoint() {
    let deco = Decoration::new("#000000", "#ffffff");
    assert_eq!(deco.sample(0.5), Srgb::new(128u8, 128, 128));
}

#[test]
fn test_sample_clamps_t() {
    let deco = Decoration::new("#102030", "#405060");
    assert_eq!(deco.sample(-1.0), deco.sample(0.0));
    assert_eq!(deco.sample(2.0), deco.sample(1.0));
}

#[test]
fn test_sample_falls_back_to_gray_for_garbage() {
    let deco = Decoration::new("nope", "also nope");
    assert_eq!(deco.sample(0.0), Srgb::new(0x99u8, 0x99, 0x99));
    assert_eq!(deco.sample(1.0), Srgb::new(0x99u8, 0x99, 0x99));
}

#[test]
fn test_styled_spans_one_per_glyph() {
    let deco = Decoration::new("#000000", "#ffffff");
    let spans = deco.styled_spans("Example 1");
    assert_eq!(spans.len(), "Example 1".chars().count());
}

#[test]
fn test_styled_spans_empty_text() {
    let deco = Decoration::new("#000000", "#ffffff");
    assert!(deco.styled_spans("").is_empty());
}

#[test]
fn test_styled_spans_single_glyph_gets_first_stop() {
    use ratatui::style::Color;

    let deco = Decoration::new("#4cadd0", "#b2f9ff");
    let spans = deco.styled_spans("X");
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].style.fg, Some(Color::Rgb(0x4c, 0xad, 0xd0)));
}

#[test]
fn test_styled_spans_endpoints_match_stops() {
    use ratatui::style::Color;

    let deco = Decoration::new("#000000", "#ffffff");
    let spans = deco.styled_spans("abc");
    assert_eq!(spans[0].style.fg, Some(Color::Rgb(0, 0, 0)));
    assert_eq!(spans[2].style.fg, Some(Color::Rgb(255, 255, 255)));
}

#[test]
fn test_parse_color_hex() {
    assert_eq!(parse_color("#4cadd0").unwrap(), Srgb::new(0x4c, 0xad, 0xd0));
}

#[test]
fn test_parse_color_named() {
    // Any CSS color format is accepted, not just hex
    assert_eq!(parse_color("white").unwrap(), Srgb::new(255u8, 255, 255));
}

#[test]
fn test_parse_color_invalid() {
    assert!(parse_color("definitely not a color").is_err());
}

#[test]
fn test_srgb_to_hex_roundtrip() {
    let color = Srgb::new(0x9eu8, 0x6b, 0xff);
    assert_eq!(srgb_to_hex(color), "#9e6bff");
    assert_eq!(parse_color(&srgb_to_hex(color)).unwrap(), color);
}
