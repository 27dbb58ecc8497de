use super::*;

#[test]
fn light_mode_uses_white_background() {
    assert_eq!(panel_style(ColorMode::Light).background, "white");
}

#[test]
fn dark_mode_uses_dark_gray_background() {
    assert_eq!(panel_style(ColorMode::Dark).background, "gray.900");
}

#[test]
fn padding_is_fixed_and_non_zero_across_modes() {
    let light = panel_style(ColorMode::Light);
    let dark = panel_style(ColorMode::Dark);
    assert_eq!(light.padding, PANEL_PADDING);
    assert_eq!(dark.padding, PANEL_PADDING);
    assert!(PANEL_PADDING > 0);
}

#[test]
fn panel_style_is_deterministic() {
    for mode in [ColorMode::Light, ColorMode::Dark] {
        assert_eq!(panel_style(mode), panel_style(mode));
        assert_eq!(panel_style(mode).css(), panel_style(mode).css());
    }
}

#[test]
fn css_resolves_tokens() {
    assert_eq!(panel_style(ColorMode::Light).css(), "padding: 1rem; background-color: #FFFFFF;");
    assert_eq!(panel_style(ColorMode::Dark).css(), "padding: 1rem; background-color: #171923;");
}

#[test]
fn css_passes_unknown_token_through() {
    let style = PanelStyle { background: "rebeccapurple", padding: 2 };
    assert_eq!(style.css(), "padding: 0.5rem; background-color: rebeccapurple;");
}

#[test]
fn panel_text_is_fixed() {
    assert_eq!(PANEL_TEXT, "Hello Chakra");
}

#[cfg(feature = "ssr")]
#[test]
fn renders_text_and_background_for_each_mode() {
    use leptos::tachys::view::RenderHtml;

    for (mode, token) in [(ColorMode::Light, "white"), (ColorMode::Dark, "gray.900")] {
        let html = Owner::new().with(|| view! { <PlaceholderPanel color_mode=mode/> }.to_html());
        assert!(html.contains("Hello Chakra"), "{html}");
        assert!(html.contains(&format!("data-bg=\"{token}\"")), "{html}");
        assert!(html.contains("padding: 1rem;"), "{html}");
    }
}
