#![cfg(feature = "ssr")]

use leptos::prelude::*;

use super::*;
use crate::content::Section;
use crate::state::theme::Theme;

fn render_home() -> String {
    let owner = Owner::new();
    owner.with(|| {
        provide_context(RwSignal::new(Theme::default()));
        view! { <HomePage/> }.to_html()
    })
}

#[test]
fn every_nav_anchor_names_a_rendered_section() {
    let html = render_home();
    for section in Section::ALL {
        let anchor = section.anchor();
        assert!(html.contains(&format!("id=\"{anchor}\"")), "missing section #{anchor}");
        assert!(html.contains(&format!("href=\"#{anchor}\"")), "missing nav link to #{anchor}");
    }
}

#[test]
fn main_content_is_the_top_anchor() {
    let html = render_home();
    assert!(html.contains("id=\"top\""));
    assert!(html.contains("href=\"#top\""));
}

#[test]
fn theme_toggle_renders_with_dark_glyph() {
    let html = render_home();
    assert!(html.contains("aria-label=\"Toggle theme\""));
    let icon_at = html.find("class=\"theme-icon\"").expect("theme icon span");
    let icon_close = html[icon_at..].find("</span>").expect("icon span closes") + icon_at;
    assert!(html[icon_at..icon_close].contains("🌙"));
    assert!(!html.contains("☀️"));
}

#[test]
fn contact_form_posts_to_mailto() {
    let html = render_home();
    assert!(html.contains("action=\"mailto:biodun.adefusi@gmail.com\""));
    assert!(html.contains("enctype=\"text/plain\""));
}
