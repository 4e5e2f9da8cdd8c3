//! Sticky site header: name, section links, theme toggle.

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::content::{PROFILE, Section};

#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="site-header">
            <nav class="nav">
                <a class="logo" href="#top">{PROFILE.name}</a>
                <div class="nav-links">
                    {Section::ALL
                        .into_iter()
                        .map(|section| view! { <a href=section.href()>{section.label()}</a> })
                        .collect_view()}
                </div>
                <ThemeToggle/>
            </nav>
        </header>
    }
}
