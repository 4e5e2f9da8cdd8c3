//! Shared `<section>` frame with heading and blurb.

#[cfg(test)]
#[path = "page_section_test.rs"]
mod page_section_test;

use leptos::prelude::*;

use crate::content::Section;

pub fn section_class(section: Section) -> &'static str {
    if section.is_alt() { "section alt" } else { "section" }
}

/// Anchored page section; `children` render below the header.
#[component]
pub fn PageSection(section: Section, children: Children) -> impl IntoView {
    view! {
        <section id=section.anchor() class=section_class(section)>
            <div class="section-header">
                <h2>{section.label()}</h2>
                <p>{section.blurb()}</p>
            </div>
            {children()}
        </section>
    }
}
