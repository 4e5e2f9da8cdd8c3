//! Skill pills.

use leptos::prelude::*;

use crate::components::page_section::PageSection;
use crate::content::{SKILLS, Section};

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <PageSection section=Section::Skills>
            <div class="skills-grid">
                {SKILLS.iter().map(|skill| view! { <span class="pill">{*skill}</span> }).collect_view()}
            </div>
        </PageSection>
    }
}
