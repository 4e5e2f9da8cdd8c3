//! About section cards.

use leptos::prelude::*;

use crate::components::page_section::PageSection;
use crate::content::{ABOUT_CARDS, Section};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <PageSection section=Section::About>
            <div class="about-grid">
                {ABOUT_CARDS
                    .iter()
                    .map(|card| {
                        view! {
                            <div class="about-card">
                                <h3>{card.title}</h3>
                                <p>{card.text}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </PageSection>
    }
}
