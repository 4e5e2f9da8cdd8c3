//! Above-the-fold introduction and headline stats.

use leptos::prelude::*;

use crate::content::{PROFILE, STATS, Section};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-content">
                <p class="eyebrow">{PROFILE.eyebrow}</p>
                <h1>{PROFILE.headline}</h1>
                <p class="subhead">{PROFILE.subhead}</p>
                <div class="cta-group">
                    <a class="btn primary" href=Section::Projects.href()>"View Projects"</a>
                    <a class="btn ghost" href=Section::Contact.href()>"Let’s Talk"</a>
                </div>
            </div>
            <div class="hero-card">
                {STATS
                    .iter()
                    .map(|stat| {
                        view! {
                            <div class="stat">
                                <span class="stat-number">{stat.value}</span>
                                <span class="stat-label">{stat.label}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
