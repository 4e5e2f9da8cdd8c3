//! Project showcase grid.

use leptos::prelude::*;

use crate::components::page_section::PageSection;
use crate::content::{PROJECTS, Section};

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <PageSection section=Section::Projects>
            <div class="projects-grid">
                {PROJECTS
                    .iter()
                    .map(|project| {
                        view! {
                            <article class="project-card">
                                <div class="project-tag">{project.tag}</div>
                                <h3>{project.title}</h3>
                                <p>{project.description}</p>
                                <a class="project-link" href=project.link>"View Project →"</a>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </PageSection>
    }
}
