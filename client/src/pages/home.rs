//! The single portfolio page.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::{
    about::About, contact::Contact, hero::Hero, projects::Projects, site_footer::SiteFooter,
    site_header::SiteHeader, skills::Skills,
};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div>
            <SiteHeader/>
            <main id="top">
                <Hero/>
                <About/>
                <Projects/>
                <Skills/>
                <Contact/>
            </main>
            <SiteFooter/>
        </div>
    }
}
