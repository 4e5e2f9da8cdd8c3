//! Footer with copyright and outbound links.

use leptos::prelude::*;

use crate::content::{COPYRIGHT_YEAR, FOOTER_LINKS, copyright_line};

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <p>{copyright_line(COPYRIGHT_YEAR)}</p>
            <div class="footer-links">
                {FOOTER_LINKS
                    .iter()
                    .map(|link| {
                        let target = link.external.then_some("_blank");
                        let rel = link.external.then_some("noreferrer");
                        view! { <a href=link.href target=target rel=rel>{link.label}</a> }
                    })
                    .collect_view()}
            </div>
        </footer>
    }
}
