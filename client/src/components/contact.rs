//! Contact form. Submits through the visitor's mail client; there is no
//! server-side handler.

use leptos::prelude::*;

use crate::components::page_section::PageSection;
use crate::content::{Section, contact_action};

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <PageSection section=Section::Contact>
            <form class="contact-form" action=contact_action() method="post" enctype="text/plain">
                <label>
                    "Name"
                    <input type="text" name="name" placeholder="Your name" required/>
                </label>
                <label>
                    "Email"
                    <input type="email" name="email" placeholder="you@example.com" required/>
                </label>
                <label>
                    "Message"
                    <textarea
                        name="message"
                        rows="5"
                        placeholder="Tell me about your project"
                        required
                    ></textarea>
                </label>
                <button class="btn primary" type="submit">"Send"</button>
            </form>
        </PageSection>
    }
}
