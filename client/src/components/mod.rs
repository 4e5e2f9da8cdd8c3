//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page sections from `content` data; only the theme
//! toggle reads shared state from Leptos context.

pub mod about;
pub mod contact;
pub mod hero;
pub mod page_section;
pub mod projects;
pub mod site_footer;
pub mod site_header;
pub mod skills;
pub mod theme_toggle;
