//! Static copy rendered by the portfolio page.
//!
//! Everything the page says lives here as typed `'static` data; components
//! only decide layout.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

pub const COPYRIGHT_YEAR: u16 = 2026;

pub struct Profile {
    pub name: &'static str,
    pub eyebrow: &'static str,
    pub headline: &'static str,
    pub subhead: &'static str,
    pub email: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Abiodun Michael Adefusi",
    eyebrow: "Hi, I’m Abiodun Michael Adefusi",
    headline: "Building premium web experiences with clarity, speed, and style.",
    subhead: "Front-end developer focused on elegant typography, accessibility, and fast, \
              delightful user interfaces.",
    email: "biodun.adefusi@gmail.com",
};

/// Page sections reachable from the header navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Projects,
    Skills,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [Self::About, Self::Projects, Self::Skills, Self::Contact];

    /// Element id of the rendered `<section>`.
    pub fn anchor(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Projects => "Projects",
            Self::Skills => "Skills",
            Self::Contact => "Contact",
        }
    }

    /// Subtitle under the section heading.
    pub fn blurb(self) -> &'static str {
        match self {
            Self::About => "Short bio that highlights your strengths and what you love building.",
            Self::Projects => "Replace these with your real projects.",
            Self::Skills => "Tools and technologies I use day-to-day.",
            Self::Contact => "Want to work together? Send a message.",
        }
    }

    /// In-page link target, e.g. `#about`.
    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }

    /// Alternating sections get the tinted background.
    pub fn is_alt(self) -> bool {
        matches!(self, Self::Projects | Self::Contact)
    }
}

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { value: "3+", label: "Years Experience" },
    Stat { value: "20+", label: "Projects Built" },
    Stat { value: "100%", label: "Client Satisfaction" },
];

pub struct AboutCard {
    pub title: &'static str,
    pub text: &'static str,
}

pub const ABOUT_CARDS: &[AboutCard] = &[
    AboutCard {
        title: "What I do",
        text: "I design and build responsive web apps using modern tools, with a focus on \
               accessibility, performance, and clean architecture.",
    },
    AboutCard {
        title: "What I value",
        text: "Clear communication, well-structured code, and products that feel great to use.",
    },
    AboutCard {
        title: "Currently exploring",
        text: "Design systems, TypeScript, and performance optimization.",
    },
];

pub struct Project {
    pub tag: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub link: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        tag: "Web App",
        title: "Portfolio Builder",
        description: "Fast, responsive site for personal branding and showcasing work.",
        link: "#",
    },
    Project {
        tag: "E-commerce",
        title: "ShopEase",
        description: "Clean UI and optimized checkout flow for higher conversions.",
        link: "#",
    },
    Project {
        tag: "Dashboard",
        title: "Insight Analytics",
        description: "Interactive dashboards with charts and filters.",
        link: "#",
    },
];

pub const SKILLS: &[&str] = &["HTML", "CSS", "JavaScript", "React", "TypeScript", "Git", "Figma"];

pub struct FooterLink {
    pub label: &'static str,
    pub href: &'static str,
    /// Opens in a new tab with `rel="noreferrer"`.
    pub external: bool,
}

pub const FOOTER_LINKS: &[FooterLink] = &[
    FooterLink { label: "GitHub", href: "https://github.com/Code_Abbey", external: true },
    FooterLink { label: "LinkedIn", href: "https://www.linkedin.com", external: true },
    FooterLink { label: "Email", href: "mailto:biodun.adefusi@gmail.com", external: false },
];

/// Form `action` for the contact form.
pub fn contact_action() -> String {
    format!("mailto:{}", PROFILE.email)
}

pub fn copyright_line(year: u16) -> String {
    format!("© {year} {}. All rights reserved.", PROFILE.name)
}
