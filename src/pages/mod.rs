//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! `Page` is the path-to-page table shared by the router and the nav bar.
//! Each page renders through Leptos SSR into a full HTML document; there is
//! no client-side hydration, so forms post back to the server.

pub mod layout;
pub mod registration;
pub mod static_pages;

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

pub use static_pages::StaticPage;

/// Minimal stylesheet inlined into every document.
const STYLES: &str = r"
body { font-family: system-ui, sans-serif; margin: 0; background: #f9fafb; color: #111827; }
.nav { position: fixed; top: 0; left: 0; width: 100%; background: #fff; border-bottom: 1px solid #e5e7eb; }
.nav__list { display: flex; justify-content: center; gap: 2rem; list-style: none; margin: 0; padding: 1rem 0; }
.nav__link { font-weight: 600; text-decoration: none; color: #2563eb; padding: 0.5rem 1rem; }
.nav__link--active { border-bottom: 2px solid currentColor; }
.page { display: flex; flex-direction: column; align-items: center; padding-top: 6rem; }
.heading { font-size: 2.25rem; font-weight: 700; }
.heading--home { color: #2563eb; }
.heading--about { color: #a855f7; }
.heading--contact { color: #16a34a; }
.registration { max-width: 36rem; margin: 0 auto; padding: 1.5rem; }
.registration__form { background: #fff; border: 1px solid #fee2e2; border-radius: 0.75rem; padding: 1.5rem; }
.registration__title { text-align: center; color: #b91c1c; }
.field { margin-bottom: 1.25rem; }
.field label { display: block; margin-bottom: 0.5rem; font-weight: 600; }
.field input { width: 100%; box-sizing: border-box; border: 1px solid #fca5a5; border-radius: 0.5rem; padding: 0.5rem 1rem; }
.notice { color: #b91c1c; font-weight: 600; }
.actions { display: flex; justify-content: center; gap: 1rem; }
.submissions { width: 100%; margin-top: 2rem; border-collapse: collapse; background: #fff; }
.submissions th { background: #dc2626; color: #fff; text-align: left; padding: 0.75rem 1.5rem; }
.submissions td { padding: 0.5rem 1rem; border-bottom: 1px solid #e5e7eb; }
";

/// Every routable page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Static(StaticPage),
    Register,
}

impl Page {
    /// Nav bar order: Home, Contact, About, then the registration form.
    pub const NAV: [Page; 4] = [
        Page::Static(StaticPage::Home),
        Page::Static(StaticPage::Contact),
        Page::Static(StaticPage::About),
        Page::Register,
    ];

    /// Resolve a request path to a page. A single trailing slash is ignored.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = match path.strip_suffix('/') {
            Some("") | None => path,
            Some(rest) => rest,
        };
        Self::NAV.into_iter().find(|page| page.path() == trimmed)
    }

    /// Canonical path for this page.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Static(page) => page.path(),
            Self::Register => "/register",
        }
    }

    /// Link text in the nav bar.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Static(page) => page.label(),
            Self::Register => "Register",
        }
    }
}

/// Render a view into a complete HTML document.
///
/// The view is built inside a fresh reactive owner so components can run
/// outside a Leptos request context.
pub fn render_document<F, V>(title: &str, body: F) -> String
where
    F: FnOnce() -> V,
    V: IntoView + 'static,
{
    let title = title.to_owned();
    let owner = Owner::new();
    let html = owner.with(move || {
        view! {
            <html lang="en">
                <head>
                    <meta charset="utf-8"/>
                    <meta name="viewport" content="width=device-width, initial-scale=1"/>
                    <title>{title}</title>
                    <style inner_html=STYLES></style>
                </head>
                <body>{body()}</body>
            </html>
        }
        .to_html()
    });
    format!("<!DOCTYPE html>{html}")
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
