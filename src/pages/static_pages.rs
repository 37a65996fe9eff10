//! Home, About, and Contact: a heading under the shared nav bar.

use leptos::prelude::*;

use super::layout::PageShell;
use super::{Page, render_document};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaticPage {
    Home,
    About,
    Contact,
}

impl StaticPage {
    pub const ALL: [StaticPage; 3] = [StaticPage::Home, StaticPage::About, StaticPage::Contact];

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::About => "/about",
            Self::Contact => "/contact",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Contact => "Contact",
        }
    }

    #[must_use]
    pub fn heading(self) -> &'static str {
        match self {
            Self::Home => "Home Page",
            Self::About => "About Page",
            Self::Contact => "Contact Page",
        }
    }

    fn heading_class(self) -> &'static str {
        match self {
            Self::Home => "heading heading--home",
            Self::About => "heading heading--about",
            Self::Contact => "heading heading--contact",
        }
    }
}

#[component]
fn StaticPageView(page: StaticPage) -> impl IntoView {
    view! {
        <PageShell current={Some(Page::Static(page))}>
            <h1 class={page.heading_class()}>{page.heading()}</h1>
        </PageShell>
    }
}

#[component]
fn NotFoundView(path: String) -> impl IntoView {
    view! {
        <PageShell current={None}>
            <h1 class="heading">"Page Not Found"</h1>
            <p>"No page lives at "<code>{path}</code></p>
        </PageShell>
    }
}

/// Render a static page as a full HTML document.
#[must_use]
pub fn render(page: StaticPage) -> String {
    render_document(page.heading(), move || view! { <StaticPageView page=page/> })
}

/// Render the 404 document for an unmatched path.
#[must_use]
pub fn render_not_found(path: &str) -> String {
    let path = path.to_owned();
    render_document("Page Not Found", move || view! { <NotFoundView path=path/> })
}

#[cfg(test)]
#[path = "static_pages_test.rs"]
mod tests;
