//! Shared navigation bar.

use leptos::prelude::*;

use super::Page;

/// Fixed top navigation linking every page. The current page, when known,
/// gets the active modifier class.
#[component]
pub fn Nav(#[prop(optional_no_strip)] current: Option<Page>) -> impl IntoView {
    let links = Page::NAV
        .into_iter()
        .map(|page| {
            let class = if current == Some(page) { "nav__link nav__link--active" } else { "nav__link" };
            let aria_current = (current == Some(page)).then_some("page");
            view! {
                <li>
                    <a href={page.path()} class=class aria-current=aria_current>
                        {page.label()}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <nav class="nav">
            <ul class="nav__list">{links}</ul>
        </nav>
    }
}

/// Page frame: the nav bar followed by the page's own content.
#[component]
pub fn PageShell(#[prop(optional_no_strip)] current: Option<Page>, children: Children) -> impl IntoView {
    view! {
        <Nav current=current/>
        <main class="page">{children()}</main>
    }
}
