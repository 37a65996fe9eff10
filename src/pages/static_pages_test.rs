use super::*;

#[test]
fn each_page_renders_its_heading_and_nav() {
    for page in StaticPage::ALL {
        let html = render(page);
        assert!(html.contains(page.heading()), "{page:?} missing heading");
        assert!(html.contains("class=\"nav\""));
        assert!(html.contains("href=\"/about\""));
        assert!(html.contains("href=\"/contact\""));
        assert!(html.contains("href=\"/register\""));
    }
}

#[test]
fn headings_match_page_names() {
    assert_eq!(StaticPage::Home.heading(), "Home Page");
    assert_eq!(StaticPage::About.heading(), "About Page");
    assert_eq!(StaticPage::Contact.heading(), "Contact Page");
}

#[test]
fn current_page_is_marked_active() {
    let html = render(StaticPage::Contact);
    assert_eq!(html.matches("class=\"nav__link nav__link--active\"").count(), 1);
    assert!(html.contains("aria-current=\"page\""));
}

#[test]
fn home_page_does_not_render_other_headings() {
    let html = render(StaticPage::Home);
    assert!(!html.contains("About Page"));
    assert!(!html.contains("Contact Page"));
}

#[test]
fn not_found_escapes_requested_path() {
    let html = render_not_found("/<b>nope</b>");
    assert!(html.contains("Page Not Found"));
    assert!(html.contains("&lt;b&gt;nope&lt;/b&gt;"));
    assert!(!html.contains("class=\"nav__link nav__link--active\""));
}
