use super::*;

#[test]
fn from_path_maps_known_paths() {
    assert_eq!(Page::from_path("/"), Some(Page::Static(StaticPage::Home)));
    assert_eq!(Page::from_path("/about"), Some(Page::Static(StaticPage::About)));
    assert_eq!(Page::from_path("/contact"), Some(Page::Static(StaticPage::Contact)));
    assert_eq!(Page::from_path("/register"), Some(Page::Register));
}

#[test]
fn from_path_ignores_single_trailing_slash() {
    assert_eq!(Page::from_path("/about/"), Some(Page::Static(StaticPage::About)));
    assert_eq!(Page::from_path("/register/"), Some(Page::Register));
}

#[test]
fn from_path_rejects_unknown_paths() {
    assert_eq!(Page::from_path("/pricing"), None);
    assert_eq!(Page::from_path("/about//"), None);
    assert_eq!(Page::from_path(""), None);
    assert_eq!(Page::from_path("/About"), None);
}

#[test]
fn path_round_trips_through_from_path() {
    for page in Page::NAV {
        assert_eq!(Page::from_path(page.path()), Some(page));
    }
}

#[test]
fn nav_order_is_home_contact_about_register() {
    let labels: Vec<&str> = Page::NAV.iter().map(|p| p.label()).collect();
    assert_eq!(labels, vec!["Home", "Contact", "About", "Register"]);
}

#[test]
fn render_document_wraps_body_with_doctype_and_title() {
    let html = render_document("Greeting", || view! { <p>"hello"</p> });
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Greeting</title>"));
    assert!(html.contains("hello"));
    assert!(html.contains(".nav__list"));
}
