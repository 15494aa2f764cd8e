use super::*;
use leptos::tachys::view::RenderHtml;
use leptos_router::location::RequestUrl;

// =============================================================
// Helpers
// =============================================================

fn render_at(path: &str) -> String {
    let owner = Owner::new();
    owner.with(|| {
        provide_context(RequestUrl::new(path));
        view! {
            <Router>
                <Navbar/>
                <RouteView/>
            </Router>
        }
        .to_html()
    })
}

fn navbar_markup(html: &str) -> &str {
    let start = html.find(r#"<header class="navbar""#).expect("navbar rendered");
    let end = html[start..].find("</header>").expect("navbar closed") + start + "</header>".len();
    &html[start..end]
}

// =============================================================
// Route composition
// =============================================================

#[test]
fn root_renders_list_with_navbar() {
    let html = render_at("/");
    assert!(html.contains("home-page"));
    assert!(!html.contains("restaurant-page"));
    assert!(html.contains(r#"class="navbar""#));
}

#[test]
fn restaurants_renders_list_with_navbar() {
    let html = render_at("/restaurants");
    assert!(html.contains("home-page"));
    assert!(html.contains(r#"class="navbar""#));
}

#[test]
fn restaurant_id_renders_detail_with_navbar() {
    let html = render_at("/restaurants/42");
    assert!(html.contains("restaurant-page"));
    assert!(!html.contains("home-page"));
    assert!(html.contains(r#"class="navbar""#));
}

#[test]
fn unknown_path_renders_no_page() {
    let html = render_at("/about");
    assert!(!html.contains("home-page"));
    assert!(!html.contains("restaurant-page"));
    assert!(html.contains(r#"class="navbar""#));
}

#[test]
fn navbar_is_identical_on_every_route() {
    let root = render_at("/");
    let list = render_at("/restaurants");
    let detail = render_at("/restaurants/42");
    assert_eq!(navbar_markup(&root), navbar_markup(&list));
    assert_eq!(navbar_markup(&root), navbar_markup(&detail));
}
