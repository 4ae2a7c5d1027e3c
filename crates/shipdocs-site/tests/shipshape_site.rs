//! Navigation of the bundled Shipshape documentation configs.

use std::path::Path;

use pretty_assertions::assert_eq;
use shipdocs_config::Config;
use shipdocs_site::{Audit, Navigator};

const CONFIG_1X: &str = include_str!("../../../demos/shipshape-1x/shipdocs.toml");
const CONFIG_MAIN: &str = include_str!("../../../demos/shipshape-main/shipdocs.toml");

fn load(content: &str) -> Config {
    Config::from_toml_str(content, Path::new("/site"), None).unwrap()
}

#[test]
fn guide_sequence() {
    let config = load(CONFIG_1X);
    let navigator = Navigator::new(&config.site);

    let context = navigator.resolve("/guide/connections").unwrap();
    assert_eq!(context.prev.as_ref().unwrap().path, "/guide/");
    assert_eq!(context.prev.unwrap().href, "/1.x/guide/");
    assert_eq!(context.next.unwrap().path, "/guide/collect");
    assert_eq!(context.total, 6);

    let last = navigator.resolve("/guide/outputs").unwrap();
    assert!(last.next.is_none());
}

#[test]
fn reference_sequence_crosses_groups() {
    let config = load(CONFIG_1X);
    let navigator = Navigator::new(&config.site);

    assert_eq!(navigator.documents().count(), 28);

    let context = navigator.resolve("/reference/collect/docker-images").unwrap();
    let prev = context.prev.unwrap();
    assert_eq!(prev.path, "/reference/collect/docker-command");
    assert_eq!(prev.title, "docker:command");
    assert_eq!(context.next.unwrap().title, "file:lookup");

    let context = navigator.resolve("/reference/analyse").unwrap();
    assert_eq!(
        context.prev.unwrap().path,
        "/reference/collect/yaml-key"
    );

    let last = navigator.resolve("/reference/remediate/command").unwrap();
    assert!(last.next.is_none());
    let titles: Vec<_> = last.breadcrumbs.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, vec!["Shipshape", "Reference", "Remediate"]);
}

#[test]
fn nav_states_follow_current_section() {
    let config = load(CONFIG_1X);
    let navigator = Navigator::new(&config.site);

    let page = navigator.page("/reference/connection/mysql");
    let active: Vec<_> = page
        .nav
        .iter()
        .filter(|n| n.active)
        .map(|n| n.label.as_str())
        .collect();
    assert_eq!(active, vec!["Reference"]);
    assert_eq!(page.nav[0].href.as_deref(), Some("/1.x/guide/"));
}

#[test]
fn unknown_page_renders_without_sidebar() {
    let config = load(CONFIG_1X);
    let navigator = Navigator::new(&config.site);

    assert!(navigator.resolve("/unknown/page").is_err());
    let page = navigator.page("/unknown/page");
    assert!(page.sidebar.is_none());
    assert_eq!(page.nav.len(), 4);
}

#[test]
fn variants_are_independent() {
    let one_x = load(CONFIG_1X);
    let main = load(CONFIG_MAIN);
    let one_x_nav = Navigator::new(&one_x.site);
    let main_nav = Navigator::new(&main.site);

    assert!(one_x_nav.resolve("/guide/installation").is_err());
    let context = main_nav.resolve("/guide/installation").unwrap();
    assert_eq!(context.prev.unwrap().href, "/shipshape/guide/");
}

#[test]
fn audit_against_partial_content() {
    let config = load(CONFIG_1X);
    let navigator = Navigator::new(&config.site);

    let audit = Audit::run(
        &navigator,
        ["/", "/guide/", "/guide/connections", "/guide/quick-start"],
    );

    assert_eq!(audit.orphans, vec!["/guide/quick-start".to_owned()]);
    assert_eq!(audit.missing.len(), 26);
    assert_eq!(audit.dangling_nav, vec!["/reference/".to_owned()]);
}

#[test]
fn bundled_sidebars_route_to_their_sections() {
    for content in [CONFIG_1X, CONFIG_MAIN] {
        let config = load(content);
        let navigator = Navigator::new(&config.site);
        let documents: Vec<_> = navigator.documents().map(str::to_owned).collect();

        for doc in &documents {
            assert!(navigator.resolve(doc).is_ok(), "{doc} does not resolve");
        }
        let audit = Audit::run(&navigator, documents.iter().map(String::as_str));
        assert!(audit.missing.is_empty());
        assert!(audit.orphans.is_empty());
    }
}
