//! End-to-end behavior of the catalog engine through the public API.

use std::io::Write;
use std::path::Path;

use patternbook::core::action::{Action, Effect, update};
use patternbook::core::manifest::Manifest;
use patternbook::core::render::{RenderedBlock, page_to_plain_text, page_view};
use patternbook::core::state::App;
use patternbook::core::{Catalog, CatalogError, ContentUnit, Page, Panel, RouteEntry, Tab};
use patternbook::patterns::builtin_route_table;

fn page(route_key: &str, labels: &[&str]) -> Page {
    let tabs = labels
        .iter()
        .map(|label| Tab::new(*label, vec![ContentUnit::new(format!("{label} title"), "body")]))
        .collect();
    Page::new(route_key, route_key, tabs).unwrap()
}

fn write_manifest(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_strategy_page_scenario() {
    let mut catalog = Catalog::new();
    catalog
        .register(page("strategy", &["Definition", "Payment"]))
        .unwrap();

    catalog.navigate("strategy").unwrap();
    assert_eq!(catalog.active_page().unwrap().route_key(), "strategy");

    catalog.select_tab(1).unwrap();
    assert_eq!(catalog.active_page().unwrap().selected_tab().label, "Payment");

    let err = catalog.select_tab(5).unwrap_err();
    assert_eq!(
        err,
        CatalogError::InvalidTabIndex {
            index: 5,
            tab_count: 2
        }
    );
    assert_eq!(catalog.active_page().unwrap().selected_tab().label, "Payment");
}

#[test]
fn test_select_then_read_back_every_tab() {
    let labels = ["Definition", "User Authentication", "Shopping Cart", "Chat"];
    let mut p = page("observer", &labels);
    for (i, label) in labels.iter().enumerate() {
        p.select_tab(i).unwrap();
        assert_eq!(p.selected_tab().label, *label);
        assert!(p.selected_index() < p.tab_count());
    }
}

#[test]
fn test_failed_selection_keeps_index_in_range() {
    let mut p = page("factory", &["Definition", "Form Field Generator"]);
    p.select_tab(1).unwrap();
    for bad in [2, 3, usize::MAX] {
        assert!(p.select_tab(bad).is_err());
        assert_eq!(p.selected_index(), 1);
    }
}

#[test]
fn test_unknown_route_leaves_active_page() {
    let mut catalog = Catalog::new();
    catalog.register(page("strategy", &["Definition"])).unwrap();
    catalog.navigate("strategy").unwrap();

    let err = catalog.navigate("visitor").unwrap_err();
    assert_eq!(err, CatalogError::RouteNotFound("visitor".to_string()));
    assert_eq!(catalog.active_route_key(), Some("strategy"));
}

#[test]
fn test_duplicate_route_keeps_first_page() {
    let mut catalog = Catalog::new();
    catalog.register(page("strategy", &["Definition"])).unwrap();
    let err = catalog
        .register(page("strategy", &["Other", "Tabs"]))
        .unwrap_err();
    assert_eq!(err, CatalogError::DuplicateRoute("strategy".to_string()));
    assert_eq!(catalog.page("strategy").unwrap().tab_count(), 1);
}

#[test]
fn test_default_route_before_any_navigation() {
    let mut catalog = Catalog::new();
    assert!(catalog.active_page().is_none());

    catalog.register(page("designpattern", &["Origins"])).unwrap();
    assert!(catalog.active_page().is_none());

    catalog.set_default_route("designpattern").unwrap();
    assert_eq!(catalog.active_page().unwrap().route_key(), "designpattern");
}

#[test]
fn test_pages_keep_selection_across_navigation() {
    let mut catalog = Catalog::new();
    catalog.register(page("strategy", &["Definition", "Payment"])).unwrap();
    catalog.register(page("observer", &["Definition", "Chat"])).unwrap();

    catalog.navigate("strategy").unwrap();
    catalog.select_tab(1).unwrap();
    catalog.navigate("observer").unwrap();
    assert_eq!(catalog.active_page().unwrap().selected_index(), 0);

    catalog.navigate("strategy").unwrap();
    assert_eq!(catalog.active_page().unwrap().selected_index(), 1);
}

#[test]
fn test_unit_without_example_renders_other_blocks() {
    let panel = Panel::new(vec![
        ContentUnit::new("Plain", "Just words.").with_source("js", "const x = 1;"),
    ]);
    let p = Page::new("plain", "Plain", vec![Tab::new("Only", panel)]).unwrap();
    let view = page_view(&p);

    assert!(matches!(view.blocks[0], RenderedBlock::Title("Plain")));
    assert!(matches!(view.blocks[1], RenderedBlock::Description("Just words.")));
    assert!(matches!(view.blocks[2], RenderedBlock::Source { .. }));
    assert_eq!(view.blocks.len(), 3);
}

#[test]
fn test_reducer_surfaces_not_found_and_recovers() {
    let (catalog, nav) = builtin_route_table().build(Some("designpattern")).unwrap();
    let mut app = App::new(catalog, nav);

    assert!(update(&mut app, Action::Navigate("visitor".to_string())).is_err());
    assert_eq!(app.not_found.as_deref(), Some("visitor"));
    assert!(app.current_view().is_none());

    let effect = update(&mut app, Action::Navigate("strategy".to_string())).unwrap();
    assert_eq!(effect, Effect::Redraw);
    assert!(app.not_found.is_none());
    assert_eq!(app.current_view().unwrap().route_key, "strategy");

    update(&mut app, Action::PreviousTab).unwrap();
    assert_eq!(
        app.current_view().unwrap().selected,
        app.active_page().unwrap().tab_count() - 1
    );
}

#[test]
fn test_manifest_pages_append_after_builtins() {
    let file = write_manifest(
        r#"
[[pages]]
route = "composite"
label = "Composite Pattern"

[[pages.tabs]]
label = "Definition"

[[pages.tabs.units]]
title = "Composite Pattern"
description = "Compose objects into tree structures."
"#,
    );

    let mut table = builtin_route_table();
    table.extend(Manifest::load(file.path()).unwrap().into_route_table());
    let (catalog, nav) = table.build(None).unwrap();

    assert_eq!(nav.entries().last().unwrap().route_key, "composite");
    assert!(catalog.contains("composite"));
    assert_eq!(catalog.len(), 8);
}

#[test]
fn test_manifest_route_colliding_with_builtin_aborts() {
    let file = write_manifest(
        r#"
[[pages]]
route = "strategy"
label = "Another Strategy"

[[pages.tabs]]
label = "Definition"
"#,
    );

    let mut table = builtin_route_table();
    table.extend(Manifest::load(file.path()).unwrap().into_route_table());
    let err = table.build(None).unwrap_err();
    assert_eq!(err, CatalogError::DuplicateRoute("strategy".to_string()));
}

#[test]
fn test_shipped_manifest_loads() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/catalogs/more-patterns.toml");
    let mut table = builtin_route_table();
    table.extend(Manifest::load(Path::new(path)).unwrap().into_route_table());
    let (catalog, _) = table.build(None).unwrap();
    assert!(catalog.contains("composite"));
    assert!(catalog.contains("abstractfactory"));
}

#[test]
fn test_builder_errors_abort_the_build() {
    let table: patternbook::core::RouteTable = [
        RouteEntry::new("ok", "Fine", || vec![Tab::new("A", Panel::default())]),
        RouteEntry::new("empty", "Empty", Vec::new),
    ]
    .into_iter()
    .collect();
    assert_eq!(
        table.build(None).unwrap_err(),
        CatalogError::EmptyPage("empty".to_string())
    );
}

#[test]
fn test_plain_text_lists_every_tab() {
    let (catalog, _) = builtin_route_table().build(None).unwrap();
    let text = page_to_plain_text(catalog.page("strategy").unwrap(), 72);

    let payment = text.find("2. Payment Processing").unwrap();
    let sorting = text.find("4. Sorting Algorithms").unwrap();
    assert!(payment < sorting);
    assert!(text.contains("[example: sorting strategies]"));
    assert!(text.contains("    export const BubbleSort = {"));
}

#[test]
fn test_unknown_start_route_opens_not_found_over_default() {
    let table = builtin_route_table();
    let mut app = App::open(&table, "designpattern", Some("ghost")).unwrap();

    assert_eq!(app.not_found.as_deref(), Some("ghost"));
    assert!(app.status_message.contains("ghost"));
    assert!(app.current_view().is_none());
    assert_eq!(app.catalog.current_route_key(), Some("designpattern"));

    update(&mut app, Action::Navigate("adaptar".to_string())).unwrap();
    assert!(app.not_found.is_none());
    assert_eq!(app.current_view().unwrap().route_key, "adaptar");
}

#[test]
fn test_known_start_route_opens_that_page() {
    let app = App::open(&builtin_route_table(), "designpattern", Some("observer")).unwrap();
    assert!(app.not_found.is_none());
    assert_eq!(app.current_view().unwrap().route_key, "observer");
}
