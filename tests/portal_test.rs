// tests/portal_test.rs — Integration test: config, data sources, navigation and theme

use std::io::Write;

use pretty_assertions::assert_eq;

use mosdac_portal::charts::compute_line_chart;
use mosdac_portal::infra::config::Config;
use mosdac_portal::portal::catalog;
use mosdac_portal::portal::data::MONTHLY_USERS;
use mosdac_portal::portal::stats::{animated_count, format_thousands};
use mosdac_portal::portal::{
    open_source, BuiltinData, Navigate, Navigator, Page, PortalDataSource, ThemeContext, ThemeMode,
};
use mosdac_portal::tui::data::fetch_all;

const DATASET: &str = r##"
[line_series]
monthly-users = [
    { name = "Q1", users = 100.0 },
    { name = "Q2", users = 900.0 },
    { name = "Q3", users = 500.0 },
]

[[products]]
name = "Ocean Colour"
satellite = "Oceansat-3"
location = "Arabian Sea"
resolution = "360m"
date = "2024-03-02"
size = "900 MB"
kind = "hyperspectral"
"##;

fn write_config(dir: &std::path::Path, body: &str) -> std::path::PathBuf {
    let path = dir.join("config.toml");
    let mut f = std::fs::File::create(&path).unwrap();
    write!(f, "{body}").unwrap();
    path
}

#[tokio::test]
async fn test_config_selects_dataset_file() {
    let dir = tempfile::tempdir().unwrap();
    let dataset = dir.path().join("data.toml");
    std::fs::write(&dataset, DATASET).unwrap();
    let config_path = write_config(
        dir.path(),
        &format!(
            "[portal]\ntheme = \"dark\"\n\n[data]\ndataset = \"{}\"\n",
            dataset.display()
        ),
    );

    let config = Config::load_from(&config_path).unwrap();
    assert_eq!(config.portal.theme, ThemeMode::Dark);

    let source = open_source(&config);
    assert_ne!(source.name(), "builtin");

    let points = source.line_series(MONTHLY_USERS).await.unwrap();
    let chart = compute_line_chart(&points, &config.charts.line).unwrap();
    assert_eq!(chart.path, "M 40 238 L 300 62 L 560 150");

    // sections missing from the dataset are empty, and the snapshot survives
    let snap = fetch_all(source.as_ref()).await;
    assert_eq!(snap.line.len(), 3);
    assert!(snap.pie.is_empty());
    assert_eq!(catalog::search(&snap.products, "arabian").len(), 1);
}

#[tokio::test]
async fn test_missing_dataset_falls_back_to_builtin() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = write_config(
        dir.path(),
        "[data]\ndataset = \"/nonexistent/mosdac/data.toml\"\n",
    );
    let config = Config::load_from(&config_path).unwrap();
    let source = open_source(&config);
    assert_eq!(source.name(), "builtin");
    assert_eq!(source.products().await.unwrap().len(), 3);
}

#[test]
fn test_empty_config_file_is_all_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_from(&write_config(dir.path(), "")).unwrap();
    assert_eq!(config.portal.start_page(), Page::Home);
    assert_eq!(config.chat.reply_delay_ms, 2000);
    assert_eq!(config.charts.line.scale_max, 1000.0);
    assert_eq!(config.charts.pie.hover_delta, 5.0);
}

#[test]
fn test_navigation_through_capability() {
    fn open(nav: &mut dyn Navigate, key: &str) -> Page {
        nav.set_page(key)
    }

    let mut nav = Navigator::new(Page::Home);
    for page in Page::ALL {
        assert_eq!(open(&mut nav, page.key()), page);
    }
    assert_eq!(open(&mut nav, "satellites"), Page::Home);
    assert_eq!(nav.previous(), Some(Page::MissionExplorer));
}

#[tokio::test]
async fn test_capability_cards_target_feature_pages() {
    let caps = BuiltinData::new().capabilities().await.unwrap();
    let mut nav = Navigator::default();
    for cap in &caps {
        assert_eq!(nav.set_page(cap.page.key()), cap.page);
        assert_ne!(cap.page, Page::Home);
    }
}

#[tokio::test]
async fn test_theme_broadcast_and_unsubscribe() {
    let ctx = ThemeContext::new(ThemeMode::Light);
    let mut a = ctx.subscribe();
    let b = ctx.subscribe();
    assert_eq!(ctx.subscriber_count(), 2);

    assert_eq!(ctx.toggle(), ThemeMode::Dark);
    assert_eq!(a.changed().await, Some(ThemeMode::Dark));
    assert_eq!(b.current(), ThemeMode::Dark);

    drop(b);
    assert_eq!(ctx.subscriber_count(), 1);

    // setting the same mode is not a change
    ctx.set(ThemeMode::Dark);
    assert!(!a.has_changed());
    ctx.set(ThemeMode::Light);
    assert_eq!(a.current_if_changed(), Some(ThemeMode::Light));
}

#[tokio::test]
async fn test_home_counters() {
    let stats = BuiltinData::new().stats().await.unwrap();
    let shown: Vec<String> = stats
        .iter()
        .map(|s| {
            format_thousands(animated_count(
                s.value,
                std::time::Duration::from_millis(1000),
                std::time::Duration::from_millis(2000),
            ))
        })
        .collect();
    assert_eq!(shown, vec!["63", "1,423", "7,716"]);
}
