//! Integration tests for canteen-wait
//!
//! These tests run menu exports through the public API end to end:
//! - Decoding loosely-typed menu feeds
//! - Providers feeding the estimator
//! - Item and canteen recommendations and their tie-breaks
//! - The command-line front end

mod fixtures;

use canteen_wait::menu::{FileMenuProvider, MenuProvider, MenuSnapshot, StaticMenuProvider};
use canteen_wait::types::MenuItem;
use canteen_wait::wait_time::{recommend_canteen, recommend_item, EstimatorConfig, WaitEstimator};
use canteen_wait::EstimatorError;
use chrono::{TimeZone, Utc};
use std::fs;
use std::path::PathBuf;
use std::process::Command;

use fixtures::{generated_menu, tied_menu, LUNCH_MENU_JSON, SINGLE_COUNTER_JSON};

fn write_temp_menu(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "canteen-wait-it-{}-{}.json",
        std::process::id(),
        name
    ));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_lunch_menu_recommendation() {
    let snapshot = MenuSnapshot::from_json_str(LUNCH_MENU_JSON).unwrap();
    assert_eq!(snapshot.len(), 6);
    assert_eq!(
        snapshot.captured_at,
        Utc.with_ymd_and_hms(2024, 9, 2, 12, 15, 0).unwrap()
    );
    assert_eq!(snapshot.canteens(), vec!["A", "B", "C"]);

    let report = WaitEstimator::default().recommend(&snapshot.items);

    // The special has no usable numbers, so it scores 0 and lands in canteen A
    let best_item = report.best_item.as_ref().unwrap();
    assert_eq!(best_item.index, 5);
    assert_eq!(best_item.item.label(), "Daily Special");
    assert_eq!(best_item.score, 0.0);

    let best_canteen = report.best_canteen.as_ref().unwrap();
    assert_eq!(best_canteen.canteen, "A");
    assert_eq!(best_canteen.avg_score, 9.0);
    assert_eq!(best_canteen.item_count, 3);

    let order: Vec<&str> = report.canteens.iter().map(|c| c.canteen.as_str()).collect();
    assert_eq!(order, vec!["A", "B", "C"]);
    assert_eq!(report.canteens[1].avg_score, 9.5);
    assert_eq!(report.canteens[2].avg_score, 11.0);
}

#[test]
fn test_penalty_changes_canteen_choice() {
    let snapshot = MenuSnapshot::from_json_str(LUNCH_MENU_JSON).unwrap();

    let prep_only = WaitEstimator::new(EstimatorConfig::prep_time_only()).unwrap();
    let best = prep_only.recommend_canteen(&snapshot.items).unwrap();
    assert_eq!(best.canteen, "C");
    assert_eq!(best.avg_score, 2.0);

    let queue_heavy = WaitEstimator::new(EstimatorConfig::with_penalty(2.0)).unwrap();
    let best = queue_heavy.recommend_canteen(&snapshot.items).unwrap();
    assert_eq!(best.canteen, "A");
}

#[test]
fn test_item_recommendation_within_canteen() {
    let snapshot = MenuSnapshot::from_json_str(LUNCH_MENU_JSON).unwrap();
    let estimator = WaitEstimator::default();

    let only_b = snapshot.for_canteen("B");
    let best = estimator.recommend_item(&only_b.items).unwrap();
    assert_eq!(best.item.label(), "Veggie Wrap");
    assert_eq!(best.score, 7.0);

    assert!(estimator
        .recommend_item(&snapshot.for_canteen("Z").items)
        .is_none());
}

#[test]
fn test_single_counter_groups_under_default_canteen() {
    let snapshot = MenuSnapshot::from_json_str(SINGLE_COUNTER_JSON).unwrap();
    let estimator = WaitEstimator::default();

    let best_item = estimator.recommend_item(&snapshot.items).unwrap();
    assert_eq!(best_item.item.label(), "Toast");

    let ranking = estimator.rank_canteens(&snapshot.items);
    assert_eq!(ranking.len(), 1);
    assert_eq!(ranking[0].canteen, "A");
    assert_eq!(ranking[0].avg_score, 5.0);
}

#[test]
fn test_tie_breaks_follow_input_order() {
    let items = tied_menu();

    let best_item = recommend_item(Some(items.as_slice()), 1.0).unwrap();
    assert_eq!(best_item.index, 1);
    assert_eq!(best_item.item.label(), "south-1");

    let ranking = WaitEstimator::default().rank_canteens(&items);
    let order: Vec<&str> = ranking.iter().map(|c| c.canteen.as_str()).collect();
    assert_eq!(order, vec!["South", "East", "North"]);
}

#[test]
fn test_large_menu_report_is_consistent() {
    let items = generated_menu(240, 7);
    let estimator = WaitEstimator::new(EstimatorConfig::with_penalty(1.5)).unwrap();
    let report = estimator.recommend(&items);

    assert_eq!(report.item_count, 240);
    assert_eq!(report.canteens.len(), 7);
    assert_eq!(
        report.canteens.iter().map(|c| c.item_count).sum::<usize>(),
        240
    );
    assert_eq!(report.best_canteen.as_ref(), report.canteens.first());

    let best_item = report.best_item.as_ref().unwrap();
    assert!(items
        .iter()
        .all(|item| estimator.score(item) >= best_item.score));

    let json = serde_json::to_string(&report).unwrap();
    let decoded: canteen_wait::Recommendation = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded.item_count, report.item_count);
    assert_eq!(decoded.canteens.len(), report.canteens.len());
}

#[test]
fn test_absent_input_handling_differs_between_recommendations() {
    assert!(recommend_item::<MenuItem>(None, 1.0).is_none());
    assert!(matches!(
        recommend_canteen::<MenuItem>(None, 1.0),
        Err(EstimatorError::MissingItems { .. })
    ));

    let empty: Vec<MenuItem> = Vec::new();
    assert!(recommend_item(Some(empty.as_slice()), 1.0).is_none());
    assert!(recommend_canteen(Some(empty.as_slice()), 1.0)
        .unwrap()
        .is_none());
}

#[test]
fn test_providers_feed_the_estimator() {
    let path = write_temp_menu("provider", LUNCH_MENU_JSON);
    let providers: Vec<Box<dyn MenuProvider>> = vec![
        Box::new(FileMenuProvider::new(&path)),
        Box::new(StaticMenuProvider::new(
            MenuSnapshot::from_json_str(LUNCH_MENU_JSON).unwrap(),
        )),
    ];

    let estimator = WaitEstimator::default();
    for provider in &providers {
        let snapshot = provider.snapshot().unwrap();
        let best = estimator.recommend_canteen(&snapshot.items).unwrap();
        assert_eq!(best.canteen, "A", "provider: {}", provider.describe());
    }

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_cli_score_command() {
    let output = Command::new(env!("CARGO_BIN_EXE_canteen-wait"))
        .args([
            "--penalty",
            "3",
            "score",
            "--prep-time",
            "5",
            "--pending-orders",
            "2",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "Score: 11.00");
}

#[test]
fn test_cli_json_report() {
    let path = write_temp_menu("cli-report", LUNCH_MENU_JSON);
    let output = Command::new(env!("CARGO_BIN_EXE_canteen-wait"))
        .arg("--menu")
        .arg(&path)
        .args(["--format", "json", "report"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["itemCount"], 6);
    assert_eq!(report["bestCanteen"]["canteen"], "A");
    assert_eq!(report["bestItem"]["item"]["name"], "Daily Special");

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_cli_rejects_negative_penalty() {
    let output = Command::new(env!("CARGO_BIN_EXE_canteen-wait"))
        .args(["--penalty=-1", "score"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Configuration error"));
}

#[test]
fn test_cli_missing_menu_file() {
    let output = Command::new(env!("CARGO_BIN_EXE_canteen-wait"))
        .args(["--menu", "/nonexistent/menu.json", "canteen"])
        .output()
        .unwrap();

    assert!(!output.status.success());
}
