use tracker_core::model::{ItemKey, ItemKind, ProgressStore};

use super::test_harness::{ViewKind, row, setup_view_harness};

fn monday_rows() -> Vec<tracker_core::model::ScheduleRow> {
    vec![
        row("Mon", Some("https://example.com/l1"), Some("https://example.com/p1")),
        row("Mon", Some("https://example.com/l2"), None),
        row("Tue", None, None),
    ]
}

#[tokio::test(flavor = "current_thread")]
async fn day_view_smoke_renders_checklists_and_zero_progress() {
    let mut harness = setup_view_harness(ViewKind::Day(0), monday_rows(), ProgressStore::new());
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Test Schedule"), "missing title in {html}");
    assert!(html.contains("Lectures for Mon"), "missing lectures heading in {html}");
    assert!(html.contains("Projects for Mon"), "missing projects heading in {html}");
    assert!(html.contains("https://example.com/l2"), "missing lecture link in {html}");
    assert!(html.contains("Lecture Link"), "missing lecture label in {html}");
    assert!(html.contains("Project Link"), "missing project label in {html}");
    assert!(html.contains("Progress for Mon"), "missing progress heading in {html}");
    assert!(html.contains("0.00% Completed"), "missing day percent in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn day_view_smoke_reflects_stored_progress() {
    let mut store = ProgressStore::new();
    store.set(
        ItemKey::derive("Mon", ItemKind::Lecture, "https://example.com/l1"),
        true,
    );
    let mut harness = setup_view_harness(ViewKind::Day(0), monday_rows(), store);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("33.33% Completed"), "missing 33.33% in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn day_view_smoke_renders_nothing_scheduled() {
    let mut harness = setup_view_harness(ViewKind::Day(1), monday_rows(), ProgressStore::new());
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("No lectures scheduled for this day."),
        "missing empty lectures in {html}"
    );
    assert!(
        html.contains("No projects scheduled for this day."),
        "missing empty projects in {html}"
    );
    assert!(html.contains("0.00% Completed"), "missing zero percent in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn day_view_smoke_lists_every_day_in_selector() {
    let mut harness = setup_view_harness(ViewKind::Home, monday_rows(), ProgressStore::new());
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Select a Day"), "missing selector in {html}");
    assert!(html.contains(">Mon<"), "missing Mon option in {html}");
    assert!(html.contains(">Tue<"), "missing Tue option in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn day_view_smoke_handles_unknown_index() {
    let mut harness = setup_view_harness(ViewKind::Day(9), monday_rows(), ProgressStore::new());
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Day not found"), "missing not found in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn sidebar_smoke_renders_weighted_overall_progress() {
    let mut rows = vec![row("A", Some("a1"), Some("a2"))];
    for n in 1..=8 {
        rows.push(row("B", Some(format!("b{n}").as_str()), None));
    }
    let mut store = ProgressStore::new();
    store.set(ItemKey::derive("A", ItemKind::Lecture, "a1"), true);
    store.set(ItemKey::derive("B", ItemKind::Lecture, "b1"), true);

    let mut harness = setup_view_harness(ViewKind::Sidebar, rows, store);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Overall Progress"), "missing heading in {html}");
    assert!(html.contains("20.00% Completed"), "missing 20.00% in {html}");
    assert!(html.contains("Reset Progress"), "missing reset button in {html}");
    assert_eq!(harness.repo.save_count(), 0);
}

#[tokio::test(flavor = "current_thread")]
async fn checklist_toggle_and_reset_are_saved_immediately() {
    let mut harness = setup_view_harness(ViewKind::Day(0), monday_rows(), ProgressStore::new());
    harness.rebuild();
    let l1 = ItemKey::derive("Mon", ItemKind::Lecture, "https://example.com/l1");

    harness.set_completed(l1.clone(), true);
    assert_eq!(harness.repo.save_count(), 1);
    let saved = harness.repo.saved().expect("saved after toggle");
    assert!(saved.get(&l1));
    assert_eq!(saved.len(), 1);
    let html = harness.render();
    assert!(html.contains("33.33% Completed"), "missing 33.33% in {html}");

    harness.reset();
    assert_eq!(harness.repo.save_count(), 2);
    assert!(harness.repo.saved().expect("saved after reset").is_empty());
    let html = harness.render();
    assert!(html.contains("0.00% Completed"), "missing 0.00% in {html}");
    assert!(!html.contains("33.33%"), "stale percent in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn repeated_check_events_keep_the_item_checked() {
    let mut harness = setup_view_harness(ViewKind::Day(0), monday_rows(), ProgressStore::new());
    harness.rebuild();
    let l1 = ItemKey::derive("Mon", ItemKind::Lecture, "https://example.com/l1");

    harness.set_completed(l1.clone(), true);
    harness.set_completed(l1.clone(), true);

    assert_eq!(harness.repo.save_count(), 2);
    assert!(harness.repo.saved().expect("saved").get(&l1));
    let html = harness.render();
    assert!(html.contains("33.33% Completed"), "missing 33.33% in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn sidebar_reset_reports_save_status() {
    let mut store = ProgressStore::new();
    store.set(
        ItemKey::derive("Mon", ItemKind::Project, "https://example.com/p1"),
        true,
    );
    let mut harness = setup_view_harness(ViewKind::Sidebar, monday_rows(), store);
    harness.rebuild();
    assert!(harness.render().contains("33.33% Completed"));

    harness.reset();
    let html = harness.render();
    assert!(html.contains("0.00% Completed"), "missing 0.00% in {html}");
    assert!(
        html.contains("Saved at 2023-11-14 22:13:20 UTC"),
        "missing save status in {html}"
    );
    assert!(harness.repo.saved().expect("saved after reset").is_empty());
}
