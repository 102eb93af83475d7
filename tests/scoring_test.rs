//! Unit-level tests for the suitability scoring function.

use caseflow::engine::{ScoreWeights, score};
use caseflow::model::{Priority, Role, StaffId, StaffMember, Status, WorkItem};
use caseflow::snapshot::Snapshot;

fn caseworker(name: &str) -> StaffMember {
    StaffMember::new(name, Role::Caseworker)
}

fn open_item(staff: StaffId, category: &str, status: Status) -> WorkItem {
    let mut item = WorkItem::new(category, Priority::Medium);
    item.assigned_to = Some(staff);
    item.status = status;
    item
}

fn load(staff: StaffId, count: usize, category: &str, status: Status) -> Vec<WorkItem> {
    (0..count).map(|_| open_item(staff, category, status)).collect()
}

// ---------------------------------------------------------------------------
// Base behavior
// ---------------------------------------------------------------------------

#[test]
fn idle_staff_gets_base_score() {
    let staff = caseworker("ada");
    let snapshot = Snapshot::build(vec![]);
    let item = WorkItem::new("noise", Priority::Medium);

    assert_eq!(score(&staff, &item, &snapshot, &ScoreWeights::default()), 100);
}

#[test]
fn identical_inputs_give_identical_scores() {
    let staff = caseworker("ada");
    let snapshot = Snapshot::build(load(staff.id, 3, "noise", Status::InProgress));
    let item = WorkItem::new("noise", Priority::High);
    let weights = ScoreWeights::default();

    let first = score(&staff, &item, &snapshot, &weights);
    let second = score(&staff, &item, &snapshot, &weights);
    assert_eq!(first, second);
}

#[test]
fn score_is_never_negative() {
    let staff = caseworker("ada");
    // 14 pending items: deep into workload, overload, and pending penalties.
    let snapshot = Snapshot::build(load(staff.id, 14, "billing", Status::Pending));
    let item = WorkItem::new("noise", Priority::Medium);

    assert_eq!(score(&staff, &item, &snapshot, &ScoreWeights::default()), 0);
}

// ---------------------------------------------------------------------------
// Workload penalty
// ---------------------------------------------------------------------------

#[test]
fn more_open_items_scores_strictly_lower() {
    let staff = caseworker("ada");
    let item = WorkItem::new("noise", Priority::Medium);
    let weights = ScoreWeights::default();

    // In-progress items so only the workload penalty varies.
    let lighter = Snapshot::build(load(staff.id, 2, "billing", Status::InProgress));
    let heavier = Snapshot::build(load(staff.id, 3, "billing", Status::InProgress));

    let light_score = score(&staff, &item, &lighter, &weights);
    let heavy_score = score(&staff, &item, &heavier, &weights);
    assert_eq!(light_score, 80);
    assert_eq!(heavy_score, 70);
    assert!(heavy_score < light_score);
}

// ---------------------------------------------------------------------------
// Category-expertise bonus
// ---------------------------------------------------------------------------

#[test]
fn category_experience_earns_bonus() {
    let staff = caseworker("ada");
    let item = WorkItem::new("noise", Priority::Medium);
    let weights = ScoreWeights::default();

    let matching = Snapshot::build(load(staff.id, 2, "noise", Status::InProgress));
    let unrelated = Snapshot::build(load(staff.id, 2, "billing", Status::InProgress));

    // 100 - 20 + 10 vs 100 - 20.
    assert_eq!(score(&staff, &item, &matching, &weights), 90);
    assert_eq!(score(&staff, &item, &unrelated, &weights), 80);
}

#[test]
fn category_bonus_is_capped() {
    let staff = caseworker("ada");
    let item = WorkItem::new("noise", Priority::Medium);

    // 7 matching items would earn 35 uncapped; cap is 25.
    // 100 - 70 + 25 = 55.
    let snapshot = Snapshot::build(load(staff.id, 7, "noise", Status::InProgress));
    assert_eq!(score(&staff, &item, &snapshot, &ScoreWeights::default()), 55);
}

// ---------------------------------------------------------------------------
// High-priority boost
// ---------------------------------------------------------------------------

#[test]
fn high_priority_favors_lightly_loaded_staff() {
    let idle = caseworker("ada");
    let busy = caseworker("grace");
    let item = WorkItem::new("noise", Priority::High);
    let weights = ScoreWeights::default();

    let snapshot = Snapshot::build(load(busy.id, 4, "billing", Status::InProgress));

    // Idle: 100 + 20. Busy: 100 - 40 + (20 - 20).
    assert_eq!(score(&idle, &item, &snapshot, &weights), 120);
    assert_eq!(score(&busy, &item, &snapshot, &weights), 60);
}

#[test]
fn high_priority_boost_turns_negative_past_break_even() {
    let staff = caseworker("ada");
    let weights = ScoreWeights::default();
    let snapshot = Snapshot::build(load(staff.id, 6, "billing", Status::InProgress));

    // Medium: 100 - 60 = 40. High: 100 - 60 + (20 - 30) = 30.
    let medium = WorkItem::new("noise", Priority::Medium);
    let high = WorkItem::new("noise", Priority::High);
    assert_eq!(score(&staff, &medium, &snapshot, &weights), 40);
    assert_eq!(score(&staff, &high, &snapshot, &weights), 30);
}

// ---------------------------------------------------------------------------
// Overload and pending penalties
// ---------------------------------------------------------------------------

#[test]
fn overload_penalty_kicks_in_at_ten_items() {
    let staff = caseworker("ada");
    let item = WorkItem::new("noise", Priority::Medium);
    let weights = ScoreWeights::default();

    // 9 items: 100 - 90 = 10. 10 items: 100 - 100 - 50, clamped to 0.
    let nine = Snapshot::build(load(staff.id, 9, "billing", Status::InProgress));
    let ten = Snapshot::build(load(staff.id, 10, "billing", Status::InProgress));
    assert_eq!(score(&staff, &item, &nine, &weights), 10);
    assert_eq!(score(&staff, &item, &ten, &weights), 0);
}

#[test]
fn pending_items_cost_extra() {
    let staff = caseworker("ada");
    let item = WorkItem::new("noise", Priority::Medium);
    let weights = ScoreWeights::default();

    // Same open count, different pending share.
    let in_progress = Snapshot::build(load(staff.id, 3, "billing", Status::InProgress));
    let pending = Snapshot::build(load(staff.id, 3, "billing", Status::Pending));

    // 100 - 30 vs 100 - 30 - 15.
    assert_eq!(score(&staff, &item, &in_progress, &weights), 70);
    assert_eq!(score(&staff, &item, &pending, &weights), 55);
}
