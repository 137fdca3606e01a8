//! End-to-end seating scenarios.

use u_seating::assign::{
    run_auto_assign, AssignConfig, AutoAssignSession, AutoAssigner, SessionState, SkipReason,
};
use u_seating::grouping::GroupMode;
use u_seating::model::{Guest, SeatRef, Table};
use u_seating::plan::SeatingPlan;
use u_seating::ranking::AffinitySource;

fn selection(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn test_four_family_guests_two_tables() {
    let tables = vec![Table::new("t1", "One", 4), Table::new("t2", "Two", 4)];
    let guests: Vec<Guest> = (0..4)
        .map(|i| Guest::new(format!("f{i}"), format!("Fam {i}"), "Family"))
        .collect();

    let result = run_auto_assign(&tables, &guests, GroupMode::Category, &selection(&["Family"]), false)
        .unwrap();
    assert_eq!(result.assignments.len(), 4);
    assert!(result.skipped.is_empty());
    // The first guest breaks the tie toward t1 and the rest follow.
    assert!(result.assignments.iter().all(|a| a.table_id == "t1"));

    // Reading affinity from the pre-run tables only spreads the group.
    let config = AssignConfig::new(GroupMode::Category)
        .with_criterion("Family")
        .with_affinity_source(AffinitySource::Original);
    let spread = AutoAssigner::new().run(&tables, &guests, &config).unwrap();
    assert_eq!(spread.assignments_for_table("t2").count(), 2);
}

#[test]
fn test_mutual_avoid_on_two_seat_table() {
    let tables = vec![Table::new("t1", "One", 2)];
    let guests = vec![
        Guest::new("a", "A", "Family").with_avoid("B"),
        Guest::new("b", "B", "Family"),
    ];

    let result = run_auto_assign(&tables, &guests, GroupMode::Category, &selection(&["Family"]), false)
        .unwrap();
    assert_eq!(result.assignments.len(), 1);
    assert_eq!(result.assignments[0].guest_id, "a");
    assert_eq!(result.skipped.len(), 1);
    assert_eq!(result.skipped[0].guest_id, "b");
    // One seat was still free when B failed.
    assert_eq!(result.skipped[0].reason, SkipReason::Conflict);
}

#[test]
fn test_strict_mode_routes_around_mixed_table() {
    let colleague = Guest::new("c", "Carol", "Colleague").with_assigned_seat(SeatRef::new("t1", 0));
    let family = Guest::new("f", "Fay", "Family");
    let config = AssignConfig::new(GroupMode::Category)
        .with_criterion("Family")
        .with_strict_mode(true);

    let only_mixed = vec![Table::new("t1", "One", 4).with_occupant(0, "c")];
    let guests = vec![colleague.clone(), family.clone()];
    let result = AutoAssigner::new().run(&only_mixed, &guests, &config).unwrap();
    assert!(result.assignments.is_empty());
    assert_eq!(result.skipped[0].reason, SkipReason::Conflict);

    let with_spare = vec![
        Table::new("t1", "One", 4).with_occupant(0, "c"),
        Table::new("t2", "Two", 4),
    ];
    let result = AutoAssigner::new().run(&with_spare, &guests, &config).unwrap();
    assert_eq!(result.assignments.len(), 1);
    assert_eq!(result.assignments[0].table_id, "t2");

    // Without strict mode the mixed table is acceptable.
    let lenient = config.clone().with_strict_mode(false);
    let result = AutoAssigner::new().run(&only_mixed, &guests, &lenient).unwrap();
    assert_eq!(result.assignments[0].table_id, "t1");
}

#[test]
fn test_tag_claimed_by_first_selected_tag() {
    let tables = vec![Table::new("t1", "One", 4)];
    let guests = vec![Guest::new("g", "Gina", "Family").with_tags(["VIP", "素食"])];

    let result = run_auto_assign(&tables, &guests, GroupMode::Tag, &selection(&["VIP", "素食"]), false)
        .unwrap();
    assert_eq!(result.total(), 1);
    assert_eq!(result.assignments[0].criterion, "VIP");
}

#[test]
fn test_unselected_guests_are_absent() {
    let tables = vec![Table::new("t1", "One", 4)];
    let guests = vec![
        Guest::new("a", "Ann", "Family"),
        Guest::new("b", "Ben", "Friend"),
        Guest::new("c", "Cat", "Colleague"),
    ];
    let result = run_auto_assign(&tables, &guests, GroupMode::Category, &selection(&["Friend"]), false)
        .unwrap();
    assert_eq!(result.total(), 1);
    assert_eq!(result.assignments[0].guest_id, "b");
    assert!(result.skipped_for_guest("a").is_none());
}

#[test]
fn test_larger_group_seated_first() {
    // Only two seats: the two-person Family group is placed before the
    // single Friend even though the Friend comes first in the guest list.
    let tables = vec![Table::new("t1", "One", 2)];
    let guests = vec![
        Guest::new("x", "Xia", "Friend"),
        Guest::new("f1", "Fay", "Family"),
        Guest::new("f2", "Fox", "Family"),
    ];
    let result = run_auto_assign(
        &tables,
        &guests,
        GroupMode::Category,
        &selection(&["Friend", "Family"]),
        false,
    )
    .unwrap();
    let seated: Vec<&str> = result.assignments.iter().map(|a| a.guest_id.as_str()).collect();
    assert_eq!(seated, vec!["f1", "f2"]);
    assert_eq!(result.skipped[0].guest_id, "x");
    assert_eq!(result.skipped[0].reason, SkipReason::NoSpace);
}

#[test]
fn test_wedding_session_round_trip() {
    let mut plan = SeatingPlan::new(
        vec![Table::new("t1", "主桌", 10), Table::new("t2", "二桌", 8)],
        vec![
            Guest::new("g1", "王大明", "男方親友")
                .with_tags(["素食"])
                .with_avoid("陳小美"),
            Guest::new("g2", "陳小美", "女方親友")
                .with_tags(["伴娘"])
                .with_avoid("王大明"),
            Guest::new("g3", "林董事長", "貴賓").with_tags(["VIP"]),
            Guest::new("g4", "張三", "公司同事"),
            Guest::new("g5", "李四", "公司同事"),
            Guest::new("g6", "王五", "公司同事"),
        ],
    );

    let mut session = AutoAssignSession::new(&plan, GroupMode::Category);
    session.set_strict_mode(true).unwrap();
    let preview = session.run(&plan).unwrap().clone();
    assert_eq!(preview.total(), 6);

    // 王大明 and 陳小美 never share a table.
    let table_of = |id: &str| {
        preview
            .assignment_for_guest(id)
            .map(|a| a.table_id.clone())
    };
    if let (Some(a), Some(b)) = (table_of("g1"), table_of("g2")) {
        assert_ne!(a, b);
    }

    let seated = session.apply(&mut plan).unwrap();
    assert_eq!(seated, preview.assignments.len());
    assert_eq!(session.state(), SessionState::Applied);
    assert!(plan.check_integrity().is_empty());
}
