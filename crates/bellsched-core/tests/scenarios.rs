//! Integration tests for the resolver, conflict detection and compact view.

use bellsched_core::{
    detect_conflicts, resolve, resolve_template, select_for_compact_view, ClassRoster,
    ConflictSeverity, CustomEvent, DayType, EntryKind, LunchPreference, PeriodSlot,
    PeriodTemplate, RosterClass, TemplateSet, TimeOfDay,
};

fn t(text: &str) -> TimeOfDay {
    text.parse().unwrap()
}

fn slot(code: &str, start: &str, end: &str) -> PeriodSlot {
    PeriodSlot::new(code, t(start), t(end))
}

fn roster() -> ClassRoster {
    ClassRoster::new(vec![
        RosterClass::new("Algebra", "N", "204"),
        RosterClass::new("Biology", "Ruiz", "118"),
        RosterClass::new("Chemistry", "Okafor", "N"),
        RosterClass::new("Debate", "Lind", "9"),
        RosterClass::new("English", "", "221"),
        RosterClass::new("French", "Moreau", "302"),
    ])
}

fn gold_day() -> PeriodTemplate {
    PeriodTemplate::new(
        "Gold 1",
        vec![
            slot("$1", "8:00", "9:25"),
            slot("$2", "9:30", "10:55"),
            slot("$3", "11:00", "12:20"),
            slot("Lunch", "12:20", "1:00"),
            slot("$4", "1:05", "2:25"),
        ],
    )
}

fn templates() -> TemplateSet {
    TemplateSet::new().with("G1", gold_day())
}

#[test]
fn scenario_a_class_entry_from_roster() {
    let template = PeriodTemplate::new("Gold", vec![slot("$1", "8:00:00", "8:45:00")]);
    let out = resolve_template(
        &template,
        None,
        &roster(),
        LunchPreference::default(),
        t("8:20:00"),
        true,
    );

    assert_eq!(out.len(), 1);
    let entry = &out[0];
    assert_eq!(entry.class_name(), "Algebra");
    assert_eq!(entry.teacher(), "");
    assert_eq!(entry.room(), "204");
    assert!(entry.is_current);
    assert!((entry.progress.unwrap() - 4.0 / 9.0).abs() < 1e-9);
}

#[test]
fn scenario_b_second_lunch_forces_fixed_window() {
    let out = resolve(
        &templates(),
        "G1",
        &roster(),
        LunchPreference::new(true, false),
        t("8:00"),
        false,
    );

    let lunch = out.iter().find(|e| e.class_name() == "Lunch").unwrap();
    assert_eq!(lunch.time_range, "12:25 to 1:05");
    assert_eq!(lunch.start_seconds, Some(44_700));
    assert_eq!(lunch.end_seconds, Some(47_100));

    let debate = out.iter().find(|e| e.class_name() == "Debate").unwrap();
    assert_eq!(debate.time_range, "11:00 to 12:20");

    // Template order is kept even though the times now interleave.
    let names: Vec<_> = out.iter().map(|e| e.class_name()).collect();
    assert_eq!(names, ["Algebra", "Biology", "Chemistry", "Lunch", "Debate"]);
}

#[test]
fn scenario_b_preference_for_other_group_does_not_swap() {
    let out = resolve(
        &templates(),
        "g1",
        &roster(),
        LunchPreference::new(false, true),
        t("8:00"),
        false,
    );
    let lunch = out.iter().find(|e| e.class_name() == "Lunch").unwrap();
    assert_eq!(lunch.time_range, "12:20 to 1:00");
}

#[test]
fn brunch_day_swaps_class_four() {
    let templates = TemplateSet::new().with(
        DayType::B1.code(),
        PeriodTemplate::new(
            "Blue 1",
            vec![
                slot("$1", "8:00", "9:35"),
                slot("Brunch", "9:40", "10:05"),
                slot("$4", "10:10", "11:35"),
                slot("$5", "11:40", "1:05"),
            ],
        ),
    );
    let out = resolve(
        &templates,
        "B1",
        &roster(),
        LunchPreference::new(false, true),
        t("10:00"),
        true,
    );

    assert_eq!(out[1].time_range, "11:10 to 11:35");
    assert!(!out[1].is_current);
    assert_eq!(out[2].class_name(), "Debate");
    assert_eq!(out[2].time_range, "9:45 to 11:05");
    assert!(out[2].is_current);
    assert_eq!(out[3].time_range, "11:40 to 1:05");
}

#[test]
fn scenario_c_short_gap_synthesizes_passing_period() {
    let template = PeriodTemplate::new(
        "Gold",
        vec![slot("$1", "9:00", "9:50"), slot("$2", "9:54", "10:40")],
    );
    let out = resolve_template(
        &template,
        None,
        &roster(),
        LunchPreference::default(),
        t("9:52"),
        true,
    );

    assert_eq!(out.len(), 3);
    let passing = &out[1];
    assert_eq!(passing.kind, EntryKind::PassingPeriod);
    assert_eq!(passing.class_name(), "Passing Period");
    assert!(passing.is_current);
    assert_eq!(passing.progress, Some(0.5));
    assert_eq!(passing.span(), Some((t("9:50").to_seconds(), t("9:54").to_seconds())));
}

#[test]
fn scenario_c_long_gap_is_not_a_passing_period() {
    let template = PeriodTemplate::new(
        "Gold",
        vec![slot("$1", "9:00", "9:50"), slot("$2", "10:10", "11:00")],
    );
    let out = resolve_template(
        &template,
        None,
        &roster(),
        LunchPreference::default(),
        t("10:00"),
        true,
    );

    assert_eq!(out.len(), 2);
    assert!(out.iter().all(|e| e.kind != EntryKind::PassingPeriod));
    assert!(out.iter().all(|e| !e.is_current));
}

#[test]
fn scenario_d_last_current_entry_pairs_with_predecessor() {
    let out = resolve(
        &templates(),
        "G1",
        &roster(),
        LunchPreference::default(),
        t("7:00"),
        false,
    );
    let selected = select_for_compact_view(&out, t("2:00").to_seconds());

    assert_eq!(selected.len(), 2);
    assert_eq!(selected[0].class_name(), "Lunch");
    assert_eq!(selected[1].class_name(), "Debate");
    assert!(selected[1].is_current);
    assert!(!selected[0].is_current);
}

#[test]
fn scenario_e_event_inside_class_is_complete_conflict() {
    let template = PeriodTemplate::new("Gold", vec![slot("$2", "8:45", "9:45")]);
    let entries = resolve_template(
        &template,
        None,
        &roster(),
        LunchPreference::default(),
        t("8:00"),
        true,
    );
    let events = vec![CustomEvent::new("Dentist", t("9:00"), t("9:30"))];

    let conflicts = detect_conflicts(&events, &entries);
    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].severity, ConflictSeverity::Complete);
    assert_eq!(conflicts[0].conflicting_entry.class_name(), "Biology");
}

#[test]
fn unknown_day_code_resolves_empty() {
    let out = resolve(
        &templates(),
        "Q7",
        &roster(),
        LunchPreference::new(true, true),
        t("9:00"),
        true,
    );
    assert!(out.is_empty());
}

#[test]
fn resolution_is_deterministic() {
    let run = || {
        resolve(
            &templates(),
            "G1",
            &roster(),
            LunchPreference::new(true, false),
            t("10:57"),
            true,
        )
    };
    assert_eq!(run(), run());
}

#[test]
fn degraded_inputs_stay_distinguishable() {
    let template = PeriodTemplate::new(
        "Broken",
        vec![
            slot("$42", "8:00", "9:00"),
            PeriodSlot::new("$1", TimeOfDay::parse("garbage"), TimeOfDay::parse("9:30")),
        ],
    );
    assert!("garbage".parse::<TimeOfDay>().is_err());

    let out = resolve_template(
        &template,
        None,
        &roster(),
        LunchPreference::default(),
        t("9:15"),
        true,
    );

    assert_eq!(out[0].kind, EntryKind::Literal { label: "$42".into() });
    assert_eq!(out[1].start_seconds, Some(0));
    assert_eq!(out[1].time_range, "0:00 to 9:30");
}
