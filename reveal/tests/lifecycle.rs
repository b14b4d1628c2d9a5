//! Arm/fire/teardown behavior of the controller state machine.

use reveal_core::{
    FireDecision, HeroRole, HeroTargets, MotionPreference, Phase, RegId, RegKind,
    RevealController, SetupError, TargetInventory,
};

/// The shipped page: one hero group, three reveal blocks, four cards.
fn full_page() -> TargetInventory {
    TargetInventory {
        hero: Some(HeroTargets {
            has_eyebrow: true,
            title_lines: 2,
            has_copy: true,
            has_cta: true,
        }),
        reveals: 3,
        cards: 4,
    }
}

fn scroll_driven_ids(controller: &mut RevealController) -> Vec<RegId> {
    let plan = controller
        .setup(&full_page(), MotionPreference::Allowed)
        .expect("fresh controller arms");
    plan.registrations
        .iter()
        .filter(|reg| reg.is_scroll_driven())
        .map(|reg| reg.id)
        .collect()
}

#[test]
fn arms_with_one_registration_per_target_group() {
    let mut controller = RevealController::default();
    let plan = controller
        .setup(&full_page(), MotionPreference::Allowed)
        .unwrap();

    // 1 hero group + 3 reveals + 4 cards.
    assert_eq!(plan.len(), 8);
    assert_eq!(controller.phase(), Phase::Armed);
    assert_eq!(controller.registration_count(), 8);
    // The hero group releases at mount, so only the scroll-driven
    // registrations are pending.
    assert_eq!(controller.pending_count(), 7);
}

#[test]
fn reduced_motion_arms_with_nothing() {
    let mut controller = RevealController::default();
    let plan = controller
        .setup(&full_page(), MotionPreference::Reduced)
        .unwrap();

    assert!(plan.is_empty());
    assert_eq!(controller.phase(), Phase::Armed);
    assert_eq!(controller.registration_count(), 0);
    assert_eq!(controller.pending_count(), 0);
}

#[test]
fn empty_page_arms_with_nothing() {
    let mut controller = RevealController::default();
    let plan = controller
        .setup(&TargetInventory::default(), MotionPreference::Allowed)
        .unwrap();

    assert!(plan.is_empty());
    assert_eq!(controller.phase(), Phase::Armed);
}

#[test]
fn second_setup_is_a_precondition_violation() {
    let mut controller = RevealController::default();
    controller
        .setup(&full_page(), MotionPreference::Allowed)
        .unwrap();

    let err = controller
        .setup(&full_page(), MotionPreference::Allowed)
        .unwrap_err();
    assert_eq!(err, SetupError::AlreadyArmed);
    // The first arm survives the violation untouched.
    assert_eq!(controller.registration_count(), 8);
}

#[test]
fn setup_after_teardown_is_refused() {
    let mut controller = RevealController::default();
    controller
        .setup(&full_page(), MotionPreference::Allowed)
        .unwrap();
    controller.teardown();

    let err = controller
        .setup(&full_page(), MotionPreference::Allowed)
        .unwrap_err();
    assert_eq!(err, SetupError::Disposed);
}

#[test]
fn crossing_fires_each_registration_once() {
    let mut controller = RevealController::default();
    let ids = scroll_driven_ids(&mut controller);
    let first = ids[0];

    assert_eq!(controller.on_crossing(first), FireDecision::Play);
    assert_eq!(controller.pending_count(), ids.len() - 1);

    // Scrolling back and forth re-delivers the event; it stays inert.
    assert_eq!(controller.on_crossing(first), FireDecision::Ignore);
    assert_eq!(controller.pending_count(), ids.len() - 1);
}

#[test]
fn every_scroll_registration_fires_independently() {
    let mut controller = RevealController::default();
    let ids = scroll_driven_ids(&mut controller);

    for id in &ids {
        assert_eq!(controller.on_crossing(*id), FireDecision::Play);
    }
    assert_eq!(controller.pending_count(), 0);
    assert_eq!(controller.registration_count(), 8);
}

#[test]
fn hero_ignores_crossing_events() {
    let mut controller = RevealController::default();
    let plan = controller
        .setup(&full_page(), MotionPreference::Allowed)
        .unwrap();
    let hero_id = plan
        .registrations
        .iter()
        .find(|reg| !reg.is_scroll_driven())
        .map(|reg| reg.id)
        .expect("hero registration");

    assert_eq!(controller.on_crossing(hero_id), FireDecision::Ignore);
}

#[test]
fn unknown_ids_are_ignored() {
    let mut controller = RevealController::default();
    controller
        .setup(&full_page(), MotionPreference::Allowed)
        .unwrap();

    assert_eq!(controller.on_crossing(RegId(9999)), FireDecision::Ignore);
}

#[test]
fn teardown_returns_every_registration_exactly_once() {
    let mut controller = RevealController::default();
    controller
        .setup(&full_page(), MotionPreference::Allowed)
        .unwrap();

    let reverted = controller.teardown();
    assert_eq!(reverted.len(), 8);
    assert_eq!(controller.phase(), Phase::Disposed);
    assert_eq!(controller.registration_count(), 0);

    // Idempotent: the second call has nothing left to revert.
    assert!(controller.teardown().is_empty());
    assert_eq!(controller.phase(), Phase::Disposed);
}

#[test]
fn teardown_before_any_fire_reverts_everything() {
    let mut controller = RevealController::default();
    controller
        .setup(&full_page(), MotionPreference::Allowed)
        .unwrap();

    // No crossing has fired; teardown still reverts all eight.
    assert_eq!(controller.pending_count(), 7);
    assert_eq!(controller.teardown().len(), 8);
    assert_eq!(controller.pending_count(), 0);
}

#[test]
fn teardown_without_setup_is_a_no_op() {
    let mut controller = RevealController::default();
    assert!(controller.teardown().is_empty());
    assert_eq!(controller.phase(), Phase::Disposed);
}

#[test]
fn crossing_after_teardown_is_ignored() {
    let mut controller = RevealController::default();
    let ids = scroll_driven_ids(&mut controller);
    controller.teardown();

    assert_eq!(controller.on_crossing(ids[0]), FireDecision::Ignore);
}

#[test]
fn hero_steps_start_in_order_with_bounded_overlap() {
    let mut controller = RevealController::default();
    let plan = controller
        .setup(&full_page(), MotionPreference::Allowed)
        .unwrap();
    let steps = plan.hero_steps().expect("hero group");

    let tween = |role: HeroRole| {
        steps
            .iter()
            .find(|step| step.role == role)
            .expect("hero step")
            .tween
    };

    let eyebrow = tween(HeroRole::Eyebrow);
    let first_line = tween(HeroRole::TitleLine(0));
    let last_line = tween(HeroRole::TitleLine(1));
    let copy = tween(HeroRole::Copy);
    let cta = tween(HeroRole::Cta);

    // Strictly ordered entrances: eyebrow, title, copy, call-to-action.
    assert!(eyebrow.delay < first_line.delay);
    assert!(first_line.delay < last_line.delay);
    assert!(last_line.delay < copy.delay);
    assert!(copy.delay < cta.delay);

    // Bounded overlap: each step begins before the previous one ends,
    // so the sequence reads as one continuous motion.
    assert!(first_line.delay < eyebrow.end());
    assert!(copy.delay < last_line.end());
    assert!(cta.delay < copy.end());
}

#[test]
fn card_delays_are_monotonic_in_position() {
    let mut controller = RevealController::default();
    let plan = controller
        .setup(&full_page(), MotionPreference::Allowed)
        .unwrap();

    let mut delays: Vec<(usize, f64)> = plan
        .registrations
        .iter()
        .filter_map(|reg| match &reg.kind {
            RegKind::Card { index, tween, .. } => Some((*index, tween.delay)),
            _ => None,
        })
        .collect();
    delays.sort_by_key(|(index, _)| *index);

    assert_eq!(delays.len(), 4);
    for pair in delays.windows(2) {
        assert!(pair[0].1 <= pair[1].1);
    }
}

#[test]
fn absent_hero_subtargets_are_skipped() {
    let mut controller = RevealController::default();
    let inventory = TargetInventory {
        hero: Some(HeroTargets {
            has_eyebrow: false,
            title_lines: 2,
            has_copy: false,
            has_cta: false,
        }),
        reveals: 0,
        cards: 0,
    };
    let plan = controller
        .setup(&inventory, MotionPreference::Allowed)
        .unwrap();

    assert_eq!(plan.len(), 1);
    let steps = plan.hero_steps().expect("hero group");
    assert_eq!(steps.len(), 2);
}

#[test]
fn hero_with_no_subtargets_registers_nothing() {
    let mut controller = RevealController::default();
    let inventory = TargetInventory {
        hero: Some(HeroTargets::default()),
        reveals: 1,
        cards: 0,
    };
    let plan = controller
        .setup(&inventory, MotionPreference::Allowed)
        .unwrap();

    assert_eq!(plan.len(), 1);
    assert!(plan.hero_steps().is_none());
}
