//! Mechanism tests: projection, ordering and verification over synthetic
//! plans with journaling hooks.

use crate::phase::Phase;
use crate::plan::PlanError;
use crate::slot::{OrderRule, Slot};
use crate::state;
use crate::testutil::{self, leak_plan, take_calls};

type SlotDef = (&'static str, Phase, u16, fn());

const DEFS: [SlotDef; 8] = [
    ("alpha", Phase::CoreServices, 10, testutil::alpha),
    ("bravo", Phase::CoreServices, 20, testutil::bravo),
    ("charlie", Phase::NetworkTransport, 10, testutil::charlie),
    ("delta", Phase::NetworkTransport, 20, testutil::delta),
    ("echo", Phase::NetworkTransport, 30, testutil::echo),
    ("foxtrot", Phase::SensorsActuators, 10, testutil::foxtrot),
    ("golf", Phase::Storage, 10, testutil::golf),
    ("hotel", Phase::LateSync, 10, testutil::hotel),
];

/// Slots from `DEFS`, with bit `i` of `mask` as slot `i`'s predicate.
fn sample_slots(mask: u8) -> Vec<Slot> {
    DEFS.iter()
        .enumerate()
        .map(|(i, &(name, phase, position, hook))| {
            Slot::new(name, phase, position, hook).enabled_if(mask & (1 << i) != 0)
        })
        .collect()
}

fn expected_names(mask: u8) -> Vec<&'static str> {
    DEFS.iter()
        .enumerate()
        .filter(|(i, _)| mask & (1 << i) != 0)
        .map(|(_, def)| def.0)
        .collect()
}

#[test]
fn every_subset_projects_exactly() {
    let _seq = testutil::serialize();
    for mask in 0u16..=u8::MAX as u16 {
        let mask = mask as u8;
        state::reset();
        take_calls();
        let plan = leak_plan(sample_slots(mask), Vec::new());
        plan.run();
        assert_eq!(take_calls(), expected_names(mask), "mask {mask:#010b}");
    }
}

#[test]
fn order_is_stable_under_projection() {
    let _seq = testutil::serialize();
    let full = leak_plan(sample_slots(u8::MAX), Vec::new());
    take_calls();
    full.run();
    let full_trace = take_calls();

    let mask = 0b1010_0110;
    state::reset();
    let sparse = leak_plan(sample_slots(mask), Vec::new());
    sparse.run();
    let sparse_trace = take_calls();

    let projected: Vec<&str> = full_trace
        .into_iter()
        .filter(|name| sparse_trace.contains(name))
        .collect();
    assert_eq!(sparse_trace, projected);
}

#[test]
fn empty_subset_invokes_nothing_but_completes() {
    let _seq = testutil::serialize();
    take_calls();
    let plan = leak_plan(sample_slots(0), Vec::new());
    plan.run();
    assert!(take_calls().is_empty());
    assert!(state::boot_state().trace().is_empty());
    assert!(state::is_boot_complete());
}

#[test]
fn second_run_repeats_every_enabled_hook() {
    let _seq = testutil::serialize();
    let mask = 0b0101_1010;
    let plan = leak_plan(sample_slots(mask), Vec::new());
    take_calls();
    plan.run();
    plan.run();
    let mut expected = expected_names(mask);
    expected.extend(expected_names(mask));
    assert_eq!(take_calls(), expected);
    assert_eq!(state::boot_state().trace(), expected.as_slice());
}

#[test]
fn state_records_trace_and_phases() {
    let _seq = testutil::serialize();
    let mask = 0b0010_0101; // alpha, charlie, foxtrot
    let plan = leak_plan(sample_slots(mask), Vec::new());
    plan.run();
    let state = state::boot_state();
    assert_eq!(state.trace(), ["alpha", "charlie", "foxtrot"]);
    assert_eq!(state.hooks_run(), 3);
    assert_eq!(
        state.phases(),
        Phase::CoreServices.mask() | Phase::NetworkTransport.mask() | Phase::SensorsActuators.mask()
    );
}

#[test]
fn well_formed_plan_verifies() {
    let plan = leak_plan(
        sample_slots(0b0000_1111),
        vec![OrderRule::new("alpha", "hotel")],
    );
    assert_eq!(plan.verify(), Ok(()));
}

#[test]
fn phase_regression_is_rejected() {
    let plan = leak_plan(
        vec![
            Slot::new("late", Phase::Storage, 10, testutil::golf),
            Slot::new("early", Phase::CoreServices, 10, testutil::alpha),
        ],
        Vec::new(),
    );
    assert_eq!(
        plan.verify(),
        Err(PlanError::PhaseOutOfOrder { slot: "early" })
    );
}

#[test]
fn position_ties_are_rejected() {
    let plan = leak_plan(
        vec![
            Slot::new("first", Phase::CoreServices, 10, testutil::alpha),
            Slot::new("second", Phase::CoreServices, 10, testutil::bravo),
        ],
        Vec::new(),
    );
    assert_eq!(
        plan.verify(),
        Err(PlanError::PositionNotIncreasing { slot: "second" })
    );
}

#[test]
fn duplicate_names_are_rejected() {
    let plan = leak_plan(
        vec![
            Slot::new("twin", Phase::CoreServices, 10, testutil::alpha),
            Slot::new("twin", Phase::CoreServices, 20, testutil::bravo),
        ],
        Vec::new(),
    );
    assert_eq!(plan.verify(), Err(PlanError::DuplicateName { slot: "twin" }));
}

#[test]
fn violated_order_rule_is_rejected() {
    let plan = leak_plan(
        sample_slots(u8::MAX),
        vec![OrderRule::new("hotel", "alpha")],
    );
    assert_eq!(
        plan.verify(),
        Err(PlanError::RuleViolated {
            before: "hotel",
            after: "alpha",
        })
    );
}

#[test]
fn rules_about_absent_slots_are_vacuous() {
    let plan = leak_plan(
        sample_slots(u8::MAX),
        vec![OrderRule::new("alpha", "not_declared")],
    );
    assert_eq!(plan.verify(), Ok(()));
}

#[test]
fn disabled_slots_do_not_affect_rule_checking() {
    // Rules are declaration-order facts; they hold for every enabled
    // subset containing both endpoints precisely because the declaration
    // satisfies them.
    let plan = leak_plan(sample_slots(0), vec![OrderRule::new("alpha", "hotel")]);
    assert_eq!(plan.verify(), Ok(()));
}
