//! Unit tests for isim-model.

use std::collections::VecDeque;

use isim_core::{RandomSource, SimRng, SimTime};

use crate::{
    footprint, Approach, Engine, EventKind, IntersectionParams, IntersectionState, LightMode,
    LightPhase, ModelError, Movement, Outcome, TrafficModel, TurnDirection, Zone, ZoneBoard,
    ZoneSet, ARRIVAL_WEIGHTS,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Replays a fixed list of uniforms; running out is a test bug.
struct Script(VecDeque<f64>);

impl Script {
    fn new(values: &[f64]) -> Self {
        Script(values.iter().copied().collect())
    }

    fn remaining(&self) -> usize {
        self.0.len()
    }
}

impl RandomSource for Script {
    fn uniform(&mut self) -> f64 {
        self.0.pop_front().expect("script ran out of uniforms")
    }
}

fn setup(light: LightMode, horizon: f64) -> (TrafficModel, Engine) {
    let params = IntersectionParams { light, ..IntersectionParams::default() };
    (TrafficModel::new(params, SimTime(horizon)), Engine::new())
}

fn step<R: RandomSource>(
    model:  &mut TrafficModel,
    engine: &mut Engine,
    rng:    &mut R,
) -> Option<Result<Outcome, ModelError>> {
    let event = engine.remove_earliest()?;
    Some(model.handle(&event, engine, rng))
}

fn run_to_end<R: RandomSource>(model: &mut TrafficModel, engine: &mut Engine, rng: &mut R) {
    while let Some(result) = step(model, engine, rng) {
        result.unwrap();
    }
}

/// Zone holders and in-flight movements must describe the same thing.
fn assert_consistent(state: &IntersectionState, light: LightMode) {
    for approach in Approach::ALL {
        let queue = state.queue(approach);
        assert_eq!(
            queue.arrivals(),
            queue.departures() + queue.len() as u64,
            "conservation broken on {approach}"
        );
        assert!(queue.total_waiting_time() >= 0.0);
        if let Some(movement) = queue.in_flight() {
            let zones = footprint(approach, movement, light).unwrap();
            for zone in zones.iter() {
                assert_eq!(state.zones().holder(zone), Some(approach));
            }
        }
    }
    for zone in Zone::ALL {
        if let Some(holder) = state.zones().holder(zone) {
            let movement = state.queue(holder).in_flight().expect("holder has nothing in flight");
            assert!(footprint(holder, movement, light).unwrap().contains(zone));
        }
    }
}

// ── Approaches and movements ──────────────────────────────────────────────────

#[cfg(test)]
mod approach {
    use super::*;

    #[test]
    fn weights_sum_to_225() {
        assert_eq!(ARRIVAL_WEIGHTS.iter().sum::<u32>(), 225);
    }

    #[test]
    fn index_matches_all_order() {
        for (i, a) in Approach::ALL.iter().enumerate() {
            assert_eq!(a.index(), i);
        }
    }

    #[test]
    fn turn_direction_thresholds() {
        assert_eq!(TurnDirection::from_uniform(0.0), TurnDirection::Straight);
        assert_eq!(TurnDirection::from_uniform(0.49), TurnDirection::Straight);
        assert_eq!(TurnDirection::from_uniform(0.5), TurnDirection::Left);
        assert_eq!(TurnDirection::from_uniform(0.74), TurnDirection::Left);
        assert_eq!(TurnDirection::from_uniform(0.75), TurnDirection::Right);
    }

    #[test]
    fn curb_side_turns_continue_across() {
        use TurnDirection::*;
        assert_eq!(Approach::North14East.movement_for(Left), Movement::TurnLeft);
        assert_eq!(Approach::North14East.movement_for(Right), Movement::GoAcross);
        assert_eq!(Approach::South14East.movement_for(Left), Movement::GoAcross);
        assert_eq!(Approach::South14East.movement_for(Right), Movement::TurnRight);
        assert_eq!(Approach::EastNorth14West.movement_for(Left), Movement::GoAcross);
        assert_eq!(Approach::EastNorth14West.movement_for(Right), Movement::TurnRight);
        assert_eq!(Approach::EastSouth14West.movement_for(Left), Movement::TurnLeft);
        assert_eq!(Approach::EastSouth14West.movement_for(Right), Movement::GoAcross);
    }

    #[test]
    fn atlantic_makes_every_movement() {
        for a in [Approach::NorthAtlanticSouth, Approach::SouthAtlanticNorth] {
            assert!(a.allows(Movement::GoAcross));
            assert!(a.allows(Movement::TurnLeft));
            assert!(a.allows(Movement::TurnRight));
        }
        assert!(!Approach::North14East.allows(Movement::TurnRight));
        assert!(!Approach::South14East.allows(Movement::TurnLeft));
    }

    #[test]
    fn every_allowed_movement_has_a_footprint() {
        for light in [LightMode::Uncontrolled, LightMode::Signalized] {
            for a in Approach::ALL {
                for m in [Movement::GoAcross, Movement::TurnLeft, Movement::TurnRight] {
                    assert_eq!(footprint(a, m, light).is_some(), a.allows(m), "{a} {m}");
                }
            }
        }
    }
}

// ── Zones ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod zones {
    use super::*;

    #[test]
    fn fourteenth_footprints_ignore_light_mode() {
        for light in [LightMode::Uncontrolled, LightMode::Signalized] {
            assert_eq!(
                footprint(Approach::North14East, Movement::TurnLeft, light),
                Some(ZoneSet::of(&[Zone::North]))
            );
            assert_eq!(
                footprint(Approach::EastSouth14West, Movement::TurnLeft, light),
                Some(ZoneSet::of(&[Zone::South]))
            );
        }
    }

    #[test]
    fn atlantic_footprints_depend_on_light_mode() {
        let ns = Approach::NorthAtlanticSouth;
        let sn = Approach::SouthAtlanticNorth;
        assert_eq!(
            footprint(ns, Movement::GoAcross, LightMode::Uncontrolled),
            Some(ZoneSet::of(&[Zone::North, Zone::South]))
        );
        assert_eq!(
            footprint(sn, Movement::TurnRight, LightMode::Uncontrolled),
            Some(ZoneSet::of(&[Zone::South]))
        );
        assert_eq!(
            footprint(ns, Movement::TurnLeft, LightMode::Signalized),
            Some(ZoneSet::of(&[Zone::East]))
        );
        assert_eq!(
            footprint(sn, Movement::GoAcross, LightMode::Signalized),
            Some(ZoneSet::of(&[Zone::East]))
        );
    }

    #[test]
    fn claim_and_release() {
        let mut board = ZoneBoard::new();
        let ns = ZoneSet::of(&[Zone::North, Zone::South]);
        board.claim(ns, Approach::NorthAtlanticSouth).unwrap();
        assert_eq!(board.free_flags(), [false, false, true, true]);

        board.release(ns, Approach::NorthAtlanticSouth).unwrap();
        assert_eq!(board.free_flags(), [true; 4]);
    }

    #[test]
    fn conflicting_claim_changes_nothing() {
        let mut board = ZoneBoard::new();
        board.claim(ZoneSet::of(&[Zone::South]), Approach::North14East).unwrap();

        let err = board
            .claim(ZoneSet::of(&[Zone::North, Zone::South]), Approach::SouthAtlanticNorth)
            .unwrap_err();
        assert!(matches!(
            err,
            ModelError::ZoneConflict { zone: Zone::South, holder: Approach::North14East, .. }
        ));
        assert!(board.is_free(Zone::North));
    }

    #[test]
    fn release_by_non_holder_fails() {
        let mut board = ZoneBoard::new();
        board.claim(ZoneSet::of(&[Zone::West]), Approach::NorthAtlanticSouth).unwrap();
        let err = board
            .release(ZoneSet::of(&[Zone::West]), Approach::SouthAtlanticNorth)
            .unwrap_err();
        assert!(matches!(err, ModelError::ZoneNotHeld { zone: Zone::West, .. }));
        assert_eq!(board.holder(Zone::West), Some(Approach::NorthAtlanticSouth));
    }

    #[test]
    fn zone_set_display() {
        assert_eq!(ZoneSet::of(&[Zone::South, Zone::North]).to_string(), "{north,south}");
        assert_eq!(ZoneSet::EMPTY.to_string(), "{}");
    }
}

// ── Queues and parameters ─────────────────────────────────────────────────────

#[cfg(test)]
mod queue {
    use super::*;
    use crate::ApproachQueue;

    #[test]
    fn average_wait_undefined_without_arrivals() {
        let q = ApproachQueue::new(Approach::South14East);
        assert_eq!(q.average_wait(), None);
    }

    #[test]
    fn vehicles_are_numbered_per_approach() {
        let mut q = ApproachQueue::new(Approach::North14East);
        let first = q.arrive(Movement::GoAcross, SimTime(1.0));
        let second = q.arrive(Movement::TurnLeft, SimTime(2.0));
        assert_eq!(first.to_string(), "n14e-car-1");
        assert_eq!(second.to_string(), "n14e-car-2");
        assert_eq!(second.arrived_at, SimTime(2.0));
        assert_eq!(q.head(), Some(&first));
    }

    #[test]
    fn departure_counts_only_vehicles_behind_new_head() {
        let mut q = ApproachQueue::new(Approach::North14East);
        q.arrive(Movement::GoAcross, SimTime(0.0));
        q.arrive(Movement::GoAcross, SimTime(0.0));
        q.arrive(Movement::GoAcross, SimTime(0.0));
        q.begin_service().unwrap();

        // Two left, one of them behind the head: 1 × 4.0.
        q.depart(Movement::GoAcross, SimTime(4.0)).unwrap();
        assert_eq!(q.total_waiting_time(), 4.0);

        // One left, nobody behind it.
        q.begin_service().unwrap();
        q.depart(Movement::GoAcross, SimTime(6.0)).unwrap();
        assert_eq!(q.total_waiting_time(), 4.0);
        assert_eq!(q.last_event_time(), SimTime(6.0));
    }

    #[test]
    fn default_params_are_valid() {
        assert!(IntersectionParams::default().validate().is_ok());
    }

    #[test]
    fn zero_green_duration_rejected() {
        let params = IntersectionParams { green_duration: 0.0, ..IntersectionParams::default() };
        assert!(matches!(
            params.validate(),
            Err(ModelError::InvalidParameter { what: "green light duration", .. })
        ));
    }

    #[test]
    fn phase_permits_own_street() {
        assert!(LightPhase::FourteenthGreen.permits(Approach::EastNorth14West));
        assert!(!LightPhase::FourteenthGreen.permits(Approach::SouthAtlanticNorth));
        assert!(LightPhase::AtlanticGreen.permits(Approach::NorthAtlanticSouth));
    }
}

// ── Handlers ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod handlers {
    use super::*;

    #[test]
    fn free_head_is_dispatched_on_arrival() {
        // Horizon before the arrival: no next arrival is drawn.
        let (mut model, mut engine) = setup(LightMode::Uncontrolled, 0.5);
        let mut rng = Script::new(&[0.1]);
        engine.schedule(SimTime(1.0), EventKind::Arrival(Approach::North14East));

        assert_eq!(step(&mut model, &mut engine, &mut rng).unwrap().unwrap(), Outcome::Handled);
        let q = model.state().queue(Approach::North14East);
        assert_eq!(q.in_flight(), Some(Movement::GoAcross));
        assert_eq!(model.state().zones().holder(Zone::South), Some(Approach::North14East));
        assert_eq!(
            engine.peek(),
            Some((
                SimTime(3.0),
                &EventKind::Completion { approach: Approach::North14East, movement: Movement::GoAcross }
            ))
        );

        run_to_end(&mut model, &mut engine, &mut rng);
        let q = model.state().queue(Approach::North14East);
        assert_eq!((q.arrivals(), q.departures(), q.len()), (1, 1, 0));
        assert_eq!(q.total_waiting_time(), 0.0);
        assert_eq!(model.state().zones().free_flags(), [true; 4]);
        assert_eq!(model.state().events_processed(), 2);
    }

    #[test]
    fn conflicting_movement_waits_for_release() {
        let (mut model, mut engine) = setup(LightMode::Uncontrolled, 0.5);
        let mut rng = Script::new(&[0.1, 0.1]);
        engine.schedule(SimTime(1.0), EventKind::Arrival(Approach::North14East));
        engine.schedule(SimTime(1.5), EventKind::Arrival(Approach::South14East));

        step(&mut model, &mut engine, &mut rng).unwrap().unwrap();
        step(&mut model, &mut engine, &mut rng).unwrap().unwrap();
        // Both go across through the south quadrant.
        assert!(model.state().queue(Approach::South14East).has_waiting_head());
        assert_eq!(model.state().zones().holder(Zone::South), Some(Approach::North14East));

        // N14E completes at 3.0 and S14E takes the zone.
        step(&mut model, &mut engine, &mut rng).unwrap().unwrap();
        assert_eq!(engine.now(), SimTime(3.0));
        assert_eq!(model.state().zones().holder(Zone::South), Some(Approach::South14East));
        assert_eq!(engine.peek().map(|(t, _)| t), Some(SimTime(5.0)));

        run_to_end(&mut model, &mut engine, &mut rng);
        assert_eq!(model.state().total_departures(), 2);
    }

    #[test]
    fn waiting_time_integrates_queue_behind_head() {
        let (mut model, mut engine) = setup(LightMode::Uncontrolled, 0.5);
        let mut rng = Script::new(&[0.1, 0.1, 0.1]);
        for t in [1.0, 2.0, 2.5] {
            engine.schedule(SimTime(t), EventKind::Arrival(Approach::North14East));
        }
        run_to_end(&mut model, &mut engine, &mut rng);

        // Arrivals: 0 + 1×1.0 + 2×0.5; departures at 3, 5, 7: 1×0.5 + 0 + 0.
        let q = model.state().queue(Approach::North14East);
        assert_eq!(q.total_waiting_time(), 2.5);
        assert_eq!(q.average_wait(), Some(2.5 / 3.0));
        assert_eq!(engine.now(), SimTime(7.0));
    }

    #[test]
    fn completion_on_empty_queue_is_already_handled() {
        let (mut model, mut engine) = setup(LightMode::Uncontrolled, 10.0);
        let mut rng = Script::new(&[]);
        engine.schedule(
            SimTime(1.0),
            EventKind::Completion { approach: Approach::EastNorth14West, movement: Movement::GoAcross },
        );
        let outcome = step(&mut model, &mut engine, &mut rng).unwrap().unwrap();
        assert_eq!(outcome, Outcome::AlreadyHandled);
        assert_eq!(model.state().events_processed(), 0);
        assert_eq!(model.state().queue(Approach::EastNorth14West).last_event_time(), SimTime::ZERO);
    }

    #[test]
    fn completion_of_wrong_movement_is_inconsistent() {
        let (mut model, mut engine) = setup(LightMode::Uncontrolled, 0.5);
        let mut rng = Script::new(&[0.1]);
        engine.schedule(SimTime(1.0), EventKind::Arrival(Approach::North14East));
        step(&mut model, &mut engine, &mut rng).unwrap().unwrap();

        engine.schedule(
            SimTime(1.5),
            EventKind::Completion { approach: Approach::North14East, movement: Movement::TurnLeft },
        );
        let err = step(&mut model, &mut engine, &mut rng).unwrap().unwrap_err();
        assert!(matches!(err, ModelError::InconsistentEvent { .. }));
    }

    #[test]
    fn impossible_movement_is_inconsistent() {
        let (mut model, mut engine) = setup(LightMode::Uncontrolled, 0.5);
        let mut rng = Script::new(&[0.1]);
        engine.schedule(SimTime(1.0), EventKind::Arrival(Approach::North14East));
        step(&mut model, &mut engine, &mut rng).unwrap().unwrap();

        engine.schedule(
            SimTime(1.5),
            EventKind::Completion { approach: Approach::North14East, movement: Movement::TurnRight },
        );
        assert!(step(&mut model, &mut engine, &mut rng).unwrap().is_err());
    }

    #[test]
    fn light_event_without_signal_is_inconsistent() {
        let (mut model, mut engine) = setup(LightMode::Uncontrolled, 10.0);
        let mut rng = Script::new(&[]);
        engine.schedule(SimTime(1.0), EventKind::LightTurnsRed);
        let err = step(&mut model, &mut engine, &mut rng).unwrap().unwrap_err();
        assert!(matches!(err, ModelError::InconsistentEvent { .. }));
    }

    #[test]
    fn atlantic_coin_flip_picks_southbound_on_heads() {
        let (mut model, mut engine) = setup(LightMode::Uncontrolled, 0.5);
        let mut rng = Script::new(&[0.1, 0.1, 0.1, 0.2]);
        engine.schedule(SimTime(1.0), EventKind::Arrival(Approach::North14East));
        engine.schedule(SimTime(1.5), EventKind::Arrival(Approach::NorthAtlanticSouth));
        engine.schedule(SimTime(2.0), EventKind::Arrival(Approach::SouthAtlanticNorth));
        for _ in 0..4 {
            step(&mut model, &mut engine, &mut rng).unwrap().unwrap();
        }
        assert_eq!(rng.remaining(), 0);
        assert_eq!(model.state().zones().holder(Zone::North), Some(Approach::NorthAtlanticSouth));
        assert!(model.state().queue(Approach::SouthAtlanticNorth).has_waiting_head());
    }

    #[test]
    fn atlantic_coin_flip_picks_northbound_on_tails() {
        let (mut model, mut engine) = setup(LightMode::Uncontrolled, 0.5);
        let mut rng = Script::new(&[0.1, 0.1, 0.1, 0.7]);
        engine.schedule(SimTime(1.0), EventKind::Arrival(Approach::North14East));
        engine.schedule(SimTime(1.5), EventKind::Arrival(Approach::NorthAtlanticSouth));
        engine.schedule(SimTime(2.0), EventKind::Arrival(Approach::SouthAtlanticNorth));
        for _ in 0..4 {
            step(&mut model, &mut engine, &mut rng).unwrap().unwrap();
        }
        assert_eq!(model.state().zones().holder(Zone::South), Some(Approach::SouthAtlanticNorth));
        assert!(model.state().queue(Approach::NorthAtlanticSouth).has_waiting_head());
    }
}

// ── Traffic light ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod light {
    use super::*;

    #[test]
    fn bootstrap_schedules_first_red_only_with_signal() {
        let (mut model, mut engine) = setup(LightMode::Signalized, 100.0);
        model.bootstrap(&mut engine, &mut Script::new(&[0.0, 0.5]));
        assert_eq!(engine.size(), 2);
        let kinds: Vec<EventKind> = engine.pending().map(|(_, k)| *k).collect();
        assert_eq!(kinds, vec![EventKind::Arrival(Approach::North14East), EventKind::LightTurnsRed]);

        let (mut model, mut engine) = setup(LightMode::Uncontrolled, 100.0);
        model.bootstrap(&mut engine, &mut Script::new(&[0.0, 0.5]));
        assert_eq!(engine.size(), 1);
    }

    #[test]
    fn red_releases_waiting_atlantic_traffic() {
        let (mut model, mut engine) = setup(LightMode::Signalized, 0.5);
        let mut rng = Script::new(&[0.1]);
        engine.schedule(SimTime(1.0), EventKind::Arrival(Approach::NorthAtlanticSouth));
        engine.schedule(SimTime(2.0), EventKind::LightTurnsRed);

        step(&mut model, &mut engine, &mut rng).unwrap().unwrap();
        assert!(model.state().queue(Approach::NorthAtlanticSouth).has_waiting_head());

        step(&mut model, &mut engine, &mut rng).unwrap().unwrap();
        assert_eq!(model.state().phase(), LightPhase::AtlanticGreen);
        assert_eq!(model.state().zones().holder(Zone::West), Some(Approach::NorthAtlanticSouth));

        // arrival, red, completion at 4; the red fell after the horizon so no
        // green follows.
        run_to_end(&mut model, &mut engine, &mut rng);
        assert_eq!(engine.now(), SimTime(4.0));
        assert_eq!(model.state().phase(), LightPhase::AtlanticGreen);
        assert_eq!(model.state().events_processed(), 3);
    }

    #[test]
    fn fourteenth_street_waits_through_red() {
        let (mut model, mut engine) = setup(LightMode::Signalized, 1.5);
        let mut rng = Script::new(&[0.1]);
        engine.schedule(SimTime(1.0), EventKind::LightTurnsRed);
        engine.schedule(SimTime(2.0), EventKind::Arrival(Approach::EastSouth14West));

        step(&mut model, &mut engine, &mut rng).unwrap().unwrap();
        step(&mut model, &mut engine, &mut rng).unwrap().unwrap();
        assert!(model.state().queue(Approach::EastSouth14West).has_waiting_head());

        // Green at 31 releases it; go-across completes at 33.
        run_to_end(&mut model, &mut engine, &mut rng);
        assert_eq!(engine.now(), SimTime(33.0));
        assert_eq!(model.state().queue(Approach::EastSouth14West).departures(), 1);
    }

    #[test]
    fn fourteenth_street_stranded_by_red_after_horizon() {
        let (mut model, mut engine) = setup(LightMode::Signalized, 0.5);
        let mut rng = Script::new(&[0.1]);
        engine.schedule(SimTime(1.0), EventKind::LightTurnsRed);
        engine.schedule(SimTime(2.0), EventKind::Arrival(Approach::EastSouth14West));

        run_to_end(&mut model, &mut engine, &mut rng);
        let q = model.state().queue(Approach::EastSouth14West);
        assert_eq!((q.len(), q.departures()), (1, 0));
        assert_eq!(model.state().phase(), LightPhase::AtlanticGreen);
        assert_eq!(engine.now(), SimTime(2.0));
    }

    #[test]
    fn green_before_horizon_schedules_red() {
        let (mut model, mut engine) = setup(LightMode::Signalized, 10.0);
        engine.schedule(SimTime(5.0), EventKind::LightTurnsGreen);
        step(&mut model, &mut engine, &mut Script::new(&[])).unwrap().unwrap();
        let pending: Vec<_> = engine.pending().map(|(t, k)| (t, *k)).collect();
        assert_eq!(pending, vec![(SimTime(50.0), EventKind::LightTurnsRed)]);
    }

    #[test]
    fn green_at_horizon_schedules_nothing() {
        let (mut model, mut engine) = setup(LightMode::Signalized, 10.0);
        engine.schedule(SimTime(10.0), EventKind::LightTurnsGreen);
        step(&mut model, &mut engine, &mut Script::new(&[])).unwrap().unwrap();
        assert!(engine.is_empty());
        assert_eq!(model.state().phase(), LightPhase::FourteenthGreen);
    }

    #[test]
    fn red_before_horizon_schedules_green() {
        let (mut model, mut engine) = setup(LightMode::Signalized, 10.0);
        engine.schedule(SimTime(5.0), EventKind::LightTurnsRed);
        step(&mut model, &mut engine, &mut Script::new(&[])).unwrap().unwrap();
        let pending: Vec<_> = engine.pending().map(|(t, k)| (t, *k)).collect();
        assert_eq!(pending, vec![(SimTime(35.0), EventKind::LightTurnsGreen)]);
    }

    #[test]
    fn red_at_horizon_schedules_nothing() {
        let (mut model, mut engine) = setup(LightMode::Signalized, 10.0);
        engine.schedule(SimTime(10.0), EventKind::LightTurnsRed);
        step(&mut model, &mut engine, &mut Script::new(&[])).unwrap().unwrap();
        assert!(engine.is_empty());
        assert_eq!(model.state().phase(), LightPhase::AtlanticGreen);
    }
}

// ── Seeded runs ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod runs {
    use super::*;

    fn seeded_run(light: LightMode, seed: u64) {
        let params = IntersectionParams { light, atlantic_mean: 2.0, fourteenth_mean: 1.0, ..IntersectionParams::default() };
        let mut model = TrafficModel::new(params, SimTime(300.0));
        let mut engine = Engine::new();
        let mut rng = SimRng::new(seed);
        model.bootstrap(&mut engine, &mut rng);

        let mut steps = 0u64;
        while let Some(result) = step(&mut model, &mut engine, &mut rng) {
            result.unwrap();
            assert_consistent(model.state(), light);
            steps += 1;
            assert!(steps < 1_000_000, "run did not drain");
        }
        assert!(model.state().total_arrivals() > 0);
    }

    #[test]
    fn invariants_hold_without_signal() {
        for seed in 0..5 {
            seeded_run(LightMode::Uncontrolled, seed);
        }
    }

    #[test]
    fn invariants_hold_with_signal() {
        for seed in 0..5 {
            seeded_run(LightMode::Signalized, seed);
        }
    }

    #[test]
    fn uncontrolled_run_clears_every_vehicle() {
        let (mut model, mut engine) = setup(LightMode::Uncontrolled, 200.0);
        let mut rng = SimRng::new(7);
        model.bootstrap(&mut engine, &mut rng);
        run_to_end(&mut model, &mut engine, &mut rng);
        assert_eq!(model.state().vehicles_present(), 0);
        assert_eq!(model.state().zones().free_flags(), [true; 4]);
    }
}
