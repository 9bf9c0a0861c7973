//! Unit tests for rb-train.

use rb_core::{BlockId, Priority, SimTime, TrainCategory, TrainId, TrainRng};

use crate::{
    FixedTravel, Route, RouteDefect, SegmentRecord, TrainError, TrainProcess, TrainSpec,
    TrainState, TravelModel, UniformTravel,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn spec(id: u32, speed: f64, route: Route) -> TrainSpec {
    TrainSpec::new(TrainId(id), TrainCategory::Express, Priority(1), speed, 0.0, route)
}

fn record(train: u32, block: u32, start: f64, end: f64) -> SegmentRecord {
    SegmentRecord {
        train:       TrainId(train),
        block_index: block + 1,
        block:       BlockId(block),
        start:       SimTime(start),
        end:         SimTime(end),
    }
}

// ── Route ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod route {
    use super::*;

    #[test]
    fn line_route_is_valid() {
        let r = Route::line(3);
        assert_eq!(r.blocks(), &[BlockId(0), BlockId(1), BlockId(2)]);
        assert_eq!(r.check(3), Ok(()));
    }

    #[test]
    fn empty_route_is_malformed() {
        assert_eq!(Route::default().check(3), Err(RouteDefect::Empty));
    }

    #[test]
    fn unknown_block_is_malformed() {
        let r = Route::new(vec![BlockId(0), BlockId(7)]);
        assert_eq!(r.check(3), Err(RouteDefect::UnknownBlock(BlockId(7))));
    }

    #[test]
    fn revisit_is_malformed() {
        let r = Route::new(vec![BlockId(0), BlockId(1), BlockId(0)]);
        assert_eq!(r.check(3), Err(RouteDefect::RevisitsBlock(BlockId(0))));
    }

    #[test]
    fn defect_display() {
        assert_eq!(RouteDefect::UnknownBlock(BlockId(4)).to_string(), "block 5 does not exist");
    }
}

// ── Travel models ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod travel {
    use super::*;

    #[test]
    fn uniform_scales_inversely_with_speed() {
        let model = UniformTravel::default();
        let fast = spec(1, 60.0, Route::line(1));
        let slow = spec(2, 40.0, Route::line(1));
        let mut rng = TrainRng::new(3, TrainId(1));
        for _ in 0..500 {
            let t = model.travel_time(&fast, BlockId(0), &mut rng);
            assert!((2.0..4.0).contains(&t), "speed 60 → [2, 4), got {t}");
            let t = model.travel_time(&slow, BlockId(0), &mut rng);
            assert!((3.0..6.0).contains(&t), "speed 40 → [3, 6), got {t}");
        }
    }

    #[test]
    fn uniform_degenerate_range_is_constant() {
        let model = UniformTravel { low: 3.0, high: 3.0, base_distance: 60.0 };
        let mut rng = TrainRng::new(0, TrainId(0));
        assert_eq!(model.travel_time(&spec(0, 30.0, Route::line(1)), BlockId(0), &mut rng), 6.0);
    }

    #[test]
    fn fixed_ignores_speed() {
        let mut rng = TrainRng::new(0, TrainId(0));
        assert_eq!(FixedTravel(2.5).travel_time(&spec(0, 1.0, Route::line(1)), BlockId(0), &mut rng), 2.5);
    }
}

// ── Spec ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod train_spec {
    use super::*;

    #[test]
    fn rejects_bad_speed() {
        for speed in [0.0, -10.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                spec(1, speed, Route::line(1)).validate(),
                Err(TrainError::InvalidSpeed { .. })
            ));
        }
        assert!(spec(1, 50.0, Route::line(1)).validate().is_ok());
    }
}

// ── Records ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod records {
    use super::*;

    #[test]
    fn duration() {
        assert_eq!(record(1, 0, 2.0, 5.5).duration(), 3.5);
    }

    #[test]
    fn rounded_keeps_identity_and_trims_times() {
        let r = record(3, 1, 4.126, 7.0049).rounded();
        assert_eq!(r.start, SimTime(4.13));
        assert_eq!(r.end, SimTime(7.0));
        assert_eq!((r.train, r.block_index, r.block), (TrainId(3), 2, BlockId(1)));
    }

    #[test]
    fn half_open_overlap() {
        let a = record(1, 0, 0.0, 3.0);
        assert!(!a.overlaps(&record(2, 0, 3.0, 6.0)), "touching intervals do not overlap");
        assert!(a.overlaps(&record(2, 0, 2.9, 6.0)));
        assert!(record(2, 0, 1.0, 2.0).overlaps(&a));
    }
}

// ── State machine ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod process {
    use super::*;

    #[test]
    fn full_route_walkthrough() {
        let mut p = TrainProcess::new(spec(1, 60.0, Route::line(2)), 42);
        assert_eq!(p.state(), TrainState::Pending);

        assert_eq!(p.start(2), Ok(BlockId(0)));
        assert_eq!(p.state(), TrainState::WaitingForBlock(0));

        assert_eq!(p.granted(BlockId(0), SimTime(0.0), &FixedTravel(3.0)), Ok(3.0));
        assert_eq!(p.state(), TrainState::Occupying { position: 0, since: SimTime(0.0) });

        let a = p.arrive(SimTime(3.0)).unwrap();
        assert_eq!(a.released, BlockId(0));
        assert_eq!(a.next, Some(BlockId(1)));
        assert_eq!(a.record, record(1, 0, 0.0, 3.0));
        assert_eq!(p.state(), TrainState::WaitingForBlock(1));

        // Waited 1.5 minutes for block 2.
        p.granted(BlockId(1), SimTime(4.5), &FixedTravel(3.0)).unwrap();
        let a = p.arrive(SimTime(7.5)).unwrap();
        assert_eq!(a.next, None);
        assert_eq!(a.record.block_index, 2);
        assert_eq!(a.record.start, SimTime(4.5));
        assert_eq!(p.state(), TrainState::Completed);
        assert!(p.state().is_terminal());
    }

    #[test]
    fn malformed_route_aborts_before_waiting() {
        let mut p = TrainProcess::new(spec(5, 60.0, Route::default()), 0);
        assert_eq!(
            p.start(3),
            Err(TrainError::MalformedRoute { train: TrainId(5), defect: RouteDefect::Empty })
        );
        assert_eq!(p.state(), TrainState::Aborted);
        assert!(matches!(p.start(3), Err(TrainError::NotPending { .. })));
    }

    #[test]
    fn route_outside_topology_aborts() {
        let mut p = TrainProcess::new(spec(5, 60.0, Route::line(4)), 0);
        assert!(matches!(p.start(3), Err(TrainError::MalformedRoute { .. })));
    }

    #[test]
    fn grant_for_wrong_block_is_rejected() {
        let mut p = TrainProcess::new(spec(1, 60.0, Route::line(2)), 0);
        p.start(2).unwrap();
        assert!(matches!(
            p.granted(BlockId(1), SimTime::ZERO, &FixedTravel(1.0)),
            Err(TrainError::UnexpectedGrant { .. })
        ));
        assert_eq!(p.state(), TrainState::WaitingForBlock(0));
    }

    #[test]
    fn grant_before_start_is_rejected() {
        let mut p = TrainProcess::new(spec(1, 60.0, Route::line(1)), 0);
        assert!(p.granted(BlockId(0), SimTime::ZERO, &FixedTravel(1.0)).is_err());
    }

    #[test]
    fn arrival_without_occupancy_is_rejected() {
        let mut p = TrainProcess::new(spec(1, 60.0, Route::line(1)), 0);
        p.start(1).unwrap();
        assert!(matches!(p.arrive(SimTime(1.0)), Err(TrainError::UnexpectedArrival { .. })));
    }

    #[test]
    fn same_seed_same_draws() {
        let model = UniformTravel::default();
        let draw = |seed| {
            let mut p = TrainProcess::new(spec(2, 40.0, Route::line(1)), seed);
            p.start(1).unwrap();
            p.granted(BlockId(0), SimTime::ZERO, &model).unwrap()
        };
        assert_eq!(draw(11), draw(11));
        assert_ne!(draw(11), draw(12));
    }
}
