//! Unit tests for rb-core primitives.

#[cfg(test)]
mod ids {
    use crate::{BlockId, Priority, TrainId};

    #[test]
    fn index_roundtrip() {
        let id = TrainId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(TrainId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn display() {
        assert_eq!(TrainId(7).to_string(), "T7");
        assert_eq!(BlockId(0).to_string(), "block 1");
        assert_eq!(Priority(2).to_string(), "p2");
    }

    #[test]
    fn block_numbering_is_one_based() {
        assert_eq!(BlockId::from_number(1), Some(BlockId(0)));
        assert_eq!(BlockId::from_number(0), None);
        assert_eq!(BlockId(2).number(), 3);
    }

    #[test]
    fn priority_orders_numerically() {
        assert!(Priority(1) < Priority(3));
        assert!(Priority(-1) < Priority(0));
    }
}

#[cfg(test)]
mod time {
    use crate::{CoreError, SimConfig, SimTime};

    #[test]
    fn rejects_negative_and_nan() {
        assert_eq!(SimTime::new(-0.5), Err(CoreError::InvalidTime(-0.5)));
        assert!(SimTime::new(f64::NAN).is_err());
        assert!(SimTime::new(f64::INFINITY).is_err());
        assert_eq!(SimTime::new(0.0).unwrap(), SimTime::ZERO);
    }

    #[test]
    fn arithmetic() {
        let t = SimTime(10.0);
        assert_eq!(t.after(2.5), SimTime(12.5));
        assert_eq!(SimTime(12.5).since(t), 2.5);
    }

    #[test]
    fn total_order() {
        let mut times = vec![SimTime(3.0), SimTime(0.0), SimTime(1.5)];
        times.sort();
        assert_eq!(times, vec![SimTime(0.0), SimTime(1.5), SimTime(3.0)]);
    }

    #[test]
    fn rounding_and_display() {
        assert_eq!(SimTime(3.14159).rounded(), 3.14);
        assert_eq!(SimTime(2.0).to_string(), "t=2.00");
    }

    #[test]
    fn config_end_time() {
        let cfg = SimConfig::new(SimTime(50.0), 7);
        assert_eq!(cfg.end_time(), SimTime(50.0));
    }
}

#[cfg(test)]
mod rng {
    use crate::{SimRng, TrainId, TrainRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = TrainRng::new(12345, TrainId(1));
        let mut r2 = TrainRng::new(12345, TrainId(1));
        for _ in 0..100 {
            let a: f64 = r1.gen_range(2.0..4.0);
            let b: f64 = r2.gen_range(2.0..4.0);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_trains_differ() {
        let mut r1 = TrainRng::new(1, TrainId(1));
        let mut r2 = TrainRng::new(1, TrainId(2));
        let a: f64 = r1.gen_range(0.0..1.0);
        let b: f64 = r2.gen_range(0.0..1.0);
        assert_ne!(a, b, "seeds for adjacent trains should diverge");
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = TrainRng::new(0, TrainId(0));
        for _ in 0..1000 {
            let v = rng.gen_range(2.0f64..4.0);
            assert!((2.0..4.0).contains(&v));
        }
    }

    #[test]
    fn child_streams_are_reproducible() {
        let mut a = SimRng::new(9);
        let mut b = SimRng::new(9);
        let x: u64 = a.child(3).random();
        let y: u64 = b.child(3).random();
        assert_eq!(x, y);
    }
}

#[cfg(test)]
mod category {
    use crate::TrainCategory;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("express".parse::<TrainCategory>().unwrap(), TrainCategory::Express);
        assert_eq!("FREIGHT".parse::<TrainCategory>().unwrap(), TrainCategory::Freight);
        assert!("tram".parse::<TrainCategory>().is_err());
    }

    #[test]
    fn display() {
        assert_eq!(TrainCategory::Passenger.to_string(), "Passenger");
    }
}
