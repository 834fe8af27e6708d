//! Unit tests for lift-core primitives.

#[cfg(test)]
mod ids {
    use crate::{CarId, FloorId};

    #[test]
    fn index_roundtrip() {
        let id = FloorId(4);
        assert_eq!(id.index(), 4);
        assert_eq!(FloorId::try_from(4usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(FloorId(0) < FloorId(1));
        assert!(CarId(9) > CarId(2));
    }

    #[test]
    fn distance_and_delta() {
        assert_eq!(FloorId(5).delta_from(FloorId(2)), 3);
        assert_eq!(FloorId(2).delta_from(FloorId(5)), -3);
        assert_eq!(FloorId(2).distance(FloorId(5)), 3);
        assert_eq!(FloorId(5).distance(FloorId(2)), 3);
    }

    #[test]
    fn display() {
        assert_eq!(CarId(3).to_string(), "CarId(3)");
    }
}

#[cfg(test)]
mod time {
    use crate::{FloorId, FloorIndexing, SimConfig, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.next(), Tick(11));
        assert_eq!(Tick(15).since(Tick(10)), 5);
        assert_eq!(Tick(3).to_string(), "T3");
    }

    #[test]
    fn floor_indexing_is_fixed_offset() {
        assert_eq!(FloorIndexing::ZeroBased.encode(FloorId(0)), 0);
        assert_eq!(FloorIndexing::OneBased.encode(FloorId(0)), 1);
        assert_eq!(FloorIndexing::OneBased.encode(FloorId(5)), 6);
    }

    #[test]
    fn default_config_is_valid() {
        let config = SimConfig::default();
        config.validate().unwrap();
        assert_eq!(config.floors, 6);
        assert_eq!(config.carriages, 5);
        assert_eq!(config.capacity, 20);
        assert_eq!(config.end_tick(), Tick(600));
    }

    #[test]
    fn popularity_override_and_fallback() {
        let config = SimConfig {
            floors:     3,
            popularity: vec![5.0, 0.0, 2.5],
            ..SimConfig::default()
        };
        assert_eq!(config.popularity_of(FloorId(0)), 5.0);
        assert_eq!(config.popularity_of(FloorId(2)), 2.5);

        let fallback = SimConfig { default_popularity: 3.0, ..SimConfig::default() };
        assert_eq!(fallback.popularity_of(FloorId(4)), 3.0);
    }

    #[test]
    fn rejects_single_floor() {
        let config = SimConfig { floors: 1, ..SimConfig::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_zero_capacity_and_zero_cars() {
        assert!(SimConfig { capacity: 0, ..SimConfig::default() }.validate().is_err());
        assert!(SimConfig { carriages: 0, ..SimConfig::default() }.validate().is_err());
    }

    #[test]
    fn rejects_zero_response_timeout() {
        let config = SimConfig { response_timeout_ms: 0, ..SimConfig::default() };
        assert!(config.validate().is_err());
        let config = SimConfig { response_timeout_ms: 1, ..SimConfig::default() };
        config.validate().unwrap();
    }

    #[test]
    fn rejects_bad_popularity() {
        let short = SimConfig { popularity: vec![1.0; 2], ..SimConfig::default() };
        assert!(short.validate().is_err());

        let negative = SimConfig { default_popularity: -1.0, ..SimConfig::default() };
        assert!(negative.validate().is_err());

        let nan = SimConfig { popularity: vec![f64::NAN; 6], ..SimConfig::default() };
        assert!(nan.validate().is_err());
    }
}

#[cfg(test)]
mod rng {
    use crate::{FloorId, FloorRng};

    #[test]
    fn same_seed_same_floor_is_deterministic() {
        let mut a = FloorRng::new(42, FloorId(3));
        let mut b = FloorRng::new(42, FloorId(3));
        for _ in 0..16 {
            assert_eq!(a.unit().to_bits(), b.unit().to_bits());
        }
    }

    #[test]
    fn floors_get_independent_streams() {
        let mut a = FloorRng::new(42, FloorId(0));
        let mut b = FloorRng::new(42, FloorId(1));
        let xs: Vec<u64> = (0..8).map(|_| a.unit().to_bits()).collect();
        let ys: Vec<u64> = (0..8).map(|_| b.unit().to_bits()).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn unit_is_in_half_open_interval() {
        let mut rng = FloorRng::new(7, FloorId(2));
        for _ in 0..1_000 {
            let x = rng.unit();
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn gen_range_respects_bounds() {
        let mut rng = FloorRng::new(7, FloorId(2));
        for _ in 0..1_000 {
            let x: u32 = rng.gen_range(0..6);
            assert!(x < 6);
        }
    }
}
