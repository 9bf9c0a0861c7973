//! The operations the outer service calls: one fresh run per call.
//!
//! `timeline()` and `metrics()` seed from OS entropy, so two calls describe
//! two different days on the same line.  Their `*_seeded` variants are the
//! reproducible forms used by tests and replays.  Metrics are computed from
//! exact times; only the published timeline is rounded.

use rb_core::SimRng;
use rb_metrics::{Metrics, MetricsReport, Presentation, summarize};
use rb_train::{SegmentRecord, TravelModel, UniformTravel};

use crate::{NoopObserver, Scenario, SimObserver, SimResult};

/// Build and run `scenario` once with the default travel model.
pub fn run_once(scenario: &Scenario) -> SimResult<Vec<SegmentRecord>> {
    run_once_with(scenario, UniformTravel::default(), &mut NoopObserver)
}

/// Build and run `scenario` once with an explicit travel model and observer.
pub fn run_once_with<T: TravelModel, O: SimObserver>(
    scenario: &Scenario,
    travel:   T,
    observer: &mut O,
) -> SimResult<Vec<SegmentRecord>> {
    let mut sim = scenario.build(travel)?;
    sim.run(observer)?;
    Ok(sim.into_log())
}

/// A seed drawn from OS entropy.
pub fn fresh_seed() -> u64 {
    SimRng::from_entropy().random()
}

/// Segment log of one fresh run of the fixed three-train line, with times
/// rounded to two decimals.
pub fn timeline() -> SimResult<Vec<SegmentRecord>> {
    timeline_seeded(fresh_seed())
}

pub fn timeline_seeded(seed: u64) -> SimResult<Vec<SegmentRecord>> {
    let log = run_once(&Scenario::three_train(seed))?;
    Ok(log.iter().map(SegmentRecord::rounded).collect())
}

/// Metrics of one fresh run of the fixed three-train line.
pub fn metrics() -> SimResult<MetricsReport> {
    metrics_seeded(fresh_seed())
}

pub fn metrics_seeded(seed: u64) -> SimResult<MetricsReport> {
    let log = run_once(&Scenario::three_train(seed))?;
    let mut rng = SimRng::new(seed).child(1);
    Ok(MetricsReport {
        metrics:      summarize(&log),
        presentation: Presentation::draw(&log, &mut rng),
    })
}

/// Run independent replications of `scenario`, one per seed, and summarize
/// each.  Results are in `seeds` order.
///
/// With the `parallel` feature the replications run on Rayon's thread pool;
/// each owns its own `Sim`, so results are identical either way.
pub fn run_batch<T>(scenario: &Scenario, travel: &T, seeds: &[u64]) -> SimResult<Vec<Metrics>>
where
    T: TravelModel + Clone,
{
    let replicate = |&seed: &u64| -> SimResult<Metrics> {
        let log = run_once_with(&scenario.with_seed(seed), travel.clone(), &mut NoopObserver)?;
        Ok(summarize(&log))
    };

    #[cfg(not(feature = "parallel"))]
    {
        seeds.iter().map(replicate).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        seeds.par_iter().map(replicate).collect()
    }
}
