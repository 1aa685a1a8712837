// Progress reporting for solvers

use crate::models::{Kilometers, Location, Minutes, OptimizationReport};

/// One step of a weighted centroid computation
#[derive(Debug, Clone, PartialEq)]
pub enum ProgressEvent<'a> {
    /// Step 1: unweighted geographic centroid
    InitialCenter(Location),
    /// Step 2: travel time of one member to the initial centroid
    InitialTime { name: &'a str, minutes: Minutes },
    AverageInitialTime(Minutes),
    /// Step 3: weight given to one member
    Weight {
        name: &'a str,
        weight: f64,
        minutes: Minutes,
    },
    /// Step 4: weighted centroid and how far it moved
    WeightedCenter {
        center: Location,
        displacement_km: Kilometers,
    },
    /// Step 5: travel time of one member to the weighted centroid
    FinalTime {
        name: &'a str,
        minutes: Minutes,
        initial_minutes: Minutes,
    },
    Finished(&'a OptimizationReport),
}

/// Receives progress events; cannot influence the computation
pub trait ProgressReporter {
    fn report(&self, event: ProgressEvent<'_>);
}

impl<F> ProgressReporter for F
where
    F: Fn(ProgressEvent<'_>),
{
    fn report(&self, event: ProgressEvent<'_>) {
        self(event)
    }
}

/// Discards every event
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {
    fn report(&self, _event: ProgressEvent<'_>) {}
}

/// Forwards events to the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl ProgressReporter for LogReporter {
    fn report(&self, event: ProgressEvent<'_>) {
        match event {
            ProgressEvent::InitialCenter(center) => log::info!(
                "Initial geographic centroid: {:.6}, {:.6}",
                center.latitude,
                center.longitude
            ),
            ProgressEvent::InitialTime { name, minutes } => {
                log::debug!("{name}: {minutes:.0} min to the initial centroid")
            }
            ProgressEvent::AverageInitialTime(avg) => {
                log::info!("Average initial travel time: {avg:.0} min")
            }
            ProgressEvent::Weight {
                name,
                weight,
                minutes,
            } => log::debug!("{name}: weight {weight:.4} (time {minutes:.0} min)"),
            ProgressEvent::WeightedCenter {
                center,
                displacement_km,
            } => log::info!(
                "Weighted centroid: {:.6}, {:.6} (moved {:.3} km)",
                center.latitude,
                center.longitude,
                displacement_km
            ),
            ProgressEvent::FinalTime {
                name,
                minutes,
                initial_minutes,
            } => log::debug!(
                "{name}: {minutes:.0} min ({:+.0} min vs initial)",
                minutes - initial_minutes
            ),
            ProgressEvent::Finished(report) => log::info!(
                "Average final travel time: {:.0} min, improvement {:+.1} min",
                report.avg_final_time,
                report.time_improvement
            ),
        }
    }
}
