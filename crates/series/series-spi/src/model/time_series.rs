//! Ordered, evenly spaced series of observations.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SeriesError};
use crate::model::Observation;

/// Time series with strictly increasing, evenly spaced timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    observations: Vec<Observation>,
}

impl TimeSeries {
    /// Build a series from observations.
    ///
    /// Rejects non-increasing timestamps and any gap that differs from the
    /// spacing of the first two observations.
    pub fn new(observations: Vec<Observation>) -> Result<Self> {
        if let Some(pos) = observations
            .windows(2)
            .position(|pair| pair[1].timestamp <= pair[0].timestamp)
        {
            return Err(SeriesError::InvalidData(format!(
                "timestamps must be strictly increasing (row {} is {}, row {} is {})",
                pos,
                observations[pos].timestamp_string(),
                pos + 1,
                observations[pos + 1].timestamp_string()
            )));
        }
        if let [first, second, ..] = observations.as_slice() {
            let step = second.timestamp - first.timestamp;
            if let Some(pos) = observations
                .windows(2)
                .position(|pair| pair[1].timestamp - pair[0].timestamp != step)
            {
                return Err(SeriesError::InvalidData(format!(
                    "sampling interval must be fixed at {}s (rows {} and {} are {}s apart)",
                    step.num_seconds(),
                    pos,
                    pos + 1,
                    (observations[pos + 1].timestamp - observations[pos].timestamp).num_seconds()
                )));
            }
        }
        Ok(Self { observations })
    }

    /// Spacing between consecutive observations, if there are at least two.
    pub fn step(&self) -> Option<Duration> {
        match self.observations.as_slice() {
            [first, second, ..] => Some(second.timestamp - first.timestamp),
            _ => None,
        }
    }

    /// Stamp `values` starting at `start`, one `step` apart.
    pub fn from_values(start: NaiveDateTime, step: Duration, values: &[f64]) -> Self {
        let observations = values
            .iter()
            .enumerate()
            .map(|(i, &value)| Observation::new(start + step * i as i32, value))
            .collect();
        Self { observations }
    }

    /// Stamp `values` hourly starting at `start`.
    pub fn hourly(start: NaiveDateTime, values: &[f64]) -> Self {
        Self::from_values(start, Duration::hours(1), values)
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// The value column.
    pub fn values(&self) -> Vec<f64> {
        self.observations.iter().map(|o| o.value).collect()
    }

    /// The timestamp column.
    pub fn timestamps(&self) -> Vec<NaiveDateTime> {
        self.observations.iter().map(|o| o.timestamp).collect()
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Observation> {
        self.observations.iter()
    }
}

impl<'a> IntoIterator for &'a TimeSeries {
    type Item = &'a Observation;
    type IntoIter = std::slice::Iter<'a, Observation>;

    fn into_iter(self) -> Self::IntoIter {
        self.observations.iter()
    }
}
