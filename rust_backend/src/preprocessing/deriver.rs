use serde::{Deserialize, Serialize};

use crate::config::DeriveSettings;
use crate::core::domain::{decade_of, CanonicalRecord, OrbitGroup, RawRecord};
use crate::time::{self, years_between, DateNormalizer, Timestamp};
use chrono::Datelike;

/// Why a raw row did not make it into the canonical dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DropReason {
    /// Debris, rocket bodies and anything else that is not a payload.
    NotPayload,
    /// Launch date absent or unreadable; lifespan is undefined.
    MissingLaunchDate,
    /// Lifespan outside `[0, max_lifespan_years]`.
    LifespanOutOfBounds(f64),
}

/// Counts collected while deriving a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeriveReport {
    pub rows_seen: usize,
    pub not_payload: usize,
    pub missing_launch_date: usize,
    pub lifespan_out_of_bounds: usize,
    pub retained: usize,
}

impl DeriveReport {
    fn record_drop(&mut self, reason: DropReason) {
        match reason {
            DropReason::NotPayload => self.not_payload += 1,
            DropReason::MissingLaunchDate => self.missing_launch_date += 1,
            DropReason::LifespanOutOfBounds(_) => self.lifespan_out_of_bounds += 1,
        }
    }

    pub fn dropped(&self) -> usize {
        self.not_payload + self.missing_launch_date + self.lifespan_out_of_bounds
    }
}

/// Records derived from a batch together with the drop statistics.
#[derive(Debug, Clone)]
pub struct DeriveOutput {
    pub records: Vec<CanonicalRecord>,
    pub report: DeriveReport,
}

/// Turns raw catalog rows into canonical payload records.
#[derive(Debug, Clone, Default)]
pub struct RecordDeriver {
    settings: DeriveSettings,
}

impl RecordDeriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: DeriveSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &DeriveSettings {
        &self.settings
    }

    /// Derive one record. `now` stands in for the decay date of objects still in orbit.
    pub fn derive_record(
        &self,
        raw: &RawRecord,
        now: Timestamp,
    ) -> Result<CanonicalRecord, DropReason> {
        if !raw.object_type.starts_with(self.settings.payload_prefix.as_str()) {
            return Err(DropReason::NotPayload);
        }

        let launch_date =
            DateNormalizer::parse(&raw.launch_date_text).ok_or(DropReason::MissingLaunchDate)?;
        let decay_date = DateNormalizer::parse(&raw.decay_date_text);

        let end = decay_date.unwrap_or(now);
        let lifespan_years = years_between(launch_date, end, self.settings.days_per_year);
        if !(0.0..=self.settings.max_lifespan_years).contains(&lifespan_years) {
            return Err(DropReason::LifespanOutOfBounds(lifespan_years));
        }

        let launch_year = launch_date.year();

        Ok(CanonicalRecord {
            object_type: raw.object_type.clone(),
            launch_date: Some(launch_date),
            decay_date,
            mass: parse_mass(&raw.mass),
            orbit_code: raw.operational_orbit_code.clone(),
            lifespan_years,
            launch_year: Some(launch_year),
            launch_decade: Some(decade_of(launch_year)),
            is_active: decay_date.is_none(),
            orbit_group: OrbitGroup::from_orbit_code(&raw.operational_orbit_code),
        })
    }

    /// Derive a whole batch against a fixed reference instant.
    ///
    /// Never fails: rows that violate the retention rules are counted and dropped.
    pub fn derive_batch(&self, raw: &[RawRecord], now: Timestamp) -> DeriveOutput {
        let mut report = DeriveReport {
            rows_seen: raw.len(),
            ..Default::default()
        };
        let mut records = Vec::with_capacity(raw.len());

        for row in raw {
            match self.derive_record(row, now) {
                Ok(record) => records.push(record),
                Err(reason) => report.record_drop(reason),
            }
        }

        report.retained = records.len();
        DeriveOutput { records, report }
    }
}

/// Parse a mass cell. Non-numeric or non-finite values are absent, never zero.
pub fn parse_mass(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|m| m.is_finite())
}

/// Derive canonical records using the current wall-clock time for active objects.
pub fn derive_all(raw: &[RawRecord]) -> Vec<CanonicalRecord> {
    derive_all_at(raw, time::now())
}

/// Derive canonical records against an explicit reference instant.
pub fn derive_all_at(raw: &[RawRecord], now: Timestamp) -> Vec<CanonicalRecord> {
    RecordDeriver::new().derive_batch(raw, now).records
}
