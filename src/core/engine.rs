use crate::adapters::CalendarProviders;
use crate::core::calendar::CountryCalendar;
use crate::countries::CountryRegistry;
use crate::domain::model::{HolidayRow, UnsupportedYear};
use crate::utils::error::{HolidayError, Result};
use std::sync::Arc;
use tokio::task::JoinSet;

#[derive(Debug, Default)]
pub struct EngineOutput {
    pub rows: Vec<HolidayRow>,
    pub unsupported: Vec<UnsupportedYear>,
}

/// Builds holiday rows for several countries at once, one blocking task per
/// country. Each task owns its own [`CountryCalendar`].
pub struct HolidayEngine {
    registry: Arc<CountryRegistry>,
    providers: Arc<CalendarProviders>,
    observed: bool,
}

impl HolidayEngine {
    pub fn new(registry: CountryRegistry, providers: CalendarProviders) -> Self {
        Self {
            registry: Arc::new(registry),
            providers: Arc::new(providers),
            observed: true,
        }
    }

    pub fn observed(mut self, observed: bool) -> Self {
        self.observed = observed;
        self
    }

    /// Rows come back grouped by country in request order, then by date.
    pub async fn run(&self, countries: &[String], first: i32, last: i32) -> Result<EngineOutput> {
        // Fail on unknown names before any work starts.
        let resolved = countries
            .iter()
            .map(|name| self.registry.resolve(name))
            .collect::<Result<Vec<_>>>()?;

        let mut join_set = JoinSet::new();
        for (index, country) in resolved.into_iter().enumerate() {
            let providers = Arc::clone(&self.providers);
            let observed = self.observed;
            join_set.spawn_blocking(move || {
                tracing::debug!("Building {} for {}..={}", country.code, first, last);
                let mut calendar = CountryCalendar::new(country, providers).with_observed(observed);
                let rows = calendar.rows(first, last)?;
                Ok::<_, HolidayError>((index, rows, calendar.diagnostics().to_vec()))
            });
        }

        let mut parts = Vec::with_capacity(countries.len());
        while let Some(task_result) = join_set.join_next().await {
            let part = task_result.map_err(|e| HolidayError::TaskError {
                message: e.to_string(),
            })??;
            parts.push(part);
        }
        parts.sort_by_key(|(index, _, _)| *index);

        let mut output = EngineOutput::default();
        for (index, rows, unsupported) in parts {
            tracing::info!("Generated {} holiday rows for {}", rows.len(), countries[index]);
            output.rows.extend(rows);
            output.unsupported.extend(unsupported);
        }
        Ok(output)
    }
}
