//! Explicit binding of page interactions to the code that answers them.

use crate::error::DashboardError;
use crate::forecast::table::ForecastTable;
use crate::view::projector::project;
use crate::view::ViewModel;
use chrono::NaiveDate;
use log::debug;
use std::collections::HashMap;

/// Fired whenever the date range picker changes either bound.
pub const DATE_RANGE_CHANGED: &str = "date-range-changed";

/// The two bounds of the date range picker. `None` means the bound is unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

type Handler = Box<dyn Fn(&ForecastTable, DateRange) -> ViewModel + Send + Sync>;

/// Maps event names to handlers.
///
/// Handlers only read the table they are given, so deliveries never influence each other.
#[derive(Default)]
pub struct EventRegistry {
    handlers: HashMap<&'static str, Handler>,
}

impl EventRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with the projector bound to [`DATE_RANGE_CHANGED`].
    pub fn with_projector() -> Self {
        let mut registry = Self::new();
        registry.register(DATE_RANGE_CHANGED, |table, range| {
            project(table, range.start_date, range.end_date)
        });
        registry
    }

    /// Binds `handler` to `event`, replacing any earlier binding.
    pub fn register<F>(&mut self, event: &'static str, handler: F)
    where
        F: Fn(&ForecastTable, DateRange) -> ViewModel + Send + Sync + 'static,
    {
        self.handlers.insert(event, Box::new(handler));
    }

    pub fn dispatch(
        &self,
        event: &str,
        table: &ForecastTable,
        range: DateRange,
    ) -> Result<ViewModel, DashboardError> {
        let handler = self
            .handlers
            .get(event)
            .ok_or_else(|| DashboardError::UnknownEvent(event.to_string()))?;
        debug!("Dispatching '{}' for {:?}", event, range);
        Ok(handler(table, range))
    }
}

impl std::fmt::Debug for EventRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventRegistry")
            .field("events", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::ViewState;

    #[test]
    fn test_projector_is_bound_to_date_range_changed() -> Result<(), DashboardError> {
        let registry = EventRegistry::with_projector();
        let range = DateRange {
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 2),
        };
        let view = registry.dispatch(DATE_RANGE_CHANGED, &ForecastTable::empty(), range)?;
        assert_eq!(view.state, ViewState::Unavailable);
        Ok(())
    }

    #[test]
    fn test_unknown_event_is_an_error() {
        let registry = EventRegistry::with_projector();
        let result = registry.dispatch("zoom-changed", &ForecastTable::empty(), DateRange::default());
        assert!(matches!(result, Err(DashboardError::UnknownEvent(name)) if name == "zoom-changed"));
    }

    #[test]
    fn test_register_replaces_binding() -> Result<(), DashboardError> {
        let mut registry = EventRegistry::with_projector();
        registry.register(DATE_RANGE_CHANGED, |_, _| ViewModel::no_data_in_range());
        let view = registry.dispatch(
            DATE_RANGE_CHANGED,
            &ForecastTable::empty(),
            DateRange::default(),
        )?;
        assert_eq!(view.state, ViewState::NoDataInRange);
        Ok(())
    }
}
