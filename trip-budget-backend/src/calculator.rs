//! Trip budget calculator module.
//!
//! Holds the static destination cost table and the single estimate calculation,
//! pure and side-effect free so the web layer can call it from any worker.

use std::{collections::HashMap, sync::OnceLock};
use thiserror::Error;
use trip_budget_shared::messages::TripEstimate;

/// Suggested trip length is capped here no matter how large the budget is.
pub const MAX_SUGGESTED_DAYS: i64 = 7;

/// Baseline costs for one supported city, matching the front end's
/// DESTINATION_AVERAGES table.
#[derive(Debug, Clone, Copy)]
pub struct Destination {
    pub flight_cost: f64,
    pub hotel_per_night: f64,
    /// Alternative lodging rate, not used by the estimate yet.
    pub airbnb_per_night: f64,
    pub min_days: u16,
    pub max_days: u16,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalcError {
    #[error("Missing city or budget")]
    MissingField,
    #[error("Invalid city")]
    UnknownDestination,
}

/// Fixed city table, built on first access and never mutated afterwards. City
/// names match case-sensitively; anything outside this set is invalid input,
/// not missing data.
fn destination_table() -> &'static HashMap<&'static str, Destination> {
    static TABLE: OnceLock<HashMap<&'static str, Destination>> = OnceLock::new();

    TABLE.get_or_init(|| {
        HashMap::from([
            (
                "Paris",
                Destination {
                    flight_cost: 600.0,
                    hotel_per_night: 150.0,
                    airbnb_per_night: 100.0,
                    min_days: 1,
                    max_days: 14,
                },
            ),
            (
                "Tokyo",
                Destination {
                    flight_cost: 900.0,
                    hotel_per_night: 120.0,
                    airbnb_per_night: 80.0,
                    min_days: 1,
                    max_days: 10,
                },
            ),
            (
                "New York",
                Destination {
                    flight_cost: 400.0,
                    hotel_per_night: 200.0,
                    airbnb_per_night: 120.0,
                    min_days: 1,
                    max_days: 10,
                },
            ),
        ])
    })
}

/// Estimate trip figures for `city` given a total `budget`.
///
/// The suggested number of days is how many nights of hotel lodging the budget
/// left over after the flight can cover, capped at [`MAX_SUGGESTED_DAYS`]. The
/// quotient truncates toward zero, so a budget slightly under the flight cost
/// still suggests 0 days rather than -1. A budget far under the flight cost
/// goes negative, which tells the caller by how many nights they are short.
pub fn calculate(city: &str, budget: f64) -> Result<TripEstimate, CalcError> {
    if city.is_empty() {
        return Err(CalcError::MissingField);
    }

    let dest = destination_table()
        .get(city)
        .ok_or(CalcError::UnknownDestination)?;

    let flight_cost = dest.flight_cost;
    // Hotel is the default lodging type, airbnb rate stays unused for now
    let daily_lodging_cost = dest.hotel_per_night;

    let raw_days = (budget - flight_cost) / daily_lodging_cost;
    let suggested_days = MAX_SUGGESTED_DAYS.min(raw_days as i64);

    Ok(TripEstimate {
        city: city.to_string(),
        flight_cost,
        daily_lodging_cost,
        suggested_days,
        min_budget_required: flight_cost + daily_lodging_cost,
    })
}
