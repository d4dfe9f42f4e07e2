//! Main web app module containing the web routings in front of the calculator.

use actix_web::{http::StatusCode, post, web, HttpResponse, ResponseError};
use tracing::info;
use trip_budget_shared::messages::{ErrorMessage, TripEstimate, TripQuery};

use crate::calculator::{self, CalcError};

impl ResponseError for CalcError {
    fn status_code(&self) -> StatusCode {
        // Both variants are caller mistakes, terminal for the request
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorMessage {
            error: self.to_string(),
        })
    }
}

/// Endpoint for running the budget estimate. A missing `city` or `budget`
/// field rejects the request before the calculator runs; a non-numeric budget
/// is already rejected by the JSON extractor.
#[post("/api/calculate")]
pub async fn calculate_trip(json: web::Json<TripQuery>) -> Result<web::Json<TripEstimate>, CalcError> {
    let TripQuery { city, budget } = json.into_inner();

    let (city, budget) = match (city, budget) {
        (Some(city), Some(budget)) => (city, budget),
        _ => return Err(CalcError::MissingField),
    };

    let estimate = calculator::calculate(&city, budget)?;
    info!(
        city = %estimate.city,
        budget,
        suggested_days = estimate.suggested_days,
        "computed trip estimate"
    );

    Ok(web::Json(estimate))
}
