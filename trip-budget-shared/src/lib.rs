pub mod messages {
    use serde::{Deserialize, Serialize};

    /// Body of a `POST /api/calculate` request.
    ///
    /// Both fields deserialize as optional so the handler can detect a missing
    /// field itself and answer with the expected error text, rather than
    /// surfacing a serde message.
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct TripQuery {
        pub city: Option<String>,
        pub budget: Option<f64>,
    }

    /// Budget estimate returned to the front end. Field names are camelCase on
    /// the wire to match what the page expects.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct TripEstimate {
        pub city: String,
        pub flight_cost: f64,
        pub daily_lodging_cost: f64,
        pub suggested_days: i64,
        pub min_budget_required: f64,
    }

    /// Error payload for rejected requests.
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct ErrorMessage {
        pub error: String,
    }
}

#[cfg(test)]
mod messages_tests {
    use super::messages::*;

    #[test]
    fn test_estimate_serializes_camel_case() {
        let estimate = TripEstimate {
            city: "Paris".to_string(),
            flight_cost: 600.0,
            daily_lodging_cost: 150.0,
            suggested_days: 7,
            min_budget_required: 750.0,
        };

        let val = serde_json::to_value(&estimate).unwrap();
        assert_eq!(val["city"], "Paris");
        assert_eq!(val["flightCost"], 600.0);
        assert_eq!(val["dailyLodgingCost"], 150.0);
        assert_eq!(val["suggestedDays"], 7);
        assert_eq!(val["minBudgetRequired"], 750.0);
    }

    #[test]
    fn test_query_fields_are_optional() {
        let q: TripQuery = serde_json::from_str(r#"{ "city": "Tokyo" }"#).unwrap();
        assert_eq!(q.city.as_deref(), Some("Tokyo"));
        assert!(q.budget.is_none());

        let q: TripQuery = serde_json::from_str("{}").unwrap();
        assert!(q.city.is_none());
        assert!(q.budget.is_none());
    }
}
