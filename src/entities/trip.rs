use bson::oid::ObjectId;
use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{invalid_input_error, invalid_state_error, Error};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Trip {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub route_id: i32,
    pub driver_id: i32,
    pub user_ids: Vec<i32>,
    pub start_location: String,
    pub end_location: String,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub departure_time: DateTime<Utc>,
    pub available_seats: i32,
    pub price: f64,
    pub description: Option<String>,
}

impl Trip {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        route_id: i32,
        driver_id: i32,
        user_ids: Vec<i32>,
        start_location: String,
        end_location: String,
        departure_time: DateTime<Utc>,
        available_seats: i32,
        price: f64,
        description: Option<String>,
    ) -> Self {
        Self {
            id: None,
            route_id,
            driver_id,
            user_ids,
            start_location,
            end_location,
            departure_time,
            available_seats,
            price,
            description,
        }
    }

    pub fn is_full(&self) -> bool {
        self.user_ids.len() as i32 >= self.available_seats
    }

    // available_seats is the trip capacity, not a remaining count
    pub fn join(&mut self, user_id: i32) -> Result<(), Error> {
        if self.user_ids.contains(&user_id) {
            return Err(invalid_input_error());
        }

        if self.is_full() {
            return Err(invalid_state_error());
        }

        self.user_ids.push(user_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn trip(user_ids: Vec<i32>, available_seats: i32) -> Trip {
        Trip::new(
            1,
            3,
            user_ids,
            "Тверь, вокзал".into(),
            "Торжок, центр".into(),
            Utc.with_ymd_and_hms(2024, 4, 1, 10, 0, 0).unwrap(),
            available_seats,
            500.00,
            None,
        )
    }

    #[test]
    fn join_appends_to_the_passenger_list() {
        let mut trip = trip(vec![1], 3);

        trip.join(2).unwrap();

        assert_eq!(trip.user_ids, vec![1, 2]);
    }

    #[test]
    fn join_rejects_a_repeat_passenger() {
        let mut trip = trip(vec![1, 2], 3);

        assert!(trip.join(2).is_err());
        assert_eq!(trip.user_ids, vec![1, 2]);
    }

    #[test]
    fn join_rejects_a_full_trip() {
        let mut trip = trip(vec![1, 2], 2);

        assert!(trip.join(3).is_err());
        assert_eq!(trip.user_ids, vec![1, 2]);
    }
}
