use axum::extract::{Extension, Json, Path};
use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::User;
use crate::entities::Trip;
use crate::error::Error;
use crate::server::DynAPI;

#[derive(Serialize, Deserialize)]
pub struct CreateParams {
    route_id: i32,
    driver_id: i32,
    #[serde(default)]
    user_ids: Vec<i32>,
    start_location: String,
    end_location: String,
    departure_time: DateTime<Utc>,
    available_seats: i32,
    price: f64,
    description: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct JoinParams {
    user_id: i32,
}

#[derive(Serialize, Deserialize)]
pub struct TripResponse {
    id: String,
    route_id: i32,
    driver_id: i32,
    user_ids: Vec<i32>,
    start_location: String,
    end_location: String,
    departure_time: DateTime<Utc>,
    available_seats: i32,
    price: f64,
    description: Option<String>,
}

impl From<Trip> for TripResponse {
    fn from(trip: Trip) -> Self {
        Self {
            id: trip.id.map(|id| id.to_hex()).unwrap_or_default(),
            route_id: trip.route_id,
            driver_id: trip.driver_id,
            user_ids: trip.user_ids,
            start_location: trip.start_location,
            end_location: trip.end_location,
            departure_time: trip.departure_time,
            available_seats: trip.available_seats,
            price: trip.price,
            description: trip.description,
        }
    }
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    Extension(user): Extension<User>,
    Json(params): Json<CreateParams>,
) -> Result<(StatusCode, Json<TripResponse>), Error> {
    let trip = Trip::new(
        params.route_id,
        params.driver_id,
        params.user_ids,
        params.start_location,
        params.end_location,
        params.departure_time,
        params.available_seats,
        params.price,
        params.description,
    );

    let trip = api.create_trip(user, trip).await?;

    Ok((StatusCode::CREATED, Json(trip.into())))
}

pub async fn list(
    Extension(api): Extension<DynAPI>,
    Extension(user): Extension<User>,
) -> Result<Json<Vec<TripResponse>>, Error> {
    let trips = api.list_trips(user).await?;

    Ok(Json(trips.into_iter().map(TripResponse::from).collect()))
}

pub async fn find(
    Extension(api): Extension<DynAPI>,
    Extension(user): Extension<User>,
    Path(id): Path<String>,
) -> Result<Json<TripResponse>, Error> {
    let trip = api.find_trip(user, &id).await?;

    Ok(Json(trip.into()))
}

pub async fn join(
    Extension(api): Extension<DynAPI>,
    Extension(user): Extension<User>,
    Path(id): Path<String>,
    Json(params): Json<JoinParams>,
) -> Result<Json<TripResponse>, Error> {
    let trip = api.join_trip(user, &id, params.user_id).await?;

    Ok(Json(trip.into()))
}

pub async fn delete(
    Extension(api): Extension<DynAPI>,
    Extension(user): Extension<User>,
    Path(id): Path<String>,
) -> Result<StatusCode, Error> {
    api.delete_trip(user, &id).await?;

    Ok(StatusCode::NO_CONTENT)
}
