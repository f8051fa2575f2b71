use async_trait::async_trait;

use crate::auth::User;
use crate::entities::Trip;
use crate::error::Error;

#[async_trait]
pub trait TripAPI {
    async fn create_trip(&self, user: User, trip: Trip) -> Result<Trip, Error>;

    async fn find_trip(&self, user: User, id: &str) -> Result<Trip, Error>;

    async fn list_trips(&self, user: User) -> Result<Vec<Trip>, Error>;

    async fn join_trip(&self, user: User, id: &str, user_id: i32) -> Result<Trip, Error>;

    async fn delete_trip(&self, user: User, id: &str) -> Result<(), Error>;
}

pub trait API: TripAPI {}
