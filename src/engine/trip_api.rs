use async_trait::async_trait;
use bson::doc;
use bson::oid::ObjectId;
use futures::TryStreamExt;

use super::Engine;

use crate::api::TripAPI;
use crate::auth::User;
use crate::entities::Trip;
use crate::error::{invalid_input_error, not_found_error, Error};

fn parse_trip_id(id: &str) -> Result<ObjectId, Error> {
    ObjectId::parse_str(id).map_err(|_| invalid_input_error())
}

#[async_trait]
impl TripAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn create_trip(&self, user: User, mut trip: Trip) -> Result<Trip, Error> {
        let result = self.trips().insert_one(&trip, None).await?;
        trip.id = result.inserted_id.as_object_id();

        Ok(trip)
    }

    #[tracing::instrument(skip(self))]
    async fn find_trip(&self, user: User, id: &str) -> Result<Trip, Error> {
        let id = parse_trip_id(id)?;

        self.trips()
            .find_one(doc! { "_id": id }, None)
            .await?
            .ok_or_else(not_found_error)
    }

    #[tracing::instrument(skip(self))]
    async fn list_trips(&self, user: User) -> Result<Vec<Trip>, Error> {
        let cursor = self.trips().find(None, None).await?;
        let trips: Vec<Trip> = cursor.try_collect().await?;

        Ok(trips)
    }

    #[tracing::instrument(skip(self))]
    async fn join_trip(&self, user: User, id: &str, user_id: i32) -> Result<Trip, Error> {
        let id = parse_trip_id(id)?;
        let trips = self.trips();

        let mut trip = trips
            .find_one(doc! { "_id": id }, None)
            .await?
            .ok_or_else(not_found_error)?;

        trip.join(user_id)?;

        // the seat check above is not transactional with this write
        trips
            .update_one(
                doc! { "_id": id },
                doc! { "$push": { "user_ids": user_id } },
                None,
            )
            .await?;

        Ok(trip)
    }

    #[tracing::instrument(skip(self))]
    async fn delete_trip(&self, user: User, id: &str) -> Result<(), Error> {
        let id = parse_trip_id(id)?;

        let result = self.trips().delete_one(doc! { "_id": id }, None).await?;

        if result.deleted_count == 0 {
            return Err(not_found_error());
        }

        Ok(())
    }
}
