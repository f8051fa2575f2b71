mod trip_api;

use mongodb::{Collection, Database};

use crate::api::API;
use crate::db::{SeedStore, TRIPS_COLLECTION};
use crate::entities::Trip;
use crate::error::Error;

// lookup fields the trip endpoints filter and sort on
const BOOT_INDEX_FIELDS: [&str; 4] = [
    "driver_id",
    "start_location",
    "end_location",
    "departure_time",
];

pub struct Engine {
    db: Database,
}

impl Engine {
    #[tracing::instrument(name = "Engine::new", skip_all)]
    pub async fn new(db: Database) -> Result<Self, Error> {
        // index creation is idempotent at the store level, safe on every boot
        for field in BOOT_INDEX_FIELDS {
            db.create_trip_index(field).await?;
        }

        Ok(Self { db })
    }

    fn trips(&self) -> Collection<Trip> {
        self.db.collection(TRIPS_COLLECTION)
    }
}

impl API for Engine {}
