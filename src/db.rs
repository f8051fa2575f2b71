use async_trait::async_trait;
use bson::{doc, Document};
use mongodb::{Client, Database, IndexModel};

use crate::entities::Trip;
use crate::error::Error;

pub const DATABASE_NAME: &str = "trip_service";
pub const TRIPS_COLLECTION: &str = "trips";

pub struct MongoStore {
    client: Client,
}

impl MongoStore {
    pub async fn connect(uri: &str) -> Result<Self, Error> {
        let client = Client::with_uri_str(uri).await?;

        client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await?;

        tracing::info!("connected to document store");

        Ok(Self { client })
    }

    pub fn database(&self) -> Database {
        self.client.database(DATABASE_NAME)
    }
}

#[async_trait]
pub trait SeedStore {
    async fn count_trips(&self) -> Result<u64, Error>;
    async fn insert_trips(&self, trips: Vec<Trip>) -> Result<(), Error>;
    async fn create_trip_index(&self, field: &str) -> Result<(), Error>;
}

#[async_trait]
impl SeedStore for Database {
    async fn count_trips(&self) -> Result<u64, Error> {
        let count = self
            .collection::<Trip>(TRIPS_COLLECTION)
            .count_documents(doc! {}, None)
            .await?;

        Ok(count)
    }

    async fn insert_trips(&self, trips: Vec<Trip>) -> Result<(), Error> {
        self.collection::<Trip>(TRIPS_COLLECTION)
            .insert_many(trips, None)
            .await?;

        Ok(())
    }

    async fn create_trip_index(&self, field: &str) -> Result<(), Error> {
        let mut keys = Document::new();
        keys.insert(field, 1);

        let index = IndexModel::builder().keys(keys).build();

        self.collection::<Trip>(TRIPS_COLLECTION)
            .create_index(index, None)
            .await?;

        Ok(())
    }
}
