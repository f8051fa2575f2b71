use chrono::{TimeZone, Utc};

use crate::db::SeedStore;
use crate::entities::Trip;
use crate::error::Error;

/// Fields the deployment seed indexes, in creation order. `id` indexes a
/// field trip records don't carry (they use `route_id`); deliberate, do not
/// "fix" it.
pub const SEED_INDEX_FIELDS: [&str; 7] = [
    "driver_id",
    "start_location",
    "end_location",
    "departure_time",
    "id",
    "available_seats",
    "price",
];

pub fn seed_trips() -> Vec<Trip> {
    vec![
        Trip::new(
            1,
            3,
            vec![1],
            "Москва, Красная площадь".into(),
            "Санкт-Петербург, Невский проспект".into(),
            Utc.with_ymd_and_hms(2024, 3, 27, 8, 0, 0).unwrap(),
            3,
            1500.00,
            Some("Комфортабельный минивэн".into()),
        ),
        Trip::new(
            2,
            2,
            vec![2],
            "Санкт-Петербург, Московский вокзал".into(),
            "Великий Новгород, Кремль".into(),
            Utc.with_ymd_and_hms(2024, 3, 28, 9, 0, 0).unwrap(),
            4,
            800.00,
            Some("Эконом-класс".into()),
        ),
    ]
}

/// Seeds the trips collection with sample data and its secondary indexes.
///
/// Runs once per deployment under operator supervision. The count check makes
/// re-runs no-ops, but count-then-insert is not atomic: two seeders racing an
/// empty collection can both insert.
#[tracing::instrument(skip(store))]
pub async fn run<S: SeedStore>(store: &S) -> Result<(), Error> {
    if store.count_trips().await? > 0 {
        tracing::info!("Database already contains data, skipping ...");
        return Ok(());
    }

    store.insert_trips(seed_trips()).await?;

    tracing::info!("Created indexes...");

    for field in SEED_INDEX_FIELDS {
        store.create_trip_index(field).await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;

    #[derive(Default)]
    struct MemStore {
        trips: Mutex<Vec<Trip>>,
        indexes: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl SeedStore for MemStore {
        async fn count_trips(&self) -> Result<u64, Error> {
            Ok(self.trips.lock().unwrap().len() as u64)
        }

        async fn insert_trips(&self, trips: Vec<Trip>) -> Result<(), Error> {
            self.trips.lock().unwrap().extend(trips);
            Ok(())
        }

        async fn create_trip_index(&self, field: &str) -> Result<(), Error> {
            self.indexes.lock().unwrap().push(field.into());
            Ok(())
        }
    }

    fn arbitrary_trip() -> Trip {
        Trip::new(
            9,
            9,
            vec![],
            "Тверь, вокзал".into(),
            "Торжок, центр".into(),
            Utc.with_ymd_and_hms(2024, 4, 1, 10, 0, 0).unwrap(),
            2,
            500.00,
            None,
        )
    }

    #[tokio::test]
    async fn seeds_an_empty_collection_with_the_sample_trips() {
        let store = MemStore::default();

        run(&store).await.unwrap();

        let trips = store.trips.lock().unwrap();
        assert_eq!(trips.len(), 2);

        assert_eq!(trips[0].route_id, 1);
        assert_eq!(trips[0].driver_id, 3);
        assert_eq!(trips[0].user_ids, vec![1]);
        assert_eq!(trips[0].start_location, "Москва, Красная площадь");
        assert_eq!(trips[0].end_location, "Санкт-Петербург, Невский проспект");
        assert_eq!(trips[0].available_seats, 3);
        assert_eq!(trips[0].price, 1500.00);

        assert_eq!(trips[1].route_id, 2);
        assert_eq!(trips[1].driver_id, 2);
        assert_eq!(trips[1].user_ids, vec![2]);
        assert_eq!(trips[1].available_seats, 4);
        assert_eq!(trips[1].price, 800.00);
    }

    #[tokio::test]
    async fn creates_the_secondary_indexes_in_order() {
        let store = MemStore::default();

        run(&store).await.unwrap();

        let indexes = store.indexes.lock().unwrap();
        assert_eq!(*indexes, SEED_INDEX_FIELDS);
    }

    #[tokio::test]
    async fn a_second_run_is_a_noop() {
        let store = MemStore::default();

        run(&store).await.unwrap();
        run(&store).await.unwrap();

        assert_eq!(store.trips.lock().unwrap().len(), 2);
        assert_eq!(store.indexes.lock().unwrap().len(), 7);
    }

    #[tokio::test]
    async fn skips_a_collection_that_already_contains_data() {
        let store = MemStore::default();
        store.trips.lock().unwrap().push(arbitrary_trip());

        run(&store).await.unwrap();

        assert_eq!(store.trips.lock().unwrap().len(), 1);
        assert!(store.indexes.lock().unwrap().is_empty());
    }
}
