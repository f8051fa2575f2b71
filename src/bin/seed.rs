//! One-shot deployment seeder for the trips collection.
//!
//! Run against the target deployment after the store is up:
//!
//! ```bash
//! MONGODB_URI=mongodb://localhost:27017 cargo run --bin seed
//! ```

use sputnik::db::MongoStore;
use sputnik::seed;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let uri = std::env::var("MONGODB_URI")
        .unwrap_or_else(|_| "mongodb://localhost:27017".into());

    let store = MongoStore::connect(&uri).await.unwrap();

    seed::run(&store.database()).await.unwrap();
}
