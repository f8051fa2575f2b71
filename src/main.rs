use sputnik::db::MongoStore;
use sputnik::engine::Engine;
use sputnik::server::serve;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let uri = std::env::var("MONGODB_URI")
        .unwrap_or_else(|_| "mongodb://localhost:27017".into());

    let store = MongoStore::connect(&uri).await.unwrap();
    let engine = Engine::new(store.database()).await.unwrap();

    serve(engine).await;
}
