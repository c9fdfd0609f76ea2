//! Helpers for integration tests.

use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

use ristoai::db::{DbPool, establish_connection_pool};
use ristoai::domain::restaurant::{NewRestaurant, Restaurant};
use ristoai::domain::user::{UpsertUser, User};
use ristoai::repository::{DieselRepository, RestaurantWriter, UserWriter};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!(); // assumes migrations/ exists

/// Temporary database used in integration tests.
pub struct TestDb {
    filename: String,
    pool: DbPool,
}

impl TestDb {
    pub fn new(filename: &str) -> Self {
        std::fs::remove_file(filename).ok(); // Clean up old DB

        let pool =
            establish_connection_pool(filename).expect("Failed to establish SQLite connection.");
        let mut conn = pool
            .get()
            .expect("Failed to get SQLite connection from pool.");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Migrations failed");
        TestDb {
            filename: filename.to_string(),
            pool,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}

impl Drop for TestDb {
    fn drop(&mut self) {
        std::fs::remove_file(&self.filename).ok();
        std::fs::remove_file(format!("{}-shm", &self.filename)).ok();
        std::fs::remove_file(format!("{}-wal", &self.filename)).ok();
    }
}

/// Insert a user plus their restaurant and return both.
#[allow(dead_code)]
pub fn seed_owner(repo: &DieselRepository, open_id: &str, restaurant_name: &str) -> (User, Restaurant) {
    let user = repo
        .upsert_user(&UpsertUser::new(open_id).with_name("Owner"))
        .expect("seed user");
    let restaurant = repo
        .create_restaurant(&NewRestaurant::new(user.id, restaurant_name))
        .expect("seed restaurant");
    (user, restaurant)
}
