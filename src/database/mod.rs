// Copyright 2023 Remi Bernotavicius

use diesel::prelude::Connection as _;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use std::error::Error;
use std::path::Path;

pub mod models;
pub mod schema;

pub type Connection = diesel::sqlite::SqliteConnection;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Opens a writable handle to the database file, creating the file and
/// running any pending migrations (table creation and seed rows on first
/// open). The handle assumes single-writer, single-process usage; SQLite's
/// own file locking is the only concurrency control.
pub fn establish_connection(
    path: impl AsRef<Path>,
) -> Result<Connection, Box<dyn Error + Send + Sync + 'static>> {
    let path = path
        .as_ref()
        .to_str()
        .ok_or("database path is not valid UTF-8")?;
    let mut connection = Connection::establish(path)?;
    connection.run_pending_migrations(MIGRATIONS)?;
    Ok(connection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::QueryDsl as _;
    use diesel::RunQueryDsl as _;
    use diesel::SelectableHelper as _;
    use super::models::Recipe;

    #[test]
    fn migrations_apply_and_seed() {
        let mut conn = establish_connection(":memory:").unwrap();

        use super::schema::recipe::dsl::*;
        let seeded: Vec<Recipe> = recipe
            .select(Recipe::as_select())
            .load(&mut conn)
            .unwrap();
        let titles: Vec<_> = seeded.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Chocolate Cake", "Vanilla Cake", "Strawberry Cake"]
        );
    }

    #[test]
    fn migrations_redo() {
        let mut conn = establish_connection(":memory:").unwrap();
        conn.revert_all_migrations(MIGRATIONS).unwrap();
        conn.run_pending_migrations(MIGRATIONS).unwrap();
    }
}
