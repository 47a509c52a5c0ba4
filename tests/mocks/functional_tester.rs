use super::{enums::db_table::TablesEnum, structs::user::MockUserDTO};
use deadpool_postgres::Pool;
use navarro_posts_api::modules::post::post_dtos::PostDTO;

pub struct FunctionalTester {
    db_table: String,
}

impl std::fmt::Display for FunctionalTester {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.db_table)
    }
}

impl FunctionalTester {
    pub fn construct_table(db_table: TablesEnum) -> Self {
        let table = match db_table {
            TablesEnum::Users => "users",
            TablesEnum::Posts => "posts",
        };

        Self {
            db_table: table.to_string(),
        }
    }

    /// Creates `users` and `posts` when they do not exist yet.
    pub async fn create_tables(pool: &Pool) {
        let client = pool.get().await.unwrap();
        client
            .batch_execute(
                "CREATE TABLE IF NOT EXISTS users (
                    id INTEGER PRIMARY KEY,
                    username TEXT NOT NULL
                );
                CREATE TABLE IF NOT EXISTS posts (
                    id INTEGER PRIMARY KEY,
                    contents TEXT NOT NULL,
                    user_id INTEGER NOT NULL
                );",
            )
            .await
            .unwrap();
    }

    pub async fn delete_from_database(pool: &Pool, db_table: TablesEnum, ids: &[i32]) {
        let client = pool.get().await.unwrap();
        let stmt = format!(
            "DELETE FROM {} WHERE id = ANY($1)",
            FunctionalTester::construct_table(db_table)
        );
        client.execute(stmt.as_str(), &[&ids]).await.unwrap();
    }

    pub async fn insert_in_db_users(pool: &Pool, user: MockUserDTO) -> MockUserDTO {
        let client = pool.get().await.unwrap();
        client
            .execute(
                "INSERT INTO users (id, username) VALUES ($1, $2)",
                &[&user.id, &user.username],
            )
            .await
            .unwrap();

        user
    }

    pub async fn insert_in_db_posts(pool: &Pool, post: PostDTO) -> PostDTO {
        let client = pool.get().await.unwrap();
        client
            .execute(
                "INSERT INTO posts (id, contents, user_id) VALUES ($1, $2, $3)",
                &[&post.id, &post.contents, &post.user_id],
            )
            .await
            .unwrap();

        post
    }
}
