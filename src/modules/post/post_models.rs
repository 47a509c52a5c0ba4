use super::post_dtos::{PostDTO, UserPostDTO};
use crate::{
    shared::exceptions::persistence_error::PersistenceError,
    utils::query_constructor_executor::query_constructor_executor,
};
use async_trait::async_trait;
use deadpool_postgres::Pool;
use sql_builder::{quote, SqlBuilder};

/// # Post Model
///
/// Data access for the `posts` table. Route code only talks to this trait
/// and never builds queries itself.
///
/// `user_id` is taken verbatim from the request path. It is not parsed
/// here; whether it is a valid id is for the database to decide.
#[async_trait]
pub trait PostModel: Send + Sync {
    /// Every post whose `user_id` is `user_id`.
    async fn find_by_user_id(&self, user_id: &str) -> Result<Vec<PostDTO>, PersistenceError>;

    /// Every post whose `user_id` is `user_id`, joined with the author's username.
    async fn find_by_user_id_with_username(
        &self,
        user_id: &str,
    ) -> Result<Vec<UserPostDTO>, PersistenceError>;
}

/// `SELECT * FROM posts WHERE user_id = '<user_id>'`
pub fn find_by_user_id_query(user_id: &str) -> SqlBuilder {
    let mut sql_builder = SqlBuilder::select_from("posts");
    sql_builder.and_where_eq("user_id", &quote(user_id));
    sql_builder
}

/// `SELECT p.id, p.contents, u.username FROM posts AS p LEFT JOIN users AS u ...`
pub fn find_by_user_id_with_username_query(user_id: &str) -> SqlBuilder {
    let mut sql_builder = SqlBuilder::select_from("posts AS p");
    sql_builder.fields(&["p.id", "p.contents", "u.username"]);
    sql_builder.left().join("users AS u").on("u.id = p.user_id");
    sql_builder.and_where_eq("p.user_id", &quote(user_id));
    sql_builder
}

/// [`PostModel`] backed by Postgres.
#[derive(Clone)]
pub struct PostgresPostModel {
    pg_pool: Pool,
}

impl PostgresPostModel {
    pub fn new(pg_pool: Pool) -> Self {
        Self { pg_pool }
    }
}

#[async_trait]
impl PostModel for PostgresPostModel {
    async fn find_by_user_id(&self, user_id: &str) -> Result<Vec<PostDTO>, PersistenceError> {
        let rows = query_constructor_executor(&self.pg_pool, find_by_user_id_query(user_id)).await?;

        let mut posts: Vec<PostDTO> = Vec::with_capacity(rows.len());
        for row in rows {
            posts.push(PostDTO {
                id: row.try_get("id")?,
                contents: row.try_get("contents")?,
                user_id: row.try_get("user_id")?,
            });
        }
        Ok(posts)
    }

    async fn find_by_user_id_with_username(
        &self,
        user_id: &str,
    ) -> Result<Vec<UserPostDTO>, PersistenceError> {
        let rows = query_constructor_executor(
            &self.pg_pool,
            find_by_user_id_with_username_query(user_id),
        )
        .await?;

        let mut posts: Vec<UserPostDTO> = Vec::with_capacity(rows.len());
        for row in rows {
            posts.push(UserPostDTO {
                id: row.try_get("id")?,
                contents: row.try_get("contents")?,
                username: row.try_get("username")?,
            });
        }
        Ok(posts)
    }
}
