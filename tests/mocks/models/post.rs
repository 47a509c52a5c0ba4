use crate::mocks::structs::user::MockUserDTO;
use async_trait::async_trait;
use deadpool_postgres::PoolError;
use navarro_posts_api::{
    modules::post::{
        post_dtos::{PostDTO, UserPostDTO},
        post_models::PostModel,
    },
    shared::exceptions::persistence_error::PersistenceError,
};

/// Fixtures for the post tables.
pub struct PostModels {}

impl PostModels {
    pub fn alice() -> MockUserDTO {
        MockUserDTO {
            id: 1,
            username: String::from("alice"),
        }
    }

    pub fn bob() -> MockUserDTO {
        MockUserDTO {
            id: 2,
            username: String::from("bob"),
        }
    }

    pub fn alice_post() -> PostDTO {
        PostDTO {
            id: 1,
            contents: String::from("a"),
            user_id: 1,
        }
    }

    /// Alice (two posts), Bob (one post), and a post whose author (user 3)
    /// has no `users` row.
    pub fn seeded_model() -> InMemoryPostModel {
        InMemoryPostModel::new(
            vec![
                Self::alice_post(),
                PostDTO {
                    id: 2,
                    contents: String::from("bob writes"),
                    user_id: 2,
                },
                PostDTO {
                    id: 3,
                    contents: String::from("b"),
                    user_id: 1,
                },
                PostDTO {
                    id: 4,
                    contents: String::from("orphan"),
                    user_id: 3,
                },
            ],
            vec![Self::alice(), Self::bob()],
        )
    }
}

/// `PostModel` over plain vectors, with the same filter and `LEFT JOIN`
/// semantics as the Postgres queries.
pub struct InMemoryPostModel {
    posts: Vec<PostDTO>,
    users: Vec<MockUserDTO>,
}

impl InMemoryPostModel {
    pub fn new(posts: Vec<PostDTO>, users: Vec<MockUserDTO>) -> Self {
        Self { posts, users }
    }

    /// Postgres coerces the quoted id to `integer`: surrounding blanks and
    /// leading zeros are accepted, anything else is rejected.
    fn owned_by(&self, user_id: &str) -> Result<Vec<&PostDTO>, PersistenceError> {
        let user_id: i32 = match user_id.trim().parse() {
            Ok(x) => x,
            Err(_) => {
                return Err(PersistenceError::QueryBuild(format!(
                    "invalid input syntax for type integer: \"{user_id}\""
                )))
            }
        };

        Ok(self
            .posts
            .iter()
            .filter(|post| post.user_id == user_id)
            .collect())
    }
}

#[async_trait]
impl PostModel for InMemoryPostModel {
    async fn find_by_user_id(&self, user_id: &str) -> Result<Vec<PostDTO>, PersistenceError> {
        Ok(self.owned_by(user_id)?.into_iter().cloned().collect())
    }

    async fn find_by_user_id_with_username(
        &self,
        user_id: &str,
    ) -> Result<Vec<UserPostDTO>, PersistenceError> {
        Ok(self
            .owned_by(user_id)?
            .into_iter()
            .map(|post| UserPostDTO {
                id: post.id,
                contents: post.contents.clone(),
                username: self
                    .users
                    .iter()
                    .find(|user| user.id == post.user_id)
                    .map(|user| user.username.clone()),
            })
            .collect())
    }
}

/// `PostModel` whose pool is always closed.
pub struct ClosedPostModel;

#[async_trait]
impl PostModel for ClosedPostModel {
    async fn find_by_user_id(&self, _user_id: &str) -> Result<Vec<PostDTO>, PersistenceError> {
        Err(PersistenceError::Pool(PoolError::Closed))
    }

    async fn find_by_user_id_with_username(
        &self,
        _user_id: &str,
    ) -> Result<Vec<UserPostDTO>, PersistenceError> {
        Err(PersistenceError::Pool(PoolError::Closed))
    }
}
