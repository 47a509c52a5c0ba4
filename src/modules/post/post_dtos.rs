use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A row of the `posts` table.
#[derive(ToSchema, Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PostDTO {
    pub id: i32,
    pub contents: String,
    pub user_id: i32,
}

/// A post joined with the username of its author.
///
/// `username` is `None` when the `LEFT JOIN` finds no matching user.
#[derive(ToSchema, Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UserPostDTO {
    pub id: i32,
    pub contents: String,
    pub username: Option<String>,
}

/// Payload of the post listing endpoints. Serialized as a plain JSON array
/// whichever shape was selected.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum PostListing {
    Rows(Vec<PostDTO>),
    WithUsername(Vec<UserPostDTO>),
}

impl PostListing {
    pub fn len(&self) -> usize {
        match self {
            PostListing::Rows(posts) => posts.len(),
            PostListing::WithUsername(posts) => posts.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// # Post Listing Shape
///
/// Which payload the listing endpoints answer with.
///
/// * `Rows` - raw `posts` rows (`id`, `contents`, `user_id`).
/// * `WithUsername` - posts joined with `users` (`id`, `contents`, `username`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PostListingShape {
    #[default]
    Rows,
    WithUsername,
}

impl PostListingShape {
    /// Reads the value of `POSTS_LISTING_SHAPE`. Unknown values fall back to `Rows`.
    ///
    /// ```rust
    /// use navarro_posts_api::modules::post::post_dtos::PostListingShape;
    ///
    /// assert_eq!(PostListingShape::from_setting("with_username"), PostListingShape::WithUsername);
    /// assert_eq!(PostListingShape::from_setting("ROWS"), PostListingShape::Rows);
    /// assert_eq!(PostListingShape::from_setting("joined?"), PostListingShape::Rows);
    /// ```
    pub fn from_setting(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "rows" => PostListingShape::Rows,
            "with_username" => PostListingShape::WithUsername,
            other => {
                log::warn!("unknown posts listing shape {other:?}, using \"rows\"");
                PostListingShape::Rows
            }
        }
    }
}
