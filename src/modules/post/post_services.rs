use super::{
    post_dtos::{PostListing, PostListingShape},
    post_models::PostModel,
};
use crate::shared::exceptions::persistence_error::PersistenceError;

/// Lists the posts of `user_id` in the requested shape.
///
/// A user without posts is not an error: the listing is simply empty.
pub async fn list_user_posts_service(
    model: &dyn PostModel,
    user_id: &str,
    shape: PostListingShape,
) -> Result<PostListing, PersistenceError> {
    let listing = match shape {
        PostListingShape::Rows => PostListing::Rows(model.find_by_user_id(user_id).await?),
        PostListingShape::WithUsername => {
            PostListing::WithUsername(model.find_by_user_id_with_username(user_id).await?)
        }
    };
    log::debug!("user {user_id}: {} posts", listing.len());

    Ok(listing)
}
