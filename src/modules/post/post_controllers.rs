use super::{
    post_dtos::{PostListing, PostListingShape},
    post_models::PostModel,
    post_services::list_user_posts_service,
};
use crate::shared::exceptions::persistence_error::PersistenceError;
use actix_web::{get, web, HttpResponse};

/// Nested mount: the user id comes from the parent path.
pub fn user_posts_controllers_module() -> actix_web::Scope {
    web::scope("/users/{user_id}/posts").service(list_user_posts)
}

/// Flat mount: the user id is the last path segment.
pub fn post_controllers_module() -> actix_web::Scope {
    web::scope("/posts").service(list_posts_by_user)
}

async fn list_posts_response(
    model: web::Data<dyn PostModel>,
    shape: web::Data<PostListingShape>,
    user_id: String,
) -> Result<HttpResponse, PersistenceError> {
    let posts: PostListing = list_user_posts_service(model.get_ref(), &user_id, **shape).await?;
    Ok(HttpResponse::Ok().json(posts))
}

#[utoipa::path(
    tag = "post",
    path = "/users/{user_id}/posts",
    params(
        ("user_id" = String, Path, description = "Id do usuário dono dos posts")
    ),
    responses((
        status = 200, description = "Listagem dos posts do usuário (OK). O formato segue POSTS_LISTING_SHAPE: `rows` responde [PostDTO], `with_username` responde [UserPostDTO]", body = [PostDTO],
        content_type = "application/json", example = json ! ([
            { "id": 1, "contents": "a", "user_id": 1 },
            { "id": 2, "contents": "b", "user_id": 1 }
        ])
    ), (
        status = 500, description = "Erro Interno do Servidor (Internal Server Error)", body = ErrorStruct,
        content_type = "application/json", example = json ! ({
            "database": [{
                "code": "internal server error",
                "message": "db error: ERROR: invalid input syntax for type integer: \"abc\"",
                "params": {
                    "min": null,
                    "value": null,
                    "max": null,
                }
            }]
        })
    ), (
        status = 503, description = "Serviço Indisponível (Service Unavailable)", body = ErrorStruct,
        content_type = "application/json", example = json ! ({
            "database": [{
                "code": "service unavailable",
                "message": "Error occurred while creating a new object: error connecting to server: Connection refused (os error 111)",
                "params": {
                    "min": null,
                    "value": null,
                    "max": null,
                }
            }]
        })
    ))
)]
#[get("")]
async fn list_user_posts(
    path: web::Path<String>,
    model: web::Data<dyn PostModel>,
    shape: web::Data<PostListingShape>,
) -> Result<HttpResponse, PersistenceError> {
    list_posts_response(model, shape, path.into_inner()).await
}

#[utoipa::path(
    tag = "post",
    path = "/posts/{user_id}",
    params(
        ("user_id" = String, Path, description = "Id do usuário dono dos posts")
    ),
    responses((
        status = 200, description = "Listagem dos posts do usuário (OK). O formato segue POSTS_LISTING_SHAPE: `rows` responde [PostDTO], `with_username` responde [UserPostDTO]", body = [PostDTO],
        content_type = "application/json", example = json ! ([
            { "id": 1, "contents": "a", "user_id": 1 }
        ])
    ), (
        status = 500, description = "Erro Interno do Servidor (Internal Server Error)", body = ErrorStruct
    ), (
        status = 503, description = "Serviço Indisponível (Service Unavailable)", body = ErrorStruct
    ))
)]
#[get("/{user_id}")]
async fn list_posts_by_user(
    path: web::Path<String>,
    model: web::Data<dyn PostModel>,
    shape: web::Data<PostListingShape>,
) -> Result<HttpResponse, PersistenceError> {
    list_posts_response(model, shape, path.into_inner()).await
}
