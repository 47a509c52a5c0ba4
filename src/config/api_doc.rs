use crate::{
    modules::post::{
        post_controllers::{__path_list_posts_by_user, __path_list_user_posts},
        post_dtos::{PostDTO, UserPostDTO},
    },
    shared::structs::error_struct::{ErrorParams, ErrorStruct},
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(list_user_posts, list_posts_by_user),
    components(schemas(PostDTO, UserPostDTO, ErrorStruct, ErrorParams)),
    servers((
        url = "http://localhost:8080/",
        description = "Local Server",
    )),
    tags((
        name = "post", description = "Controladores da entidade de post"
    )),
)]
pub struct ApiDoc;

/// # API Documentation
///
/// Swagger UI for the listing endpoints, served under `/api-docs/`, with the
/// OpenAPI document at `/api-docs/openapi.json`.
pub fn api_doc() -> SwaggerUi {
    SwaggerUi::new("/api-docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi())
}
