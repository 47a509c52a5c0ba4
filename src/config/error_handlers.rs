use crate::shared::exceptions::exception::Exception;
use actix_web::{
    dev::ServiceResponse,
    middleware::{ErrorHandlerResponse, ErrorHandlers},
    HttpRequest, HttpResponse,
};

/// # Error Handlers
///
/// Last stop of every failed request. Errors returned by the handlers have
/// already been rendered by their `ResponseError` implementation; here the
/// server errors are logged together with their cause.
pub fn error_handlers<B: 'static>() -> ErrorHandlers<B> {
    ErrorHandlers::new().default_handler_server(log_server_error)
}

fn log_server_error<B>(res: ServiceResponse<B>) -> actix_web::Result<ErrorHandlerResponse<B>> {
    let cause = match res.response().error() {
        Some(e) => e.to_string(),
        None => String::from("no error attached"),
    };
    log::error!(
        "{} {} -> {}: {}",
        res.request().method(),
        res.request().path(),
        res.status(),
        cause
    );

    Ok(ErrorHandlerResponse::Response(res.map_into_left_body()))
}

/// Response for routes that match nothing.
pub async fn not_found(req: HttpRequest) -> HttpResponse {
    Exception::not_found(
        String::from("route"),
        String::from("Não foi encontrada uma rota para este caminho."),
        Some(req.path().to_string()),
    )
}
