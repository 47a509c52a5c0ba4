use crate::utils::error_construct::error_construct;
use actix_web::HttpResponse;

/// # Exception
///
/// ## Functions:
///
/// not_found (data: String, message: String, value: Option<String>) -> HttpResponse Error 404
///
/// internal_server_error (data: String, message: String) -> HttpResponse Error 500
///
/// service_unavailable (data: String, message: String) -> HttpResponse Error 503
///
pub struct Exception;

impl Exception {
    /// Error 404
    ///
    /// ## Arguments
    ///
    /// * `data` - String
    ///
    /// * `message` - String
    ///
    /// * `value` - Option<String>
    ///
    /// ## Returns
    ///
    /// HttpResponse Error 404
    ///
    /// ## Example
    ///
    /// ```rust
    /// use navarro_posts_api::shared::exceptions::exception::Exception;
    ///
    /// let response = Exception::not_found(String::from("route"), String::from("not found"), None);
    /// assert_eq!(response.status(), 404);
    /// ```
    pub fn not_found(data: String, message: String, value: Option<String>) -> HttpResponse {
        HttpResponse::NotFound().json(error_construct(
            data,
            String::from("not found"),
            message,
            value,
            None,
            None,
        ))
    }

    /// Error 500
    ///
    /// ## Arguments
    ///
    /// * `data` - String
    ///
    /// * `message` - String
    ///
    /// ## Returns
    ///
    /// HttpResponse Error 500
    ///
    /// ## Example
    ///
    /// ```rust
    /// use navarro_posts_api::shared::exceptions::exception::Exception;
    ///
    /// let response = Exception::internal_server_error(String::from("server"), String::from("internal server error"));
    /// assert_eq!(response.status(), 500);
    /// ```
    pub fn internal_server_error(data: String, message: String) -> HttpResponse {
        HttpResponse::InternalServerError().json(error_construct(
            data,
            String::from("internal server error"),
            message,
            None,
            None,
            None,
        ))
    }

    /// Error 503
    ///
    /// ## Arguments
    ///
    /// * `data` - String
    ///
    /// * `message` - String
    ///
    /// ## Returns
    ///
    /// HttpResponse Error 503
    ///
    /// ## Example
    ///
    /// ```rust
    /// use navarro_posts_api::shared::exceptions::exception::Exception;
    ///
    /// let response = Exception::service_unavailable(String::from("database"), String::from("connection refused"));
    /// assert_eq!(response.status(), 503);
    /// ```
    pub fn service_unavailable(data: String, message: String) -> HttpResponse {
        HttpResponse::ServiceUnavailable().json(error_construct(
            data,
            String::from("service unavailable"),
            message,
            None,
            None,
            None,
        ))
    }
}
