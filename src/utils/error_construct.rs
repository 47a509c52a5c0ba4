use crate::shared::structs::error_struct::{ErrorParams, ErrorStruct};
use serde_json::{Map, Value};

/// Construct an default error response.
///
/// This function constructs an error response with the provided `data`, `code`, `message`, `value`, `min`, and `max`.
///
/// # Parameters
///
/// - `data`: The input (or collaborator) that caused the error.
/// - `code`: The text description of status code.
/// - `message`: The message description of the error to be shown to the user.
/// - `value`: The optional value of the input data.
/// - `min`: The optional min length of the input data.
/// - `max`: The optional max length of the input data.
///
/// # Returns
///
/// Returns a `serde_json::Value` with the default error response.
///
/// # Example
///
/// ```rust
/// use navarro_posts_api::utils::error_construct::error_construct;
///
/// let error = error_construct(
///     String::from("database"),
///     String::from("service unavailable"),
///     String::from("Não foi possível conectar ao banco de dados."),
///     None,
///     None,
///     None,
/// );
///
/// assert_eq!(error["database"][0]["code"], "service unavailable");
/// ```
pub fn error_construct(
    data: String,
    code: String,
    message: String,
    value: Option<String>,
    min: Option<i32>,
    max: Option<i32>,
) -> Value {
    let error = ErrorStruct {
        code,
        message,
        params: ErrorParams { min, value, max },
    };

    let mut body = Map::new();
    body.insert(
        data,
        Value::Array(vec![serde_json::to_value(error).unwrap_or(Value::Null)]),
    );
    Value::Object(body)
}
