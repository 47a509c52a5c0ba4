use serde::Serialize;
use utoipa::ToSchema;

/// # Error Struct
///
/// One entry of the error body, keyed by the name of the failing input
/// (`{"database": [ErrorStruct]}`).
#[derive(ToSchema, Serialize)]
pub struct ErrorStruct {
    pub code: String,
    pub message: String,
    pub params: ErrorParams,
}

#[derive(ToSchema, Serialize)]
pub struct ErrorParams {
    pub min: Option<i32>,
    pub value: Option<String>,
    pub max: Option<i32>,
}
