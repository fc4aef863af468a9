use actix_web::HttpResponse;
use serde::Serialize;
use validator::ValidationErrors;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub fields: serde_json::Value,
}

/// Plain confirmation carrying the remote API's message
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// `{field: {errors: [...]}}` for every failed field
pub fn field_errors(validation_errors: &ValidationErrors) -> serde_json::Value {
    let mut fields = serde_json::Map::new();
    for (field, errors) in validation_errors.field_errors() {
        let messages: Vec<String> = errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Validation error in field: {}", field))
            })
            .collect();
        fields.insert(field.to_string(), serde_json::json!({ "errors": messages }));
    }
    serde_json::Value::Object(fields)
}

fn bad_request(error: &str, fields: serde_json::Value) -> actix_web::Error {
    actix_web::error::InternalError::from_response(
        "",
        HttpResponse::BadRequest().json(ErrorResponse {
            error: error.to_string(),
            fields,
        }),
    )
    .into()
}

fn message(text: &str) -> serde_json::Value {
    serde_json::json!({ "message": text })
}

/// Standardized 400 for any extractor validation failure
fn validation_error(err: actix_web_validator::Error) -> actix_web::Error {
    match err {
        actix_web_validator::Error::Validate(validation_errors) => {
            bad_request("Validation failed", field_errors(&validation_errors))
        }
        actix_web_validator::Error::Deserialize(de_err) => {
            let err_string = de_err.to_string();

            let text = if err_string.contains("EOF while parsing") {
                "Request body is empty. Expected JSON payload"
            } else if err_string.contains("unknown variant") {
                "Invalid enum value. Check allowed values for this field"
            } else {
                "Invalid request format"
            };
            bad_request("Request validation failed", message(text))
        }
        _ => bad_request("Validation failed", message("Validation error")),
    }
}

/// JsonConfig shared by every JSON endpoint
pub fn json_config() -> actix_web_validator::JsonConfig {
    actix_web_validator::JsonConfig::default().error_handler(|err, _req| validation_error(err))
}

/// QueryConfig shared by every endpoint taking query parameters
pub fn query_config() -> actix_web_validator::QueryConfig {
    actix_web_validator::QueryConfig::default().error_handler(|err, _req| validation_error(err))
}
