//! Request and response data transfer objects.

pub mod request;
pub mod response;

use validator::Validate;

use assetdesk_core::error::AppError;
use assetdesk_core::result::AppResult;

/// Run `validator` checks and translate failures into a validation error
/// carrying per-field details.
pub fn validate_payload<T: Validate>(payload: &T) -> AppResult<()> {
    payload.validate().map_err(|errors| {
        let details = serde_json::to_value(&errors).unwrap_or(serde_json::Value::Null);
        AppError::validation("Request validation failed").with_details(details)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assetdesk_core::error::ErrorKind;

    #[derive(Validate)]
    struct Probe {
        #[validate(length(min = 1))]
        name: String,
    }

    #[test]
    fn test_validate_payload_passes_valid_input() {
        let probe = Probe {
            name: "ok".to_string(),
        };
        assert!(validate_payload(&probe).is_ok());
    }

    #[test]
    fn test_validate_payload_reports_field_details() {
        let probe = Probe {
            name: String::new(),
        };
        let err = validate_payload(&probe).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        let details = err.details.expect("details present");
        assert!(details.get("name").is_some());
    }
}
