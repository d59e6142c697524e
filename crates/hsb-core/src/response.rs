//! Validation and parsing of the homework-status API payload.
//!
//! The API client hands over an opaque `serde_json::Value`; everything here
//! is field-presence and shape checking, so each failure mode maps to its
//! own `Error` variant instead of a generic deserialization error.

use serde_json::Value;
use tracing::debug;

use crate::{domain::HomeworkStatus, errors::Error, Result};

/// Verify the poll response shape and return the homework records.
///
/// Both `homeworks` and `current_date` must be present; `homeworks` must be
/// an array. An empty array is a valid answer meaning "no status changes in
/// this window". Order is preserved as received.
pub fn check_response(response: &Value) -> Result<&[Value]> {
    let Some(obj) = response.as_object() else {
        return Err(Error::ResponseShape);
    };

    let homeworks = obj
        .get("homeworks")
        .ok_or_else(|| Error::CheckApiAnswer("missing key: homeworks".to_string()))?;
    if !obj.contains_key("current_date") {
        return Err(Error::CheckApiAnswer("missing key: current_date".to_string()));
    }

    let homeworks = homeworks
        .as_array()
        .ok_or_else(|| Error::CheckApiAnswer("homeworks is not an array".to_string()))?;

    if homeworks.is_empty() {
        debug!("no new homework statuses in this window");
    }

    Ok(homeworks)
}

/// Extract name and status from one homework record.
///
/// Checked in the same order the message mentions them: status first, then
/// name, then the status value itself.
pub fn parse_record(record: &Value) -> Result<crate::domain::HomeworkRecord> {
    let status = record.get("status").ok_or(Error::MissingStatus)?;
    let name = record
        .get("homework_name")
        .and_then(Value::as_str)
        .ok_or(Error::MissingName)?;

    let status_str = match status.as_str() {
        Some(s) => s,
        None => return Err(Error::UnknownStatus(status.to_string())),
    };
    let status = HomeworkStatus::parse(status_str)
        .ok_or_else(|| Error::UnknownStatus(status_str.to_string()))?;

    Ok(crate::domain::HomeworkRecord {
        name: name.to_string(),
        status,
    })
}

/// Compose the user-facing status-change message for one record.
pub fn parse_status(record: &Value) -> Result<String> {
    let record = parse_record(record)?;
    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        record.name,
        record.status.verdict()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_well_formed_response() {
        let response = json!({
            "homeworks": [{"homework_name": "proj1", "status": "approved"}],
            "current_date": 1234567890,
        });
        let homeworks = check_response(&response).unwrap();
        assert_eq!(homeworks.len(), 1);
    }

    #[test]
    fn accepts_empty_homeworks() {
        let response = json!({"homeworks": [], "current_date": 1234567890});
        let homeworks = check_response(&response).unwrap();
        assert!(homeworks.is_empty());
    }

    #[test]
    fn rejects_non_object_response() {
        assert!(matches!(
            check_response(&json!([1, 2, 3])),
            Err(Error::ResponseShape)
        ));
        assert!(matches!(
            check_response(&json!("nope")),
            Err(Error::ResponseShape)
        ));
    }

    #[test]
    fn rejects_missing_homeworks_key() {
        let response = json!({"current_date": 1234567890});
        assert!(matches!(
            check_response(&response),
            Err(Error::CheckApiAnswer(_))
        ));
    }

    #[test]
    fn rejects_missing_current_date_key() {
        let response = json!({"homeworks": []});
        assert!(matches!(
            check_response(&response),
            Err(Error::CheckApiAnswer(_))
        ));
    }

    #[test]
    fn rejects_homeworks_of_wrong_shape() {
        let response = json!({"homeworks": {"a": 1}, "current_date": 1234567890});
        assert!(matches!(
            check_response(&response),
            Err(Error::CheckApiAnswer(_))
        ));
    }

    #[test]
    fn composes_approved_message() {
        let record = json!({"homework_name": "proj1", "status": "approved"});
        assert_eq!(
            parse_status(&record).unwrap(),
            "Изменился статус проверки работы \"proj1\". \
             Работа проверена: ревьюеру всё понравилось. Ура!"
        );
    }

    #[test]
    fn composes_reviewing_and_rejected_messages() {
        let reviewing = json!({"homework_name": "hw", "status": "reviewing"});
        assert_eq!(
            parse_status(&reviewing).unwrap(),
            "Изменился статус проверки работы \"hw\". Работа взята на проверку ревьюером."
        );

        let rejected = json!({"homework_name": "hw", "status": "rejected"});
        assert_eq!(
            parse_status(&rejected).unwrap(),
            "Изменился статус проверки работы \"hw\". \
             Работа проверена: у ревьюера есть замечания."
        );
    }

    #[test]
    fn missing_status_is_reported_first() {
        let record = json!({"homework_name": "proj1"});
        assert!(matches!(parse_status(&record), Err(Error::MissingStatus)));

        // Even when the name is missing too.
        let record = json!({});
        assert!(matches!(parse_status(&record), Err(Error::MissingStatus)));
    }

    #[test]
    fn missing_name_is_reported() {
        let record = json!({"status": "approved"});
        assert!(matches!(parse_status(&record), Err(Error::MissingName)));
    }

    #[test]
    fn unknown_status_carries_the_value() {
        let record = json!({"homework_name": "proj1", "status": "pending"});
        match parse_status(&record) {
            Err(Error::UnknownStatus(s)) => assert_eq!(s, "pending"),
            other => panic!("expected UnknownStatus, got {other:?}"),
        }
    }

    #[test]
    fn non_string_status_is_unknown() {
        let record = json!({"homework_name": "proj1", "status": 42});
        assert!(matches!(parse_status(&record), Err(Error::UnknownStatus(_))));
    }
}
