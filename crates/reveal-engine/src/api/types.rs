use serde::{Deserialize, Serialize};

use crate::error::RevealError;

/// One ranked team as served by the results endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub team: String,
    pub problem: String,
    #[serde(default)]
    pub tech: Vec<String>,
}

/// Body of `GET /api/top10`, discriminated by its `status` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status")]
pub enum Top10Response {
    #[serde(rename = "LOCKED")]
    Locked {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    #[serde(rename = "OPEN")]
    Open {
        data: Vec<TeamRecord>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
}

impl Top10Response {
    pub const LOCKED: &'static str = "LOCKED";
    pub const OPEN: &'static str = "OPEN";

    /// Decode a response body.
    ///
    /// Malformed JSON and shape mismatches are `Decode` errors; a missing or
    /// unknown `status` is a `Logic` error.
    pub fn from_json(body: &str) -> Result<Self, RevealError> {
        let value: serde_json::Value = serde_json::from_str(body)?;
        match value.get("status").and_then(|s| s.as_str()) {
            Some(Self::LOCKED) | Some(Self::OPEN) => Ok(serde_json::from_value(value)?),
            Some(other) => Err(RevealError::Logic(format!("unknown status {other:?}"))),
            None => Err(RevealError::Logic("missing status field".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locked_with_message() {
        let resp = Top10Response::from_json(
            r#"{"status":"LOCKED","message":"Case files are sealed."}"#,
        )
        .unwrap();
        assert_eq!(
            resp,
            Top10Response::Locked { message: Some("Case files are sealed.".into()) }
        );
    }

    #[test]
    fn locked_without_message() {
        let resp = Top10Response::from_json(r#"{"status":"LOCKED"}"#).unwrap();
        assert_eq!(resp, Top10Response::Locked { message: None });
    }

    #[test]
    fn open_keeps_record_order() {
        let resp = Top10Response::from_json(
            r#"{"status":"OPEN","message":"TOP 10","data":[
                {"team":"Debug Detectives","problem":"Campus waste management system","tech":["Gemini AI","Firebase"]},
                {"team":"Code Sleuths","problem":"Smart attendance tracking","tech":[]}
            ]}"#,
        )
        .unwrap();
        match resp {
            Top10Response::Open { data, .. } => {
                let names: Vec<_> = data.iter().map(|t| t.team.as_str()).collect();
                assert_eq!(names, ["Debug Detectives", "Code Sleuths"]);
                assert_eq!(data[0].tech, ["Gemini AI", "Firebase"]);
            }
            other => panic!("expected OPEN, got {other:?}"),
        }
    }

    #[test]
    fn missing_status_is_logic_error() {
        let err = Top10Response::from_json(r#"{"data":[]}"#).unwrap_err();
        assert!(matches!(err, RevealError::Logic(_)));
    }

    #[test]
    fn unknown_status_is_logic_error() {
        let err = Top10Response::from_json(r#"{"status":"MAYBE"}"#).unwrap_err();
        assert!(matches!(err, RevealError::Logic(ref m) if m.contains("MAYBE")));
    }

    #[test]
    fn open_without_data_is_decode_error() {
        let err = Top10Response::from_json(r#"{"status":"OPEN"}"#).unwrap_err();
        assert!(matches!(err, RevealError::Decode(_)));
    }

    #[test]
    fn garbage_is_decode_error() {
        let err = Top10Response::from_json("<html>502</html>").unwrap_err();
        assert!(err.is_transport());
    }
}
