use serde::{Deserialize, Serialize};

/// Fallback shown when the backend does not supply a failure message.
pub const GENERIC_ERROR_MESSAGE: &str = "Đã có lỗi xảy ra, vui lòng thử lại";

/// The `{code, result, message}` wrapper every backend response uses.
///
/// Success codes are inconsistent across endpoints (`1000` from the newer
/// services, `200` from the legacy ones); both are accepted here so no
/// caller ever branches on the code itself.
/// The explicit bound keeps the derive from demanding `T: Default` for the
/// defaulted `Option<T>` field; payload types never need `Default`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
pub struct ApiEnvelope<T> {
    pub code: i32,
    #[serde(default)]
    pub result: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> ApiEnvelope<T> {
    pub fn is_success(&self) -> bool {
        matches!(self.code, 1000 | 200)
    }

    fn failure_message(message: Option<String>) -> String {
        message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string())
    }

    /// Unwrap an envelope whose payload is required on success.
    pub fn into_result(self) -> Result<T, String> {
        if self.is_success() {
            self.result
                .ok_or_else(|| GENERIC_ERROR_MESSAGE.to_string())
        } else {
            Err(Self::failure_message(self.message))
        }
    }

    /// Unwrap an envelope for endpoints that return no payload (deletes,
    /// status transitions). A present payload is discarded.
    pub fn into_unit_result(self) -> Result<(), String> {
        if self.is_success() {
            Ok(())
        } else {
            Err(Self::failure_message(self.message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_1000_is_success() {
        let env: ApiEnvelope<u32> = serde_json::from_value(serde_json::json!({
            "code": 1000,
            "result": 7
        }))
        .unwrap();
        assert_eq!(env.into_result(), Ok(7));
    }

    #[test]
    fn code_200_is_success_too() {
        let env: ApiEnvelope<String> = serde_json::from_value(serde_json::json!({
            "code": 200,
            "result": "ok"
        }))
        .unwrap();
        assert!(env.is_success());
    }

    #[test]
    fn failure_carries_server_message() {
        let env: ApiEnvelope<u32> = serde_json::from_value(serde_json::json!({
            "code": 4001,
            "message": "Mật khẩu không đúng"
        }))
        .unwrap();
        assert_eq!(env.into_result(), Err("Mật khẩu không đúng".to_string()));
    }

    #[test]
    fn failure_without_message_falls_back_to_generic_string() {
        let env: ApiEnvelope<u32> =
            serde_json::from_value(serde_json::json!({ "code": 5000 })).unwrap();
        assert_eq!(env.into_result(), Err(GENERIC_ERROR_MESSAGE.to_string()));
    }

    #[test]
    fn blank_message_also_falls_back() {
        let env: ApiEnvelope<u32> = serde_json::from_value(serde_json::json!({
            "code": 5000,
            "message": "   "
        }))
        .unwrap();
        assert_eq!(env.into_result(), Err(GENERIC_ERROR_MESSAGE.to_string()));
    }

    #[test]
    fn unit_result_ignores_missing_payload() {
        let env: ApiEnvelope<serde_json::Value> =
            serde_json::from_value(serde_json::json!({ "code": 1000 })).unwrap();
        assert_eq!(env.into_unit_result(), Ok(()));
    }

    #[test]
    fn payload_types_do_not_need_default() {
        // Deliberately no Default impl; a missing `result` must still decode
        // to None through the plain Deserialize bound.
        #[derive(Debug, PartialEq, Deserialize)]
        struct Payload {
            token: String,
        }

        let env: ApiEnvelope<Payload> =
            serde_json::from_value(serde_json::json!({ "code": 5000 })).unwrap();
        assert_eq!(env.result, None);

        let env: ApiEnvelope<Payload> = serde_json::from_value(serde_json::json!({
            "code": 1000,
            "result": { "token": "abc" }
        }))
        .unwrap();
        assert_eq!(
            env.into_result(),
            Ok(Payload {
                token: "abc".to_string()
            })
        );
    }

    #[test]
    fn success_with_missing_required_payload_is_an_error() {
        let env: ApiEnvelope<u32> =
            serde_json::from_value(serde_json::json!({ "code": 1000 })).unwrap();
        assert!(env.into_result().is_err());
    }
}
