//! Transport-independent request/response shapes for the two auth
//! operations, plus the response envelope the HTTP layer serializes
//! as-is.
//!
//! All failures are caught here and turned into a structured 401 (or
//! 500) envelope; nothing is retried and no sub-cause leaks into the
//! message.

use newsdesk_core::repository::AccountRepository;
use serde::{Deserialize, Serialize};

use crate::error::AuthError;
use crate::service::AuthService;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    /// The expired (or expiring) access token.
    pub token: String,
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    pub access_token: String,
}

/// Response envelope shared by every auth endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub status_code: u16,
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            status_code: 200,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Map a service error to its envelope. Request-level failures
    /// carry their own (deliberately generic) message; anything else
    /// is masked as an internal error.
    pub fn from_error(err: &AuthError) -> Self {
        let status_code = err.status_code();
        let message = if status_code == 401 {
            err.to_string()
        } else {
            tracing::error!(error = %err, "auth request failed internally");
            "Internal server error".into()
        };
        Self {
            status_code,
            message,
            data: None,
        }
    }
}

/// `POST login` — authenticate and issue a token pair.
pub async fn handle_login<R: AccountRepository>(
    service: &AuthService<R>,
    request: LoginRequest,
) -> ApiResponse<LoginResponse> {
    match service.login(&request.email, &request.password).await {
        Ok(out) => ApiResponse::ok(
            "Login successful",
            LoginResponse {
                access_token: out.access_token,
                refresh_token: out.refresh_token,
            },
        ),
        Err(err) => ApiResponse::from_error(&err),
    }
}

/// `POST refresh` — exchange an expired access token plus the live
/// refresh token for a fresh access token.
pub async fn handle_refresh<R: AccountRepository>(
    service: &AuthService<R>,
    request: RefreshRequest,
) -> ApiResponse<RefreshResponse> {
    match service.refresh(&request.token, &request.refresh_token).await {
        Ok(out) => ApiResponse::ok(
            "Token refreshed successfully",
            RefreshResponse {
                access_token: out.access_token,
            },
        ),
        Err(err) => ApiResponse::from_error(&err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_uses_camel_case_on_the_wire() {
        let response = ApiResponse::ok(
            "Login successful",
            LoginResponse {
                access_token: "acc".into(),
                refresh_token: "ref".into(),
            },
        );
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["statusCode"], 200);
        assert_eq!(json["message"], "Login successful");
        assert_eq!(json["data"]["accessToken"], "acc");
        assert_eq!(json["data"]["refreshToken"], "ref");
    }

    #[test]
    fn refresh_request_parses_wire_shape() {
        let request: RefreshRequest =
            serde_json::from_str(r#"{"token":"t","refreshToken":"r"}"#).unwrap();
        assert_eq!(request.token, "t");
        assert_eq!(request.refresh_token, "r");
    }

    #[test]
    fn token_failures_become_generic_401() {
        let response = ApiResponse::<RefreshResponse>::from_error(&AuthError::InvalidToken);
        assert_eq!(response.status_code, 401);
        assert_eq!(response.message, "Invalid token.");
        assert!(response.data.is_none());
    }

    #[test]
    fn internal_failures_do_not_leak_detail() {
        let response =
            ApiResponse::<LoginResponse>::from_error(&AuthError::Store("db down".into()));
        assert_eq!(response.status_code, 500);
        assert_eq!(response.message, "Internal server error");
    }
}
