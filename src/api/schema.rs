use secrecy::Secret;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize)]
pub struct LoginRequestBody<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Deserialize, Debug, Default)]
pub struct LoginResponseBody {
    #[serde(default)]
    pub access_token: Option<Value>,
}

impl LoginResponseBody {
    /// The issued token, if the service handed out a truthy one.
    ///
    /// `null`, `false`, `0` and `""` mean no token. Any other value is kept,
    /// non-strings as their JSON text.
    pub fn into_token(self) -> Option<Secret<String>> {
        let token = match self.access_token? {
            Value::Null | Value::Bool(false) => return None,
            Value::String(token) if token.is_empty() => return None,
            Value::Number(n) if n.as_f64() == Some(0.0) => return None,
            Value::String(token) => token,
            other => other.to_string(),
        };
        Some(Secret::new(token))
    }
}

#[derive(Serialize)]
pub struct SignupRequestBody<'a> {
    pub username: &'a str,
    pub email: String,
    /// The service hashes this field itself despite the name.
    pub hashed_password: &'a str,
}

#[derive(Deserialize, Debug, Default)]
pub struct SignupFailureBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl SignupFailureBody {
    pub fn detail_message(&self) -> String {
        match &self.detail {
            Some(serde_json::Value::String(detail)) => detail.clone(),
            Some(detail) => detail.to_string(),
            None => "unknown error".to_owned(),
        }
    }
}
