use serde::{Deserialize, Serialize};

/// Request body for user registration.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub role: String,
    pub phone_number: String,
}

/// Form body for the token endpoint (OAuth2 password flow shape).
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Response returned after a successful login.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_response_serialization() {
        let response = TokenResponse {
            access_token: "abc.def.ghi".into(),
            token_type: "bearer".into(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["access_token"], "abc.def.ghi");
        assert_eq!(json["token_type"], "bearer");
    }

    #[test]
    fn create_user_request_deserializes_all_fields() {
        let body = serde_json::json!({
            "username": "alice",
            "email": "alice@example.com",
            "first_name": "Alice",
            "last_name": "Smith",
            "password": "pw1pw1pw1",
            "role": "user",
            "phone_number": "(111)-111-1111"
        });
        let req: CreateUserRequest = serde_json::from_value(body).unwrap();
        assert_eq!(req.username, "alice");
        assert_eq!(req.role, "user");
    }
}
