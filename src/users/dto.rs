use serde::Deserialize;

/// Body for a password change; the current password is re-verified first.
#[derive(Debug, Deserialize)]
pub struct ChangePasswordRequest {
    pub password: String,
    pub new_password: String,
}

/// Body for a phone number change, same re-verification pattern.
#[derive(Debug, Deserialize)]
pub struct ChangePhoneNumberRequest {
    pub password: String,
    pub new_phone_number: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn change_password_request_wire_shape() {
        let req: ChangePasswordRequest = serde_json::from_value(serde_json::json!({
            "password": "testpassword",
            "new_password": "newpassword"
        }))
        .unwrap();
        assert_eq!(req.password, "testpassword");
        assert_eq!(req.new_password, "newpassword");
    }

    #[test]
    fn change_phone_number_request_wire_shape() {
        let req: ChangePhoneNumberRequest = serde_json::from_value(serde_json::json!({
            "password": "testpassword",
            "new_phone_number": "(222)-222-2222"
        }))
        .unwrap();
        assert_eq!(req.new_phone_number, "(222)-222-2222");
    }
}
