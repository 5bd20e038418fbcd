use serde::{Deserialize, Serialize};

/// JWT payload. Wire shape: `{sub, id, role, exp}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // username
    pub id: i32,     // user ID
    pub role: String,
    pub exp: usize, // expires at (unix timestamp)
}

/// Verified identity handed to handlers, fixed-shape instead of a raw
/// claim map.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub username: String,
    pub user_id: i32,
    pub role: String,
}

impl From<Claims> for CurrentUser {
    fn from(claims: Claims) -> Self {
        Self {
            username: claims.sub,
            user_id: claims.id,
            role: claims.role,
        }
    }
}
