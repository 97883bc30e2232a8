use serde::{Deserialize, Serialize};

use super::user::{User, UserDto};

#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<UserDto>,
}

/// Respuesta de `POST /api/user/avatar`
#[derive(Clone, Debug, Default, Deserialize)]
pub struct AvatarResponse {
    #[serde(default)]
    pub user: Option<UserDto>,
}

/// Sesión local: token + perfil cacheado
#[derive(Clone, PartialEq, Debug)]
pub struct Session {
    pub token: String,
    pub user: Option<User>,
}
