use serde::{Deserialize, Serialize};

/// Perfil del usuario autenticado (cacheado en localStorage bajo `user`)
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Forma del usuario tal como llega del backend o de versiones anteriores del
/// front: puede traer `id`, `_id` o ambos, y cualquier campo puede faltar.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct UserDto {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, rename = "_id")]
    pub mongo_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, rename = "avatarUrl")]
    pub avatar_url: Option<String>,
}

impl UserDto {
    fn resolved_id(&self) -> Option<String> {
        non_empty(&self.id).or_else(|| non_empty(&self.mongo_id))
    }

    /// Mezcla campo a campo sobre un usuario previo (los campos ausentes se conservan)
    pub fn merge_over(self, previous: Option<&User>) -> User {
        let id = self.resolved_id();
        User {
            id: id
                .or_else(|| previous.map(|p| p.id.clone()))
                .unwrap_or_default(),
            name: non_empty(&self.name)
                .or_else(|| previous.map(|p| p.name.clone()))
                .unwrap_or_default(),
            email: non_empty(&self.email)
                .or_else(|| previous.map(|p| p.email.clone()))
                .unwrap_or_default(),
            avatar_url: non_empty(&self.avatar_url)
                .or_else(|| previous.and_then(|p| p.avatar_url.clone())),
        }
    }
}

impl From<UserDto> for User {
    fn from(dto: UserDto) -> Self {
        dto.merge_over(None)
    }
}

impl<'de> Deserialize<'de> for User {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        UserDto::deserialize(deserializer).map(User::from)
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}
