use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Urgent,
    // Prioridades desconocidas se tratan como normales
    #[default]
    #[serde(other)]
    Normal,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Normal => "NORMAL",
            Priority::Urgent => "URGENTE",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Priority::Normal => "priority normal",
            Priority::Urgent => "priority urgent",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    #[default]
    Open,
    Closed,
    InProgress,
    Reported,
    #[serde(other)]
    Unknown,
}

impl TicketStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TicketStatus::Open => "Abierto",
            TicketStatus::Closed => "Cerrado",
            TicketStatus::InProgress => "En progreso",
            TicketStatus::Reported => "Reportado",
            TicketStatus::Unknown => "—",
        }
    }
}

/// Ticket del backend (solo lectura en el cliente)
#[derive(Clone, PartialEq, Debug)]
pub struct Ticket {
    pub id: String,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub status: TicketStatus,
    pub created_at: Option<String>,
    pub closed_at: Option<String>,
}

/// Forma de cable: `_id` o `id`; cualquier campo puede faltar o venir a `null`
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketDto {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, rename = "_id")]
    pub mongo_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub status: Option<TicketStatus>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub closed_at: Option<String>,
}

impl From<TicketDto> for Ticket {
    fn from(dto: TicketDto) -> Self {
        let id = dto
            .id
            .filter(|id| !id.is_empty())
            .or(dto.mongo_id)
            .unwrap_or_default();
        Ticket {
            id,
            title: dto.title.unwrap_or_default(),
            description: dto.description.unwrap_or_default(),
            priority: dto.priority.unwrap_or_default(),
            status: dto.status.unwrap_or_default(),
            created_at: dto.created_at,
            closed_at: dto.closed_at,
        }
    }
}

/// Cuerpo de `POST /api/tickets`
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct NewTicket {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub priority: Priority,
}

/// Filtra por prioridad conservando el orden original
pub fn filter_by_priority(tickets: Vec<Ticket>, priority: Priority) -> Vec<Ticket> {
    tickets
        .into_iter()
        .filter(|ticket| ticket.priority == priority)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_wire_ticket_with_defaults() {
        let dto: TicketDto = serde_json::from_str(
            r#"{"_id":"t1","title":"Sin red","priority":"urgent","status":"in_progress"}"#,
        )
        .unwrap();
        let ticket = Ticket::from(dto);
        assert_eq!(ticket.id, "t1");
        assert_eq!(ticket.description, "");
        assert_eq!(ticket.priority, Priority::Urgent);
        assert_eq!(ticket.status, TicketStatus::InProgress);
    }

    #[test]
    fn unknown_priority_and_status_do_not_fail() {
        let dto: TicketDto =
            serde_json::from_str(r#"{"id":"t2","title":"x","priority":"low","status":"archived"}"#)
                .unwrap();
        let ticket = Ticket::from(dto);
        assert_eq!(ticket.priority, Priority::Normal);
        assert_eq!(ticket.status, TicketStatus::Unknown);
    }

    #[test]
    fn null_fields_fall_back_to_defaults() {
        let dto: TicketDto = serde_json::from_str(
            r#"{"_id":"b","title":null,"description":null,"priority":null,"status":null}"#,
        )
        .unwrap();
        let ticket = Ticket::from(dto);
        assert_eq!(ticket.id, "b");
        assert_eq!(ticket.title, "");
        assert_eq!(ticket.priority, Priority::Normal);
        assert_eq!(ticket.status, TicketStatus::Open);
    }

    #[test]
    fn new_ticket_omits_missing_description() {
        let body = serde_json::to_value(NewTicket {
            title: "Impresora".into(),
            description: None,
            priority: Priority::Urgent,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"title": "Impresora", "priority": "urgent"}));
    }
}
