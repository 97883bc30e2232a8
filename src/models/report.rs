// ============================================================================
// REPORT - Reportes de trabajo (inmutables una vez creados)
// ============================================================================
// El backend puede devolver `ticketId` / `reporterId` como id plano o como
// documento poblado; ambas formas se normalizan aquí.
// ============================================================================

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use super::ticket::{Priority, TicketStatus};

/// Ticket referenciado por un reporte
#[derive(Clone, PartialEq, Debug, Default)]
pub struct TicketRef {
    pub id: String,
    pub title: Option<String>,
    pub priority: Option<Priority>,
    pub status: Option<TicketStatus>,
}

/// Autor de un reporte
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ReporterRef {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
}

#[derive(Clone, PartialEq, Debug)]
pub struct Report {
    pub id: String,
    pub ticket: TicketRef,
    pub reporter: ReporterRef,
    pub content: String,
    pub attachments: Vec<String>,
    pub excel_path: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum TicketRefDto {
    Id(String),
    Populated {
        #[serde(default, rename = "_id")]
        mongo_id: Option<String>,
        #[serde(default)]
        id: Option<String>,
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        priority: Option<Priority>,
        #[serde(default)]
        status: Option<TicketStatus>,
    },
}

#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum ReporterRefDto {
    Id(String),
    Populated {
        #[serde(default, rename = "_id")]
        mongo_id: Option<String>,
        #[serde(default)]
        id: Option<String>,
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        email: Option<String>,
        #[serde(default, rename = "avatarUrl")]
        avatar_url: Option<String>,
    },
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDto {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, rename = "_id")]
    pub mongo_id: Option<String>,
    #[serde(default)]
    pub ticket_id: Option<TicketRefDto>,
    #[serde(default)]
    pub reporter_id: Option<ReporterRefDto>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub attachments: Option<Vec<Value>>,
    #[serde(default)]
    pub excel_path: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

fn pick_id(id: Option<String>, mongo_id: Option<String>) -> String {
    id.filter(|id| !id.is_empty())
        .or(mongo_id)
        .unwrap_or_default()
}

impl From<TicketRefDto> for TicketRef {
    fn from(dto: TicketRefDto) -> Self {
        match dto {
            TicketRefDto::Id(id) => TicketRef {
                id,
                ..TicketRef::default()
            },
            TicketRefDto::Populated {
                mongo_id,
                id,
                title,
                priority,
                status,
            } => TicketRef {
                id: pick_id(id, mongo_id),
                title,
                priority,
                status,
            },
        }
    }
}

impl From<ReporterRefDto> for ReporterRef {
    fn from(dto: ReporterRefDto) -> Self {
        match dto {
            ReporterRefDto::Id(id) => ReporterRef {
                id,
                ..ReporterRef::default()
            },
            ReporterRefDto::Populated {
                mongo_id,
                id,
                name,
                email,
                avatar_url,
            } => ReporterRef {
                id: pick_id(id, mongo_id),
                name,
                email,
                avatar_url,
            },
        }
    }
}

/// Nombre visible de un adjunto: string plano u objeto con nombre/ruta
fn attachment_name(value: &Value) -> Option<String> {
    match value {
        Value::String(name) => Some(name.clone()),
        Value::Object(map) => ["filename", "originalname", "name", "path"]
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_str))
            .map(str::to_string),
        _ => None,
    }
}

impl From<ReportDto> for Report {
    fn from(dto: ReportDto) -> Self {
        let created_at = dto
            .created_at
            .as_deref()
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map(|dt| dt.with_timezone(&Utc));

        Report {
            id: pick_id(dto.id, dto.mongo_id),
            ticket: dto.ticket_id.map(TicketRef::from).unwrap_or_default(),
            reporter: dto.reporter_id.map(ReporterRef::from).unwrap_or_default(),
            content: dto.content.unwrap_or_default(),
            attachments: dto
                .attachments
                .unwrap_or_default()
                .iter()
                .filter_map(attachment_name)
                .collect(),
            excel_path: dto.excel_path.filter(|p| !p.is_empty()),
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_populated_report() {
        let dto: ReportDto = serde_json::from_str(
            r#"{
                "_id": "r1",
                "ticketId": {"_id": "t1", "title": "Sin red", "priority": "urgent", "status": "reported"},
                "reporterId": {"_id": "u1", "name": "Ana", "email": "a@x.com"},
                "content": "Cambio de módem",
                "attachments": ["uploads/foto.jpg", {"originalname": "acta.pdf"}],
                "excelPath": "exports/r1.xlsx",
                "createdAt": "2026-03-05T07:05:09.000Z"
            }"#,
        )
        .unwrap();

        let report = Report::from(dto);
        assert_eq!(report.id, "r1");
        assert_eq!(report.ticket.title.as_deref(), Some("Sin red"));
        assert_eq!(report.ticket.priority, Some(Priority::Urgent));
        assert_eq!(report.reporter.name.as_deref(), Some("Ana"));
        assert_eq!(report.attachments, vec!["uploads/foto.jpg", "acta.pdf"]);
        assert!(report.created_at.is_some());
    }

    #[test]
    fn decodes_bare_ids_and_bad_dates() {
        let dto: ReportDto = serde_json::from_str(
            r#"{"id":"r2","ticketId":"t9","reporterId":"u3","createdAt":"ayer"}"#,
        )
        .unwrap();

        let report = Report::from(dto);
        assert_eq!(report.ticket.id, "t9");
        assert_eq!(report.ticket.title, None);
        assert_eq!(report.reporter.id, "u3");
        assert_eq!(report.content, "");
        assert_eq!(report.created_at, None);
    }

    #[test]
    fn null_attachments_decode_as_empty() {
        let dto: ReportDto =
            serde_json::from_str(r#"{"_id":"r3","attachments":null,"reporterId":null}"#).unwrap();

        let report = Report::from(dto);
        assert!(report.attachments.is_empty());
        assert_eq!(report.reporter, ReporterRef::default());
    }
}
