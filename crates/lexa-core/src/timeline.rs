//! Case activity timeline.
//!
//! A presentation-only merge of everything that happened to a case. The
//! status events are inferred from the case's current status and stamped
//! with `updatedAt`, so the feed is an approximation, never a source of truth.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::entities::{Application, Case, Comment, Document};
use crate::enums::{ApplicationStatus, CaseStatus};

/// Comment previews are cut to this many characters.
pub const COMMENT_PREVIEW_CHARS: usize = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelineKind {
    Creation,
    Status,
    Application,
    Document,
    Comment,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineEvent {
    pub id: String,
    pub kind: TimelineKind,
    pub timestamp: DateTime<Utc>,
    pub title: String,
    pub description: String,
}

/// Everything the timeline is derived from.
#[derive(Debug, Clone, Copy)]
pub struct TimelineSources<'a> {
    pub case: &'a Case,
    pub applications: &'a [Application],
    pub documents: &'a [Document],
    pub comments: &'a [Comment],
}

/// Build the timeline, newest first. `names` maps a user id to a display
/// name; ids it does not know fall back to a generic label.
#[must_use]
pub fn build_timeline<F>(sources: TimelineSources<'_>, names: F) -> Vec<TimelineEvent>
where
    F: Fn(&str) -> Option<String>,
{
    let case = sources.case;
    let mut events = Vec::new();

    let owner = names(&case.client_id).unwrap_or_else(|| "el cliente".to_string());
    events.push(TimelineEvent {
        id: format!("case-{}", case.id),
        kind: TimelineKind::Creation,
        timestamp: case.created_at,
        title: "Caso creado".into(),
        description: format!("Caso \"{}\" fue creado por {owner}", case.title),
    });

    if let Some((id, title, description)) = status_event(case, &names) {
        events.push(TimelineEvent {
            id: id.into(),
            kind: TimelineKind::Status,
            timestamp: case.updated_at,
            title: title.into(),
            description,
        });
    }

    for app in sources
        .applications
        .iter()
        .filter(|a| a.status == ApplicationStatus::Accepted)
    {
        let lawyer = names(&app.lawyer_id).unwrap_or_else(|| app.lawyer_id.clone());
        events.push(TimelineEvent {
            id: format!("app-accepted-{}", app.id),
            kind: TimelineKind::Application,
            timestamp: app.created_at.unwrap_or(case.created_at),
            title: "Postulación aceptada".into(),
            description: format!("El abogado {lawyer} fue aceptado para el caso"),
        });
    }

    for doc in sources.documents {
        let uploader = names(&doc.uploaded_by).unwrap_or_else(|| "usuario".to_string());
        events.push(TimelineEvent {
            id: format!("doc-{}", doc.id),
            kind: TimelineKind::Document,
            timestamp: doc.uploaded_at,
            title: "Documento subido".into(),
            description: format!("\"{}\" subido por {uploader}", doc.filename),
        });
    }

    for comment in sources.comments {
        let author = names(&comment.author_id).unwrap_or_else(|| "Usuario".to_string());
        events.push(TimelineEvent {
            id: format!("comment-{}", comment.id),
            kind: TimelineKind::Comment,
            timestamp: comment.created_at,
            title: comment.comment_type.label().into(),
            description: format!("{author}: {}", preview(&comment.content)),
        });
    }

    // sort_by is stable: equal timestamps keep insertion order
    events.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    events
}

fn status_event<F>(case: &Case, names: &F) -> Option<(&'static str, &'static str, String)>
where
    F: Fn(&str) -> Option<String>,
{
    match case.status {
        CaseStatus::Evaluation => Some((
            "status-evaluation",
            "Estado cambiado a EVALUACIÓN",
            "El caso fue marcado para evaluación de postulaciones".into(),
        )),
        CaseStatus::Accepted => {
            let lawyer_id = case.assigned_lawyer_id.as_deref()?;
            let lawyer = names(lawyer_id).unwrap_or_else(|| "asignado".to_string());
            Some((
                "status-accepted",
                "Abogado asignado",
                format!("El abogado {lawyer} fue asignado al caso"),
            ))
        }
        CaseStatus::Closed => Some((
            "status-closed",
            "Caso cerrado",
            "El caso fue cerrado exitosamente".into(),
        )),
        CaseStatus::Canceled => Some((
            "status-canceled",
            "Caso cancelado",
            "El caso fue cancelado".into(),
        )),
        CaseStatus::Open => None,
    }
}

/// First [`COMMENT_PREVIEW_CHARS`] characters, with `...` when cut.
#[must_use]
pub fn preview(content: &str) -> String {
    if content.chars().count() > COMMENT_PREVIEW_CHARS {
        let cut: String = content.chars().take(COMMENT_PREVIEW_CHARS).collect();
        format!("{cut}...")
    } else {
        content.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::CommentType;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 1, hour, 0, 0).unwrap()
    }

    fn case(status: CaseStatus, assigned: Option<&str>) -> Case {
        Case {
            id: "c1".into(),
            title: "Divorcio".into(),
            description: String::new(),
            client_id: "client-1".into(),
            assigned_lawyer_id: assigned.map(str::to_string),
            specialty_id: None,
            status,
            created_at: at(1),
            updated_at: at(5),
        }
    }

    fn names(id: &str) -> Option<String> {
        match id {
            "client-1" => Some("Ana Paz".into()),
            "lawyer-1" => Some("Luis Rojas".into()),
            _ => None,
        }
    }

    fn comment(id: &str, hour: u32, content: &str) -> Comment {
        Comment {
            id: id.into(),
            case_id: "c1".into(),
            author_id: "lawyer-1".into(),
            content: content.into(),
            comment_type: CommentType::General,
            created_at: at(hour),
        }
    }

    #[test]
    fn open_case_with_nothing_else_has_only_creation() {
        let c = case(CaseStatus::Open, None);
        let events = build_timeline(
            TimelineSources {
                case: &c,
                applications: &[],
                documents: &[],
                comments: &[],
            },
            names,
        );
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, TimelineKind::Creation);
        assert_eq!(events[0].description, "Caso \"Divorcio\" fue creado por Ana Paz");
    }

    #[test]
    fn merges_and_sorts_newest_first() {
        let c = case(CaseStatus::Accepted, Some("lawyer-1"));
        let apps = [
            Application {
                id: "9".into(),
                case_id: "c1".into(),
                lawyer_id: "lawyer-1".into(),
                message: String::new(),
                status: ApplicationStatus::Accepted,
                created_at: None,
            },
            Application {
                id: "10".into(),
                case_id: "c1".into(),
                lawyer_id: "lawyer-2".into(),
                message: String::new(),
                status: ApplicationStatus::Rejected,
                created_at: Some(at(3)),
            },
        ];
        let docs = [Document {
            id: "d1".into(),
            case_id: "c1".into(),
            filename: "acta.pdf".into(),
            file_url: None,
            file_size: 10,
            file_type: "application/pdf".into(),
            uploaded_by: "ghost".into(),
            uploaded_at: at(2),
        }];
        let comments = [comment("k1", 4, "Revisé el acta")];

        let events = build_timeline(
            TimelineSources {
                case: &c,
                applications: &apps,
                documents: &docs,
                comments: &comments,
            },
            names,
        );

        let ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();
        // accepted app falls back to createdAt and ties with creation; insertion order wins
        assert_eq!(
            ids,
            vec!["status-accepted", "comment-k1", "doc-d1", "case-c1", "app-accepted-9"]
        );
        assert_eq!(events[0].description, "El abogado Luis Rojas fue asignado al caso");
        assert_eq!(events[2].description, "\"acta.pdf\" subido por usuario");
        assert_eq!(events[1].description, "Luis Rojas: Revisé el acta");
    }

    #[test]
    fn accepted_without_lawyer_has_no_status_event() {
        let c = case(CaseStatus::Accepted, None);
        let events = build_timeline(
            TimelineSources {
                case: &c,
                applications: &[],
                documents: &[],
                comments: &[],
            },
            names,
        );
        assert!(events.iter().all(|e| e.kind != TimelineKind::Status));
    }

    #[test]
    fn long_comments_are_truncated() {
        let long = "á".repeat(100);
        let out = preview(&long);
        assert_eq!(out.chars().count(), COMMENT_PREVIEW_CHARS + 3);
        assert!(out.ends_with("..."));
        assert_eq!(preview("corto"), "corto");
        assert_eq!(preview(&"x".repeat(80)), "x".repeat(80));
    }
}
