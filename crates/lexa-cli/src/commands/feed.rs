use lexa_api::recommendations::{Accepted, FeedItems, load_feed};
use lexa_core::entities::{Case, LawyerProfile};
use lexa_core::enums::specialty_display_name;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::FeedArgs;
use crate::commands::shared::prompt::Prompt;
use crate::context::AppContext;
use crate::output::output;

/// One feed entry as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct Candidate {
    id: String,
    title: String,
    detail: String,
}

impl From<&Case> for Candidate {
    fn from(case: &Case) -> Self {
        Self {
            id: case.id.clone(),
            title: case.title.clone(),
            detail: case.description.clone(),
        }
    }
}

impl From<&LawyerProfile> for Candidate {
    fn from(lawyer: &LawyerProfile) -> Self {
        let specialties: Vec<&str> = lawyer
            .specialties
            .iter()
            .map(|s| specialty_display_name(s))
            .collect();
        Self {
            id: lawyer.user_id.clone(),
            title: lawyer.full_name.display(),
            detail: specialties.join(", "),
        }
    }
}

#[derive(Debug, Serialize)]
struct FeedListResponse {
    case_id: Option<String>,
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Serialize)]
struct FeedSummary {
    accepted: Vec<String>,
    skipped: usize,
    remaining: usize,
}

fn all_candidates(items: &FeedItems) -> Vec<Candidate> {
    match items {
        FeedItems::Cases(feed) => feed.iter().map(Candidate::from).collect(),
        FeedItems::Lawyers { feed, .. } => feed.iter().map(Candidate::from).collect(),
        FeedItems::Empty => Vec::new(),
    }
}

fn current_candidate(items: &FeedItems) -> Option<Candidate> {
    match items {
        FeedItems::Cases(feed) => feed.current().map(Candidate::from),
        FeedItems::Lawyers { feed, .. } => feed.current().map(Candidate::from),
        FeedItems::Empty => None,
    }
}

fn target_case(items: &FeedItems) -> Option<String> {
    match items {
        FeedItems::Lawyers { case, .. } => Some(case.id.clone()),
        FeedItems::Cases(_) | FeedItems::Empty => None,
    }
}

/// Handle `lexa feed`.
pub async fn handle(args: &FeedArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let viewer = ctx.require_viewer()?;
    let mut items = load_feed(&ctx.client, &viewer).await?;

    if args.list {
        return output(
            &FeedListResponse {
                case_id: target_case(&items),
                candidates: all_candidates(&items),
            },
            flags.format,
        );
    }

    let mut prompt = Prompt::stdin();
    let mut summary = FeedSummary::default();
    while let Some(candidate) = current_candidate(&items) {
        eprintln!(
            "\n({} left) {}\n  {}",
            items.remaining(),
            candidate.title,
            candidate.detail
        );
        let Some(answer) = prompt.ask("[a]ccept / [s]kip / [q]uit: ").await? else {
            break;
        };
        match answer.to_lowercase().as_str() {
            "a" | "accept" => match items.accept(&ctx.client, &viewer).await {
                Ok(Some(Accepted::Application(application))) => {
                    eprintln!("applied to {}", application.case_id);
                    summary.accepted.push(candidate.id);
                }
                Ok(Some(Accepted::Invitation(invitation))) => {
                    eprintln!("invited {}", invitation.lawyer_id);
                    summary.accepted.push(candidate.id);
                }
                Ok(None) => break,
                Err(error @ lexa_api::ApiError::Unauthorized) => return Err(error.into()),
                Err(error) => eprintln!("could not accept: {}", error.user_message()),
            },
            "s" | "skip" => {
                items.skip();
                summary.skipped += 1;
            }
            "q" | "quit" => break,
            other => eprintln!("unknown choice '{other}'"),
        }
    }
    if items.is_empty() && summary.accepted.is_empty() && summary.skipped == 0 {
        eprintln!("nothing to recommend right now");
    }

    summary.remaining = items.remaining();
    output(&summary, flags.format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use lexa_core::entities::{ContactInfo, FullName};
    use lexa_core::enums::CaseStatus;
    use lexa_core::feed::Feed;
    use pretty_assertions::assert_eq;

    fn case(id: &str) -> Case {
        Case {
            id: id.into(),
            title: format!("Caso {id}"),
            description: "Herencia".into(),
            client_id: "c1".into(),
            assigned_lawyer_id: None,
            specialty_id: None,
            status: CaseStatus::Open,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn lawyer(user_id: &str) -> LawyerProfile {
        LawyerProfile {
            id: user_id.into(),
            user_id: user_id.into(),
            full_name: FullName {
                firstname: "Eva".into(),
                lastname: "Luna".into(),
            },
            dni: String::new(),
            contact_info: ContactInfo::default(),
            description: String::new(),
            specialties: vec!["UNKNOWN_CODE".into()],
        }
    }

    #[test]
    fn case_feed_lists_titles() {
        let items = FeedItems::Cases(Feed::new(vec![case("1"), case("2")]));
        let titles: Vec<String> = all_candidates(&items).into_iter().map(|c| c.title).collect();
        assert_eq!(titles, vec!["Caso 1", "Caso 2"]);
        assert_eq!(target_case(&items), None);
    }

    #[test]
    fn lawyer_feed_targets_the_active_case() {
        let items = FeedItems::Lawyers {
            case: case("9"),
            feed: Feed::new(vec![lawyer("l1")]),
        };
        let current = current_candidate(&items).unwrap();
        assert_eq!(current.id, "l1");
        assert_eq!(current.title, "Eva Luna");
        assert_eq!(target_case(&items).as_deref(), Some("9"));
    }

    #[test]
    fn empty_feed_has_no_current() {
        assert!(current_candidate(&FeedItems::Empty).is_none());
        assert!(all_candidates(&FeedItems::Empty).is_empty());
    }
}
