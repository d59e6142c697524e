/// Telegram chat id (numeric).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChatId(pub i64);

/// Review status of a homework submission, as reported by the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "approved" => Some(Self::Approved),
            "reviewing" => Some(Self::Reviewing),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// The fixed human-readable verdict for this status. User-facing text,
    /// delivered to the chat as-is.
    pub fn verdict(self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

/// One submission's name and review status, scoped to a single poll
/// iteration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HomeworkRecord {
    pub name: String,
    pub status: HomeworkStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_statuses() {
        assert_eq!(
            HomeworkStatus::parse("approved"),
            Some(HomeworkStatus::Approved)
        );
        assert_eq!(
            HomeworkStatus::parse("reviewing"),
            Some(HomeworkStatus::Reviewing)
        );
        assert_eq!(
            HomeworkStatus::parse("rejected"),
            Some(HomeworkStatus::Rejected)
        );
    }

    #[test]
    fn rejects_unknown_and_case_variants() {
        assert_eq!(HomeworkStatus::parse("Approved"), None);
        assert_eq!(HomeworkStatus::parse("pending"), None);
        assert_eq!(HomeworkStatus::parse(""), None);
    }
}
