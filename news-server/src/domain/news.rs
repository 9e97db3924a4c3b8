use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use crate::domain::error::DomainError;

/// Hard limit on the title column, enforced before every insert.
pub const MAX_TITLE_LEN: usize = 128;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct News {
    pub id: i64,
    pub title: String,
    pub text: String,
    pub created: Option<DateTime<Utc>>,
    pub link: i64,
}

impl fmt::Display for News {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.created {
            Some(created) => write!(f, "{}, {}, {}, {}", self.title, created, self.text, self.link),
            None => write!(f, "{}, -, {}, {}", self.title, self.text, self.link),
        }
    }
}

/// Insertable shape of a news item, before the store has assigned an id.
#[derive(Debug, Clone)]
pub struct NewsDraft {
    pub title: String,
    pub text: String,
    pub created: Option<DateTime<Utc>>,
    pub link: Option<i64>,
}

impl NewsDraft {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            created: None,
            link: None,
        }
    }

    pub fn with_created(mut self, created: DateTime<Utc>) -> Self {
        self.created = Some(created);
        self
    }

    pub fn with_link(mut self, link: i64) -> Self {
        self.link = Some(link);
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.title.is_empty() {
            return Err(DomainError::Validation("title is required".into()));
        }
        if self.title.chars().count() > MAX_TITLE_LEN {
            return Err(DomainError::Validation(format!(
                "title must be at most {MAX_TITLE_LEN} characters"
            )));
        }
        if self.text.is_empty() {
            return Err(DomainError::Validation("text is required".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_defaults_leave_created_and_link_unset() {
        let draft = NewsDraft::new("Launch", "We shipped.");
        assert!(draft.created.is_none());
        assert!(draft.link.is_none());
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn draft_title_at_limit_is_accepted() {
        let draft = NewsDraft::new("x".repeat(MAX_TITLE_LEN), "body");
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn draft_title_over_limit_is_rejected() {
        let draft = NewsDraft::new("x".repeat(MAX_TITLE_LEN + 1), "body");
        assert!(matches!(
            draft.validate(),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn display_uses_placeholder_without_timestamp() {
        let item = News {
            id: 1,
            title: "Launch".into(),
            text: "We shipped.".into(),
            created: None,
            link: 1,
        };
        assert_eq!(item.to_string(), "Launch, -, We shipped., 1");
    }
}
