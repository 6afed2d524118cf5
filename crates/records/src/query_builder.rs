//! Lookup criteria for single-record queries.
//!
//! Each criterion renders a MongoDB filter and can also evaluate itself
//! against a typed record, so in-memory stores answer the same queries.

use std::fmt;

use mongodb::bson::{Document, doc};

use crate::models::{CaseRecord, UserRecord, UserType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserLookup {
    /// The user's `tags` array contains this tag.
    Tag(String),
    UserType(UserType),
    Email(String),
}

impl UserLookup {
    pub fn tag(tag: impl Into<String>) -> Self {
        Self::Tag(tag.into())
    }

    pub fn email(email: impl Into<String>) -> Self {
        Self::Email(email.into())
    }

    pub fn filter(&self) -> Document {
        match self {
            UserLookup::Tag(tag) => doc! { "tags": tag.as_str() },
            UserLookup::UserType(user_type) => doc! { "userType": user_type.as_str() },
            UserLookup::Email(email) => doc! { "email": email.as_str() },
        }
    }

    pub fn matches(&self, user: &UserRecord) -> bool {
        match self {
            UserLookup::Tag(tag) => user.has_tag(tag),
            UserLookup::UserType(user_type) => user.user_type == Some(*user_type),
            UserLookup::Email(email) => user.email.as_deref() == Some(email.as_str()),
        }
    }
}

impl fmt::Display for UserLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserLookup::Tag(tag) => write!(f, "tags={tag}"),
            UserLookup::UserType(user_type) => write!(f, "userType={}", user_type.as_str()),
            UserLookup::Email(email) => write!(f, "email={email}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseLookup {
    Status(String),
}

impl CaseLookup {
    pub fn status(status: impl Into<String>) -> Self {
        Self::Status(status.into())
    }

    pub fn filter(&self) -> Document {
        match self {
            CaseLookup::Status(status) => doc! { "status": status.as_str() },
        }
    }

    pub fn matches(&self, case: &CaseRecord) -> bool {
        match self {
            CaseLookup::Status(status) => case.status.as_deref() == Some(status.as_str()),
        }
    }
}

impl fmt::Display for CaseLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseLookup::Status(status) => write!(f, "status={status}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    fn user(tags: &[&str], user_type: Option<UserType>, email: Option<&str>) -> UserRecord {
        UserRecord {
            id: ObjectId::new(),
            name: None,
            email: email.map(str::to_string),
            phone: None,
            user_type,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            status: None,
            user_code: None,
            password: None,
            institution_name: None,
        }
    }

    #[test]
    fn test_user_filters() {
        assert_eq!(UserLookup::tag("admin").filter(), doc! { "tags": "admin" });
        assert_eq!(
            UserLookup::UserType(UserType::Organization).filter(),
            doc! { "userType": "organization" }
        );
        assert_eq!(
            UserLookup::email("a@example.com").filter(),
            doc! { "email": "a@example.com" }
        );
    }

    #[test]
    fn test_tag_matches_any_element() {
        let u = user(&["student", "admin"], None, None);

        assert!(UserLookup::tag("admin").matches(&u));
        assert!(UserLookup::tag("student").matches(&u));
        assert!(!UserLookup::tag("tutor").matches(&u));
    }

    #[test]
    fn test_missing_fields_never_match() {
        let u = user(&[], None, None);

        assert!(!UserLookup::UserType(UserType::Individual).matches(&u));
        assert!(!UserLookup::email("user@example.com").matches(&u));
    }

    #[test]
    fn test_case_status() {
        let mut case = CaseRecord {
            id: ObjectId::new(),
            title: None,
            description: None,
            status: Some("approved".to_string()),
            created_by: None,
            post_type: None,
            created_at: None,
            category: None,
            subjects: Vec::new(),
            location: None,
            rate: None,
        };

        let lookup = CaseLookup::status("approved");
        assert_eq!(lookup.filter(), doc! { "status": "approved" });
        assert!(lookup.matches(&case));

        case.status = None;
        assert!(!lookup.matches(&case));
    }

    #[test]
    fn test_display() {
        assert_eq!(UserLookup::tag("admin").to_string(), "tags=admin");
        assert_eq!(
            UserLookup::UserType(UserType::Individual).to_string(),
            "userType=individual"
        );
        assert_eq!(CaseLookup::status("pending").to_string(), "status=pending");
    }
}
