//! The fixed sample records used for manual API testing.
//!
//! Every value here is literal so that Postman collections can rely on them.

use records::models::{status, to_bson_datetime};
use records::{NewCase, NewUser, ObjectId, PostType, UserType};
use time::OffsetDateTime;

const SAMPLE_PASSWORD: &str = "hashedpassword";

/// The three sample users, in insertion order.
#[derive(Debug, Clone)]
pub struct SampleUsers {
    /// Individual tagged `admin`.
    pub admin: NewUser,
    pub org: NewUser,
    /// Individual tagged `student`.
    pub normal: NewUser,
}

/// The two sample cases, in insertion order.
#[derive(Debug, Clone)]
pub struct SampleCases {
    pub approved: NewCase,
    pub pending: NewCase,
}

fn user(
    name: &str,
    email: &str,
    phone: &str,
    user_type: UserType,
    tag: &str,
    status: &str,
    user_code: &str,
) -> NewUser {
    NewUser {
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        user_type,
        tags: vec![tag.to_string()],
        status: status.to_string(),
        user_code: user_code.to_string(),
        password: SAMPLE_PASSWORD.to_string(),
        institution_name: None,
    }
}

pub fn sample_users() -> SampleUsers {
    SampleUsers {
        admin: user(
            "Admin User",
            "admin@example.com",
            "90000001",
            UserType::Individual,
            "admin",
            status::ACTIVE,
            "T-00001",
        ),
        org: user(
            "Test Organization",
            "org@example.com",
            "90000002",
            UserType::Organization,
            "institution",
            status::APPROVED,
            "ORG-00001",
        ),
        normal: user(
            "Normal User",
            "user@example.com",
            "90000003",
            UserType::Individual,
            "student",
            status::ACTIVE,
            "U-00001",
        ),
    }
}

/// Builds the sample cases. The approved case belongs to the normal user,
/// the pending one to the organization.
pub fn sample_cases(normal_id: ObjectId, org_id: ObjectId, now: OffsetDateTime) -> SampleCases {
    let created_at = to_bson_datetime(now);

    SampleCases {
        approved: NewCase {
            title: "已審批個案".to_string(),
            description: "這是一個已審批的個案".to_string(),
            status: status::APPROVED.to_string(),
            created_by: normal_id,
            post_type: PostType::StudentSeekingTutor,
            created_at,
            category: None,
            subjects: Vec::new(),
            location: None,
            rate: None,
        },
        pending: NewCase {
            title: "待審批個案".to_string(),
            description: "這是一個待審批的個案".to_string(),
            status: status::PENDING.to_string(),
            created_by: org_id,
            post_type: PostType::TutorSeekingStudent,
            created_at,
            category: None,
            subjects: Vec::new(),
            location: None,
            rate: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_users_cover_lookups() {
        let users = sample_users();

        assert_eq!(users.admin.tags, vec!["admin".to_string()]);
        assert_eq!(users.org.user_type, UserType::Organization);
        assert_eq!(users.normal.user_type, UserType::Individual);
        assert_eq!(users.org.status, "approved");

        assert_eq!(users.admin.user_code, "T-00001");
        assert_eq!(users.org.user_code, "ORG-00001");
        assert_eq!(users.normal.user_code, "U-00001");
    }

    #[test]
    fn test_sample_cases_reference_creators() {
        let normal = ObjectId::new();
        let org = ObjectId::new();
        let cases = sample_cases(normal, org, OffsetDateTime::now_utc());

        assert_eq!(cases.approved.created_by, normal);
        assert_eq!(cases.approved.status, "approved");
        assert_eq!(cases.approved.post_type, PostType::StudentSeekingTutor);
        assert_eq!(cases.pending.created_by, org);
        assert_eq!(cases.pending.status, "pending");
        assert_eq!(cases.pending.post_type, PostType::TutorSeekingStudent);
        assert_eq!(cases.approved.created_at, cases.pending.created_at);
    }
}
