use mongodb::bson::{self, Bson, oid::ObjectId};
use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};
use time::OffsetDateTime;

pub const USERS: &str = "users";
pub const CASES: &str = "cases";

/// Well-known status labels shared by users and cases.
pub mod status {
    pub const ACTIVE: &str = "active";
    pub const APPROVED: &str = "approved";
    pub const PENDING: &str = "pending";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Individual,
    Organization,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Individual => "individual",
            UserType::Organization => "organization",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PostType {
    StudentSeekingTutor,
    TutorSeekingStudent,
}

impl PostType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostType::StudentSeekingTutor => "student-seeking-tutor",
            PostType::TutorSeekingStudent => "tutor-seeking-student",
        }
    }
}

/// A user ready for insertion. The store assigns `_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub user_type: UserType,
    pub tags: Vec<String>,
    pub status: String,
    pub user_code: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub institution_name: Option<String>,
}

/// A user as read back from the store.
///
/// Every field except the id is optional: documents written by other tools
/// may lack any of them, or hold a null or a value of another type, and
/// those read back as `None`/empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub user_type: Option<UserType>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub user_code: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub password: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub institution_name: Option<String>,
}

impl UserRecord {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// A tutoring case ready for insertion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCase {
    pub title: String,
    pub description: String,
    pub status: String,
    pub created_by: ObjectId,
    pub post_type: PostType,
    pub created_at: bson::DateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subjects: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<i32>,
}

/// A case as read back from the store. Same leniency as [`UserRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseRecord {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub created_by: Option<ObjectId>,
    #[serde(default, deserialize_with = "lenient")]
    pub post_type: Option<PostType>,
    #[serde(default, deserialize_with = "lenient")]
    pub created_at: Option<bson::DateTime>,
    #[serde(default, deserialize_with = "lenient")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub subjects: Vec<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub location: Option<String>,
    /// Stored as an int by the seeders but as a double by some clients.
    #[serde(default, deserialize_with = "lenient")]
    pub rate: Option<f64>,
}

/// Reads any BSON value, keeping it only if it decodes as `T`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Bson::deserialize(deserializer)?;
    Ok(bson::from_bson(value).ok())
}

/// Reads an array, dropping elements that do not decode as `T`. A scalar is
/// treated as a one-element array, the way MongoDB matches it; null is empty.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let items = match Bson::deserialize(deserializer)? {
        Bson::Array(items) => items,
        Bson::Null => Vec::new(),
        other => vec![other],
    };

    Ok(items
        .into_iter()
        .filter_map(|item| bson::from_bson(item).ok())
        .collect())
}

/// Converts a timestamp to a BSON datetime, truncating to milliseconds.
pub fn to_bson_datetime(at: OffsetDateTime) -> bson::DateTime {
    let millis = at.unix_timestamp_nanos() / 1_000_000;
    bson::DateTime::from_millis(millis as i64)
}
