//! Random user generation for bulk seeding.

use fake::{
    Fake,
    faker::{company::en::CompanyName, name::en::Name},
};
use rand::Rng;
use rand::seq::SliceRandom;

use records::models::status;
use records::{NewUser, UserType};

/// Configuration for user generation.
#[derive(Debug, Clone)]
pub struct UserGenConfig {
    /// Every n-th user (by index) is an organization.
    pub organization_every: usize,
    /// Added to the 1-based index when numbering user codes, so codes stay
    /// unique across runs against a non-empty collection.
    pub code_offset: usize,
    /// Password stored on every generated user.
    pub password: String,
    /// First digits of generated 8-digit phone numbers. `9` when empty.
    pub phone_prefixes: Vec<char>,
    /// `example.com` when empty.
    pub email_domains: Vec<String>,
}

impl Default for UserGenConfig {
    fn default() -> Self {
        Self {
            organization_every: 5,
            code_offset: 0,
            password: "hashedpassword123".to_string(),
            phone_prefixes: vec!['5', '6', '9'],
            email_domains: vec![
                "gmail.com".to_string(),
                "yahoo.com.hk".to_string(),
                "outlook.com".to_string(),
                "example.com".to_string(),
            ],
        }
    }
}

/// Generates users shaped like real sign-ups.
pub struct UserGenerator {
    config: UserGenConfig,
}

impl UserGenerator {
    /// Creates a new user generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: UserGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: UserGenConfig) -> Self {
        Self { config }
    }

    /// Generates the user at `index` (0-based).
    pub fn generate(&self, index: usize, rng: &mut impl Rng) -> NewUser {
        let every = self.config.organization_every;
        let is_org = every > 0 && index % every == 0;
        let name: String = Name().fake_with_rng(rng);
        let email = self.generate_email(&name, rng);
        let number = self.config.code_offset + index + 1;

        let (user_type, tags, user_code, institution_name) = if is_org {
            (
                UserType::Organization,
                vec!["institution".to_string()],
                format!("ORG-{number:05}"),
                Some(CompanyName().fake_with_rng::<String, _>(rng)),
            )
        } else {
            (
                UserType::Individual,
                vec!["student".to_string(), "tutor".to_string()],
                format!("U-{number:05}"),
                None,
            )
        };

        NewUser {
            name,
            email,
            phone: self.generate_phone(rng),
            user_type,
            tags,
            status: status::ACTIVE.to_string(),
            user_code,
            password: self.config.password.clone(),
            institution_name,
        }
    }

    /// Generates `count` users with indices `0..count`.
    pub fn generate_batch(&self, count: usize, rng: &mut impl Rng) -> Vec<NewUser> {
        (0..count).map(|i| self.generate(i, rng)).collect()
    }

    /// Generates an email from a name.
    fn generate_email(&self, name: &str, rng: &mut impl Rng) -> String {
        let normalized: String = name
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric() || *c == ' ')
            .collect::<String>()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(".");

        let suffix: u32 = rng.gen_range(1..9999);
        let domain = self
            .config
            .email_domains
            .choose(rng)
            .map_or("example.com", String::as_str);

        format!("{normalized}{suffix}@{domain}")
    }

    fn generate_phone(&self, rng: &mut impl Rng) -> String {
        let prefix = self.config.phone_prefixes.choose(rng).copied().unwrap_or('9');
        let rest: u32 = rng.gen_range(0..10_000_000);
        format!("{prefix}{rest:07}")
    }
}

impl Default for UserGenerator {
    fn default() -> Self {
        Self::new()
    }
}
