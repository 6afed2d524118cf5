//! Random tutoring case generation for bulk seeding.

use rand::Rng;
use rand::seq::SliceRandom;
use time::OffsetDateTime;

use records::models::{status, to_bson_datetime};
use records::{NewCase, ObjectId, PostType};

/// Tutoring categories and the subjects offered under each.
const CATEGORIES: &[(&str, &[&str])] = &[
    ("中學科目", &["中學中文", "中學英文", "數學", "通識"]),
    ("小學科目", &["小學中文", "小學英文", "常識", "數學"]),
    ("興趣班", &["畫畫", "鋼琴", "魔術", "舞蹈"]),
];

const LOCATIONS: &[&str] = &["荃灣", "沙田", "九龍灣", "灣仔", "將軍澳"];

/// Configuration for case generation.
#[derive(Debug, Clone)]
pub struct CaseGenConfig {
    /// Hourly rate range in HKD, half-open. An empty range yields its lower
    /// bound.
    pub rate_range: (i32, i32),
    /// Status given to every generated case.
    pub status: String,
}

impl Default for CaseGenConfig {
    fn default() -> Self {
        Self {
            rate_range: (100, 500),
            status: status::PENDING.to_string(),
        }
    }
}

/// Generates demo tutoring cases.
pub struct CaseGenerator {
    config: CaseGenConfig,
}

impl CaseGenerator {
    pub fn new() -> Self {
        Self {
            config: CaseGenConfig::default(),
        }
    }

    pub fn with_config(config: CaseGenConfig) -> Self {
        Self { config }
    }

    /// Generates case number `number` (1-based) created by `creator`.
    pub fn generate(
        &self,
        number: usize,
        creator: ObjectId,
        now: OffsetDateTime,
        rng: &mut impl Rng,
    ) -> NewCase {
        let post_type = if number % 2 == 0 {
            PostType::StudentSeekingTutor
        } else {
            PostType::TutorSeekingStudent
        };

        let (category, subjects) = CATEGORIES[rng.gen_range(0..CATEGORIES.len())];
        let subject = subjects[rng.gen_range(0..subjects.len())];
        let location = LOCATIONS[rng.gen_range(0..LOCATIONS.len())];
        let (min_rate, max_rate) = self.config.rate_range;
        let rate = if min_rate < max_rate {
            rng.gen_range(min_rate..max_rate)
        } else {
            min_rate
        };

        NewCase {
            title: format!("示範個案 #{number}"),
            description: format!("這是一個示範個案 #{number}，希望尋找優質導師。"),
            status: self.config.status.clone(),
            created_by: creator,
            post_type,
            created_at: to_bson_datetime(now),
            category: Some(category.to_string()),
            subjects: vec![subject.to_string()],
            location: Some(location.to_string()),
            rate: Some(rate),
        }
    }

    /// Generates `count` cases, each created by a random member of
    /// `creators`. Returns nothing when there are no creators.
    pub fn generate_batch(
        &self,
        count: usize,
        creators: &[ObjectId],
        now: OffsetDateTime,
        rng: &mut impl Rng,
    ) -> Vec<NewCase> {
        if creators.is_empty() {
            return Vec::new();
        }

        (1..=count)
            .filter_map(|number| {
                let creator = *creators.choose(rng)?;
                Some(self.generate(number, creator, now, rng))
            })
            .collect()
    }
}

impl Default for CaseGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_case() {
        let case_gen = CaseGenerator::new();
        let mut rng = rand::thread_rng();
        let creator = ObjectId::new();
        let case = case_gen.generate(3, creator, OffsetDateTime::now_utc(), &mut rng);

        assert_eq!(case.title, "示範個案 #3");
        assert_eq!(case.description, "這是一個示範個案 #3，希望尋找優質導師。");
        assert_eq!(case.post_type, PostType::TutorSeekingStudent);
        assert_eq!(case.status, "pending");
        assert_eq!(case.created_by, creator);

        let rate = case.rate.unwrap();
        assert!((100..500).contains(&rate));
        assert!(LOCATIONS.contains(&case.location.as_deref().unwrap()));
    }

    #[test]
    fn test_subject_belongs_to_category() {
        let case_gen = CaseGenerator::new();
        let mut rng = rand::thread_rng();
        let cases = case_gen.generate_batch(30, &[ObjectId::new()], OffsetDateTime::now_utc(), &mut rng);

        for case in &cases {
            let category = case.category.as_deref().unwrap();
            let (_, subjects) = CATEGORIES.iter().find(|(c, _)| *c == category).unwrap();
            assert_eq!(case.subjects.len(), 1);
            assert!(subjects.contains(&case.subjects[0].as_str()));
        }
    }

    #[test]
    fn test_batch_alternates_post_type_and_uses_creators() {
        let case_gen = CaseGenerator::new();
        let mut rng = rand::thread_rng();
        let creators: Vec<ObjectId> = (0..3).map(|_| ObjectId::new()).collect();
        let cases = case_gen.generate_batch(4, &creators, OffsetDateTime::now_utc(), &mut rng);

        assert_eq!(cases.len(), 4);
        assert_eq!(cases[0].post_type, PostType::TutorSeekingStudent);
        assert_eq!(cases[1].post_type, PostType::StudentSeekingTutor);
        for case in &cases {
            assert!(creators.contains(&case.created_by));
        }
    }

    #[test]
    fn test_empty_rate_range_uses_lower_bound() {
        let case_gen = CaseGenerator::with_config(CaseGenConfig {
            rate_range: (250, 250),
            ..Default::default()
        });
        let mut rng = rand::thread_rng();

        let case = case_gen.generate(1, ObjectId::new(), OffsetDateTime::now_utc(), &mut rng);
        assert_eq!(case.rate, Some(250));

        let inverted = CaseGenerator::with_config(CaseGenConfig {
            rate_range: (400, 100),
            ..Default::default()
        });
        let case = inverted.generate(2, ObjectId::new(), OffsetDateTime::now_utc(), &mut rng);
        assert_eq!(case.rate, Some(400));
    }

    #[test]
    fn test_batch_without_creators_is_empty() {
        let case_gen = CaseGenerator::new();
        let mut rng = rand::thread_rng();

        assert!(
            case_gen
                .generate_batch(5, &[], OffsetDateTime::now_utc(), &mut rng)
                .is_empty()
        );
    }
}
