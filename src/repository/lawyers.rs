//! The lawyer directory and its seed data.

use async_trait::async_trait;

use crate::models::Lawyer;

use super::Result;

/// Read-only access to lawyer profiles.
#[async_trait]
pub trait LawyerDirectory: Send + Sync {
    /// Every profile, in listing order.
    async fn list(&self) -> Result<Vec<Lawyer>>;

    /// Look up one profile by identifier.
    async fn get(&self, id: &str) -> Result<Option<Lawyer>>;

    /// The practice-area categories offered as filter pills.
    fn categories(&self) -> &[String];
}

/// In-memory directory over the seeded profiles.
pub struct StaticLawyerDirectory {
    lawyers: Vec<Lawyer>,
    categories: Vec<String>,
}

impl StaticLawyerDirectory {
    pub fn new() -> Self {
        Self {
            lawyers: seed_lawyers(),
            categories: seed_categories(),
        }
    }
}

impl Default for StaticLawyerDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LawyerDirectory for StaticLawyerDirectory {
    async fn list(&self) -> Result<Vec<Lawyer>> {
        Ok(self.lawyers.clone())
    }

    async fn get(&self, id: &str) -> Result<Option<Lawyer>> {
        Ok(self.lawyers.iter().find(|l| l.id == id).cloned())
    }

    fn categories(&self) -> &[String] {
        &self.categories
    }
}

fn seed_categories() -> Vec<String> {
    [
        "Property Law",
        "Criminal Law",
        "Employment Law",
        "Family Law",
        "Corporate Law",
        "Civil Law",
        "Tax Law",
        "Immigration Law",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn seed_lawyers() -> Vec<Lawyer> {
    vec![
        Lawyer {
            id: "1".to_string(),
            name: "Adv. Priya Sharma".to_string(),
            specializations: vec!["Property Law".to_string(), "Civil Law".to_string()],
            experience_years: 12,
            location: "Mumbai".to_string(),
            rating: 4.8,
            reviews: 156,
            hourly_rate: 2500,
            languages: vec!["Hindi".to_string(), "English".to_string(), "Marathi".to_string()],
            availability: "Available today".to_string(),
            description: "Specialized in property disputes and civil matters with over 12 years \
                          of experience in Mumbai courts."
                .to_string(),
        },
        Lawyer {
            id: "2".to_string(),
            name: "Adv. Rajesh Kumar".to_string(),
            specializations: vec!["Criminal Law".to_string()],
            experience_years: 18,
            location: "Delhi".to_string(),
            rating: 4.9,
            reviews: 203,
            hourly_rate: 3000,
            languages: vec!["Hindi".to_string(), "English".to_string(), "Punjabi".to_string()],
            availability: "Available tomorrow".to_string(),
            description: "Expert criminal lawyer with extensive experience in high-profile cases \
                          and court representations."
                .to_string(),
        },
        Lawyer {
            id: "3".to_string(),
            name: "Adv. Meera Patel".to_string(),
            specializations: vec!["Family Law".to_string(), "Civil Law".to_string()],
            experience_years: 8,
            location: "Bangalore".to_string(),
            rating: 4.7,
            reviews: 94,
            hourly_rate: 2000,
            languages: vec!["English".to_string(), "Gujarati".to_string(), "Kannada".to_string()],
            availability: "Available this week".to_string(),
            description: "Compassionate family lawyer specializing in divorce, custody, and \
                          matrimonial disputes."
                .to_string(),
        },
        Lawyer {
            id: "4".to_string(),
            name: "Adv. Suresh Reddy".to_string(),
            specializations: vec!["Employment Law".to_string(), "Corporate Law".to_string()],
            experience_years: 15,
            location: "Hyderabad".to_string(),
            rating: 4.6,
            reviews: 127,
            hourly_rate: 2800,
            languages: vec!["Telugu".to_string(), "English".to_string(), "Hindi".to_string()],
            availability: "Available next week".to_string(),
            description: "Corporate and employment law expert with a track record of successful \
                          labor dispute resolutions."
                .to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeds_four_profiles_in_listing_order() {
        let directory = StaticLawyerDirectory::new();
        let lawyers = directory.list().await.unwrap();
        let ids: Vec<&str> = lawyers.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4"]);
        assert!(lawyers.iter().all(|l| !l.specializations.is_empty()));
    }

    #[tokio::test]
    async fn get_resolves_by_id() {
        let directory = StaticLawyerDirectory::new();
        let lawyer = directory.get("3").await.unwrap().unwrap();
        assert_eq!(lawyer.name, "Adv. Meera Patel");
        assert!(directory.get("99").await.unwrap().is_none());
    }

    #[test]
    fn offers_eight_filter_categories() {
        let directory = StaticLawyerDirectory::new();
        assert_eq!(directory.categories().len(), 8);
    }
}
