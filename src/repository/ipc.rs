//! The IPC section catalog and its seed data.

use async_trait::async_trait;

use crate::models::IpcSection;

use super::Result;

/// Read-only access to IPC section entries.
#[async_trait]
pub trait IpcCatalog: Send + Sync {
    /// Every section, in authored order.
    async fn list(&self) -> Result<Vec<IpcSection>>;

    /// Look up one entry by its section identifier.
    async fn get(&self, section: &str) -> Result<Option<IpcSection>>;

    /// The offence categories offered as filter pills.
    fn categories(&self) -> &[String];
}

/// In-memory catalog over the seeded sections.
pub struct StaticIpcCatalog {
    sections: Vec<IpcSection>,
    categories: Vec<String>,
}

impl StaticIpcCatalog {
    pub fn new() -> Self {
        Self {
            sections: seed_sections(),
            categories: seed_categories(),
        }
    }
}

impl Default for StaticIpcCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IpcCatalog for StaticIpcCatalog {
    async fn list(&self) -> Result<Vec<IpcSection>> {
        Ok(self.sections.clone())
    }

    async fn get(&self, section: &str) -> Result<Option<IpcSection>> {
        Ok(self.sections.iter().find(|s| s.section == section).cloned())
    }

    fn categories(&self) -> &[String] {
        &self.categories
    }
}

fn seed_categories() -> Vec<String> {
    [
        "Against Person",
        "Against Property",
        "Against State",
        "Against Public Tranquility",
        "Against Human Body",
        "Economic Offences",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn seed_sections() -> Vec<IpcSection> {
    vec![
        IpcSection {
            section: "302".to_string(),
            title: "Murder".to_string(),
            original_text: "Whoever commits murder shall be punished with death, or imprisonment \
                            for life, and shall also be liable to fine."
                .to_string(),
            simplified_text: "If someone intentionally kills another person, they will be punished \
                              with either death penalty or life imprisonment, and may also have to \
                              pay a fine."
                .to_string(),
            punishment: "Death penalty or Life imprisonment + Fine".to_string(),
            category: "Against Person".to_string(),
            examples: vec![
                "Intentionally shooting someone to death".to_string(),
                "Poisoning someone with intent to kill".to_string(),
                "Stabbing someone leading to death".to_string(),
            ],
        },
        IpcSection {
            section: "420".to_string(),
            title: "Cheating and dishonestly inducing delivery of property".to_string(),
            original_text: "Whoever cheats and thereby dishonestly induces the person deceived to \
                            deliver any property to any person, or to make, alter or destroy the \
                            whole or any part of a valuable security, or anything which is signed \
                            or sealed, and which is capable of being converted into a valuable \
                            security, shall be punished with imprisonment of either description \
                            for a term which may extend to seven years, and shall also be liable \
                            to fine."
                .to_string(),
            simplified_text: "If someone cheats another person and tricks them into giving away \
                              property or valuable documents, they can be imprisoned for up to 7 \
                              years and fined."
                .to_string(),
            punishment: "Imprisonment up to 7 years + Fine".to_string(),
            category: "Economic Offences".to_string(),
            examples: vec![
                "Online fraud schemes".to_string(),
                "Fake investment promises".to_string(),
                "Identity theft for financial gain".to_string(),
                "Credit card fraud".to_string(),
            ],
        },
        IpcSection {
            section: "376".to_string(),
            title: "Rape".to_string(),
            original_text: "Whoever commits rape shall be punished with rigorous imprisonment of \
                            either description for a term which shall not be less than ten years, \
                            but which may extend to imprisonment for life, and shall also be \
                            liable to fine."
                .to_string(),
            simplified_text: "Anyone who commits rape will be punished with strict imprisonment \
                              for at least 10 years, which can extend to life imprisonment, and \
                              also pay a fine."
                .to_string(),
            punishment: "Minimum 10 years imprisonment to Life imprisonment + Fine".to_string(),
            category: "Against Person".to_string(),
            examples: vec![
                "Sexual assault without consent".to_string(),
                "Marital rape (in certain circumstances)".to_string(),
                "Gang rape (enhanced punishment)".to_string(),
            ],
        },
        IpcSection {
            section: "379".to_string(),
            title: "Theft".to_string(),
            original_text: "Whoever commits theft shall be punished with imprisonment of either \
                            description for a term which may extend to three years, or with fine, \
                            or with both."
                .to_string(),
            simplified_text: "Anyone who steals something can be imprisoned for up to 3 years, or \
                              fined, or both."
                .to_string(),
            punishment: "Imprisonment up to 3 years or Fine or Both".to_string(),
            category: "Against Property".to_string(),
            examples: vec![
                "Stealing money from someone's wallet".to_string(),
                "Taking someone's mobile phone without permission".to_string(),
                "Shoplifting from a store".to_string(),
            ],
        },
        IpcSection {
            section: "498A".to_string(),
            title: "Husband or relative of husband subjecting woman to cruelty".to_string(),
            original_text: "Whoever, being the husband or the relative of the husband of a woman, \
                            subjects such woman to cruelty shall be punished with imprisonment for \
                            a term which may extend to three years and shall also be liable to \
                            fine."
                .to_string(),
            simplified_text: "If a husband or his relatives are cruel to a woman (wife), they can \
                              be imprisoned for up to 3 years and also fined."
                .to_string(),
            punishment: "Imprisonment up to 3 years + Fine".to_string(),
            category: "Against Person".to_string(),
            examples: vec![
                "Domestic violence by husband".to_string(),
                "Dowry harassment".to_string(),
                "Mental torture by in-laws".to_string(),
            ],
        },
        IpcSection {
            section: "124A".to_string(),
            title: "Sedition".to_string(),
            original_text: "Whoever by words, either spoken or written, or by signs, or by visible \
                            representation, or otherwise, brings or attempts to bring into hatred \
                            or contempt, or excites or attempts to excite disaffection towards the \
                            Government established by law shall be punished with imprisonment for \
                            life, or with imprisonment of either description for a term which may \
                            extend to three years, and shall also be liable to fine."
                .to_string(),
            simplified_text: "Anyone who speaks, writes, or acts in a way to create hatred against \
                              the government or incite people against it can be imprisoned for \
                              life or up to 3 years, and fined."
                .to_string(),
            punishment: "Life imprisonment or up to 3 years imprisonment + Fine".to_string(),
            category: "Against State".to_string(),
            examples: vec![
                "Anti-government speeches inciting violence".to_string(),
                "Inflammatory social media posts against state".to_string(),
                "Publishing seditious material".to_string(),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeds_six_sections_in_authored_order() {
        let catalog = StaticIpcCatalog::new();
        let sections = catalog.list().await.unwrap();
        let ids: Vec<&str> = sections.iter().map(|s| s.section.as_str()).collect();
        assert_eq!(ids, ["302", "420", "376", "379", "498A", "124A"]);
    }

    #[tokio::test]
    async fn get_resolves_by_section_identifier() {
        let catalog = StaticIpcCatalog::new();
        let section = catalog.get("498A").await.unwrap().unwrap();
        assert_eq!(section.category, "Against Person");
        assert!(catalog.get("100").await.unwrap().is_none());
    }

    #[test]
    fn offers_six_filter_categories() {
        let catalog = StaticIpcCatalog::new();
        assert_eq!(catalog.categories().len(), 6);
    }
}
