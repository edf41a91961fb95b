//! Static platform content: the case-process guide, admin records, and
//! headline counters.
//!
//! Unlike the two filterable collections, none of this is searched; it is
//! read-only display data behind one provider so the views stay free of
//! inline literals.

use chrono::NaiveDate;

use crate::models::{CaseStep, CaseTip, CaseTrack, DocumentRecord, PlatformUser, ProcessingStatus};

/// Headline counters shown on the admin panel.
#[derive(Debug, Clone, Copy)]
pub struct PlatformStats {
    pub total_lawyers: u32,
    pub documents_processed: u32,
    pub ipc_sections: u32,
    pub active_users: u32,
}

/// The step sequences and tips behind the case-process guide.
pub struct CaseGuide {
    criminal: Vec<CaseStep>,
    civil: Vec<CaseStep>,
    tips: Vec<CaseTip>,
}

impl CaseGuide {
    pub fn new() -> Self {
        Self {
            criminal: criminal_steps(),
            civil: civil_steps(),
            tips: tips(),
        }
    }

    pub fn track(&self, track: CaseTrack) -> &[CaseStep] {
        match track {
            CaseTrack::Criminal => &self.criminal,
            CaseTrack::Civil => &self.civil,
        }
    }

    pub fn tips(&self) -> &[CaseTip] {
        &self.tips
    }
}

impl Default for CaseGuide {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything the non-filterable views read.
pub struct PlatformContent {
    pub case_guide: CaseGuide,
    users: Vec<PlatformUser>,
    documents: Vec<DocumentRecord>,
    stats: PlatformStats,
}

impl PlatformContent {
    pub fn new() -> Self {
        Self {
            case_guide: CaseGuide::new(),
            users: seed_users(),
            documents: seed_documents(),
            stats: PlatformStats {
                total_lawyers: 24,
                documents_processed: 156,
                ipc_sections: 89,
                active_users: 1234,
            },
        }
    }

    pub fn users(&self) -> &[PlatformUser] {
        &self.users
    }

    pub fn documents(&self) -> &[DocumentRecord] {
        &self.documents
    }

    pub fn stats(&self) -> PlatformStats {
        self.stats
    }
}

impl Default for PlatformContent {
    fn default() -> Self {
        Self::new()
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    // Seed dates are literals; a bad one is a programming error caught by tests.
    NaiveDate::from_ymd_opt(y, m, d).expect("invalid seed date")
}

fn seed_users() -> Vec<PlatformUser> {
    vec![
        PlatformUser {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            joined: date(2024, 1, 15),
            cases: 3,
        },
        PlatformUser {
            name: "Jane Smith".to_string(),
            email: "jane@example.com".to_string(),
            joined: date(2024, 2, 20),
            cases: 1,
        },
        PlatformUser {
            name: "Mike Johnson".to_string(),
            email: "mike@example.com".to_string(),
            joined: date(2024, 3, 10),
            cases: 5,
        },
    ]
}

fn seed_documents() -> Vec<DocumentRecord> {
    vec![
        DocumentRecord {
            title: "Property Agreement".to_string(),
            owner: "John Doe".to_string(),
            uploaded: date(2024, 12, 1),
            status: ProcessingStatus::Processed,
        },
        DocumentRecord {
            title: "Employment Contract".to_string(),
            owner: "Jane Smith".to_string(),
            uploaded: date(2024, 12, 2),
            status: ProcessingStatus::Processing,
        },
        DocumentRecord {
            title: "Lease Agreement".to_string(),
            owner: "Mike Johnson".to_string(),
            uploaded: date(2024, 12, 3),
            status: ProcessingStatus::Pending,
        },
    ]
}

fn step(
    title: &str,
    description: &str,
    duration: &str,
    documents: &[&str],
    completed: bool,
    current: bool,
) -> CaseStep {
    CaseStep {
        title: title.to_string(),
        description: description.to_string(),
        duration: duration.to_string(),
        documents: documents.iter().map(|d| d.to_string()).collect(),
        completed,
        current,
    }
}

fn criminal_steps() -> Vec<CaseStep> {
    vec![
        step(
            "FIR Registration",
            "First Information Report is filed at the police station. This is the first step in \
             criminal proceedings.",
            "Immediate",
            &["FIR Copy", "Identity Proof", "Witness Details"],
            true,
            false,
        ),
        step(
            "Police Investigation",
            "Police investigate the case, collect evidence, record statements, and gather all \
             necessary information.",
            "60-90 days",
            &["Evidence Collection", "Witness Statements", "Site Investigation Report"],
            true,
            false,
        ),
        step(
            "Chargesheet Filing",
            "If evidence is found, police file chargesheet in court. If no evidence, case is \
             closed.",
            "90 days from FIR",
            &["Chargesheet", "Evidence List", "Police Report"],
            false,
            true,
        ),
        step(
            "Court Proceedings",
            "Case goes to appropriate court. Charges are framed and trial begins.",
            "6 months - 2 years",
            &["Court Summons", "Charge Sheet", "Legal Notice"],
            false,
            false,
        ),
        step(
            "Trial",
            "Evidence presentation, witness examination, and arguments by both prosecution and \
             defense.",
            "1-3 years",
            &["Trial Proceedings", "Evidence Documents", "Witness Testimonies"],
            false,
            false,
        ),
        step(
            "Judgment",
            "Court delivers final judgment - conviction or acquittal based on evidence presented.",
            "30 days after trial",
            &["Final Judgment", "Sentencing Order"],
            false,
            false,
        ),
        step(
            "Appeal (if applicable)",
            "If dissatisfied, either party can appeal to higher court within specified time limit.",
            "30-90 days to file appeal",
            &["Appeal Application", "Grounds for Appeal", "Lower Court Records"],
            false,
            false,
        ),
    ]
}

fn civil_steps() -> Vec<CaseStep> {
    vec![
        step(
            "Legal Notice",
            "Send legal notice to the opposing party informing them of the grievance and giving \
             them a chance to resolve the matter.",
            "30 days response time",
            &["Legal Notice", "Proof of Service", "Response (if any)"],
            true,
            false,
        ),
        step(
            "Filing Civil Suit",
            "If no satisfactory response to legal notice, file civil suit in appropriate court \
             with proper jurisdiction.",
            "1-2 weeks",
            &["Plaint", "Supporting Documents", "Court Fees Receipt"],
            true,
            false,
        ),
        step(
            "Court Summons",
            "Court issues summons to defendant. Defendant must appear in court or file written \
             statement.",
            "30 days",
            &["Court Summons", "Service Report", "Written Statement (defendant)"],
            false,
            true,
        ),
        step(
            "Pleadings",
            "Both parties file their pleadings - plaintiff's case and defendant's defense.",
            "60-90 days",
            &["Additional Pleadings", "Counter Claims", "Rejoinder"],
            false,
            false,
        ),
        step(
            "Evidence Stage",
            "Both parties present their evidence, examine witnesses, and submit documents.",
            "6 months - 2 years",
            &["Evidence Documents", "Witness Affidavits", "Expert Reports"],
            false,
            false,
        ),
        step(
            "Arguments",
            "Final arguments by both parties' lawyers based on evidence and legal provisions.",
            "1-3 months",
            &["Written Arguments", "Case Law Citations", "Legal Authorities"],
            false,
            false,
        ),
        step(
            "Judgment & Decree",
            "Court pronounces judgment and passes decree. Winning party gets court order.",
            "30-60 days",
            &["Final Judgment", "Decree", "Cost Order"],
            false,
            false,
        ),
        step(
            "Appeal (if applicable)",
            "Dissatisfied party can file appeal in higher court within limitation period.",
            "30-90 days to file",
            &["Appeal Memo", "Appeal Fee", "Certified Copy of Judgment"],
            false,
            false,
        ),
    ]
}

fn tips() -> Vec<CaseTip> {
    vec![
        CaseTip {
            title: "Document Everything".to_string(),
            description: "Keep copies of all documents, receipts, and correspondence related to \
                          your case."
                .to_string(),
        },
        CaseTip {
            title: "Meet Deadlines".to_string(),
            description: "Always file documents and appear in court on scheduled dates. Missing \
                          deadlines can harm your case."
                .to_string(),
        },
        CaseTip {
            title: "Stay Informed".to_string(),
            description: "Regularly check with your lawyer about case progress and next steps."
                .to_string(),
        },
        CaseTip {
            title: "Be Patient".to_string(),
            description: "Legal proceedings take time. Be prepared for a lengthy process and \
                          multiple court visits."
                .to_string(),
        },
    ]
}
