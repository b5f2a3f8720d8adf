use crate::types::{Evidence, EvidenceKind, Party, TrialCase, Verdict};

pub static TRIAL_CASES: &[TrialCase] = &[TrialCase {
    title: "The Case of the Missing Algorithm",
    description: "TechCorp accuses former employee Sarah Chen of stealing proprietary AI algorithms worth $2 million before joining competitor InnovateLabs.",
    charge: "Corporate Espionage and Trade Secret Theft",
    evidence: &[
        Evidence {
            id: "e1",
            kind: EvidenceKind::Witness,
            title: "Former Colleague Testimony",
            description: "Alex Kumar testifies that Sarah frequently worked late and accessed sensitive files in her final weeks.",
            credibility: 70,
            relevance: 85,
            side: Party::Prosecution,
        },
        Evidence {
            id: "e2",
            kind: EvidenceKind::Physical,
            title: "USB Drive Found",
            description: "Security found a USB drive in Sarah's desk containing some proprietary code fragments.",
            credibility: 90,
            relevance: 95,
            side: Party::Prosecution,
        },
        Evidence {
            id: "e3",
            kind: EvidenceKind::Document,
            title: "Email Communications",
            description: "Emails between Sarah and InnovateLabs discussing her new role and projects.",
            credibility: 85,
            relevance: 60,
            side: Party::Prosecution,
        },
        Evidence {
            id: "e4",
            kind: EvidenceKind::Expert,
            title: "Digital Forensics Report",
            description: "Expert analysis shows no evidence of unauthorized file transfers from Sarah's work computer.",
            credibility: 95,
            relevance: 90,
            side: Party::Defense,
        },
        Evidence {
            id: "e5",
            kind: EvidenceKind::Witness,
            title: "Sarah's Testimony",
            description: "Sarah explains the USB contained her personal learning projects, not TechCorp property.",
            credibility: 65,
            relevance: 80,
            side: Party::Defense,
        },
        Evidence {
            id: "e6",
            kind: EvidenceKind::Document,
            title: "Employment Contract",
            description: "Sarah's contract clearly defines what constitutes proprietary information vs. general knowledge.",
            credibility: 100,
            relevance: 85,
            side: Party::Defense,
        },
        Evidence {
            id: "e7",
            kind: EvidenceKind::Expert,
            title: "Industry Expert Opinion",
            description: "AI expert testifies that the algorithms in question are based on publicly available research.",
            credibility: 80,
            relevance: 75,
            side: Party::Defense,
        },
    ],
    verdict: Verdict::NotGuilty,
    reasoning: "While suspicious circumstances exist, the digital forensics report and employment contract create reasonable doubt about intent and actual theft.",
}];
