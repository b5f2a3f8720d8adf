use crate::types::{BurdenOption, BurdenScenario};

pub static BURDEN_SCENARIOS: &[BurdenScenario] = &[
    BurdenScenario {
        title: "Medical Claims",
        scenario: "Dr. Smith claims that a new herbal supplement can cure diabetes.",
        claim: "The herbal supplement cures diabetes",
        options: &[
            BurdenOption {
                id: "patient",
                text: "Patients must prove it doesn't work",
                is_correct: false,
                explanation: "Patients are not making the claim, so they don't bear the burden of proof.",
            },
            BurdenOption {
                id: "doctor",
                text: "Dr. Smith must prove it works",
                is_correct: true,
                explanation: "The person making the positive claim bears the burden of proof. Dr. Smith must provide evidence.",
            },
            BurdenOption {
                id: "government",
                text: "The government must investigate",
                is_correct: false,
                explanation: "While the government may regulate, the burden of proof for the claim lies with Dr. Smith.",
            },
            BurdenOption {
                id: "equal",
                text: "Both sides must prove their case",
                is_correct: false,
                explanation: "The burden lies primarily with the claimant, not equally distributed.",
            },
        ],
        reasoning: "In logic and law, the burden of proof lies with the person making the claim. Dr. Smith must provide evidence that the supplement works.",
    },
    BurdenScenario {
        title: "Supernatural Claims",
        scenario: "Alex argues that ghosts exist and are responsible for strange noises in their house.",
        claim: "Ghosts exist and are causing the noises",
        options: &[
            BurdenOption {
                id: "alex",
                text: "Alex must prove ghosts exist",
                is_correct: true,
                explanation: "Alex is making the extraordinary claim and must provide extraordinary evidence.",
            },
            BurdenOption {
                id: "skeptics",
                text: "Skeptics must prove ghosts don't exist",
                is_correct: false,
                explanation: "You cannot prove a negative. The burden lies with the person making the positive claim.",
            },
            BurdenOption {
                id: "scientists",
                text: "Scientists must investigate all possibilities",
                is_correct: false,
                explanation: "While scientists may investigate, the burden of proof for the specific claim lies with Alex.",
            },
            BurdenOption {
                id: "shared",
                text: "The burden should be shared equally",
                is_correct: false,
                explanation: "The burden of proof is not typically shared equally - it lies with the claimant.",
            },
        ],
        reasoning: "Extraordinary claims require extraordinary evidence. The person claiming supernatural activity must provide proof.",
    },
    BurdenScenario {
        title: "Criminal Justice",
        scenario: "In a criminal trial, the prosecutor claims the defendant committed murder.",
        claim: "The defendant is guilty of murder",
        options: &[
            BurdenOption {
                id: "defendant",
                text: "The defendant must prove innocence",
                is_correct: false,
                explanation: "In criminal law, the defendant is presumed innocent. They don't need to prove innocence.",
            },
            BurdenOption {
                id: "prosecutor",
                text: "The prosecutor must prove guilt",
                is_correct: true,
                explanation: "The prosecution bears the burden of proving guilt beyond reasonable doubt.",
            },
            BurdenOption {
                id: "jury",
                text: "The jury must decide who to believe",
                is_correct: false,
                explanation: "The jury evaluates evidence, but the burden of proof lies with the prosecution.",
            },
            BurdenOption {
                id: "judge",
                text: "The judge determines burden distribution",
                is_correct: false,
                explanation: "Legal principles, not judicial discretion, determine that prosecution bears the burden.",
            },
        ],
        reasoning: "In criminal cases, the prosecution must prove guilt beyond reasonable doubt. The defendant is presumed innocent.",
    },
    BurdenScenario {
        title: "Product Safety",
        scenario: "A company launches a new cleaning product and claims it's completely safe for children.",
        claim: "The cleaning product is completely safe for children",
        options: &[
            BurdenOption {
                id: "company",
                text: "The company must prove it's safe",
                is_correct: true,
                explanation: "Companies making safety claims about their products must provide evidence to support those claims.",
            },
            BurdenOption {
                id: "customers",
                text: "Customers must prove it's unsafe",
                is_correct: false,
                explanation: "Customers aren't making the safety claim, so they don't bear the initial burden of proof.",
            },
            BurdenOption {
                id: "regulators",
                text: "Government regulators must test it",
                is_correct: false,
                explanation: "While regulators may test, the burden of proof for safety claims lies with the company.",
            },
            BurdenOption {
                id: "independent",
                text: "Independent labs must verify",
                is_correct: false,
                explanation: "The company making the claim bears the burden, though they may use independent verification.",
            },
        ],
        reasoning: "Companies making specific claims about their products must provide evidence to support those claims, especially regarding safety.",
    },
];
