use crate::types::{FallacyOption, FallacyQuestion};

const NO_FALLACY: FallacyOption = FallacyOption {
    id: "no-fallacy",
    name: "No Fallacy",
    description: "The argument is logically sound",
};

pub static FALLACY_QUESTIONS: &[FallacyQuestion] = &[
    FallacyQuestion {
        statement: "You can't trust John's opinion on climate change because he drives an SUV.",
        options: &[
            FallacyOption { id: "ad-hominem", name: "Ad Hominem", description: "Attacking the person rather than their argument" },
            FallacyOption { id: "straw-man", name: "Straw Man", description: "Misrepresenting someone's argument" },
            FallacyOption { id: "appeal-authority", name: "Appeal to Authority", description: "Citing irrelevant authority" },
            NO_FALLACY,
        ],
        correct: "ad-hominem",
        explanation: "This is Ad Hominem because it attacks John's personal choices rather than addressing his climate change argument directly.",
    },
    FallacyQuestion {
        statement: "Everyone I know uses iPhone, so Android phones must be inferior.",
        options: &[
            FallacyOption { id: "bandwagon", name: "Bandwagon", description: "Assuming something is true because it's popular" },
            FallacyOption { id: "false-cause", name: "False Cause", description: "Assuming correlation implies causation" },
            FallacyOption { id: "hasty-generalization", name: "Hasty Generalization", description: "Drawing conclusions from insufficient evidence" },
            NO_FALLACY,
        ],
        correct: "bandwagon",
        explanation: "This is the Bandwagon fallacy - assuming Android is inferior just because iPhone is popular in their social circle.",
    },
    FallacyQuestion {
        statement: "We shouldn't ban plastic bags because next they'll ban all packaging materials.",
        options: &[
            FallacyOption { id: "slippery-slope", name: "Slippery Slope", description: "Assuming one action will lead to extreme consequences" },
            FallacyOption { id: "false-dilemma", name: "False Dilemma", description: "Presenting only two options when more exist" },
            FallacyOption { id: "red-herring", name: "Red Herring", description: "Introducing irrelevant information" },
            NO_FALLACY,
        ],
        correct: "slippery-slope",
        explanation: "This is Slippery Slope - assuming that banning plastic bags will inevitably lead to banning all packaging.",
    },
    FallacyQuestion {
        statement: "The new medication is safe because the pharmaceutical company says it has no side effects.",
        options: &[
            FallacyOption { id: "appeal-authority", name: "Appeal to Authority", description: "Citing authority with potential bias" },
            FallacyOption { id: "circular-reasoning", name: "Circular Reasoning", description: "The conclusion is assumed in the premise" },
            FallacyOption { id: "ad-hominem", name: "Ad Hominem", description: "Attacking the person making the argument" },
            NO_FALLACY,
        ],
        correct: "appeal-authority",
        explanation: "This is Appeal to Authority because the pharmaceutical company has a clear financial interest in claiming their product is safe.",
    },
    FallacyQuestion {
        statement: "You're either with us in this fight against corruption, or you're part of the problem.",
        options: &[
            FallacyOption { id: "false-dilemma", name: "False Dilemma", description: "Presenting only two options when more exist" },
            FallacyOption { id: "appeal-emotion", name: "Appeal to Emotion", description: "Using emotions rather than logic" },
            FallacyOption { id: "bandwagon", name: "Bandwagon", description: "Assuming popularity equals correctness" },
            NO_FALLACY,
        ],
        correct: "false-dilemma",
        explanation: "This is False Dilemma - it presents only two extreme positions when there are many nuanced stances on fighting corruption.",
    },
];
