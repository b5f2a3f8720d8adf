use crate::types::{ArenaScenario, ArgumentOption};

pub static ARENA_SCENARIOS: &[ArenaScenario] = &[
    ArenaScenario {
        topic: "School Uniforms",
        context: "The debate is whether schools should require uniforms. You're arguing FOR uniforms.",
        opponent: "Uniforms stifle creativity and self-expression. Students should have the freedom to dress as they choose.",
        options: &[
            ArgumentOption {
                id: "a",
                text: "Uniforms eliminate economic differences and reduce bullying based on clothing.",
                strength: 85,
                feedback: "Excellent! This addresses both equality and bullying prevention - two strong pillars of the pro-uniform argument.",
            },
            ArgumentOption {
                id: "b",
                text: "Students can still express themselves through hairstyles and accessories.",
                strength: 60,
                feedback: "Good point, but this somewhat concedes the opponent's argument about self-expression rather than challenging it directly.",
            },
            ArgumentOption {
                id: "c",
                text: "Creativity should come from academic work, not clothing choices.",
                strength: 45,
                feedback: "Weak response. This dismisses the importance of self-expression entirely, which could alienate judges.",
            },
        ],
    },
    ArenaScenario {
        topic: "Social Media Age Limits",
        context: "Debating whether social media platforms should have stricter age verification. You're arguing AGAINST strict limits.",
        opponent: "Teens are vulnerable to cyberbullying, addiction, and mental health issues from social media use.",
        options: &[
            ArgumentOption {
                id: "a",
                text: "Education about responsible use is better than blanket restrictions that teens will circumvent anyway.",
                strength: 80,
                feedback: "Strong argument! You acknowledge the problem while proposing a more practical solution.",
            },
            ArgumentOption {
                id: "b",
                text: "Social media helps teens connect with others and find communities, especially marginalized groups.",
                strength: 90,
                feedback: "Powerful counter-argument! You've reframed social media as a tool for inclusion and support.",
            },
            ArgumentOption {
                id: "c",
                text: "Parents should monitor their children, not the government or companies.",
                strength: 65,
                feedback: "Reasonable point about parental responsibility, but doesn't fully address the scale of the problem.",
            },
        ],
    },
    ArenaScenario {
        topic: "AI in Education",
        context: "The debate is about using AI tutoring systems in schools. You're arguing FOR AI integration.",
        opponent: "AI tutors cannot replace human teachers' emotional intelligence and adaptability to individual student needs.",
        options: &[
            ArgumentOption {
                id: "a",
                text: "AI doesn't replace teachers but enhances their ability to provide personalized learning at scale.",
                strength: 95,
                feedback: "Brilliant reframe! You've positioned AI as a tool that empowers teachers rather than threatens them.",
            },
            ArgumentOption {
                id: "b",
                text: "AI can provide 24/7 availability for student questions and practice.",
                strength: 70,
                feedback: "Good practical benefit, though it doesn't directly address the emotional intelligence concern.",
            },
            ArgumentOption {
                id: "c",
                text: "Human teachers are expensive and there's a shortage in many areas.",
                strength: 40,
                feedback: "This sounds callous and reduces teachers to mere cost centers. Avoid arguments that devalue human worth.",
            },
        ],
    },
];
