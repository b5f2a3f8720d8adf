use crate::types::{ArgumentCard, CardType, FlameTopic, Side};

pub static FLAME_TOPICS: &[FlameTopic] = &[FlameTopic {
    title: "Should Schools Ban Homework?",
    description: "Build a compelling argument for either side of this educational debate.",
    cards: &[
        ArgumentCard { id: "1", text: "Homework reinforces classroom learning", card_type: CardType::Claim, strength: 80, side: Side::Pro },
        ArgumentCard { id: "2", text: "Studies show students in Finland excel without traditional homework", card_type: CardType::Evidence, strength: 90, side: Side::Con },
        ArgumentCard { id: "3", text: "Family time is crucial for child development", card_type: CardType::Reasoning, strength: 75, side: Side::Con },
        ArgumentCard { id: "4", text: "Practice makes perfect in academic subjects", card_type: CardType::Reasoning, strength: 70, side: Side::Pro },
        ArgumentCard { id: "5", text: "Homework creates stress and mental health issues", card_type: CardType::Evidence, strength: 85, side: Side::Con },
        ArgumentCard { id: "6", text: "Not all students have equal support at home", card_type: CardType::Counterpoint, strength: 95, side: Side::Con },
        ArgumentCard { id: "7", text: "Homework teaches time management skills", card_type: CardType::Claim, strength: 65, side: Side::Pro },
        ArgumentCard { id: "8", text: "Quality classroom instruction eliminates need for repetition", card_type: CardType::Reasoning, strength: 80, side: Side::Con },
    ],
}];
