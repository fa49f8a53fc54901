use thiserror::Error;

use crate::model::ids::QuestionId;
use crate::model::question::{QuestionError, QuestionRecord};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BankError {
    #[error("question bank cannot be empty")]
    Empty,

    #[error("question {id} is out of place in the bank")]
    MisplacedId { id: QuestionId },

    #[error(transparent)]
    Question(#[from] QuestionError),
}

/// The fixed, ordered set of quiz questions.
///
/// The bank itself is never reordered; each quiz run receives its own shuffled
/// copy from the services layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    records: Vec<QuestionRecord>,
}

impl QuestionBank {
    /// Build a bank from already validated records.
    ///
    /// # Errors
    ///
    /// Returns `BankError::Empty` for an empty list and `BankError::MisplacedId`
    /// if a record's id does not match its position.
    pub fn new(records: Vec<QuestionRecord>) -> Result<Self, BankError> {
        if records.is_empty() {
            return Err(BankError::Empty);
        }
        if let Some(record) = records
            .iter()
            .enumerate()
            .find(|(slot, record)| record.id().index() != *slot)
            .map(|(_, record)| record)
        {
            return Err(BankError::MisplacedId { id: record.id() });
        }
        Ok(Self { records })
    }

    /// The ten built-in geography questions.
    #[must_use]
    pub fn geography() -> Self {
        let records = GEOGRAPHY
            .iter()
            .enumerate()
            .filter_map(|(slot, seed)| seed.build(slot).ok())
            .collect();
        Self { records }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: QuestionId) -> Option<&QuestionRecord> {
        self.records.get(id.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = &QuestionRecord> {
        self.records.iter()
    }

    #[must_use]
    pub fn records(&self) -> &[QuestionRecord] {
        &self.records
    }
}

struct QuestionSeed {
    prompt: &'static str,
    options: [&'static str; 4],
    correct: usize,
    explanation: &'static str,
}

impl QuestionSeed {
    fn build(&self, slot: usize) -> Result<QuestionRecord, QuestionError> {
        let id = u32::try_from(slot).unwrap_or(u32::MAX);
        QuestionRecord::new(
            QuestionId::new(id),
            self.prompt,
            self.options.iter().map(|opt| (*opt).to_string()).collect(),
            self.correct,
            self.explanation,
        )
    }
}

const GEOGRAPHY: [QuestionSeed; 10] = [
    QuestionSeed {
        prompt: "What is the capital of Australia?",
        options: ["Sydney", "Melbourne", "Canberra", "Brisbane"],
        correct: 2,
        explanation: "Canberra is the capital of Australia. Many people mistakenly think it's Sydney, which is the largest city.",
    },
    QuestionSeed {
        prompt: "Which river is the longest in the world?",
        options: ["Amazon River", "Nile River", "Yangtze River", "Mississippi River"],
        correct: 1,
        explanation: "The Nile River in Africa is the longest river in the world at approximately 6,650 km.",
    },
    QuestionSeed {
        prompt: "Which country has the most time zones?",
        options: ["Russia", "USA", "France", "China"],
        correct: 2,
        explanation: "France has the most time zones (12) due to its overseas territories scattered across the world.",
    },
    QuestionSeed {
        prompt: "What is the smallest country in the world?",
        options: ["Monaco", "Vatican City", "San Marino", "Liechtenstein"],
        correct: 1,
        explanation: "Vatican City is the smallest country in the world with an area of approximately 0.44 square kilometers.",
    },
    QuestionSeed {
        prompt: "Which desert is the largest in the world?",
        options: ["Sahara Desert", "Arabian Desert", "Antarctic Desert", "Gobi Desert"],
        correct: 2,
        explanation: "The Antarctic Desert is the largest desert in the world. Deserts are defined by low precipitation, not temperature!",
    },
    QuestionSeed {
        prompt: "Mount Everest is located in which mountain range?",
        options: ["Alps", "Andes", "Himalayas", "Rockies"],
        correct: 2,
        explanation: "Mount Everest is part of the Himalayan mountain range, on the border between Nepal and Tibet.",
    },
    QuestionSeed {
        prompt: "Which country has the longest coastline?",
        options: ["Australia", "Russia", "Canada", "Indonesia"],
        correct: 2,
        explanation: "Canada has the world's longest coastline at over 202,080 km due to its many islands.",
    },
    QuestionSeed {
        prompt: "What is the deepest point in the ocean?",
        options: ["Tonga Trench", "Java Trench", "Mariana Trench", "Philippine Trench"],
        correct: 2,
        explanation: "The Mariana Trench's Challenger Deep is the deepest known point in Earth's oceans at approximately 11,000 meters deep.",
    },
    QuestionSeed {
        prompt: "Which country is home to the most volcanoes?",
        options: ["Japan", "Indonesia", "Philippines", "United States"],
        correct: 1,
        explanation: "Indonesia has the most volcanoes of any country, with over 130 active volcanoes.",
    },
    QuestionSeed {
        prompt: "What is the largest island in the world?",
        options: ["New Guinea", "Borneo", "Greenland", "Madagascar"],
        correct: 2,
        explanation: "Greenland is the world's largest island (excluding Australia, which is considered a continent).",
    },
];
