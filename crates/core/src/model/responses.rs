/// Reply used when no keyword matches the user's message.
pub const FALLBACK_REPLY: &str = "That's an interesting geography question! I can help you learn about capitals, mountains, oceans, rivers, deserts, continents, countries, islands, and more. What specific topic would you like to explore?";

/// One keyword and the canned reply it triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseEntry {
    pub keyword: &'static str,
    pub reply: &'static str,
}

/// Ordered keyword table for chat mode.
///
/// Lookup is first-match in table order, so the order is a priority list:
/// "capital of the largest country" gets the `capital` reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseTable {
    entries: Vec<ResponseEntry>,
    fallback: &'static str,
}

impl ResponseTable {
    /// The ten built-in geography replies.
    #[must_use]
    pub fn geography() -> Self {
        Self {
            entries: GEOGRAPHY.to_vec(),
            fallback: FALLBACK_REPLY,
        }
    }

    /// Build a table from an explicit ordered list of entries.
    #[must_use]
    pub fn new(entries: Vec<ResponseEntry>, fallback: &'static str) -> Self {
        Self { entries, fallback }
    }

    #[must_use]
    pub fn entries(&self) -> &[ResponseEntry] {
        &self.entries
    }

    /// First entry whose keyword occurs in the lower-cased input.
    #[must_use]
    pub fn find(&self, input: &str) -> Option<&ResponseEntry> {
        let lowered = input.to_lowercase();
        self.entries
            .iter()
            .find(|entry| lowered.contains(entry.keyword))
    }

    /// Reply for the given input, falling back to the generic topic prompt.
    #[must_use]
    pub fn respond(&self, input: &str) -> &'static str {
        self.find(input).map_or(self.fallback, |entry| entry.reply)
    }
}

impl Default for ResponseTable {
    fn default() -> Self {
        Self::geography()
    }
}

const GEOGRAPHY: [ResponseEntry; 10] = [
    ResponseEntry {
        keyword: "capital",
        reply: "Capitals are the designated administrative centers of countries. For example, the capital of France is Paris, the capital of Japan is Tokyo, and the capital of Brazil is Brasília (not Rio de Janeiro or São Paulo!).",
    },
    ResponseEntry {
        keyword: "mountain",
        reply: "Major mountain ranges include the Himalayas (home to Mount Everest, the world's highest peak at 8,849m), the Andes (longest continental mountain range), the Alps, and the Rockies.",
    },
    ResponseEntry {
        keyword: "ocean",
        reply: "Earth has five oceans: Pacific (largest), Atlantic, Indian, Southern (Antarctic), and Arctic (smallest). The Pacific Ocean covers more area than all land on Earth combined!",
    },
    ResponseEntry {
        keyword: "river",
        reply: "The longest rivers include the Nile (6,650 km), Amazon (6,400 km), and Yangtze (6,300 km). The Amazon carries the most water by volume.",
    },
    ResponseEntry {
        keyword: "desert",
        reply: "The world's largest desert is Antarctica (polar desert). The largest hot desert is the Sahara in Africa, spanning 9 million square kilometers.",
    },
    ResponseEntry {
        keyword: "continent",
        reply: "Earth has 7 continents: Asia (largest), Africa, North America, South America, Antarctica, Europe, and Australia/Oceania (smallest).",
    },
    ResponseEntry {
        keyword: "population",
        reply: "The most populous countries are China (~1.4 billion), India (~1.4 billion), USA (~330 million), Indonesia (~275 million), and Pakistan (~230 million).",
    },
    ResponseEntry {
        keyword: "largest country",
        reply: "Russia is the largest country by area (17.1 million km²), nearly twice the size of Canada, the second largest.",
    },
    ResponseEntry {
        keyword: "smallest country",
        reply: "Vatican City is the smallest country at just 0.44 km². Monaco, San Marino, and Liechtenstein are other very small countries.",
    },
    ResponseEntry {
        keyword: "island",
        reply: "Greenland is the world's largest island (excluding continents). Other large islands include New Guinea, Borneo, Madagascar, and Baffin Island.",
    },
];
