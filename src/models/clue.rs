//! Clue catalogue
//!
//! The hunt is a fixed, ordered sequence of riddles. Ordinals are 1-based
//! and match the position in [`CLUES`].

/// A single riddle step with its expected answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clue {
    /// Position in the hunt, starting at 1
    pub ordinal: u8,
    /// Riddle text shown to the player
    pub prompt: &'static str,
    /// Answer accepted for this clue, compared ignoring case
    pub expected_answer: &'static str,
}

impl Clue {
    /// Check a typed answer against the expected one.
    ///
    /// Surrounding whitespace is ignored and letters are compared without
    /// regard to case.
    pub fn matches(&self, answer: &str) -> bool {
        answer.trim().to_lowercase() == self.expected_answer.to_lowercase()
    }

    /// Whether this is the final clue before the treasure
    pub fn is_last(&self) -> bool {
        usize::from(self.ordinal) == CLUE_COUNT
    }
}

/// Number of clues in the hunt
pub const CLUE_COUNT: usize = 3;

/// All clues in hunt order
pub static CLUES: [Clue; CLUE_COUNT] = [
    Clue {
        ordinal: 1,
        prompt: "Pista 1: Eu tenho cidades, mas não tenho casas. Tenho montanhas, mas não tenho \
                 árvores. Tenho água, mas não tenho peixes. O que eu sou?",
        expected_answer: "mapa",
    },
    Clue {
        ordinal: 2,
        prompt: "Pista 2: Quanto mais você tira, maior eu fico. O que eu sou?",
        expected_answer: "buraco",
    },
    Clue {
        ordinal: 3,
        prompt: "Pista 3: Eu não posso ser visto, não posso ser sentido, não posso ser ouvido e \
                 não posso ser cheirado. Eu estou atrás das estrelas e embaixo das colinas. \
                 Vazio sou o começo e o fim de tudo. O que eu sou?",
        expected_answer: "escuro",
    },
];

/// Look up a clue by its 1-based ordinal
pub fn clue(ordinal: u8) -> Option<&'static Clue> {
    usize::from(ordinal)
        .checked_sub(1)
        .and_then(|index| CLUES.get(index))
}
