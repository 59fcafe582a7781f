//! Augmentative, diminutive and superlative reduction.

use crate::rule::{Rule, RuleSet};

pub static AUGMENTATIVE: RuleSet = RuleSet::new(
    "augmentative",
    &[
        // Superlatives
        Rule::strip("díssimo", 12),
        Rule::strip("abilíssimo", 15),
        Rule::strip("íssimo", 9),
        Rule::strip("ésimo", 8),
        Rule::strip("érrimo", 10),
        // Diminutives
        Rule::strip("zinho", 7),
        Rule::replace("quinho", 10, "c"),
        Rule::strip("uinho", 9),
        Rule::strip("adinho", 9),
        Rule::strip("inho", 7).except(&["caminho", "carinho", "cominho"]),
        // Augmentatives
        Rule::strip("alhão", 9),
        Rule::strip("uça", 7),
        Rule::strip("aço", 7).except(&["antebraço"]),
        Rule::strip("aça", 7),
        Rule::strip("adão", 8),
        Rule::strip("idão", 8),
        Rule::strip("ázio", 7).except(&["topázio"]),
        Rule::strip("arraz", 9),
        Rule::strip("zarrão", 9),
        Rule::strip("arrão", 9),
        Rule::strip("arrão", 8),
        Rule::strip("zão", 5).except(&["coalizão"]),
        Rule::strip("ão", 5).except(&[
            "aptidão", "barão", "bilhão", "camarão", "campeão", "canção", "capitão",
            "chimarrão", "colchão", "coração", "cordão", "cristão", "embrião", "espião",
            "estação", "falcão", "feição", "ficção", "fogão", "folião", "furacão",
            "fusão", "gamão", "glutão", "grotão", "ilusão", "lampião", "leilão", "leão",
            "limão", "macacão", "mamão", "melão", "milhão", "nação", "orgão", "patrão",
            "portão", "quinhão", "rincão", "senão", "tração", "órfão",
        ]),
    ],
);
