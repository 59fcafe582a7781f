//! Verb suffix reduction, longest conjugation endings first.

use crate::rule::{Rule, RuleSet};

pub static VERB: RuleSet = RuleSet::new(
    "verb",
    &[
        // Pluperfect, conditional and imperfect subjunctive
        Rule::strip("aríamo", 8),
        Rule::strip("ássemo", 8),
        Rule::strip("eríamo", 8),
        Rule::strip("êssemo", 8),
        Rule::strip("iríamo", 9),
        Rule::strip("íssemo", 9),
        Rule::strip("áramo", 7),
        Rule::strip("árei", 6),
        Rule::strip("aremo", 7),
        Rule::strip("ariam", 7),
        Rule::strip("aríei", 7),
        Rule::strip("ássei", 7),
        Rule::strip("assem", 7),
        Rule::strip("ávamo", 7),
        Rule::strip("êramo", 8),
        Rule::strip("eremo", 8),
        Rule::strip("eriam", 8),
        Rule::strip("eríei", 8),
        Rule::strip("êssei", 8),
        Rule::strip("essem", 8),
        Rule::strip("íramo", 8),
        Rule::strip("iremo", 8),
        Rule::strip("iriam", 8),
        Rule::strip("iríei", 8),
        Rule::strip("íssei", 8),
        Rule::strip("issem", 8),
        // Gerunds
        Rule::strip("ando", 6),
        Rule::strip("endo", 7),
        Rule::strip("indo", 7),
        Rule::strip("ondo", 7),
        // Four-letter endings
        Rule::strip("aram", 6),
        Rule::strip("arão", 6),
        Rule::strip("arde", 6),
        Rule::strip("arei", 6),
        Rule::strip("arem", 6),
        Rule::strip("aria", 6),
        Rule::strip("armo", 6),
        Rule::strip("asse", 6),
        Rule::strip("aste", 6),
        Rule::strip("avam", 6).except(&["agravam"]),
        Rule::strip("ávei", 6),
        Rule::strip("eram", 7),
        Rule::strip("erão", 7),
        Rule::strip("erde", 7),
        Rule::strip("erei", 7),
        Rule::strip("êrei", 7),
        Rule::strip("erem", 7),
        Rule::strip("eria", 7),
        Rule::strip("ermo", 7),
        Rule::strip("esse", 7),
        Rule::strip("este", 7).except(&["agreste", "faroeste"]),
        Rule::strip("íamo", 7),
        Rule::strip("iram", 7),
        Rule::strip("íram", 7),
        Rule::strip("irão", 6),
        Rule::strip("irde", 6),
        Rule::strip("irei", 7).except(&["admirei"]),
        Rule::strip("irem", 7).except(&["admirem", "adquirem"]),
        Rule::strip("iria", 7),
        Rule::strip("irmo", 7),
        Rule::strip("isse", 7),
        Rule::strip("iste", 8),
        Rule::strip("iava", 8).except(&["ampliava"]),
        // Three-letter and shorter endings
        Rule::strip("amo", 5),
        Rule::strip("iona", 7),
        Rule::strip("ara", 5).except(&["arara", "prepara"]),
        Rule::strip("ará", 5).except(&["alvará"]),
        Rule::strip("are", 5).except(&["prepare"]),
        Rule::strip("ava", 5).except(&["agrava", "iava"]),
        Rule::strip("emo", 5),
        Rule::strip("era", 6).except(&["acelera", "espera"]),
        Rule::strip("erá", 6),
        Rule::strip("ere", 6).except(&["espere"]),
        Rule::strip("iam", 6).except(&["ampliam", "elogiam", "enfiam", "ensaiam"]),
        Rule::strip("íei", 6),
        Rule::strip("imo", 6).except(&[
            "intimo", "nimo", "queimo", "reprimo", "ximo", "íntimo",
        ]),
        Rule::strip("ira", 6).except(&["fronteira", "sátira"]),
        Rule::strip("ído", 6),
        Rule::strip("irá", 6),
        Rule::strip("tizar", 9).except(&["alfabetizar"]),
        Rule::strip("izar", 9).except(&["organizar"]),
        Rule::strip("itar", 9).except(&["acreditar", "estreitar", "explicitar"]),
        Rule::strip("ire", 6).except(&["admire", "adquire"]),
        Rule::strip("omo", 6),
        Rule::strip("ai", 4),
        Rule::strip("am", 4),
        Rule::strip("ear", 7).except(&["alardear", "nuclear"]),
        Rule::strip("ar", 4).except(&["azar", "bazaar", "patamar"]),
        Rule::strip("uei", 6),
        Rule::replace("uía", 8, "u"),
        Rule::strip("ei", 5),
        Rule::replace("guem", 7, "g"),
        Rule::strip("em", 4).except(&["alem", "virgem"]),
        Rule::strip("er", 4).except(&["pier", "éter"]),
        Rule::strip("eu", 5).except(&["chapeu"]),
        Rule::strip("ia", 5).except(&[
            "acia", "aprecia", "arredia", "cheia", "elogia", "estória", "fatia",
            "lábia", "mania", "polícia", "praia", "ásia",
        ]),
        Rule::strip("ir", 5).except(&["freir"]),
        Rule::strip("iu", 5),
        Rule::strip("eou", 8),
        Rule::strip("ou", 5),
        Rule::strip("i", 4),
    ],
);
