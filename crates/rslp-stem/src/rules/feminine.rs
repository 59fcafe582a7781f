//! Feminine reduction: maps feminine endings onto their masculine form.

use crate::rule::{Rule, RuleSet};

pub static FEMININE: RuleSet = RuleSet::new(
    "feminine",
    &[
        Rule::replace("ona", 6, "ão").except(&[
            "abandona", "acetona", "carona", "cortisona", "detona", "iona", "lona",
            "maratona", "monótona",
        ]),
        Rule::replace("ora", 6, "or"),
        Rule::replace("na", 6, "no").except(&[
            "abandona", "acetona", "banana", "campana", "caravana", "carona",
            "cortisona", "detona", "grana", "guiana", "iona", "lona", "maratona",
            "monótona", "paisana",
        ]),
        Rule::replace("inha", 7, "inho").except(&["linha", "minha", "rainha"]),
        Rule::replace("esa", 6, "ês").except(&[
            "ilesa", "mesa", "obesa", "pesa", "presa", "princesa", "turquesa",
        ]),
        Rule::replace("osa", 6, "oso").except(&["mucosa", "prosa"]),
        Rule::replace("íaca", 7, "íaco"),
        Rule::replace("ica", 6, "ico").except(&["dica"]),
        Rule::replace("ada", 5, "ado").except(&["pitada"]),
        Rule::replace("ida", 6, "ido").except(&["dúvida", "vida"]),
        Rule::replace("ída", 6, "ido").except(&["recaída", "saída"]),
        Rule::replace("ima", 6, "imo").except(&["vítima"]),
        Rule::replace("iva", 6, "ivo").except(&["oliva", "saliva"]),
        Rule::replace("eira", 7, "eiro").except(&[
            "bandeira", "barreira", "beira", "besteira", "cadeira", "capoeira", "feira",
            "frigideira", "fronteira", "poeira",
        ]),
        Rule::replace("ã", 3, "ão").except(&["amanhã", "arapuã", "divã", "fã"]),
    ],
);
