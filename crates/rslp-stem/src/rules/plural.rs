//! Plural reduction: `-s` and its irregular Portuguese forms.

use crate::rule::{Rule, RuleSet};

pub static PLURAL: RuleSet = RuleSet::new(
    "plural",
    &[
        Rule::replace("ns", 3, "m"),
        Rule::replace("ões", 6, "ão"),
        Rule::replace("ães", 4, "ão").except(&["mãe"]),
        Rule::replace("ais", 4, "al").except(&["cais", "mais"]),
        Rule::replace("éis", 5, "el"),
        Rule::replace("eis", 5, "el"),
        Rule::replace("óis", 5, "ol"),
        Rule::replace("is", 4, "il").except(&[
            "biquínis", "cais", "crúcis", "depois", "dois", "leis", "lápis", "mais",
            "pois",
        ]),
        Rule::replace("les", 6, "l"),
        Rule::replace("res", 6, "r"),
        Rule::strip("s", 3).except(&[
            "aliás", "ambas", "ambos", "após", "através", "atrás", "cais", "convés",
            "crúcis", "fezes", "férias", "gás", "lápis", "mais", "mas", "menos",
            "messias", "moisés", "país", "pires", "pêsames", "ês",
        ]),
    ],
);
