//! Noun and adjective suffix reduction.
//!
//! Several entries only make sense after an earlier stage has run, e.g.
//! `-aç` and `-iç` are what remains of `-ação`/`-ição` once the
//! augmentative stage has stripped `-ão`.

use crate::rule::{Rule, RuleSet};

pub static NOUN: RuleSet = RuleSet::new(
    "noun",
    &[
        Rule::strip("encialista", 18),
        Rule::strip("alista", 11),
        Rule::strip("agem", 7).except(&["carruagem", "chantagem", "coragem", "vantagem"]),
        Rule::strip("iamento", 11),
        Rule::strip("amento", 9).except(&["departamento", "firmamento", "fundamento"]),
        Rule::strip("imento", 9),
        Rule::strip("mento", 11).except(&[
            "complemento", "departamento", "elemento", "firmamento", "instrumento",
        ]),
        Rule::strip("alizado", 11),
        Rule::strip("atizado", 11),
        Rule::strip("tizado", 10).except(&["alfabetizado"]),
        Rule::strip("izado", 10).except(&["organizado", "pulverizado"]),
        Rule::strip("ativo", 9).except(&["pejorativo", "relativo"]),
        Rule::strip("tivo", 8).except(&["relativo"]),
        Rule::strip("ivo", 7).except(&["passivo", "pejorativo", "positivo", "possessivo"]),
        Rule::strip("ado", 5).except(&["grado"]),
        Rule::strip("ido", 6).except(&[
            "consolido", "cândido", "decido", "duvido", "marido", "rápido", "tímido",
        ]),
        Rule::strip("ador", 7),
        Rule::strip("edor", 7),
        Rule::strip("idor", 8).except(&["ouvidor"]),
        Rule::strip("dor", 7).except(&["ouvidor"]),
        Rule::strip("sor", 7).except(&["assessor"]),
        Rule::strip("atoria", 11),
        Rule::strip("tor", 6).except(&[
            "benfeitor", "consultor", "editor", "leitor", "pastor", "produtor",
            "promotor",
        ]),
        Rule::strip("or", 3).except(&[
            "assessor", "autor", "benfeitor", "favor", "melhor", "motor", "pastor",
            "redor", "rigor", "sensor", "tambor", "terior", "tumor",
        ]),
        Rule::strip("abilidade", 14),
        Rule::strip("icionista", 13),
        Rule::strip("cionista", 13),
        Rule::strip("ionista", 12),
        Rule::strip("ionar", 10),
        Rule::strip("ional", 9),
        Rule::strip("ência", 8),
        Rule::strip("ância", 9).except(&["ambulância"]),
        Rule::strip("edouro", 9),
        Rule::replace("queiro", 9, "c"),
        Rule::strip("adeiro", 10).except(&["desfiladeiro"]),
        Rule::strip("eiro", 7).except(&["desfiladeiro", "mosteiro", "pioneiro"]),
        Rule::strip("uoso", 7),
        Rule::strip("oso", 6).except(&["precioso"]),
        Rule::strip("alizaç", 11),
        Rule::strip("atizaç", 11),
        Rule::strip("tizaç", 10),
        Rule::strip("izaç", 9).except(&["organizaç"]),
        Rule::strip("aç", 5).except(&["equaç", "relaç"]),
        Rule::strip("iç", 5).except(&["eleição"]),
        Rule::strip("ário", 7).except(&[
            "aniversário", "armário", "diário", "lionário", "salário", "voluntário",
        ]),
        Rule::strip("atório", 9),
        Rule::strip("rio", 8).except(&[
            "aniversário", "armário", "compulsório", "diário", "lionário", "próprio",
            "salário", "stério", "voluntário",
        ]),
        Rule::strip("ério", 10),
        Rule::strip("ês", 6),
        Rule::strip("eza", 6),
        Rule::strip("ez", 6),
        Rule::strip("esco", 8),
        Rule::strip("ante", 6).except(&[
            "adiante", "elefante", "gigante", "instante", "possante", "restaurante",
        ]),
        Rule::strip("ástico", 10).except(&["eclesiástico"]),
        Rule::strip("alístico", 11),
        Rule::strip("áutico", 10),
        Rule::strip("êutico", 10),
        Rule::strip("tico", 7).except(&[
            "alopático", "artístico", "autêntico", "critico", "crítico", "diagnostico",
            "diagnóstico", "doméstico", "eclesiástico", "eclético", "idêntico",
            "político", "prático",
        ]),
        Rule::strip("ico", 7).except(&["explico", "público", "tico"]),
        Rule::strip("ividade", 12),
        Rule::strip("idade", 9).except(&["autoridade", "comunidade"]),
        Rule::strip("oria", 8).except(&["categoria"]),
        Rule::strip("encial", 11),
        Rule::strip("ista", 8),
        Rule::strip("auta", 9),
        Rule::replace("quice", 9, "c"),
        Rule::strip("ice", 7).except(&["cúmplice"]),
        Rule::strip("íaco", 7),
        Rule::strip("ente", 8).except(&[
            "acrescente", "alimente", "aparente", "freqüente", "oriente", "permanente",
        ]),
        Rule::strip("ense", 9),
        Rule::strip("inal", 7),
        Rule::strip("ano", 7),
        Rule::strip("ável", 6).except(&["afável", "potável", "razoável", "vulnerável"]),
        Rule::strip("ível", 7).except(&["possível"]),
        Rule::strip("vel", 8).except(&["possível", "solúvel", "vulnerável"]),
        Rule::replace("bil", 6, "vel"),
        Rule::strip("ura", 7).except(&["acupuntura", "costura", "imatura"]),
        Rule::strip("ural", 8),
        Rule::strip("ual", 6).except(&["bissexual", "pontual", "virtual", "visual"]),
        Rule::strip("ial", 6),
        Rule::strip("al", 6).except(&[
            "afinal", "animal", "bissexual", "desleal", "estatal", "fiscal", "formal",
            "liberal", "pessoal", "pontual", "postal", "sideral", "sucursal", "virtual",
            "visual",
        ]),
        Rule::strip("alismo", 10),
        Rule::strip("ivismo", 10),
        Rule::strip("ismo", 7).except(&["cinismo"]),
    ],
);
