//! Human-readable labels for the tags offered when entering a word by hand.

use crate::pos::{
    AdjectiveKind, ArchaicConjugation, GodanKind, IrregularKind, NounKind, RawPosTag, VerbKind,
};

const fn adjective(kind: AdjectiveKind) -> RawPosTag {
    RawPosTag::Adjective(kind)
}

const fn noun(kind: NounKind) -> RawPosTag {
    RawPosTag::Noun(kind)
}

const fn verb(kind: VerbKind) -> RawPosTag {
    RawPosTag::Verb(kind)
}

const fn godan(kind: GodanKind) -> RawPosTag {
    RawPosTag::Verb(VerbKind::Godan(kind))
}

const fn irregular(kind: IrregularKind) -> RawPosTag {
    RawPosTag::Verb(VerbKind::Irregular(kind))
}

const CUSTOM_POS: &[(&str, RawPosTag)] = &[
    ("Pre-Noun Verb", adjective(AdjectiveKind::PreNounVerb)),
    ("い-Adjective", adjective(AdjectiveKind::Keiyoushi)),
    ("い-Adjective (いい/よい)", adjective(AdjectiveKind::KeiyoushiYoiIi)),
    ("く-Adjective", adjective(AdjectiveKind::Ku)),
    ("な-Adjective", adjective(AdjectiveKind::Na)),
    ("Adjective (なり)", adjective(AdjectiveKind::Nari)),
    ("Adjective (〜の)", adjective(AdjectiveKind::No)),
    ("Pre-Noun Adjective", adjective(AdjectiveKind::PreNoun)),
    ("しく-Adjective", adjective(AdjectiveKind::Shiku)),
    ("たる-Adjective", adjective(AdjectiveKind::Taru)),
    ("Adverb", RawPosTag::Adverb),
    ("Adverb (〜と)", RawPosTag::AdverbTo),
    ("Auxiliary", RawPosTag::Auxiliary),
    ("Auxiliary Adjective", RawPosTag::AuxiliaryAdjective),
    ("Auxiliary Verb", RawPosTag::AuxiliaryVerb),
    ("Conjunction", RawPosTag::Conjunction),
    ("Counter", RawPosTag::Counter),
    ("Expression", RawPosTag::Expression),
    ("Interjection", RawPosTag::Interjection),
    ("Noun", noun(NounKind::Normal)),
    ("Noun (Prefix)", noun(NounKind::Prefix)),
    ("Noun (Suffix)", noun(NounKind::Suffix)),
    ("Numeric", RawPosTag::Numeral),
    ("Pronoun", RawPosTag::Pronoun),
    ("Prefix", RawPosTag::Prefix),
    ("Particle", RawPosTag::Particle),
    ("Suffix", RawPosTag::Suffix),
    ("る-Verb", verb(VerbKind::Ichidan)),
    ("る-Verb (くれる)", verb(VerbKind::IchidanKureru)),
    ("Verb (二段)", verb(VerbKind::Nidan(ArchaicConjugation))),
    ("Verb (四段)", verb(VerbKind::Yodan(ArchaicConjugation))),
    ("う-Verb", godan(GodanKind::U)),
    ("う-Verb (ある)", godan(GodanKind::Aru)),
    ("う-Verb (いく)", godan(GodanKind::IkuYuku)),
    ("Verb (Intransitive)", verb(VerbKind::Intransitive)),
    ("Irregular Verb (くる)", verb(VerbKind::Kuru)),
    ("Irregular Verb (する)", irregular(IrregularKind::Suru)),
    ("Irregular Verb (〜する)", irregular(IrregularKind::NounOrAuxSuru)),
    ("Verb (Transitive)", verb(VerbKind::Transitive)),
    ("る-Verb (ずる)", verb(VerbKind::IchidanZuru)),
];

/// Labels shown before the rest
pub const COMMON_LABELS: &[&str] = &[
    "い-Adjective",
    "な-Adjective",
    "Adverb",
    "Noun",
    "る-Verb",
    "う-Verb",
    "Irregular Verb (する)",
    "Irregular Verb (〜する)",
    "Verb (Intransitive)",
    "Verb (Transitive)",
];

/// Tag for a custom label
pub fn from_label(label: &str) -> Option<RawPosTag> {
    CUSTOM_POS
        .iter()
        .find(|(l, _)| *l == label)
        .map(|(_, tag)| *tag)
}

/// All labels, common ones first
pub fn labels() -> Vec<&'static str> {
    let mut labels = COMMON_LABELS.to_vec();
    labels.extend(
        CUSTOM_POS
            .iter()
            .map(|(label, _)| *label)
            .filter(|label| !COMMON_LABELS.contains(label)),
    );
    labels
}
