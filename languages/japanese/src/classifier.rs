use kotoba_core::grammar::{
    AdjectiveInflection, AdjectiveSpecialRoot, DictionarySuffix, GrammarDescriptor, IrregularRoot,
    PosCategory, PosTag, VerbClass,
};
use kotoba_core::language::PosClassifier;

use crate::pos::{AdjectiveKind, GodanKind, IrregularKind, NounKind, RawPosTag, VerbKind};

/// Normalizes Jotoba part-of-speech tags into grammar descriptors
#[derive(Debug, Default, Clone, Copy)]
pub struct JapanesePosClassifier;

impl JapanesePosClassifier {
    pub fn new() -> Self {
        Self
    }
}

impl PosClassifier for JapanesePosClassifier {
    type Tag = RawPosTag;

    fn classify(&self, tag: &RawPosTag) -> GrammarDescriptor {
        classify(tag)
    }
}

/// Classify one raw tag
pub fn classify(tag: &RawPosTag) -> GrammarDescriptor {
    let category = GrammarDescriptor::with_category;

    match *tag {
        RawPosTag::Unclassified => GrammarDescriptor::default(),
        RawPosTag::Copula => category(PosCategory::Copula),
        RawPosTag::Expression => category(PosCategory::Expression),
        RawPosTag::Conjunction => category(PosCategory::Conjunction),
        RawPosTag::Counter => category(PosCategory::Counter),
        RawPosTag::Interjection => category(PosCategory::Interjection),
        RawPosTag::Numeral => category(PosCategory::Numeral),
        RawPosTag::Pronoun => category(PosCategory::Pronoun),
        RawPosTag::Particle => category(PosCategory::Particle),
        RawPosTag::Adverb => category(PosCategory::Adverb),
        RawPosTag::AdverbTo => GrammarDescriptor {
            tag: Some(PosTag::AdverbialTo),
            ..category(PosCategory::Adverb)
        },
        RawPosTag::Auxiliary => GrammarDescriptor {
            is_auxiliary: true,
            ..GrammarDescriptor::default()
        },
        RawPosTag::AuxiliaryAdjective => GrammarDescriptor {
            is_auxiliary: true,
            ..category(PosCategory::Adjective)
        },
        RawPosTag::AuxiliaryVerb => GrammarDescriptor {
            is_auxiliary: true,
            ..category(PosCategory::Verb)
        },
        RawPosTag::Prefix => GrammarDescriptor {
            is_prefix: true,
            ..GrammarDescriptor::default()
        },
        RawPosTag::Suffix => GrammarDescriptor {
            is_suffix: true,
            ..GrammarDescriptor::default()
        },
        RawPosTag::Noun(kind) => GrammarDescriptor {
            is_prefix: kind == NounKind::Prefix,
            is_suffix: kind == NounKind::Suffix,
            ..category(PosCategory::Noun)
        },
        RawPosTag::Verb(kind) => classify_verb(kind),
        RawPosTag::Adjective(kind) => classify_adjective(kind),
    }
}

fn classify_verb(kind: VerbKind) -> GrammarDescriptor {
    let mut pos = GrammarDescriptor::with_category(PosCategory::Verb);

    match kind {
        VerbKind::Unspecified => {}
        // Valence arrives as its own tag, separate from the conjugation class
        VerbKind::Intransitive => pos.is_transitive = Some(false),
        VerbKind::Transitive => pos.is_transitive = Some(true),
        VerbKind::Kuru => {
            pos.verb_class = Some(VerbClass::Irregular);
            pos.verb_irregular_root = Some(IrregularRoot::Kuru);
        }
        VerbKind::Ichidan => pos.verb_class = Some(VerbClass::Ichidan),
        VerbKind::IchidanKureru => {
            pos.verb_class = Some(VerbClass::Ichidan);
            pos.verb_irregular_root = Some(IrregularRoot::Kureru);
        }
        VerbKind::IchidanZuru => {
            pos.verb_class = Some(VerbClass::Ichidan);
            pos.verb_irregular_root = Some(IrregularRoot::Zuru);
        }
        // Historical forms: classified, never conjugated
        VerbKind::Nidan(_) => pos.tag = Some(PosTag::ArchaicNidan),
        VerbKind::Yodan(_) => pos.tag = Some(PosTag::ArchaicYodan),
        VerbKind::Godan(godan) => {
            let (suffix, root, tag) = godan_row(godan);
            pos.verb_class = Some(VerbClass::Godan);
            pos.verb_suffix = Some(suffix);
            pos.verb_irregular_root = root;
            pos.tag = tag;
        }
        VerbKind::Irregular(irregular) => {
            pos.verb_class = Some(VerbClass::Irregular);
            match irregular {
                IrregularKind::Suru => pos.verb_irregular_root = Some(IrregularRoot::Suru),
                IrregularKind::SuruSpecial => {
                    pos.verb_irregular_root = Some(IrregularRoot::Suru);
                    pos.tag = Some(PosTag::Special);
                }
                IrregularKind::NounOrAuxSuru => {
                    pos.verb_irregular_root = Some(IrregularRoot::NounSuru);
                }
                IrregularKind::Nu => pos.verb_suffix = Some(DictionarySuffix::Nu),
                IrregularKind::Ru => pos.verb_suffix = Some(DictionarySuffix::Ru),
                IrregularKind::Su => pos.verb_suffix = Some(DictionarySuffix::Su),
            }
        }
    }

    pos
}

fn godan_row(kind: GodanKind) -> (DictionarySuffix, Option<IrregularRoot>, Option<PosTag>) {
    match kind {
        GodanKind::Bu => (DictionarySuffix::Bu, None, None),
        GodanKind::Gu => (DictionarySuffix::Gu, None, None),
        GodanKind::Ku => (DictionarySuffix::Ku, None, None),
        GodanKind::IkuYuku => (DictionarySuffix::Ku, Some(IrregularRoot::Iku), None),
        GodanKind::Mu => (DictionarySuffix::Mu, None, None),
        GodanKind::Nu => (DictionarySuffix::Nu, None, None),
        GodanKind::Ru => (DictionarySuffix::Ru, None, None),
        GodanKind::RuIrreg => (DictionarySuffix::Ru, None, Some(PosTag::Irregular)),
        GodanKind::Aru => (DictionarySuffix::Ru, Some(IrregularRoot::Aru), None),
        GodanKind::Su => (DictionarySuffix::Su, None, None),
        GodanKind::Tsu => (DictionarySuffix::Tsu, None, None),
        GodanKind::U => (DictionarySuffix::U, None, None),
        GodanKind::USpecial => (DictionarySuffix::U, None, Some(PosTag::Special)),
    }
}

fn classify_adjective(kind: AdjectiveKind) -> GrammarDescriptor {
    let mut pos = GrammarDescriptor::with_category(PosCategory::Adjective);

    match kind {
        AdjectiveKind::PreNounVerb | AdjectiveKind::PreNoun => pos.is_pre_noun = true,
        AdjectiveKind::Keiyoushi => pos.adjective_inflection = Some(AdjectiveInflection::I),
        AdjectiveKind::KeiyoushiYoiIi => {
            pos.adjective_inflection = Some(AdjectiveInflection::I);
            pos.adjective_special_root = Some(AdjectiveSpecialRoot::YoiIi);
        }
        AdjectiveKind::Na => pos.adjective_inflection = Some(AdjectiveInflection::Na),
        AdjectiveKind::Nari => {
            pos.adjective_inflection = Some(AdjectiveInflection::Na);
            pos.adjective_special_root = Some(AdjectiveSpecialRoot::Nari);
        }
        AdjectiveKind::No => pos.tag = Some(PosTag::AdjectivalNo),
        AdjectiveKind::Ku => pos.adjective_inflection = Some(AdjectiveInflection::Ku),
        AdjectiveKind::Shiku => pos.adjective_inflection = Some(AdjectiveInflection::Shiku),
        AdjectiveKind::Taru => pos.adjective_inflection = Some(AdjectiveInflection::Taru),
    }

    pos
}
