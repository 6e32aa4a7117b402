use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::GrammarError;

/// Broad grammatical category of a dictionary sense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PosCategory {
    Adjective,
    Adverb,
    Copula,
    Conjunction,
    Counter,
    Expression,
    Interjection,
    Noun,
    Numeral,
    Pronoun,
    Particle,
    Verb,
}

impl PosCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            PosCategory::Adjective => "adjective",
            PosCategory::Adverb => "adverb",
            PosCategory::Copula => "copula",
            PosCategory::Conjunction => "conjunction",
            PosCategory::Counter => "counter",
            PosCategory::Expression => "expression",
            PosCategory::Interjection => "interjection",
            PosCategory::Noun => "noun",
            PosCategory::Numeral => "numeral",
            PosCategory::Pronoun => "pronoun",
            PosCategory::Particle => "particle",
            PosCategory::Verb => "verb",
        }
    }
}

impl fmt::Display for PosCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Refinement marker attached to a descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PosTag {
    Irregular,
    Special,
    /// 二段
    ArchaicNidan,
    /// 四段
    ArchaicYodan,
    /// 〜と
    AdverbialTo,
    /// 〜の
    AdjectivalNo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdjectiveInflection {
    I,
    Ku,
    Na,
    Shiku,
    Taru,
}

impl AdjectiveInflection {
    pub fn kana(&self) -> &'static str {
        match self {
            AdjectiveInflection::I => "い",
            AdjectiveInflection::Ku => "く",
            AdjectiveInflection::Na => "な",
            AdjectiveInflection::Shiku => "しく",
            AdjectiveInflection::Taru => "たる",
        }
    }
}

/// Lexicalized adjective exceptions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdjectiveSpecialRoot {
    /// いい/よい
    YoiIi,
    /// なり
    Nari,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerbClass {
    Ichidan,
    Godan,
    Irregular,
}

/// Final mora of a dictionary-form verb, one per u-row consonant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DictionarySuffix {
    #[serde(rename = "ぶ")]
    Bu,
    #[serde(rename = "ぐ")]
    Gu,
    #[serde(rename = "く")]
    Ku,
    #[serde(rename = "む")]
    Mu,
    #[serde(rename = "ぬ")]
    Nu,
    #[serde(rename = "る")]
    Ru,
    #[serde(rename = "す")]
    Su,
    #[serde(rename = "つ")]
    Tsu,
    #[serde(rename = "う")]
    U,
}

impl DictionarySuffix {
    pub const ALL: [DictionarySuffix; 9] = [
        DictionarySuffix::Bu,
        DictionarySuffix::Gu,
        DictionarySuffix::Ku,
        DictionarySuffix::Mu,
        DictionarySuffix::Nu,
        DictionarySuffix::Ru,
        DictionarySuffix::Su,
        DictionarySuffix::Tsu,
        DictionarySuffix::U,
    ];

    pub fn kana(&self) -> &'static str {
        match self {
            DictionarySuffix::Bu => "ぶ",
            DictionarySuffix::Gu => "ぐ",
            DictionarySuffix::Ku => "く",
            DictionarySuffix::Mu => "む",
            DictionarySuffix::Nu => "ぬ",
            DictionarySuffix::Ru => "る",
            DictionarySuffix::Su => "す",
            DictionarySuffix::Tsu => "つ",
            DictionarySuffix::U => "う",
        }
    }

    /// Parse the final mora of a dictionary form
    pub fn from_kana(kana: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|suffix| suffix.kana() == kana)
    }
}

/// Irregular-root families that override or augment the regular rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IrregularRoot {
    #[serde(rename = "する")]
    Suru,
    /// Noun or auxiliary followed by する (〜する)
    #[serde(rename = "~する")]
    NounSuru,
    #[serde(rename = "くる")]
    Kuru,
    #[serde(rename = "くれる")]
    Kureru,
    #[serde(rename = "ある")]
    Aru,
    #[serde(rename = "いく")]
    Iku,
    #[serde(rename = "ずる")]
    Zuru,
}

impl IrregularRoot {
    /// Conjugation class a bare word of this family is classified under
    pub fn native_class(&self) -> VerbClass {
        match self {
            IrregularRoot::Suru | IrregularRoot::NounSuru | IrregularRoot::Kuru => {
                VerbClass::Irregular
            }
            IrregularRoot::Kureru | IrregularRoot::Zuru => VerbClass::Ichidan,
            IrregularRoot::Aru | IrregularRoot::Iku => VerbClass::Godan,
        }
    }
}

/// Flat, uniform grammatical descriptor produced by a POS classifier
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GrammarDescriptor {
    pub category: Option<PosCategory>,
    pub tag: Option<PosTag>,
    pub adjective_inflection: Option<AdjectiveInflection>,
    pub adjective_special_root: Option<AdjectiveSpecialRoot>,
    pub verb_class: Option<VerbClass>,
    pub verb_suffix: Option<DictionarySuffix>,
    pub verb_irregular_root: Option<IrregularRoot>,
    pub is_prefix: bool,
    pub is_suffix: bool,
    pub is_auxiliary: bool,
    /// `None` when the source did not mark transitivity
    pub is_transitive: Option<bool>,
    pub is_pre_noun: bool,
}

impl GrammarDescriptor {
    pub fn with_category(category: PosCategory) -> Self {
        Self {
            category: Some(category),
            ..Self::default()
        }
    }

    pub fn is_verb(&self) -> bool {
        self.category == Some(PosCategory::Verb)
    }

    /// Rewrite the lexicalized-suffix families into forms the generator accepts.
    ///
    /// 〜する joins the する family (its surface must end in する), and ずる
    /// becomes a plain ichidan verb ending in る.
    pub fn normalized_for_conjugation(&self) -> Self {
        let mut pos = self.clone();
        match pos.verb_irregular_root {
            Some(IrregularRoot::NounSuru) => {
                pos.verb_irregular_root = Some(IrregularRoot::Suru);
            }
            Some(IrregularRoot::Zuru) => {
                pos.verb_irregular_root = None;
                pos.verb_class = Some(VerbClass::Ichidan);
                pos.verb_suffix = Some(DictionarySuffix::Ru);
            }
            _ => {}
        }
        pos
    }
}

/// A verb descriptor that satisfies every precondition of conjugation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct VerbGrammarDescriptor {
    class: VerbClass,
    suffix: DictionarySuffix,
    irregular_root: Option<IrregularRoot>,
    tag: Option<PosTag>,
}

impl VerbGrammarDescriptor {
    pub fn class(&self) -> VerbClass {
        self.class
    }

    /// Dictionary suffix; always る for ichidan verbs
    pub fn suffix(&self) -> DictionarySuffix {
        self.suffix
    }

    pub fn irregular_root(&self) -> Option<IrregularRoot> {
        self.irregular_root
    }

    pub fn tag(&self) -> Option<PosTag> {
        self.tag
    }
}

impl TryFrom<&GrammarDescriptor> for VerbGrammarDescriptor {
    type Error = GrammarError;

    fn try_from(pos: &GrammarDescriptor) -> Result<Self, Self::Error> {
        if !pos.is_verb() {
            return Err(GrammarError::NotAVerb(pos.category));
        }

        if let Some(root @ (IrregularRoot::Zuru | IrregularRoot::NounSuru)) =
            pos.verb_irregular_root
        {
            return Err(GrammarError::UnsupportedLexicalRoot(root));
        }

        let class = pos.verb_class.ok_or_else(|| {
            GrammarError::InvalidConjugationClass("missing conjugation class".to_string())
        })?;

        let suffix = match class {
            VerbClass::Ichidan => DictionarySuffix::Ru,
            VerbClass::Godan => pos.verb_suffix.ok_or_else(|| {
                GrammarError::InvalidConjugationClass(
                    "godan verb without a dictionary suffix".to_string(),
                )
            })?,
            VerbClass::Irregular => match pos.verb_irregular_root {
                Some(IrregularRoot::Suru) => DictionarySuffix::Ru,
                Some(IrregularRoot::Kuru) => DictionarySuffix::Ru,
                _ => {
                    return Err(GrammarError::InvalidConjugationClass(
                        "irregular verb needs a する or くる root".to_string(),
                    ));
                }
            },
        };

        Ok(Self {
            class,
            suffix,
            irregular_root: pos.verb_irregular_root,
            tag: pos.tag,
        })
    }
}

impl TryFrom<GrammarDescriptor> for VerbGrammarDescriptor {
    type Error = GrammarError;

    fn try_from(pos: GrammarDescriptor) -> Result<Self, Self::Error> {
        Self::try_from(&pos)
    }
}
