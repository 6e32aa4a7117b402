use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

/// Part-of-speech tag as emitted by the Jotoba dictionary service.
///
/// Deserializes from the service's externally tagged JSON, e.g. `"Adverb"`,
/// `{"Noun":"Suffix"}` or `{"Verb":{"Godan":"Ku"}}`. The service encodes the
/// copula as `null`; see [`deserialize_tags`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum RawPosTag {
    Adjective(AdjectiveKind),
    Adverb,
    AdverbTo,
    #[serde(rename = "Auxilary", alias = "Auxiliary")]
    Auxiliary,
    #[serde(rename = "AuxilaryAdj", alias = "AuxiliaryAdj")]
    AuxiliaryAdjective,
    #[serde(rename = "AuxilaryVerb", alias = "AuxiliaryVerb")]
    AuxiliaryVerb,
    #[serde(alias = "Conjuction")]
    Conjunction,
    #[serde(skip)]
    Copula,
    Counter,
    #[serde(rename = "Expr")]
    Expression,
    Interjection,
    Noun(NounKind),
    #[serde(rename = "Numeric")]
    Numeral,
    Pronoun,
    Prefix,
    Particle,
    Suffix,
    Unclassified,
    Verb(VerbKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum AdjectiveKind {
    PreNounVerb,
    Keiyoushi,
    KeiyoushiYoiIi,
    Ku,
    Na,
    Nari,
    No,
    PreNoun,
    Shiku,
    Taru,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum NounKind {
    Normal,
    Prefix,
    Suffix,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum VerbKind {
    Unspecified,
    Ichidan,
    IchidanKureru,
    IchidanZuru,
    Nidan(ArchaicConjugation),
    Yodan(ArchaicConjugation),
    Godan(GodanKind),
    Intransitive,
    Transitive,
    Kuru,
    Irregular(IrregularKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum GodanKind {
    Aru,
    Bu,
    Gu,
    Ku,
    IkuYuku,
    Mu,
    Nu,
    Ru,
    RuIrreg,
    Su,
    Tsu,
    U,
    USpecial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum IrregularKind {
    Nu,
    Ru,
    NounOrAuxSuru,
    Su,
    Suru,
    SuruSpecial,
}

/// Payload of the archaic 二段/四段 markers. Its contents are not used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ArchaicConjugation;

impl<'de> Deserialize<'de> for ArchaicConjugation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        IgnoredAny::deserialize(deserializer).map(|_| ArchaicConjugation)
    }
}

impl RawPosTag {
    /// Every tag in the vocabulary
    pub fn vocabulary() -> Vec<RawPosTag> {
        use AdjectiveKind as A;
        use GodanKind as G;
        use IrregularKind as I;

        let mut tags = vec![
            RawPosTag::Adverb,
            RawPosTag::AdverbTo,
            RawPosTag::Auxiliary,
            RawPosTag::AuxiliaryAdjective,
            RawPosTag::AuxiliaryVerb,
            RawPosTag::Conjunction,
            RawPosTag::Copula,
            RawPosTag::Counter,
            RawPosTag::Expression,
            RawPosTag::Interjection,
            RawPosTag::Numeral,
            RawPosTag::Pronoun,
            RawPosTag::Prefix,
            RawPosTag::Particle,
            RawPosTag::Suffix,
            RawPosTag::Unclassified,
        ];

        tags.extend(
            [
                A::PreNounVerb,
                A::Keiyoushi,
                A::KeiyoushiYoiIi,
                A::Ku,
                A::Na,
                A::Nari,
                A::No,
                A::PreNoun,
                A::Shiku,
                A::Taru,
            ]
            .map(RawPosTag::Adjective),
        );

        tags.extend([NounKind::Normal, NounKind::Prefix, NounKind::Suffix].map(RawPosTag::Noun));

        tags.extend(
            [
                VerbKind::Unspecified,
                VerbKind::Ichidan,
                VerbKind::IchidanKureru,
                VerbKind::IchidanZuru,
                VerbKind::Nidan(ArchaicConjugation),
                VerbKind::Yodan(ArchaicConjugation),
                VerbKind::Intransitive,
                VerbKind::Transitive,
                VerbKind::Kuru,
            ]
            .map(RawPosTag::Verb),
        );

        tags.extend(
            [
                G::Aru,
                G::Bu,
                G::Gu,
                G::Ku,
                G::IkuYuku,
                G::Mu,
                G::Nu,
                G::Ru,
                G::RuIrreg,
                G::Su,
                G::Tsu,
                G::U,
                G::USpecial,
            ]
            .map(|kind| RawPosTag::Verb(VerbKind::Godan(kind))),
        );

        tags.extend(
            [
                I::Nu,
                I::Ru,
                I::NounOrAuxSuru,
                I::Su,
                I::Suru,
                I::SuruSpecial,
            ]
            .map(|kind| RawPosTag::Verb(VerbKind::Irregular(kind))),
        );

        tags
    }
}

/// Deserialize a tag list, reading `null` entries as [`RawPosTag::Copula`]
pub fn deserialize_tags<'de, D>(deserializer: D) -> Result<Vec<RawPosTag>, D::Error>
where
    D: Deserializer<'de>,
{
    let tags = Vec::<Option<RawPosTag>>::deserialize(deserializer)?;
    Ok(tags
        .into_iter()
        .map(|tag| tag.unwrap_or(RawPosTag::Copula))
        .collect())
}

/// Parse a JSON array of tags
pub fn parse_tags(json: &str) -> Result<Vec<RawPosTag>, serde_json::Error> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    let tags = deserialize_tags(&mut deserializer)?;
    deserializer.end()?;
    Ok(tags)
}
