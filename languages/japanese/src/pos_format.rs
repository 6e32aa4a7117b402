use kotoba_config::pos_display::PosDisplayConfig;
use kotoba_core::grammar::{GrammarDescriptor, PosCategory, PosTag, VerbClass};
use serde::Serialize;

/// One display row: a category label and its comma-joined properties
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PosSummary {
    pub label: String,
    pub properties: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Group {
    Category(PosCategory),
    Auxiliary,
    Prefix,
    Suffix,
}

impl Group {
    fn label(&self, shorten: bool) -> &'static str {
        match (self, shorten) {
            (Group::Category(category), false) => category.as_str(),
            (Group::Category(category), true) => category_abbreviation(*category),
            (Group::Auxiliary, false) => "auxiliary",
            (Group::Auxiliary, true) => "aux.",
            (Group::Prefix, _) => "prefix",
            (Group::Suffix, _) => "suffix",
        }
    }
}

fn category_abbreviation(category: PosCategory) -> &'static str {
    match category {
        PosCategory::Adjective => "adj.",
        PosCategory::Adverb => "adv.",
        PosCategory::Copula => "copula",
        PosCategory::Conjunction => "conj.",
        PosCategory::Counter => "ctr.",
        PosCategory::Expression => "expr.",
        PosCategory::Interjection => "interj.",
        PosCategory::Noun => "n.",
        PosCategory::Numeral => "num.",
        PosCategory::Pronoun => "pron.",
        PosCategory::Particle => "part.",
        PosCategory::Verb => "v.",
    }
}

fn verb_class_label(class: VerbClass) -> &'static str {
    match class {
        VerbClass::Ichidan => "る",
        VerbClass::Godan => "う",
        VerbClass::Irregular => IRREGULAR,
    }
}

fn tag_label(tag: PosTag) -> &'static str {
    match tag {
        PosTag::Irregular => IRREGULAR,
        PosTag::Special => "spec.",
        PosTag::ArchaicNidan => "二段",
        PosTag::ArchaicYodan => "四段",
        PosTag::AdverbialTo => "〜と",
        PosTag::AdjectivalNo => "〜の",
    }
}

const IRREGULAR: &str = "irreg.";

const SUBTYPE: usize = 0;
const VALENCE: usize = 1;
const AUXILIARY: usize = 2;
const AFFIX: usize = 3;
const TAG: usize = 4;

#[derive(Debug, Default)]
struct Properties([Vec<&'static str>; 5]);

impl Properties {
    fn push(&mut self, slot: usize, value: Option<&'static str>) {
        if let Some(value) = value {
            if !self.0[slot].contains(&value) {
                self.0[slot].push(value);
            }
        }
    }

    fn join(&self) -> String {
        self.0.concat().join(", ")
    }
}

/// Summarize the descriptors of one sense for display
pub fn describe(descriptors: &[GrammarDescriptor], config: &PosDisplayConfig) -> Vec<PosSummary> {
    let mut groups: Vec<(Group, Properties)> = Vec::new();

    for pos in descriptors {
        let Some(category) = pos.category else {
            for (flag, group) in [
                (pos.is_auxiliary, Group::Auxiliary),
                (pos.is_prefix, Group::Prefix),
                (pos.is_suffix, Group::Suffix),
            ] {
                if flag && !groups.iter().any(|(g, _)| *g == group) {
                    groups.push((group, Properties::default()));
                }
            }
            continue;
        };

        let group = Group::Category(category);
        let index = match groups.iter().position(|(g, _)| *g == group) {
            Some(index) => index,
            None => {
                groups.push((group, Properties::default()));
                groups.len() - 1
            }
        };
        let props = &mut groups[index].1;

        match category {
            PosCategory::Verb => {
                props.push(SUBTYPE, pos.verb_class.map(verb_class_label));
                props.push(
                    VALENCE,
                    pos.is_transitive
                        .map(|transitive| if transitive { "trans." } else { "intrans." }),
                );
            }
            PosCategory::Adjective => {
                props.push(SUBTYPE, pos.adjective_inflection.map(|i| i.kana()));
                props.push(VALENCE, pos.is_pre_noun.then_some("pre-noun"));
            }
            _ => {}
        }

        props.push(AUXILIARY, pos.is_auxiliary.then_some("aux."));
        let affix = if pos.is_prefix {
            Some("prefix")
        } else if pos.is_suffix {
            Some("suffix")
        } else {
            None
        };
        props.push(AFFIX, affix);
        props.push(TAG, pos.tag.map(tag_label));
    }

    groups
        .into_iter()
        .map(|(group, mut props)| {
            if group == Group::Category(PosCategory::Verb) {
                let valence = &mut props.0[VALENCE];
                if valence.contains(&"trans.") && valence.contains(&"intrans.") {
                    valence.clear();
                }
            }

            let mut label = group.label(config.shorten).to_string();
            if config.prefix {
                let subtype = std::mem::take(&mut props.0[SUBTYPE]);
                if let Some(last) = subtype.last() {
                    let separator = if *last == IRREGULAR { " " } else { "-" };
                    label = format!("{}{}{}", subtype.join("/"), separator, label);
                }
            }

            PosSummary {
                label,
                properties: props.join(),
            }
        })
        .collect()
}
