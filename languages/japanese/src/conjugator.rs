use kotoba_core::conjugation::{ConjugationForm, ConjugationParadigm, FormKind, FormPair};
use kotoba_core::grammar::{DictionarySuffix, IrregularRoot, VerbClass, VerbGrammarDescriptor};
use kotoba_core::language::{Conjugator, Reading};

use crate::kana;

/// Written ending shared by every member of a root family
#[derive(Debug, Clone, Copy)]
struct LexicalEnding {
    kana: &'static str,
    kanji: &'static str,
}

fn lexical_ending(root: IrregularRoot) -> Option<LexicalEnding> {
    let (kana, kanji) = match root {
        IrregularRoot::Kureru => ("くれる", "呉れる"),
        IrregularRoot::Aru => ("ある", "有る"),
        IrregularRoot::Iku => ("いく", "行く"),
        IrregularRoot::Kuru => ("くる", "来る"),
        IrregularRoot::Suru => ("する", "為る"),
        IrregularRoot::NounSuru | IrregularRoot::Zuru => return None,
    };
    Some(LexicalEnding { kana, kanji })
}

/// Cells whose regular rule a root family can replace wholesale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    ShortNegative,
    Potential,
    Passive,
    Causative,
    Imperative,
    ConditionalBa,
}

#[derive(Debug, Clone, Copy)]
enum Replacement {
    Word(&'static str),
    /// The cell's own ending replaces the family ending, e.g. ある → ない
    Ending,
}

struct LexicalOverride {
    slot: Slot,
    root: IrregularRoot,
    replacement: Replacement,
}

/// Consulted before the regular rule of each cell; first match wins
const LEXICAL_OVERRIDES: &[LexicalOverride] = &[
    LexicalOverride {
        slot: Slot::ShortNegative,
        root: IrregularRoot::Aru,
        replacement: Replacement::Ending,
    },
    LexicalOverride {
        slot: Slot::Potential,
        root: IrregularRoot::Suru,
        replacement: Replacement::Word("できる"),
    },
    LexicalOverride {
        slot: Slot::Passive,
        root: IrregularRoot::Suru,
        replacement: Replacement::Word("される"),
    },
    LexicalOverride {
        slot: Slot::Causative,
        root: IrregularRoot::Suru,
        replacement: Replacement::Word("させる"),
    },
    LexicalOverride {
        slot: Slot::Imperative,
        root: IrregularRoot::Kureru,
        replacement: Replacement::Word("くれ"),
    },
    LexicalOverride {
        slot: Slot::ConditionalBa,
        root: IrregularRoot::Suru,
        replacement: Replacement::Word("すれば"),
    },
];

/// How a godan verb attaches an ending
#[derive(Debug, Clone, PartialEq, Eq)]
enum GodanEnding {
    /// Latin ending joined to the row consonant, e.g. "anai" → かない
    Vowel(String),
    /// Latin ending that replaces the whole final mora (onbin), e.g. "ite"
    Whole(String),
}

/// Ending of one cell for each conjugation class
#[derive(Debug, Clone, PartialEq, Eq)]
struct Endings {
    /// Appended literally to ichidan and する roots
    ichidan: String,
    godan: GodanEnding,
    /// Appended to the emptied くる root
    kuru: String,
}

impl Endings {
    /// An ending that godan verbs attach to the い-row and くる to き
    fn plain(ending: &str) -> Self {
        Self {
            ichidan: ending.to_string(),
            godan: GodanEnding::Vowel(format!("i{}", kana::to_latin(ending))),
            kuru: format!("き{ending}"),
        }
    }

    fn new(ichidan: &str, godan: GodanEnding, kuru: &str) -> Self {
        Self {
            ichidan: ichidan.to_string(),
            godan,
            kuru: kuru.to_string(),
        }
    }
}

/// Japanese verb conjugation generator
#[derive(Debug, Default, Clone, Copy)]
pub struct JapaneseConjugator;

impl JapaneseConjugator {
    pub fn new() -> Self {
        Self
    }

    /// Derive the full paradigm of a dictionary-form verb
    pub fn conjugate(
        &self,
        reading: &Reading,
        prefer_kana_form: bool,
        pos: &VerbGrammarDescriptor,
    ) -> ConjugationParadigm {
        let verb = Verb::new(reading, prefer_kana_form, pos);
        tracing::debug!(
            "Conjugating {} (root {:?}, {:?})",
            verb.surface,
            verb.root,
            pos.class()
        );
        verb.paradigm()
    }
}

impl Conjugator for JapaneseConjugator {
    fn conjugate(
        &self,
        reading: &Reading,
        prefer_kana_form: bool,
        pos: &VerbGrammarDescriptor,
    ) -> ConjugationParadigm {
        JapaneseConjugator::conjugate(self, reading, prefer_kana_form, pos)
    }
}

struct Verb<'a> {
    reading: &'a Reading,
    pos: &'a VerbGrammarDescriptor,
    /// Written form being conjugated
    surface: String,
    /// Surface with its final mora (or family ending) removed
    root: String,
}

impl<'a> Verb<'a> {
    fn new(reading: &'a Reading, prefer_kana_form: bool, pos: &'a VerbGrammarDescriptor) -> Self {
        let mut verb = Self {
            reading,
            pos,
            surface: String::new(),
            root: String::new(),
        };

        // 来る's kanji reads ambiguously once its root is stripped
        let kana_only = prefer_kana_form || verb.matches(IrregularRoot::Kuru);
        verb.surface = match reading.kanji.as_deref() {
            Some(kanji) if !kana_only => kanji.to_string(),
            _ => reading.kana.clone(),
        };

        verb.root = if verb.matches(IrregularRoot::Suru) {
            verb.replace_ending(IrregularRoot::Suru, "し")
        } else if verb.matches(IrregularRoot::Kuru) {
            verb.replace_ending(IrregularRoot::Kuru, "")
        } else {
            let mut root = verb.surface.clone();
            root.pop();
            root
        };

        verb
    }

    /// Whether the verb belongs to a root family, by descriptor or by exact word
    fn matches(&self, root: IrregularRoot) -> bool {
        if self.pos.irregular_root() == Some(root) {
            return true;
        }

        let Some(ending) = lexical_ending(root) else {
            return false;
        };

        root.native_class() == self.pos.class()
            && (self.reading.kana == ending.kana
                || self.reading.kanji.as_deref() == Some(ending.kanji))
    }

    /// Swap the family ending at the end of the surface for `replacement`
    fn replace_ending(&self, root: IrregularRoot, replacement: &str) -> String {
        let Some(ending) = lexical_ending(root) else {
            return self.surface.clone();
        };

        [ending.kana, ending.kanji]
            .into_iter()
            .find_map(|end| self.surface.strip_suffix(end))
            .map(|stem| format!("{stem}{replacement}"))
            .unwrap_or_else(|| self.surface.clone())
    }

    fn lexical_override(&self, slot: Slot, ending: &str) -> Option<String> {
        let found = LEXICAL_OVERRIDES
            .iter()
            .find(|o| o.slot == slot && self.matches(o.root))?;

        let replacement = match found.replacement {
            Replacement::Word(word) => word,
            Replacement::Ending => ending,
        };
        tracing::debug!("Lexical override {:?} for {}: {}", slot, self.surface, replacement);
        Some(self.replace_ending(found.root, replacement))
    }

    /// Root plus the class-specific ending
    fn inflect(&self, endings: &Endings) -> String {
        let ending = match self.pos.class() {
            VerbClass::Godan => match &endings.godan {
                GodanEnding::Vowel(latin) => {
                    kana::to_kana(&kana::replace_vowel(self.pos.suffix().kana(), latin))
                }
                GodanEnding::Whole(latin) => kana::to_kana(latin),
            },
            VerbClass::Ichidan => endings.ichidan.clone(),
            VerbClass::Irregular if self.matches(IrregularRoot::Suru) => endings.ichidan.clone(),
            VerbClass::Irregular => endings.kuru.clone(),
        };
        format!("{}{}", self.root, ending)
    }

    fn inflect_or_override(&self, slot: Slot, endings: &Endings) -> String {
        self.lexical_override(slot, &endings.ichidan)
            .unwrap_or_else(|| self.inflect(endings))
    }

    /// あ-row ending; the う row is spelled with わ
    fn a_row(&self, rest: &str) -> GodanEnding {
        let w = if self.pos.suffix() == DictionarySuffix::U {
            "w"
        } else {
            ""
        };
        GodanEnding::Vowel(format!("{w}a{rest}"))
    }

    /// Negative built on the あ-row stem, e.g. ない, なかった
    fn short_negative(&self, ending: &str) -> String {
        let endings = Endings::new(
            ending,
            self.a_row(&kana::to_latin(ending)),
            &format!("こ{ending}"),
        );
        self.inflect_or_override(Slot::ShortNegative, &endings)
    }

    /// て/た forms with the godan sound changes
    fn te_like(&self, ending: &str) -> String {
        let latin = kana::to_latin(ending);
        let consonant = &latin[..1];

        let godan = match self.pos.suffix() {
            _ if self.matches(IrregularRoot::Iku) => format!("{consonant}{latin}"),
            DictionarySuffix::U | DictionarySuffix::Tsu | DictionarySuffix::Ru => {
                format!("{consonant}{latin}")
            }
            DictionarySuffix::Nu | DictionarySuffix::Bu | DictionarySuffix::Mu => {
                format!("n{}", kana::add_dakuten(&latin))
            }
            DictionarySuffix::Ku => format!("i{latin}"),
            DictionarySuffix::Gu => format!("i{}", kana::add_dakuten(&latin)),
            DictionarySuffix::Su => format!("shi{latin}"),
        };

        self.inflect(&Endings::new(
            ending,
            GodanEnding::Whole(godan),
            &format!("き{ending}"),
        ))
    }

    /// Potential, passive and causative share one derivation from the
    /// informal positive
    fn derived(&self, kind: FormKind, slot: Slot, endings: Endings) -> ConjugationForm {
        let short = self.inflect_or_override(slot, &endings);
        ConjugationForm::new(
            kind,
            Some(FormPair::new(
                replace_trailing_ru(&short, "ます"),
                replace_trailing_ru(&short, "ません"),
            )),
            Some(FormPair::new(
                short.clone(),
                replace_trailing_ru(&short, "ない"),
            )),
        )
    }

    fn paradigm(&self) -> ConjugationParadigm {
        let present = ConjugationForm::new(
            FormKind::Present,
            Some(FormPair::new(
                self.inflect(&Endings::plain("ます")),
                self.inflect(&Endings::plain("ません")),
            )),
            Some(FormPair::new(
                self.surface.clone(),
                self.short_negative("ない"),
            )),
        );

        let past_informal = FormPair::new(self.te_like("た"), self.short_negative("なかった"));
        let past = ConjugationForm::new(
            FormKind::Past,
            Some(FormPair::new(
                self.inflect(&Endings::plain("ました")),
                self.inflect(&Endings::plain("ませんでした")),
            )),
            Some(past_informal.clone()),
        );

        let te = ConjugationForm::new(
            FormKind::TeForm,
            Some(FormPair::new(
                self.te_like("て"),
                self.short_negative("なくて"),
            )),
            None,
        );

        // The plain よう form is filed under formal, ましょう under informal
        let volitional = ConjugationForm::new(
            FormKind::Volitional,
            Some(FormPair::positive_only(self.inflect(&Endings::new(
                "よう",
                GodanEnding::Vowel("ou".to_string()),
                "こよう",
            )))),
            Some(FormPair::positive_only(
                self.inflect(&Endings::plain("ましょう")),
            )),
        );

        let potential = self.derived(
            FormKind::Potential,
            Slot::Potential,
            Endings::new("られる", GodanEnding::Vowel("eru".to_string()), "こられる"),
        );

        let passive = self.derived(
            FormKind::Passive,
            Slot::Passive,
            Endings::new("られる", self.a_row("reru"), "こられる"),
        );

        let causative = self.derived(
            FormKind::Causative,
            Slot::Causative,
            Endings::new("させる", self.a_row("seru"), "こさせる"),
        );

        let imperative = ConjugationForm::new(
            FormKind::Imperative,
            None,
            Some(FormPair::new(
                self.inflect_or_override(
                    Slot::Imperative,
                    &Endings::new("ろ", GodanEnding::Vowel("e".to_string()), "こい"),
                ),
                format!("{}な", self.surface),
            )),
        );

        let conditional = ConjugationForm::new(
            FormKind::ConditionalBa,
            Some(FormPair::new(
                self.inflect_or_override(
                    Slot::ConditionalBa,
                    &Endings::new("れば", GodanEnding::Vowel("eba".to_string()), "くれば"),
                ),
                self.short_negative("なければ"),
            )),
            None,
        );

        let conditional_tara = ConjugationForm::new(
            FormKind::ConditionalTara,
            None,
            Some(FormPair {
                positive: format!("{}ら", past_informal.positive),
                negative: past_informal.negative.map(|negative| format!("{negative}ら")),
            }),
        );

        ConjugationParadigm::new(vec![
            present,
            past,
            te,
            volitional,
            potential,
            passive,
            causative,
            imperative,
            conditional,
            conditional_tara,
        ])
    }
}

fn replace_trailing_ru(word: &str, replacement: &str) -> String {
    match word.strip_suffix('る') {
        Some(stem) => format!("{stem}{replacement}"),
        None => word.to_string(),
    }
}
