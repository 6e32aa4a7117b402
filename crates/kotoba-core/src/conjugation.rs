use serde::Serialize;

/// The named forms of a verb paradigm, in table order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormKind {
    Present,
    Past,
    TeForm,
    Volitional,
    Potential,
    Passive,
    Causative,
    Imperative,
    ConditionalBa,
    ConditionalTara,
}

impl FormKind {
    pub const ALL: [FormKind; 10] = [
        FormKind::Present,
        FormKind::Past,
        FormKind::TeForm,
        FormKind::Volitional,
        FormKind::Potential,
        FormKind::Passive,
        FormKind::Causative,
        FormKind::Imperative,
        FormKind::ConditionalBa,
        FormKind::ConditionalTara,
    ];

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            FormKind::Present => "present",
            FormKind::Past => "past",
            FormKind::TeForm => "て-form",
            FormKind::Volitional => "volitional",
            FormKind::Potential => "potential",
            FormKind::Passive => "passive",
            FormKind::Causative => "causative",
            FormKind::Imperative => "imperative",
            FormKind::ConditionalBa => "conditional",
            FormKind::ConditionalTara => "conditional (たら)",
        }
    }
}

/// Positive form of one register, and its negative when that exists
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormPair {
    pub positive: String,
    pub negative: Option<String>,
}

impl FormPair {
    pub fn new(positive: impl Into<String>, negative: impl Into<String>) -> Self {
        Self {
            positive: positive.into(),
            negative: Some(negative.into()),
        }
    }

    pub fn positive_only(positive: impl Into<String>) -> Self {
        Self {
            positive: positive.into(),
            negative: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConjugationForm {
    pub kind: FormKind,
    pub name: &'static str,
    pub formal: Option<FormPair>,
    pub informal: Option<FormPair>,
}

impl ConjugationForm {
    pub fn new(kind: FormKind, formal: Option<FormPair>, informal: Option<FormPair>) -> Self {
        Self {
            kind,
            name: kind.name(),
            formal,
            informal,
        }
    }
}

/// Ordered set of conjugated forms for one verb
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ConjugationParadigm {
    forms: Vec<ConjugationForm>,
}

impl ConjugationParadigm {
    pub fn new(forms: Vec<ConjugationForm>) -> Self {
        Self { forms }
    }

    pub fn forms(&self) -> &[ConjugationForm] {
        &self.forms
    }

    /// Look up a form by kind
    pub fn get(&self, kind: FormKind) -> Option<&ConjugationForm> {
        self.forms.iter().find(|form| form.kind == kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConjugationForm> {
        self.forms.iter()
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }
}

impl IntoIterator for ConjugationParadigm {
    type Item = ConjugationForm;
    type IntoIter = std::vec::IntoIter<ConjugationForm>;

    fn into_iter(self) -> Self::IntoIter {
        self.forms.into_iter()
    }
}
