use kotoba_core::conjugation::{ConjugationParadigm, FormKind, FormPair};
use kotoba_core::grammar::VerbGrammarDescriptor;
use kotoba_core::language::Reading;

use crate::classifier::classify;
use crate::conjugator::JapaneseConjugator;
use crate::pos::{GodanKind, IrregularKind, RawPosTag, VerbKind};

fn verb_pos(kind: VerbKind) -> VerbGrammarDescriptor {
    let pos = classify(&RawPosTag::Verb(kind)).normalized_for_conjugation();
    VerbGrammarDescriptor::try_from(&pos).expect("conjugable descriptor")
}

fn conjugate(kana: &str, kanji: Option<&str>, prefer_kana: bool, kind: VerbKind) -> ConjugationParadigm {
    JapaneseConjugator::new().conjugate(&Reading::new(kana, kanji), prefer_kana, &verb_pos(kind))
}

fn pair(positive: &str, negative: &str) -> Option<FormPair> {
    Some(FormPair::new(positive, negative))
}

fn positive(positive: &str) -> Option<FormPair> {
    Some(FormPair::positive_only(positive))
}

/// (kind, formal, informal) for every form, in paradigm order
type Table = [(FormKind, Option<FormPair>, Option<FormPair>); 10];

fn assert_table(paradigm: &ConjugationParadigm, expected: Table) {
    assert_eq!(paradigm.len(), expected.len());
    for (form, (kind, formal, informal)) in paradigm.iter().zip(expected) {
        assert_eq!(form.kind, kind);
        assert_eq!(form.name, kind.name());
        assert_eq!(form.formal, formal, "formal {}", kind.name());
        assert_eq!(form.informal, informal, "informal {}", kind.name());
    }
}

fn informal_negative(paradigm: &ConjugationParadigm, kind: FormKind) -> String {
    paradigm
        .get(kind)
        .and_then(|form| form.informal.as_ref())
        .and_then(|pair| pair.negative.clone())
        .unwrap_or_default()
}

fn formal_positive(paradigm: &ConjugationParadigm, kind: FormKind) -> String {
    paradigm
        .get(kind)
        .and_then(|form| form.formal.as_ref())
        .map(|pair| pair.positive.clone())
        .unwrap_or_default()
}

fn informal_positive(paradigm: &ConjugationParadigm, kind: FormKind) -> String {
    paradigm
        .get(kind)
        .and_then(|form| form.informal.as_ref())
        .map(|pair| pair.positive.clone())
        .unwrap_or_default()
}

#[test]
fn test_ichidan_paradigm() {
    let paradigm = conjugate("たべる", Some("食べる"), false, VerbKind::Ichidan);

    assert_table(
        &paradigm,
        [
            (FormKind::Present, pair("食べます", "食べません"), pair("食べる", "食べない")),
            (FormKind::Past, pair("食べました", "食べませんでした"), pair("食べた", "食べなかった")),
            (FormKind::TeForm, pair("食べて", "食べなくて"), None),
            (FormKind::Volitional, positive("食べよう"), positive("食べましょう")),
            (FormKind::Potential, pair("食べられます", "食べられません"), pair("食べられる", "食べられない")),
            (FormKind::Passive, pair("食べられます", "食べられません"), pair("食べられる", "食べられない")),
            (FormKind::Causative, pair("食べさせます", "食べさせません"), pair("食べさせる", "食べさせない")),
            (FormKind::Imperative, None, pair("食べろ", "食べるな")),
            (FormKind::ConditionalBa, pair("食べれば", "食べなければ"), None),
            (FormKind::ConditionalTara, None, pair("食べたら", "食べなかったら")),
        ],
    );
}

#[test]
fn test_godan_ku_paradigm() {
    let paradigm = conjugate("かく", Some("書く"), false, VerbKind::Godan(GodanKind::Ku));

    assert_table(
        &paradigm,
        [
            (FormKind::Present, pair("書きます", "書きません"), pair("書く", "書かない")),
            (FormKind::Past, pair("書きました", "書きませんでした"), pair("書いた", "書かなかった")),
            (FormKind::TeForm, pair("書いて", "書かなくて"), None),
            (FormKind::Volitional, positive("書こう"), positive("書きましょう")),
            (FormKind::Potential, pair("書けます", "書けません"), pair("書ける", "書けない")),
            (FormKind::Passive, pair("書かれます", "書かれません"), pair("書かれる", "書かれない")),
            (FormKind::Causative, pair("書かせます", "書かせません"), pair("書かせる", "書かせない")),
            (FormKind::Imperative, None, pair("書け", "書くな")),
            (FormKind::ConditionalBa, pair("書けば", "書かなければ"), None),
            (FormKind::ConditionalTara, None, pair("書いたら", "書かなかったら")),
        ],
    );
}

#[test]
fn test_godan_u_uses_wa_row_and_geminate() {
    let paradigm = conjugate("かう", Some("買う"), false, VerbKind::Godan(GodanKind::U));

    assert_eq!(formal_positive(&paradigm, FormKind::TeForm), "買って");
    assert_eq!(informal_positive(&paradigm, FormKind::Past), "買った");
    assert_eq!(informal_negative(&paradigm, FormKind::Present), "買わない");
    assert_eq!(formal_positive(&paradigm, FormKind::Volitional), "買おう");
    assert_eq!(informal_positive(&paradigm, FormKind::Potential), "買える");
    assert_eq!(informal_positive(&paradigm, FormKind::Passive), "買われる");
    assert_eq!(informal_positive(&paradigm, FormKind::Causative), "買わせる");
    assert_eq!(informal_positive(&paradigm, FormKind::Imperative), "買え");
    assert_eq!(formal_positive(&paradigm, FormKind::ConditionalBa), "買えば");
}

#[test]
fn test_negative_for_every_godan_row() {
    let cases = [
        ("かく", "書く", GodanKind::Ku, "書かない"),
        ("およぐ", "泳ぐ", GodanKind::Gu, "泳がない"),
        ("はなす", "話す", GodanKind::Su, "話さない"),
        ("まつ", "待つ", GodanKind::Tsu, "待たない"),
        ("しぬ", "死ぬ", GodanKind::Nu, "死なない"),
        ("あそぶ", "遊ぶ", GodanKind::Bu, "遊ばない"),
        ("よむ", "読む", GodanKind::Mu, "読まない"),
        ("かえる", "帰る", GodanKind::Ru, "帰らない"),
        ("かう", "買う", GodanKind::U, "買わない"),
    ];

    for (kana, kanji, kind, expected) in cases {
        let paradigm = conjugate(kana, Some(kanji), false, VerbKind::Godan(kind));
        assert_eq!(informal_negative(&paradigm, FormKind::Present), expected);
    }
}

#[test]
fn test_te_form_sound_changes() {
    let cases = [
        ("およぐ", "泳ぐ", GodanKind::Gu, "泳いで", "泳いだ"),
        ("はなす", "話す", GodanKind::Su, "話して", "話した"),
        ("まつ", "待つ", GodanKind::Tsu, "待って", "待った"),
        ("しぬ", "死ぬ", GodanKind::Nu, "死んで", "死んだ"),
        ("あそぶ", "遊ぶ", GodanKind::Bu, "遊んで", "遊んだ"),
        ("よむ", "読む", GodanKind::Mu, "読んで", "読んだ"),
        ("かえる", "帰る", GodanKind::Ru, "帰って", "帰った"),
    ];

    for (kana, kanji, kind, te, ta) in cases {
        let paradigm = conjugate(kana, Some(kanji), false, VerbKind::Godan(kind));
        assert_eq!(formal_positive(&paradigm, FormKind::TeForm), te);
        assert_eq!(informal_positive(&paradigm, FormKind::Past), ta);
    }
}

#[test]
fn test_tsu_and_su_rows_shift_with_their_consonant() {
    let matsu = conjugate("まつ", Some("待つ"), false, VerbKind::Godan(GodanKind::Tsu));
    assert_eq!(formal_positive(&matsu, FormKind::Present), "待ちます");
    assert_eq!(formal_positive(&matsu, FormKind::Volitional), "待とう");
    assert_eq!(informal_positive(&matsu, FormKind::Potential), "待てる");

    let hanasu = conjugate("はなす", Some("話す"), false, VerbKind::Godan(GodanKind::Su));
    assert_eq!(formal_positive(&hanasu, FormKind::Present), "話します");
    assert_eq!(informal_positive(&hanasu, FormKind::Causative), "話させる");
}

#[test]
fn test_iku_takes_geminate_te_form() {
    let paradigm = conjugate("いく", Some("行く"), false, VerbKind::Godan(GodanKind::IkuYuku));

    assert_eq!(formal_positive(&paradigm, FormKind::TeForm), "行って");
    assert_eq!(informal_positive(&paradigm, FormKind::Past), "行った");
    assert_eq!(informal_positive(&paradigm, FormKind::ConditionalTara), "行ったら");
    assert_eq!(formal_positive(&paradigm, FormKind::Present), "行きます");
    assert_eq!(informal_negative(&paradigm, FormKind::Present), "行かない");
}

#[test]
fn test_aru_negatives_replace_whole_word() {
    let paradigm = conjugate("ある", None, false, VerbKind::Godan(GodanKind::Aru));

    assert_eq!(informal_negative(&paradigm, FormKind::Present), "ない");
    assert_eq!(informal_negative(&paradigm, FormKind::Past), "なかった");
    assert_eq!(informal_negative(&paradigm, FormKind::ConditionalTara), "なかったら");
    assert_eq!(
        paradigm.get(FormKind::TeForm).and_then(|f| f.formal.clone()),
        pair("あって", "なくて")
    );
    assert_eq!(
        paradigm.get(FormKind::ConditionalBa).and_then(|f| f.formal.clone()),
        pair("あれば", "なければ")
    );
    assert_eq!(formal_positive(&paradigm, FormKind::Present), "あります");
}

#[test]
fn test_aru_kanji_form_is_replaced_too() {
    let paradigm = conjugate("ある", Some("有る"), false, VerbKind::Godan(GodanKind::Aru));
    assert_eq!(informal_positive(&paradigm, FormKind::Present), "有る");
    assert_eq!(informal_negative(&paradigm, FormKind::Present), "ない");
    assert_eq!(formal_positive(&paradigm, FormKind::Present), "有ります");
}

#[test]
fn test_kureru_imperative() {
    let paradigm = conjugate("くれる", Some("呉れる"), true, VerbKind::IchidanKureru);

    assert_eq!(
        paradigm.get(FormKind::Imperative).and_then(|f| f.informal.clone()),
        pair("くれ", "くれるな")
    );
    assert_eq!(formal_positive(&paradigm, FormKind::Present), "くれます");
}

#[test]
fn test_suru_paradigm() {
    let paradigm = conjugate(
        "する",
        Some("為る"),
        true,
        VerbKind::Irregular(IrregularKind::Suru),
    );

    assert_table(
        &paradigm,
        [
            (FormKind::Present, pair("します", "しません"), pair("する", "しない")),
            (FormKind::Past, pair("しました", "しませんでした"), pair("した", "しなかった")),
            (FormKind::TeForm, pair("して", "しなくて"), None),
            (FormKind::Volitional, positive("しよう"), positive("しましょう")),
            (FormKind::Potential, pair("できます", "できません"), pair("できる", "できない")),
            (FormKind::Passive, pair("されます", "されません"), pair("される", "されない")),
            (FormKind::Causative, pair("させます", "させません"), pair("させる", "させない")),
            (FormKind::Imperative, None, pair("しろ", "するな")),
            (FormKind::ConditionalBa, pair("すれば", "しなければ"), None),
            (FormKind::ConditionalTara, None, pair("したら", "しなかったら")),
        ],
    );
}

#[test]
fn test_suru_compound_uses_lexical_roots() {
    let paradigm = conjugate(
        "べんきょうする",
        Some("勉強する"),
        false,
        VerbKind::Irregular(IrregularKind::Suru),
    );

    assert_eq!(formal_positive(&paradigm, FormKind::Present), "勉強します");
    assert_eq!(formal_positive(&paradigm, FormKind::Potential), "勉強できます");
    assert_eq!(informal_positive(&paradigm, FormKind::Passive), "勉強される");
    assert_eq!(informal_negative(&paradigm, FormKind::Causative), "勉強させない");
    assert_eq!(formal_positive(&paradigm, FormKind::ConditionalBa), "勉強すれば");
}

#[test]
fn test_kuru_paradigm_ignores_kanji_form() {
    let paradigm = conjugate("くる", Some("来る"), false, VerbKind::Kuru);

    assert_table(
        &paradigm,
        [
            (FormKind::Present, pair("きます", "きません"), pair("くる", "こない")),
            (FormKind::Past, pair("きました", "きませんでした"), pair("きた", "こなかった")),
            (FormKind::TeForm, pair("きて", "こなくて"), None),
            (FormKind::Volitional, positive("こよう"), positive("きましょう")),
            (FormKind::Potential, pair("こられます", "こられません"), pair("こられる", "こられない")),
            (FormKind::Passive, pair("こられます", "こられません"), pair("こられる", "こられない")),
            (FormKind::Causative, pair("こさせます", "こさせません"), pair("こさせる", "こさせない")),
            (FormKind::Imperative, None, pair("こい", "くるな")),
            (FormKind::ConditionalBa, pair("くれば", "こなければ"), None),
            (FormKind::ConditionalTara, None, pair("きたら", "こなかったら")),
        ],
    );
}

#[test]
fn test_kuru_compound_keeps_its_prefix() {
    let paradigm = conjugate("もってくる", Some("持って来る"), false, VerbKind::Kuru);
    assert_eq!(formal_positive(&paradigm, FormKind::Present), "もってきます");
    assert_eq!(informal_negative(&paradigm, FormKind::Present), "もってこない");
}

#[test]
fn test_homophone_of_kuru_stays_godan() {
    let paradigm = conjugate("くる", Some("繰る"), false, VerbKind::Godan(GodanKind::Ru));
    assert_eq!(formal_positive(&paradigm, FormKind::Present), "繰ります");
    assert_eq!(informal_positive(&paradigm, FormKind::Past), "繰った");
}

#[test]
fn test_prefer_kana_form() {
    let paradigm = conjugate("たべる", Some("食べる"), true, VerbKind::Ichidan);
    assert_eq!(formal_positive(&paradigm, FormKind::Present), "たべます");

    let paradigm = conjugate("たべる", None, false, VerbKind::Ichidan);
    assert_eq!(formal_positive(&paradigm, FormKind::Present), "たべます");
}

#[test]
fn test_zuru_is_conjugated_as_ichidan_after_normalization() {
    let paradigm = conjugate("かんずる", Some("感ずる"), false, VerbKind::IchidanZuru);
    assert_eq!(formal_positive(&paradigm, FormKind::Present), "感ずます");
}

#[test]
fn test_conjugation_is_deterministic() {
    let first = conjugate("よむ", Some("読む"), false, VerbKind::Godan(GodanKind::Mu));
    let second = conjugate("よむ", Some("読む"), false, VerbKind::Godan(GodanKind::Mu));
    assert_eq!(first, second);
}
