//! Kana/Latin transliteration and the euphonic helpers built on it.
//!
//! Latin output is Hepburn (し → shi, つ → tsu). Latin input also accepts the
//! Nihon-shiki spellings (si, ti, tu, hu, zi) so a row consonant can be joined
//! to any vowel without special cases.

/// Hiragana with their Hepburn transliteration
const SYLLABLES: &[(&str, &str)] = &[
    ("あ", "a"), ("い", "i"), ("う", "u"), ("え", "e"), ("お", "o"),
    ("か", "ka"), ("き", "ki"), ("く", "ku"), ("け", "ke"), ("こ", "ko"),
    ("が", "ga"), ("ぎ", "gi"), ("ぐ", "gu"), ("げ", "ge"), ("ご", "go"),
    ("さ", "sa"), ("し", "shi"), ("す", "su"), ("せ", "se"), ("そ", "so"),
    ("ざ", "za"), ("じ", "ji"), ("ず", "zu"), ("ぜ", "ze"), ("ぞ", "zo"),
    ("た", "ta"), ("ち", "chi"), ("つ", "tsu"), ("て", "te"), ("と", "to"),
    ("だ", "da"), ("ぢ", "di"), ("づ", "du"), ("で", "de"), ("ど", "do"),
    ("な", "na"), ("に", "ni"), ("ぬ", "nu"), ("ね", "ne"), ("の", "no"),
    ("は", "ha"), ("ひ", "hi"), ("ふ", "fu"), ("へ", "he"), ("ほ", "ho"),
    ("ば", "ba"), ("び", "bi"), ("ぶ", "bu"), ("べ", "be"), ("ぼ", "bo"),
    ("ぱ", "pa"), ("ぴ", "pi"), ("ぷ", "pu"), ("ぺ", "pe"), ("ぽ", "po"),
    ("ま", "ma"), ("み", "mi"), ("む", "mu"), ("め", "me"), ("も", "mo"),
    ("や", "ya"), ("ゆ", "yu"), ("よ", "yo"),
    ("ら", "ra"), ("り", "ri"), ("る", "ru"), ("れ", "re"), ("ろ", "ro"),
    ("わ", "wa"), ("を", "wo"),
];

/// Alternate Latin spellings accepted on input
const ALTERNATES: &[(&str, &str)] = &[
    ("si", "し"), ("ti", "ち"), ("tu", "つ"), ("hu", "ふ"), ("zi", "じ"),
];

const SMALL_Y: &[(char, char)] = &[('ゃ', 'a'), ('ゅ', 'u'), ('ょ', 'o')];

const VOWELS: &[char] = &['a', 'i', 'u', 'e', 'o'];

fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

fn latin_of(kana: char) -> Option<&'static str> {
    let mut buf = [0u8; 4];
    let kana = kana.encode_utf8(&mut buf);
    SYLLABLES
        .iter()
        .find(|(k, _)| *k == kana)
        .map(|(_, latin)| *latin)
}

fn kana_of(latin: &str) -> Option<&'static str> {
    SYLLABLES
        .iter()
        .find(|(_, l)| *l == latin)
        .map(|(kana, _)| *kana)
        .or_else(|| {
            ALTERNATES
                .iter()
                .find(|(l, _)| *l == latin)
                .map(|(_, kana)| *kana)
        })
}

/// Transliterate hiragana to Latin script. Other characters pass through.
pub fn to_latin(kana: &str) -> String {
    let chars: Vec<char> = kana.chars().collect();
    let mut morae: Vec<String> = Vec::with_capacity(chars.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let Some(latin) = latin_of(c) else {
            morae.push(c.to_string());
            i += 1;
            continue;
        };

        // きゃ → kya, しゃ → sha
        let small = chars
            .get(i + 1)
            .and_then(|next| SMALL_Y.iter().find(|(small, _)| small == next));
        match small {
            Some((_, vowel)) if latin.ends_with('i') && latin.len() > 1 => {
                let stem = &latin[..latin.len() - 1];
                let glide = if matches!(stem, "sh" | "ch" | "j") { "" } else { "y" };
                morae.push(format!("{stem}{glide}{vowel}"));
                i += 2;
            }
            _ => {
                morae.push(latin.to_string());
                i += 1;
            }
        }
    }

    join_morae(&morae)
}

// Resolves ん and っ, whose spelling depends on the following mora
fn join_morae(morae: &[String]) -> String {
    let mut out = String::new();

    for (idx, mora) in morae.iter().enumerate() {
        let next = morae.get(idx + 1).and_then(|m| m.chars().next());
        match mora.as_str() {
            "ん" => {
                out.push('n');
                if next.is_some_and(|c| is_vowel(c) || c == 'y') {
                    out.push('\'');
                }
            }
            "っ" => match next {
                Some('c') => out.push('t'),
                Some(c) if c.is_ascii_alphabetic() && !is_vowel(c) => out.push(c),
                _ => out.push('っ'),
            },
            _ => out.push_str(mora),
        }
    }

    out
}

/// Transliterate Latin script to hiragana. Unrecognized characters pass through.
pub fn to_kana(latin: &str) -> String {
    let chars: Vec<char> = latin.to_lowercase().chars().collect();
    let mut out = String::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let next = chars.get(i + 1).copied();

        if !c.is_ascii_alphabetic() {
            i += 1;
            if c != '\'' {
                out.push(c);
            }
            continue;
        }

        if c == 'n' && next.is_none_or(|n| !is_vowel(n) && n != 'y') {
            out.push('ん');
            i += 1;
            continue;
        }

        // Doubled consonant, or t before ch
        if !is_vowel(c) && (next == Some(c) || (c == 't' && next == Some('c'))) {
            out.push('っ');
            i += 1;
            continue;
        }

        if let Some((kana, len)) = match_mora(&chars[i..]) {
            out.push_str(&kana);
            i += len;
        } else {
            out.push(c);
            i += 1;
        }
    }

    out
}

// Longest mora at the start of `chars`: yōon first, then plain syllables
fn match_mora(chars: &[char]) -> Option<(String, usize)> {
    for len in (1..=chars.len().min(3)).rev() {
        let candidate: String = chars[..len].iter().collect();
        if let Some(kana) = yoon_of(&candidate) {
            return Some((kana, len));
        }
        if let Some(kana) = kana_of(&candidate) {
            return Some((kana.to_string(), len));
        }
    }
    None
}

fn yoon_of(latin: &str) -> Option<String> {
    let vowel = latin.chars().last()?;
    let small = SMALL_Y.iter().find(|(_, v)| *v == vowel)?.0;
    let stem = &latin[..latin.len() - 1];

    let base = match stem {
        "sh" | "ch" | "j" => format!("{stem}i"),
        _ => {
            let consonant = stem.strip_suffix('y')?;
            if consonant.is_empty() {
                return None;
            }
            format!("{consonant}i")
        }
    };

    kana_of(&base).map(|kana| format!("{kana}{small}"))
}

/// Consonant of the row a mora belongs to, e.g. つ → `t`, う → ``
pub fn row_consonant(mora: &str) -> String {
    let latin = to_latin(mora);
    let consonant = latin.trim_end_matches(is_vowel);
    match consonant {
        "ts" | "ch" => "t",
        "sh" => "s",
        "f" => "h",
        "j" => "z",
        other => other,
    }
    .to_string()
}

/// Latin spelling of `mora` with its vowel replaced by `ending`,
/// e.g. (く, "imasu") → "kimasu"
pub fn replace_vowel(mora: &str, ending: &str) -> String {
    format!("{}{}", row_consonant(mora), ending)
}

/// Voice the leading consonant of a Latin ending: "ta" → "da"
pub fn add_dakuten(latin: &str) -> String {
    let mut chars = latin.chars();
    let voiced = match chars.next() {
        Some('t') => 'd',
        Some('k') => 'g',
        Some('s') => 'z',
        Some('h') => 'b',
        Some(other) => other,
        None => return String::new(),
    };
    let mut out = String::with_capacity(latin.len());
    out.push(voiced);
    out.push_str(chars.as_str());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_to_latin() {
        assert_eq!(to_latin("ます"), "masu");
        assert_eq!(to_latin("ませんでした"), "masendeshita");
        assert_eq!(to_latin("なかった"), "nakatta");
        assert_eq!(to_latin("ましょう"), "mashou");
        assert_eq!(to_latin("きゃく"), "kyaku");
        assert_eq!(to_latin("まっちゃ"), "matcha");
        assert_eq!(to_latin("きんえん"), "kin'en");
        assert_eq!(to_latin("書く"), "書ku");
    }

    #[test]
    fn test_to_kana() {
        assert_eq!(to_kana("kimasu"), "きます");
        assert_eq!(to_kana("kimasendeshita"), "きませんでした");
        assert_eq!(to_kana("tte"), "って");
        assert_eq!(to_kana("nde"), "んで");
        assert_eq!(to_kana("shite"), "して");
        assert_eq!(to_kana("timasu"), "ちます");
        assert_eq!(to_kana("sanai"), "さない");
        assert_eq!(to_kana("wareru"), "われる");
        assert_eq!(to_kana("kimashou"), "きましょう");
        assert_eq!(to_kana("kin'en"), "きんえん");
        assert_eq!(to_kana("matcha"), "まっちゃ");
    }

    #[test]
    fn test_row_consonant() {
        assert_eq!(row_consonant("く"), "k");
        assert_eq!(row_consonant("つ"), "t");
        assert_eq!(row_consonant("す"), "s");
        assert_eq!(row_consonant("う"), "");
        assert_eq!(row_consonant("ぶ"), "b");
    }

    #[test]
    fn test_replace_vowel() {
        assert_eq!(to_kana(&replace_vowel("つ", "anai")), "たない");
        assert_eq!(to_kana(&replace_vowel("す", "imasu")), "します");
        assert_eq!(to_kana(&replace_vowel("う", "ou")), "おう");
    }

    #[test]
    fn test_add_dakuten() {
        assert_eq!(add_dakuten("te"), "de");
        assert_eq!(add_dakuten("ta"), "da");
        assert_eq!(to_kana(&format!("n{}", add_dakuten("te"))), "んで");
        assert_eq!(add_dakuten(""), "");
    }

    fn mora() -> impl Strategy<Value = &'static str> {
        let mut morae: Vec<&'static str> = SYLLABLES.iter().map(|(kana, _)| *kana).collect();
        morae.extend(["ん", "きゃ", "しゅ", "ちょ", "じゃ", "りょ"]);
        proptest::sample::select(morae)
    }

    proptest! {
        #[test]
        fn test_transliteration_round_trips(morae in proptest::collection::vec(mora(), 1..8)) {
            let kana: String = morae.concat();
            prop_assert_eq!(to_kana(&to_latin(&kana)), kana);
        }
    }
}
