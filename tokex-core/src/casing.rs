//! Case mapping for abbreviation variants
//!
//! Uses full Unicode case mapping so Cyrillic and Latin Serbian spellings
//! produce correct variants. Capitalization maps the first character to its
//! titlecase form. That differs from uppercase for the Latin digraph letters
//! (`ǅ`, `ǈ`, `ǋ`), for characters whose uppercase expands to several letters
//! (`ß` → `Ss`, `ﬁ` → `Fi`, Armenian ligatures) and for Greek letters with
//! iota subscript.

/// Uppercase every character
pub fn upper(s: &str) -> String {
    s.to_uppercase()
}

/// Titlecase the first character and lowercase the rest
pub fn capitalize(s: &str) -> String {
    let Some(first) = s.chars().next() else {
        return String::new();
    };

    // Lowercase the whole string so final sigma sees the first character.
    let lowered = s.to_lowercase();
    let head_len: usize = first.to_lowercase().map(char::len_utf8).sum();

    let mut out = String::with_capacity(s.len());
    push_titlecase(&mut out, first);
    out.push_str(&lowered[head_len..]);
    out
}

/// Spelling variants in insertion order: as given, capitalized, uppercased
///
/// Variants that coincide are returned once.
pub fn case_variants(s: &str) -> Vec<String> {
    let mut variants = Vec::with_capacity(3);
    for candidate in [s.to_string(), capitalize(s), upper(s)] {
        if !variants.contains(&candidate) {
            variants.push(candidate);
        }
    }
    variants
}

fn push_titlecase(out: &mut String, ch: char) {
    match ch {
        'Ǆ' | 'ǅ' | 'ǆ' => out.push('ǅ'),
        'Ǉ' | 'ǈ' | 'ǉ' => out.push('ǈ'),
        'Ǌ' | 'ǋ' | 'ǌ' => out.push('ǋ'),
        // Greek with iota subscript: lowercase and titlecase rows of 8
        '\u{1F80}'..='\u{1F87}' | '\u{1F90}'..='\u{1F97}' | '\u{1FA0}'..='\u{1FA7}' => {
            out.extend(char::from_u32(ch as u32 + 8));
        }
        '\u{1F88}'..='\u{1F8F}' | '\u{1F98}'..='\u{1F9F}' | '\u{1FA8}'..='\u{1FAF}' => {
            out.push(ch);
        }
        '\u{1FB3}' | '\u{1FBC}' => out.push('\u{1FBC}'),
        '\u{1FC3}' | '\u{1FCC}' => out.push('\u{1FCC}'),
        '\u{1FF3}' | '\u{1FFC}' => out.push('\u{1FFC}'),
        _ => match multi_char_titlecase(ch) {
            Some(title) => out.push_str(title),
            None => out.extend(ch.to_uppercase()),
        },
    }
}

/// Titlecase forms that differ from the uppercase expansion
fn multi_char_titlecase(ch: char) -> Option<&'static str> {
    let title = match ch {
        'ß' => "Ss",
        'ŉ' => "\u{02BC}N",
        'ﬀ' => "Ff",
        'ﬁ' => "Fi",
        'ﬂ' => "Fl",
        'ﬃ' => "Ffi",
        'ﬄ' => "Ffl",
        'ﬅ' | 'ﬆ' => "St",
        'և' => "\u{0535}\u{0582}",
        'ﬓ' => "\u{0544}\u{0576}",
        'ﬔ' => "\u{0544}\u{0565}",
        'ﬕ' => "\u{0544}\u{056B}",
        'ﬖ' => "\u{054E}\u{0576}",
        'ﬗ' => "\u{0544}\u{056D}",
        '\u{1FB2}' => "\u{1FBA}\u{0345}",
        '\u{1FB4}' => "\u{0386}\u{0345}",
        '\u{1FB7}' => "\u{0391}\u{0342}\u{0345}",
        '\u{1FC2}' => "\u{1FCA}\u{0345}",
        '\u{1FC4}' => "\u{0389}\u{0345}",
        '\u{1FC7}' => "\u{0397}\u{0342}\u{0345}",
        '\u{1FF2}' => "\u{1FFA}\u{0345}",
        '\u{1FF4}' => "\u{038F}\u{0345}",
        '\u{1FF7}' => "\u{03A9}\u{0342}\u{0345}",
        _ => return None,
    };
    Some(title)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cyrillic_variants() {
        assert_eq!(capitalize("пон"), "Пон");
        assert_eq!(upper("пон"), "ПОН");
        assert_eq!(capitalize("јуни"), "Јуни");
        assert_eq!(upper("ђ"), "Ђ");
    }

    #[test]
    fn test_capitalize_lowercases_tail() {
        assert_eq!(capitalize("БГД"), "Бгд");
        assert_eq!(capitalize("uTO"), "Uto");
    }

    #[test]
    fn test_mixed_script_spelling() {
        // Cyrillic п followed by Latin o
        assert_eq!(capitalize("пo"), "Пo");
        assert_eq!(upper("пo"), "ПO");
    }

    #[test]
    fn test_digraph_titlecase() {
        assert_eq!(capitalize("ǉubav"), "ǈubav");
        assert_eq!(capitalize("ǋ"), "ǋ");
        assert_eq!(upper("ǆep"), "ǄEP");
    }

    #[test]
    fn test_titlecase_of_expanding_letters() {
        assert_eq!(capitalize("ßa"), "Ssa");
        assert_eq!(capitalize("ﬁx"), "Fix");
        assert_eq!(capitalize("ﬃ"), "Ffi");
        assert_eq!(capitalize("ﬆ"), "St");
        assert_eq!(capitalize("ŉ"), "\u{02BC}N");
        assert_eq!(capitalize("և"), "Եւ");
        assert_eq!(capitalize("ᾳ"), "ᾼ");
        assert_eq!(capitalize("ᾀ"), "ᾈ");
        // Uppercase still expands fully
        assert_eq!(upper("ßa"), "SSA");
        assert_eq!(case_variants("ﬁx"), vec!["ﬁx", "Fix", "FIX"]);
    }

    #[test]
    fn test_capitalize_final_sigma() {
        assert_eq!(capitalize("ΟΔΟΣ"), "Οδος");
        assert_eq!(capitalize("ΣΣ"), "Σς");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(capitalize(""), "");
        assert_eq!(upper(""), "");
        assert_eq!(case_variants(""), vec![String::new()]);
    }

    #[test]
    fn test_case_variants_dedup() {
        assert_eq!(case_variants("нед"), vec!["нед", "Нед", "НЕД"]);
        assert_eq!(case_variants("Бгд"), vec!["Бгд", "БГД"]);
        assert_eq!(case_variants("М"), vec!["М"]);
        assert_eq!(case_variants("1"), vec!["1"]);
    }
}
