//! Built-in Serbian (Cyrillic) exception data
//!
//! Two seed lists: weekday and month abbreviations, which are expanded into
//! case variants and dotted forms, and common abbreviations, titles and
//! units, which are inserted exactly as written.
//!
//! The seeds are kept as authored. `пo` and `пoн` are spelled with a Latin
//! `o`, and several dotted abbreviations appear twice with different lemmas;
//! the later entry wins and the overwrite is reported as a collision.

use crate::language::tables::ExceptionTable;
use crate::types::Descriptor;

/// Language code of the built-in table
pub const CODE: &str = "sr";

/// Human-readable language name
pub const NAME: &str = "Serbian";

/// Weekday and month abbreviations
pub const ABBREVIATIONS: &[Descriptor] = &[
    // Weekdays
    Descriptor::new("пo", "понедељак", "понедељак"),
    Descriptor::new("пoн", "понедељак", "понедељак"),
    Descriptor::new("ут", "уторак", "уторак"),
    Descriptor::new("уто", "уторак", "уторак"),
    Descriptor::new("ср", "среда", "среда"),
    Descriptor::new("сре", "среда", "среда"),
    Descriptor::new("че", "четвртак", "четвртак"),
    Descriptor::new("чет", "четвртак", "четвртак"),
    Descriptor::new("пе", "петак", "петак"),
    Descriptor::new("пет", "петак", "петак"),
    Descriptor::new("су", "субота", "субота"),
    Descriptor::new("суб", "субота", "субота"),
    Descriptor::new("не", "недеља", "недеља"),
    Descriptor::new("нед", "недеља", "недеља"),
    // Months
    Descriptor::new("јан", "јануар", "јануар"),
    Descriptor::new("феб", "фебруар", "фебруар"),
    Descriptor::new("мар", "март", "март"),
    Descriptor::new("апр", "април", "април"),
    Descriptor::new("мај", "мај", "мај"),
    Descriptor::new("јуни", "јун", "јун"),
    Descriptor::new("јули", "јул", "јул"),
    Descriptor::new("авг", "август", "август"),
    Descriptor::new("сеп", "септембар", "септембар"),
    Descriptor::new("септ", "септембар", "септембар"),
    Descriptor::new("окт", "октобар", "октобар"),
    Descriptor::new("нов", "новембар", "новембар"),
    Descriptor::new("дец", "децембар", "децембар"),
];

/// Common abbreviations, titles and units
pub const EXCEPTIONS: &[Descriptor] = &[
    // without dot
    Descriptor::new("др", "доктор", "доктор"),
    Descriptor::new("гђа", "госпођа", "госпођа"),
    Descriptor::new("мр", "магистар", "магистар"),
    Descriptor::new("Бгд", "Београд", "Београд"),
    Descriptor::new("цм", "центиметар", "центиметар"),
    Descriptor::new("м", "метар", "метар"),
    Descriptor::new("км", "километар", "километар"),
    Descriptor::new("мг", "милиграм", "милиграм"),
    Descriptor::new("кг", "килограм", "килограм"),
    Descriptor::new("дл", "децилитар", "децилитар"),
    Descriptor::new("хл", "хектолитар", "хектолитар"),
    // with dot
    Descriptor::new("ул.", "улица", "улица"),
    Descriptor::new("бр.", "број", "број"),
    Descriptor::new("нпр.", "на пример", "на пример"),
    Descriptor::new("тзв.", "такозван", "такозван"),
    Descriptor::new("проф.", "професор", "професор"),
    Descriptor::new("итд.", " и тако даље", "и тако даље"),
    Descriptor::new("стр.", "страна", "страна"),
    Descriptor::new("једн.", "једнина", "једнина"),
    Descriptor::new("мн.", "множина", "множина"),
    Descriptor::new("уч.", "ученик", "ученик"),
    Descriptor::new("разр.", "разред", "разред"),
    Descriptor::new("н.е.", "нова ера", "нове ере"),
    Descriptor::new("о.м.", "овај месец", "децилитар"),
    Descriptor::new("инж.", "инжењер", "инжењер"),
    Descriptor::new("гимн.", "гимназија", "гимназија"),
    Descriptor::new("уч.", "милиграм", "милиграм"),
    Descriptor::new("разр.", "килограм", "килограм"),
    Descriptor::new("стр.", "децилитар", "децилитар"),
    Descriptor::new("год.", "година", "година"),
    Descriptor::new("мед.", "медицина", "медицина"),
    Descriptor::new("гимн.", "гимназија", "гимназија"),
    Descriptor::new("акад.", "академік", "академік"),
    Descriptor::new("доц.", "доцент", "доцент"),
];

/// Build the Serbian exception table from the seed lists
pub fn build() -> ExceptionTable {
    let mut builder = ExceptionTable::builder(CODE);
    for d in ABBREVIATIONS {
        builder.add_abbreviation(d.orth, d.lemma, d.norm);
    }
    for d in EXCEPTIONS {
        builder.add_exception(d.orth, d.lemma, d.norm);
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TokenAttrs;

    #[test]
    fn test_seed_counts() {
        assert_eq!(ABBREVIATIONS.len(), 27);
        assert_eq!(EXCEPTIONS.len(), 34);
    }

    #[test]
    fn test_table_size() {
        let table = build();
        assert_eq!(table.len(), 27 * 6 + 30);
        assert_eq!(table.language_code(), "sr");
    }

    #[test]
    fn test_monday_variants() {
        let table = build();
        for key in ["пoн", "Пoн", "ПOН", "пoн.", "Пoн.", "ПOН."] {
            let entry = table.get(key).unwrap();
            assert_eq!(entry, &[TokenAttrs::new(key, "понедељак", "понедељак")]);
        }
    }

    #[test]
    fn test_doctor() {
        let table = build();
        assert_eq!(
            table.get("др"),
            Some(&[TokenAttrs::new("др", "доктор", "доктор")][..])
        );
        // Undotted exceptions get no dotted form
        assert!(!table.contains("др."));
    }

    #[test]
    fn test_known_collisions() {
        let table = build();
        let keys: Vec<&str> = table
            .collisions()
            .iter()
            .map(|c| c.key.as_str())
            .collect();
        assert_eq!(keys, vec!["уч.", "разр.", "стр.", "гимн."]);

        let conflicting = table
            .collisions()
            .iter()
            .filter(|c| c.is_conflicting())
            .count();
        assert_eq!(conflicting, 3);

        assert_eq!(table.get("уч.").unwrap()[0].lemma, "милиграм");
        assert_eq!(table.get("разр.").unwrap()[0].lemma, "килограм");
        assert_eq!(table.get("стр.").unwrap()[0].lemma, "децилитар");
    }

    #[test]
    fn test_irregular_entries_kept() {
        let table = build();
        assert_eq!(table.get("итд.").unwrap()[0].lemma, " и тако даље");
        assert_eq!(table.get("итд.").unwrap()[0].norm, "и тако даље");
        assert_eq!(table.get("о.м.").unwrap()[0].norm, "децилитар");
        assert_eq!(table.get("н.е.").unwrap()[0].norm, "нове ере");
    }
}
