//! Splitting a corpus into sentences, and sentences into words.
//!
//! Sentence ends are found by looking for words ending in `.`, `?` or `!` that are followed by
//! whitespace and something that does not continue the sentence (an ASCII lowercase letter or a
//! dash right after a single whitespace character).
//! Common abbreviations such as `Mr.` or `etc.` do not end a sentence.

use std::sync::LazyLock;

use itertools::Itertools;
use regex::Regex;

/// A word ending in punctuation, optional closing quotes or brackets, then whitespace.
static POTENTIAL_END: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([\w.'’&\])]+[.?!])([‘’“”'")\]]*)(\s+)"#).expect("sentence end pattern is valid")
});

const ABBR_CAPPED: &[&str] = &[
    // States
    "ala", "ariz", "ark", "calif", "colo", "conn", "del", "fla", "ga", "ill", "ind", "kan", "ky",
    "la", "md", "mass", "mich", "minn", "miss", "mo", "mont", "neb", "nev", "okla", "ore", "pa",
    "tenn", "vt", "va", "wash", "wis", "wyo", "u.s",
    // Titles
    "mr", "ms", "mrs", "msr", "dr", "gov", "pres", "sen", "sens", "rep", "reps", "prof", "gen",
    "messrs", "col", "sr", "jf", "sgt", "mgr", "fr", "rev", "jr", "snr", "atty", "supt",
    // Streets
    "ave", "blvd", "st", "rd", "hwy",
    // Months
    "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec",
];

const ABBR_LOWERCASE: &[&str] = &["etc", "v", "vs", "viz", "al", "pct"];

const EXCEPTIONS: &[&str] = &["U.S.", "U.N.", "E.U.", "F.B.I.", "C.I.A."];

/// Whether a word ending in `.` is a known abbreviation. Single capital letters count, since
/// they are usually initials.
pub fn is_abbreviation(dotted_word: &str) -> bool {
    let Some(clipped) = dotted_word.strip_suffix('.') else {
        return false;
    };
    let Some(first) = clipped.chars().next() else {
        return false;
    };

    if first.is_ascii_uppercase() {
        let lower = clipped.to_lowercase();
        (lower.len() == 1 && lower.chars().all(|c| c.is_ascii_lowercase()))
            || ABBR_CAPPED.contains(&lower.as_str())
    } else {
        ABBR_LOWERCASE.contains(&clipped)
    }
}

/// Whether a word ending in punctuation ends its sentence.
pub fn is_sentence_ender(word: &str) -> bool {
    if EXCEPTIONS.contains(&word) {
        return false;
    }
    if word.ends_with(['?', '!']) {
        return true;
    }
    // Acronyms such as "NASA." end sentences
    if word.chars().filter(char::is_ascii_uppercase).count() > 1 {
        return true;
    }
    word.ends_with('.') && !is_abbreviation(word)
}

fn continues_sentence(c: char) -> bool {
    c.is_ascii_lowercase() || matches!(c, '-' | '–' | '—')
}

/// Splits `text` into trimmed, non-empty sentences.
pub fn split_into_sentences(text: &str) -> Vec<&str> {
    let mut ends = Vec::new();
    for caps in POTENTIAL_END.captures_iter(text) {
        let (Some(word), Some(closing), Some(space)) = (caps.get(1), caps.get(2), caps.get(3))
        else {
            continue;
        };
        // A longer run of whitespace always breaks the sentence
        let single_space = space.as_str().chars().nth(1).is_none();
        if single_space && text[space.end()..].chars().next().is_some_and(continues_sentence) {
            continue;
        }
        if is_sentence_ender(word.as_str()) {
            ends.push(closing.end());
        }
    }

    let mut starts = vec![0];
    starts.extend(ends.iter().copied());
    ends.push(text.len());

    starts
        .into_iter()
        .zip(ends)
        .map(|(start, end)| text[start..end].trim())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Splits a sentence into words on whitespace.
pub fn split_words(sentence: &str) -> impl Iterator<Item = &str> {
    sentence.split_whitespace()
}

/// The inverse of [`split_words()`].
pub fn join_words<'a>(words: impl IntoIterator<Item = &'a str>) -> String {
    words.into_iter().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_sentences() {
        assert_eq!(
            split_into_sentences("The cat sat. The cat ran. The dog sat."),
            vec!["The cat sat.", "The cat ran.", "The dog sat."]
        );
    }

    #[test]
    fn questions_and_exclamations() {
        assert_eq!(
            split_into_sentences("Is it? Yes!  It is.\nGood."),
            vec!["Is it?", "Yes!", "It is.", "Good."]
        );
    }

    #[test]
    fn abbreviations_do_not_split() {
        assert_eq!(
            split_into_sentences("Mr. Smith went to Washington. He met Dr. Jones on Jan. 5th."),
            vec!["Mr. Smith went to Washington.", "He met Dr. Jones on Jan. 5th."]
        );
        assert_eq!(
            split_into_sentences("Apples, pears, etc. Are fruit."),
            vec!["Apples, pears, etc. Are fruit."]
        );
    }

    #[test]
    fn exceptions_do_not_split() {
        assert_eq!(
            split_into_sentences("He lives in the U.S. This is fine."),
            vec!["He lives in the U.S. This is fine."]
        );
    }

    #[test]
    fn lowercase_continuation_does_not_split() {
        assert_eq!(
            split_into_sentences("It cost 5 dollars. and then some. Then it ended."),
            vec!["It cost 5 dollars. and then some.", "Then it ended."]
        );
    }

    #[test]
    fn wide_gap_splits_before_lowercase() {
        assert_eq!(
            split_into_sentences("It cost 5 dollars.  and then some. Then it ended."),
            vec!["It cost 5 dollars.", "and then some.", "Then it ended."]
        );
        assert_eq!(
            split_into_sentences("Done.\n\n- next item."),
            vec!["Done.", "- next item."]
        );
    }

    #[test]
    fn non_ascii_lowercase_splits() {
        assert_eq!(
            split_into_sentences("Ok. élan vital. Fin."),
            vec!["Ok.", "élan vital.", "Fin."]
        );
    }

    #[test]
    fn closing_quotes_stay_with_sentence() {
        assert_eq!(
            split_into_sentences("She said \"stop.\" Then she left."),
            vec!["She said \"stop.\"", "Then she left."]
        );
    }

    #[test]
    fn no_punctuation_is_one_sentence() {
        assert_eq!(split_into_sentences("  just some words  "), vec!["just some words"]);
        assert!(split_into_sentences(" \n\t ").is_empty());
    }

    #[test]
    fn abbreviation_rules() {
        assert!(is_abbreviation("Mr."));
        assert!(is_abbreviation("J."));
        assert!(is_abbreviation("vs."));
        assert!(!is_abbreviation("Cat."));
        assert!(!is_abbreviation("cat."));
        assert!(!is_abbreviation("."));
        assert!(is_sentence_ender("NASA."));
        assert!(is_sentence_ender("why?"));
        assert!(!is_sentence_ender("U.S."));
    }

    #[test]
    fn words_round_trip_whitespace() {
        let words: Vec<_> = split_words(" one\ttwo \n three ").collect();
        assert_eq!(words, vec!["one", "two", "three"]);
        assert_eq!(join_words(words), "one two three");
    }
}
