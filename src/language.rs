// src/language.rs
//! Question language detection.
//!
//! Kazakh is written in Cyrillic plus a handful of letters Russian does not
//! have. A question containing any of those letters is answered in Kazakh;
//! everything else is answered in Russian. Any match wins, there is no
//! scoring for mixed-language input.

use lazy_static::lazy_static;
use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    Kazakh,
    Russian,
}

lazy_static! {
    // Ә ә Ө ө Ұ ұ Ғ ғ Ң ң Ү ү Һ һ і
    static ref KAZAKH_LETTERS: Regex = Regex::new(
        "[\u{04d8}\u{04d9}\u{04e8}\u{04e9}\u{04b0}\u{04b1}\u{0492}\u{0493}\u{04a2}\u{04a3}\u{04ae}\u{04af}\u{04ba}\u{04bb}\u{0456}]"
    )
    .expect("kazakh letter class must compile");
}

pub fn detect(question: &str) -> Lang {
    if KAZAKH_LETTERS.is_match(question) {
        Lang::Kazakh
    } else {
        Lang::Russian
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kazakh_specific_letters_detected() {
        assert_eq!(detect("қазақ тілі"), Lang::Kazakh);
        assert_eq!(detect("Сәлем!"), Lang::Kazakh);
        assert_eq!(detect("бір"), Lang::Kazakh);
        assert_eq!(detect("Ұлттық тарих"), Lang::Kazakh);
    }

    #[test]
    fn russian_alphabet_only_is_russian() {
        assert_eq!(detect("Что такое производная?"), Lang::Russian);
        assert_eq!(detect("Объясни закон Ома"), Lang::Russian);
    }

    #[test]
    fn latin_and_empty_default_to_russian() {
        assert_eq!(detect("what is 2+2"), Lang::Russian);
        assert_eq!(detect(""), Lang::Russian);
    }

    #[test]
    fn single_kazakh_letter_in_russian_text_wins() {
        assert_eq!(detect("Расскажи про город Алматы және степь"), Lang::Kazakh);
    }
}
