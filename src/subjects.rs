// src/subjects.rs
//! Static subject table: the school topics the tutor knows about and their
//! localized names used inside the system prompt.

use crate::language::Lang;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subject {
    Math,
    Physics,
    Russian,
    Kazakh,
    History,
}

impl Subject {
    /// Parses the subject id the front-end sends. Unknown ids are allowed;
    /// they get an empty subject description and the generic fallback.
    pub fn from_key(key: &str) -> Option<Subject> {
        match key {
            "math" => Some(Subject::Math),
            "physics" => Some(Subject::Physics),
            "russian" => Some(Subject::Russian),
            "kazakh" => Some(Subject::Kazakh),
            "history" => Some(Subject::History),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Subject::Math => "math",
            Subject::Physics => "physics",
            Subject::Russian => "russian",
            Subject::Kazakh => "kazakh",
            Subject::History => "history",
        }
    }

    /// Subject name in the language the answer will be given in.
    pub fn localized_name(&self, lang: Lang) -> &'static str {
        match (self, lang) {
            (Subject::Math, Lang::Russian) => "математики",
            (Subject::Math, Lang::Kazakh) => "математика",
            (Subject::Physics, Lang::Russian) => "физики",
            (Subject::Physics, Lang::Kazakh) => "физика",
            (Subject::Russian, Lang::Russian) => "русского языка",
            (Subject::Russian, Lang::Kazakh) => "орыс тілі",
            (Subject::Kazakh, Lang::Russian) => "казахского языка",
            (Subject::Kazakh, Lang::Kazakh) => "қазақ тілі",
            (Subject::History, Lang::Russian) => "истории Казахстана",
            (Subject::History, Lang::Kazakh) => "Қазақстан тарихы",
        }
    }
}

/// The system entry seeded as the first message of a subject's history.
/// The formatting rules keep model output renderable by marked + MathJax.
pub fn system_prompt(subject: Option<Subject>, lang: Lang) -> String {
    let desc = subject.map(|s| s.localized_name(lang)).unwrap_or("");
    let answer_language = match lang {
        Lang::Kazakh => "in Kazakh",
        Lang::Russian => "in Russian",
    };
    format!(
        "You are a helpful {} teacher. Answer concisely {}. \
         Use Markdown for formatting and LaTeX for mathematical formulas: \
         use $ ... $ for inline math expressions and $$ ... $$ for display equations. \
         Format multiple equations on separate lines.",
        desc, answer_language
    )
}
