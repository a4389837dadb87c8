// src/fallback.rs
//! Canned local answers used when the completions API is unreachable or
//! returns an unusable payload. This is the single source of truth; the
//! served web page carries no client-side copy.

use crate::subjects::Subject;

pub fn local_answer(subject: Option<Subject>, question: &str) -> String {
    let q = question.to_lowercase();
    let answer = match subject {
        Some(Subject::Math) => {
            if q.contains("производ") {
                "Производная — скорость изменения функции. Могу показать пример: d/dx x^2 = 2x."
            } else if q.contains("интегр") {
                "Интеграл — это площадь под графиком. Пример: ∫ x dx = x^2/2 + C."
            } else {
                "Сформулируйте задачу точнее: пример, объяснение понятия или решение?"
            }
        }
        Some(Subject::Physics) => {
            if q.contains("скорост") || q.contains("ускорен") {
                "Скорость — изменение координаты по времени. Формула средней скорости v = Δx/Δt."
            } else {
                "Уточните тему: механика, электростатика или оптика?"
            }
        }
        Some(Subject::Russian) => {
            if q.contains("орф") || q.contains("правил") {
                "Напишите слово или предложение — разберём орфографию и правила."
            } else {
                "Могу помочь с грамматикой, разбором предложений и орфографией."
            }
        }
        Some(Subject::Kazakh) => {
            "Казахский язык: напишите фразу или вопрос — помогу с грамматикой и переводом."
        }
        Some(Subject::History) => {
            "История Казахстана: уточните период или событие, и я дам краткое объяснение."
        }
        None => "Я могу помочь с учебными вопросами. Задайте вопрос конкретнее.",
    };
    answer.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn math_keywords_select_canned_answers() {
        let answer = local_answer(Some(Subject::Math), "Что такое Производная?");
        assert!(answer.contains("скорость изменения функции"));

        let answer = local_answer(Some(Subject::Math), "объясни интеграл");
        assert!(answer.contains("площадь под графиком"));
    }

    #[test]
    fn physics_keywords() {
        let answer = local_answer(Some(Subject::Physics), "что такое ускорение?");
        assert!(answer.contains("v = Δx/Δt"));
    }

    #[test]
    fn russian_keywords() {
        let answer = local_answer(Some(Subject::Russian), "проверь орфографию");
        assert!(answer.contains("орфографию и правила"));
    }

    #[test]
    fn subject_defaults_without_keywords() {
        let answer = local_answer(Some(Subject::Math), "привет");
        assert!(answer.contains("Сформулируйте задачу точнее"));

        let answer = local_answer(Some(Subject::Kazakh), "сәлем");
        assert!(answer.contains("Казахский язык"));

        let answer = local_answer(Some(Subject::History), "хан");
        assert!(answer.contains("История Казахстана"));
    }

    #[test]
    fn unknown_subject_gets_generic_answer() {
        let answer = local_answer(None, "что угодно");
        assert_eq!(answer, "Я могу помочь с учебными вопросами. Задайте вопрос конкретнее.");
    }

    #[test]
    fn answers_are_never_empty() {
        for subject in [
            None,
            Some(Subject::Math),
            Some(Subject::Physics),
            Some(Subject::Russian),
            Some(Subject::Kazakh),
            Some(Subject::History),
        ] {
            assert!(!local_answer(subject, "").is_empty());
        }
    }
}
