//! Deterministic scoring of a survey submission against the question catalog.

use std::collections::BTreeMap;

use crate::errors::AppError;
use crate::survey::catalog::{AnswerChoice, QuestionCatalog};

/// Aggregate score for one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreResult {
    /// Sum of weights (1–4) of the valid answers.
    pub total_score: u32,
    /// 4 × count of submitted entries — valid or not, recognized or not.
    pub max_score: u32,
    /// round(100 × total / max), half up.
    pub wellness_score: u32,
}

/// A recognized answer rewritten from its letter to the option display text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandedResponse {
    pub question: String,
    pub answer: String,
}

/// Scoring output: the aggregate result plus the expanded (question, answer)
/// pairs used for prompt assembly.
#[derive(Debug, Clone)]
pub struct ScoredSurvey {
    pub score: ScoreResult,
    pub expanded: Vec<ExpandedResponse>,
}

/// Scores a submission. Pure: the input map is left untouched and the
/// expanded pairs come back as a new structure, in catalog order.
///
/// `max_score` counts every submitted key. Entries with unknown question ids
/// or letters outside `a`..`d` still inflate the denominator but contribute
/// nothing to `total_score` and are excluded from the expanded output.
///
/// An empty submission is rejected outright — `max_score` would be zero and
/// the wellness ratio undefined.
pub fn score_survey(
    catalog: &QuestionCatalog,
    responses: &BTreeMap<String, String>,
) -> Result<ScoredSurvey, AppError> {
    if responses.is_empty() {
        return Err(AppError::EmptySurvey);
    }

    let max_score = 4 * responses.len() as u32;
    let mut total_score = 0;
    let mut expanded = Vec::new();

    // Catalog order keeps the prompt independent of map iteration order.
    for question in catalog.questions() {
        if let Some(raw) = responses.get(&question.id) {
            if let Some(choice) = AnswerChoice::parse(raw) {
                total_score += choice.weight();
                expanded.push(ExpandedResponse {
                    question: question.text.clone(),
                    answer: question.option_text(choice).to_string(),
                });
            }
        }
    }

    let wellness_score = (f64::from(100 * total_score) / f64::from(max_score)).round() as u32;

    Ok(ScoredSurvey {
        score: ScoreResult {
            total_score,
            max_score,
            wellness_score,
        },
        expanded,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::survey::catalog::Question;

    fn responses(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_round_trip_two_answers() {
        let catalog = QuestionCatalog::canonical();
        let scored = score_survey(&catalog, &responses(&[("q1", "d"), ("q2", "a")])).unwrap();
        assert_eq!(scored.score.total_score, 5);
        assert_eq!(scored.score.max_score, 8);
        // 100 * 5 / 8 = 62.5 → rounds up
        assert_eq!(scored.score.wellness_score, 63);
    }

    #[test]
    fn test_full_submission_all_d_scores_100() {
        let catalog = QuestionCatalog::canonical();
        let all_d: BTreeMap<String, String> = (1..=13)
            .map(|i| (format!("q{i}"), "d".to_string()))
            .collect();
        let scored = score_survey(&catalog, &all_d).unwrap();
        assert_eq!(scored.score.total_score, 52);
        assert_eq!(scored.score.max_score, 52);
        assert_eq!(scored.score.wellness_score, 100);
        assert_eq!(scored.expanded.len(), 13);
    }

    #[test]
    fn test_full_submission_all_a_scores_25() {
        let catalog = QuestionCatalog::canonical();
        let all_a: BTreeMap<String, String> = (1..=13)
            .map(|i| (format!("q{i}"), "a".to_string()))
            .collect();
        let scored = score_survey(&catalog, &all_a).unwrap();
        assert_eq!(scored.score.total_score, 13);
        assert_eq!(scored.score.wellness_score, 25);
    }

    #[test]
    fn test_unknown_question_id_inflates_max_only() {
        let catalog = QuestionCatalog::canonical();
        let scored = score_survey(&catalog, &responses(&[("q1", "a"), ("q99", "d")])).unwrap();
        assert_eq!(scored.score.total_score, 1);
        assert_eq!(scored.score.max_score, 8);
        // 100 * 1 / 8 = 12.5 → rounds up
        assert_eq!(scored.score.wellness_score, 13);
        assert_eq!(scored.expanded.len(), 1);
    }

    #[test]
    fn test_invalid_letter_inflates_max_only() {
        let catalog = QuestionCatalog::canonical();
        let scored = score_survey(&catalog, &responses(&[("q1", "e"), ("q2", "b")])).unwrap();
        assert_eq!(scored.score.total_score, 2);
        assert_eq!(scored.score.max_score, 8);
        assert_eq!(scored.score.wellness_score, 25);
    }

    #[test]
    fn test_invalid_letter_dropped_from_expanded_output() {
        let catalog = QuestionCatalog::canonical();
        let scored = score_survey(&catalog, &responses(&[("q1", "e"), ("q2", "b")])).unwrap();
        assert_eq!(scored.expanded.len(), 1);
        assert!(scored.expanded[0].question.contains("busy day"));
        assert_eq!(scored.expanded[0].answer, "A bit");
    }

    #[test]
    fn test_only_invalid_entries_scores_zero() {
        let catalog = QuestionCatalog::canonical();
        let scored = score_survey(&catalog, &responses(&[("q1", "e")])).unwrap();
        assert_eq!(scored.score.total_score, 0);
        assert_eq!(scored.score.max_score, 4);
        assert_eq!(scored.score.wellness_score, 0);
        assert!(scored.expanded.is_empty());
    }

    #[test]
    fn test_empty_submission_rejected() {
        let catalog = QuestionCatalog::canonical();
        let result = score_survey(&catalog, &BTreeMap::new());
        assert!(matches!(result, Err(AppError::EmptySurvey)));
    }

    #[test]
    fn test_letters_expand_to_option_text() {
        let catalog = QuestionCatalog::canonical();
        let scored = score_survey(&catalog, &responses(&[("q1", "b")])).unwrap();
        assert_eq!(scored.expanded[0].answer, "Occasionally");
    }

    #[test]
    fn test_expanded_pairs_follow_catalog_order() {
        let catalog = QuestionCatalog::canonical();
        // BTreeMap orders "q10" before "q2"; the scorer must not.
        let scored = score_survey(&catalog, &responses(&[("q10", "a"), ("q2", "a")])).unwrap();
        assert!(scored.expanded[0].question.contains("busy day"));
        assert!(scored.expanded[1].question.contains("refreshed"));
    }

    #[test]
    fn test_input_map_is_not_mutated() {
        let catalog = QuestionCatalog::canonical();
        let input = responses(&[("q1", "d")]);
        let _ = score_survey(&catalog, &input).unwrap();
        assert_eq!(input.get("q1").map(String::as_str), Some("d"));
    }

    #[test]
    fn test_alternate_catalog() {
        let catalog = QuestionCatalog::new(vec![Question {
            id: "color".to_string(),
            text: "Favorite color?".to_string(),
            options: [
                "Red".to_string(),
                "Green".to_string(),
                "Blue".to_string(),
                "Yellow".to_string(),
            ],
        }]);
        let scored = score_survey(&catalog, &responses(&[("color", "c")])).unwrap();
        assert_eq!(scored.score.total_score, 3);
        assert_eq!(scored.score.max_score, 4);
        assert_eq!(scored.score.wellness_score, 75);
        assert_eq!(scored.expanded[0].answer, "Blue");
    }
}
