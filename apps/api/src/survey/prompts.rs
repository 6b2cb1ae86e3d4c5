// Prompt constants and assembly for the survey analysis call.

use crate::survey::handlers::PersonalInformation;
use crate::survey::scoring::ExpandedResponse;

/// System prompt for the narrative analysis call.
pub const ANALYSIS_SYSTEM: &str = "You are a helpful wellness expert.";

/// Analysis prompt template.
/// Replace: {name}, {age}, {gender}, {email}, {phone}, {wellness_score}, {responses}
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"You are a wellness coach. Given the following user details and quiz responses, provide a concise summary with the user's wellness score ({wellness_score}/100) and a personalized recommendation for wellness services. Greet the user by name at the beginning of the response. Do NOT include the user's contact information (email or phone) anywhere in the generated output.

Personal Information:
- Name: {name}
- Age: {age}
- Gender: {gender}
- Email: {email}
- Phone: {phone}

Wellness Score: {wellness_score}/100

Survey Responses:
{responses}

Please provide a comprehensive analysis in HTML format with the following sections:
1. Overall Wellness Assessment (including the score interpretation)
2. Key Strengths and Areas for Improvement
3. Personalized Recommendations for:
   - Physical Wellness
   - Mental Wellness
   - Sleep Quality
   - Stress Management
4. Suggested Wellness Practices and Activities
5. Next Steps and Action Plan

Format the response with appropriate HTML headings, paragraphs, and bullet points for better readability."#;

/// Builds the analysis prompt from applicant details, the computed score, and
/// the expanded (question, answer) pairs. Only recognized questions appear;
/// the scorer has already dropped everything else.
pub fn build_analysis_prompt(
    info: &PersonalInformation,
    wellness_score: u32,
    expanded: &[ExpandedResponse],
) -> String {
    let responses = expanded
        .iter()
        .map(|r| format!("{}\nAnswer: {}", r.question, r.answer))
        .collect::<Vec<_>>()
        .join("\n\n");

    ANALYSIS_PROMPT_TEMPLATE
        .replace("{name}", &info.name)
        .replace("{age}", &info.age_display())
        .replace("{gender}", &info.gender)
        .replace("{email}", &info.email)
        .replace("{phone}", &info.phone)
        .replace("{wellness_score}", &wellness_score.to_string())
        .replace("{responses}", &responses)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info() -> PersonalInformation {
        PersonalInformation {
            name: "Asha".to_string(),
            age: serde_json::json!(34),
            gender: "female".to_string(),
            email: "asha@example.com".to_string(),
            phone: "9876543210".to_string(),
        }
    }

    fn expanded() -> Vec<ExpandedResponse> {
        vec![
            ExpandedResponse {
                question: "How often do you experience persistent muscle tension or stiffness?"
                    .to_string(),
                answer: "Constantly".to_string(),
            },
            ExpandedResponse {
                question: "How often do you wake up feeling refreshed?".to_string(),
                answer: "Rarely".to_string(),
            },
        ]
    }

    #[test]
    fn test_prompt_contains_score_and_identity() {
        let prompt = build_analysis_prompt(&info(), 63, &expanded());
        assert!(prompt.contains("63/100"));
        assert!(prompt.contains("Name: Asha"));
        assert!(prompt.contains("Age: 34"));
    }

    #[test]
    fn test_prompt_contains_expanded_pairs_in_order() {
        let prompt = build_analysis_prompt(&info(), 63, &expanded());
        let tension = prompt.find("muscle tension").expect("first question");
        let refreshed = prompt.find("feeling refreshed").expect("second question");
        assert!(tension < refreshed);
        assert!(prompt.contains("Answer: Constantly"));
        assert!(prompt.contains("Answer: Rarely"));
    }

    #[test]
    fn test_prompt_carries_contact_omission_instruction() {
        let prompt = build_analysis_prompt(&info(), 50, &expanded());
        assert!(prompt.contains("Do NOT include the user's contact information"));
    }

    #[test]
    fn test_prompt_carries_greeting_instruction() {
        let prompt = build_analysis_prompt(&info(), 50, &expanded());
        assert!(prompt.contains("Greet the user by name"));
    }

    #[test]
    fn test_no_unfilled_placeholders_remain() {
        let prompt = build_analysis_prompt(&info(), 42, &expanded());
        assert!(!prompt.contains('{'));
        assert!(!prompt.contains('}'));
    }

    #[test]
    fn test_string_age_rendered_without_quotes() {
        let mut i = info();
        i.age = serde_json::json!("thirty-four");
        let prompt = build_analysis_prompt(&i, 42, &expanded());
        assert!(prompt.contains("Age: thirty-four"));
    }
}
