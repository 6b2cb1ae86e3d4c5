#![allow(dead_code)]

//! The wellness questionnaire: 13 fixed multiple-choice questions with four
//! options each. Option position determines scoring weight (a=1 .. d=4).

/// One of the four legal answer letters.
///
/// Closed set — an unrecognized submission string parses to `None` instead of
/// silently routing through string lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerChoice {
    A,
    B,
    C,
    D,
}

impl AnswerChoice {
    /// Parses a raw submission letter. Anything outside lowercase `a`..`d`
    /// (including uppercase and empty strings) is `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "a" => Some(Self::A),
            "b" => Some(Self::B),
            "c" => Some(Self::C),
            "d" => Some(Self::D),
            _ => None,
        }
    }

    /// Zero-based option index.
    pub fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
            Self::C => 2,
            Self::D => 3,
        }
    }

    /// Scoring weight: option index + 1.
    pub fn weight(self) -> u32 {
        self.index() as u32 + 1
    }
}

/// A single survey question. The four-element array is the invariant: every
/// question has exactly four options.
#[derive(Debug, Clone)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub options: [String; 4],
}

impl Question {
    /// Display text for the given answer choice.
    pub fn option_text(&self, choice: AnswerChoice) -> &str {
        &self.options[choice.index()]
    }
}

/// Immutable question set, constructed once at startup and passed explicitly
/// to the scorer. Tests build alternate catalogs the same way.
#[derive(Debug, Clone)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

impl QuestionCatalog {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// The built-in wellness quiz served by this process.
    pub fn canonical() -> Self {
        Self::new(vec![
            question(
                "q1",
                "How often do you experience persistent muscle tension or stiffness?",
                ["Rarely", "Occasionally", "Frequently", "Constantly"],
            ),
            question(
                "q2",
                "At the end of a busy day, how cluttered is your mind with stress or worries?",
                ["Barely", "A bit", "Quite a lot", "Overwhelmingly"],
            ),
            question(
                "q3",
                "How balanced do you feel across your physical, mental, and emotional well-being?",
                [
                    "Very balanced",
                    "Somewhat balanced",
                    "Slightly imbalanced",
                    "Very imbalanced",
                ],
            ),
            question(
                "q4",
                "Which outcome are you craving most from a wellness session?",
                [
                    "Relaxed muscles",
                    "A calm mind",
                    "An uplifted mood",
                    "Better sleep",
                ],
            ),
            question(
                "q5",
                "How often would you ideally schedule a wellness session to maintain overall balance?",
                [
                    "Only when I feel run-down",
                    "Quarterly",
                    "Monthly",
                    "Weekly",
                ],
            ),
            question(
                "q6",
                "When stress peaks, which quick reset helps you most?",
                [
                    "Taking a short walk",
                    "Spending time in a quiet space",
                    "Listening to soothing sounds",
                    "Practicing deep breathing",
                ],
            ),
            question(
                "q7",
                "How would you rate your flexibility and joint mobility?",
                [
                    "Very limited",
                    "Below average",
                    "Above average",
                    "Excellent",
                ],
            ),
            question(
                "q8",
                "Which supportive practice best complements your fitness routine?",
                [
                    "Foot or hand exercises",
                    "Applying gentle warmth (heat pad)",
                    "Listening to energizing music",
                    "Assisted or partner-led stretching",
                ],
            ),
            question(
                "q9",
                "How long does it usually take you to fall asleep?",
                [
                    "Over 60 minutes",
                    "30–60 minutes",
                    "15–30 minutes",
                    "Under 15 minutes",
                ],
            ),
            question(
                "q10",
                "How often do you wake up feeling refreshed?",
                ["Rarely", "Sometimes", "Often", "Almost always"],
            ),
            question(
                "q11",
                "Over the past week, how steady has your mood been?",
                [
                    "Very erratic",
                    "Somewhat erratic",
                    "Mostly steady",
                    "Very steady",
                ],
            ),
            question(
                "q12",
                "Which environment helps you recenter best?",
                [
                    "A quiet indoor space",
                    "A softly lit room",
                    "An outdoor/nature setting",
                    "A bright, colorful area",
                ],
            ),
            question(
                "q13",
                "How often do you intentionally pause to check in with your feelings?",
                [
                    "Never",
                    "Once a day",
                    "Several times a day",
                    "Continuously as needed",
                ],
            ),
        ])
    }

    /// Looks up a question by id. Unknown ids return `None` and are skipped
    /// by the scorer.
    pub fn get(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Questions in catalog order (q1..q13 for the canonical set).
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

fn question(id: &str, text: &str, options: [&str; 4]) -> Question {
    Question {
        id: id.to_string(),
        text: text.to_string(),
        options: options.map(|o| o.to_string()),
    }
}
