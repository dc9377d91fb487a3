//! The onboarding survey every account answers before reaching the dashboard.

use std::collections::BTreeMap;

use crate::api::types::QuestionAnswer;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum QuestionKind {
    Select(&'static [&'static str]),
    Range {
        min: u64,
        max: u64,
        step: u64,
        unit: &'static str,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Question {
    pub id: u32,
    pub text: &'static str,
    pub kind: QuestionKind,
}

impl Question {
    /// How a range value reads on screen: rupee units lead, others trail.
    pub fn display_value(&self, value: &str) -> String {
        match self.kind {
            QuestionKind::Range { unit, .. } if unit.starts_with('₹') => format!("{unit}{value}"),
            QuestionKind::Range { unit, .. } => format!("{value}{unit}"),
            QuestionKind::Select(_) => value.to_string(),
        }
    }
}

pub const QUESTIONS: [Question; 15] = [
    Question {
        id: 1,
        text: "What is your primary financial goal?",
        kind: QuestionKind::Select(&[
            "Save for retirement",
            "Buy a house/flat",
            "Pay off debt/loan",
            "Build emergency fund",
            "Invest in mutual funds/stocks",
            "Children's education",
        ]),
    },
    Question {
        id: 2,
        text: "How much do you currently save per month?",
        kind: QuestionKind::Range { min: 0, max: 100_000, step: 5_000, unit: "₹" },
    },
    Question {
        id: 3,
        text: "What is your current employment status?",
        kind: QuestionKind::Select(&[
            "Salaried employee",
            "Self-employed/Business owner",
            "Freelancer/Consultant",
            "Government employee",
            "Student",
            "Homemaker",
            "Retired",
        ]),
    },
    Question {
        id: 4,
        text: "What is your annual household income (in lakhs)?",
        kind: QuestionKind::Range { min: 0, max: 50, step: 1, unit: "₹ lakhs" },
    },
    Question {
        id: 5,
        text: "How would you describe your risk tolerance for investments?",
        kind: QuestionKind::Select(&[
            "Very conservative (FD, PPF only)",
            "Conservative (Low risk)",
            "Moderate (Balanced)",
            "Aggressive (Equity focused)",
            "Very aggressive (High risk-high return)",
        ]),
    },
    Question {
        id: 6,
        text: "How much total debt do you currently have (including home loan, personal loan, credit card)?",
        kind: QuestionKind::Range { min: 0, max: 5_000_000, step: 100_000, unit: "₹" },
    },
    Question {
        id: 7,
        text: "What is your biggest financial concern?",
        kind: QuestionKind::Select(&[
            "Not saving enough",
            "Rising inflation",
            "Job security/Income stability",
            "High EMIs/Debt",
            "Medical expenses",
            "Children's education cost",
        ]),
    },
    Question {
        id: 8,
        text: "How many months of expenses do you have in emergency savings?",
        kind: QuestionKind::Range { min: 0, max: 24, step: 1, unit: "months" },
    },
    Question {
        id: 9,
        text: "How often do you track your spending?",
        kind: QuestionKind::Select(&["Daily", "Weekly", "Monthly", "Occasionally", "Never"]),
    },
    Question {
        id: 10,
        text: "What percentage of your income do you want to save?",
        kind: QuestionKind::Range { min: 0, max: 50, step: 5, unit: "%" },
    },
    Question {
        id: 11,
        text: "What is your investment experience?",
        kind: QuestionKind::Select(&[
            "No experience (only savings account)",
            "Beginner (FD, RD, PPF)",
            "Intermediate (Mutual funds, SIP)",
            "Advanced (Direct stocks, bonds)",
            "Expert (Options, derivatives)",
        ]),
    },
    Question {
        id: 12,
        text: "How much do you spend on non-essential items monthly (shopping, dining out, entertainment)?",
        kind: QuestionKind::Range { min: 0, max: 50_000, step: 2_500, unit: "₹" },
    },
    Question {
        id: 13,
        text: "What is your housing situation?",
        kind: QuestionKind::Select(&[
            "Living on rent",
            "Own house/flat with home loan",
            "Own house/flat (no loan)",
            "Living with parents/family",
            "Company-provided accommodation",
        ]),
    },
    Question {
        id: 14,
        text: "How many years until you want to retire?",
        kind: QuestionKind::Range { min: 5, max: 50, step: 5, unit: "years" },
    },
    Question {
        id: 15,
        text: "What motivates you to improve your finances?",
        kind: QuestionKind::Select(&[
            "Financial security for family",
            "Early retirement/FIRE",
            "Children's future",
            "Buy property/home",
            "Financial independence",
            "Build wealth",
        ]),
    },
];

/// Answers collected so far, keyed by question id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Answers(BTreeMap<u32, String>);

impl Answers {
    pub fn get(&self, id: u32) -> Option<&str> {
        self.0.get(&id).map(String::as_str)
    }

    pub fn set(&mut self, id: u32, value: impl Into<String>) {
        self.0.insert(id, value.into());
    }

    /// Sliders start at their minimum, which is a valid answer on its own.
    pub fn ensure_default(&mut self, question: &Question) {
        if let QuestionKind::Range { min, .. } = question.kind {
            self.0.entry(question.id).or_insert_with(|| min.to_string());
        }
    }

    pub fn is_answered(&self, id: u32) -> bool {
        self.get(id).is_some_and(|a| !a.is_empty())
    }

    pub fn is_complete(&self) -> bool {
        QUESTIONS.iter().all(|q| self.is_answered(q.id))
    }

    /// One entry per question in survey order; unanswered questions send "".
    pub fn to_payload(&self) -> Vec<QuestionAnswer> {
        QUESTIONS
            .iter()
            .map(|q| QuestionAnswer {
                q_id: q.id,
                answer: self.get(q.id).unwrap_or_default().to_string(),
            })
            .collect()
    }
}

/// Percent of the survey reached when showing question `index` (0-based).
pub fn progress_percent(index: usize) -> u32 {
    (((index + 1) as f64 / QUESTIONS.len() as f64) * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_survey_shape() {
        assert_eq!(QUESTIONS.len(), 15);
        for (i, q) in QUESTIONS.iter().enumerate() {
            assert_eq!(q.id as usize, i + 1);
            let is_select = matches!(q.kind, QuestionKind::Select(_));
            assert_eq!(is_select, i % 2 == 0, "question {} alternates kinds", q.id);
        }
    }

    #[test]
    fn test_payload_covers_every_question() {
        let mut answers = Answers::default();
        answers.set(1, "Save for retirement");
        answers.set(2, "15000");
        let payload = answers.to_payload();
        assert_eq!(payload.len(), 15);
        assert_eq!(payload[1], QuestionAnswer { q_id: 2, answer: "15000".to_string() });
        assert_eq!(payload[2].answer, "");
        assert!(!answers.is_complete());
    }

    #[test]
    fn test_range_defaults_count_as_answers() {
        let mut answers = Answers::default();
        answers.ensure_default(&QUESTIONS[13]);
        assert_eq!(answers.get(14), Some("5"));
        answers.ensure_default(&QUESTIONS[0]);
        assert!(!answers.is_answered(1));

        answers.set(14, "30");
        answers.ensure_default(&QUESTIONS[13]);
        assert_eq!(answers.get(14), Some("30"));
    }

    #[test]
    fn test_complete_when_all_answered() {
        let mut answers = Answers::default();
        for q in QUESTIONS.iter() {
            match q.kind {
                QuestionKind::Select(options) => answers.set(q.id, options[0]),
                QuestionKind::Range { .. } => answers.ensure_default(q),
            }
        }
        assert!(answers.is_complete());
        answers.set(9, "");
        assert!(!answers.is_complete());
    }

    #[test]
    fn test_display_value_and_progress() {
        assert_eq!(QUESTIONS[1].display_value("5000"), "₹5000");
        assert_eq!(QUESTIONS[3].display_value("12"), "₹ lakhs12");
        assert_eq!(QUESTIONS[9].display_value("20"), "20%");
        assert_eq!(progress_percent(0), 7);
        assert_eq!(progress_percent(14), 100);
    }
}
