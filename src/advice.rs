//! Advisor and chatbot transcripts as tagged lines instead of markdown.

use serde::Deserialize;

pub const ADVISOR_GREETING: &str = "Hello! I'm your personal AI Finance Advisor. I analyze your spending patterns, income, and financial goals to provide personalized advice. Ask me anything about your finances!";
pub const CHATBOT_GREETING: &str = "Hi! I'm your AI Chatbot powered by Gemini. I can answer general finance questions, explain concepts, and provide information about the real world. How can I help you today?";

pub const ADVISOR_FALLBACK: &str = "I apologize, I couldn't generate specific advice at this moment. Please try asking a more specific question about your finances.";
pub const CHATBOT_FALLBACK: &str = "I apologize, I couldn't process your request at this moment.";

pub const ADVISOR_QUICK_QUESTIONS: [&str; 5] = [
    "How can I save more money this month?",
    "Analyze my spending patterns",
    "What's my biggest expense category?",
    "Give me budgeting tips",
    "How can I reduce my expenses?",
];

pub const CHATBOT_QUICK_QUESTIONS: [&str; 6] = [
    "What is a mutual fund?",
    "Explain SIP investing",
    "What are tax-saving investments in India?",
    "How does compound interest work?",
    "What is the 50-30-20 budgeting rule?",
    "Explain inflation and its impact",
];

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SuggestedAction {
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub rationale: String,
    #[serde(default)]
    pub estimated_impact: f64,
}

/// Body of `POST /advisor`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AdvisorReply {
    #[serde(default)]
    pub explanations: Vec<String>,
    #[serde(default)]
    pub suggested_actions: Vec<SuggestedAction>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum AdviceLine {
    Heading(String),
    Action { index: usize, title: String },
    Detail { label: String, text: String },
    Bullet(String),
    Blank,
    Plain(String),
}

pub fn advice_lines(reply: &AdvisorReply) -> Vec<AdviceLine> {
    let mut lines = Vec::new();

    if !reply.explanations.is_empty() {
        lines.push(AdviceLine::Heading("Analysis:".to_string()));
        lines.extend(reply.explanations.iter().map(|e| AdviceLine::Plain(e.clone())));
        lines.push(AdviceLine::Blank);
    }

    if !reply.suggested_actions.is_empty() {
        lines.push(AdviceLine::Heading("Recommended Actions:".to_string()));
        for (i, action) in reply.suggested_actions.iter().enumerate() {
            lines.push(AdviceLine::Action {
                index: i + 1,
                title: action.action.clone(),
            });
            lines.push(AdviceLine::Detail {
                label: "Why:".to_string(),
                text: action.rationale.clone(),
            });
            if action.estimated_impact > 0.0 {
                lines.push(AdviceLine::Detail {
                    label: "Potential Savings:".to_string(),
                    text: format!("₹{:.2}/month", action.estimated_impact),
                });
            }
            lines.push(AdviceLine::Blank);
        }
    }

    if lines.is_empty() {
        lines.push(AdviceLine::Plain(ADVISOR_FALLBACK.to_string()));
    }
    lines
}

/// Classifies free text (chatbot replies, error notes) line by line.
pub fn parse_lines(text: &str) -> Vec<AdviceLine> {
    text.split('\n').map(classify).collect()
}

fn classify(line: &str) -> AdviceLine {
    if line.trim().is_empty() {
        return AdviceLine::Blank;
    }
    if line.len() >= 4 && line.starts_with("**") && line.ends_with("**") {
        return AdviceLine::Heading(line[2..line.len() - 2].to_string());
    }
    if let Some(rest) = line.strip_prefix("   - *") {
        if let Some((label, text)) = rest.split_once('*') {
            return AdviceLine::Detail {
                label: label.to_string(),
                text: text.to_string(),
            };
        }
    }
    if let Some(rest) = line.strip_prefix("   -") {
        return AdviceLine::Bullet(rest.to_string());
    }
    if let Some(action) = parse_action(line) {
        return action;
    }
    AdviceLine::Plain(line.to_string())
}

/// `3. **Cut dining out**` and anything after the closing stars is dropped.
fn parse_action(line: &str) -> Option<AdviceLine> {
    let (number, rest) = line.split_once(". **")?;
    if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let index = number.parse().ok()?;
    let title = rest.split_once("**").map(|(t, _)| t).unwrap_or(rest);
    Some(AdviceLine::Action {
        index,
        title: title.to_string(),
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub role: Role,
    pub lines: Vec<AdviceLine>,
}

impl ChatMessage {
    pub fn user(text: &str) -> Self {
        ChatMessage {
            role: Role::User,
            lines: vec![AdviceLine::Plain(text.to_string())],
        }
    }

    pub fn assistant(text: &str) -> Self {
        ChatMessage {
            role: Role::Assistant,
            lines: parse_lines(text),
        }
    }

    pub fn advice(reply: &AdvisorReply) -> Self {
        ChatMessage {
            role: Role::Assistant,
            lines: advice_lines(reply),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply() -> AdvisorReply {
        AdvisorReply {
            explanations: vec!["You spent 40% on food.".to_string()],
            suggested_actions: vec![
                SuggestedAction {
                    action: "Cook at home".to_string(),
                    rationale: "Dining out is your top category".to_string(),
                    estimated_impact: 1500.0,
                },
                SuggestedAction {
                    action: "Review subscriptions".to_string(),
                    rationale: "Several are unused".to_string(),
                    estimated_impact: 0.0,
                },
            ],
        }
    }

    #[test]
    fn test_advice_lines() {
        let lines = advice_lines(&reply());
        assert_eq!(
            lines,
            vec![
                AdviceLine::Heading("Analysis:".to_string()),
                AdviceLine::Plain("You spent 40% on food.".to_string()),
                AdviceLine::Blank,
                AdviceLine::Heading("Recommended Actions:".to_string()),
                AdviceLine::Action {
                    index: 1,
                    title: "Cook at home".to_string()
                },
                AdviceLine::Detail {
                    label: "Why:".to_string(),
                    text: "Dining out is your top category".to_string()
                },
                AdviceLine::Detail {
                    label: "Potential Savings:".to_string(),
                    text: "₹1500.00/month".to_string()
                },
                AdviceLine::Blank,
                AdviceLine::Action {
                    index: 2,
                    title: "Review subscriptions".to_string()
                },
                AdviceLine::Detail {
                    label: "Why:".to_string(),
                    text: "Several are unused".to_string()
                },
                AdviceLine::Blank,
            ]
        );
    }

    #[test]
    fn test_empty_reply_apologises() {
        assert_eq!(
            advice_lines(&AdvisorReply::default()),
            vec![AdviceLine::Plain(ADVISOR_FALLBACK.to_string())]
        );
    }

    #[test]
    fn test_parse_lines() {
        let text = "**Tips**\n1. **Save early** today\n   - *Why:* compounding\n   - keep going\n\nplain words";
        assert_eq!(
            parse_lines(text),
            vec![
                AdviceLine::Heading("Tips".to_string()),
                AdviceLine::Action {
                    index: 1,
                    title: "Save early".to_string()
                },
                AdviceLine::Detail {
                    label: "Why:".to_string(),
                    text: " compounding".to_string()
                },
                AdviceLine::Bullet(" keep going".to_string()),
                AdviceLine::Blank,
                AdviceLine::Plain("plain words".to_string()),
            ]
        );
    }

    #[test]
    fn test_numbers_without_bold_are_plain() {
        assert_eq!(
            parse_lines("1. just a list item"),
            vec![AdviceLine::Plain("1. just a list item".to_string())]
        );
        assert_eq!(parse_lines("****"), vec![AdviceLine::Heading(String::new())]);
    }

    #[test]
    fn test_reply_decodes_with_missing_fields() {
        let reply: AdvisorReply =
            serde_json::from_str(r#"{"suggested_actions":[{"action":"Save"}]}"#).expect("decodes");
        assert!(reply.explanations.is_empty());
        assert_eq!(reply.suggested_actions[0].estimated_impact, 0.0);
    }
}
