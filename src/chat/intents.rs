//! Ordered keyword table for the chat assistant.
//!
//! Rules are evaluated top to bottom against the lower-cased message and the
//! first rule that matches decides the intent. Order matters: "help me budget"
//! is a help request, not a budget question.

use once_cell::sync::Lazy;
use regex::Regex;

// Whole words only, so "this" or "which" does not read as a greeting.
static GREETING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(hello|hi|hey)\b").expect("Invalid greeting regex"));
static DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d").expect("Invalid digit regex"));
static NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+(\.\d+)?").expect("Invalid number regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Greeting,
    Help,
    AboutProduct,
    ExpenseTracker,
    Budget,
    Planner,
    SipExplanation,
    SipCalculation,
    Dashboard,
    Summary,
    HowToSave,
    SavingTips,
    Motivation,
    Student,
    Security,
    Contact,
    Website,
    About,
    Goodbye,
    Thanks,
    Fallback,
}

pub struct IntentRule {
    pub intent: Intent,
    matches: fn(&str) -> bool,
}

impl IntentRule {
    pub fn matches(&self, query: &str) -> bool {
        (self.matches)(query)
    }
}

fn any_of(query: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| query.contains(keyword))
}

/// Decimal tokens in order of appearance (`12.5` is one token).
pub fn numeric_tokens(query: &str) -> Vec<&str> {
    NUMBER.find_iter(query).map(|m| m.as_str()).collect()
}

pub static RULES: &[IntentRule] = &[
    IntentRule {
        intent: Intent::Greeting,
        matches: |q| GREETING.is_match(q),
    },
    IntentRule {
        intent: Intent::Help,
        matches: |q| q.contains("help"),
    },
    IntentRule {
        intent: Intent::AboutProduct,
        matches: |q| any_of(q, &["finsmart", "lab"]),
    },
    IntentRule {
        intent: Intent::ExpenseTracker,
        matches: |q| any_of(q, &["expense", "track"]),
    },
    IntentRule {
        intent: Intent::Budget,
        matches: |q| q.contains("budget"),
    },
    IntentRule {
        intent: Intent::Planner,
        matches: |q| any_of(q, &["planner", "pocket"]),
    },
    IntentRule {
        intent: Intent::SipExplanation,
        matches: |q| q.contains("sip") && !DIGIT.is_match(q),
    },
    IntentRule {
        intent: Intent::SipCalculation,
        matches: |q| numeric_tokens(q).len() >= 3,
    },
    IntentRule {
        intent: Intent::Dashboard,
        matches: |q| q.contains("dashboard"),
    },
    IntentRule {
        intent: Intent::Summary,
        matches: |q| any_of(q, &["summary", "status"]),
    },
    IntentRule {
        intent: Intent::HowToSave,
        matches: |q| q.contains("how") && q.contains("save"),
    },
    IntentRule {
        intent: Intent::SavingTips,
        matches: |q| any_of(q, &["saving", "tip"]),
    },
    IntentRule {
        intent: Intent::Motivation,
        matches: |q| any_of(q, &["motivat", "goal"]),
    },
    IntentRule {
        intent: Intent::Student,
        matches: |q| q.contains("student"),
    },
    IntentRule {
        intent: Intent::Security,
        matches: |q| any_of(q, &["secure", "safety"]),
    },
    IntentRule {
        intent: Intent::Contact,
        matches: |q| any_of(q, &["contact", "linkedin", "github"]),
    },
    IntentRule {
        intent: Intent::Website,
        matches: |q| any_of(q, &["website", "webpage"]),
    },
    IntentRule {
        intent: Intent::About,
        matches: |q| any_of(q, &["about", "project"]),
    },
    IntentRule {
        intent: Intent::Goodbye,
        matches: |q| q.contains("bye"),
    },
    IntentRule {
        intent: Intent::Thanks,
        matches: |q| q.contains("thank"),
    },
];

/// Classifies an already lower-cased message.
pub fn classify(query: &str) -> Intent {
    RULES
        .iter()
        .find(|rule| rule.matches(query))
        .map(|rule| rule.intent)
        .unwrap_or(Intent::Fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_needs_a_whole_word() {
        assert_eq!(classify("hey there"), Intent::Greeting);
        assert_eq!(classify("hello, what is my budget"), Intent::Greeting);
        assert_eq!(classify("this budget"), Intent::Budget);
    }

    #[test]
    fn earlier_rules_take_priority() {
        assert_eq!(classify("help with budget"), Intent::Help);
        assert_eq!(classify("track my budget"), Intent::ExpenseTracker);
        assert_eq!(classify("sip 500 5 12"), Intent::SipCalculation);
        assert_eq!(classify("what is sip"), Intent::SipExplanation);
    }

    #[test]
    fn sip_calculation_needs_three_numbers() {
        assert_eq!(classify("500 5 12%"), Intent::SipCalculation);
        assert_eq!(classify("500 5"), Intent::Fallback);
        assert_eq!(numeric_tokens("500 2.5 12%"), vec!["500", "2.5", "12"]);
    }

    #[test]
    fn unmatched_text_falls_back() {
        assert_eq!(classify("weather today"), Intent::Fallback);
        assert_eq!(classify("goodbye"), Intent::Goodbye);
        assert_eq!(classify("thanks a lot"), Intent::Thanks);
    }
}
