use crate::currency::CurrencyFormat;
use crate::ledger::Ledger;
use crate::planner::sip_future_value;

use super::intents::{classify, numeric_tokens, Intent};

/// Stateless rule-based assistant. Replies are plain lines, in display order.
#[derive(Debug, Clone, Default)]
pub struct ChatResponder {
    currency: CurrencyFormat,
}

impl ChatResponder {
    pub fn new(currency: CurrencyFormat) -> Self {
        Self { currency }
    }

    /// Returns no lines for blank input.
    pub fn respond(&self, message: &str, ledger: &Ledger) -> Vec<String> {
        let message = message.trim();
        if message.is_empty() {
            return Vec::new();
        }
        let query = message.to_lowercase();
        let intent = classify(&query);
        tracing::debug!(?intent, "chat intent resolved");
        match intent {
            Intent::SipCalculation => vec![self.sip_calculation(&query)],
            Intent::Summary => self.summary(ledger),
            Intent::Planner => lines(&[
                "Pocket Planner splits your money evenly across days.",
                &format!(
                    "Example: {} for 7 days leaves {} per day.",
                    self.currency.plain(1000.0),
                    self.currency.amount(1000.0 / 7.0)
                ),
                "Handy for managing daily pocket money.",
            ]),
            other => canned(other),
        }
    }

    fn sip_calculation(&self, query: &str) -> String {
        let tokens = numeric_tokens(query);
        let parsed: Vec<f64> = tokens
            .iter()
            .take(3)
            .filter_map(|token| token.parse().ok())
            .collect();
        let &[amount, years, rate] = parsed.as_slice() else {
            return SIP_FORM_HINT.to_string();
        };
        match sip_future_value(amount, years, rate) {
            Ok(value) => format!(
                "SIP result: investing {}/month for {} yrs at {}% grows to about {}.",
                self.currency.plain(amount),
                years,
                tokens[2],
                self.currency.amount(value)
            ),
            Err(err) => {
                tracing::debug!(error = %err, "sip calculation rejected");
                SIP_FORM_HINT.to_string()
            }
        }
    }

    fn summary(&self, ledger: &Ledger) -> Vec<String> {
        let total = ledger.total_spent();
        let mut reply = vec![format!(
            "You have recorded {} expenses totaling {}.",
            ledger.len(),
            self.currency.amount(total)
        )];
        match ledger.budget {
            Some(budget) => reply.push(format!(
                "Budget: {} | Remaining: {}",
                self.currency.plain(budget),
                self.currency.amount(budget - total)
            )),
            None => reply.push("No budget set yet. Try `budget <value>` to set one.".into()),
        }
        reply
    }
}

const SIP_FORM_HINT: &str =
    "Use three positive numbers: monthly amount, years, rate. Example: 500 5 12%";

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|line| line.to_string()).collect()
}

fn canned(intent: Intent) -> Vec<String> {
    let reply: &[&str] = match intent {
        Intent::Greeting => &[
            "Hi, I'm FinSmart Bot, your digital money friend!",
            "Ask me anything about budget, saving, SIP or expense tracking.",
        ],
        Intent::Help => &[
            "Here's what I can help with:",
            "1. Expense Tracker: record daily expenses",
            "2. Budget: control your spending",
            "3. SIP: calculate future investment value",
            "4. Pocket Planner: plan weekly or monthly money",
        ],
        Intent::AboutProduct => &[
            "FinSmart Lab is a finance tool for students.",
            "It keeps expenses, budget, SIP and savings in one dashboard.",
        ],
        Intent::ExpenseTracker => &[
            "Expense Tracker records your daily spending.",
            "Use `add <amount> <category> [date]`, for example `add 120 food`.",
            "Run `chart` to see spending per category.",
        ],
        Intent::Budget => &[
            "Budget lets you fix a spending limit.",
            "When your total expenses cross it you get a warning right away.",
            "Set it with `budget <value>`.",
        ],
        Intent::SipExplanation => &[
            "SIP means Systematic Investment Plan.",
            "You invest a small fixed amount every month and let it compound.",
            "Type something like: 500 5 12% (monthly amount, years, rate).",
        ],
        Intent::Dashboard => &[
            "The dashboard shows your financial summary.",
            "It covers total spent, savings, top category and remaining budget.",
        ],
        Intent::HowToSave => &[
            "Saving tips:",
            "1. Track every expense, small or big.",
            "2. Use a SIP for monthly savings.",
            "3. Avoid impulse shopping.",
            "4. Set 20% of your money aside every month.",
        ],
        Intent::SavingTips => &[
            "A few saving ideas:",
            "- Drop subscriptions you don't use.",
            "- Follow the 50-30-20 rule: 50% needs, 30% wants, 20% savings.",
            "- Try a no-spend week once a month.",
        ],
        Intent::Motivation => &[
            "Every small amount you save today compounds into something bigger.",
            "Consistent saving habits build a strong financial future.",
        ],
        Intent::Student => &[
            "FinSmart Lab is made for students.",
            "Track pocket money, plan expenses and learn financial discipline.",
        ],
        Intent::Security => &[
            "Your data stays on this machine, under the FinSmart data directory.",
            "Nothing is sent anywhere else.",
        ],
        Intent::Contact => &[
            "FinSmart Lab is a community project.",
            "Reach the maintainers through the project's issue tracker.",
        ],
        Intent::Website => &[
            "FinSmart started as a small web page for a hackathon.",
            "This shell brings the same tools to the terminal.",
        ],
        Intent::About => &[
            "About FinSmart Lab:",
            "- Built for students to manage personal finance.",
            "- Tracks spending, calculates SIP, plans budget and savings.",
        ],
        Intent::Goodbye => &["Goodbye! Keep saving smartly with FinSmart Lab."],
        Intent::Thanks => &["You're welcome! Always happy to help with finance tips."],
        Intent::Fallback
        | Intent::Planner
        | Intent::SipCalculation
        | Intent::Summary => &[
            "Hmm, I'm not sure about that.",
            "Try: 'help', 'what is sip', 'how to save' or 'show summary'.",
        ],
    };
    lines(reply)
}
