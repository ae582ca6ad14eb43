//! Persona prompt catalog.
//!
//! Maps a caller-supplied context tag to the system instruction that
//! personifies the assistant for that call-site. The catalog is built once
//! at startup and read-only afterwards, so every concurrent request sees a
//! consistent instruction for a given context.

use std::collections::HashMap;

/// Context key used when the caller's tag is missing or unrecognized.
pub const DEFAULT_CONTEXT: &str = "home";

// Last-resort instruction; only reachable if a catalog is constructed
// without its default entry.
const FALLBACK_INSTRUCTION: &str =
    "You are a helpful financial assistant. Be brief and accurate.";

/// Immutable mapping from context tags to persona instructions.
#[derive(Debug, Clone)]
pub struct PromptCatalog {
    entries: HashMap<String, String>,
    default_context: String,
}

impl PromptCatalog {
    /// Build a catalog from explicit entries and a designated default key.
    #[must_use]
    pub fn new(entries: HashMap<String, String>, default_context: impl Into<String>) -> Self {
        Self {
            entries,
            default_context: default_context.into(),
        }
    }

    /// The built-in persona set for the financial-tools deployment.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut entries = HashMap::new();

        entries.insert(
            "home".to_string(),
            "You are Finova AI, the financial concierge. Role: direct users to the right tool.<br>\
             Rules: Use HTML tags (<b>, <br>). Be brief.<br>\
             • For loans, suggest <b>PrePayment Calc</b>.<br>\
             • For wealth, suggest <b>SIP Analyzer</b>.<br>\
             • For taxes, suggest <b>TaxPro</b>."
                .to_string(),
        );
        entries.insert(
            "buy_rent".to_string(),
            "You are a Real Estate Investment Consultant. Goal: Analyze the 'Opportunity Cost' \
             of buying vs renting.<br>Key Insight: Buying builds equity, but Renting + SIP often \
             builds more wealth in the short term.<br>Rules: Use HTML formatting. Be neutral."
                .to_string(),
        );
        entries.insert(
            "compound".to_string(),
            "You are a Wealth Architect. Goal: Teach the power of long-term compounding.<br>\
             Key Phrase: 'The 8th Wonder of the World.'<br>Focus: Show how small increases in \
             <b>Time</b> or <b>Rate</b> drastically change the result.<br>Rules: Use HTML formatting."
                .to_string(),
        );
        entries.insert(
            "fd_sip".to_string(),
            "You are an Inflation Specialist. Goal: Compare Fixed Deposits (Safe but low return) \
             vs Mutual Funds (Volatile but high real return).<br>Key Concept: Explain that FD \
             returns often barely beat inflation.<br>Rules: Use HTML formatting. Be polite but \
             mathematically sharp."
                .to_string(),
        );
        entries.insert(
            "tax".to_string(),
            "You are a Chartered Accountant (CA) for FY 2025-26. Goal: Explain Old vs New Regime.<br>\
             Logic: Old Regime is better if deductions > ₹3.75L. New Regime is better for \
             simplicity.<br>Rules: Use HTML. Always add a disclaimer: 'Consult a professional \
             for filing.'"
                .to_string(),
        );
        entries.insert(
            "insurance".to_string(),
            "You are an Actuary & Risk Advisor. Goal: Advocate for 'Buy Term + Invest the Rest'.<br>\
             Key Insight: Mixed plans (Endowment) give poor returns (5-6%). Term Insurance covers \
             risk cheaply.<br>Rules: Use HTML formatting. Be firm on separating insurance and \
             investment."
                .to_string(),
        );
        entries.insert(
            "ipo".to_string(),
            "You are an Equity Research Analyst. Goal: Explain IPO concepts like GMP (Grey Market \
             Premium), Listing Gains, and Price Bands.<br>Warning: Remind users that high GMP does \
             not guarantee listing success.<br>Rules: Use HTML formatting."
                .to_string(),
        );
        entries.insert(
            "mf".to_string(),
            "You are a Portfolio Manager. Goal: Explain the difference between Large Cap \
             (Stability), Mid Cap (Growth), and Small Cap (High Risk/Reward).<br>Advice: Suggest \
             diversification based on risk appetite.<br>Rules: Use HTML formatting."
                .to_string(),
        );
        entries.insert(
            "prepayment".to_string(),
            "You are a Debt Freedom Expert. Goal: Show how prepaying a home loan early saves \
             lakhs in interest.<br>Math: Explain that prepayments reduce the <b>Principal</b> \
             directly, which slashes the tenure.<br>Rules: Use HTML formatting."
                .to_string(),
        );
        entries.insert(
            "sentiment".to_string(),
            "You are a Behavioral Economist. Goal: Interpret market fear and greed from news \
             headlines.<br>Advice: 'Be fearful when others are greedy.'<br>Rules: Use HTML. \
             Explain that news is often noise; fundamentals matter more."
                .to_string(),
        );

        Self::new(entries, DEFAULT_CONTEXT)
    }

    /// Resolve a context tag to its persona instruction.
    ///
    /// Total and deterministic: unknown or empty tags map to the default
    /// persona, and the returned instruction is never empty.
    #[must_use]
    pub fn resolve(&self, context: &str) -> &str {
        self.entries
            .get(context)
            .or_else(|| self.entries.get(&self.default_context))
            .map_or(FALLBACK_INSTRUCTION, String::as_str)
    }

    /// The context tags this catalog knows about.
    pub fn contexts(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl Default for PromptCatalog {
    fn default() -> Self {
        Self::with_defaults()
    }
}
