use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};

use crate::advisor::{suggest_with, AdvisorThresholds, Recommendation};
use crate::amortization::AmortizationQuote;
use crate::domain::{ApplicationFacts, CreditPolicy, Verdict};
use crate::error::Result;
use crate::observability::MetricsRegistry;
use crate::rules::RuleSet;

/// Everything decided about one application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreditDecision {
    pub verdict: Verdict,

    /// Present iff the verdict is an approval
    pub quote: Option<AmortizationQuote>,

    /// Advice, computed regardless of the verdict
    pub recommendation: Recommendation,

    /// Policy version the verdict was reached under
    pub policy_version: String,
}

/// Runs the gate chain, quotes approvals and attaches advice.
///
/// Holds no per-application state; one instance can serve any number of
/// threads.
#[derive(Debug)]
pub struct Underwriter {
    policy: CreditPolicy,
    ruleset: RuleSet,
    advisor: AdvisorThresholds,
    metrics: Arc<MetricsRegistry>,
}

impl Underwriter {
    /// Create an underwriter with its own metrics registry.
    pub fn new(policy: CreditPolicy) -> Self {
        Underwriter::with_metrics(policy, Arc::new(MetricsRegistry::new()))
    }

    /// Create an underwriter that records into a shared registry.
    pub fn with_metrics(policy: CreditPolicy, metrics: Arc<MetricsRegistry>) -> Self {
        let ruleset = RuleSet::from_policy(&policy);
        let advisor = AdvisorThresholds::from(&policy.params);

        Underwriter {
            policy,
            ruleset,
            advisor,
            metrics,
        }
    }

    pub fn policy(&self) -> &CreditPolicy {
        &self.policy
    }

    pub fn policy_version(&self) -> &str {
        &self.policy.version
    }

    pub fn metrics(&self) -> &Arc<MetricsRegistry> {
        &self.metrics
    }

    /// Run the gate chain only.
    pub fn evaluate(&self, facts: &ApplicationFacts) -> Result<Verdict> {
        self.ruleset.evaluate(facts)
    }

    /// Quote an application at the policy rate.
    ///
    /// Callers should only quote approved applications; `decide` enforces it.
    pub fn quote(&self, facts: &ApplicationFacts) -> Result<AmortizationQuote> {
        AmortizationQuote::new(facts, self.policy.params.annual_rate_pct)
    }

    /// Advice for an application under the policy thresholds.
    pub fn recommend(&self, facts: &ApplicationFacts) -> Result<Recommendation> {
        suggest_with(
            &self.advisor,
            facts.requested_amount,
            facts.monthly_income,
            facts.term_months,
            facts.credit_score,
        )
    }

    /// Decide an application: verdict, quote on approval, and advice.
    pub fn decide(&self, facts: &ApplicationFacts) -> Result<CreditDecision> {
        let start = Instant::now();

        let verdict = self.evaluate(facts)?;
        let quote = if verdict.is_approved() {
            Some(self.quote(facts)?)
        } else {
            None
        };
        let recommendation = self.recommend(facts)?;

        self.metrics.record_verdict(&verdict);
        if quote.is_some() {
            self.metrics.record_quote();
        }
        self.metrics.record_latency(start);

        match &verdict {
            Verdict::Approved => {
                info!(
                    decision = %verdict,
                    policy_version = %self.policy.version,
                    installment = ?quote.as_ref().map(|q| q.monthly_installment),
                    "Application approved"
                );
            }
            Verdict::Rejected { reason } => {
                info!(
                    decision = %verdict,
                    code = %reason.code,
                    policy_version = %self.policy.version,
                    "Application rejected"
                );
            }
        }
        debug!(
            suggestions = recommendation.suggestions.len(),
            income_pct = %recommendation.income_percentage,
            "Recommendation computed"
        );

        Ok(CreditDecision {
            verdict,
            quote,
            recommendation,
            policy_version: self.policy.version.clone(),
        })
    }
}

impl Default for Underwriter {
    fn default() -> Self {
        Underwriter::new(CreditPolicy::standard())
    }
}
