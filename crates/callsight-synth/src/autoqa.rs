//! AutoQA annotation synthesis
//!
//! Every dimension is drawn from a distribution conditioned on the call's
//! topic and the agent's team. Resolution status, callback and escalation
//! are drawn jointly so that combinations incompatible with first-contact
//! resolution only appear at a small edge-case rate.

use crate::profiles::{team_profile, topic_profile};
use crate::random::RandomSource;
use callsight_core::{
    round_to, ChecklistItem, ComplianceResult, CriticalViolation, EscalationReason, Intent,
    OpportunityKind, QualityScores, Rating, ResolutionOutcome, ResolutionStatus,
    SalesOpportunity, SentimentJourney, Team, Topic, TopicLabels,
};

/// Probability that a checklist item fails before topic/team adjustment
fn base_failure_rate(item: ChecklistItem) -> f64 {
    match item {
        ChecklistItem::GreetingProper => 0.05,
        ChecklistItem::Identification => 0.08,
        ChecklistItem::CustomerVerification => 0.10,
        ChecklistItem::DataProtectionMentioned => 0.12,
        ChecklistItem::CallRecordingNotice => 0.15,
        ChecklistItem::ClearCommunication => 0.03,
        ChecklistItem::NoMisleadingInfo => 0.02,
        ChecklistItem::ProperClosing => 0.10,
        ChecklistItem::OptOutOffered => 0.20,
    }
}

const MAX_FAILURE_RATE: f64 = 0.5;
const GDPR_VIOLATION_CHANCE: f64 = 0.20;
const ID_VIOLATION_CHANCE: f64 = 0.12;
/// Rate of FCR-incompatible flags on fully resolved calls
const EDGE_CASE_RATE: f64 = 0.01;
const SALES_OPPORTUNITY_CHANCE: f64 = 0.7;

const PRODUCTS: &[&str] = &[
    "Premium Plan",
    "Extended Warranty",
    "Add-on Service",
    "Upgrade Package",
    "Bundle Deal",
];

/// AutoQA output for one call
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub topic: TopicLabels,
    pub compliance: ComplianceResult,
    pub resolution: ResolutionOutcome,
    pub quality: QualityScores,
    pub sentiment: SentimentJourney,
    pub sales_opportunity: Option<SalesOpportunity>,
    pub autoqa_score: f64,
}

/// Annotate one call; the sampling order is fixed so output is reproducible
pub fn annotate(topic: Topic, team: Team, rng: &mut RandomSource) -> Annotation {
    let labels = synthesize_topic_labels(topic, rng);
    let compliance = synthesize_compliance(topic, team, rng);
    let resolution = synthesize_resolution(topic, rng);
    let quality = synthesize_quality(resolution.status, team, rng);
    let sentiment = synthesize_sentiment(topic, resolution.status, rng);
    let sales_opportunity = match team {
        Team::Sales => synthesize_sales_opportunity(rng),
        _ => None,
    };
    let autoqa_score = autoqa_score(&compliance, &quality);

    Annotation {
        topic: labels,
        compliance,
        resolution,
        quality,
        sentiment,
        sales_opportunity,
        autoqa_score,
    }
}

/// `0.6 * compliance + 0.4 * composite quality`, one decimal
pub fn autoqa_score(compliance: &ComplianceResult, quality: &QualityScores) -> f64 {
    round_to(0.6 * compliance.score() + 0.4 * quality.composite(), 1)
}

pub fn synthesize_topic_labels(topic: Topic, rng: &mut RandomSource) -> TopicLabels {
    let profile = topic_profile(topic);
    let count = rng.int_inclusive(1, 2) as usize;
    let sub_topics = rng
        .sample_distinct(profile.sub_topics, count)
        .into_iter()
        .map(|s| s.to_string())
        .collect();
    let intent = Intent::ALL[rng.weighted_index(&profile.intent_weights)];

    TopicLabels {
        topic,
        sub_topics,
        intent,
        complexity: topic.complexity(),
    }
}

pub fn synthesize_compliance(topic: Topic, team: Team, rng: &mut RandomSource) -> ComplianceResult {
    let factor = topic_profile(topic).compliance_factor * team_profile(team).compliance_factor;
    let mut result = ComplianceResult::all_passed();

    for item in ChecklistItem::ALL {
        let p_fail = (base_failure_rate(item) * factor).min(MAX_FAILURE_RATE);
        result.set(item, !rng.chance(p_fail));
    }

    if !result.data_protection_mentioned && rng.chance(GDPR_VIOLATION_CHANCE) {
        result.critical_violations.push(CriticalViolation::GdprMissing);
    }
    if !result.customer_verification && rng.chance(ID_VIOLATION_CHANCE) {
        result
            .critical_violations
            .push(CriticalViolation::IdNotVerified);
    }
    result
}

pub fn synthesize_resolution(topic: Topic, rng: &mut RandomSource) -> ResolutionOutcome {
    let complexity = topic.complexity() as f64;
    let bias = topic_profile(topic).escalation_bias;

    let status = if rng.chance(0.85 - 0.1 * complexity) {
        ResolutionStatus::Full
    } else if rng.chance(0.7) {
        ResolutionStatus::Partial
    } else {
        ResolutionStatus::None
    };

    let (p_callback, p_escalation, p_satisfied) = match status {
        ResolutionStatus::Full => (EDGE_CASE_RATE, EDGE_CASE_RATE, 0.9),
        ResolutionStatus::Partial => (0.4, (0.05 + 0.02 * complexity) * 1.5 * bias, 0.5),
        ResolutionStatus::None => (0.6, (0.20 + 0.03 * complexity) * bias, 0.0),
    };

    let callback_needed = rng.chance(p_callback);
    let escalated = rng.chance(p_escalation);
    let escalation_reason = escalated.then(|| *rng.pick(&EscalationReason::ALL));
    let customer_satisfied = rng.chance(p_satisfied);

    ResolutionOutcome {
        status,
        customer_satisfied,
        callback_needed,
        escalated,
        escalation_reason,
    }
}

pub fn synthesize_quality(
    status: ResolutionStatus,
    team: Team,
    rng: &mut RandomSource,
) -> QualityScores {
    let mean = if status == ResolutionStatus::Full {
        82.0
    } else {
        62.0
    };
    let dimension_offsets = [0.0, -8.0, 0.0, 8.0];
    let team_offsets = team_profile(team).quality_offsets;

    let mut scores = [0.0; 4];
    for (i, score) in scores.iter_mut().enumerate() {
        let raw = rng.gauss(mean + dimension_offsets[i] + team_offsets[i], 10.0);
        *score = round_to(raw.clamp(0.0, 100.0), 1);
    }

    let rating_weights = if status == ResolutionStatus::Full {
        [0.7, 0.25, 0.05]
    } else {
        [0.4, 0.4, 0.2]
    };
    let script_adherence = Rating::ALL[rng.weighted_index(&rating_weights)];
    let call_control = Rating::ALL[rng.weighted_index(&rating_weights)];

    QualityScores {
        active_listening: scores[0],
        empathy: scores[1],
        solution: scores[2],
        professional_tone: scores[3],
        script_adherence,
        call_control,
    }
}

pub fn synthesize_sentiment(
    topic: Topic,
    status: ResolutionStatus,
    rng: &mut RandomSource,
) -> SentimentJourney {
    let base = topic_profile(topic).sentiment_start;
    let start = clamp_sentiment(base + rng.uniform(-0.2, 0.2));
    let mid = clamp_sentiment(start + rng.uniform(0.1, 0.3));
    let end = match status {
        ResolutionStatus::Full => rng.uniform(0.5, 0.9),
        ResolutionStatus::Partial => rng.uniform(0.0, 0.5),
        ResolutionStatus::None => rng.uniform(-0.6, 0.1),
    };

    SentimentJourney {
        start: round_to(start, 3),
        mid: round_to(mid, 3),
        end: round_to(clamp_sentiment(end), 3),
    }
}

fn clamp_sentiment(v: f64) -> f64 {
    v.clamp(-1.0, 1.0)
}

pub fn synthesize_sales_opportunity(rng: &mut RandomSource) -> Option<SalesOpportunity> {
    if !rng.chance(SALES_OPPORTUNITY_CHANCE) {
        return None;
    }
    let kind = *rng.pick(&[
        OpportunityKind::Upsell,
        OpportunityKind::CrossSell,
        OpportunityKind::Closing,
    ]);
    let (success_rate, low, high) = match kind {
        OpportunityKind::Upsell => (0.35, 50.0, 200.0),
        OpportunityKind::CrossSell => (0.42, 30.0, 150.0),
        OpportunityKind::Closing => (0.61, 100.0, 500.0),
    };

    Some(SalesOpportunity {
        kind,
        success: rng.chance(success_rate),
        value_eur: round_to(rng.uniform(low, high), 2),
        product: rng.pick(PRODUCTS).to_string(),
    })
}
