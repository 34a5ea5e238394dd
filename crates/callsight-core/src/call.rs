//! Call records: the aggregate root and everything it owns

use crate::config::GenerationConfig;
use crate::error::ConsistencyError;
use crate::numeric::round_to;
use crate::types::{Direction, Intent, Language, Rating, Speaker, Team, Topic};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Shortest gap reported as silence, in seconds
pub const PAUSE_THRESHOLD_SECS: f64 = 3.0;
/// Shortest gap classified as a hold, in seconds
pub const HOLD_THRESHOLD_SECS: f64 = 10.0;

const OFFSET_TOLERANCE: f64 = 1e-6;

/// Contact-center agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub agent_id: String,
    pub name: String,
    pub team: Team,
}

/// One speaker turn of a transcript
///
/// Speaking rate is derived from the word count and the offsets, so the two
/// cannot drift apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    speaker: Speaker,
    start: f64,
    end: f64,
    word_count: u32,
    excerpt: String,
}

impl TranscriptSegment {
    /// Returns `None` unless `0 <= start < end` and at least one word was spoken
    pub fn new(
        speaker: Speaker,
        start: f64,
        end: f64,
        word_count: u32,
        excerpt: impl Into<String>,
    ) -> Option<Self> {
        let well_formed = start.is_finite() && end.is_finite() && start >= 0.0 && end > start;
        if !well_formed || word_count == 0 {
            return None;
        }
        Some(Self {
            speaker,
            start,
            end,
            word_count,
            excerpt: excerpt.into(),
        })
    }

    pub fn speaker(&self) -> Speaker {
        self.speaker
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn word_count(&self) -> u32 {
        self.word_count
    }

    pub fn excerpt(&self) -> &str {
        &self.excerpt
    }

    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    pub fn words_per_minute(&self) -> f64 {
        self.word_count as f64 / (self.duration() / 60.0)
    }
}

/// Silence classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SilenceKind {
    /// 3s <= duration < 10s
    Pause,
    /// duration >= 10s
    Hold,
}

impl SilenceKind {
    /// `None` below the reporting threshold
    pub fn classify(duration: f64) -> Option<Self> {
        if duration >= HOLD_THRESHOLD_SECS {
            Some(SilenceKind::Hold)
        } else if duration >= PAUSE_THRESHOLD_SECS {
            Some(SilenceKind::Pause)
        } else {
            None
        }
    }
}

/// Gap between two consecutive segments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SilenceInterval {
    pub start: f64,
    pub end: f64,
    pub duration: f64,
    pub kind: SilenceKind,
}

impl SilenceInterval {
    /// Classify the gap `start..end`; gaps under the pause threshold yield `None`
    pub fn from_gap(start: f64, end: f64) -> Option<Self> {
        let duration = end - start;
        SilenceKind::classify(duration).map(|kind| Self {
            start,
            end,
            duration,
            kind,
        })
    }
}

/// Overlapping speech, marked at the overlap start
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterruptionEvent {
    pub at: f64,
    pub interrupter: Speaker,
    pub interrupted: Speaker,
}

/// Weight class of a compliance checklist item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightClass {
    Critical,
    Weighted,
    Standard,
}

/// Named compliance checklist item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChecklistItem {
    GreetingProper,
    Identification,
    CustomerVerification,
    DataProtectionMentioned,
    CallRecordingNotice,
    ClearCommunication,
    NoMisleadingInfo,
    ProperClosing,
    OptOutOffered,
}

impl ChecklistItem {
    pub const ALL: [ChecklistItem; 9] = [
        ChecklistItem::GreetingProper,
        ChecklistItem::Identification,
        ChecklistItem::CustomerVerification,
        ChecklistItem::DataProtectionMentioned,
        ChecklistItem::CallRecordingNotice,
        ChecklistItem::ClearCommunication,
        ChecklistItem::NoMisleadingInfo,
        ChecklistItem::ProperClosing,
        ChecklistItem::OptOutOffered,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ChecklistItem::GreetingProper => "greeting_proper",
            ChecklistItem::Identification => "identification",
            ChecklistItem::CustomerVerification => "customer_verification",
            ChecklistItem::DataProtectionMentioned => "data_protection_mentioned",
            ChecklistItem::CallRecordingNotice => "call_recording_notice",
            ChecklistItem::ClearCommunication => "clear_communication",
            ChecklistItem::NoMisleadingInfo => "no_misleading_info",
            ChecklistItem::ProperClosing => "proper_closing",
            ChecklistItem::OptOutOffered => "opt_out_offered",
        }
    }

    pub fn weight_class(self) -> WeightClass {
        match self {
            ChecklistItem::CustomerVerification
            | ChecklistItem::DataProtectionMentioned
            | ChecklistItem::NoMisleadingInfo => WeightClass::Critical,
            ChecklistItem::CallRecordingNotice
            | ChecklistItem::ProperClosing
            | ChecklistItem::GreetingProper => WeightClass::Weighted,
            ChecklistItem::Identification
            | ChecklistItem::ClearCommunication
            | ChecklistItem::OptOutOffered => WeightClass::Standard,
        }
    }

    /// Risk points added when this item fails
    pub fn risk_weight(self) -> u32 {
        match self {
            ChecklistItem::CustomerVerification
            | ChecklistItem::DataProtectionMentioned
            | ChecklistItem::NoMisleadingInfo => 5,
            ChecklistItem::CallRecordingNotice => 3,
            ChecklistItem::ProperClosing => 2,
            ChecklistItem::GreetingProper => 1,
            _ => 0,
        }
    }
}

/// Violation severe enough to be flagged on its own
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CriticalViolation {
    GdprMissing,
    IdNotVerified,
}

/// AutoQA compliance checklist outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceResult {
    pub greeting_proper: bool,
    pub identification: bool,
    pub customer_verification: bool,
    pub data_protection_mentioned: bool,
    pub call_recording_notice: bool,
    pub clear_communication: bool,
    pub no_misleading_info: bool,
    pub proper_closing: bool,
    pub opt_out_offered: bool,
    #[serde(default)]
    pub critical_violations: Vec<CriticalViolation>,
}

impl ComplianceResult {
    /// Every item passed, no violations
    pub fn all_passed() -> Self {
        Self {
            greeting_proper: true,
            identification: true,
            customer_verification: true,
            data_protection_mentioned: true,
            call_recording_notice: true,
            clear_communication: true,
            no_misleading_info: true,
            proper_closing: true,
            opt_out_offered: true,
            critical_violations: Vec::new(),
        }
    }

    pub fn passed(&self, item: ChecklistItem) -> bool {
        match item {
            ChecklistItem::GreetingProper => self.greeting_proper,
            ChecklistItem::Identification => self.identification,
            ChecklistItem::CustomerVerification => self.customer_verification,
            ChecklistItem::DataProtectionMentioned => self.data_protection_mentioned,
            ChecklistItem::CallRecordingNotice => self.call_recording_notice,
            ChecklistItem::ClearCommunication => self.clear_communication,
            ChecklistItem::NoMisleadingInfo => self.no_misleading_info,
            ChecklistItem::ProperClosing => self.proper_closing,
            ChecklistItem::OptOutOffered => self.opt_out_offered,
        }
    }

    pub fn set(&mut self, item: ChecklistItem, passed: bool) {
        let slot = match item {
            ChecklistItem::GreetingProper => &mut self.greeting_proper,
            ChecklistItem::Identification => &mut self.identification,
            ChecklistItem::CustomerVerification => &mut self.customer_verification,
            ChecklistItem::DataProtectionMentioned => &mut self.data_protection_mentioned,
            ChecklistItem::CallRecordingNotice => &mut self.call_recording_notice,
            ChecklistItem::ClearCommunication => &mut self.clear_communication,
            ChecklistItem::NoMisleadingInfo => &mut self.no_misleading_info,
            ChecklistItem::ProperClosing => &mut self.proper_closing,
            ChecklistItem::OptOutOffered => &mut self.opt_out_offered,
        };
        *slot = passed;
    }

    pub fn failed_items(&self) -> impl Iterator<Item = ChecklistItem> + '_ {
        ChecklistItem::ALL
            .into_iter()
            .filter(move |&item| !self.passed(item))
    }

    pub fn has_critical_violation(&self) -> bool {
        !self.critical_violations.is_empty()
    }

    /// Share of passed items as a percentage, one decimal
    pub fn score(&self) -> f64 {
        let passed = ChecklistItem::ALL
            .iter()
            .filter(|&&item| self.passed(item))
            .count();
        round_to(passed as f64 / ChecklistItem::ALL.len() as f64 * 100.0, 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionStatus {
    Full,
    Partial,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EscalationReason {
    Authority,
    Knowledge,
    CustomerRequest,
}

impl EscalationReason {
    pub const ALL: [EscalationReason; 3] = [
        EscalationReason::Authority,
        EscalationReason::Knowledge,
        EscalationReason::CustomerRequest,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EscalationReason::Authority => "authority",
            EscalationReason::Knowledge => "knowledge",
            EscalationReason::CustomerRequest => "customer_request",
        }
    }
}

/// How the call ended
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolutionOutcome {
    pub status: ResolutionStatus,
    pub customer_satisfied: bool,
    pub callback_needed: bool,
    pub escalated: bool,
    /// Present iff `escalated`
    #[serde(default)]
    pub escalation_reason: Option<EscalationReason>,
}

/// AutoQA quality assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityScores {
    pub active_listening: f64,
    pub empathy: f64,
    pub solution: f64,
    pub professional_tone: f64,
    pub script_adherence: Rating,
    pub call_control: Rating,
}

impl QualityScores {
    /// Mean of the four 0-100 sub-scores
    pub fn composite(&self) -> f64 {
        (self.active_listening + self.empathy + self.solution + self.professional_tone) / 4.0
    }

    fn sub_scores(&self) -> [(&'static str, f64); 4] {
        [
            ("active_listening", self.active_listening),
            ("empathy", self.empathy),
            ("solution", self.solution),
            ("professional_tone", self.professional_tone),
        ]
    }
}

/// Qualitative direction of a sentiment journey
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentTrend {
    StrongImprovement,
    SlightImprovement,
    Stable,
    Deterioration,
}

/// Customer sentiment at the start, middle and end of a call, each in [-1, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentJourney {
    pub start: f64,
    pub mid: f64,
    pub end: f64,
}

impl SentimentJourney {
    pub fn new(start: f64, mid: f64, end: f64) -> Option<Self> {
        let in_range = |v: f64| (-1.0..=1.0).contains(&v);
        if in_range(start) && in_range(mid) && in_range(end) {
            Some(Self { start, mid, end })
        } else {
            None
        }
    }

    pub fn delta(&self) -> f64 {
        self.end - self.start
    }

    pub fn trend(&self) -> SentimentTrend {
        let delta = self.delta();
        if delta > 0.3 {
            SentimentTrend::StrongImprovement
        } else if delta > 0.1 {
            SentimentTrend::SlightImprovement
        } else if delta < -0.1 {
            SentimentTrend::Deterioration
        } else {
            SentimentTrend::Stable
        }
    }

    /// Share of the initial negativity recovered, in percent
    pub fn recovery_rate(&self) -> f64 {
        let delta = self.delta();
        if self.start < 0.0 {
            delta / self.start.abs() * 100.0
        } else if delta > 0.0 {
            100.0
        } else {
            0.0
        }
    }
}

/// Topic and intent labels assigned by AutoQA
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicLabels {
    pub topic: Topic,
    pub sub_topics: Vec<String>,
    pub intent: Intent,
    pub complexity: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpportunityKind {
    Upsell,
    CrossSell,
    Closing,
}

/// Sales opportunity raised during a Sales team call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesOpportunity {
    pub kind: OpportunityKind,
    pub success: bool,
    pub value_eur: f64,
    pub product: String,
}

/// One contact-center call with all derived annotations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Call {
    pub call_id: String,
    pub timestamp: DateTime<Utc>,
    pub direction: Direction,
    pub language: Language,
    pub duration_sec: f64,
    pub agent_id: String,
    pub agent_name: String,
    pub team: Team,
    pub topic: TopicLabels,
    pub segments: Vec<TranscriptSegment>,
    pub silences: Vec<SilenceInterval>,
    pub silence_ratio: f64,
    #[serde(default)]
    pub interruptions: Vec<InterruptionEvent>,
    pub compliance: ComplianceResult,
    pub resolution: ResolutionOutcome,
    pub quality: QualityScores,
    pub sentiment: SentimentJourney,
    #[serde(default)]
    pub sales_opportunity: Option<SalesOpportunity>,
    pub autoqa_score: f64,
}

impl Call {
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }

    pub fn primary_topic(&self) -> Topic {
        self.topic.topic
    }

    pub fn turns(&self) -> usize {
        self.segments.len()
    }

    /// Total speaking time of one party, in seconds
    pub fn talk_seconds(&self, speaker: Speaker) -> f64 {
        self.segments
            .iter()
            .filter(|s| s.speaker() == speaker)
            .map(TranscriptSegment::duration)
            .sum()
    }

    /// Aggregate speaking rate of one party; `None` when they never spoke
    pub fn speaking_rate(&self, speaker: Speaker) -> Option<f64> {
        let (words, secs) = self
            .segments
            .iter()
            .filter(|s| s.speaker() == speaker)
            .fold((0u64, 0.0), |(w, t), s| {
                (w + s.word_count() as u64, t + s.duration())
            });
        (secs > 0.0).then(|| words as f64 / secs * 60.0)
    }

    /// Check every structural invariant of the record
    pub fn validate(&self) -> Result<(), ConsistencyError> {
        let call_id = || self.call_id.clone();

        if !(self.duration_sec.is_finite() && self.duration_sec > 0.0) {
            return Err(ConsistencyError::InvalidDuration {
                call_id: call_id(),
                duration: self.duration_sec,
            });
        }

        let mut previous: Option<&TranscriptSegment> = None;
        for (index, segment) in self.segments.iter().enumerate() {
            if !(segment.start() >= 0.0 && segment.end() > segment.start()) {
                return Err(ConsistencyError::InvalidSegment {
                    call_id: call_id(),
                    index,
                    start: segment.start(),
                    end: segment.end(),
                });
            }
            if segment.end() > self.duration_sec + OFFSET_TOLERANCE {
                return Err(ConsistencyError::SegmentPastEnd {
                    call_id: call_id(),
                    index,
                    end: segment.end(),
                    duration: self.duration_sec,
                });
            }
            if let Some(prev) = previous {
                if segment.start() < prev.start() || segment.end() <= prev.end() {
                    return Err(ConsistencyError::UnorderedSegments {
                        call_id: call_id(),
                        index,
                    });
                }
            }
            previous = Some(segment);
        }

        let mut last_end = f64::NEG_INFINITY;
        for (index, silence) in self.silences.iter().enumerate() {
            let length_matches = (silence.end - silence.start - silence.duration).abs() < 0.01;
            let kind_matches = SilenceKind::classify(silence.duration) == Some(silence.kind);
            if silence.end <= silence.start
                || !length_matches
                || !kind_matches
                || silence.start < last_end
            {
                return Err(ConsistencyError::InvalidSilence {
                    call_id: call_id(),
                    index,
                });
            }
            last_end = silence.end;
        }

        let sentiment = [
            ("sentiment.start", self.sentiment.start),
            ("sentiment.mid", self.sentiment.mid),
            ("sentiment.end", self.sentiment.end),
        ];
        for (field, value) in sentiment {
            check_range(&self.call_id, field, value, -1.0, 1.0)?;
        }
        for (field, value) in self.quality.sub_scores() {
            check_range(&self.call_id, field, value, 0.0, 100.0)?;
        }
        check_range(&self.call_id, "autoqa_score", self.autoqa_score, 0.0, 100.0)?;
        check_range(&self.call_id, "silence_ratio", self.silence_ratio, 0.0, 1.0)?;

        if self.resolution.escalated != self.resolution.escalation_reason.is_some() {
            return Err(ConsistencyError::EscalationMismatch { call_id: call_id() });
        }

        Ok(())
    }
}

fn check_range(
    call_id: &str,
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<(), ConsistencyError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConsistencyError::ValueOutOfRange {
            call_id: call_id.to_string(),
            field,
            value,
            min,
            max,
        })
    }
}

/// A complete generated dataset and the configuration that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallDataset {
    pub config: GenerationConfig,
    pub agents: Vec<Agent>,
    pub calls: Vec<Call>,
}
