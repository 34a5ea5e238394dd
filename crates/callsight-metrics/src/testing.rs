//! Hand-built calls for unit tests

use callsight_core::{
    ChecklistItem, ComplianceResult, CriticalViolation, Direction, EscalationReason, Intent,
    Language, QualityScores, Rating, ResolutionOutcome, ResolutionStatus, SentimentJourney,
    Speaker, Team, Topic, TopicLabels, TranscriptSegment, Call,
};
use chrono::{TimeZone, Utc};

pub struct CallBuilder {
    call: Call,
}

impl CallBuilder {
    pub fn new(call_id: &str) -> Self {
        let segments = vec![
            TranscriptSegment::new(Speaker::Agent, 0.0, 60.0, 140, "Good day").unwrap(),
            TranscriptSegment::new(Speaker::Customer, 61.0, 120.0, 130, "Thank you").unwrap(),
        ];
        Self {
            call: Call {
                call_id: call_id.to_string(),
                timestamp: Utc.with_ymd_and_hms(2025, 6, 10, 10, 0, 0).unwrap(),
                direction: Direction::Inbound,
                language: Language::En,
                duration_sec: 240.0,
                agent_id: "AG1000".to_string(),
                agent_name: "Jan Novák".to_string(),
                team: Team::Support,
                topic: TopicLabels {
                    topic: Topic::Billing,
                    sub_topics: vec!["invoice".to_string()],
                    intent: Intent::ResolveProblem,
                    complexity: 2,
                },
                segments,
                silences: vec![],
                silence_ratio: 0.0,
                interruptions: vec![],
                compliance: ComplianceResult::all_passed(),
                resolution: ResolutionOutcome {
                    status: ResolutionStatus::Full,
                    customer_satisfied: true,
                    callback_needed: false,
                    escalated: false,
                    escalation_reason: None,
                },
                quality: QualityScores {
                    active_listening: 80.0,
                    empathy: 80.0,
                    solution: 80.0,
                    professional_tone: 80.0,
                    script_adherence: Rating::Good,
                    call_control: Rating::Good,
                },
                sentiment: SentimentJourney {
                    start: 0.0,
                    mid: 0.1,
                    end: 0.4,
                },
                sales_opportunity: None,
                autoqa_score: 92.0,
            },
        }
    }

    pub fn agent(mut self, id: &str, name: &str) -> Self {
        self.call.agent_id = id.to_string();
        self.call.agent_name = name.to_string();
        self
    }

    pub fn team(mut self, team: Team) -> Self {
        self.call.team = team;
        self
    }

    pub fn topic(mut self, topic: Topic) -> Self {
        self.call.topic.topic = topic;
        self.call.topic.complexity = topic.complexity();
        self
    }

    pub fn intent(mut self, intent: Intent) -> Self {
        self.call.topic.intent = intent;
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.call.direction = direction;
        self
    }

    pub fn language(mut self, language: Language) -> Self {
        self.call.language = language;
        self
    }

    pub fn day(mut self, y: i32, m: u32, d: u32) -> Self {
        self.call.timestamp = Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap();
        self
    }

    pub fn duration(mut self, secs: f64) -> Self {
        self.call.duration_sec = secs;
        self
    }

    pub fn resolution(mut self, status: ResolutionStatus, callback: bool, escalated: bool) -> Self {
        self.call.resolution.status = status;
        self.call.resolution.callback_needed = callback;
        self.call.resolution.escalated = escalated;
        self.call.resolution.escalation_reason = escalated.then_some(EscalationReason::Authority);
        self
    }

    pub fn escalation_reason(mut self, reason: EscalationReason) -> Self {
        self.call.resolution.escalated = true;
        self.call.resolution.escalation_reason = Some(reason);
        self
    }

    pub fn sentiment(mut self, start: f64, end: f64) -> Self {
        self.call.sentiment = SentimentJourney {
            start,
            mid: (start + end) / 2.0,
            end,
        };
        self
    }

    pub fn quality(mut self, score: f64) -> Self {
        let q = &mut self.call.quality;
        q.active_listening = score;
        q.empathy = score;
        q.solution = score;
        q.professional_tone = score;
        self
    }

    pub fn failed(mut self, items: &[ChecklistItem]) -> Self {
        for &item in items {
            self.call.compliance.set(item, false);
        }
        self
    }

    pub fn violation(mut self, violation: CriticalViolation) -> Self {
        self.call.compliance.critical_violations.push(violation);
        self
    }

    /// Break an invariant so screening drops the call
    pub fn corrupt(mut self) -> Self {
        self.call.autoqa_score = 140.0;
        self
    }

    pub fn build(self) -> Call {
        self.call
    }
}
