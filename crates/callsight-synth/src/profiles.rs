//! Per-topic, per-team and per-language generation parameters

use callsight_core::{Language, Speaker, Team, Topic};

/// How calls about one topic tend to unfold
#[derive(Debug)]
pub struct TopicProfile {
    /// Mean customer sentiment when the call opens
    pub sentiment_start: f64,
    /// Range of a single turn, in seconds
    pub turn_secs: (f64, f64),
    /// Per-gap chance of a pause-length silence
    pub pause_chance: f64,
    /// Per-gap chance of a hold-length silence
    pub hold_chance: f64,
    /// Multiplier on compliance failure probabilities
    pub compliance_factor: f64,
    /// Multiplier on escalation probability
    pub escalation_bias: f64,
    pub sub_topics: &'static [&'static str],
    /// Weights in `Intent::ALL` order
    pub intent_weights: [f64; 4],
}

const BILLING: TopicProfile = TopicProfile {
    sentiment_start: -0.3,
    turn_secs: (3.0, 8.0),
    pause_chance: 0.06,
    hold_chance: 0.02,
    compliance_factor: 1.0,
    escalation_bias: 1.0,
    sub_topics: &["invoice", "payment", "charges"],
    intent_weights: [0.3, 0.5, 0.15, 0.05],
};

const TECHNICAL: TopicProfile = TopicProfile {
    sentiment_start: -0.5,
    turn_secs: (4.0, 10.0),
    pause_chance: 0.14,
    hold_chance: 0.06,
    compliance_factor: 1.1,
    escalation_bias: 1.0,
    sub_topics: &["connectivity", "device", "software"],
    intent_weights: [0.2, 0.7, 0.05, 0.05],
};

const PRODUCT_INFO: TopicProfile = TopicProfile {
    sentiment_start: 0.2,
    turn_secs: (3.0, 7.0),
    pause_chance: 0.04,
    hold_chance: 0.01,
    compliance_factor: 1.0,
    escalation_bias: 1.0,
    sub_topics: &["features", "pricing", "availability"],
    intent_weights: [0.8, 0.1, 0.05, 0.05],
};

const COMPLAINT: TopicProfile = TopicProfile {
    sentiment_start: -0.6,
    turn_secs: (4.0, 9.0),
    pause_chance: 0.08,
    hold_chance: 0.03,
    compliance_factor: 1.3,
    escalation_bias: 1.6,
    sub_topics: &["service", "quality", "delay"],
    intent_weights: [0.1, 0.3, 0.6, 0.0],
};

const ACCOUNT: TopicProfile = TopicProfile {
    sentiment_start: -0.1,
    turn_secs: (3.0, 7.0),
    pause_chance: 0.05,
    hold_chance: 0.02,
    compliance_factor: 1.0,
    escalation_bias: 1.0,
    sub_topics: &["login", "settings", "profile"],
    intent_weights: [0.4, 0.4, 0.1, 0.1],
};

const ORDER: TopicProfile = TopicProfile {
    sentiment_start: 0.1,
    turn_secs: (3.0, 8.0),
    pause_chance: 0.06,
    hold_chance: 0.03,
    compliance_factor: 1.0,
    escalation_bias: 1.0,
    sub_topics: &["status", "delivery", "cancellation"],
    intent_weights: [0.5, 0.2, 0.1, 0.2],
};

pub fn topic_profile(topic: Topic) -> &'static TopicProfile {
    match topic {
        Topic::Billing => &BILLING,
        Topic::Technical => &TECHNICAL,
        Topic::ProductInfo => &PRODUCT_INFO,
        Topic::Complaint => &COMPLAINT,
        Topic::Account => &ACCOUNT,
        Topic::Order => &ORDER,
    }
}

/// Team-level tendencies
#[derive(Debug)]
pub struct TeamProfile {
    pub compliance_factor: f64,
    /// Offsets for active listening, empathy, solution, professional tone
    pub quality_offsets: [f64; 4],
}

pub fn team_profile(team: Team) -> &'static TeamProfile {
    const SALES: TeamProfile = TeamProfile {
        compliance_factor: 1.2,
        quality_offsets: [0.0, 0.0, -2.0, 2.0],
    };
    const SUPPORT: TeamProfile = TeamProfile {
        compliance_factor: 0.9,
        quality_offsets: [2.0, 4.0, 0.0, 0.0],
    };
    const TECH: TeamProfile = TeamProfile {
        compliance_factor: 1.0,
        quality_offsets: [0.0, -3.0, 4.0, 0.0],
    };
    const RETENTION: TeamProfile = TeamProfile {
        compliance_factor: 1.1,
        quality_offsets: [1.0, 3.0, 0.0, 0.0],
    };

    match team {
        Team::Sales => &SALES,
        Team::Support => &SUPPORT,
        Team::Tech => &TECH,
        Team::Retention => &RETENTION,
    }
}

/// Speaking-rate multiplier for a language
pub fn language_pacing(language: Language) -> f64 {
    match language {
        Language::Cs => 0.97,
        Language::Sk => 0.96,
        Language::En => 1.0,
    }
}

const AGENT_CS: &[&str] = &[
    "Dobrý den",
    "Jak vám mohu pomoci?",
    "Rozumím vašemu problému",
    "Moment prosím",
    "Podívám se na to",
    "Mám tady vaše údaje",
    "Děkuji za pochopení",
    "Je to vyřešeno",
    "Můžu vám ještě s něčím pomoci?",
    "Nashledanou",
    "Omlouvám se za komplikace",
    "Zkontrolujte prosím",
];

const AGENT_SK: &[&str] = &[
    "Dobrý deň",
    "Ako vám môžem pomôcť?",
    "Rozumiem vášmu problému",
    "Moment prosím",
    "Pozriem sa na to",
    "Mám tu vaše údaje",
    "Ďakujem za pochopenie",
    "Je to vyriešené",
    "Môžem vám ešte s niečím pomôcť?",
    "Dovidenia",
];

const AGENT_EN: &[&str] = &[
    "Good day",
    "How can I help you?",
    "I understand your issue",
    "One moment please",
    "Let me check that",
    "I have your information here",
    "Thank you for your patience",
    "It's resolved",
    "Can I help with anything else?",
    "Goodbye",
];

const CUSTOMER_CS: &[&str] = &[
    "Volám kvůli faktuře",
    "Nemůžu se přihlásit",
    "To nefunguje",
    "Chtěl bych se zeptat",
    "Kdy to bude opraveno?",
    "Nerozumím tomu",
    "Děkuji",
    "Můžete mi vysvětlit?",
];

const CUSTOMER_SK: &[&str] = &[
    "Volám kvôli faktúre",
    "Nemôžem sa prihlásiť",
    "To nefunguje",
    "Chcel by som sa opýtať",
    "Kedy to bude opravené?",
    "Nerozumiem tomu",
    "Ďakujem",
];

const CUSTOMER_EN: &[&str] = &[
    "I'm calling about my bill",
    "I can't log in",
    "It's not working",
    "I'd like to ask",
    "When will this be fixed?",
    "I don't understand",
    "Thank you",
];

/// Representative utterances for one speaker in one language
pub fn phrases(language: Language, speaker: Speaker) -> &'static [&'static str] {
    match (language, speaker) {
        (Language::Cs, Speaker::Agent) => AGENT_CS,
        (Language::Sk, Speaker::Agent) => AGENT_SK,
        (Language::En, Speaker::Agent) => AGENT_EN,
        (Language::Cs, Speaker::Customer) => CUSTOMER_CS,
        (Language::Sk, Speaker::Customer) => CUSTOMER_SK,
        (Language::En, Speaker::Customer) => CUSTOMER_EN,
    }
}
