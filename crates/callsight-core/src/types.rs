//! Label types shared by the generator and the metrics engine

use serde::{Deserialize, Serialize};
use std::fmt;

/// Who is speaking in a transcript segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    Agent,
    Customer,
}

impl Speaker {
    pub fn other(self) -> Self {
        match self {
            Speaker::Agent => Speaker::Customer,
            Speaker::Customer => Speaker::Agent,
        }
    }
}

/// Agent team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Team {
    Sales,
    Support,
    Tech,
    Retention,
}

impl Team {
    pub const ALL: [Team; 4] = [Team::Sales, Team::Support, Team::Tech, Team::Retention];

    pub fn as_str(self) -> &'static str {
        match self {
            Team::Sales => "sales",
            Team::Support => "support",
            Team::Tech => "tech",
            Team::Retention => "retention",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

/// Call direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Inbound,
    Outbound,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Inbound, Direction::Outbound];

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Inbound => "inbound",
            Direction::Outbound => "outbound",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

/// Call language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Cs,
    Sk,
    En,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Cs, Language::Sk, Language::En];

    pub fn as_str(self) -> &'static str {
        match self {
            Language::Cs => "cs",
            Language::Sk => "sk",
            Language::En => "en",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|l| l.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

/// Primary call topic
///
/// Declaration order is the canonical topic order used to break ties in
/// rankings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Billing,
    Technical,
    ProductInfo,
    Complaint,
    Account,
    Order,
}

impl Topic {
    pub const ALL: [Topic; 6] = [
        Topic::Billing,
        Topic::Technical,
        Topic::ProductInfo,
        Topic::Complaint,
        Topic::Account,
        Topic::Order,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Topic::Billing => "billing",
            Topic::Technical => "technical",
            Topic::ProductInfo => "product_info",
            Topic::Complaint => "complaint",
            Topic::Account => "account",
            Topic::Order => "order",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
    }

    /// Handling complexity on a 1-5 scale
    pub fn complexity(self) -> u8 {
        match self {
            Topic::Billing | Topic::ProductInfo | Topic::Account => 2,
            Topic::Complaint | Topic::Order => 3,
            Topic::Technical => 4,
        }
    }

    /// Expected handle time in seconds, used as the TRE benchmark
    pub fn benchmark_handle_secs(self) -> f64 {
        match self {
            Topic::Billing => 240.0,
            Topic::Technical => 480.0,
            Topic::ProductInfo => 180.0,
            Topic::Complaint => 420.0,
            Topic::Account => 210.0,
            Topic::Order => 270.0,
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the customer wanted from the call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    GetInformation,
    ResolveProblem,
    MakeComplaint,
    RequestService,
}

impl Intent {
    pub const ALL: [Intent; 4] = [
        Intent::GetInformation,
        Intent::ResolveProblem,
        Intent::MakeComplaint,
        Intent::RequestService,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Intent::GetInformation => "get_information",
            Intent::ResolveProblem => "resolve_problem",
            Intent::MakeComplaint => "make_complaint",
            Intent::RequestService => "request_service",
        }
    }
}

/// Three-level rating used for script adherence and call control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    Good,
    Partial,
    Poor,
}

impl Rating {
    pub const ALL: [Rating; 3] = [Rating::Good, Rating::Partial, Rating::Poor];

    pub fn as_str(self) -> &'static str {
        match self {
            Rating::Good => "good",
            Rating::Partial => "partial",
            Rating::Poor => "poor",
        }
    }
}
