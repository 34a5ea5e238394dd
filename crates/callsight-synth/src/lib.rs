//! Synthetic contact-center call generation
//!
//! One [`RandomSource`] is seeded from the configuration and threaded through
//! every stage: agents, segments, detection, AutoQA.

mod agents;
mod assembler;
mod autoqa;
mod detector;
mod profiles;
mod random;
mod segments;

pub use agents::generate_agents;
pub use assembler::generate_dataset;
pub use autoqa::{
    annotate, autoqa_score, synthesize_compliance, synthesize_quality, synthesize_resolution,
    synthesize_sales_opportunity, synthesize_sentiment, synthesize_topic_labels, Annotation,
};
pub use detector::{detect, detect_interruptions, detect_silences, silence_ratio, Detection};
pub use profiles::{language_pacing, phrases, team_profile, topic_profile, TeamProfile, TopicProfile};
pub use random::RandomSource;
pub use segments::{synthesize_segments, MAX_WPM, MIN_WPM};
