pub mod agents;
pub mod generate;
pub mod report;
pub mod source;
pub mod timeline;
pub mod version;
