pub mod fetch;
pub mod sites;
pub mod state_index;

// Re-export the main types for easy importing
pub use fetch::PageFetcher;
pub use state_index::build_state_index;

pub const NPS_BASE_URL: &str = "https://www.nps.gov";
pub const NPS_HOME_URL: &str = "https://www.nps.gov/index.htm";
