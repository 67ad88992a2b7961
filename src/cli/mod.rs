pub mod cli;
pub mod explore_states;
pub mod export_sites;
pub mod run;
pub mod show_cache_stats;
