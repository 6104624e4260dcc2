pub mod kill_event;
pub mod match_stats;
pub mod match_summary;
pub mod payload_error;
pub mod payload_loader;
pub mod round_timings;
