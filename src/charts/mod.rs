pub mod round_duration;
