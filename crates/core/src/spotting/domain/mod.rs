pub mod keyword_matcher;
pub mod match_interval;
pub mod metrics_engine;
pub mod report;
pub mod time_mapper;
