pub mod aggregator;
pub mod appliance;
pub mod projection;
pub mod summary;
pub mod tariff;
