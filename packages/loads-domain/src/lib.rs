pub mod coerce;
pub mod normalize;
pub mod record;
