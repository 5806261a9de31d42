//! CLI library components for the Itinerary Prettifier.

pub mod logging;
pub mod pipeline;
