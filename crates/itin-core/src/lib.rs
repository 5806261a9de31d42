//! Itinerary prettifying core.
//!
//! Takes a raw itinerary document containing airport code tokens (`#LAX`,
//! `##KJFK`, `*#LAX`, `*##KJFK`) and date/time tokens (`D(..)`, `T12(..)`,
//! `T24(..)`), resolves the codes against an airport lookup dataset, and
//! rewrites every token into its customer-facing form. Unresolvable tokens
//! degrade in place rather than failing the run; only malformed lookup data
//! aborts processing.

pub mod datetime;
pub mod error;
pub mod lookup;
pub mod normalize;
pub mod rewrite;

pub use error::LookupError;
pub use lookup::{AirportRecord, Field, LookupTable};
pub use normalize::normalize;
pub use rewrite::LinePrettifier;
