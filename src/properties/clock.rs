//! The document clock.

use crate::enums::{ClockRange, ClockStep};
use crate::time::Timestamp;
use crate::values::Number;

czml_property! {
    /// Initial settings of the client's simulation clock.
    ///
    /// Usually wrapped in an [`IntervalValue`](crate::values::IntervalValue)
    /// giving the clock's start and stop times.
    pub struct Clock / ClockBuilder {
        "currentTime" => current_time: Timestamp,
        /// Simulated seconds per real second.
        "multiplier" => multiplier: Number,
        "range" => range: ClockRange,
        "step" => step: ClockStep,
    }
}
