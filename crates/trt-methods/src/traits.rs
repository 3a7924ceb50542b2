//! Common interface of thermal response test analysis methods.

use trt_data::TrtData;

use crate::error::EstimateResult;
use crate::result::MethodResult;

/// An analysis method producing ground and borehole properties from the
/// steady-state window of a measurement store.
///
/// Methods are pure functions of the store snapshot and their own
/// parameters. They never move the store's start index.
pub trait Method: Send + Sync {
    /// Method name for reports and logs.
    fn name(&self) -> &str;

    /// Evaluate the method on the current steady-state window.
    fn evaluate(&self, data: &TrtData) -> EstimateResult<MethodResult>;
}
