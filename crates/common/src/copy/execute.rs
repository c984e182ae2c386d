use crate::backend::{Backend, BackendError};

use super::{CopyPlan, CopyTool};

/// Run the copy tool selected by `plan`
pub fn execute(plan: &CopyPlan, backend: &dyn Backend) -> Result<(), BackendError> {
    tracing::info!("copying {} ({:?})", plan, plan.strategy);
    match plan.strategy.tool() {
        CopyTool::Generic => backend.copy(&plan.source, &plan.destination),
        CopyTool::MountAware => backend.mount_copy(&plan.source, &plan.destination),
    }
}
