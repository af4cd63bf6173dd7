use kisaan_core::calculators::{CalculatorResult, ValidationError};
use kisaan_core::enums::Tool;
use kisaan_views::SessionContext;
use kisaan_views::pages::ToolsView;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ToolsCommands;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ToolResponse<'a> {
    tool: Tool,
    label: &'a str,
    value: String,
    unit: &'a str,
    details: &'a str,
}

impl<'a> ToolResponse<'a> {
    fn new(tool: Tool, result: &'a CalculatorResult) -> Self {
        Self {
            tool,
            label: &result.label,
            value: result.display_value(),
            unit: &result.unit,
            details: &result.details,
        }
    }
}

/// Fill the tools page form from the command and run its calculator.
fn calculate(
    action: &ToolsCommands,
    session: &SessionContext,
) -> Result<CalculatorResult, ValidationError> {
    let mut view = ToolsView::mount(session);
    view.select(action.tool());
    *view.input_mut() = action.input();
    view.calculate().cloned()
}

/// Handle `kisaan tools`. Invalid input fails with the localized alert.
pub fn handle(action: &ToolsCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let result = calculate(action, &ctx.session())?;
    output(&ToolResponse::new(action.tool(), &result), flags.format)
}
