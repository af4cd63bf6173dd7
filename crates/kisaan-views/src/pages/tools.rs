//! Farm calculators. No I/O: every result is computed from the form.

use kisaan_core::calculators::{self, CalculatorResult, ToolInput, ValidationError};
use kisaan_core::enums::{Language, Tool};
use kisaan_core::i18n::{self, ToolsText};

use crate::shell::SessionContext;

#[derive(Debug, Clone, Default)]
pub struct ToolsView {
    language: Language,
    active: Tool,
    input: ToolInput,
    result: Option<CalculatorResult>,
    error: Option<ValidationError>,
}

impl ToolsView {
    #[must_use]
    pub fn mount(ctx: &SessionContext) -> Self {
        Self {
            language: ctx.language,
            ..Self::default()
        }
    }

    pub const fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    #[must_use]
    pub const fn text(&self) -> &'static ToolsText {
        i18n::tools(self.language)
    }

    #[must_use]
    pub const fn active(&self) -> Tool {
        self.active
    }

    /// Switch calculators. Any displayed result or alert is cleared.
    pub fn select(&mut self, tool: Tool) {
        self.active = tool;
        self.result = None;
        self.error = None;
    }

    #[must_use]
    pub const fn input(&self) -> &ToolInput {
        &self.input
    }

    pub const fn input_mut(&mut self) -> &mut ToolInput {
        &mut self.input
    }

    /// Clear the form and any result.
    pub fn reset(&mut self) {
        self.input = ToolInput::default();
        self.result = None;
        self.error = None;
    }

    /// Run the active calculator on the current form.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] alert; no result is shown then.
    pub fn calculate(&mut self) -> Result<&CalculatorResult, ValidationError> {
        match calculators::calculate(self.active, &self.input, self.language) {
            Ok(result) => {
                self.error = None;
                Ok(self.result.insert(result))
            }
            Err(e) => {
                self.result = None;
                self.error = Some(e.clone());
                Err(e)
            }
        }
    }

    #[must_use]
    pub const fn result(&self) -> Option<&CalculatorResult> {
        self.result.as_ref()
    }

    /// The alert of the last failed calculation.
    #[must_use]
    pub const fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use kisaan_core::calculators::InvalidField;

    fn view() -> ToolsView {
        ToolsView {
            language: Language::En,
            ..ToolsView::default()
        }
    }

    #[test]
    fn defaults_to_water() {
        assert_eq!(view().active(), Tool::Water);
    }

    #[test]
    fn water_result_is_kept_until_tool_switch() {
        let mut tools = view();
        tools.input_mut().area = "2".into();
        tools.input_mut().crop = "rice".into();
        tools.input_mut().irrigation = "drip".into();
        let value = tools.calculate().unwrap().value;
        assert!((value - 2.0 * 27_000.0 * 1.5 * 0.6).abs() < 1e-9);
        assert!(tools.result().is_some());

        tools.select(Tool::Fertilizer);
        assert!(tools.result().is_none());
        assert_eq!(tools.input().area, "2");
    }

    #[test]
    fn selecting_the_same_tool_still_clears_result() {
        let mut tools = view();
        tools.input_mut().area = "1".into();
        tools.calculate().unwrap();
        tools.select(Tool::Water);
        assert!(tools.result().is_none());
    }

    #[test]
    fn invalid_input_shows_alert_and_no_result() {
        let mut tools = view();
        tools.input_mut().area = "1".into();
        tools.calculate().unwrap();

        tools.select(Tool::Energy);
        tools.input_mut().energy_usage = "0".into();
        let err = tools.calculate().unwrap_err();
        assert_eq!(err.field, InvalidField::EnergyUsage);
        assert!(tools.result().is_none());
        assert_eq!(tools.error(), Some(&err));
    }

    #[test]
    fn energy_for_one_hundred_kwh() {
        let mut tools = view();
        tools.select(Tool::Energy);
        tools.input_mut().area = "1".into();
        tools.input_mut().energy_usage = "100".into();
        let result = tools.calculate().unwrap();
        assert_eq!(result.display_value(), "20.00");
        assert!(result.details.contains("300.00"));
    }

    #[test]
    fn reset_clears_form_and_result() {
        let mut tools = view();
        tools.input_mut().area = "3".into();
        tools.calculate().unwrap();
        tools.reset();
        assert_eq!(tools.input(), &ToolInput::default());
        assert!(tools.result().is_none());
        assert!(tools.error().is_none());
    }
}
