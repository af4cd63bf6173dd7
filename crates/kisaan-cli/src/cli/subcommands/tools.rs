use clap::Subcommand;
use kisaan_core::calculators::ToolInput;
use kisaan_core::enums::Tool;

/// Farm calculator commands. Numbers are parsed leniently: anything
/// unparsable counts as zero and fails validation. Amounts accept a
/// leading `-` so negative values reach that validation.
#[derive(Clone, Debug, Subcommand)]
pub enum ToolsCommands {
    /// Weekly irrigation water requirement.
    Water {
        /// Farm area in acres.
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        area: String,
        /// wheat, rice, cotton, vegetables
        #[arg(long, default_value = "")]
        crop: String,
        /// flood, sprinkler, drip
        #[arg(long, default_value = "")]
        irrigation: String,
    },
    /// Fertilizer requirement.
    Fertilizer {
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        area: String,
        #[arg(long, default_value = "")]
        crop: String,
        /// Reported in the details (default npk).
        #[arg(long, default_value = "")]
        fertilizer_type: String,
    },
    /// Energy and cost saved by optimization.
    Energy {
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        area: String,
        /// Current monthly usage in kWh.
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        usage: String,
    },
    /// Compost and biochar from crop waste.
    Waste {
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        area: String,
        /// Waste amount in tons.
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        amount: String,
    },
}

impl ToolsCommands {
    #[must_use]
    pub const fn tool(&self) -> Tool {
        match self {
            Self::Water { .. } => Tool::Water,
            Self::Fertilizer { .. } => Tool::Fertilizer,
            Self::Energy { .. } => Tool::Energy,
            Self::Waste { .. } => Tool::Waste,
        }
    }

    /// The form fields this command fills in.
    #[must_use]
    pub fn input(&self) -> ToolInput {
        match self {
            Self::Water {
                area,
                crop,
                irrigation,
            } => ToolInput {
                area: area.clone(),
                crop: crop.clone(),
                irrigation: irrigation.clone(),
                ..ToolInput::default()
            },
            Self::Fertilizer {
                area,
                crop,
                fertilizer_type,
            } => ToolInput {
                area: area.clone(),
                crop: crop.clone(),
                fertilizer_type: fertilizer_type.clone(),
                ..ToolInput::default()
            },
            Self::Energy { area, usage } => ToolInput {
                area: area.clone(),
                energy_usage: usage.clone(),
                ..ToolInput::default()
            },
            Self::Waste { area, amount } => ToolInput {
                area: area.clone(),
                waste_amount: amount.clone(),
                ..ToolInput::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn waste_fills_only_its_fields() {
        let command = ToolsCommands::Waste {
            area: "2".into(),
            amount: "10".into(),
        };
        let input = command.input();
        assert_eq!(input.area, "2");
        assert_eq!(input.waste_amount, "10");
        assert!(input.energy_usage.is_empty());
        assert_eq!(command.tool(), Tool::Waste);
    }
}
