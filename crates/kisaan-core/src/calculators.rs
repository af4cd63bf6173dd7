//! Agricultural calculators.
//!
//! Four stateless, deterministic computations from a small input record to a
//! result. Lookup keys are matched case-insensitively after trimming; an
//! unknown or empty key falls back to the table's default.
//!
//! Inputs arrive as raw form text and go through [`parse_amount`], which
//! keeps the longest numeric prefix and treats anything else as `0`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::enums::{Language, Tool};
use crate::i18n;

/// Average litres of water per acre per week before multipliers.
pub const BASE_WATER_LITERS_PER_ACRE: f64 = 27_000.0;

/// Fertilizer kilograms per acre for crops missing from the table.
pub const DEFAULT_FERTILIZER_KG_PER_ACRE: f64 = 100.0;

/// Share of current energy usage saved by optimization.
pub const ENERGY_SAVINGS_RATE: f64 = 0.20;

/// Currency cost of one kWh.
pub const COST_PER_KWH: f64 = 15.0;

/// Compost kilograms per ton of farm waste.
pub const COMPOST_PER_TON: f64 = 0.3;

/// Biochar kilograms per ton of farm waste.
pub const BIOCHAR_PER_TON: f64 = 0.2;

/// Fertilizer type reported when none is chosen.
pub const DEFAULT_FERTILIZER_TYPE: &str = "npk";

/// Crop reported by the fertilizer calculator when none is chosen.
pub const DEFAULT_FERTILIZER_CROP: &str = "wheat";

const CROP_WATER: [(&str, f64); 4] = [
    ("wheat", 0.8),
    ("rice", 1.5),
    ("cotton", 1.2),
    ("vegetables", 1.3),
];

const IRRIGATION_WATER: [(&str, f64); 3] = [("flood", 1.5), ("sprinkler", 1.0), ("drip", 0.6)];

const FERTILIZER_PER_ACRE: [(&str, f64); 4] = [
    ("wheat", 100.0),
    ("rice", 120.0),
    ("cotton", 80.0),
    ("vegetables", 150.0),
];

fn lookup(table: &[(&str, f64)], key: &str, default: f64) -> f64 {
    let key = key.trim();
    table
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(key))
        .map_or(default, |(_, value)| *value)
}

/// Water multiplier for a crop, `1.0` when unknown or empty.
#[must_use]
pub fn crop_water_multiplier(crop: &str) -> f64 {
    lookup(&CROP_WATER, crop, 1.0)
}

/// Water multiplier for an irrigation method, `1.0` when unknown or empty.
#[must_use]
pub fn irrigation_multiplier(method: &str) -> f64 {
    lookup(&IRRIGATION_WATER, method, 1.0)
}

/// Fertilizer kilograms per acre for a crop.
#[must_use]
pub fn fertilizer_per_acre(crop: &str) -> f64 {
    lookup(&FERTILIZER_PER_ACRE, crop, DEFAULT_FERTILIZER_KG_PER_ACRE)
}

/// Weekly water requirement in litres.
#[must_use]
pub fn water_required(area: f64, crop: &str, irrigation: &str) -> f64 {
    area * BASE_WATER_LITERS_PER_ACRE * crop_water_multiplier(crop) * irrigation_multiplier(irrigation)
}

/// Fertilizer requirement in kilograms.
#[must_use]
pub fn fertilizer_required(area: f64, crop: &str) -> f64 {
    area * fertilizer_per_acre(crop)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergySavings {
    pub saved_kwh: f64,
    pub saved_cost: f64,
}

#[must_use]
pub fn energy_savings(usage_kwh: f64) -> EnergySavings {
    let saved_kwh = usage_kwh * ENERGY_SAVINGS_RATE;
    EnergySavings {
        saved_kwh,
        saved_cost: saved_kwh * COST_PER_KWH,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WasteConversion {
    pub compost_kg: f64,
    pub biochar_kg: f64,
}

#[must_use]
pub fn waste_conversion(tons: f64) -> WasteConversion {
    WasteConversion {
        compost_kg: tons * COMPOST_PER_TON,
        biochar_kg: tons * BIOCHAR_PER_TON,
    }
}

/// Parse a form field the way a lenient float parser would: leading
/// whitespace is skipped and the longest prefix that forms a finite number
/// wins. Empty, non-numeric and non-finite input yields `0.0`.
#[must_use]
pub fn parse_amount(input: &str) -> f64 {
    let trimmed = input.trim_start();
    let candidate_len = trimmed
        .char_indices()
        .find(|(_, ch)| !(ch.is_ascii_digit() || matches!(ch, '+' | '-' | '.' | 'e' | 'E')))
        .map_or(trimmed.len(), |(idx, _)| idx);
    let candidate = &trimmed[..candidate_len];

    (1..=candidate.len())
        .rev()
        .find_map(|end| candidate[..end].parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Raw form fields of the tools page. Fields irrelevant to the active tool
/// are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolInput {
    pub area: String,
    pub crop: String,
    pub irrigation: String,
    pub fertilizer_type: String,
    pub energy_usage: String,
    pub waste_amount: String,
}

/// The field that blocked a calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidField {
    Area,
    EnergyUsage,
    WasteAmount,
}

/// Blocking input validation failure. `message` is the localized alert text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: InvalidField,
    pub message: &'static str,
}

/// Presentation record of one calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorResult {
    pub label: String,
    pub value: f64,
    pub unit: String,
    pub details: String,
}

impl CalculatorResult {
    /// Value with two decimals, as displayed.
    #[must_use]
    pub fn display_value(&self) -> String {
        format!("{:.2}", self.value)
    }
}

fn require_positive(
    raw: &str,
    field: InvalidField,
    message: &'static str,
) -> Result<f64, ValidationError> {
    let value = parse_amount(raw);
    if value > 0.0 {
        Ok(value)
    } else {
        Err(ValidationError { field, message })
    }
}

fn or_general<'a>(value: &'a str, general: &'a str) -> &'a str {
    let value = value.trim();
    if value.is_empty() { general } else { value }
}

/// Run the calculator for `tool`. Area is required by every tool; energy
/// and waste additionally require their own positive amount.
///
/// # Errors
///
/// Returns [`ValidationError`] naming the first missing or non-positive
/// field. No result is produced in that case.
pub fn calculate(
    tool: Tool,
    input: &ToolInput,
    language: Language,
) -> Result<CalculatorResult, ValidationError> {
    let t = i18n::tools(language);
    let area = require_positive(&input.area, InvalidField::Area, t.invalid_area)?;

    let result = match tool {
        Tool::Water => CalculatorResult {
            label: t.water_required.to_string(),
            value: water_required(area, &input.crop, &input.irrigation),
            unit: t.liters_per_week.to_string(),
            details: format!(
                "{}: {}, {}: {}",
                t.crop,
                or_general(&input.crop, t.general),
                t.irrigation,
                or_general(&input.irrigation, t.general),
            ),
        },
        Tool::Fertilizer => CalculatorResult {
            label: t.fertilizer_required.to_string(),
            value: fertilizer_required(area, &input.crop),
            unit: t.kg.to_string(),
            details: format!(
                "{}: {}, {}: {}",
                t.crop,
                or_general(&input.crop, DEFAULT_FERTILIZER_CROP),
                t.fertilizer_type,
                or_general(&input.fertilizer_type, DEFAULT_FERTILIZER_TYPE),
            ),
        },
        Tool::Energy => {
            let usage =
                require_positive(&input.energy_usage, InvalidField::EnergyUsage, t.invalid_energy)?;
            let savings = energy_savings(usage);
            let cost = match language {
                Language::Ur => format!("{:.2} {}", savings.saved_cost, t.currency),
                Language::En => format!("{}{:.2}", t.currency, savings.saved_cost),
            };
            CalculatorResult {
                label: t.energy_saved.to_string(),
                value: savings.saved_kwh,
                unit: t.kwh.to_string(),
                details: format!("{}: {cost}", t.cost_saved),
            }
        }
        Tool::Waste => {
            let tons =
                require_positive(&input.waste_amount, InvalidField::WasteAmount, t.invalid_waste)?;
            let conversion = waste_conversion(tons);
            CalculatorResult {
                label: t.waste_converted.to_string(),
                value: conversion.compost_kg,
                unit: format!("{} ({})", t.kg, t.compost),
                details: format!("{}: {:.2} {}", t.biochar, conversion.biochar_kg, t.kg_short),
            }
        }
    };

    Ok(result)
}
