//! Fuel versus Luzion cost and emissions comparison.

use crate::format::{parse_or_default, to_fixed};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CalculatorInput {
    /// km per day
    pub daily_distance: f64,
    pub days_per_month: f64,
    /// litres per 100 km
    pub current_consumption: f64,
    /// € per litre
    pub fuel_price: f64,
    /// € per kWh
    pub electricity_price: f64,
}

impl CalculatorInput {
    /// Builds an input from raw form values. Anything unparsable counts as 0.
    pub fn parse(
        daily_distance: &str,
        days_per_month: &str,
        current_consumption: &str,
        fuel_price: &str,
        electricity_price: &str,
    ) -> Self {
        Self {
            daily_distance: parse_or_default(daily_distance, 0.0),
            days_per_month: parse_or_default(days_per_month, 0.0),
            current_consumption: parse_or_default(current_consumption, 0.0),
            fuel_price: parse_or_default(fuel_price, 0.0),
            electricity_price: parse_or_default(electricity_price, 0.0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CalculatorConstants {
    /// kWh per 100 km
    pub energy_consumption: f64,
    /// kg of CO2 per litre of petrol
    pub co2_per_liter: f64,
    /// km per charge
    pub range: f64,
}

impl CalculatorConstants {
    pub const LUZION: CalculatorConstants = CalculatorConstants {
        energy_consumption: 10.0,
        co2_per_liter: 2.31,
        range: 100.0,
    };
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CalculatorOutput {
    pub monthly_distance: f64,
    pub current_fuel_consumption: f64,
    pub alt_energy_month: f64,
    pub current_monthly_cost: f64,
    pub alt_monthly_cost: f64,
    pub monthly_savings: f64,
    pub yearly_savings: f64,
    pub current_cost_per_100km: f64,
    pub alt_cost_per_100km: f64,
    pub co2_saved: f64,
    pub range: f64,
}

/// The six display slots filled after a calculation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultSlot {
    MonthlySavings,
    YearlySavings,
    Co2Saved,
    CurrentCostPer100km,
    LuzionCostPer100km,
    Range,
}

impl ResultSlot {
    pub const ALL: [ResultSlot; 6] = [
        ResultSlot::MonthlySavings,
        ResultSlot::YearlySavings,
        ResultSlot::Co2Saved,
        ResultSlot::CurrentCostPer100km,
        ResultSlot::LuzionCostPer100km,
        ResultSlot::Range,
    ];

    pub fn element_id(self) -> &'static str {
        match self {
            ResultSlot::MonthlySavings => "moneySaved",
            ResultSlot::YearlySavings => "yearSavings",
            ResultSlot::Co2Saved => "emissionSavings",
            ResultSlot::CurrentCostPer100km => "currentCost",
            ResultSlot::LuzionCostPer100km => "luzionCost",
            ResultSlot::Range => "range",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ResultSlot::MonthlySavings => "Poupança mensal",
            ResultSlot::YearlySavings => "Poupança anual",
            ResultSlot::Co2Saved => "CO₂ evitado por mês",
            ResultSlot::CurrentCostPer100km => "Custo atual / 100 km",
            ResultSlot::LuzionCostPer100km => "Custo Luzion / 100 km",
            ResultSlot::Range => "Autonomia Luzion",
        }
    }

    pub fn decimals(self) -> usize {
        match self {
            ResultSlot::Co2Saved => 1,
            ResultSlot::Range => 0,
            _ => 2,
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            ResultSlot::Co2Saved => " kg",
            ResultSlot::Range => " km",
            _ => " €",
        }
    }
}

impl CalculatorOutput {
    pub fn value(&self, slot: ResultSlot) -> f64 {
        match slot {
            ResultSlot::MonthlySavings => self.monthly_savings,
            ResultSlot::YearlySavings => self.yearly_savings,
            ResultSlot::Co2Saved => self.co2_saved,
            ResultSlot::CurrentCostPer100km => self.current_cost_per_100km,
            ResultSlot::LuzionCostPer100km => self.alt_cost_per_100km,
            ResultSlot::Range => self.range,
        }
    }

    /// Display text for a slot, e.g. `"38.28 €"`.
    pub fn formatted(&self, slot: ResultSlot) -> String {
        format!("{}{}", to_fixed(self.value(slot), slot.decimals()), slot.suffix())
    }

    pub fn rendered(&self) -> Vec<(ResultSlot, String)> {
        ResultSlot::ALL
            .iter()
            .map(|&slot| (slot, self.formatted(slot)))
            .collect()
    }
}

pub fn compute(input: &CalculatorInput, constants: &CalculatorConstants) -> CalculatorOutput {
    let monthly_distance = input.daily_distance * input.days_per_month;

    let current_fuel_consumption = (monthly_distance / 100.0) * input.current_consumption;
    let alt_energy_month = (monthly_distance / 100.0) * constants.energy_consumption;

    let current_monthly_cost = current_fuel_consumption * input.fuel_price;
    let alt_monthly_cost = alt_energy_month * input.electricity_price;
    let monthly_savings = current_monthly_cost - alt_monthly_cost;
    let yearly_savings = monthly_savings * 12.0;

    CalculatorOutput {
        monthly_distance,
        current_fuel_consumption,
        alt_energy_month,
        current_monthly_cost,
        alt_monthly_cost,
        monthly_savings,
        yearly_savings,
        current_cost_per_100km: input.current_consumption * input.fuel_price,
        alt_cost_per_100km: constants.energy_consumption * input.electricity_price,
        co2_saved: current_fuel_consumption * constants.co2_per_liter,
        range: constants.range,
    }
}
