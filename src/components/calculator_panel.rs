use log::{debug, info};
use web_sys::{HtmlInputElement, MouseEvent};
use yew::prelude::*;

use crate::calculator::{compute, CalculatorConstants, CalculatorInput, ResultSlot};
use crate::events::{binding, dispatch, Command, UiEvent, UiEventKind};

struct Field {
    id: &'static str,
    label: &'static str,
    step: &'static str,
    initial: &'static str,
}

const FIELDS: [Field; 5] = [
    Field { id: "dailyDistance", label: "Distância diária (km)", step: "1", initial: "20" },
    Field { id: "daysPerMonth", label: "Dias de utilização por mês", step: "1", initial: "22" },
    Field { id: "currentConsumption", label: "Consumo atual (L/100 km)", step: "0.1", initial: "6" },
    Field { id: "fuelPrice", label: "Preço do combustível (€/L)", step: "0.01", initial: "1.70" },
    Field { id: "electricityPrice", label: "Preço da eletricidade (€/kWh)", step: "0.01", initial: "0.15" },
];

fn read_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

#[function_component(CalculatorPanel)]
pub fn calculator_panel() -> Html {
    let inputs = use_memo(|_| std::array::from_fn::<NodeRef, 5, _>(|_| NodeRef::default()), ());
    let output = use_state(|| compute(&CalculatorInput::default(), &CalculatorConstants::LUZION));
    // Bumped on every run so the result cards remount and replay their pulse.
    let runs = use_state(|| 0u32);

    let on_calculate = {
        let inputs = inputs.clone();
        let output = output.clone();
        let runs = runs.clone();
        Callback::from(move |_: MouseEvent| {
            if let Command::Calculate = dispatch(&UiEvent::RunCalculator).command {
                let [daily, days, consumption, fuel, electricity] = &*inputs;
                let input = CalculatorInput::parse(
                    &read_value(daily),
                    &read_value(days),
                    &read_value(consumption),
                    &read_value(fuel),
                    &read_value(electricity),
                );
                let result = compute(&input, &CalculatorConstants::LUZION);
                debug!(
                    "{} km/month, {:.2} L fuel, {:.2} kWh",
                    result.monthly_distance, result.current_fuel_consumption, result.alt_energy_month
                );
                debug!(
                    "Monthly cost {:.2} fuel vs {:.2} electric",
                    result.current_monthly_cost, result.alt_monthly_cost
                );
                info!(
                    "Calculated savings: {} per month, {} CO2",
                    result.formatted(ResultSlot::MonthlySavings),
                    result.formatted(ResultSlot::Co2Saved)
                );
                output.set(result);
                runs.set(*runs + 1);
            }
        })
    };

    let fields = FIELDS.iter().zip(inputs.iter()).map(|(field, node)| {
        html! {
            <div class="calc-field" key={field.id}>
                <label for={field.id}>{field.label}</label>
                <input
                    id={field.id}
                    ref={node.clone()}
                    type="number"
                    min="0"
                    step={field.step}
                    value={field.initial}
                />
            </div>
        }
    });

    let cards = output.rendered().into_iter().map(|(slot, text)| {
        html! {
            <div
                key={format!("{}-{}", slot.element_id(), *runs)}
                class={classes!("result-card", (*runs > 0).then(|| "pulse"))}
            >
                <span class="result-label">{slot.label()}</span>
                <span id={slot.element_id()} class="result-value">{text}</span>
            </div>
        }
    });

    html! {
        <div class="calculator">
            <h2>{"Quanto poupa com o Luzion?"}</h2>
            <div class="calc-fields">
                { for fields }
            </div>
            <button
                id={binding(UiEventKind::RunCalculator).element_id()}
                class="calc-button"
                onclick={on_calculate}
            >
                {"Calcular"}
            </button>
            <div class="calc-results">
                { for cards }
            </div>
        </div>
    }
}
