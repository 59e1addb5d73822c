use leptos::prelude::*;
use shared_types::DistanceFilter;
use thaw::{Combobox, ComboboxOption, Flex, FlexAlign, Label};

pub const DISTANCE_CHOICES_KM: [u32; 6] = [20, 50, 100, 200, 500, 1000];
pub const ANY_DISTANCE: &str = "Any distance";

#[component]
pub fn DistanceSelect(distance: RwSignal<DistanceFilter>) -> impl IntoView {
    let selected_option: RwSignal<Option<String>> = RwSignal::new(Some(ANY_DISTANCE.to_string()));

    Effect::new(move |_| {
        if let Some(choice) = selected_option.get() {
            // Options are either "Any distance" or "<n> km".
            let km = choice
                .split_whitespace()
                .next()
                .and_then(|n| n.parse::<f64>().ok())
                .unwrap_or(0.0);
            distance.set(DistanceFilter::from_km(km));
        }
    });

    view! {
        <Flex vertical=true align=FlexAlign::Start>
            <Label>"Distance"</Label>
            <Combobox selected_options=selected_option placeholder=ANY_DISTANCE>
                {DISTANCE_CHOICES_KM.into_iter().map(|km| {
                    let text = format!("{} km", km);
                    view! {
                        <ComboboxOption value=text.clone() text=text />
                    }
                }).collect_view()}
                <ComboboxOption value=ANY_DISTANCE text=ANY_DISTANCE />
            </Combobox>
        </Flex>
    }
}
