use chrono::Utc;
use leptos::{prelude::*, task::spawn_local};
use shared_types::{
    filter_competitions, DistanceFilter, LocationError, RequestSequence, ResolvedLocation,
};
use thaw::{Button, ButtonAppearance, Input};
use wasm_bindgen::{closure::Closure, JsCast};

use crate::components::{CompetitionCard, DistanceSelect, ErrorView, LoadingView};
use crate::server::{fetch_competitions, geocode, reverse_geocode};

/// Upcoming competitions, filterable by proximity to a typed location or
/// to the device's own position. Each lookup carries a sequence token so
/// a slow early response cannot clobber the result of a later one.
#[component]
pub fn CompetitionsPage() -> impl IntoView {
    let location_input = RwSignal::new(String::new());
    let resolved = RwSignal::new(Option::<ResolvedLocation>::None);
    let distance = RwSignal::new(DistanceFilter::Any);
    let location_error = RwSignal::new(Option::<LocationError>::None);
    let is_resolving = RwSignal::new(false);
    let request_seq = StoredValue::new(RequestSequence::new());

    let competitions = Resource::new(|| (), |_| async move { fetch_competitions().await });

    let issue_token = move || {
        let mut seq = request_seq.get_value();
        let token = seq.issue();
        request_seq.set_value(seq);
        token
    };

    let drop_in_flight_lookup = move || {
        let mut seq = request_seq.get_value();
        seq.invalidate();
        request_seq.set_value(seq);
    };

    let apply_outcome = move |token: u64,
                             query: Option<String>,
                             outcome: Result<Option<ResolvedLocation>, ServerFnError>| {
        if !request_seq.get_value().accepts(token) {
            // A newer interaction superseded this lookup; drop it.
            return;
        }
        is_resolving.set(false);
        match outcome {
            Ok(Some(location)) => {
                location_input.set(location.name.clone());
                resolved.set(Some(location));
                location_error.set(None);
            }
            Ok(None) => match query {
                Some(query) => location_error.set(Some(LocationError::NotFound { query })),
                None => location_error.set(Some(LocationError::SensorUnavailable)),
            },
            Err(e) => location_error.set(Some(LocationError::Fetch(e.to_string()))),
        }
    };

    let search_typed_location = move || {
        let query = location_input.get().trim().to_string();
        if query.is_empty() {
            // Blank input means no reference point; show everything
            // upcoming and discard any lookup still in flight.
            drop_in_flight_lookup();
            is_resolving.set(false);
            resolved.set(None);
            location_error.set(None);
            return;
        }
        if resolved
            .get_untracked()
            .as_ref()
            .is_some_and(|location| location.name == query)
        {
            return;
        }
        let token = issue_token();
        is_resolving.set(true);
        location_error.set(None);
        spawn_local(async move {
            let outcome = geocode(query.clone()).await;
            apply_outcome(token, Some(query), outcome);
        });
    };

    let use_device_location = move || {
        let geolocation = web_sys::window().and_then(|w| w.navigator().geolocation().ok());
        let Some(geolocation) = geolocation else {
            location_error.set(Some(LocationError::SensorUnavailable));
            return;
        };

        let token = issue_token();
        is_resolving.set(true);
        location_error.set(None);

        let on_success = Closure::<dyn FnMut(web_sys::Position)>::new(move |position: web_sys::Position| {
            let coords = position.coords();
            let (lat, lon) = (coords.latitude(), coords.longitude());
            spawn_local(async move {
                // The device coordinates are authoritative; the reverse
                // lookup only supplies a display name.
                let outcome = reverse_geocode(lat, lon).await.map(|location| {
                    Some(location.unwrap_or(ResolvedLocation {
                        name: format!("{:.3}, {:.3}", lat, lon),
                        lat,
                        lon,
                    }))
                });
                apply_outcome(token, None, outcome);
            });
        });
        let on_error = Closure::<dyn FnMut(web_sys::PositionError)>::new(move |_: web_sys::PositionError| {
            if !request_seq.get_value().accepts(token) {
                return;
            }
            is_resolving.set(false);
            location_error.set(Some(LocationError::SensorUnavailable));
        });

        if geolocation
            .get_current_position_with_error_callback(
                on_success.as_ref().unchecked_ref(),
                Some(on_error.as_ref().unchecked_ref()),
            )
            .is_err()
        {
            is_resolving.set(false);
            location_error.set(Some(LocationError::SensorUnavailable));
        }
        on_success.forget();
        on_error.forget();
    };

    view! {
        <div class="competitions-page">
            <div class="competitions-header">
                <h1>"Upcoming Competitions"</h1>
                <p>
                    "These are the officially announced competitions across Canada. "
                    "Pick a distance and a starting point to narrow the list down."
                </p>
            </div>

            <div class="competitions-controls">
                <DistanceSelect distance=distance />
                <div class="competitions-controls__location">
                    <Input
                        id="location-input"
                        placeholder="City or postal code"
                        value=location_input
                    />
                    <Button
                        appearance=ButtonAppearance::Transparent
                        on_click=move |_| use_device_location()
                    >
                        "Use my location"
                    </Button>
                </div>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| search_typed_location()
                >
                    "Search"
                </Button>
            </div>

            <Suspense fallback=move || {
                view! { <LoadingView message=Some("Loading competitions...".to_string()) /> }
            }>
                {move || {
                    competitions.get().map(|fetched| {
                        if is_resolving.get() {
                            return view! {
                                <LoadingView message=Some("Finding your location...".to_string()) />
                            }
                            .into_any();
                        }
                        if let Some(error) = location_error.get() {
                            return view! { <ErrorView message=Some(error.to_string()) /> }
                                .into_any();
                        }
                        match fetched {
                            Err(e) => view! {
                                <ErrorView message=Some(format!("Failed to load competitions: {}", e)) />
                            }
                            .into_any(),
                            Ok(list) => {
                                let visible = filter_competitions(
                                    &list,
                                    resolved.get().as_ref(),
                                    distance.get(),
                                    Utc::now(),
                                );
                                if visible.is_empty() {
                                    let message = match (distance.get(), resolved.get()) {
                                        (DistanceFilter::WithinKm(km), Some(location)) => format!(
                                            "No upcoming competitions within {:.0} km of {}.",
                                            km, location.name
                                        ),
                                        _ => "No upcoming competitions are currently announced."
                                            .to_string(),
                                    };
                                    view! { <p class="competitions-empty">{message}</p> }.into_any()
                                } else {
                                    view! {
                                        <div class="competitions-grid">
                                            // Most recently announced first.
                                            {visible
                                                .into_iter()
                                                .rev()
                                                .map(|competition| view! {
                                                    <CompetitionCard competition=competition />
                                                })
                                                .collect_view()}
                                        </div>
                                    }
                                    .into_any()
                                }
                            }
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}
