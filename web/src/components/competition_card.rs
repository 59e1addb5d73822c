use leptos::prelude::*;
use shared_types::Competition;

use crate::utils::format::format_date_range;

const WCA_COMPETITION_BASE: &str = "https://www.worldcubeassociation.org/competitions";

#[component]
pub fn CompetitionCard(competition: Competition) -> impl IntoView {
    let href = format!("{}/{}", WCA_COMPETITION_BASE, competition.id);
    let when = format_date_range(competition.start_date, competition.end_date);

    view! {
        <div class="competition-card">
            <h3 class="competition-card__name">{competition.name.clone()}</h3>
            <p class="competition-card__meta">{when} " | " {competition.city.clone()}</p>
            <a class="competition-card__link" href=href target="_blank" rel="noopener">
                "Learn more"
            </a>
        </div>
    }
}
