use chrono::NaiveDate;
use leptos::prelude::*;
use leptos::server;
use serde::Deserialize;
use shared_types::{Competition, ResolvedLocation};

/// The federation only lists competitions held at home.
pub const HOME_COUNTRY_CODE: &str = "ca";

/// Contact address sent to Nominatim, as its usage policy asks of
/// unattended clients.
#[cfg(feature = "ssr")]
const CONTACT_EMAIL: &str = "info@speedsolvingcanada.org";

#[cfg(feature = "ssr")]
const COMPETITION_LIST_URL: &str =
    "https://www.worldcubeassociation.org/api/v0/competitions?country_iso2=CA&sort=start_date";

#[cfg(feature = "ssr")]
const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";

/// Wire shape of one entry in the governing body's competition index.
#[derive(Debug, Clone, Deserialize)]
struct ApiCompetition {
    id: String,
    name: String,
    city: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    latitude_degrees: f64,
    longitude_degrees: f64,
}

impl From<ApiCompetition> for Competition {
    fn from(api: ApiCompetition) -> Self {
        Competition {
            id: api.id,
            name: api.name,
            city: api.city,
            start_date: api.start_date,
            end_date: api.end_date,
            latitude_degrees: api.latitude_degrees,
            longitude_degrees: api.longitude_degrees,
        }
    }
}

/// Wire shape of a Nominatim candidate. Coordinates arrive as strings.
#[derive(Debug, Clone, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    address: NominatimAddress,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct NominatimAddress {
    #[serde(default)]
    country_code: String,
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    town: Option<String>,
    #[serde(default)]
    village: Option<String>,
}

/// Forward geocoding can return candidates from anywhere in the world;
/// the first one inside the home country wins.
fn first_in_country(places: Vec<NominatimPlace>, country_code: &str) -> Option<NominatimPlace> {
    places
        .into_iter()
        .find(|place| place.address.country_code == country_code)
}

fn resolved_from_place(place: &NominatimPlace) -> Option<ResolvedLocation> {
    let lat = place.lat.parse().ok()?;
    let lon = place.lon.parse().ok()?;
    let name = place
        .name
        .clone()
        .filter(|n| !n.is_empty())
        .or_else(|| place.address.city.clone())
        .or_else(|| place.address.town.clone())
        .or_else(|| place.address.village.clone())
        .or_else(|| place.display_name.clone())?;
    Some(ResolvedLocation { name, lat, lon })
}

#[cfg(feature = "ssr")]
fn http_client() -> Result<reqwest::Client, ServerFnError> {
    reqwest::Client::builder()
        .user_agent(concat!("speedsolving-canada-site/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| ServerFnError::new(format!("Failed to build HTTP client: {}", e)))
}

/// Fetches the announced competition list. The upstream list may be
/// cached and include concluded competitions; callers filter at read time.
#[server]
pub async fn fetch_competitions() -> Result<Vec<Competition>, ServerFnError> {
    #[cfg(feature = "ssr")]
    {
        let url = std::env::var("COMPETITION_LIST_URL")
            .unwrap_or_else(|_| COMPETITION_LIST_URL.to_string());

        let response = http_client()?
            .get(&url)
            .send()
            .await
            .map_err(|e| ServerFnError::new(format!("Failed to fetch competitions: {}", e)))?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "competition list request failed");
            return Err(ServerFnError::new(format!(
                "Competition list returned status {}",
                response.status()
            )));
        }

        match response.json::<Vec<ApiCompetition>>().await {
            Ok(list) => Ok(list.into_iter().map(Competition::from).collect()),
            Err(e) => Err(ServerFnError::new(format!(
                "Failed to parse competition list: {}",
                e
            ))),
        }
    }
    #[cfg(not(feature = "ssr"))]
    {
        Ok(vec![])
    }
}

/// Resolves free-text input to coordinates. `Ok(None)` means the query
/// matched nothing inside the home country, which the UI reports as
/// "location not found" rather than an empty result.
#[server]
pub async fn geocode(query: String) -> Result<Option<ResolvedLocation>, ServerFnError> {
    #[cfg(feature = "ssr")]
    {
        let base = std::env::var("NOMINATIM_URL").unwrap_or_else(|_| NOMINATIM_URL.to_string());
        let url = format!(
            "{}/search?q={}&format=jsonv2&addressdetails=1&limit=10&email={}",
            base,
            urlencoding::encode(&query),
            CONTACT_EMAIL
        );

        let response = http_client()?
            .get(&url)
            .send()
            .await
            .map_err(|e| ServerFnError::new(format!("Geocoding request failed: {}", e)))?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "geocoding request failed");
            return Err(ServerFnError::new(format!(
                "Geocoding service returned status {}",
                response.status()
            )));
        }

        let places = response
            .json::<Vec<NominatimPlace>>()
            .await
            .map_err(|e| ServerFnError::new(format!("Failed to parse geocoding response: {}", e)))?;

        Ok(first_in_country(places, HOME_COUNTRY_CODE)
            .as_ref()
            .and_then(resolved_from_place))
    }
    #[cfg(not(feature = "ssr"))]
    {
        let _ = query;
        Ok(None)
    }
}

/// Resolves device coordinates back to a display name. The coordinates
/// passed in are authoritative; only the name comes from the lookup.
#[server]
pub async fn reverse_geocode(
    latitude: f64,
    longitude: f64,
) -> Result<Option<ResolvedLocation>, ServerFnError> {
    #[cfg(feature = "ssr")]
    {
        let base = std::env::var("NOMINATIM_URL").unwrap_or_else(|_| NOMINATIM_URL.to_string());
        let url = format!(
            "{}/reverse?lat={}&lon={}&format=jsonv2&addressdetails=1&email={}",
            base, latitude, longitude, CONTACT_EMAIL
        );

        let response = http_client()?
            .get(&url)
            .send()
            .await
            .map_err(|e| ServerFnError::new(format!("Reverse geocoding request failed: {}", e)))?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "reverse geocoding request failed");
            return Err(ServerFnError::new(format!(
                "Geocoding service returned status {}",
                response.status()
            )));
        }

        let place = response
            .json::<NominatimPlace>()
            .await
            .map_err(|e| ServerFnError::new(format!("Failed to parse geocoding response: {}", e)))?;

        Ok(resolved_from_place(&place).map(|resolved| ResolvedLocation {
            lat: latitude,
            lon: longitude,
            ..resolved
        }))
    }
    #[cfg(not(feature = "ssr"))]
    {
        let _ = (latitude, longitude);
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(country_code: &str, name: &str) -> NominatimPlace {
        NominatimPlace {
            lat: "43.6532".to_string(),
            lon: "-79.3832".to_string(),
            name: Some(name.to_string()),
            display_name: Some(format!("{}, somewhere", name)),
            address: NominatimAddress {
                country_code: country_code.to_string(),
                city: None,
                town: None,
                village: None,
            },
        }
    }

    #[test]
    fn picks_the_first_home_country_candidate() {
        let places = vec![place("us", "London"), place("ca", "London"), place("ca", "Windsor")];
        let chosen = first_in_country(places, HOME_COUNTRY_CODE).unwrap();
        assert_eq!(chosen.name.as_deref(), Some("London"));
        assert_eq!(chosen.address.country_code, "ca");
    }

    #[test]
    fn no_home_country_candidate_yields_none() {
        let places = vec![place("us", "Toronto"), place("gb", "Toronto")];
        assert!(first_in_country(places, HOME_COUNTRY_CODE).is_none());
    }

    #[test]
    fn parses_string_coordinates() {
        let resolved = resolved_from_place(&place("ca", "Toronto")).unwrap();
        assert_eq!(resolved.name, "Toronto");
        assert!((resolved.lat - 43.6532).abs() < 1e-9);
        assert!((resolved.lon + 79.3832).abs() < 1e-9);
    }

    #[test]
    fn unparseable_coordinates_yield_none() {
        let mut broken = place("ca", "Toronto");
        broken.lat = "not-a-number".to_string();
        assert!(resolved_from_place(&broken).is_none());
    }

    #[test]
    fn falls_back_through_address_fields_for_the_name() {
        let mut no_name = place("ca", "ignored");
        no_name.name = None;
        no_name.address.town = Some("Stratford".to_string());
        let resolved = resolved_from_place(&no_name).unwrap();
        assert_eq!(resolved.name, "Stratford");
    }

    #[test]
    fn deserializes_competition_index_entries() {
        let json = r#"[{
            "id": "TorontoSummer2026",
            "name": "Toronto Summer 2026",
            "city": "Toronto, Ontario",
            "start_date": "2026-07-11",
            "end_date": "2026-07-12",
            "latitude_degrees": 43.6532,
            "longitude_degrees": -79.3832,
            "announced_at": "2026-01-05T00:00:00.000Z"
        }]"#;
        let list: Vec<ApiCompetition> = serde_json::from_str(json).unwrap();
        let competition = Competition::from(list[0].clone());
        assert_eq!(competition.id, "TorontoSummer2026");
        assert_eq!(competition.end_date.to_string(), "2026-07-12");
    }
}
