use chrono::Utc;
use rand::Rng;
use tracing::debug;

use crate::models::{MockEnvelope, MockWeather, Recommendation};

/// Mood class a location buckets into when no upstream agent is configured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Sunny,
    Cloudy,
    Rainy,
}

impl Mood {
    pub fn condition(self) -> &'static str {
        match self {
            Mood::Sunny => "sunny",
            Mood::Cloudy => "cloudy",
            Mood::Rainy => "rainy",
        }
    }
}

const SUNNY_TRACKS: [(&str, &str); 3] = [
    (
        "Walking on Sunshine - Katrina & The Waves",
        "https://www.youtube.com/results?search_query=walking+on+sunshine+katrina+and+the+waves",
    ),
    (
        "Here Comes the Sun - The Beatles",
        "https://www.youtube.com/results?search_query=here+comes+the+sun+the+beatles",
    ),
    (
        "Island in the Sun - Weezer",
        "https://www.youtube.com/results?search_query=island+in+the+sun+weezer",
    ),
];

const CLOUDY_TRACKS: [(&str, &str); 3] = [
    (
        "Both Sides Now - Joni Mitchell",
        "https://www.youtube.com/results?search_query=both+sides+now+joni+mitchell",
    ),
    (
        "Cloudbusting - Kate Bush",
        "https://www.youtube.com/results?search_query=cloudbusting+kate+bush",
    ),
    (
        "Overcast Day Lofi Mix",
        "https://www.youtube.com/results?search_query=overcast+day+lofi+mix",
    ),
];

const RAINY_TRACKS: [(&str, &str); 3] = [
    (
        "Riders on the Storm - The Doors",
        "https://www.youtube.com/results?search_query=riders+on+the+storm+the+doors",
    ),
    (
        "Have You Ever Seen the Rain - Creedence Clearwater Revival",
        "https://www.youtube.com/results?search_query=have+you+ever+seen+the+rain+ccr",
    ),
    (
        "Set Fire to the Rain - Adele",
        "https://www.youtube.com/results?search_query=set+fire+to+the+rain+adele",
    ),
];

/// Buckets a location into a mood class by its lowercase first character:
/// `<= 'h'` is sunny, `<= 'p'` is cloudy, everything else is rainy.
pub fn mood_for(location: &str) -> Mood {
    let first = location
        .trim()
        .chars()
        .next()
        .map(|c| c.to_ascii_lowercase())
        .unwrap_or('a');

    if first <= 'h' {
        Mood::Sunny
    } else if first <= 'p' {
        Mood::Cloudy
    } else {
        Mood::Rainy
    }
}

/// Generates a synthetic weather vibes payload for a location.
///
/// The shape is deterministic per location; only the temperature jitter and
/// the cloudy-bucket umbrella flag are random. Always succeeds for non-empty
/// input.
pub fn mock_vibes(location: &str) -> MockEnvelope {
    let mood = mood_for(location);
    debug!("Generating mock vibes for '{}' ({:?})", location, mood);

    let mut rng = rand::thread_rng();

    // Each class draws from its own 15-degree range
    let temperature = match mood {
        Mood::Sunny => rng.gen_range(20.0..35.0),
        Mood::Cloudy => rng.gen_range(10.0..25.0),
        Mood::Rainy => rng.gen_range(5.0..20.0),
    };
    let temperature = (temperature * 10.0_f64).round() / 10.0;

    let need_umbrella = match mood {
        Mood::Sunny => false,
        Mood::Cloudy => rng.gen_bool(0.5),
        Mood::Rainy => true,
    };

    let tracks = match mood {
        Mood::Sunny => &SUNNY_TRACKS,
        Mood::Cloudy => &CLOUDY_TRACKS,
        Mood::Rainy => &RAINY_TRACKS,
    };
    let recommendations = tracks
        .iter()
        .map(|(title, url)| Recommendation::new(title, url))
        .collect();

    let condition = mood.condition();

    MockEnvelope {
        location: location.to_string(),
        weather: MockWeather {
            temperature,
            unit: "celsius".to_string(),
            condition: condition.to_string(),
            forecast: format!("It looks {} in {} today.", condition, location),
        },
        need_umbrella,
        recommendations,
        timestamp: Utc::now().to_rfc3339(),
    }
}
