use crate::models::AgentWeather;

const SETUP_HINT: &str =
    "Configure the missing API keys in the agent's environment to get live weather data.";

/// Renders an upstream weather payload as the multi-line report shown to the
/// user.
///
/// Each field gets its own line only when the upstream supplied it; presence
/// is tested per field, so a reading of zero still renders. When the payload
/// is flagged as mock data the report is wrapped in a warning block naming
/// the missing credentials plus setup instructions.
pub fn format_weather_report(weather: &AgentWeather) -> String {
    let mut lines: Vec<String> = Vec::new();

    if weather.mock_data {
        lines.push("⚠️ NOTE: The weather service returned mock data.".to_string());
        if !weather.missing_api_keys.is_empty() {
            lines.push(format!(
                "Missing API keys: {}",
                weather.missing_api_keys.join(", ")
            ));
        }
        lines.push(String::new());
    }

    lines.push(format!("Weather for {}:", weather.location));

    let mut reported = false;
    if let Some(temperature) = weather.temperature {
        lines.push(format!("Temperature: {}°C", fmt_number(temperature)));
        reported = true;
    }
    if let Some(conditions) = &weather.conditions {
        lines.push(format!("Conditions: {conditions}"));
        reported = true;
    }
    if let Some(humidity) = weather.humidity {
        lines.push(format!("Humidity: {}%", fmt_number(humidity)));
        reported = true;
    }
    if let Some(wind_speed) = weather.wind_speed {
        lines.push(format!("Wind speed: {} km/h", fmt_number(wind_speed)));
        reported = true;
    }
    if !reported {
        lines.push("Weather data is unavailable for this location.".to_string());
    }

    if weather.mock_data {
        lines.push(String::new());
        lines.push(SETUP_HINT.to_string());
    }

    lines.join("\n")
}

/// Drops the trailing `.0` from whole-number readings
fn fmt_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
