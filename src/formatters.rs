use crate::compare::{ComparedLocation, Comparison};
use crate::location::StateCode;
use crate::nws::{Alert, CurrentConditions, Forecast, Period};

const RULE_WIDTH: usize = 60;

/// Formats weather alerts into a human-readable string
pub fn format_alerts(state: &StateCode, alerts: &[Alert]) -> String {
    if alerts.is_empty() {
        return format!("No active weather alerts for {}.", state);
    }

    let blocks: Vec<String> = alerts.iter().map(format_alert).collect();
    format!(
        "Weather Alerts for {} ({} active):\n\n{}",
        state,
        alerts.len(),
        blocks.join("\n---\n\n")
    )
}

fn format_alert(alert: &Alert) -> String {
    let mut output = format!(
        "Event: {}\nArea: {}\nSeverity: {}\n",
        alert.event, alert.area, alert.severity
    );
    if let Some(headline) = &alert.headline {
        output.push_str(&format!("Headline: {}\n", headline));
    }
    output.push_str(&format!(
        "Description: {}\n",
        alert
            .description
            .as_deref()
            .unwrap_or("No description available")
    ));
    if let Some(instruction) = &alert.instruction {
        output.push_str(&format!("Instructions: {}\n", instruction));
    }
    output
}

/// Formats an NWS forecast into a human-readable string. `matched` is the
/// geocoded label when the forecast was requested by place name.
pub fn format_forecast(forecast: &Forecast, matched: Option<&str>) -> String {
    let mut output = format!("Weather Forecast for {}:\n", forecast.location());
    if let Some(label) = matched {
        output.push_str(&format!("Matched location: {}\n", label));
    }
    output.push('\n');

    let periods: Vec<String> = forecast.periods.iter().map(format_period).collect();
    output.push_str(&periods.join("---\n"));
    output
}

fn format_period(period: &Period) -> String {
    let mut output = format!(
        "{}:\n  Temperature: {}\u{00b0}{}\n  Wind: {} {}\n",
        period.name,
        period.temperature,
        period.temperature_unit,
        period.wind_speed,
        period.wind_direction
    );
    if let Some(humidity) = period.humidity {
        output.push_str(&format!("  Humidity: {:.0}%\n", humidity));
    }
    if let Some(chance) = period.precipitation_chance {
        output.push_str(&format!("  Precipitation: {:.0}%\n", chance));
    }
    output.push_str(&format!(
        "  Conditions: {}\n  Forecast: {}\n",
        period.short_forecast, period.detailed_forecast
    ));
    output
}

/// Formats the latest station observation into a human-readable string
pub fn format_current_conditions(conditions: &CurrentConditions) -> String {
    let mut output = format!("Current Conditions for {}:\n", conditions.location);
    match &conditions.station_name {
        Some(name) => output.push_str(&format!(
            "Station: {} ({})\n\n",
            conditions.station_id, name
        )),
        None => output.push_str(&format!("Station: {}\n\n", conditions.station_id)),
    }

    match (conditions.temperature_f(), conditions.temperature_c) {
        (Some(f), Some(c)) => output.push_str(&format!(
            "Temperature: {:.1}\u{00b0}F ({:.1}\u{00b0}C)\n",
            f, c
        )),
        _ => output.push_str("Temperature: N/A\n"),
    }
    output.push_str(&format!(
        "Conditions: {}\n",
        conditions.description.as_deref().unwrap_or("N/A")
    ));
    if let Some(humidity) = conditions.humidity {
        output.push_str(&format!("Humidity: {:.1}%\n", humidity));
    }
    if let Some(dewpoint) = conditions.dewpoint_f {
        output.push_str(&format!("Dewpoint: {:.1}\u{00b0}F\n", dewpoint));
    }
    if let Some(speed) = conditions.wind_speed_mph {
        match conditions.wind_direction_deg {
            Some(deg) => output.push_str(&format!(
                "Wind: {:.1} mph from {:.0}\u{00b0} ({})\n",
                speed,
                deg,
                compass_point(deg)
            )),
            None => output.push_str(&format!("Wind: {:.1} mph\n", speed)),
        }
    }
    if let Some(pressure) = conditions.pressure_hpa {
        output.push_str(&format!("Pressure: {:.2} hPa\n", pressure));
    }
    if let Some(visibility) = conditions.visibility_miles {
        output.push_str(&format!("Visibility: {:.2} miles\n", visibility));
    }
    output
}

/// Formats a side-by-side comparison of two first forecast periods
pub fn format_comparison(comparison: &Comparison) -> String {
    let (a, b) = (comparison.first(), comparison.second());
    let (p1, p2) = (a.first_period(), b.first_period());
    let (label1, label2) = (a.label(), b.label());

    let mut output = String::from("Weather Comparison\n");
    output.push_str(&"=".repeat(RULE_WIDTH));
    output.push_str("\n\n");
    output.push_str(&row("", &label1, &label2));
    output.push_str(&"-".repeat(RULE_WIDTH));
    output.push('\n');
    output.push_str(&row("Period", &p1.name, &p2.name));
    output.push_str(&row(
        "Temperature",
        &format!("{}\u{00b0}{}", p1.temperature, p1.temperature_unit),
        &format!("{}\u{00b0}{}", p2.temperature, p2.temperature_unit),
    ));
    output.push_str(&row(
        "Wind",
        &format!("{} {}", p1.wind_speed, p1.wind_direction),
        &format!("{} {}", p2.wind_speed, p2.wind_direction),
    ));
    if let (Some(h1), Some(h2)) = (p1.humidity, p2.humidity) {
        output.push_str(&row("Humidity", &format!("{:.0}%", h1), &format!("{:.0}%", h2)));
    }
    if let (Some(c1), Some(c2)) = (p1.precipitation_chance, p2.precipitation_chance) {
        output.push_str(&row(
            "Precip Chance",
            &format!("{:.0}%", c1),
            &format!("{:.0}%", c2),
        ));
    }
    output.push_str(&row("Conditions", &p1.short_forecast, &p2.short_forecast));

    output.push_str("\nForecast:\n");
    output.push_str(&format!("{}: {}\n", label1, p1.detailed_forecast));
    output.push_str(&format!("{}: {}\n", label2, p2.detailed_forecast));

    output.push('\n');
    output.push_str(&resolution_note(a));
    output.push_str(&resolution_note(b));
    output.push_str(&temperature_summary(
        comparison.temperature_difference(),
        &label1,
        &label2,
    ));
    output
}

fn row(name: &str, left: &str, right: &str) -> String {
    format!("{:<15}{:<30} | {}\n", name, left, right)
}

fn resolution_note(side: &ComparedLocation) -> String {
    match side.resolved() {
        Some(resolved) => format!(
            "'{}' resolved to {} ({})\n",
            side.query(),
            resolved.label,
            resolved.coordinates
        ),
        None => format!("'{}' used as coordinates\n", side.query()),
    }
}

fn temperature_summary(difference: f64, label1: &str, label2: &str) -> String {
    let difference = (difference * 10.0).round() / 10.0;
    if difference == 0.0 {
        return format!(
            "Temperature difference: 0\u{00b0}F\n{} and {} have the same temperature.\n",
            label1, label2
        );
    }

    let direction = if difference > 0.0 { "warmer" } else { "cooler" };
    format!(
        "Temperature difference: {:+}\u{00b0}F\n{} is {}\u{00b0}F {} than {}.\n",
        difference,
        label1,
        difference.abs(),
        direction,
        label2
    )
}

/// 16-point compass name for a bearing in degrees
fn compass_point(degrees: f64) -> &'static str {
    const POINTS: [&str; 16] = [
        "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW",
        "NW", "NNW",
    ];
    let index = (degrees.rem_euclid(360.0) / 22.5).round() as usize % 16;
    POINTS[index]
}
