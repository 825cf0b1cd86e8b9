//! Terminal page renderer
//!
//! Draws a [`WeatherPage`] as plain text. Rendering never touches the
//! network or the cached model; it only reads the view state.

use std::fmt::Write as _;

use application::{ForecastCard, WeatherIcon, WeatherPage};

/// Glyph shown in place of the icon image
pub const fn glyph(icon: WeatherIcon) -> &'static str {
    match icon {
        WeatherIcon::Sun => "☀",
        WeatherIcon::PartlyCloudy => "⛅",
        WeatherIcon::Cloud => "☁",
        WeatherIcon::Fog => "🌫",
        WeatherIcon::Rain => "🌧",
        WeatherIcon::Snow => "❄",
        WeatherIcon::Thunder => "⛈",
    }
}

/// Unit toggles, pressed one in brackets: `[°C]  °F `
pub fn render_toggles(page: &WeatherPage) -> String {
    page.unit_toggles()
        .iter()
        .map(|toggle| {
            let label = toggle.unit.symbol();
            if toggle.pressed {
                format!("[{label}]")
            } else {
                format!(" {label} ")
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_card(card: &ForecastCard) -> String {
    format!(
        "{}  {} {}  {} / {}",
        card.date_label,
        glyph(card.icon.icon),
        card.icon.alt,
        card.max,
        card.min
    )
}

/// Whole page, one section per visible part
pub fn render_page(page: &WeatherPage) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", render_toggles(page));

    if !page.status().is_empty() {
        let _ = writeln!(out, "{}", page.status());
    }

    if let Some(current) = page.current() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", current.location);
        let _ = writeln!(
            out,
            "{} {}  {}",
            glyph(current.icon.icon),
            current.temperature,
            current.description
        );
        let _ = writeln!(out, "{}", current.wind);
        let _ = writeln!(out, "{}", current.local_time);
    }

    if page.forecast_visible() {
        let _ = writeln!(out);
        for card in page.forecast() {
            let _ = writeln!(out, "{}", render_card(card));
        }
    }

    if let Some(theme) = page.theme() {
        let _ = writeln!(out, "theme: {theme}");
    }

    out
}
