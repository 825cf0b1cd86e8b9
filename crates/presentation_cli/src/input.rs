//! Line input adapter
//!
//! Turns one line typed at the prompt into a [`Command`]. Any line that is
//! not a recognised command is a city submission.

use domain::TemperatureUnit;

/// A parsed prompt line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Look up a city (the raw line, unchanged)
    Submit(String),
    /// Press a unit toggle
    SetUnit(TemperatureUnit),
    Help,
    Quit,
}

/// Help text printed for `/help`
pub const HELP: &str = "\
Type a city name and press Enter to look it up.
  :c, /unit c     show temperatures in Celsius
  :f, /unit f     show temperatures in Fahrenheit
  /help           show this help
  /quit, /exit    leave";

/// Parse one input line
pub fn parse_line(line: &str) -> Command {
    let trimmed = line.trim();

    match trimmed {
        ":c" | ":C" => return Command::SetUnit(TemperatureUnit::Celsius),
        ":f" | ":F" => return Command::SetUnit(TemperatureUnit::Fahrenheit),
        "/help" | "/?" => return Command::Help,
        "/quit" | "/exit" => return Command::Quit,
        _ => {},
    }

    if let Some(rest) = trimmed.strip_prefix("/unit ")
        && let Ok(unit) = rest.parse::<TemperatureUnit>()
    {
        return Command::SetUnit(unit);
    }

    Command::Submit(line.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_submitted() {
        assert_eq!(parse_line("Paris"), Command::Submit("Paris".to_string()));
    }

    #[test]
    fn submission_keeps_raw_line() {
        assert_eq!(
            parse_line("  New York "),
            Command::Submit("  New York ".to_string())
        );
    }

    #[test]
    fn blank_line_is_a_submission() {
        // the lookup service ignores it
        assert_eq!(parse_line("   "), Command::Submit("   ".to_string()));
    }

    #[test]
    fn colon_shortcuts_set_unit() {
        assert_eq!(
            parse_line(":f"),
            Command::SetUnit(TemperatureUnit::Fahrenheit)
        );
        assert_eq!(parse_line(" :C "), Command::SetUnit(TemperatureUnit::Celsius));
    }

    #[test]
    fn unit_command_accepts_names() {
        assert_eq!(
            parse_line("/unit f"),
            Command::SetUnit(TemperatureUnit::Fahrenheit)
        );
        assert_eq!(
            parse_line("/unit celsius"),
            Command::SetUnit(TemperatureUnit::Celsius)
        );
    }

    #[test]
    fn bad_unit_falls_through_to_submit() {
        assert_eq!(
            parse_line("/unit kelvin"),
            Command::Submit("/unit kelvin".to_string())
        );
    }

    #[test]
    fn help_and_quit() {
        assert_eq!(parse_line("/help"), Command::Help);
        assert_eq!(parse_line("/quit"), Command::Quit);
        assert_eq!(parse_line("/exit"), Command::Quit);
    }
}
