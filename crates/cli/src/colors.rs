use crossterm::style::{Color, ResetColor, SetBackgroundColor, SetForegroundColor};
use csv_labeler_core::definitions::ColorDefinition;
use csv_labeler_core::error::{Error, Result};
use csv_labeler_core::highlight::HighlightStyle;

/// Trait for converting color definitions to terminal colors
pub trait AsTermColor {
    fn as_crossterm_color(&self) -> Result<Option<Color>>;
}

impl AsTermColor for ColorDefinition {
    fn as_crossterm_color(&self) -> Result<Option<Color>> {
        let defined_count = [self.rgb.is_some(), self.ansi.is_some(), self.name.is_some()]
            .iter()
            .filter(|&&x| x)
            .count();

        // Error if more than one field is defined
        if defined_count > 1 {
            return Err(Error::MultipleColorTypes);
        }

        Ok(match (self.rgb, self.ansi, &self.name) {
            (Some((r, g, b)), None, None) => Some(Color::Rgb { r, g, b }),
            (None, Some(ansi), None) => Some(Color::AnsiValue(ansi)),
            (None, None, Some(name)) => Some(match name.to_lowercase().as_str() {
                "black" => Color::Black,
                "darkgrey" => Color::DarkGrey,
                "red" => Color::Red,
                "darkred" => Color::DarkRed,
                "green" => Color::Green,
                "darkgreen" => Color::DarkGreen,
                "yellow" => Color::Yellow,
                "darkyellow" => Color::DarkYellow,
                "blue" => Color::Blue,
                "darkblue" => Color::DarkBlue,
                "magenta" => Color::Magenta,
                "darkmagenta" => Color::DarkMagenta,
                "cyan" => Color::Cyan,
                "darkcyan" => Color::DarkCyan,
                "white" => Color::White,
                "grey" => Color::Grey,
                _ => return Err(Error::UnknownColorName(name.to_string())),
            }),
            (None, None, None) => None,
            _ => unreachable!(), // This case is prevented by the earlier check
        })
    }
}

/// Builds the escape sequences used to highlight keywords.
///
/// An undefined color leaves that part of the terminal style untouched.
pub fn highlight_style(
    foreground: &ColorDefinition,
    background: &ColorDefinition,
) -> Result<HighlightStyle> {
    let mut start = String::new();

    if let Some(color) = foreground.as_crossterm_color()? {
        start.push_str(&SetForegroundColor(color).to_string());
    }

    if let Some(color) = background.as_crossterm_color()? {
        start.push_str(&SetBackgroundColor(color).to_string());
    }

    Ok(HighlightStyle::new(start, ResetColor.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_color() {
        let color = ColorDefinition::named("DarkCyan").as_crossterm_color().unwrap();
        assert_eq!(color, Some(Color::DarkCyan));
    }

    #[test]
    fn test_rgb_and_ansi_colors() {
        let rgb = ColorDefinition {
            rgb: Some((10, 20, 30)),
            ..ColorDefinition::default()
        };
        let ansi = ColorDefinition {
            ansi: Some(240),
            ..ColorDefinition::default()
        };
        assert_eq!(
            rgb.as_crossterm_color().unwrap(),
            Some(Color::Rgb { r: 10, g: 20, b: 30 })
        );
        assert_eq!(ansi.as_crossterm_color().unwrap(), Some(Color::AnsiValue(240)));
        assert_eq!(ColorDefinition::default().as_crossterm_color().unwrap(), None);
    }

    #[test]
    fn test_multiple_color_types() {
        let color = ColorDefinition {
            rgb: Some((1, 2, 3)),
            ansi: Some(4),
            name: None,
        };
        assert!(matches!(color.as_crossterm_color(), Err(Error::MultipleColorTypes)));
    }

    #[test]
    fn test_unknown_color_name() {
        let result = ColorDefinition::named("octarine").as_crossterm_color();
        assert!(matches!(result, Err(Error::UnknownColorName(name)) if name == "octarine"));
    }

    #[test]
    fn test_highlight_style() {
        let style = highlight_style(
            &ColorDefinition::named("black"),
            &ColorDefinition::named("yellow"),
        )
        .unwrap();

        assert_eq!(style.stop, "\x1b[0m");
        assert!(style.start.starts_with("\x1b["));
        assert_eq!(style.start.matches("\x1b[").count(), 2);
    }

    #[test]
    fn test_highlight_style_without_colors() {
        let style = highlight_style(&ColorDefinition::default(), &ColorDefinition::default()).unwrap();
        assert!(style.start.is_empty());
    }
}
