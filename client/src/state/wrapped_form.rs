//! Text fields of the wrapped editor, per section.

#[cfg(test)]
#[path = "wrapped_form_test.rs"]
mod wrapped_form_test;

use cards::{WrappedData, WrappedSection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WrappedField {
    WelcomeTitle,
    WelcomeSubtitle,
    WelcomeMessage,
    StatsTitle,
    StatsSubtitle,
    StatsLabel,
    StatsDescription,
    HiddenTitle,
    HiddenSubtitle,
    HiddenMessage,
}

impl WrappedField {
    /// Fields of `section` in form order.
    #[must_use]
    pub fn of(section: WrappedSection) -> &'static [Self] {
        match section {
            WrappedSection::Welcome => &[Self::WelcomeTitle, Self::WelcomeSubtitle, Self::WelcomeMessage],
            WrappedSection::Stats => {
                &[Self::StatsTitle, Self::StatsSubtitle, Self::StatsLabel, Self::StatsDescription]
            }
            WrappedSection::Hidden => &[Self::HiddenTitle, Self::HiddenSubtitle, Self::HiddenMessage],
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::WelcomeTitle | Self::StatsTitle | Self::HiddenTitle => "Title",
            Self::WelcomeSubtitle | Self::StatsSubtitle | Self::HiddenSubtitle => "Subtitle",
            Self::WelcomeMessage | Self::HiddenMessage => "Message",
            Self::StatsLabel => "Label",
            Self::StatsDescription => "Description",
        }
    }

    /// Rendered as a textarea rather than a single-line input.
    #[must_use]
    pub fn multiline(self) -> bool {
        matches!(self, Self::WelcomeMessage | Self::StatsDescription | Self::HiddenMessage)
    }

    #[must_use]
    pub fn get(self, data: &WrappedData) -> &str {
        match self {
            Self::WelcomeTitle => &data.welcome.title,
            Self::WelcomeSubtitle => &data.welcome.subtitle,
            Self::WelcomeMessage => &data.welcome.message,
            Self::StatsTitle => &data.stats.title,
            Self::StatsSubtitle => &data.stats.subtitle,
            Self::StatsLabel => &data.stats.label,
            Self::StatsDescription => &data.stats.description,
            Self::HiddenTitle => &data.hidden.title,
            Self::HiddenSubtitle => &data.hidden.subtitle,
            Self::HiddenMessage => &data.hidden.message,
        }
    }

    pub fn set(self, data: &mut WrappedData, value: String) {
        let slot = match self {
            Self::WelcomeTitle => &mut data.welcome.title,
            Self::WelcomeSubtitle => &mut data.welcome.subtitle,
            Self::WelcomeMessage => &mut data.welcome.message,
            Self::StatsTitle => &mut data.stats.title,
            Self::StatsSubtitle => &mut data.stats.subtitle,
            Self::StatsLabel => &mut data.stats.label,
            Self::StatsDescription => &mut data.stats.description,
            Self::HiddenTitle => &mut data.hidden.title,
            Self::HiddenSubtitle => &mut data.hidden.subtitle,
            Self::HiddenMessage => &mut data.hidden.message,
        };
        *slot = value;
    }
}
