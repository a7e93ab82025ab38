//! Enumerated display options.
//!
//! Each option is a closed set of values. When options come from text (a
//! settings file, command line flags) they are parsed with [`FromStr`]: the
//! input is trimmed and then must match one of the accepted names exactly.
//!
//! ```rust
//! use spb::config::{BarVariant, Color, Toggle};
//!
//! assert_eq!(" hide ".parse::<Toggle>().unwrap(), Toggle::Hide);
//! assert_eq!("decreasing".parse::<BarVariant>().unwrap(), BarVariant::Decreasing);
//! assert!("Green".parse::<Color>().is_err());
//! ```

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

macro_rules! text_option {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every accepted textual value, in declaration order.
            pub const NAMES: &'static [&'static str] = &[$($text),+];

            /// The textual value of this option.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $text ),+
                }
            }

            /// Parse `s`, reporting failures against the option named `field`.
            pub fn parse_for(field: &'static str, s: &str) -> Result<Self, Error> {
                match s.trim() {
                    $( $text => Ok($name::$variant), )+
                    _ => Err(Error::invalid(field, s, format!("one of {:?}", Self::NAMES))),
                }
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse_for($field, s)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

text_option! {
    /// Show or hide an indicator.
    Toggle, "toggle" {
        /// The element is rendered.
        Show => "show",
        /// The element contributes nothing to the line.
        Hide => "hide",
    }
}

impl Toggle {
    /// Returns `true` for [`Toggle::Show`].
    pub fn is_shown(&self) -> bool {
        matches!(self, Toggle::Show)
    }
}

impl From<bool> for Toggle {
    fn from(show: bool) -> Self {
        if show {
            Toggle::Show
        } else {
            Toggle::Hide
        }
    }
}

text_option! {
    /// How the bar itself is drawn.
    BarVariant, "variant_bar" {
        /// The whole track is drawn with the space glyph between brackets.
        Static => "static",
        /// Only the arrows are drawn and they grow with progress.
        Increasing => "increasing",
        /// Only the arrows are drawn, sized by the remaining share.
        Decreasing => "decreasing",
    }
}

text_option! {
    /// Whether the timer counts elapsed or estimated remaining time.
    TimerVariant, "variant_timer" {
        /// Elapsed time since the shared start time.
        Increasing => "increasing",
        /// Linear estimate of the time left.
        Decreasing => "decreasing",
    }
}

text_option! {
    /// Icon shown in front of the timer.
    TimerIcon, "icon_timer" {
        /// Cycle through the configured glyph sequence.
        Animated => "animated",
        /// A fixed stopwatch glyph.
        Static => "static",
        /// No icon.
        Hide => "hide",
    }
}

text_option! {
    /// Foreground color used for the arrows and every numeric value.
    Color, "color" {
        Black => "black",
        Red => "red",
        Green => "green",
        Yellow => "yellow",
        Blue => "blue",
        Magenta => "magenta",
        Cyan => "cyan",
        Gray => "gray",
        White => "white",
    }
}

impl Color {
    /// Numeric code placed after `ESC[3` in the SGR sequence.
    pub fn code(&self) -> u8 {
        match self {
            Color::Black => 0,
            Color::Red => 1,
            Color::Green => 2,
            Color::Yellow => 3,
            Color::Blue => 4,
            Color::Magenta => 5,
            Color::Cyan => 6,
            Color::Gray => 7,
            Color::White => 8,
        }
    }

    /// Escape sequence selecting this color.
    pub fn escape(&self) -> String {
        format!("\x1b[3{}m", self.code())
    }
}
