//! Macro for implementing Display and FromStr for domain enums
//!
//! Teams, shift types and day-off types all travel as lowercase strings
//! between the persistence gateway and the core. This macro keeps the string
//! mapping in one place and produces a `PlantaoError::Validation` on unknown
//! input so ledger validation can propagate it with `?`.
//!
//! # Example
//!
//! ```rust
//! use plantao_domain::impl_domain_enum_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Shift {
//!     Day,
//!     Night,
//! }
//!
//! impl_domain_enum_conversions!(Shift {
//!     Day => "day",
//!     Night => "night",
//! });
//!
//! assert_eq!(Shift::Night.to_string(), "night");
//! assert_eq!("DAY".parse::<Shift>().unwrap(), Shift::Day);
//! ```

/// Implements Display, FromStr and `as_str` for domain enums
///
/// # Features
///
/// - Case-insensitive parsing with surrounding whitespace ignored
/// - Consistent lowercase string output
/// - Optional `| "alias"` spellings accepted by `FromStr` only
/// - Unknown values become `PlantaoError::Validation` naming the enum
#[macro_export]
macro_rules! impl_domain_enum_conversions {
    ($enum_name:ident { $($variant:ident => $str:literal $(| $alias:literal)*),+ $(,)? }) => {
        impl $enum_name {
            /// Canonical lowercase representation.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = $crate::PlantaoError;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str $(| $alias)* => Ok(Self::$variant),)+
                    _ => Err($crate::PlantaoError::Validation(format!(
                        "Invalid {}: {}",
                        stringify!($enum_name),
                        s
                    ))),
                }
            }
        }
    };
}
