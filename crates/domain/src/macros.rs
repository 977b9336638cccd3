//! Macro for string conversions of fieldless domain enums
//!
//! Generates `as_str`, `Display` and case-insensitive `FromStr` from a single
//! variant-to-string table, so configuration values and log fields agree.
//!
//! # Example
//!
//! ```rust
//! use entityforge_domain::impl_domain_str_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Lifetime {
//!     Scoped,
//!     Singleton,
//! }
//!
//! impl_domain_str_conversions!(Lifetime {
//!     Scoped => "scoped",
//!     Singleton => "singleton",
//! });
//!
//! assert_eq!(Lifetime::Scoped.to_string(), "scoped");
//! assert_eq!("SINGLETON".parse::<Lifetime>().unwrap(), Lifetime::Singleton);
//! ```

/// Implements `as_str`, `Display` and `FromStr` for a fieldless enum
///
/// Parsing is case-insensitive and ignores surrounding whitespace. Unknown
/// values produce `EntityForgeError::Config` naming the enum.
#[macro_export]
macro_rules! impl_domain_str_conversions {
    ($enum_name:ident { $($variant:ident => $str:literal),+ $(,)? }) => {
        impl $enum_name {
            /// Canonical string form
            pub const fn as_str(&self) -> &'static str {
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
            type Err = $crate::errors::EntityForgeError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err($crate::errors::EntityForgeError::Config(format!(
                        "Invalid {}: {}",
                        stringify!($enum_name),
                        s
                    ))),
                }
            }
        }
    };
}
