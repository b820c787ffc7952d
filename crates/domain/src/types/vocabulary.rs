//! Macro for platform vocabulary enums
//!
//! The item platform identifies materials, flags, enchantments and the like by
//! SCREAMING_SNAKE_CASE names. Each vocabulary enum lists the names it knows and
//! falls back to `Unknown` during deserialization.

macro_rules! define_vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize,
        )]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire)]
                $variant,
            )+
            /// Unknown value (for forward compatibility)
            #[serde(other)]
            Unknown,
        }

        impl $name {
            /// All known values (excludes Unknown)
            pub fn all() -> &'static [$name] {
                &[$($name::$variant),+]
            }

            /// Platform name, e.g. `"HIDE_ENCHANTS"`
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                    $name::Unknown => "UNKNOWN",
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::DomainError;

            /// Parses a platform name. Case, spaces and dashes are normalized,
            /// so `"hide enchants"` and `"hide-enchants"` both match
            /// `"HIDE_ENCHANTS"`.
            ///
            /// Unlike serde deserialization (which falls back to `Unknown`),
            /// this returns an error for unrecognized inputs.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let normalized = s.trim().to_ascii_uppercase().replace([' ', '-'], "_");
                $name::all()
                    .iter()
                    .copied()
                    .find(|value| value.as_str() == normalized)
                    .ok_or_else(|| {
                        $crate::error::DomainError::parse(format!(
                            "Unknown {}: {}",
                            stringify!($name),
                            s
                        ))
                    })
            }
        }
    };
}

pub(crate) use define_vocabulary;
