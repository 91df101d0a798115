use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A closed set of wire strings, each paired with a symbolic variant.
///
/// Implementations are generated by `wire_enum!`; the table is static and
/// declared once per enum.
pub trait WireEnum: Copy + PartialEq + 'static {
    const NAME: &'static str;
    /// `(variant, symbol, wire)` triples in declaration order.
    const TABLE: &'static [(Self, &'static str, &'static str)];

    fn wire(&self) -> &'static str {
        Self::TABLE
            .iter()
            .find(|(variant, _, _)| variant == self)
            .map(|(_, _, wire)| *wire)
            .unwrap_or_default()
    }

    fn symbol(&self) -> &'static str {
        Self::TABLE
            .iter()
            .find(|(variant, _, _)| variant == self)
            .map(|(_, symbol, _)| *symbol)
            .unwrap_or_default()
    }

    fn from_wire(wire: &str) -> Option<Self> {
        Self::TABLE
            .iter()
            .find(|(_, _, candidate)| *candidate == wire)
            .map(|(variant, _, _)| *variant)
    }

    fn from_symbol(symbol: &str) -> Option<Self> {
        Self::TABLE
            .iter()
            .find(|(_, candidate, _)| *candidate == symbol)
            .map(|(variant, _, _)| *variant)
    }
}

/// Translates a symbolic name to its wire string, passing unknown input through.
pub fn to_wire<E: WireEnum>(symbol: &str) -> &str {
    match E::from_symbol(symbol) {
        Some(variant) => variant.wire(),
        None => symbol,
    }
}

/// Translates a wire string to its symbolic name, passing unknown input through.
pub fn to_symbol<E: WireEnum>(wire: &str) -> &str {
    match E::from_wire(wire) {
        Some(variant) => variant.symbol(),
        None => wire,
    }
}

/// An enum field value as received from or sent to the API.
///
/// Wire strings outside the known table are kept verbatim in `Unknown` and
/// serialize back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EnumValue<E> {
    Known(E),
    Unknown(String),
}

impl<E: WireEnum> EnumValue<E> {
    pub fn from_wire(wire: &str) -> Self {
        match E::from_wire(wire) {
            Some(variant) => EnumValue::Known(variant),
            None => EnumValue::Unknown(wire.to_string()),
        }
    }

    pub fn as_wire(&self) -> &str {
        match self {
            EnumValue::Known(variant) => variant.wire(),
            EnumValue::Unknown(raw) => raw,
        }
    }

    pub fn known(&self) -> Option<E> {
        match self {
            EnumValue::Known(variant) => Some(*variant),
            EnumValue::Unknown(_) => None,
        }
    }
}

impl<E: WireEnum> From<E> for EnumValue<E> {
    fn from(variant: E) -> Self {
        EnumValue::Known(variant)
    }
}

impl<E: WireEnum> fmt::Display for EnumValue<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

impl<E: WireEnum> Serialize for EnumValue<E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_wire())
    }
}

impl<'de, E: WireEnum> Deserialize<'de> for EnumValue<E> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = String::deserialize(deserializer)?;
        Ok(match E::from_wire(&wire) {
            Some(variant) => EnumValue::Known(variant),
            None => EnumValue::Unknown(wire),
        })
    }
}

/// Declares a closed-set enum together with its static wire table.
///
/// ```ignore
/// wire_enum! {
///     pub enum Gender {
///         Male => "MALE",
///         NonBinary => "NON-BINARY",
///     }
/// }
/// ```
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($variant),+
        }

        impl $crate::wire::WireEnum for $name {
            const NAME: &'static str = stringify!($name);
            const TABLE: &'static [(Self, &'static str, &'static str)] =
                &[$(($name::$variant, stringify!($variant), $wire)),+];
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::wire::WireEnum::wire(self))
            }
        }
    };
}

pub(crate) use wire_enum;
