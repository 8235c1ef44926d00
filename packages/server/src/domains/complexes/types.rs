//! Enumerated descriptors of a residential complex.
//!
//! Stored as snake_case TEXT columns; requests carry the same snake_case strings.

use serde::{Deserialize, Serialize};

macro_rules! text_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $text:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = anyhow::Error;

            fn from_str(s: &str) -> anyhow::Result<Self> {
                match s {
                    $($text => Ok($name::$variant),)+
                    _ => Err(anyhow::anyhow!(
                        "Invalid {}: {}",
                        stringify!($name),
                        s
                    )),
                }
            }
        }
    };
}

text_enum! {
    /// What the complex sells
    ComplexStatus {
        Apartments => "apartments",
        Houses => "houses",
        Townhouses => "townhouses",
        Commercial => "commercial",
    }
}

text_enum! {
    HouseType {
        MultiApartment => "multi_apartment",
        Private => "private",
        Duplex => "duplex",
    }
}

text_enum! {
    HouseClass {
        Economy => "economy",
        Comfort => "comfort",
        Business => "business",
        Elite => "elite",
    }
}

text_enum! {
    Territory {
        Open => "open",
        Closed => "closed",
        ClosedProtected => "closed_protected",
    }
}

text_enum! {
    /// Heating, sewerage and water supply
    UtilitySupply {
        Central => "central",
        Autonomous => "autonomous",
        Absent => "absent",
    }
}

text_enum! {
    /// Who registers the sale
    Formalization {
        Justice => "justice",
        Notary => "notary",
        Developer => "developer",
    }
}

text_enum! {
    PaymentOptions {
        Mortgage => "mortgage",
        Installments => "installments",
        FullPayment => "full_payment",
    }
}

text_enum! {
    /// Legal purpose of the premises
    Purpose {
        Residential => "residential",
        NonResidential => "non_residential",
    }
}

text_enum! {
    /// Whether the contract states the full price
    ContractSum {
        Full => "full",
        Partial => "partial",
    }
}
