use std::fmt;

use crate::attrs::DoorPart;
use crate::types::{Capability, IdSlot};

/// Misuse of a variant's capability contract, or a transform that leaves the registered set.
#[derive(Clone, Debug, PartialEq)]
pub enum VariantError {
    /// The family does not implement the capability at all.
    Unsupported {
        family: &'static str,
        capability: Capability,
    },
    /// A part-gated door accessor was called on the other part.
    WrongPart {
        family: &'static str,
        expected: DoorPart,
        actual: DoorPart,
    },
    /// The requested attribute value is not in the family's domain (e.g. a floor-facing stair).
    OutOfDomain { family: &'static str, detail: String },
    /// The attribute tuple encodes, but nothing is registered at that code.
    Unregistered {
        family: &'static str,
        slot: IdSlot,
        code: u8,
    },
}

impl fmt::Display for VariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariantError::Unsupported { family, capability } => {
                write!(f, "{family} is not {capability}")
            }
            VariantError::WrongPart {
                family,
                expected,
                actual,
            } => write!(
                f,
                "{family}: accessor is only defined on the {expected} part, \
                 variant is the {actual} part"
            ),
            VariantError::OutOfDomain { family, detail } => {
                write!(f, "{family}: {detail} is outside the family's attribute domain")
            }
            VariantError::Unregistered { family, slot, code } => {
                write!(f, "{family}: no variant registered at {slot} code {code}")
            }
        }
    }
}

impl std::error::Error for VariantError {}

/// Rejected registry mutation.
#[derive(Clone, Debug, PartialEq)]
pub enum RegistryError {
    UnknownFamily(String),
    CodeOutOfRange { family: String, code: u8 },
    SlotUnavailable { family: String, slot: IdSlot },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::UnknownFamily(name) => write!(f, "unknown block family: {name}"),
            RegistryError::CodeOutOfRange { family, code } => {
                write!(f, "{family}: code {code} does not fit in a 4-bit data value")
            }
            RegistryError::SlotUnavailable { family, slot } => {
                write!(f, "{family} has no {slot} block id")
            }
        }
    }
}

impl std::error::Error for RegistryError {}
