// Root event enumeration for the clock log.
//
// Versioning and evolution
// - Prefer additive changes. For a breaking change add a new version and a new variant.
//
// Structure
// - The sibling folder 'events/' contains the versioned payload modules.

pub mod v1 {
    pub mod clock_entry_retimed;
    pub mod clocked_in;
    pub mod clocked_out;
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum TimeclockEvent {
    ClockedInV1(v1::clocked_in::ClockedInV1),
    ClockedOutV1(v1::clocked_out::ClockedOutV1),
    ClockEntryRetimedV1(v1::clock_entry_retimed::ClockEntryRetimedV1),
}
