//! Activity-type to screen routing.
//!
//! Static lookup from an activity-type tag to the detail/edit/create screen
//! the app should navigate to. Walk, feeding and medication have dedicated
//! screens; the simple one-tap types share a generic trio. The lookup is
//! total: unknown or empty type strings take the default route for the
//! requested kind rather than erroring.

use serde::{Deserialize, Serialize};

use crate::ActivityType;

/// Which screen of an activity's trio to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScreenKind {
    Detail,
    Edit,
    Create,
}

/// Resolve the screen id for an activity type and screen kind.
///
/// The type tag is matched case-insensitively. Unknown tags fall back to the
/// generic screen for `kind`; absence of a match is the documented default
/// route, not a failure.
///
/// # Example
/// ```
/// use pawtrack_core::{resolve_screen, ScreenKind};
///
/// assert_eq!(resolve_screen("walk", ScreenKind::Detail), "WalkDetail");
/// assert_eq!(resolve_screen("PEE", ScreenKind::Detail), "SimpleActivityDetail");
/// assert_eq!(resolve_screen("unknown", ScreenKind::Edit), "ActivityEdit");
/// ```
pub fn resolve_screen(activity_type: &str, kind: ScreenKind) -> &'static str {
    match ActivityType::parse(activity_type) {
        Some(ActivityType::Walk) => match kind {
            ScreenKind::Detail => "WalkDetail",
            ScreenKind::Edit => "WalkEdit",
            ScreenKind::Create => "WalkCreate",
        },
        Some(ActivityType::Feeding) => match kind {
            ScreenKind::Detail => "FeedingDetail",
            ScreenKind::Edit => "FeedingEdit",
            ScreenKind::Create => "FeedingCreate",
        },
        Some(ActivityType::Medication) => match kind {
            ScreenKind::Detail => "MedicationDetail",
            ScreenKind::Edit => "MedicationEdit",
            ScreenKind::Create => "MedicationCreate",
        },
        // Pee, poop, water, grooming, vomit, play, vet, training and custom
        // all share the simple one-tap screen trio
        Some(_) => match kind {
            ScreenKind::Detail => "SimpleActivityDetail",
            ScreenKind::Edit => "SimpleActivityEdit",
            ScreenKind::Create => "SimpleActivityCreate",
        },
        None => match kind {
            ScreenKind::Detail => "ActivityDetail",
            ScreenKind::Edit => "ActivityEdit",
            ScreenKind::Create => "ActivityCreate",
        },
    }
}
