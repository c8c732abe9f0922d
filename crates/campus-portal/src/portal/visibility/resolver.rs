use chrono::{DateTime, Utc};

use super::domain::{AudienceRule, ContentRecord, ViewerProfile};

/// Decide whether one catalog record may be shown to one viewer at `as_of`.
///
/// Checks short-circuit in order: active flag, activation window, audience.
/// Malformed records (a department rule with no department scope) and
/// unrecognized audience tags reject; this is a total function and never
/// fails open.
pub fn is_visible(content: &ContentRecord, viewer: &ViewerProfile, as_of: DateTime<Utc>) -> bool {
    if !content.is_active {
        return false;
    }

    if let Some(from) = content.active_from {
        if as_of < from {
            return false;
        }
    }

    if let Some(until) = content.active_until {
        if as_of > until {
            return false;
        }
    }

    match content.audience {
        AudienceRule::AllStudents => true,
        AudienceRule::HostellersOnly => viewer.is_hosteller,
        AudienceRule::Department => match &content.department_id {
            Some(department) => *department == viewer.department_id,
            None => false,
        },
        AudienceRule::Unknown => false,
    }
}

/// Stable filter over a catalog slice: admitted records keep their relative
/// order. Any priority or recency ordering belongs to the upstream query.
pub fn filter_visible(
    contents: &[ContentRecord],
    viewer: &ViewerProfile,
    as_of: DateTime<Utc>,
) -> Vec<ContentRecord> {
    contents
        .iter()
        .filter(|content| is_visible(content, viewer, as_of))
        .cloned()
        .collect()
}
