//! Platform override resolution.

use screenkit_core::Platform;

use crate::{Merge, Overridable, RegionConfig};

/// Shallow, field-local merge of an optional override onto `base`.
pub fn merge_override<C: Merge + Clone>(base: &C, over: Option<&C>) -> C {
    match over {
        Some(o) => base.merge(o),
        None => base.clone(),
    }
}

/// Resolves a region for `platform`. An unconfigured region resolves to the
/// empty record.
pub fn resolve<C: RegionConfig>(region: Option<&Overridable<C>>, platform: Platform) -> C {
    region.map(|r| r.resolve(platform)).unwrap_or_default()
}
