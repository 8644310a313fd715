use crate::domain::model::{Catalog, Decomposition, DisplayState, DrawInstruction, SiteColor, SiteId};

pub fn site_color(site: SiteId, hour: &Decomposition, minute: &Decomposition) -> SiteColor {
    match (hour.contains(site), minute.contains(site)) {
        (true, true) => SiteColor::HourAndMinute,
        (true, false) => SiteColor::Hour,
        (false, true) => SiteColor::Minute,
        (false, false) => SiteColor::Empty,
    }
}

/// One instruction per site, in catalog declaration order.
pub fn map_to_instructions(
    catalog: &Catalog,
    hour: &Decomposition,
    minute: &Decomposition,
    remainder: &Decomposition,
    flags: &DisplayState,
) -> Vec<DrawInstruction> {
    catalog
        .sites()
        .iter()
        .map(|site| DrawInstruction {
            site: site.id,
            color: site_color(site.id, hour, minute),
            center_marker: flags.show_minute_marker && remainder.contains(site.id),
            label: flags.show_numbers.then_some(site.size),
        })
        .collect()
}
