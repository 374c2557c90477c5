use super::prelude::*;

pub const MAX_ADS_PER_SLOT: usize = 3;

/// Advertisements for both sides of a listing page.
#[derive(Debug, Clone, Default)]
pub struct AdSlots {
    pub left: Vec<Advertisement>,
    pub right: Vec<Advertisement>,
}

/// Selects the advertisements of a display slot.
///
/// The layout is right-to-left: a slot shows the advertisements
/// that are stored with the opposite position.
pub fn select_ads_for_slot<R>(repo: &R, section: Section, slot: AdPosition) -> Result<Vec<Advertisement>>
where
    R: AdvertisementRepo,
{
    Ok(repo.load_active_advertisements(section, slot.opposite(), MAX_ADS_PER_SLOT)?)
}

pub fn select_advertisements<R>(repo: &R, section: Section) -> Result<AdSlots>
where
    R: AdvertisementRepo,
{
    Ok(AdSlots {
        left: select_ads_for_slot(repo, section, AdPosition::Left)?,
        right: select_ads_for_slot(repo, section, AdPosition::Right)?,
    })
}
