pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{advertisement_builder::*, listing_builder::*};

pub mod listing_builder {

    use super::*;
    use crate::{id::*, listing::*, lookup::*, section::*, time::*};

    #[derive(Debug)]
    pub struct ListingBuild {
        listing: Listing,
    }

    impl ListingBuild {
        pub fn id(mut self, id: i64) -> Self {
            self.listing.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.listing.name = name.into();
            self
        }
        pub fn city(mut self, city: City) -> Self {
            self.listing.city = Some(city);
            self
        }
        pub fn address(mut self, address: &str) -> Self {
            self.listing.address = address.into();
            self
        }
        pub fn description(mut self, desc: &str) -> Self {
            self.listing.description = Some(desc.into());
            self
        }
        pub fn phone_numbers(mut self, phone_numbers: &[&str]) -> Self {
            self.listing.phone_numbers = phone_numbers.iter().copied().map(Into::into).collect();
            self
        }
        /// Resets all section specific properties.
        pub fn section(mut self, section: Section) -> Self {
            self.listing.kind = ListingKind::empty(section);
            self
        }
        pub fn tags(mut self, facet: Facet, codes: &[&str]) -> Self {
            for code in codes {
                let added = self.listing.kind.add_tag(facet, code);
                assert!(added, "unsupported tag {facet:?} = {code}");
            }
            self
        }
        pub fn price_range(mut self, price_range: PriceRange) -> Self {
            if let ListingKind::Gym {
                price_range: ref mut pr,
                ..
            } = self.listing.kind
            {
                *pr = Some(price_range);
            }
            self
        }
        pub fn resume(mut self, path: &str) -> Self {
            if let ListingKind::Trainer { ref mut resume, .. } = self.listing.kind {
                *resume = Some(path.into());
            }
            self
        }
        pub fn created_at(mut self, millis: i64) -> Self {
            let ts = Timestamp::from_millis(millis).expect("valid timestamp");
            self.listing.created_at = ts;
            self.listing.updated_at = ts;
            self
        }
        pub fn finish(self) -> Listing {
            self.listing
        }
        pub fn finish_new(self) -> NewListing {
            self.listing.into()
        }
    }

    impl Builder for Listing {
        type Build = ListingBuild;
        fn build() -> ListingBuild {
            let now = Timestamp::now();
            ListingBuild {
                listing: Listing {
                    id: Id::new(0),
                    name: "".into(),
                    city: None,
                    address: "".into(),
                    description: None,
                    phone_numbers: vec![],
                    kind: ListingKind::empty(Section::Gym),
                    created_at: now,
                    updated_at: now,
                },
            }
        }
    }
}

pub mod advertisement_builder {

    use super::*;
    use crate::{advertisement::*, section::*, time::*};

    #[derive(Debug)]
    pub struct NewAdvertisementBuild {
        ad: NewAdvertisement,
    }

    impl NewAdvertisementBuild {
        pub fn title(mut self, title: &str) -> Self {
            self.ad.title = title.into();
            self
        }
        pub fn section(mut self, section: Section) -> Self {
            self.ad.section = section;
            self
        }
        pub fn position(mut self, position: AdPosition) -> Self {
            self.ad.position = position;
            self
        }
        pub fn order(mut self, order: i32) -> Self {
            self.ad.order = order;
            self
        }
        pub fn inactive(mut self) -> Self {
            self.ad.active = false;
            self
        }
        pub fn media(mut self, media: AdMedia) -> Self {
            self.ad.media = media;
            self
        }
        pub fn link(mut self, link: &str) -> Self {
            self.ad.link = Some(link.parse().expect("valid URL"));
            self
        }
        pub fn finish(self) -> NewAdvertisement {
            self.ad
        }
    }

    impl Builder for NewAdvertisement {
        type Build = NewAdvertisementBuild;
        fn build() -> NewAdvertisementBuild {
            NewAdvertisementBuild {
                ad: NewAdvertisement {
                    title: "".into(),
                    section: Section::Gym,
                    position: AdPosition::Left,
                    order: 0,
                    active: true,
                    media: AdMedia::Image("advertisements/banner.png".into()),
                    link: None,
                    created_at: Timestamp::now(),
                },
            }
        }
    }
}
