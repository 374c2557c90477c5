use super::prelude::*;
use crate::util::sort::sort_options;

pub type Options = Vec<(&'static str, &'static str)>;

/// Choices for the filter sidebar of a listing page as (code, label) pairs.
#[derive(Debug, Clone)]
pub struct FilterOptions {
    pub cities: Options,
    pub facets: Vec<(Facet, Options)>,
    /// Empty for sections without price ranges
    pub price_ranges: Options,
}

fn sorted(mut options: Options) -> Options {
    sort_options(&mut options);
    options
}

pub fn filter_options(section: Section) -> FilterOptions {
    let cities = sorted(code_label_pairs::<City>());
    let facets = section
        .facets()
        .iter()
        .map(|facet| (*facet, sorted(facet.options())))
        .collect();
    let price_ranges = if section.has_price_range() {
        sorted(code_label_pairs::<PriceRange>())
    } else {
        vec![]
    };
    FilterOptions {
        cities,
        facets,
        price_ranges,
    }
}
