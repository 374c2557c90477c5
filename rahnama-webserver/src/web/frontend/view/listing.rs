use maud::{html, Markup};
use url::form_urlencoded;

use super::*;

pub struct ListingPresenter<'a> {
    pub section: Section,
    pub categories: &'a [Category],
    pub params: &'a usecases::ListingParams,
    pub options: &'a usecases::FilterOptions,
    pub listings: &'a usecases::ListingPage,
    pub ads: &'a usecases::AdSlots,
}

pub fn listing_page(p: ListingPresenter) -> Markup {
    let ListingPresenter {
        section,
        categories,
        params,
        options,
        listings,
        ads,
    } = p;
    page(
        section.label(),
        categories,
        None,
        html! {
            div class="listing-layout" {
                aside class="ads ads-left" {
                    @for ad in &ads.left {
                        (advertisement(ad))
                    }
                }
                main {
                    h1 { (section.label()) }
                    (filter_form(section, params, options))
                    @if listings.cards.is_empty() {
                        p class="empty" { "موردی یافت نشد." }
                    } @else {
                        div class="cards" {
                            @for card in &listings.cards {
                                (listing_card(section, card))
                            }
                        }
                    }
                    (pagination(section, params, &listings.page))
                }
                aside class="ads ads-right" {
                    @for ad in &ads.right {
                        (advertisement(ad))
                    }
                }
            }
        },
    )
}

pub(super) fn facet_title(facet: Facet) -> &'static str {
    match facet {
        Facet::SportType => "نوع ورزش",
        Facet::MealType => "نوع وعده",
        Facet::Facility => "امکانات",
    }
}

fn filter_form(
    section: Section,
    params: &usecases::ListingParams,
    options: &usecases::FilterOptions,
) -> Markup {
    let selected_city = params.city.as_deref().unwrap_or_default();
    let selected_rating = params.rating.as_deref().unwrap_or_default();
    html! {
        form class="filters" action=(section_url(section)) method="GET" {
            input
                type="text"
                name="search"
                value=(params.search.as_deref().unwrap_or_default())
                placeholder="جستجو...";
            label {
                "استان"
                select name="city" {
                    option value="" { "همه" }
                    @for (code, label) in &options.cities {
                        option value=(code) selected[*code == selected_city] { (label) }
                    }
                }
            }
            label {
                "حداقل امتیاز"
                select name="rating" {
                    option value="" { "همه" }
                    @for value in RatingValue::all() {
                        @let value = u8::from(value).to_string();
                        option value=(value) selected[value == selected_rating] { (value) " ★" }
                    }
                }
            }
            @for (facet, facet_options) in &options.facets {
                @let checked = params.tag_codes(*facet);
                fieldset {
                    legend { (facet_title(*facet)) }
                    @for (code, label) in facet_options {
                        label class="checkbox" {
                            input
                                type="checkbox"
                                name=(facet.code())
                                value=(code)
                                checked[checked.iter().any(|c| c.as_str() == *code)];
                            (label)
                        }
                    }
                }
            }
            @if !options.price_ranges.is_empty() {
                @let selected_price_range = params.price_range.as_deref().unwrap_or_default();
                label {
                    "محدوده قیمت"
                    select name="price_range" {
                        option value="" { "همه" }
                        @for (code, label) in &options.price_ranges {
                            option value=(code) selected[*code == selected_price_range] { (label) }
                        }
                    }
                }
            }
            input class="btn" type="submit" value="اعمال فیلتر";
        }
    }
}

fn listing_card(section: Section, card: &usecases::ListingCard) -> Markup {
    let usecases::ListingCard {
        listing,
        rating,
        image,
    } = card;
    let url = listing_url(section, listing.id);
    html! {
        div class="listing-card" {
            a href=(url) {
                @if let Some(image) = image {
                    img src=(media_url(&image.path)) alt=(listing.name);
                } @else {
                    div class="no-image" {}
                }
            }
            h3 { a href=(url) { (listing.name) } }
            @if let Some(city) = listing.city {
                p class="city" { (city.label()) }
            }
            p class="tags" {
                @for code in listing.kind.tag_codes(section.category_facet()) {
                    @if let Some(label) = section.category_facet().label_of(code) {
                        span class="tag" { (label) }
                    }
                }
            }
            @if let Some(price_range) = listing.kind.price_range() {
                p class="price-range" { (price_range.label()) }
            }
            (rating_summary(rating))
        }
    }
}

/// Query string of the current filters for the given page.
fn page_query(params: &usecases::ListingParams, page: usize) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    let optional = [
        ("search", &params.search),
        ("city", &params.city),
        ("rating", &params.rating),
        ("price_range", &params.price_range),
    ];
    for (name, value) in optional {
        if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
            query.append_pair(name, value);
        }
    }
    for facet in [Facet::SportType, Facet::MealType, Facet::Facility] {
        for code in params.tag_codes(facet) {
            query.append_pair(facet.code(), code);
        }
    }
    query.append_pair("page", &page.to_string());
    query.finish()
}

fn pagination(
    section: Section,
    params: &usecases::ListingParams,
    page: &rahnama_core::util::pagination::Page,
) -> Markup {
    let href = |number: usize| format!("{}?{}", section_url(section), page_query(params, number));
    html! {
        @if page.num_pages > 1 {
            nav class="pagination" {
                @if let Some(previous) = page.previous_number() {
                    a href=(href(1)) { "« اول" }
                    a href=(href(previous)) { "قبلی" }
                }
                span class="current" {
                    "صفحه " (page.number) " از " (page.num_pages)
                }
                @if let Some(next) = page.next_number() {
                    a href=(href(next)) { "بعدی" }
                    a href=(href(page.num_pages)) { "آخر »" }
                }
            }
        }
    }
}

fn advertisement(ad: &Advertisement) -> Markup {
    let media = html! {
        @match &ad.media {
            AdMedia::Image(path) | AdMedia::Gif(path) => {
                img src=(media_url(path)) alt=(ad.title);
            }
            AdMedia::VideoFile(path) => {
                video src=(media_url(path)) autoplay muted loop playsinline {}
            }
            AdMedia::VideoUrl(url) => {
                a class="video-link" href=(url.as_str()) target="_blank" rel="noopener" { (ad.title) }
            }
        }
    };
    html! {
        div class="ad" {
            @match &ad.link {
                Some(link) if !matches!(ad.media, AdMedia::VideoUrl(_)) => {
                    a href=(link.as_str()) target="_blank" rel="noopener sponsored" { (media) }
                }
                _ => { (media) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_query_keeps_filters() {
        let params = usecases::ListingParams {
            search: Some("آفتاب & co".into()),
            city: Some("".into()),
            sport_type: vec!["yoga".into(), "crossfit".into()],
            page: Some("3".into()),
            ..Default::default()
        };
        assert_eq!(
            "search=%D8%A2%D9%81%D8%AA%D8%A7%D8%A8+%26+co&sport_type=yoga&sport_type=crossfit&page=2",
            page_query(&params, 2)
        );
    }

    #[test]
    fn video_url_is_rendered_as_link() {
        let ad = Advertisement {
            id: Id::new(1),
            title: "تبلیغ".into(),
            section: Section::Gym,
            position: AdPosition::Left,
            order: 0,
            active: true,
            media: AdMedia::VideoUrl("https://www.aparat.com/v/abc".parse().unwrap()),
            link: None,
            created_at: Timestamp::now(),
        };
        let html = advertisement(&ad).into_string();
        assert!(html.contains(r#"href="https://www.aparat.com/v/abc""#));
        assert!(!html.contains("<video"));
    }
}
