use maud::{html, Markup};

use super::*;

pub struct DetailPresenter<'a> {
    pub section: Section,
    pub categories: &'a [Category],
    pub flash: Option<FlashMsg<'a>>,
    pub detail: &'a usecases::ListingDetail,
    /// Values of a rejected submission
    pub form: &'a usecases::NewListingComment,
    pub invalidation: &'a CommentInvalidation,
}

pub fn detail_page(p: DetailPresenter) -> Markup {
    let DetailPresenter {
        section,
        categories,
        flash,
        detail,
        form,
        invalidation,
    } = p;
    let usecases::ListingDetail {
        listing,
        images,
        rating,
        comments,
    } = detail;
    page(
        &listing.name,
        categories,
        flash,
        html! {
            div class="detail" {
                p class="breadcrumb" {
                    a href=(section_url(section)) { (section.label()) }
                }
                h1 { (listing.name) }
                (rating_summary(rating))
                (listing_properties(listing))
                @if let Some(description) = &listing.description {
                    div class="description" {
                        @for line in description.lines() {
                            (line) br;
                        }
                    }
                }
                @if !images.is_empty() {
                    div class="gallery" {
                        @for image in images {
                            figure {
                                img src=(media_url(&image.path)) alt=(image.description.as_deref().unwrap_or(&listing.name));
                                @if let Some(caption) = &image.description {
                                    figcaption { (caption) }
                                }
                            }
                        }
                    }
                }
                section class="comments" {
                    h2 { "نظرات" }
                    @if comments.is_empty() {
                        p { "هنوز نظری ثبت نشده است." }
                    }
                    @for comment in comments {
                        (comment_item(comment))
                    }
                }
                (comment_form(&listing_url(section, listing.id), form, invalidation))
            }
        },
    )
}

fn listing_properties(listing: &Listing) -> Markup {
    let section = listing.section();
    html! {
        dl class="properties" {
            @if let Some(city) = listing.city {
                dt { "استان" }
                dd { (city.label()) }
            }
            dt { "آدرس" }
            dd { (listing.address) }
            @if !listing.phone_numbers.is_empty() {
                dt { "تلفن" }
                dd {
                    @for phone in &listing.phone_numbers {
                        a class="phone" href=(format!("tel:{}", phone.as_str())) dir="ltr" { (phone.as_str()) }
                        " "
                    }
                }
            }
            @for facet in section.facets() {
                @let labels: Vec<_> = listing
                    .kind
                    .tag_codes(*facet)
                    .into_iter()
                    .filter_map(|code| facet.label_of(code))
                    .collect();
                @if !labels.is_empty() {
                    dt { (super::listing::facet_title(*facet)) }
                    dd {
                        @for label in labels {
                            span class="tag" { (label) }
                        }
                    }
                }
            }
            @if let Some(price_range) = listing.kind.price_range() {
                dt { "محدوده قیمت" }
                dd { (price_range.label()) }
            }
            @if let Some(resume) = listing.kind.resume() {
                dt { "رزومه" }
                dd { a href=(media_url(resume)) target="_blank" { "دانلود رزومه" } }
            }
        }
    }
}

fn comment_item(comment: &Comment) -> Markup {
    html! {
        div class="comment" {
            p class="meta" {
                strong { (comment.name) }
                " - "
                span class="date" { (comment.created_at.format_date()) }
            }
            p { (comment.text) }
        }
    }
}

fn comment_form(
    action: &str,
    form: &usecases::NewListingComment,
    invalidation: &CommentInvalidation,
) -> Markup {
    html! {
        form class="comment-form" action=(action) method="POST" {
            h2 { "ثبت نظر و امتیاز" }
            label {
                "نام"
                input type="text" name="name" value=(form.name) maxlength=(Comment::MAX_NAME_LEN);
            }
            (field_error(invalidation.name))
            label {
                "ایمیل (اختیاری)"
                input type="email" name="email" value=(form.email) dir="ltr";
            }
            (field_error(invalidation.email))
            label {
                "امتیاز"
                select name="rating" {
                    option value="" { "انتخاب کنید" }
                    @for value in RatingValue::all() {
                        @let value = u8::from(value).to_string();
                        option value=(value) selected[form.rating.trim() == value] { (value) " ★" }
                    }
                }
            }
            (field_error(invalidation.rating))
            label {
                "نظر"
                textarea name="comment" rows="5" { (form.comment) }
            }
            (field_error(invalidation.comment))
            input class="btn" type="submit" value="ارسال";
        }
    }
}
