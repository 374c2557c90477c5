use maud::{html, Markup};

use rahnama_core::{
    entities::*,
    usecases,
    util::validate::{CommentInvalidation, FieldInvalidation},
};

mod detail;
mod listing;
mod page;

pub use detail::*;
pub use listing::*;
use page::*;

const MEDIA_URL: &str = "/media/";

pub fn index(categories: &[Category]) -> Markup {
    page(
        "راهنما",
        categories,
        None,
        html! {
            div class="index" {
                h1 { "راهنمای باشگاه‌ها، رستوران‌ها و مربیان" }
                ul class="section-list" {
                    @for category in categories {
                        @if let Some(section) = category.code.section() {
                            li {
                                a href=(section_url(section)) {
                                    @if let Some(icon) = &category.icon {
                                        span class="icon" { (icon) }
                                    }
                                    (section.label())
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn not_found() -> Markup {
    page(
        "یافت نشد",
        &[],
        None,
        html! {
            div class="error-page" {
                h1 { "۴۰۴" }
                p { "صفحه‌ای که به دنبال آن هستید پیدا نشد." }
                a href="/" { "بازگشت به صفحه اصلی" }
            }
        },
    )
}

pub fn internal_error() -> Markup {
    page(
        "خطا",
        &[],
        None,
        html! {
            div class="error-page" {
                h1 { "۵۰۰" }
                p { "خطایی رخ داد. لطفا بعدا دوباره تلاش کنید." }
            }
        },
    )
}

fn section_url(section: Section) -> String {
    format!("/{}/", section.code())
}

fn listing_url(section: Section, id: Id) -> String {
    format!("/{}/{id}/", section.code())
}

fn media_url(path: &str) -> String {
    format!("{MEDIA_URL}{}", path.trim_start_matches('/'))
}

/// Five glyphs, filled up to the rounded average.
///
/// Unrated listings have no stars at all.
pub fn star_rating(value: AvgRatingValue) -> String {
    let filled = usize::from(value.stars());
    if filled == 0 {
        return String::new();
    }
    let max = usize::from(u8::from(RatingValue::max()));
    "★".repeat(filled) + &"☆".repeat(max - filled)
}

fn rating_summary(rating: &AvgRating) -> Markup {
    html! {
        span class="rating" {
            @if rating.is_rated() {
                span class="stars" { (star_rating(rating.value)) }
                " "
                span class="avg" { (format!("{:.1}", rating.value.rounded())) }
            } @else {
                span class="unrated" { "بدون امتیاز" }
            }
            " "
            span class="count" { "(" (rating.count) " نظر)" }
        }
    }
}

fn invalidation_message(invalidation: FieldInvalidation) -> String {
    match invalidation {
        FieldInvalidation::Required => "این فیلد الزامی است.".to_owned(),
        FieldInvalidation::TooLong { max_len } => {
            format!("حداکثر {max_len} کاراکتر مجاز است.")
        }
        FieldInvalidation::Email => "یک آدرس ایمیل معتبر وارد کنید.".to_owned(),
        FieldInvalidation::RatingValue => "امتیاز باید عددی بین ۱ تا ۵ باشد.".to_owned(),
    }
}

fn field_error(invalidation: Option<FieldInvalidation>) -> Markup {
    html! {
        @if let Some(invalidation) = invalidation {
            p class="field-error" { (invalidation_message(invalidation)) }
        }
    }
}
