use maud::{html, Markup, DOCTYPE};

use super::*;

const MAIN_CSS_URL: &str = "/main.css";

pub(super) type FlashMsg<'a> = (&'a str, &'a str);

pub(super) fn page(
    title: &str,
    categories: &[Category],
    flash: Option<FlashMsg>,
    content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="fa" dir="rtl" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href=(MAIN_CSS_URL);
            }
            body {
                (header(categories))
                @if let Some(msg) = flash {
                    (flash_msg(msg))
                }
                div class="content" {
                    (content)
                }
            }
        }
    }
}

fn header(categories: &[Category]) -> Markup {
    html! {
        header {
            nav class="categories" {
                a class="home" href="/" { "راهنما" }
                @for category in categories {
                    @let label = html! {
                        @if let Some(icon) = &category.icon {
                            span class="icon" { (icon) }
                        }
                        (category.code.label())
                    };
                    @if let Some(section) = category.code.section() {
                        a href=(section_url(section)) { (label) }
                    } @else {
                        span class="soon" { (label) }
                    }
                }
            }
        }
    }
}

fn flash_msg((kind, msg): FlashMsg) -> Markup {
    html! {
        div class=(format!("flash {kind}")) {
            (msg)
        }
    }
}
