use maud::Markup;
use rocket::{
    self, catch, catchers,
    form::{Form, Lenient},
    get,
    post,
    request::FlashMessage,
    response::{content::RawCss, Flash, Redirect},
    routes, uri, Catcher, FromForm, Responder, Route,
};

use crate::web::{
    error::{Error, ParameterError, RepoError},
    sqlite,
};
use rahnama_application::{
    error::{AppError, BError},
    prelude::*,
};
use rahnama_core::{entities::*, usecases, util::validate::CommentInvalidation};

mod view;

#[cfg(test)]
mod tests;

const MAIN_CSS: &str = include_str!("main.css");

const COMMENT_CREATED_MESSAGE: &str = "نظر و امتیاز شما با موفقیت ثبت شد!";

type Result<T> = std::result::Result<T, Error>;

/// Query parameters of all listing pages.
#[derive(Debug, Default, FromForm)]
pub struct ListingQueryParams {
    search: Option<String>,
    city: Option<String>,
    rating: Option<String>,
    sport_type: Vec<String>,
    meal_type: Vec<String>,
    price_range: Option<String>,
    facility: Vec<String>,
    page: Option<String>,
}

impl From<ListingQueryParams> for usecases::ListingParams {
    fn from(from: ListingQueryParams) -> Self {
        let ListingQueryParams {
            search,
            city,
            rating,
            sport_type,
            meal_type,
            price_range,
            facility,
            page,
        } = from;
        Self {
            search,
            city,
            rating,
            sport_type,
            meal_type,
            price_range,
            facility,
            page,
        }
    }
}

#[derive(Debug, Default, FromForm)]
pub struct CommentForm {
    name: Option<String>,
    email: Option<String>,
    comment: Option<String>,
    rating: Option<String>,
}

impl From<CommentForm> for usecases::NewListingComment {
    fn from(from: CommentForm) -> Self {
        let CommentForm {
            name,
            email,
            comment,
            rating,
        } = from;
        Self {
            name: name.unwrap_or_default(),
            email: email.unwrap_or_default(),
            comment: comment.unwrap_or_default(),
            rating: rating.unwrap_or_default(),
        }
    }
}

#[derive(Responder)]
pub enum CommentResponse {
    Created(Flash<Redirect>),
    Rejected(Markup),
}

#[get("/")]
pub fn get_index(db: sqlite::Connections) -> Result<Markup> {
    let categories = usecases::load_active_categories(&db.shared()?)?;
    Ok(view::index(&categories))
}

#[get("/main.css")]
pub fn get_main_css() -> RawCss<&'static str> {
    RawCss(MAIN_CSS)
}

#[get("/gym?<query..>")]
pub fn get_gyms(db: sqlite::Connections, query: ListingQueryParams) -> Result<Markup> {
    listing_page(&db, Section::Gym, query)
}

#[get("/gym/<id>")]
pub fn get_gym(db: sqlite::Connections, id: &str, flash: Option<FlashMessage>) -> Result<Markup> {
    detail_page(&db, Section::Gym, id, flash)
}

#[post("/gym/<id>", data = "<form>")]
pub fn post_gym_comment(
    db: sqlite::Connections,
    id: &str,
    form: Form<Lenient<CommentForm>>,
) -> Result<CommentResponse> {
    post_comment(&db, Section::Gym, id, form.into_inner().into_inner())
}

#[get("/restaurant?<query..>")]
pub fn get_restaurants(db: sqlite::Connections, query: ListingQueryParams) -> Result<Markup> {
    listing_page(&db, Section::Restaurant, query)
}

#[get("/restaurant/<id>")]
pub fn get_restaurant(
    db: sqlite::Connections,
    id: &str,
    flash: Option<FlashMessage>,
) -> Result<Markup> {
    detail_page(&db, Section::Restaurant, id, flash)
}

#[post("/restaurant/<id>", data = "<form>")]
pub fn post_restaurant_comment(
    db: sqlite::Connections,
    id: &str,
    form: Form<Lenient<CommentForm>>,
) -> Result<CommentResponse> {
    post_comment(&db, Section::Restaurant, id, form.into_inner().into_inner())
}

#[get("/trainer?<query..>")]
pub fn get_trainers(db: sqlite::Connections, query: ListingQueryParams) -> Result<Markup> {
    listing_page(&db, Section::Trainer, query)
}

#[get("/trainer/<id>")]
pub fn get_trainer(
    db: sqlite::Connections,
    id: &str,
    flash: Option<FlashMessage>,
) -> Result<Markup> {
    detail_page(&db, Section::Trainer, id, flash)
}

#[post("/trainer/<id>", data = "<form>")]
pub fn post_trainer_comment(
    db: sqlite::Connections,
    id: &str,
    form: Form<Lenient<CommentForm>>,
) -> Result<CommentResponse> {
    post_comment(&db, Section::Trainer, id, form.into_inner().into_inner())
}

// Links to listings carry a trailing slash
fn detail_uri(section: Section, id: Id) -> String {
    let id = id.to_string();
    let uri = match section {
        Section::Gym => uri!(get_gym(id.as_str())),
        Section::Restaurant => uri!(get_restaurant(id.as_str())),
        Section::Trainer => uri!(get_trainer(id.as_str())),
    };
    format!("{uri}/")
}

// Identifiers that are not numeric cannot exist
fn parse_listing_id(id: &str) -> Result<Id> {
    id.parse().map_err(|_| RepoError::NotFound.into())
}

fn listing_page(db: &sqlite::Connections, section: Section, query: ListingQueryParams) -> Result<Markup> {
    let params = usecases::ListingParams::from(query);
    let query = usecases::ListingQuery::from_params(section, params.clone());
    let db = db.shared()?;
    let listings = usecases::query_listings(&db, &query)?;
    let ads = usecases::select_advertisements(&db, section)?;
    let categories = usecases::load_active_categories(&db)?;
    Ok(view::listing_page(view::ListingPresenter {
        section,
        categories: &categories,
        params: &params,
        options: &usecases::filter_options(section),
        listings: &listings,
        ads: &ads,
    }))
}

fn detail_page(
    db: &sqlite::Connections,
    section: Section,
    id: &str,
    flash: Option<FlashMessage>,
) -> Result<Markup> {
    let id = parse_listing_id(id)?;
    let db = db.shared()?;
    let detail = usecases::load_listing_detail(&db, section, id)?;
    let categories = usecases::load_active_categories(&db)?;
    let flash = flash.as_ref().map(|f| (f.kind(), f.message()));
    Ok(view::detail_page(view::DetailPresenter {
        section,
        categories: &categories,
        flash,
        detail: &detail,
        form: &Default::default(),
        invalidation: &Default::default(),
    }))
}

fn post_comment(
    connections: &sqlite::Connections,
    section: Section,
    id: &str,
    form: CommentForm,
) -> Result<CommentResponse> {
    let id = parse_listing_id(id)?;
    let new_comment = usecases::NewListingComment::from(form);
    match create_comment(connections, section, id, new_comment.clone()) {
        Ok(_) => Ok(CommentResponse::Created(Flash::success(
            Redirect::to(detail_uri(section, id)),
            COMMENT_CREATED_MESSAGE,
        ))),
        Err(AppError::Business(BError::Parameter(ParameterError::InvalidComment(invalidation)))) => {
            let markup = rejected_comment_page(connections, section, id, &new_comment, &invalidation)?;
            Ok(CommentResponse::Rejected(markup))
        }
        Err(err) => Err(err.into()),
    }
}

fn rejected_comment_page(
    db: &sqlite::Connections,
    section: Section,
    id: Id,
    form: &usecases::NewListingComment,
    invalidation: &CommentInvalidation,
) -> Result<Markup> {
    let db = db.shared()?;
    let detail = usecases::load_listing_detail(&db, section, id)?;
    let categories = usecases::load_active_categories(&db)?;
    Ok(view::detail_page(view::DetailPresenter {
        section,
        categories: &categories,
        flash: None,
        detail: &detail,
        form,
        invalidation,
    }))
}

#[catch(404)]
pub fn not_found() -> Markup {
    view::not_found()
}

#[catch(500)]
pub fn internal_error() -> Markup {
    view::internal_error()
}

pub fn routes() -> Vec<Route> {
    routes![
        get_index,
        get_main_css,
        get_gyms,
        get_gym,
        post_gym_comment,
        get_restaurants,
        get_restaurant,
        post_restaurant_comment,
        get_trainers,
        get_trainer,
        post_trainer_comment,
    ]
}

pub fn catchers() -> Vec<Catcher> {
    catchers![not_found, internal_error]
}
