use rocket::{
    fairing::{Fairing, Info, Kind},
    http::uri::Origin,
    Data, Request,
};

/// Routes are declared without a trailing slash while all
/// generated links carry one. This fairing strips it from
/// incoming requests before they are routed.
pub struct TrailingSlash;

fn strip_trailing_slash(uri: &Origin<'_>) -> Option<Origin<'static>> {
    let path = uri.path().as_str();
    if path.len() < 2 || !path.ends_with('/') {
        return None;
    }
    let stripped = match path.trim_end_matches('/') {
        "" => "/",
        stripped => stripped,
    };
    let stripped = match uri.query() {
        Some(query) => format!("{stripped}?{}", query.as_str()),
        None => stripped.to_owned(),
    };
    Origin::parse_owned(stripped)
        .inspect_err(|err| warn!("Unable to strip trailing slash from {uri}: {err}"))
        .ok()
}

#[rocket::async_trait]
impl Fairing for TrailingSlash {
    fn info(&self) -> Info {
        Info {
            name: "Trailing slash",
            kind: Kind::Request,
        }
    }

    async fn on_request(&self, request: &mut Request<'_>, _: &mut Data<'_>) {
        if let Some(uri) = strip_trailing_slash(request.uri()) {
            request.set_uri(uri);
        }
    }
}
