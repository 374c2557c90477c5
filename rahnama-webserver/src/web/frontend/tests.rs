use crate::web::tests::prelude::*;

fn create_listing(db: &sqlite::Connections, listing: NewListing) -> Id {
    db.exclusive().unwrap().create_listing(listing).unwrap()
}

fn create_gyms(db: &sqlite::Connections, count: usize) -> Vec<Id> {
    (0..count)
        .map(|i| {
            create_listing(
                db,
                Listing::build()
                    .name(&format!("gym-{i}"))
                    .created_at(1_000 + i as i64)
                    .finish_new(),
            )
        })
        .collect()
}

fn add_rating(db: &sqlite::Connections, listing_id: Id, value: u8) -> Id {
    db.exclusive()
        .unwrap()
        .create_rating(NewRating {
            listing_id,
            value: RatingValue::new(value),
            created_at: Timestamp::now(),
        })
        .unwrap()
}

fn add_comment(db: &sqlite::Connections, listing_id: Id, text: &str, approved: bool) {
    db.exclusive()
        .unwrap()
        .create_comment(NewComment {
            listing_id,
            rating_id: None,
            name: "Reza".into(),
            email: None,
            text: text.into(),
            approved,
            created_at: Timestamp::now(),
        })
        .unwrap();
}

fn count_cards(body: &str) -> usize {
    body.matches(r#"class="listing-card""#).count()
}

fn get_body(client: &Client, uri: &str) -> String {
    let response = client.get(uri.to_owned()).dispatch();
    assert_eq!(Status::Ok, response.status());
    response.into_string().unwrap()
}

#[test]
fn index_links_to_sections() {
    let (client, db) = setup();
    usecases::create_default_categories(&db.exclusive().unwrap()).unwrap();
    let body = get_body(&client, "/");
    assert!(body.contains(r#"href="/gym/""#));
    assert!(body.contains(r#"href="/restaurant/""#));
    assert!(body.contains(r#"href="/trainer/""#));
    assert!(body.contains("پزشکان"));
}

#[test]
fn get_main_css() {
    let (client, _db) = setup();
    let response = client.get("/main.css").dispatch();
    assert_eq!(Status::Ok, response.status());
    assert_eq!(Some(ContentType::CSS), response.content_type());
}

#[test]
fn list_only_listings_of_the_section() {
    let (client, db) = setup();
    create_listing(&db, Listing::build().name("Iron Gym").finish_new());
    create_listing(
        &db,
        Listing::build()
            .name("Kebab House")
            .section(Section::Restaurant)
            .finish_new(),
    );
    let body = get_body(&client, "/gym/");
    assert!(body.contains("Iron Gym"));
    assert!(!body.contains("Kebab House"));
    let body = get_body(&client, "/restaurant/");
    assert!(!body.contains("Iron Gym"));
    assert!(body.contains("Kebab House"));
    let body = get_body(&client, "/trainer/");
    assert_eq!(0, count_cards(&body));
}

#[test]
fn paginate_listings() {
    let (client, db) = setup();
    create_gyms(&db, 10);
    let body = get_body(&client, "/gym/");
    assert_eq!(9, count_cards(&body));
    assert!(body.contains("gym-9"));
    assert!(!body.contains("gym-0"));
    assert!(body.contains("page=2"));
    let body = get_body(&client, "/gym/?page=2");
    assert_eq!(1, count_cards(&body));
    assert!(body.contains("gym-0"));
    // Out of range selects the last page
    let body = get_body(&client, "/gym/?page=99");
    assert_eq!(1, count_cards(&body));
    // Not a number selects the first page
    let body = get_body(&client, "/gym/?page=abc");
    assert_eq!(9, count_cards(&body));
}

#[test]
fn filter_by_any_of_the_tags_without_duplicates() {
    let (client, db) = setup();
    create_listing(
        &db,
        Listing::build()
            .name("Both")
            .tags(Facet::SportType, &["yoga", "crossfit"])
            .finish_new(),
    );
    create_listing(
        &db,
        Listing::build()
            .name("OnlyYoga")
            .tags(Facet::SportType, &["yoga"])
            .finish_new(),
    );
    create_listing(&db, Listing::build().name("Untagged").finish_new());
    let body = get_body(&client, "/gym/?sport_type=yoga&sport_type=crossfit");
    assert_eq!(2, count_cards(&body));
    assert_eq!(1, body.matches(">Both<").count());
    assert!(!body.contains("Untagged"));
    // Facets of other sections are ignored
    let body = get_body(&client, "/gym/?meal_type=lunch");
    assert_eq!(3, count_cards(&body));
}

#[test]
fn filter_by_search_city_and_price_range() {
    let (client, db) = setup();
    create_listing(
        &db,
        Listing::build()
            .name("Tehran Fit")
            .city(City::Tehran)
            .price_range(PriceRange::Low)
            .finish_new(),
    );
    create_listing(
        &db,
        Listing::build()
            .name("Isfahan Fit")
            .city(City::Isfahan)
            .price_range(PriceRange::High)
            .finish_new(),
    );
    let body = get_body(&client, "/gym/?search=tehran");
    assert_eq!(1, count_cards(&body));
    assert!(body.contains("Tehran Fit"));
    let body = get_body(&client, "/gym/?city=isfahan");
    assert_eq!(1, count_cards(&body));
    assert!(body.contains("Isfahan Fit"));
    let body = get_body(&client, "/gym/?price_range=low");
    assert_eq!(1, count_cards(&body));
    assert!(body.contains("Tehran Fit"));
    let body = get_body(&client, "/gym/?city=isfahan&price_range=low");
    assert_eq!(0, count_cards(&body));
    let body = get_body(&client, "/gym/?search=&city=");
    assert_eq!(2, count_cards(&body));
}

#[test]
fn filter_by_minimum_rating() {
    let (client, db) = setup();
    let good = create_listing(&db, Listing::build().name("Good").finish_new());
    let bad = create_listing(&db, Listing::build().name("Bad").finish_new());
    create_listing(&db, Listing::build().name("Unrated").finish_new());
    add_rating(&db, good, 5);
    add_rating(&db, good, 4);
    add_rating(&db, bad, 2);
    let body = get_body(&client, "/gym/?rating=4");
    assert_eq!(1, count_cards(&body));
    assert!(body.contains("Good"));
    assert!(body.contains("4.5"));
    // Malformed thresholds are ignored
    let body = get_body(&client, "/gym/?rating=many");
    assert_eq!(3, count_cards(&body));
}

#[test]
fn show_advertisements_in_the_opposite_slot() {
    let (client, db) = setup();
    for (title, order) in [("second-ad", 2), ("first-ad", 1)] {
        db.exclusive()
            .unwrap()
            .create_advertisement(
                NewAdvertisement::build()
                    .title(title)
                    .position(AdPosition::Left)
                    .order(order)
                    .finish(),
            )
            .unwrap();
    }
    let body = get_body(&client, "/gym/");
    let right_slot = body.find(r#"class="ads ads-right""#).unwrap();
    let first = body.find("first-ad").unwrap();
    let second = body.find("second-ad").unwrap();
    assert!(right_slot < first);
    assert!(first < second);
    let body = get_body(&client, "/restaurant/");
    assert!(!body.contains("first-ad"));
}

#[test]
fn get_detail_page() {
    let (client, db) = setup();
    let id = create_listing(
        &db,
        Listing::build()
            .name("Coach Sara")
            .section(Section::Trainer)
            .phone_numbers(&["0912-111"])
            .tags(Facet::SportType, &["pilates"])
            .resume("trainers/resumes/sara.pdf")
            .finish_new(),
    );
    add_rating(&db, id, 3);
    add_rating(&db, id, 4);
    add_rating(&db, id, 5);
    add_comment(&db, id, "published comment", true);
    add_comment(&db, id, "hidden comment", false);
    let body = get_body(&client, &format!("/trainer/{id}/"));
    assert!(body.contains("Coach Sara"));
    assert!(body.contains("0912-111"));
    assert!(body.contains("/media/trainers/resumes/sara.pdf"));
    assert!(body.contains("4.0"));
    assert!(body.contains("★★★★☆"));
    assert!(body.contains("published comment"));
    assert!(!body.contains("hidden comment"));
}

#[test]
fn detail_page_not_found() {
    let (client, db) = setup();
    let id = create_listing(
        &db,
        Listing::build()
            .name("Kebab House")
            .section(Section::Restaurant)
            .finish_new(),
    );
    for uri in [
        format!("/gym/{id}/"),
        format!("/restaurant/{}/", id.to_i64() + 1),
        "/restaurant/kebab/".to_owned(),
    ] {
        let response = client.get(uri).dispatch();
        assert_eq!(Status::NotFound, response.status());
        assert!(response.into_string().unwrap().contains("۴۰۴"));
    }
}

#[test]
fn serve_pages_with_and_without_trailing_slash() {
    let (client, db) = setup();
    let id = create_listing(&db, Listing::build().name("Iron Gym").finish_new());
    create_gyms(&db, 10);
    for uri in ["/gym/", "/gym"] {
        assert_eq!(9, count_cards(&get_body(&client, uri)));
    }
    for uri in ["/gym/?page=2", "/gym?page=2"] {
        assert_eq!(2, count_cards(&get_body(&client, uri)));
    }
    for uri in [format!("/gym/{id}/"), format!("/gym/{id}")] {
        assert!(get_body(&client, &uri).contains("Iron Gym"));
    }
    let response = client.get(format!("/gym/{id}/photos/")).dispatch();
    assert_eq!(Status::NotFound, response.status());
}

#[test]
fn post_valid_comment() {
    let (client, db) = setup();
    let id = create_listing(&db, Listing::build().name("Iron Gym").finish_new());
    let response = client
        .post(format!("/gym/{id}/"))
        .header(ContentType::Form)
        .body("name=Ali&email=ali%40example.com&comment=Very+clean&rating=5")
        .dispatch();
    assert_eq!(Status::SeeOther, response.status());
    let location = response.headers().get_one("Location").unwrap().to_owned();
    assert_eq!(format!("/gym/{id}/"), location);

    let body = get_body(&client, &location);
    assert!(body.contains("نظر و امتیاز شما با موفقیت ثبت شد!"));
    assert!(body.contains("Very clean"));
    // The flash message is shown only once
    let body = get_body(&client, &location);
    assert!(!body.contains("نظر و امتیاز شما با موفقیت ثبت شد!"));

    let db = db.shared().unwrap();
    let ratings = db.load_ratings_of_listing(id).unwrap();
    let comments = db.load_comments_of_listing(id).unwrap();
    assert_eq!(1, ratings.len());
    assert_eq!(1, comments.len());
    assert_eq!(Some(ratings[0].id), comments[0].rating_id);
}

#[test]
fn reject_invalid_comment() {
    let (client, db) = setup();
    let id = create_listing(
        &db,
        Listing::build()
            .name("Kebab House")
            .section(Section::Restaurant)
            .finish_new(),
    );
    for rating in ["0", "6", "x", ""] {
        let response = client
            .post(format!("/restaurant/{id}/"))
            .header(ContentType::Form)
            .body(format!("name=Ali&email=&comment=Tasty&rating={rating}"))
            .dispatch();
        assert_eq!(Status::Ok, response.status());
        let body = response.into_string().unwrap();
        assert!(body.contains("Kebab House"));
        assert!(body.contains(r#"value="Ali""#));
        assert!(body.contains("field-error"));
    }
    let response = client
        .post(format!("/restaurant/{id}/"))
        .header(ContentType::Form)
        .body("name=&email=no-email&comment=&rating=3")
        .dispatch();
    assert_eq!(Status::Ok, response.status());
    let body = response.into_string().unwrap();
    assert!(body.contains("این فیلد الزامی است."));
    assert!(body.contains("یک آدرس ایمیل معتبر وارد کنید."));

    let db = db.shared().unwrap();
    assert!(db.load_ratings_of_listing(id).unwrap().is_empty());
    assert!(db.load_comments_of_listing(id).unwrap().is_empty());
}

#[test]
fn post_comment_to_missing_listing() {
    let (client, _db) = setup();
    let response = client
        .post("/gym/42/")
        .header(ContentType::Form)
        .body("name=Ali&comment=Hello&rating=4")
        .dispatch();
    assert_eq!(Status::NotFound, response.status());
}
