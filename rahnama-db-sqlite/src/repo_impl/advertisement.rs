use super::*;

impl<'a> AdvertisementRepo for DbReadWrite<'a> {
    fn create_advertisement(&self, ad: NewAdvertisement) -> Result<Id> {
        create_advertisement(&mut self.conn.borrow_mut(), ad)
    }
    fn load_active_advertisements(
        &self,
        section: Section,
        position: AdPosition,
        limit: usize,
    ) -> Result<Vec<Advertisement>> {
        load_active_advertisements(&mut self.conn.borrow_mut(), section, position, limit)
    }
}

impl<'a> AdvertisementRepo for DbConnection<'a> {
    fn create_advertisement(&self, ad: NewAdvertisement) -> Result<Id> {
        create_advertisement(&mut self.conn.borrow_mut(), ad)
    }
    fn load_active_advertisements(
        &self,
        section: Section,
        position: AdPosition,
        limit: usize,
    ) -> Result<Vec<Advertisement>> {
        load_active_advertisements(&mut self.conn.borrow_mut(), section, position, limit)
    }
}

impl<'a> AdvertisementRepo for DbReadOnly<'a> {
    fn create_advertisement(&self, _ad: NewAdvertisement) -> Result<Id> {
        unreachable!();
    }
    fn load_active_advertisements(
        &self,
        section: Section,
        position: AdPosition,
        limit: usize,
    ) -> Result<Vec<Advertisement>> {
        load_active_advertisements(&mut self.conn.borrow_mut(), section, position, limit)
    }
}

const MEDIA_TYPE_IMAGE: &str = "image";
const MEDIA_TYPE_GIF: &str = "gif";
const MEDIA_TYPE_VIDEO: &str = "video";
const MEDIA_TYPE_VIDEO_URL: &str = "video_url";

fn store_media(media: &AdMedia) -> (&'static str, &str) {
    match media {
        AdMedia::Image(path) => (MEDIA_TYPE_IMAGE, path),
        AdMedia::Gif(path) => (MEDIA_TYPE_GIF, path),
        AdMedia::VideoFile(path) => (MEDIA_TYPE_VIDEO, path),
        AdMedia::VideoUrl(url) => (MEDIA_TYPE_VIDEO_URL, url.as_str()),
    }
}

fn load_media(media_type: &str, media: String) -> Result<AdMedia> {
    let media = match media_type {
        MEDIA_TYPE_IMAGE => AdMedia::Image(media),
        MEDIA_TYPE_GIF => AdMedia::Gif(media),
        MEDIA_TYPE_VIDEO => AdMedia::VideoFile(media),
        MEDIA_TYPE_VIDEO_URL => AdMedia::VideoUrl(
            media
                .parse()
                .map_err(|err| anyhow!("Invalid video URL '{media}': {err}"))?,
        ),
        _ => return Err(anyhow!("Invalid media type: {media_type}").into()),
    };
    Ok(media)
}

fn create_advertisement(conn: &mut SqliteConnection, ad: NewAdvertisement) -> Result<Id> {
    use schema::advertisement::dsl;
    let NewAdvertisement {
        title,
        section,
        position,
        order,
        active,
        media,
        link,
        created_at,
    } = ad;
    let (media_type, media) = store_media(&media);
    let new_ad = models::NewAdvertisement {
        title: &title,
        section: section.code(),
        position: position.into(),
        sort_order: order,
        active,
        media_type,
        media,
        link: link.as_ref().map(Url::as_str),
        created_at: created_at.as_millis(),
    };
    diesel::insert_into(schema::advertisement::table)
        .values(&new_ad)
        .returning(dsl::rowid)
        .get_result::<i64>(conn)
        .map(Id::from)
        .map_err(from_diesel_err)
}

fn load_active_advertisements(
    conn: &mut SqliteConnection,
    section: Section,
    position: AdPosition,
    limit: usize,
) -> Result<Vec<Advertisement>> {
    use schema::advertisement::dsl;
    let rows = schema::advertisement::table
        .filter(dsl::section.eq(section.code()))
        .filter(dsl::position.eq(<&str>::from(position)))
        .filter(dsl::active.eq(true))
        .order_by((dsl::sort_order, dsl::created_at.desc(), dsl::rowid))
        .load::<models::Advertisement>(conn)
        .map_err(from_diesel_err)?;
    // Rows are only limited after skipping invalid ones
    let mut ads = Vec::with_capacity(limit.min(rows.len()));
    for row in rows {
        if ads.len() >= limit {
            break;
        }
        let models::Advertisement {
            rowid,
            title,
            section: _,
            position: _,
            sort_order,
            active,
            media_type,
            media,
            link,
            created_at,
        } = row;
        let media = match load_media(&media_type, media) {
            Ok(media) => media,
            Err(err) => {
                log::warn!("Skipping advertisement {rowid}: {err}");
                continue;
            }
        };
        let link = link.and_then(|link| {
            link.parse::<Url>()
                .inspect_err(|err| {
                    log::warn!("Ignoring invalid link '{link}' of advertisement {rowid}: {err}");
                })
                .ok()
        });
        ads.push(Advertisement {
            id: rowid.into(),
            title,
            section,
            position,
            order: sort_order,
            active,
            media,
            link,
            created_at: load_timestamp(created_at)?,
        });
    }
    Ok(ads)
}
