use crate::{email::*, id::*, time::*};

/// Feedback of a visitor.
///
/// Only approved comments are visible. A comment outlives
/// its rating, the reference is cleared when the rating is
/// deleted.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id         : Id,
    pub listing_id : Id,
    pub rating_id  : Option<Id>,
    pub name       : String,
    pub email      : Option<EmailAddress>,
    pub text       : String,
    pub approved   : bool,
    pub created_at : Timestamp,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub listing_id : Id,
    pub rating_id  : Option<Id>,
    pub name       : String,
    pub email      : Option<EmailAddress>,
    pub text       : String,
    pub approved   : bool,
    pub created_at : Timestamp,
}

impl Comment {
    pub const MAX_NAME_LEN: usize = 100;
}
