use std::{fmt, sync::Arc};

use serde::Serialize;
use serde_json::{Map, Value};

use crate::{error::Error, slug::slugify};

/// A show record.  `id` and `slug` are the same value, derived once from the
/// title when the record is created.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Show {
    id: Arc<str>,
    slug: Arc<str>,
    title: Arc<str>,
}

impl Show {
    /// Create a new record from a user-supplied title.
    pub fn new(title: &str) -> Self {
        Self::with_slug(&slugify(title), title)
    }

    /// Create a record for a slug the server already knows about.
    pub fn with_slug(slug: &str, title: &str) -> Self {
        let slug: Arc<str> = slug.into();
        Self {
            id: slug.clone(),
            slug,
            title: title.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Parse the listing returned by the list endpoint, a JSON object mapping
    /// slugs to titles.  Entries keep the order of the document.
    pub fn from_listing(listing: Map<String, Value>) -> Result<Vec<Self>, Error> {
        listing
            .into_iter()
            .map(|(slug, title)| match title {
                Value::String(title) => Ok(Self::with_slug(&slug, &title)),
                other => {
                    log::warn!("unexpected title for {slug:?}: {other}");
                    Err(Error::UnexpectedResponse)
                }
            })
            .collect()
    }
}

impl fmt::Display for Show {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.slug)
    }
}
