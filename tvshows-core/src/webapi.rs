use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use ureq::{Agent, RequestBuilder};
use url::Url;

use crate::{
    error::Error,
    remote::ShowStore,
    show::Show,
    util::{basic_authorization, default_ureq_agent_builder},
};

/// How new shows are sent to the server.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreateStyle {
    /// `POST /shows/` with the JSON record.
    #[default]
    Collection,
    /// `PUT /shows/<slug>` with the title as plain text.
    Record,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn from_username_and_password(username: String, password: String) -> Self {
        Self { username, password }
    }
}

/// Client for the `/shows/` resource.
pub struct WebApi {
    agent: Agent,
    base: Url,
    authorization: Option<String>,
    create_style: CreateStyle,
}

impl WebApi {
    pub fn new(base_url: &str, proxy_url: Option<&str>) -> Result<Self, Error> {
        let mut base = Url::parse(base_url)?;
        if base.cannot_be_a_base() {
            return Err(Error::InvalidUrl(base_url.to_string()));
        }
        // Relative joins replace the last segment unless the path ends in a slash.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self {
            agent: default_ureq_agent_builder(proxy_url).build().into(),
            base,
            authorization: None,
            create_style: CreateStyle::default(),
        })
    }

    pub fn with_credentials(mut self, credentials: Option<Credentials>) -> Self {
        self.authorization = credentials
            .map(|creds| basic_authorization(&creds.username, &creds.password));
        self
    }

    pub fn with_create_style(mut self, create_style: CreateStyle) -> Self {
        self.create_style = create_style;
        self
    }

    fn shows_url(&self) -> Result<Url, Error> {
        Ok(self.base.join("shows/")?)
    }

    fn show_url(&self, slug: &str) -> Result<Url, Error> {
        let mut url = self.shows_url()?;
        url.path_segments_mut()
            .map_err(|_| Error::InvalidUrl(self.base.to_string()))?
            .pop_if_empty()
            .push(slug);
        Ok(url)
    }

    fn authorize<B>(&self, request: RequestBuilder<B>) -> RequestBuilder<B> {
        match &self.authorization {
            Some(value) => request.header("Authorization", value),
            None => request,
        }
    }
}

impl ShowStore for WebApi {
    fn load_shows(&self) -> Result<Vec<Show>, Error> {
        let url = self.shows_url()?;
        log::debug!("GET {url}");
        let mut response = self
            .authorize(self.agent.get(url.as_str()))
            .header("Accept", "application/json")
            .call()?;
        let listing: Map<String, Value> = response.body_mut().read_json()?;
        Show::from_listing(listing)
    }

    fn create_show(&self, show: &Show) -> Result<(), Error> {
        match self.create_style {
            CreateStyle::Collection => {
                let url = self.shows_url()?;
                log::debug!("POST {url}");
                self.authorize(self.agent.post(url.as_str()))
                    .send_json(show)?;
            }
            CreateStyle::Record => {
                let url = self.show_url(show.slug())?;
                log::debug!("PUT {url}");
                self.authorize(self.agent.put(url.as_str()))
                    .header("Content-Type", "text/plain")
                    .send(show.title())?;
            }
        }
        Ok(())
    }

    fn delete_show(&self, slug: &str) -> Result<(), Error> {
        let url = self.show_url(slug)?;
        log::debug!("DELETE {url}");
        self.authorize(self.agent.delete(url.as_str())).call()?;
        Ok(())
    }
}
