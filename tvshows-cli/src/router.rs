use crossbeam_channel::Sender;
use tvshows_core::{collection::ShowCollection, remote::Request};

use crate::{
    data::{Config, Nav},
    ui::{HomeView, Surface},
    widget::Template,
};

/// Everything the UI needs from the outside world, built once at startup.
pub struct AppContext {
    pub config: Config,
    pub requests: Sender<Request>,
}

/// Maps the single `home` route to the page built at startup.
pub struct Router {
    home: HomeView,
    current: Nav,
}

impl Router {
    pub fn new(ctx: &AppContext, surface: Surface) -> Self {
        let shows = ShowCollection::new(ctx.requests.clone());
        let template = Template::new(ctx.config.row_template.as_str());
        Self {
            home: HomeView::new(shows, surface, template),
            current: Nav::Home,
        }
    }

    pub fn current(&self) -> Nav {
        self.current
    }

    pub fn home(&mut self) -> &mut HomeView {
        &mut self.home
    }

    pub fn navigate(&mut self, path: &str) -> Option<&mut HomeView> {
        match Nav::parse(path) {
            Some(nav) => {
                log::info!("navigating to {}", nav.title());
                self.current = nav;
                Some(&mut self.home)
            }
            None => {
                log::warn!("unknown route: {:?}", path);
                None
            }
        }
    }
}
