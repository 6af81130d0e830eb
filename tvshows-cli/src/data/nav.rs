#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Nav {
    Home,
}

impl Nav {
    /// Resolve a route path such as `home`, `#home` or `/home`.
    pub fn parse(path: &str) -> Option<Self> {
        match path.trim().trim_start_matches(['#', '/']) {
            "home" => Some(Nav::Home),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Nav::Home => "Home",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_home_route() {
        assert_eq!(Nav::parse("home"), Some(Nav::Home));
        assert_eq!(Nav::parse("#home"), Some(Nav::Home));
        assert_eq!(Nav::parse("/home"), Some(Nav::Home));
        assert_eq!(Nav::parse(" home "), Some(Nav::Home));
    }

    #[test]
    fn other_routes_are_unknown() {
        assert_eq!(Nav::parse(""), None);
        assert_eq!(Nav::parse("shows"), None);
        assert_eq!(Nav::parse("home/extra"), None);
    }
}
