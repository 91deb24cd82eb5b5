//! VauID single-sign-on URL helpers
//!
//! Builds the login and logout links that hand the user over to the VAU
//! gateway. The gateway takes a `remoteUrl` query parameter carrying the
//! application-absolute callback URL it redirects back to; the
//! authentication protocol itself lives entirely on the gateway side.

/// Default gateway login base
pub const DEFAULT_LOGIN_BASE: &str = "http://www.ra.ee/vau/index.php/site/login";

/// Default gateway logout base
pub const DEFAULT_LOGOUT_BASE: &str = "http://www.ra.ee/vau/index.php/site/logout";

/// Default application login route and parameters (protocol version 2,
/// `user` scope)
pub const DEFAULT_LOGIN_ROUTE: &str = "/site/vauLogin";

/// Default application logout route
pub const DEFAULT_LOGOUT_ROUTE: &str = "/site/logout";

/// SSO URL builder bound to an application base URL
#[derive(Debug, Clone)]
pub struct VauUrls {
    login_base: String,
    logout_base: String,
    app_base_url: String,
}

impl VauUrls {
    /// Create a builder for an application base URL
    /// (e.g. `https://app.example.com`)
    pub fn new(app_base_url: impl Into<String>) -> Self {
        Self {
            login_base: DEFAULT_LOGIN_BASE.to_string(),
            logout_base: DEFAULT_LOGOUT_BASE.to_string(),
            app_base_url: app_base_url.into(),
        }
    }

    /// Override the gateway base URLs
    pub fn with_gateway(
        mut self,
        login_base: impl Into<String>,
        logout_base: impl Into<String>,
    ) -> Self {
        self.login_base = login_base.into();
        self.logout_base = logout_base.into();
        self
    }

    /// Build a gateway login URL calling back into `route`
    pub fn login_url(&self, route: &str, params: &[(&str, &str)]) -> String {
        format!(
            "{}?remoteUrl={}",
            self.login_base,
            urlencoding::encode(&self.absolute_url(route, params))
        )
    }

    /// Login URL with the default route and `v=2&s=user` parameters
    pub fn login_url_default(&self) -> String {
        self.login_url(DEFAULT_LOGIN_ROUTE, &[("v", "2"), ("s", "user")])
    }

    /// Build a gateway logout URL calling back into `route`
    pub fn logout_url(&self, route: &str, params: &[(&str, &str)]) -> String {
        format!(
            "{}?remoteUrl={}",
            self.logout_base,
            urlencoding::encode(&self.absolute_url(route, params))
        )
    }

    /// Logout URL with the default route and no parameters
    pub fn logout_url_default(&self) -> String {
        self.logout_url(DEFAULT_LOGOUT_ROUTE, &[])
    }

    fn absolute_url(&self, route: &str, params: &[(&str, &str)]) -> String {
        let mut url = format!(
            "{}/{}",
            self.app_base_url.trim_end_matches('/'),
            route.trim_start_matches('/')
        );

        if !params.is_empty() {
            let query = params
                .iter()
                .map(|(key, value)| {
                    format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
                })
                .collect::<Vec<_>>()
                .join("&");
            url.push('?');
            url.push_str(&query);
        }

        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls() -> VauUrls {
        VauUrls::new("https://app.example.com")
    }

    #[test]
    fn test_login_url_carries_encoded_callback() {
        let url = urls().login_url("/site/loginVau", &[("v", "2"), ("s", "user_role")]);

        let (base, remote) = url.split_once("?remoteUrl=").unwrap();
        assert_eq!(base, DEFAULT_LOGIN_BASE);

        let callback = urlencoding::decode(remote).unwrap();
        assert_eq!(
            callback,
            "https://app.example.com/site/loginVau?v=2&s=user_role"
        );
    }

    #[test]
    fn test_callback_is_url_encoded_in_place() {
        let url = urls().login_url("/site/loginVau", &[("v", "2")]);
        let (_, remote) = url.split_once("?remoteUrl=").unwrap();

        assert!(remote.contains("%3A%2F%2F"));
        assert!(remote.contains("%3Fv%3D2"));
        assert!(!remote.contains('?'));
    }

    #[test]
    fn test_login_url_default() {
        let url = urls().login_url_default();
        let callback = urlencoding::decode(url.split_once("?remoteUrl=").unwrap().1)
            .unwrap()
            .into_owned();
        assert_eq!(callback, "https://app.example.com/site/vauLogin?v=2&s=user");
    }

    #[test]
    fn test_logout_url_default_has_no_query_on_callback() {
        let url = urls().logout_url_default();
        let (base, remote) = url.split_once("?remoteUrl=").unwrap();
        assert_eq!(base, DEFAULT_LOGOUT_BASE);

        let callback = urlencoding::decode(remote).unwrap();
        assert_eq!(callback, "https://app.example.com/site/logout");
    }

    #[test]
    fn test_base_and_route_slashes_normalize() {
        let urls = VauUrls::new("https://app.example.com/");
        let url = urls.login_url("site/loginVau", &[]);
        let callback = urlencoding::decode(url.split_once("?remoteUrl=").unwrap().1)
            .unwrap()
            .into_owned();
        assert_eq!(callback, "https://app.example.com/site/loginVau");
    }

    #[test]
    fn test_custom_gateway_bases() {
        let urls = VauUrls::new("https://app.example.com")
            .with_gateway("https://sso.example.com/login", "https://sso.example.com/logout");

        assert!(urls.login_url("/cb", &[]).starts_with("https://sso.example.com/login?remoteUrl="));
        assert!(urls.logout_url("/cb", &[]).starts_with("https://sso.example.com/logout?remoteUrl="));
    }

    #[test]
    fn test_param_values_are_encoded() {
        let url = urls().login_url("/cb", &[("next", "/admin?tab=users&page=2")]);
        let callback = urlencoding::decode(url.split_once("?remoteUrl=").unwrap().1)
            .unwrap()
            .into_owned();
        assert!(callback.contains("next=%2Fadmin%3Ftab%3Dusers%26page%3D2"));
    }
}
