use actix_web::cookie::{time::Duration, Cookie, SameSite};
use actix_web::HttpResponseBuilder;

use crate::auth::application::ports::outgoing::TokenPair;

pub use super::extractors::auth::ACCESS_TOKEN_COOKIE;
pub const REFRESH_TOKEN_COOKIE: &str = "refreshToken";

fn token_cookie(name: &'static str, value: String) -> Cookie<'static> {
    Cookie::build(name, value)
        .path("/")
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Strict)
        .finish()
}

fn expired_cookie(name: &'static str) -> Cookie<'static> {
    let mut cookie = token_cookie(name, String::new());
    cookie.set_max_age(Duration::ZERO);
    cookie
}

/// Attach both tokens as httpOnly, secure cookies.
pub fn set_token_cookies(builder: &mut HttpResponseBuilder, tokens: &TokenPair) {
    builder
        .cookie(token_cookie(ACCESS_TOKEN_COOKIE, tokens.access_token.clone()))
        .cookie(token_cookie(REFRESH_TOKEN_COOKIE, tokens.refresh_token.clone()));
}

pub fn clear_token_cookies(builder: &mut HttpResponseBuilder) {
    builder
        .cookie(expired_cookie(ACCESS_TOKEN_COOKIE))
        .cookie(expired_cookie(REFRESH_TOKEN_COOKIE));
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::HttpResponse;

    fn pair() -> TokenPair {
        TokenPair {
            access_token: "a.b.c".to_string(),
            refresh_token: "d.e.f".to_string(),
        }
    }

    #[test]
    fn token_cookies_are_http_only_and_secure() {
        let mut builder = HttpResponse::Ok();
        set_token_cookies(&mut builder, &pair());
        let resp = builder.finish();

        let cookies: Vec<_> = resp.cookies().collect();
        assert_eq!(cookies.len(), 2);
        for cookie in cookies {
            assert_eq!(cookie.http_only(), Some(true));
            assert_eq!(cookie.secure(), Some(true));
        }

        let access = resp
            .cookies()
            .find(|c| c.name() == ACCESS_TOKEN_COOKIE)
            .unwrap();
        assert_eq!(access.value(), "a.b.c");
    }

    #[test]
    fn cleared_cookies_expire_immediately() {
        let mut builder = HttpResponse::Ok();
        clear_token_cookies(&mut builder);
        let resp = builder.finish();

        let refresh = resp
            .cookies()
            .find(|c| c.name() == REFRESH_TOKEN_COOKIE)
            .unwrap();
        assert_eq!(refresh.value(), "");
        assert_eq!(refresh.max_age(), Some(Duration::ZERO));
    }
}
