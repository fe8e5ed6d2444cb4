//! # Endpoint URLs
//!
//! Builds the absolute request URL for every backend operation from the
//! configured base URL. Path segments (activity names) and query values are
//! percent-encoded by [`reqwest::Url`], so names such as `"Chess Club"` or
//! emails with `+` survive the trip.
//!
//! | Function | Method | Path |
//! |----------|--------|------|
//! | [`activities`] | `GET` | `/activities` |
//! | [`auth_check`] | `GET` | `/auth/check?session_token=` |
//! | [`login`] | `POST` | `/login?username=&password=` |
//! | [`logout`] | `POST` | `/logout?session_token=` |
//! | [`signup`] | `POST` | `/activities/{name}/signup?email=&session_token=` |
//! | [`unregister`] | `DELETE` | `/activities/{name}/unregister?email=&session_token=` |
//!
//! A base URL with a path prefix (`https://host/portal/`) keeps the prefix.

use reqwest::Url;

use crate::ApiError;

fn endpoint<'a>(
    base_url: &str,
    segments: impl IntoIterator<Item = &'a str>,
) -> Result<Url, ApiError> {
    let mut url = Url::parse(base_url)
        .map_err(|e| ApiError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
    url.set_query(None);
    url.set_fragment(None);
    url.path_segments_mut()
        .map_err(|_| ApiError::InvalidBaseUrl(base_url.to_string()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

fn with_query(mut url: Url, pairs: &[(&str, &str)]) -> Url {
    {
        let mut query = url.query_pairs_mut();
        for (key, value) in pairs {
            query.append_pair(key, value);
        }
    }
    url
}

pub fn activities(base_url: &str) -> Result<Url, ApiError> {
    endpoint(base_url, ["activities"])
}

pub fn auth_check(base_url: &str, token: &str) -> Result<Url, ApiError> {
    let url = endpoint(base_url, ["auth", "check"])?;
    Ok(with_query(url, &[("session_token", token)]))
}

pub fn login(base_url: &str, username: &str, password: &str) -> Result<Url, ApiError> {
    let url = endpoint(base_url, ["login"])?;
    Ok(with_query(url, &[("username", username), ("password", password)]))
}

pub fn logout(base_url: &str, token: &str) -> Result<Url, ApiError> {
    let url = endpoint(base_url, ["logout"])?;
    Ok(with_query(url, &[("session_token", token)]))
}

pub fn signup(base_url: &str, activity: &str, email: &str, token: &str) -> Result<Url, ApiError> {
    let url = endpoint(base_url, ["activities", activity, "signup"])?;
    Ok(with_query(url, &[("email", email), ("session_token", token)]))
}

pub fn unregister(
    base_url: &str,
    activity: &str,
    email: &str,
    token: &str,
) -> Result<Url, ApiError> {
    let url = endpoint(base_url, ["activities", activity, "unregister"])?;
    Ok(with_query(url, &[("email", email), ("session_token", token)]))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://localhost:8000";

    #[test]
    fn test_plain_paths() {
        assert_eq!(activities(BASE).unwrap().as_str(), "http://localhost:8000/activities");
        assert_eq!(
            activities("http://localhost:8000/").unwrap().as_str(),
            "http://localhost:8000/activities"
        );
    }

    #[test]
    fn test_token_queries() {
        assert_eq!(
            auth_check(BASE, "abc-123").unwrap().as_str(),
            "http://localhost:8000/auth/check?session_token=abc-123"
        );
        assert_eq!(
            logout(BASE, "abc-123").unwrap().as_str(),
            "http://localhost:8000/logout?session_token=abc-123"
        );
    }

    #[test]
    fn test_login_encodes_credentials() {
        let url = login(BASE, "ms smith", "p&ss=word").unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8000/login?username=ms+smith&password=p%26ss%3Dword"
        );
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("username".to_string(), "ms smith".to_string()),
                ("password".to_string(), "p&ss=word".to_string()),
            ]
        );
    }

    #[test]
    fn test_activity_name_is_a_single_encoded_segment() {
        let url = signup(BASE, "Chess Club", "emma+1@mergington.edu", "t").unwrap();
        assert_eq!(url.path(), "/activities/Chess%20Club/signup");
        assert_eq!(
            url.query(),
            Some("email=emma%2B1%40mergington.edu&session_token=t")
        );

        let url = unregister(BASE, "Art/Design", "a@b.edu", "t").unwrap();
        assert_eq!(url.path(), "/activities/Art%2FDesign/unregister");
    }

    #[test]
    fn test_base_prefix_is_kept() {
        let url = activities("https://school.example/portal/").unwrap();
        assert_eq!(url.as_str(), "https://school.example/portal/activities");

        let url = auth_check("https://school.example/portal?x=1#top", "t").unwrap();
        assert_eq!(url.as_str(), "https://school.example/portal/auth/check?session_token=t");
    }

    #[test]
    fn test_bad_base_url() {
        assert!(matches!(activities(""), Err(ApiError::InvalidBaseUrl(_))));
        assert!(matches!(activities("not a url"), Err(ApiError::InvalidBaseUrl(_))));
        assert!(matches!(
            activities("mailto:office@mergington.edu"),
            Err(ApiError::InvalidBaseUrl(_))
        ));
    }
}
