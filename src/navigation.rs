//! Page Navigation

use crate::error::ApiError;

/// Where to go after an action completes
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Navigation {
    /// Replace the current history entry with a fresh load of this page
    Reload,
    /// Go to another URL
    Assign(String),
}

pub fn navigate(target: &Navigation) -> Result<(), ApiError> {
    let location = web_sys::window()
        .ok_or_else(|| ApiError::Browser("no window".to_string()))?
        .location();
    match target {
        Navigation::Reload => {
            let href = location.href().map_err(ApiError::from_js)?;
            location.replace(without_fragment(&href)).map_err(ApiError::from_js)
        }
        Navigation::Assign(url) => location.set_href(url).map_err(ApiError::from_js),
    }
}

/// `href` with any `#fragment` removed
pub fn without_fragment(href: &str) -> &str {
    href.split_once('#').map_or(href, |(base, _)| base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_without_fragment() {
        assert_eq!(without_fragment("http://host/jobs/#tree"), "http://host/jobs/");
        assert_eq!(without_fragment("http://host/jobs/?page=2"), "http://host/jobs/?page=2");
        assert_eq!(without_fragment("#"), "");
    }
}
