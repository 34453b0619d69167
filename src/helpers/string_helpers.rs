use url::Url;

/// Joins text fragments the way a reader sees them: every fragment trimmed, blank ones skipped,
/// no separator inserted.
pub fn join_stripped_strings<'a, I>(strings: I) -> String
where
    I: IntoIterator<Item = &'a str>
{
    let mut result = String::new();

    for string in strings {
        let trimmed = string.trim();
        if trimmed.is_empty() {
            continue;
        }

        result.push_str(trimmed);
    }

    return result;
}

pub fn last_path_segment(url: &str) -> Option<String> {
    let url = Url::parse(url).ok()?;
    let segment = url.path_segments()?.last()?;

    if segment.is_empty() {
        return None;
    }

    return Some(segment.to_string());
}

pub fn extract_site_name_from_domain(domain: &str) -> &str {
    let last_index = domain.rfind('.');
    if last_index.is_none() {
        return domain;
    }
    let last_index = last_index.unwrap();

    let domain = &domain[0..last_index];

    let last_index = domain.rfind('.');
    if last_index.is_none() {
        return domain;
    }
    let last_index = last_index.unwrap();

    return &domain[last_index + 1..];
}

#[test]
fn test_join_stripped_strings() {
    assert_eq!("", join_stripped_strings(Vec::<&str>::new()));
    assert_eq!("", join_stripped_strings(vec!["  ", "\n\t"]));
    assert_eq!("ab c", join_stripped_strings(vec!["  a\n", "\n", " b c "]));
}

#[test]
fn test_last_path_segment() {
    assert_eq!(Some("60184882".to_string()), last_path_segment("https://www.nmbxd1.com/t/60184882"));
    assert_eq!(None, last_path_segment("https://www.nmbxd1.com/t/60184882/"));
    assert_eq!(None, last_path_segment("not a url"));
}

#[test]
fn test_extract_site_name_from_domain() {
    assert_eq!("nmbxd1", extract_site_name_from_domain("www.nmbxd1.com"));
    assert_eq!("nmbxd1", extract_site_name_from_domain("nmbxd1.com"));
    assert_eq!("localhost", extract_site_name_from_domain("localhost"));
}
