/// Domain label shown under each tab title
use url::{Host, Url};

/// Short domain for a tab URL, used as the row subtitle
///
/// Subdomains are collapsed to the last two labels, or the last three when
/// the suffix looks like `co.uk` / `com.au`:
/// - https://www.google.com/search → google.com
/// - https://news.bbc.co.uk/article → bbc.co.uk
/// - http://127.0.0.1:8080 → 127.0.0.1
/// - chrome://extensions → extensions
///
/// URLs without a host (`about:blank`, `data:`) and unparsable strings
/// give `None`.
pub fn display_domain(url: &str) -> Option<String> {
    let parsed = Url::parse(url.trim()).ok()?;

    match parsed.host()? {
        Host::Ipv4(addr) => Some(addr.to_string()),
        Host::Ipv6(addr) => Some(addr.to_string()),
        Host::Domain(hostname) => collapse_subdomains(&hostname.to_lowercase()),
    }
}

fn collapse_subdomains(hostname: &str) -> Option<String> {
    if hostname.is_empty() {
        return None;
    }

    let parts: Vec<&str> = hostname.split('.').filter(|p| !p.is_empty()).collect();
    if parts.len() < 2 {
        return Some(hostname.to_string());
    }

    let tld = parts[parts.len() - 1];
    let num_parts = if parts.len() >= 3
        && tld.len() == 2
        && matches!(parts[parts.len() - 2], "co" | "com") {
        3
    } else {
        2
    };

    Some(parts[parts.len() - num_parts..].join("."))
}
