/// Preview deploys get their own subdomains; their origins may call our
/// server fns cross-origin.
const PREVIEW_DOMAIN_SUFFIXES: &[&str] = &[".sellerhub-preview.fly.dev", ".sellerhub.in"];

pub fn is_host_or_origin_from_preview_domain(host_or_origin: &str) -> bool {
    let host = host_or_origin
        .trim_start_matches("https://")
        .trim_start_matches("http://");
    PREVIEW_DOMAIN_SUFFIXES
        .iter()
        .any(|suffix| host.ends_with(suffix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_origins_allowed() {
        assert!(is_host_or_origin_from_preview_domain(
            "https://pr-42.sellerhub-preview.fly.dev"
        ));
        assert!(is_host_or_origin_from_preview_domain("app.sellerhub.in"));
    }

    #[test]
    fn foreign_origins_rejected() {
        assert!(!is_host_or_origin_from_preview_domain("https://evil.example.com"));
        assert!(!is_host_or_origin_from_preview_domain("sellerhub.in.example.com"));
    }
}
