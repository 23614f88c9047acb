use reqwest::Url;

pub fn next_page_from_link(header: &str) -> Option<u32> {
    header.split(',').find_map(|entry| {
        let mut parts = entry.split(';');
        let target = parts.next()?.trim();
        let is_next = parts.any(|p| {
            let p = p.trim();
            p == "rel=\"next\"" || p == "rel=next"
        });
        if !is_next {
            return None;
        }

        let url = target.strip_prefix('<')?.strip_suffix('>')?;
        Url::parse(url)
            .ok()?
            .query_pairs()
            .find(|(k, _)| k == "page")
            .and_then(|(_, v)| v.parse().ok())
    })
}
