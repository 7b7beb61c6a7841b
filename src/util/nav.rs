//! Path matching for navigation link highlighting.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Class added to the nav link for the current page.
pub const ACTIVE_CLASS: &str = "active";

/// Strip trailing slashes. The site root normalizes to the empty string.
pub fn normalize_path(path: &str) -> &str {
    path.trim_end_matches('/')
}

/// Whether a link to `link_path` marks the page at `current_path`.
///
/// Exact match after normalization, or the site root with a link to the
/// default landing page.
pub fn is_active(link_path: &str, current_path: &str, default_path: &str) -> bool {
    let link = normalize_path(link_path);
    let current = normalize_path(current_path);
    link == current || (current.is_empty() && link == normalize_path(default_path))
}

/// A navigation link element whose class list can grow.
pub trait NavLink {
    /// Resolved target path of the link.
    fn path(&self) -> String;

    /// Add `class`. Adding a class the link already has must be a no-op.
    fn add_class(&self, class: &str);
}

/// Add [`ACTIVE_CLASS`] to every link targeting the current page.
///
/// Never removes a class, so repeated calls leave the same set marked.
pub fn mark_active_links<L: NavLink>(links: &[L], current_path: &str, default_path: &str) {
    let paths: Vec<String> = links.iter().map(NavLink::path).collect();
    for i in active_indices(paths.iter().map(String::as_str), current_path, default_path) {
        links[i].add_class(ACTIVE_CLASS);
    }
}

/// Indices of the links in `link_paths` that should be marked active.
pub fn active_indices<'a, I>(link_paths: I, current_path: &str, default_path: &str) -> Vec<usize>
where
    I: IntoIterator<Item = &'a str>,
{
    link_paths
        .into_iter()
        .enumerate()
        .filter(|(_, link)| is_active(link, current_path, default_path))
        .map(|(i, _)| i)
        .collect()
}
