pub const CAPTION_PREV: &str = "Previous";
pub const CAPTION_NEXT: &str = "Next";
pub const CAPTION_DOT: &str = "...";

/// One pagination control: a numbered link, an ellipsis jump, or the
/// previous/next caption. Immutable once the list is assembled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
    pub page: usize,
    pub label: String,
    pub is_current: bool,
}

impl PageLink {
    fn number(page: usize) -> Self {
        Self {
            page,
            label: page.to_string(),
            is_current: false,
        }
    }

    fn caption(page: usize, label: &str) -> Self {
        Self {
            page,
            label: label.to_string(),
            is_current: false,
        }
    }

    pub fn is_numbered(&self) -> bool {
        self.label.chars().all(|c| c.is_ascii_digit())
    }
}

/// Number of pages needed for `total` items, never less than 1. A zero
/// page size counts as 1 so a bad configuration cannot divide by zero.
pub fn max_page(total: usize, page_size: usize) -> usize {
    if total == 0 {
        1
    } else {
        total.div_ceil(page_size.max(1))
    }
}

pub fn prev_page(current: usize) -> usize {
    if current > 1 { current - 1 } else { 1 }
}

pub fn next_page(current: usize, max: usize) -> usize {
    if current < max { current + 1 } else { max }
}

/// Bounds of the visible slice for `page`: `[size*(page-1), size*page)`
/// clamped to `total`. A page past the end yields an empty slice.
pub fn page_bounds(page: usize, page_size: usize, total: usize) -> (usize, usize) {
    let start = page_size.saturating_mul(page.saturating_sub(1)).min(total);
    let end = (start + page_size).min(total);
    (start, end)
}

/// Build the compact, ellipsis-aware page strip.
///
/// Shape: `1`, `Previous`, a center window, `Next`, last page. Strips with
/// fewer than 9 pages render every number; longer strips keep a five-wide
/// window around the current page and bridge the gaps with `...` links that
/// jump three pages out.
pub fn build_page_links(current: usize, prev: usize, next: usize, max: usize) -> Vec<PageLink> {
    let mut links = Vec::new();
    push_first_two(&mut links, prev);
    if max < 9 {
        push_center(&mut links, 2, max);
    } else if current < 5 {
        push_center(&mut links, 2, current + 3);
        push_dot(&mut links, current + 3);
    } else if current > max - 4 {
        push_dot(&mut links, current - 3);
        push_center(&mut links, current.saturating_sub(2), max);
    } else {
        push_dot(&mut links, current - 3);
        push_center(&mut links, current - 2, current + 3);
        push_dot(&mut links, current + 3);
    }
    push_last_two(&mut links, next, max);
    mark_current(&mut links, current);
    links
}

fn push_first_two(links: &mut Vec<PageLink>, prev: usize) {
    links.push(PageLink::number(1));
    links.push(PageLink::caption(prev, CAPTION_PREV));
}

/// Numbered links for `start..end` (end exclusive).
fn push_center(links: &mut Vec<PageLink>, start: usize, end: usize) {
    for page in start..end {
        links.push(PageLink::number(page));
    }
}

fn push_dot(links: &mut Vec<PageLink>, page: usize) {
    links.push(PageLink::caption(page, CAPTION_DOT));
}

fn push_last_two(links: &mut Vec<PageLink>, next: usize, max: usize) {
    links.push(PageLink::caption(next, CAPTION_NEXT));
    // A one-page strip already carries its number up front.
    if max > 1 {
        links.push(PageLink::number(max));
    }
}

/// Flag the link matching the requesting page. At most one link ends up
/// current even when the page number also appears as Previous or Next; the
/// numbered link wins, so browsing the last page highlights its number and
/// not the Next caption that precedes it.
fn mark_current(links: &mut [PageLink], current: usize) {
    let target = links
        .iter()
        .position(|l| l.page == current && l.is_numbered())
        .or_else(|| links.iter().position(|l| l.page == current));
    if let Some(index) = target {
        links[index].is_current = true;
    }
}
