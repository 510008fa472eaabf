//! Client-side pagination over an already fetched result list.
//!
//! Pages are numbered from 1.

use crate::catalog_const::MAX_VISIBLE_PAGE_BUTTONS;

/// One entry of the condensed page-number strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageButton {
    Page(usize),
    Ellipsis,
}

pub fn total_pages(item_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    item_count.div_ceil(page_size)
}

/// Keeps `page` inside `[1, total_pages]`. With no pages at all the result is 1.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// The items shown on `page`; empty when the page lies past the end.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// 1-based inclusive bounds of the items on `page`, `None` when the page is empty.
pub fn page_item_range(item_count: usize, page: usize, page_size: usize) -> Option<(usize, usize)> {
    let start = page.saturating_sub(1).saturating_mul(page_size);
    if start >= item_count {
        return None;
    }
    Some((start + 1, (start + page_size).min(item_count)))
}

/// Condensed page buttons: every page when there are few, otherwise the first and last
/// page with a window around the current one.
pub fn page_buttons(current_page: usize, total_pages: usize) -> Vec<PageButton> {
    if total_pages <= MAX_VISIBLE_PAGE_BUTTONS {
        return (1..=total_pages).map(PageButton::Page).collect();
    }
    let mut buttons = Vec::with_capacity(7);
    if current_page <= 3 {
        buttons.extend((1..=4).map(PageButton::Page));
        buttons.push(PageButton::Ellipsis);
        buttons.push(PageButton::Page(total_pages));
    } else if current_page >= total_pages - 2 {
        buttons.push(PageButton::Page(1));
        buttons.push(PageButton::Ellipsis);
        buttons.extend((total_pages - 3..=total_pages).map(PageButton::Page));
    } else {
        buttons.push(PageButton::Page(1));
        buttons.push(PageButton::Ellipsis);
        buttons.extend((current_page - 1..=current_page + 1).map(PageButton::Page));
        buttons.push(PageButton::Ellipsis);
        buttons.push(PageButton::Page(total_pages));
    }
    buttons
}
