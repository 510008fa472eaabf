//! Tests for page slicing and the condensed page-button strip.

use common::pagination::{PageButton, clamp_page, page_buttons, page_item_range, page_slice, total_pages};

use PageButton::{Ellipsis, Page};

#[test]
fn few_pages_show_every_button() {
    assert_eq!(page_buttons(1, 1), vec![Page(1)]);
    assert_eq!(page_buttons(2, 5), vec![Page(1), Page(2), Page(3), Page(4), Page(5)]);
    assert!(page_buttons(1, 0).is_empty());
}

#[test]
fn ten_pages_condense_around_current() {
    assert_eq!(page_buttons(1, 10), vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]);
    assert_eq!(
        page_buttons(5, 10),
        vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
    );
    assert_eq!(page_buttons(9, 10), vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)]);
}

#[test]
fn boundaries_of_condensed_windows() {
    assert_eq!(page_buttons(3, 6), vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(6)]);
    assert_eq!(page_buttons(4, 6), vec![Page(1), Ellipsis, Page(3), Page(4), Page(5), Page(6)]);
    assert_eq!(
        page_buttons(4, 7),
        vec![Page(1), Ellipsis, Page(3), Page(4), Page(5), Ellipsis, Page(7)]
    );
}

#[test]
fn forty_five_items_span_three_pages() {
    let items = (0..45).collect::<Vec<_>>();
    assert_eq!(total_pages(items.len(), 20), 3);
    assert_eq!(page_slice(&items, 1, 20), &items[0..20]);
    assert_eq!(page_slice(&items, 3, 20), &items[40..45]);
    assert!(page_slice(&items, 4, 20).is_empty());
    assert_eq!(page_item_range(45, 3, 20), Some((41, 45)));
    assert_eq!(page_item_range(45, 4, 20), None);
}

#[test]
fn clamp_keeps_page_in_range() {
    assert_eq!(clamp_page(0, 3), 1);
    assert_eq!(clamp_page(7, 3), 3);
    assert_eq!(clamp_page(2, 3), 2);
    assert_eq!(clamp_page(5, 0), 1);
}
