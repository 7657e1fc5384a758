//! Listing response normalization.
//!
//! Listing endpoints have shipped several response shapes over time. This is
//! a compatibility shim for those shapes; new endpoints should settle on one.
//! Rules, in order:
//!
//! 1. a bare JSON array is the item list itself;
//! 2. otherwise the first key from the caller's priority list whose value is
//!    an array holds the items;
//! 3. otherwise the page is empty.
//!
//! `nextCursor` (or `next_cursor`) is the cursor; an empty string or `null`
//! means there is none. `hasMore` (or `has_more`) wins when present, else
//! "more available" means "a cursor was returned". Items that fail to
//! deserialize are skipped.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::Page;

pub fn decode_page<T: DeserializeOwned>(body: Value, item_keys: &[&str]) -> Page<T> {
    let (raw_items, next_cursor, has_more) = match body {
        Value::Array(items) => (items, None, None),
        Value::Object(mut map) => {
            let items = take_items(&mut map, item_keys);
            (items, cursor(&map), flag(&map, &["hasMore", "has_more"]))
        }
        _ => (Vec::new(), None, None),
    };

    let total = raw_items.len();
    let items: Vec<T> = raw_items
        .into_iter()
        .filter_map(|raw| {
            serde_json::from_value(raw)
                .inspect_err(|e| log::warn!("skipping malformed feed item: {e}"))
                .ok()
        })
        .collect();
    if items.len() != total {
        log::debug!("decoded {} of {total} feed items", items.len());
    }

    let has_more = has_more.unwrap_or(next_cursor.is_some());
    Page {
        items,
        next_cursor,
        has_more,
    }
}

fn take_items(map: &mut Map<String, Value>, item_keys: &[&str]) -> Vec<Value> {
    item_keys
        .iter()
        .find_map(|key| match map.get_mut(*key) {
            Some(Value::Array(items)) => Some(std::mem::take(items)),
            _ => None,
        })
        .unwrap_or_default()
}

fn cursor(map: &Map<String, Value>) -> Option<String> {
    let raw = map.get("nextCursor").or_else(|| map.get("next_cursor"))?;
    match raw {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn flag(map: &Map<String, Value>, keys: &[&str]) -> Option<bool> {
    keys.iter().find_map(|k| map.get(*k).and_then(Value::as_bool))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Deserialize, Debug, PartialEq)]
    struct Item {
        id: u32,
    }

    const KEYS: &[&str] = &["reels", "items", "data"];

    fn ids(page: &Page<Item>) -> Vec<u32> {
        page.items.iter().map(|i| i.id).collect()
    }

    #[test]
    fn first_present_key_wins() {
        let page = decode_page::<Item>(
            json!({ "items": [{ "id": 2 }], "reels": [{ "id": 1 }] }),
            KEYS,
        );
        assert_eq!(ids(&page), [1]);
    }

    #[test]
    fn non_array_key_is_skipped() {
        let page = decode_page::<Item>(
            json!({ "reels": null, "items": { "id": 9 }, "data": [{ "id": 3 }] }),
            KEYS,
        );
        assert_eq!(ids(&page), [3]);
    }

    #[test]
    fn missing_items_means_empty_terminal_page() {
        let page = decode_page::<Item>(json!({ "something": [] }), KEYS);
        assert!(page.items.is_empty());
        assert_eq!(page.next_cursor, None);
        assert!(!page.has_more);
    }

    #[test]
    fn bare_array_is_the_item_list() {
        let page = decode_page::<Item>(json!([{ "id": 1 }, { "id": 2 }]), KEYS);
        assert_eq!(ids(&page), [1, 2]);
        assert!(!page.has_more);
    }

    #[test]
    fn has_more_falls_back_to_cursor_presence() {
        let page = decode_page::<Item>(json!({ "items": [], "nextCursor": "abc" }), KEYS);
        assert_eq!(page.next_cursor.as_deref(), Some("abc"));
        assert!(page.has_more);

        let page = decode_page::<Item>(json!({ "items": [], "nextCursor": "" }), KEYS);
        assert_eq!(page.next_cursor, None);
        assert!(!page.has_more);
    }

    #[test]
    fn explicit_has_more_wins_over_cursor() {
        let page = decode_page::<Item>(
            json!({ "items": [], "next_cursor": 40, "has_more": false }),
            KEYS,
        );
        assert_eq!(page.next_cursor.as_deref(), Some("40"));
        assert!(!page.has_more);
    }

    #[test]
    fn malformed_items_are_dropped() {
        let page = decode_page::<Item>(
            json!({ "items": [{ "id": 1 }, { "id": "nope" }, { "id": 3 }] }),
            KEYS,
        );
        assert_eq!(ids(&page), [1, 3]);
    }
}
