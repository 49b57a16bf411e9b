//! End-to-end checks against the crate's public surface.

use colorramp::{ColorList, ListKind, color_info, hex_to_rgb, light_to_dark, random_color, rgb_to_hex};

#[test]
fn ramp_neighbors_convert_back_to_their_own_hex() {
    let ramp = light_to_dark("#336699", 8).unwrap();
    for hex in &ramp {
        assert_eq!(&rgb_to_hex(hex_to_rgb(hex).unwrap()), hex);
    }
}

#[test]
fn random_colors_feed_the_ramp() {
    for _ in 0..50 {
        let base = random_color();
        let ramp = light_to_dark(&base, 6).unwrap();
        assert_eq!(ramp.iter().filter(|c| **c == base).count(), 1, "{base}: {ramp:?}");
        assert!(ramp.len() <= 7);
    }
}

#[test]
fn ramp_entries_describe_cleanly() {
    for hex in light_to_dark("#808080", 4).unwrap() {
        let info = color_info(Some(&hex)).unwrap();
        assert_eq!(info.hex, hex);
        assert!(info.rgb.starts_with("rgb("));
    }
}

#[test]
fn history_tracks_most_recent_ramp_picks() {
    let ramp = light_to_dark("#808080", 4).unwrap();
    let mut history = ColorList::from_json(ListKind::History, None).unwrap();
    for hex in &ramp {
        history.add(hex).unwrap();
    }
    history.add(&ramp[0]).unwrap();

    let stored = history.to_json().unwrap();
    let reloaded = ColorList::from_json(ListKind::History, Some(&stored)).unwrap();
    assert_eq!(reloaded.get().len(), ramp.len());
    assert_eq!(reloaded.get()[0], ramp[0]);
    assert_eq!(reloaded.get()[1], ramp[4]);
}
