use super::*;

fn record(id: &str, slot: Option<i32>) -> AffiliationRecord {
    let base = AffiliationRecord::new(id, id.to_uppercase(), format!("/logos/{id}.png"));
    match slot {
        Some(slot) => base.with_slot(slot),
        None => base,
    }
}

fn ids(grid: &GridSlotAssignment) -> Vec<Option<&str>> {
    grid.iter().map(|slot| slot.map(|r| r.id.as_str())).collect()
}

// =============================================================
// default_slot
// =============================================================

#[test]
fn default_slot_prefers_explicit_slot() {
    assert_eq!(default_slot(&record("a", Some(7)), 0), 7);
    assert_eq!(default_slot(&record("a", Some(-1)), 3), -1);
}

#[test]
fn default_slot_falls_back_to_index() {
    assert_eq!(default_slot(&record("a", None), 5), 5);
    assert_eq!(default_slot(&record("a", None), 11), 11);
}

// =============================================================
// place_in_grid
// =============================================================

#[test]
fn empty_input_gives_nine_empty_slots() {
    let grid = place_in_grid(&[]);
    assert_eq!(grid.iter().count(), GRID_SLOTS);
    assert!(grid.is_empty());
}

#[test]
fn triangle_example() {
    let grid = place_in_grid(&[record("a", Some(0)), record("b", Some(2)), record("c", Some(4))]);
    assert_eq!(
        ids(&grid),
        vec![Some("a"), None, Some("b"), None, Some("c"), None, None, None, None]
    );
}

#[test]
fn explicit_slots_ignore_input_order() {
    let orders = [["a", "b", "c"], ["c", "a", "b"], ["b", "c", "a"]];
    for order in orders {
        let records: Vec<_> = order
            .iter()
            .map(|id| {
                let slot = match *id {
                    "a" => 0,
                    "b" => 2,
                    _ => 4,
                };
                record(id, Some(slot))
            })
            .collect();
        let grid = place_in_grid(&records);
        assert_eq!(grid.position_of("a"), Some(0));
        assert_eq!(grid.position_of("b"), Some(2));
        assert_eq!(grid.position_of("c"), Some(4));
        assert_eq!(grid.occupied_count(), 3);
    }
}

#[test]
fn records_without_slot_use_sequence_index() {
    let grid = place_in_grid(&[record("a", None), record("b", None), record("c", Some(8))]);
    assert_eq!(grid.position_of("a"), Some(0));
    assert_eq!(grid.position_of("b"), Some(1));
    assert_eq!(grid.position_of("c"), Some(8));
}

#[test]
fn collision_is_last_writer_wins() {
    let grid = place_in_grid(&[record("first", Some(3)), record("second", Some(3))]);
    assert_eq!(grid.get(3).map(|r| r.id.as_str()), Some("second"));
    assert_eq!(grid.position_of("first"), None);
    assert_eq!(grid.occupied_count(), 1);
}

#[test]
fn implicit_index_can_collide_with_explicit_slot() {
    // "b" has no slot and lands on index 1, overwriting "a".
    let grid = place_in_grid(&[record("a", Some(1)), record("b", None)]);
    assert_eq!(grid.get(1).map(|r| r.id.as_str()), Some("b"));
}

#[test]
fn out_of_range_slot_is_dropped() {
    let grid = place_in_grid(&[record("a", Some(0)), record("far", Some(12)), record("neg", Some(-1))]);
    assert_eq!(ids(&grid), vec![Some("a"), None, None, None, None, None, None, None, None]);
}

#[test]
fn more_than_nine_records_without_slots_drops_overflow() {
    let records: Vec<_> = (0..12).map(|i| record(&format!("r{i}"), None)).collect();
    let grid = place_in_grid(&records);
    assert_eq!(grid.occupied_count(), GRID_SLOTS);
    assert_eq!(grid.position_of("r8"), Some(8));
    assert_eq!(grid.position_of("r9"), None);
}

#[test]
fn rows_are_three_by_three() {
    let grid = place_in_grid(&[record("a", Some(4))]);
    let rows: Vec<_> = grid.rows().collect();
    assert_eq!(rows.len(), GRID_COLUMNS);
    assert!(rows.iter().all(|row| row.len() == GRID_COLUMNS));
    assert_eq!(rows[1][1].as_ref().map(|r| r.id.as_str()), Some("a"));
}

#[test]
fn get_out_of_range_is_none() {
    assert!(place_in_grid(&[record("a", None)]).get(9).is_none());
}

// =============================================================
// Records
// =============================================================

#[test]
fn href_defaults_to_hash() {
    assert_eq!(record("a", None).href(), "#");
    assert_eq!(record("a", None).with_link("https://iisc.ac.in").href(), "https://iisc.ac.in");
}

#[test]
fn record_deserializes_with_optional_fields() {
    let parsed: AffiliationRecord =
        serde_json::from_str(r#"{"id":"a1","name":"IISc","logo_reference":"/iisc.png"}"#).unwrap();
    assert_eq!(parsed.preferred_slot, None);
    assert_eq!(parsed.link_url, None);
}

// =============================================================
// themed_logo_url
// =============================================================

#[test]
fn themed_logo_url_swaps_background_in_light_mode() {
    let url = "https://ui-avatars.com/api/?name=IISc&background=262626&color=fff";
    assert_eq!(
        themed_logo_url(url, Theme::Light),
        "https://ui-avatars.com/api/?name=IISc&background=f5f5f5&color=fff"
    );
    assert_eq!(themed_logo_url(url, Theme::Dark), url);
}

#[test]
fn themed_logo_url_leaves_plain_urls_alone() {
    assert_eq!(themed_logo_url("/logos/nsut.png", Theme::Light), "/logos/nsut.png");
}
