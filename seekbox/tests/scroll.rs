use seekbox::{Direction, Error, ScrollConfig, ScrollContainer, ScrollPolicy, ScrollSync};

fn sync(policy: ScrollPolicy) -> ScrollSync {
    ScrollSync::new(ScrollConfig::default(), policy)
}

// ============================================================================
// Config
// ============================================================================

#[test]
fn test_default_config() {
    let config = ScrollConfig::default();
    assert_eq!(config.viewport_height(), 200);
    assert_eq!(config.row_height(), 38);
    assert_eq!(config.content_height(10), 380);
}

#[test]
fn test_config_rejects_zero_sizes() {
    assert_eq!(ScrollConfig::new(0, 1), Err(Error::ZeroViewportHeight));
    assert_eq!(ScrollConfig::new(6, 0), Err(Error::ZeroRowHeight));
    assert!(ScrollConfig::new(6, 1).is_ok());
}

// ============================================================================
// Container
// ============================================================================

#[test]
fn test_container_clamps_offset() {
    let mut container = ScrollContainer::new(200, 380);
    container.set_scroll_top(500);
    assert_eq!(container.scroll_top(), 180);

    container.scroll_by(-1000);
    assert_eq!(container.scroll_top(), 0);

    container.scroll_by(38);
    assert_eq!(container.scroll_top(), 38);
}

#[test]
fn test_container_without_overflow_never_scrolls() {
    let mut container = ScrollContainer::new(200, 114);
    container.set_scroll_top(50);
    assert_eq!(container.scroll_top(), 0);
}

#[test]
fn test_shrinking_content_reclamps() {
    let mut container = ScrollContainer::new(200, 380);
    container.set_scroll_top(180);
    container.set_content_height(228);
    assert_eq!(container.scroll_top(), 28);
}

#[test]
fn test_visible_rows() {
    let mut container = ScrollContainer::new(200, 380);
    assert_eq!(container.visible_rows(38), 0..6);
    container.set_scroll_top(66);
    assert_eq!(container.visible_rows(38), 1..7);
    container.set_scroll_top(180);
    assert_eq!(container.visible_rows(38), 4..10);
}

#[test]
fn test_visible_rows_single_unit_rows() {
    let mut container = ScrollContainer::new(4, 10);
    container.set_scroll_top(3);
    assert_eq!(container.visible_rows(1), 3..7);
}

// ============================================================================
// Nudge policy
// ============================================================================

#[test]
fn test_missing_container_is_noop() {
    sync(ScrollPolicy::Nudge).sync(None, Direction::Down, 8, 9);
    sync(ScrollPolicy::EnsureVisible).sync(None, Direction::Up, 0, 9);
}

#[test]
fn test_nudge_down_snaps_row_bottom_to_viewport_bottom() {
    let sync = sync(ScrollPolicy::Nudge);
    let mut container = sync.mount(10);

    sync.sync(Some(&mut container), Direction::Down, 3, 4);
    assert_eq!(container.scroll_top(), 0);

    sync.sync(Some(&mut container), Direction::Down, 4, 5);
    assert_eq!(container.scroll_top(), 28);

    sync.sync(Some(&mut container), Direction::Down, 8, 9);
    assert_eq!(container.scroll_top(), 180);
}

#[test]
fn test_nudge_up_moves_one_row_near_top() {
    let sync = sync(ScrollPolicy::Nudge);
    let mut container = sync.mount(10);
    container.set_scroll_top(180);

    // Row 9 starts well below one viewport height.
    sync.sync(Some(&mut container), Direction::Up, 9, 8);
    assert_eq!(container.scroll_top(), 180);

    sync.sync(Some(&mut container), Direction::Up, 5, 4);
    assert_eq!(container.scroll_top(), 142);
}

#[test]
fn test_nudge_up_wrap_does_not_reveal_last_row() {
    let sync = sync(ScrollPolicy::Nudge);
    let mut container = sync.mount(10);
    sync.sync(Some(&mut container), Direction::Up, 0, 9);
    assert_eq!(container.scroll_top(), 0);
}

// ============================================================================
// EnsureVisible policy
// ============================================================================

#[test]
fn test_ensure_visible_reveals_wrapped_row() {
    let sync = sync(ScrollPolicy::EnsureVisible);
    let mut container = sync.mount(10);
    sync.sync(Some(&mut container), Direction::Up, 0, 9);
    assert_eq!(container.scroll_top(), 180);
}

#[test]
fn test_ensure_visible_scrolls_up_to_row_top() {
    let sync = sync(ScrollPolicy::EnsureVisible);
    let mut container = sync.mount(10);
    container.set_scroll_top(180);
    sync.sync(Some(&mut container), Direction::Up, 5, 4);
    assert_eq!(container.scroll_top(), 152);
}

#[test]
fn test_ensure_visible_leaves_visible_rows_alone() {
    let sync = sync(ScrollPolicy::EnsureVisible);
    let mut container = sync.mount(10);
    container.set_scroll_top(60);
    sync.sync(Some(&mut container), Direction::Down, 3, 4);
    assert_eq!(container.scroll_top(), 60);
}
