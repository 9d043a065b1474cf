use ratatui::layout::{Position, Rect};
use role_preview::popover::{PopoverFocus, Selection, SwatchRegion};
use role_preview::role::ColorSlot;

fn region(role_id: u32, slot: ColorSlot, x: u16, y: u16) -> SwatchRegion {
    SwatchRegion {
        role_id,
        slot,
        area: Rect::new(x, y, 7, 1),
    }
}

#[test]
fn test_toggle_opens_and_closes_the_same_slot() {
    let mut popover = PopoverFocus::default();
    assert!(!popover.is_open());

    popover.toggle(1, ColorSlot::One);
    assert!(popover.is_open_for(1, ColorSlot::One));

    popover.toggle(1, ColorSlot::One);
    assert!(!popover.is_open());
}

#[test]
fn test_toggle_switches_directly_between_slots() {
    let mut popover = PopoverFocus::default();
    popover.toggle(1, ColorSlot::One);
    popover.toggle(1, ColorSlot::Two);

    // Never both open: the second toggle replaces the first
    assert_eq!(
        popover.open(),
        Some(Selection {
            role_id: 1,
            slot: ColorSlot::Two
        })
    );
}

#[test]
fn test_toggle_switches_between_roles() {
    let mut popover = PopoverFocus::default();
    popover.toggle(1, ColorSlot::One);
    popover.toggle(2, ColorSlot::One);

    assert!(popover.is_open_for(2, ColorSlot::One));
    assert!(!popover.is_open_for(1, ColorSlot::One));
}

#[test]
fn test_outside_click_closes_open_picker() {
    let mut popover = PopoverFocus::default();
    popover.toggle(1, ColorSlot::One);

    let regions = [
        region(1, ColorSlot::One, 2, 3),
        region(1, ColorSlot::Two, 10, 3),
    ];
    let closed = popover.handle_click(Position::new(50, 20), &regions);

    assert!(closed);
    assert!(!popover.is_open());
}

#[test]
fn test_click_inside_own_swatch_keeps_picker_open() {
    let mut popover = PopoverFocus::default();
    popover.toggle(1, ColorSlot::One);

    let regions = [
        region(1, ColorSlot::One, 2, 3),
        region(1, ColorSlot::Two, 10, 3),
    ];
    let closed = popover.handle_click(Position::new(4, 3), &regions);

    assert!(!closed);
    assert!(popover.is_open_for(1, ColorSlot::One));
}

#[test]
fn test_click_inside_any_roles_swatch_keeps_picker_open() {
    let mut popover = PopoverFocus::default();
    popover.toggle(1, ColorSlot::One);

    // The region belongs to a different role; the click still counts as
    // inside the color-button area
    let regions = [region(2, ColorSlot::Two, 10, 5)];
    let closed = popover.handle_click(Position::new(12, 5), &regions);

    assert!(!closed);
    assert!(popover.is_open());
}

#[test]
fn test_click_with_no_regions_counts_as_outside() {
    // The interaction target vanished from the layout entirely
    let mut popover = PopoverFocus::default();
    popover.toggle(3, ColorSlot::Two);

    let closed = popover.handle_click(Position::new(0, 0), &[]);

    assert!(closed);
    assert!(!popover.is_open());
}

#[test]
fn test_click_while_closed_changes_nothing() {
    let mut popover = PopoverFocus::default();
    let regions = [region(1, ColorSlot::One, 2, 3)];

    assert!(!popover.handle_click(Position::new(50, 20), &regions));
    assert!(!popover.is_open());
}

#[test]
fn test_clear_resets_selection() {
    let mut popover = PopoverFocus::default();
    popover.toggle(1, ColorSlot::One);
    popover.clear();
    assert_eq!(popover.open(), None);
}
