use clap::Parser;
use ratatui::layout::Rect;
use role_preview::cli::Cli;
use role_preview::config::Settings;
use role_preview::popover::SwatchRegion;
use role_preview::role::ColorSlot;
use role_preview::theme::ThemeKind;
use role_preview::tui::{Model, msg::Msg};
use tuirealm::Update;

fn model() -> Model {
    let cli = Cli::try_parse_from(["roleprev", "--interactive"]).unwrap();
    Model::new(&cli, Settings::default())
}

fn apply(model: &mut Model, msg: Msg) {
    let mut current = Some(msg);
    while let Some(m) = current {
        current = model.update(Some(m));
    }
}

#[test]
fn test_add_selects_the_new_role() {
    let mut model = model();
    apply(&mut model, Msg::RoleAdded);

    assert_eq!(model.roles.len(), 3);
    assert_eq!(model.selected, 2);
    assert_eq!(model.roles.roles()[2].name, "Role 3");
}

#[test]
fn test_delete_request_waits_for_confirmation() {
    let mut model = model();
    apply(&mut model, Msg::DeleteRequested(1));

    assert_eq!(model.pending_delete, Some(1));
    // Nothing deleted yet
    assert_eq!(model.roles.len(), 2);
}

#[test]
fn test_delete_cancel_changes_nothing() {
    let mut model = model();
    let before = model.roles.clone();

    apply(&mut model, Msg::DeleteRequested(1));
    apply(&mut model, Msg::DeleteCancelled);

    assert_eq!(model.pending_delete, None);
    assert_eq!(model.roles, before);
}

#[test]
fn test_delete_confirm_removes_and_clamps_selection() {
    let mut model = model();
    model.selected = 1;

    apply(&mut model, Msg::DeleteRequested(2));
    apply(&mut model, Msg::DeleteConfirmed(2));

    assert_eq!(model.roles.len(), 1);
    assert_eq!(model.selected, 0);
    assert_eq!(model.pending_delete, None);
}

#[test]
fn test_delete_request_for_unknown_role_is_ignored() {
    let mut model = model();
    apply(&mut model, Msg::DeleteRequested(99));
    assert_eq!(model.pending_delete, None);
}

#[test]
fn test_deleting_role_with_open_picker_closes_it() {
    let mut model = model();
    apply(&mut model, Msg::PickerToggled(1, ColorSlot::One));
    assert!(model.popover.is_open());

    apply(&mut model, Msg::DeleteRequested(1));
    apply(&mut model, Msg::DeleteConfirmed(1));

    assert!(!model.popover.is_open());
}

#[test]
fn test_picker_toggle_semantics_through_reducer() {
    let mut model = model();

    apply(&mut model, Msg::PickerToggled(1, ColorSlot::One));
    assert!(model.popover.is_open_for(1, ColorSlot::One));

    apply(&mut model, Msg::PickerToggled(2, ColorSlot::Two));
    assert!(model.popover.is_open_for(2, ColorSlot::Two));

    apply(&mut model, Msg::PickerToggled(2, ColorSlot::Two));
    assert!(!model.popover.is_open());
}

#[test]
fn test_color_picked_updates_only_that_slot() {
    let mut model = model();
    apply(
        &mut model,
        Msg::ColorPicked(1, ColorSlot::Two, "#123456".to_string()),
    );

    let role = model.roles.get(1).unwrap();
    assert_eq!(role.color_one, "#4cadd0");
    assert_eq!(role.color_two, "#123456");
}

#[test]
fn test_click_on_swatch_region_toggles_its_picker() {
    let mut model = model();
    model.swatch_regions = vec![SwatchRegion {
        role_id: 2,
        slot: ColorSlot::One,
        area: Rect::new(2, 3, 7, 1),
    }];

    apply(&mut model, Msg::Clicked(4, 3));
    assert!(model.popover.is_open_for(2, ColorSlot::One));

    // A second click on the same swatch closes it again
    apply(&mut model, Msg::Clicked(4, 3));
    assert!(!model.popover.is_open());
}

#[test]
fn test_click_outside_everything_closes_open_picker() {
    let mut model = model();
    model.swatch_regions = vec![SwatchRegion {
        role_id: 1,
        slot: ColorSlot::One,
        area: Rect::new(2, 3, 7, 1),
    }];
    apply(&mut model, Msg::PickerToggled(1, ColorSlot::One));

    apply(&mut model, Msg::Clicked(40, 20));
    assert!(!model.popover.is_open());
}

#[test]
fn test_click_inside_popover_area_keeps_picker_open() {
    let mut model = model();
    apply(&mut model, Msg::PickerToggled(1, ColorSlot::One));
    model.popover_area = Some(Rect::new(10, 5, 40, 9));

    apply(&mut model, Msg::Clicked(20, 8));
    assert!(model.popover.is_open_for(1, ColorSlot::One));
}

#[test]
fn test_move_follows_the_selected_role() {
    let mut model = model();
    model.selected = 0;

    apply(&mut model, Msg::RoleMoved(0, 1));

    assert_eq!(model.selected, 1);
    assert_eq!(model.roles.roles()[1].name, "Example 1");
}

#[test]
fn test_rename_through_reducer() {
    let mut model = model();
    apply(&mut model, Msg::RoleRenamed(2, "Moderators".to_string()));
    assert_eq!(model.roles.get(2).unwrap().name, "Moderators");
}

#[test]
fn test_theme_flag_limits_previews() {
    let cli = Cli::try_parse_from(["roleprev", "--interactive", "--theme", "dark"]).unwrap();
    let model = Model::new(&cli, Settings::default());
    assert_eq!(model.themes, vec![ThemeKind::Dark]);

    let cli = Cli::try_parse_from(["roleprev", "--interactive"]).unwrap();
    let model = Model::new(&cli, Settings::default());
    assert_eq!(model.themes, vec![ThemeKind::Dark, ThemeKind::Light]);
}

#[test]
fn test_help_toggle() {
    let mut model = model();
    apply(&mut model, Msg::ShowHelp);
    assert!(model.show_help);
    apply(&mut model, Msg::HideHelp);
    assert!(!model.show_help);
}
