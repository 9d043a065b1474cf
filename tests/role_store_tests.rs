use role_preview::role::{ColorSlot, DEFAULT_ROLE_COLOR, Role, RoleList, RolePatch};

fn role(id: u32, name: &str, one: &str, two: &str) -> Role {
    Role {
        id,
        name: name.to_string(),
        color_one: one.to_string(),
        color_two: two.to_string(),
    }
}

#[test]
fn test_add_extends_list_with_fresh_id() {
    let mut list = RoleList::new(vec![role(1, "A", "#111111", "#222222")]);
    list.add();

    assert_eq!(list.len(), 2);
    let added = &list.roles()[1];
    assert_eq!(added.id, 2);
    assert_eq!(added.name, "Role 2");
    // Both stops copy the previous last role's first stop
    assert_eq!(added.color_one, "#111111");
    assert_eq!(added.color_two, "#111111");
}

#[test]
fn test_add_to_empty_list_uses_fallback_color() {
    let mut list = RoleList::default();
    list.add();

    assert_eq!(list.len(), 1);
    let added = &list.roles()[0];
    assert_eq!(added.id, 1);
    assert_eq!(added.name, "Role 1");
    assert_eq!(added.color_one, DEFAULT_ROLE_COLOR);
    assert_eq!(added.color_two, DEFAULT_ROLE_COLOR);
}

#[test]
fn test_add_id_stays_unique_after_deletes() {
    let mut list = RoleList::starter();
    list.delete(1);
    list.add();

    // Ids never shrink back: the new id is greater than any id ever present
    let ids: Vec<u32> = list.roles().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![2, 3]);
}

#[test]
fn test_add_ids_strictly_increase() {
    let mut list = RoleList::default();
    for _ in 0..5 {
        list.add();
    }
    let ids: Vec<u32> = list.roles().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_delete_removes_exactly_one_entry() {
    let mut list = RoleList::new(vec![
        role(1, "A", "#111111", "#111111"),
        role(2, "B", "#222222", "#222222"),
        role(3, "C", "#333333", "#333333"),
    ]);
    list.delete(2);

    let ids: Vec<u32> = list.roles().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 3]);
    assert_eq!(list.roles()[0].name, "A");
    assert_eq!(list.roles()[1].name, "C");
}

#[test]
fn test_delete_unknown_id_is_a_noop() {
    let mut list = RoleList::starter();
    let before = list.clone();
    list.delete(99);
    assert_eq!(list, before);
}

#[test]
fn test_update_changes_only_the_named_field() {
    let mut list = RoleList::starter();
    list.update(1, RolePatch::name("X"));

    let updated = list.get(1).unwrap();
    assert_eq!(updated.name, "X");
    assert_eq!(updated.color_one, "#4cadd0");
    assert_eq!(updated.color_two, "#b2f9ff");
    assert_eq!(list.position(1), Some(0));
    // The other role is untouched
    assert_eq!(list.get(2).unwrap().name, "Example 2");
}

#[test]
fn test_update_is_idempotent() {
    let mut list = RoleList::starter();
    list.update(2, RolePatch::color(ColorSlot::Two, "#123456"));
    let once = list.clone();
    list.update(2, RolePatch::color(ColorSlot::Two, "#123456"));
    assert_eq!(list, once);
}

#[test]
fn test_update_unknown_id_is_a_noop() {
    let mut list = RoleList::starter();
    let before = list.clone();
    list.update(42, RolePatch::name("ghost"));
    assert_eq!(list, before);
}

#[test]
fn test_update_does_not_validate_colors_or_names() {
    let mut list = RoleList::starter();
    list.update(1, RolePatch::name(""));
    list.update(1, RolePatch::color(ColorSlot::One, "not a color"));

    let updated = list.get(1).unwrap();
    assert_eq!(updated.name, "");
    assert_eq!(updated.color_one, "not a color");
}

#[test]
fn test_reorder_moves_element_and_preserves_relative_order() {
    let mut list = RoleList::new(vec![
        role(1, "A", "#111111", "#111111"),
        role(2, "B", "#222222", "#222222"),
        role(3, "C", "#333333", "#333333"),
        role(4, "D", "#444444", "#444444"),
    ]);
    list.reorder(0, 2);

    let names: Vec<&str> = list.roles().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["B", "C", "A", "D"]);
}

#[test]
fn test_reorder_backwards() {
    let mut list = RoleList::new(vec![
        role(1, "A", "#111111", "#111111"),
        role(2, "B", "#222222", "#222222"),
        role(3, "C", "#333333", "#333333"),
    ]);
    list.reorder(2, 0);

    let names: Vec<&str> = list.roles().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["C", "A", "B"]);
}

#[test]
fn test_reorder_same_index_is_a_noop() {
    let mut list = RoleList::starter();
    let before = list.clone();
    list.reorder(1, 1);
    assert_eq!(list, before);
}

#[test]
fn test_reorder_out_of_bounds_is_a_noop() {
    let mut list = RoleList::starter();
    let before = list.clone();
    list.reorder(0, 7);
    list.reorder(7, 0);
    assert_eq!(list, before);
}

#[test]
fn test_reorder_keeps_ids_stable() {
    let mut list = RoleList::starter();
    list.reorder(0, 1);
    assert_eq!(list.get(1).unwrap().name, "Example 1");
    assert_eq!(list.position(1), Some(1));
    assert_eq!(list.position(2), Some(0));
}
