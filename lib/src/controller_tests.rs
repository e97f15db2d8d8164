use super::*;

fn setup() -> ListController {
    let mut list = ListController::new();
    list.add("Milk", "2", Unit::Packets).unwrap();
    list.add("Rice", "", Unit::Kilograms).unwrap();
    list.add("Sugar", "500", Unit::Grams).unwrap();
    list
}

fn ids(list: &ListController) -> Vec<u32> {
    list.items().iter().map(|i| i.id.0).collect()
}

#[test]
fn adds_item_to_empty_list() {
    let mut list = ListController::new();

    let id = list.add("Milk", "2", Unit::Packets).unwrap();

    assert_eq!(id, ItemId(1));
    assert_eq!(
        list.items(),
        &[ShoppingItem {
            id: ItemId(1),
            name: "Milk".to_string(),
            quantity: 2,
            unit: Unit::Packets,
            is_editing: false,
        }]
    );
}

#[test]
fn add_defaults_missing_quantity_to_one() {
    let mut list = ListController::new();
    let id = list.add("Rice", "", Unit::Kilograms).unwrap();
    assert_eq!(list.get(id).unwrap().quantity, 1);
}

#[test]
fn add_defaults_garbage_quantity_to_one() {
    let mut list = ListController::new();
    let id = list.add("Eggs", "a dozen", Unit::Packets).unwrap();
    assert_eq!(list.get(id).unwrap().quantity, 1);
}

#[test]
fn add_grows_list_by_one_for_valid_input() {
    let mut list = setup();

    for (name, qty, unit) in [
        ("Tea", "3", Unit::Packets),
        (" Oats ", "x", Unit::Grams),
        ("Flour", "-2", Unit::Kilograms),
    ] {
        let before = list.len();
        let id = list.add(name, qty, unit).unwrap();
        assert_eq!(list.len(), before + 1);

        let item = list.get(id).unwrap();
        assert_eq!(item.name, name);
        assert_eq!(item.quantity, parse_quantity(qty));
        assert_eq!(item.unit, unit);
        assert!(!item.is_editing);
    }
}

#[test]
fn add_rejects_blank_name() {
    let mut list = setup();
    let before = list.clone();

    assert_eq!(
        list.add("", "5", Unit::Kilograms),
        Err(ShopListError::InvalidAddInput)
    );
    assert_eq!(
        list.add("   \t", "5", Unit::Kilograms),
        Err(ShopListError::InvalidAddInput)
    );
    assert_eq!(list, before);
}

#[test]
fn add_rejects_placeholder_unit() {
    let mut list = setup();
    let before = list.clone();

    let err = list.add("Milk", "2", Unit::Placeholder).unwrap_err();

    assert_eq!(err.to_string(), "Enter Valid Name & Unit");
    assert_eq!(list, before);
}

#[test]
fn rejected_add_keeps_dialog_open() {
    let mut list = ListController::new();
    list.open_add_dialog();
    list.set_draft_name("Milk".to_string());

    assert!(list.confirm_add().is_err());
    assert!(list.draft().visible);
    assert_eq!(list.draft().name, "Milk");
}

#[test]
fn successful_add_resets_and_closes_dialog() {
    let mut list = ListController::new();
    list.open_add_dialog();
    list.set_draft_name("Milk".to_string());
    list.set_draft_quantity("2".to_string());
    list.select_unit(Unit::Packets);

    let id = list.confirm_add().unwrap();

    assert_eq!(list.get(id).unwrap().quantity_label(), "2pkt");
    assert_eq!(list.draft(), &AddDraft::default());
}

#[test]
fn cancel_discards_buffers() {
    let mut list = ListController::new();
    list.open_add_dialog();
    list.set_draft_name("Milk".to_string());
    list.set_draft_quantity("2".to_string());
    list.toggle_unit_menu();
    list.move_unit_cursor(1);

    list.cancel_add_dialog();

    assert!(list.is_empty());
    assert_eq!(list.draft(), &AddDraft::default());
}

#[test]
fn selecting_unit_from_menu() {
    let mut list = ListController::new();
    list.open_add_dialog();
    list.toggle_unit_menu();
    assert!(list.draft().unit_menu_expanded);

    list.move_unit_cursor(1);
    list.select_unit_at_cursor();

    assert_eq!(list.draft().unit, Unit::Kilograms);
    assert!(!list.draft().unit_menu_expanded);
}

#[test]
fn begin_edit_enforces_single_editor() {
    let mut list = setup();

    for id in [1, 3, 2, 2, 99, 1] {
        list.begin_edit(ItemId(id));
        let editing = list.items().iter().filter(|i| i.is_editing).count();
        assert!(editing <= 1);
    }

    assert_eq!(list.editing_item().unwrap().id, ItemId(1));
}

#[test]
fn begin_edit_seeds_editor_buffers() {
    let mut list = setup();

    list.begin_edit(ItemId(3));

    let draft = list.edit_draft().unwrap();
    assert_eq!(draft.id, ItemId(3));
    assert_eq!(draft.name, "Sugar");
    assert_eq!(draft.quantity, "500");
}

#[test]
fn begin_edit_unknown_id_is_noop() {
    let mut list = setup();
    let before = list.clone();
    list.begin_edit(ItemId(42));
    assert_eq!(list, before);
}

#[test]
fn commit_edit_updates_name_and_quantity() {
    let mut list = ListController::new();
    list.add("Milk", "2", Unit::Packets).unwrap();

    list.begin_edit(ItemId(1));
    list.commit_edit(ItemId(1), "Bread", 3);

    assert_eq!(
        list.get(ItemId(1)).unwrap(),
        &ShoppingItem {
            id: ItemId(1),
            name: "Bread".to_string(),
            quantity: 3,
            unit: Unit::Packets,
            is_editing: false,
        }
    );
    assert!(list.edit_draft().is_none());
}

#[test]
fn commit_edit_unknown_id_still_exits_editing() {
    let mut list = setup();
    list.begin_edit(ItemId(2));

    list.commit_edit(ItemId(42), "Nope", 9);

    assert!(list.editing_item().is_none());
    assert_eq!(list.get(ItemId(2)).unwrap().name, "Rice");
}

#[test]
fn confirm_edit_uses_buffers() {
    let mut list = setup();
    list.begin_edit(ItemId(2));
    list.set_edit_name("Basmati".to_string());
    list.set_edit_quantity("lots".to_string());

    list.confirm_edit();

    let item = list.get(ItemId(2)).unwrap();
    assert_eq!(item.name, "Basmati");
    assert_eq!(item.quantity, 1);
    assert_eq!(item.unit, Unit::Kilograms);
    assert!(!item.is_editing);
}

#[test]
fn cancel_edit_leaves_item_unchanged() {
    let mut list = setup();
    list.begin_edit(ItemId(1));
    list.set_edit_name("Oat Milk".to_string());

    list.cancel_edit();

    let item = list.get(ItemId(1)).unwrap();
    assert_eq!(item.name, "Milk");
    assert!(!item.is_editing);
    assert!(list.edit_draft().is_none());
}

#[test]
fn delete_removes_only_matching_item() {
    let mut list = setup();
    let first = list.get(ItemId(1)).unwrap().clone();
    let third = list.get(ItemId(3)).unwrap().clone();

    list.delete(ItemId(2));

    assert_eq!(list.items(), &[first, third]);
}

#[test]
fn delete_unknown_id_is_noop() {
    let mut list = setup();
    let before = list.clone();
    list.delete(ItemId(7));
    assert_eq!(list, before);
}

#[test]
fn delete_of_edited_item_clears_editor() {
    let mut list = setup();
    list.begin_edit(ItemId(2));
    list.delete(ItemId(2));
    assert!(list.edit_draft().is_none());
    assert!(list.editing_item().is_none());
}

#[test]
fn ids_are_not_reused_after_delete() {
    let mut list = setup();
    list.delete(ItemId(2));

    let id = list.add("Bread", "1", Unit::Packets).unwrap();

    assert_eq!(id, ItemId(4));
    assert_eq!(ids(&list), vec![1, 3, 4]);
}
