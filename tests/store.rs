use contact_search::prelude::{Contact, ContactStore};
use proptest::prelude::*;

fn names(contacts: &[&Contact]) -> Vec<String> {
    contacts.iter().map(|c| c.name().to_string()).collect()
}

fn entries() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(("[A-Za-z ]{0,8}", "[0-9]{0,10}"), 0..40)
}

fn build(entries: &[(String, String)]) -> ContactStore {
    let mut store = ContactStore::new();
    for (name, phone) in entries {
        store.add(name, phone);
    }
    store
}

#[test]
fn scenario_from_the_demo() {
    let store = build(&[
        ("Alice".into(), "1234567890".into()),
        ("Bob".into(), "2345678901".into()),
        ("Carol".into(), "3456789012".into()),
        ("Alfred".into(), "4445556666".into()),
    ]);

    assert_eq!(names(&store.search_by_keyword("Al")), ["Alice", "Alfred"]);
    assert_eq!(
        store.find_by_name("bob").map(|c| (c.name(), c.phone())),
        Some(("Bob", "2345678901"))
    );
    assert_eq!(
        names(&store.list_forward()),
        ["Alice", "Bob", "Carol", "Alfred"]
    );
    assert_eq!(
        names(&store.list_backward()),
        ["Alfred", "Carol", "Bob", "Alice"]
    );
}

proptest! {
    #[test]
    fn forward_is_insertion_order_and_backward_its_reverse(entries in entries()) {
        let store = build(&entries);

        let expected: Vec<String> = entries.iter().map(|(n, _)| n.trim().to_string()).collect();
        let forward = names(&store.list_forward());
        let mut backward = names(&store.list_backward());
        backward.reverse();

        prop_assert_eq!(&forward, &expected);
        prop_assert_eq!(backward, forward);
    }

    #[test]
    fn lookup_returns_latest_phone_for_any_casing(entries in entries()) {
        let store = build(&entries);

        for (name, _) in &entries {
            let key = name.trim();
            let latest = entries
                .iter()
                .rev()
                .find(|(n, _)| n.trim().to_lowercase() == key.to_lowercase())
                .map(|(_, p)| p.trim());

            prop_assert_eq!(store.find_by_name(&key.to_uppercase()).map(Contact::phone), latest);
            prop_assert_eq!(store.find_by_name(&key.to_lowercase()).map(Contact::phone), latest);
        }
    }

    #[test]
    fn keyword_search_is_the_matching_subset(entries in entries(), keyword in "[A-Za-z]{0,3}") {
        let store = build(&entries);

        let expected: Vec<String> = entries
            .iter()
            .map(|(n, _)| n.trim().to_string())
            .filter(|n| n.to_lowercase().contains(&keyword.to_lowercase()))
            .collect();

        prop_assert_eq!(names(&store.search_by_keyword(&keyword)), expected);
    }

    #[test]
    fn empty_keyword_returns_everything(entries in entries()) {
        let store = build(&entries);

        prop_assert_eq!(names(&store.search_by_keyword("")), names(&store.list_forward()));
    }

    #[test]
    fn unknown_name_is_not_found(entries in entries()) {
        let store = build(&entries);

        // Generated names never contain digits.
        prop_assert!(store.find_by_name("x0").is_none());
    }
}
