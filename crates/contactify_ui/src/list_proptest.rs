#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::list::filter_contacts;
    use crate::test_support::contact;
    use contactify_common::Contact;

    fn contacts_from(names: &[(String, String)]) -> Vec<Contact> {
        names
            .iter()
            .enumerate()
            .map(|(i, (last, first))| contact(&i.to_string(), last, first))
            .collect()
    }

    fn matches(contact: &Contact, needle: &str) -> bool {
        contact.first_name.to_lowercase().contains(needle)
            || contact.last_name.to_lowercase().contains(needle)
    }

    proptest! {
        // The displayed set is exactly the set of matching contacts
        #[test]
        fn the_filtered_view_is_exactly_the_matching_subset(
            names in proptest::collection::vec(("[A-Za-z]{1,12}", "[A-Za-z]{1,12}"), 0..20),
            filter in "[A-Za-z]{0,6}",
        ) {
            let contacts = contacts_from(&names);
            let shown = filter_contacts(&contacts, &filter);
            let needle = filter.trim().to_lowercase();

            if needle.is_empty() {
                prop_assert_eq!(shown.len(), contacts.len());
            } else {
                for c in &shown {
                    prop_assert!(matches(c, &needle));
                }
                let expected = contacts.iter().filter(|c| matches(c, &needle)).count();
                prop_assert_eq!(shown.len(), expected);
            }
        }

        // Whitespace padding around the filter never changes the result
        #[test]
        fn surrounding_whitespace_does_not_change_the_view(
            names in proptest::collection::vec(("[A-Za-z]{1,12}", "[A-Za-z]{1,12}"), 0..10),
            filter in "[A-Za-z]{0,6}",
        ) {
            let contacts = contacts_from(&names);
            let padded = format!("  {}\t", filter);
            prop_assert_eq!(
                filter_contacts(&contacts, &filter).len(),
                filter_contacts(&contacts, &padded).len()
            );
        }

        // A contact always shows up when filtered by a piece of its own name
        #[test]
        fn a_contact_matches_a_fragment_of_its_own_name(
            last in "[A-Za-z]{2,12}",
            first in "[A-Za-z]{2,12}",
            start in 0usize..2,
        ) {
            let contacts = vec![contact("1", &last, &first)];
            let fragment: String = last.chars().skip(start).take(3).collect();
            let shown = filter_contacts(&contacts, &fragment);
            prop_assert_eq!(shown.len(), 1);
        }
    }
}
