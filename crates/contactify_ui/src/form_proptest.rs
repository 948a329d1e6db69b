#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::form::merged_record;
    use crate::test_support::contact;
    use contactify_common::ContactDraft;

    proptest! {
        // The merge takes every submitted field and keeps the original's
        // identity: submitted values always win, the id and the timestamps
        // always come from the original.
        #[test]
        fn the_merge_prefers_submitted_fields_and_keeps_the_identity(
            id in "[a-f0-9]{6}",
            orig_last in "[A-Za-z]{1,12}",
            orig_first in "[A-Za-z]{1,12}",
            new_last in "[A-Za-z]{1,12}",
            new_first in "[A-Za-z]{1,12}",
            new_phone in "[0-9]{6,12}",
        ) {
            let original = contact(&id, &orig_last, &orig_first);
            let fields = ContactDraft {
                last_name: new_last.clone(),
                first_name: new_first.clone(),
                email: original.email.clone(),
                phone: new_phone.clone(),
            };

            let merged = merged_record(&original, &fields);

            prop_assert_eq!(merged.id, original.id);
            prop_assert_eq!(merged.last_name, new_last);
            prop_assert_eq!(merged.first_name, new_first);
            prop_assert_eq!(merged.phone, new_phone);
            // An unedited field falls back to the original's value
            prop_assert_eq!(merged.email, original.email);
            prop_assert_eq!(merged.created_at, original.created_at);
            prop_assert_eq!(merged.updated_at, original.updated_at);
        }
    }
}
