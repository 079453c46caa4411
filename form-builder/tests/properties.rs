//! Property tests for data-name derivation and option list invariants.

use form_builder::{
    FieldKind, FieldType, FormDefinition, FormValues, OptionId, OptionList, derive_data_name,
    is_valid_data_name, validate,
};
use form_builder::{Field, FieldPatch};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum OptionOp {
    Add,
    Delete(usize),
    DeleteUnknown,
    SetDefault(usize),
    ToggleChecked(usize),
}

fn option_op() -> impl Strategy<Value = OptionOp> {
    prop_oneof![
        Just(OptionOp::Add),
        (0usize..8).prop_map(OptionOp::Delete),
        Just(OptionOp::DeleteUnknown),
        (0usize..8).prop_map(OptionOp::SetDefault),
        (0usize..8).prop_map(OptionOp::ToggleChecked),
    ]
}

/// Pick an existing option by index, wrapping around.
fn nth_id(list: &OptionList, index: usize) -> OptionId {
    list.options()[index % list.len()].id
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    #[test]
    fn data_names_only_use_allowed_characters(label in any::<String>()) {
        let name = derive_data_name(&label);
        prop_assert!(is_valid_data_name(&name), "label {:?} gave {:?}", label, name);
    }

    #[test]
    fn data_name_derivation_is_idempotent(label in "[ a-zA-Z0-9_!?\\-\t]{0,40}") {
        let once = derive_data_name(&label);
        prop_assert_eq!(derive_data_name(&once), once);
    }

    #[test]
    fn option_lists_never_empty_and_keep_one_default(ops in prop::collection::vec(option_op(), 0..40)) {
        let mut list = OptionList::seeded("Option 1");
        let mut last_default = None;

        for op in ops {
            match op {
                OptionOp::Add => {
                    list.add();
                }
                OptionOp::Delete(i) => {
                    let id = nth_id(&list, i);
                    let deleted = list.delete(id);
                    if deleted && last_default == Some(id) {
                        last_default = None;
                    }
                }
                OptionOp::DeleteUnknown => {
                    prop_assert!(!list.delete(OptionId::new()));
                }
                OptionOp::SetDefault(i) => {
                    let id = nth_id(&list, i);
                    list.set_default(id);
                    last_default = Some(id);
                }
                OptionOp::ToggleChecked(i) => {
                    let id = nth_id(&list, i);
                    let before: Vec<bool> = list.iter().map(|o| o.checked).collect();
                    list.toggle_checked(id);
                    for (option, was) in list.iter().zip(before) {
                        if option.id == id {
                            prop_assert_ne!(option.checked, was);
                        } else {
                            prop_assert_eq!(option.checked, was);
                        }
                    }
                }
            }

            prop_assert!(list.len() >= 1);
            let defaults: Vec<OptionId> = list.iter().filter(|o| o.is_default).map(|o| o.id).collect();
            prop_assert!(defaults.len() <= 1);
            prop_assert_eq!(defaults.first().copied(), last_default);
        }
    }

    #[test]
    fn validate_reports_exactly_the_required_fields(required in prop::collection::vec(any::<bool>(), 0..12)) {
        let mut form = FormDefinition::new();
        for (i, is_required) in required.iter().enumerate() {
            let field_type = FieldType::ALL[i % FieldType::ALL.len()];
            let mut field = Field::new("Question", FieldKind::new(field_type, "Option 1"));
            field.apply(FieldPatch::new().required(*is_required));
            form.fields_mut().push(field);
        }

        let errors = validate(&form, &FormValues::new());
        let expected = required.iter().filter(|r| **r).count();
        prop_assert_eq!(errors.len(), expected);
        for field in form.fields() {
            prop_assert_eq!(errors.contains(field.id()), field.is_required());
        }
    }
}
