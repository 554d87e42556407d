//! Property-based tests using proptest
//!
//! Random condition trees and statements are generated to check that the
//! placeholders in the SQL text always line up with the argument list.

use proptest::prelude::*;

use sqb::{Condition, SqlQb, Value, Verb, delete, select, update};

/// Strategy for column expressions (no `?`, no quotes)
fn expr_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,7}".prop_map(|s| s.to_string())
}

/// Strategy for bound values
fn value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::Int),
        any::<bool>().prop_map(Value::Bool),
        "[a-zA-Z0-9 ']{0,12}".prop_map(Value::Text),
        Just(Value::Null),
    ]
}

/// Strategy for leaf conditions
fn leaf_strategy() -> impl Strategy<Value = Condition> {
    prop_oneof![
        (expr_strategy(), value_strategy()).prop_map(|(e, v)| Condition::eq(e, v)),
        (expr_strategy(), value_strategy()).prop_map(|(e, v)| Condition::ne(e, v)),
        (expr_strategy(), value_strategy()).prop_map(|(e, v)| Condition::lt(e, v)),
        (expr_strategy(), value_strategy()).prop_map(|(e, v)| Condition::gte(e, v)),
        (expr_strategy(), any::<bool>()).prop_map(|(e, null)| if null {
            Condition::is_null(e)
        } else {
            Condition::is_not_null(e)
        }),
        (expr_strategy(), "[a-z%_]{0,8}").prop_map(|(e, p)| Condition::like(e, p)),
        (expr_strategy(), "[a-z%_]{0,8}").prop_map(|(e, p)| Condition::like_bound(e, p)),
        (expr_strategy(), prop::collection::vec(value_strategy(), 0..5))
            .prop_map(|(e, vs)| Condition::in_list(e, vs)),
        (expr_strategy(), prop::collection::vec(value_strategy(), 0..5))
            .prop_map(|(e, vs)| Condition::not_in(e, vs)),
    ]
}

/// Strategy for arbitrarily nested condition trees
fn condition_strategy() -> impl Strategy<Value = Condition> {
    leaf_strategy().prop_recursive(4, 48, 5, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..5).prop_map(|children| Condition::and(children)),
            prop::collection::vec(inner.clone(), 0..5).prop_map(|children| Condition::or(children)),
            inner.prop_map(Condition::not),
        ]
    })
}

/// Collect the bound values of a tree in depth-first child order.
fn collect_values(condition: &Condition, out: &mut Vec<Value>) {
    match condition {
        Condition::Compare { value, .. } => out.push(value.clone()),
        Condition::LikeBound { pattern, .. } => out.push(pattern.clone()),
        Condition::InList { values, .. } => out.extend(values.iter().cloned()),
        Condition::Template { values, .. } => out.extend(values.iter().cloned()),
        Condition::Group { children, .. } => {
            for child in children {
                collect_values(child, out);
            }
        }
        Condition::Not(inner) => collect_values(inner, out),
        Condition::NullCheck { .. } | Condition::Like { .. } | Condition::Raw(_) => {}
    }
}

fn count_q(sql: &str) -> usize {
    sql.matches('?').count()
}

proptest! {
    /// Every `?` in a condition fragment has exactly one argument
    #[test]
    fn condition_placeholders_match_args(condition in condition_strategy()) {
        let (sql, args) = condition.build();
        prop_assert_eq!(count_q(&sql), args.len());
    }

    /// Arguments come out in the order their values appear in the tree
    #[test]
    fn condition_args_follow_tree_order(condition in condition_strategy()) {
        let (_, args) = condition.build();
        let mut expected = Vec::new();
        collect_values(&condition, &mut expected);
        prop_assert_eq!(args, expected);
    }

    /// Building twice gives the same result
    #[test]
    fn condition_build_is_idempotent(condition in condition_strategy()) {
        prop_assert_eq!(condition.build(), condition.build());
    }

    /// Top-level WHERE conditions behave like one AND group
    #[test]
    fn where_equals_and_group(conditions in prop::collection::vec(condition_strategy(), 0..4)) {
        let built = delete("t").and_where_all(conditions.clone()).build();
        let group = Condition::and(conditions);
        let (fragment, args) = group.build();

        if group.is_empty() {
            prop_assert_eq!(built.sql, "DELETE FROM t");
            prop_assert!(built.args.is_empty());
        } else {
            prop_assert_eq!(built.sql, format!("DELETE FROM t WHERE {fragment}"));
            prop_assert_eq!(built.args, args);
        }
    }

    /// SELECT arguments come only from WHERE, whatever else is configured
    #[test]
    fn select_placeholders_match_args(
        condition in condition_strategy(),
        limit in -5i64..50,
        offset in -5i64..50,
        grouped in any::<bool>(),
    ) {
        let mut qb = select("t").and_where(condition.clone()).limit(limit).offset(offset);
        if grouped {
            qb = qb.group_by("a").having("COUNT(*) > 1").desc("a");
        }
        let built = qb.build();
        prop_assert_eq!(built.placeholder_count(), built.args.len());
        prop_assert_eq!(built.args, condition.build().1);
        prop_assert_eq!(built.sql.contains(" LIMIT "), limit > 0);
        prop_assert_eq!(built.sql.contains(" OFFSET "), offset > 0);
    }

    /// UPDATE arguments are the SET values followed by the WHERE values
    #[test]
    fn update_args_set_then_where(
        sets in prop::collection::vec((expr_strategy(), value_strategy()), 1..6),
        condition in condition_strategy(),
    ) {
        let qb = update("t").set_data(sets.clone()).and_where(condition.clone());
        let built = qb.build();

        // later duplicates replace earlier ones in place
        let mut columns: Vec<(String, Value)> = Vec::new();
        for (column, value) in sets {
            match columns.iter_mut().find(|(c, _)| *c == column) {
                Some(entry) => entry.1 = value,
                None => columns.push((column, value)),
            }
        }
        let mut expected: Vec<Value> = columns.into_iter().map(|(_, v)| v).collect();
        expected.extend(condition.build().1);

        prop_assert_eq!(built.placeholder_count(), built.args.len());
        prop_assert_eq!(built.args, expected);
    }

    /// Verb names parse back regardless of case
    #[test]
    fn verb_parse_round_trip(
        verb in prop_oneof![
            Just(Verb::Select),
            Just(Verb::Insert),
            Just(Verb::Update),
            Just(Verb::Delete),
        ],
        lower in any::<bool>(),
    ) {
        let name = if lower { verb.to_string().to_lowercase() } else { verb.to_string() };
        prop_assert_eq!(name.parse::<Verb>().unwrap(), verb);
    }
}
