//! Property-based tests for selector combination, emission and calc.

use proptest::prelude::*;
use stylecraft::compiler::declaration_value;
use stylecraft::selector::{branches, combine};
use stylecraft::{calc, Compiler, Tree, Unit, Value};

// ============================================================================
// Test helpers
// ============================================================================

fn ident() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,5}"
}

fn selector_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(ident(), 1..4)
}

fn unit() -> impl Strategy<Value = Unit> {
    (0..Unit::ALL.len()).prop_map(|i| Unit::ALL[i])
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Zero is unitless; every other number carries the unit.
    #[test]
    fn numbers_carry_the_unit_unless_zero(n in -1000i32..1000, unit in unit()) {
        let text = declaration_value(&Value::from(n), unit).unwrap().unwrap();
        if n == 0 {
            prop_assert_eq!(text, "0");
        } else {
            prop_assert_eq!(text, format!("{}{}", n, unit));
        }
    }

    /// A pseudo key lands on every parent branch.
    #[test]
    fn pseudo_applies_to_every_branch(parents in selector_list(), pseudo in ident()) {
        let combined = combine(&parents.join(", "), &format!("${}", pseudo));
        let out = branches(&combined);
        prop_assert_eq!(out.len(), parents.len());
        for (branch, parent) in out.iter().zip(&parents) {
            prop_assert_eq!(branch.to_string(), format!("{}:{}", parent, pseudo));
        }
    }

    /// Descendant keys expand to the full cross product, parent-major.
    #[test]
    fn descendant_is_a_cross_product(parents in selector_list(), children in selector_list()) {
        let combined = combine(&parents.join(", "), &children.join(", "));
        let out = branches(&combined);
        prop_assert_eq!(out.len(), parents.len() * children.len());
        prop_assert_eq!(out[0].to_string(), format!("{} {}", parents[0], children[0]));
    }

    /// Siblings reaching one selector merge into a single rule, in order.
    #[test]
    fn same_selector_merges(first in 1usize..5, second in 1usize..5) {
        let block = |prefix: &str, count: usize| -> Tree {
            (0..count).map(|i| (format!("{}{}", prefix, i), "x")).collect()
        };
        let tree = Tree::new()
            .add("div", Tree::new().add("p", block("a", first)))
            .add("$div p$", block("b", second));

        let compiled = Compiler::new(Unit::Px).compile(&tree);
        let declarations = compiled.get("div p").unwrap();
        prop_assert_eq!(declarations.len(), first + second);
        prop_assert_eq!(declarations[0].clone(), "a0: x");
        prop_assert_eq!(declarations[first].clone(), "b0: x");
    }

    /// Mixed em and px sums resolve to whole pixels.
    #[test]
    fn calc_sums_em_and_px(px in -500i32..500, em in 0i32..50, size in 1i32..32) {
        let expression = format!("{}px + {}em", px, em);
        let expected = px + em * size;
        prop_assert_eq!(calc(&expression, size as f64).unwrap(), format!("{}px", expected));
    }
}
