//! The full operator catalog: every family and every operator id it can emit.
//!
//! Configuration surfaces (mutation levels, the excluded-mutations list,
//! inline directives) are validated against this catalog so that a typo fails
//! at load time instead of silently matching nothing.

use crate::mutators::{
    arithmetic_operator, array_declaration, arrow_function, assignment_operator, boolean_literal,
    conditional_expression, equality_operator, logical_operator, method_expression, object_literal,
    optional_chaining, regex, string_literal, unary_operator, update_operator,
};

/// One mutator family and the operator ids it can produce.
#[derive(Clone, Copy, Debug)]
pub struct Family {
    pub name: &'static str,
    pub operators: &'static [&'static str],
}

pub static FAMILIES: &[Family] = &[
    Family { name: arithmetic_operator::NAME, operators: arithmetic_operator::OPERATORS },
    Family { name: array_declaration::NAME, operators: array_declaration::OPERATORS },
    Family { name: arrow_function::NAME, operators: arrow_function::OPERATORS },
    Family { name: assignment_operator::NAME, operators: assignment_operator::OPERATORS },
    Family { name: boolean_literal::NAME, operators: boolean_literal::OPERATORS },
    Family { name: conditional_expression::NAME, operators: conditional_expression::OPERATORS },
    Family { name: equality_operator::NAME, operators: equality_operator::OPERATORS },
    Family { name: logical_operator::NAME, operators: logical_operator::OPERATORS },
    Family { name: method_expression::NAME, operators: method_expression::OPERATORS },
    Family { name: object_literal::NAME, operators: object_literal::OPERATORS },
    Family { name: optional_chaining::NAME, operators: optional_chaining::OPERATORS },
    Family { name: regex::NAME, operators: regex::OPERATORS },
    Family { name: string_literal::NAME, operators: string_literal::OPERATORS },
    Family { name: unary_operator::NAME, operators: unary_operator::OPERATORS },
    Family { name: update_operator::NAME, operators: update_operator::OPERATORS },
];

pub fn is_family(name: &str) -> bool {
    FAMILIES.iter().any(|f| f.name == name)
}

pub fn is_operator(id: &str) -> bool {
    FAMILIES.iter().any(|f| f.operators.contains(&id))
}

/// The operator ids of `family`, or `None` for an unknown family name.
pub fn operators_of(family: &str) -> Option<&'static [&'static str]> {
    FAMILIES
        .iter()
        .find(|f| f.name == family)
        .map(|f| f.operators)
}
