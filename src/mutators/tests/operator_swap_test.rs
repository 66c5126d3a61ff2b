use crate::{
    ast::{AssignOp, BinaryOp, Expr, ExprKind, LogicalOp, ParentContext, Target, UnaryOp, UpdateOp},
    mutators::{
        arithmetic_operator::ArithmeticOperatorMutator,
        assignment_operator::AssignmentOperatorMutator,
        equality_operator::EqualityOperatorMutator,
        logical_operator::LogicalOperatorMutator,
        tests::helper::*,
        unary_operator::UnaryOperatorMutator,
        update_operator::UpdateOperatorMutator,
    },
};

fn num(raw: &str) -> Expr {
    Expr::number(raw)
}

#[test]
fn arithmetic_swaps_every_operator() {
    let cases = [
        (BinaryOp::Add, BinaryOp::Sub),
        (BinaryOp::Sub, BinaryOp::Add),
        (BinaryOp::Mul, BinaryOp::Div),
        (BinaryOp::Div, BinaryOp::Mul),
        (BinaryOp::Rem, BinaryOp::Mul),
    ];
    for (from, to) in cases {
        let expr = Expr::binary(from, num("1"), num("2"));
        let mutables = mutate_expr(&ArithmeticOperatorMutator, &expr);
        assert_eq!(mutables.len(), 1, "{from:?}");
        let ExprKind::Binary { op, .. } = &expr_replacement(&mutables[0]).kind else {
            panic!("not a binary replacement");
        };
        assert_eq!(*op, to);
    }
}

#[test]
fn arithmetic_skips_string_concatenation() {
    let concat = Expr::binary(BinaryOp::Add, Expr::ident("a"), Expr::string("s"));
    assert!(mutate_expr(&ArithmeticOperatorMutator, &concat).is_empty());

    // (a + "s") + b: the nested right operand decides the left's type
    let nested = Expr::binary(
        BinaryOp::Add,
        Expr::binary(BinaryOp::Add, Expr::ident("a"), Expr::string("s")),
        Expr::ident("b"),
    );
    assert!(mutate_expr(&ArithmeticOperatorMutator, &nested).is_empty());

    // (a * b) + c stays numeric
    let numeric = Expr::binary(
        BinaryOp::Add,
        Expr::binary(BinaryOp::Mul, Expr::ident("a"), Expr::ident("b")),
        Expr::ident("c"),
    );
    assert_eq!(mutate_expr(&ArithmeticOperatorMutator, &numeric).len(), 1);
}

#[test]
fn equality_relational_operators_get_boundary_and_negation() {
    let expr = Expr::binary(BinaryOp::Lt, Expr::ident("a"), Expr::ident("b"));
    let mutables = mutate_expr(&EqualityOperatorMutator, &expr);
    assert_eq!(
        operators(&mutables),
        vec![
            "EqualityOperator_LessThanOperator_Boundary",
            "EqualityOperator_LessThanOperator_ToGreaterThanEqualOperator",
        ]
    );

    let replaced: Vec<BinaryOp> = mutables
        .iter()
        .map(|m| match &expr_replacement(m).kind {
            ExprKind::Binary { op, .. } => *op,
            _ => panic!("not binary"),
        })
        .collect();
    assert_eq!(replaced, vec![BinaryOp::Le, BinaryOp::Ge]);
}

#[test]
fn equality_strict_operators_only_negate() {
    let expr = Expr::binary(BinaryOp::StrictEq, Expr::ident("a"), Expr::ident("b"));
    let mutables = mutate_expr(&EqualityOperatorMutator, &expr);
    assert_eq!(
        operators(&mutables),
        vec!["EqualityOperator_StrictEqualityOperator_ToStrictInequalityOperator"]
    );
}

#[test]
fn equality_ignores_instanceof_and_in() {
    for op in [BinaryOp::InstanceOf, BinaryOp::In, BinaryOp::BitAnd] {
        let expr = Expr::binary(op, Expr::ident("a"), Expr::ident("b"));
        assert!(mutate_expr(&EqualityOperatorMutator, &expr).is_empty());
    }
}

#[test]
fn logical_operators_swap_and_nullish_goes_to_and() {
    let and = Expr::logical(LogicalOp::And, Expr::ident("a"), Expr::ident("b"));
    let or = Expr::logical(LogicalOp::Or, Expr::ident("a"), Expr::ident("b"));
    let nullish = Expr::logical(LogicalOp::Nullish, Expr::ident("a"), Expr::ident("b"));

    for (expr, expected_op, expected_id) in [
        (&and, LogicalOp::Or, "LogicalOperator_LogicalAndOperator_ToLogicalOrOperator"),
        (&or, LogicalOp::And, "LogicalOperator_LogicalOrOperator_ToLogicalAndOperator"),
        (
            &nullish,
            LogicalOp::And,
            "LogicalOperator_NullishCoalescingOperator_ToLogicalAndOperator",
        ),
    ] {
        let mutables = mutate_expr(&LogicalOperatorMutator, expr);
        assert_eq!(operators(&mutables), vec![expected_id]);
        let ExprKind::Logical { op, .. } = &expr_replacement(&mutables[0]).kind else {
            panic!("not logical");
        };
        assert_eq!(*op, expected_op);
    }
}

#[test]
fn assignment_compound_operators_swap() {
    let expr = Expr::assign(AssignOp::AddAssign, Expr::ident("x"), num("1"));
    let mutables = mutate_expr(&AssignmentOperatorMutator, &expr);
    assert_eq!(
        operators(&mutables),
        vec!["AssignmentOperator_AdditionAssignment_ToSubtractionAssignment"]
    );

    // plain assignment is not a compound operator
    let plain = Expr::assign(AssignOp::Assign, Expr::ident("x"), num("1"));
    assert!(mutate_expr(&AssignmentOperatorMutator, &plain).is_empty());
}

#[test]
fn assignment_respects_the_textual_guard() {
    let concat = Expr::assign(AssignOp::AddAssign, Expr::ident("x"), Expr::string("s"));
    assert!(mutate_expr(&AssignmentOperatorMutator, &concat).is_empty());

    // logical assignments stay meaningful on strings
    let or_assign = Expr::assign(AssignOp::OrAssign, Expr::ident("x"), Expr::string("s"));
    assert_eq!(
        operators(&mutate_expr(&AssignmentOperatorMutator, &or_assign)),
        vec!["AssignmentOperator_LogicalOrAssignment_ToLogicalAndAssignment"]
    );
}

#[test]
fn unary_plus_minus_swap_and_bitnot_is_removed() {
    let plus = Expr::unary(UnaryOp::Plus, Expr::ident("a"));
    assert_eq!(
        operators(&mutate_expr(&UnaryOperatorMutator, &plus)),
        vec!["UnaryOperator_UnaryPlusOperator_ToUnaryMinusOperator"]
    );

    let bitnot = Expr::unary(UnaryOp::BitNot, Expr::ident("a"));
    let mutables = mutate_expr(&UnaryOperatorMutator, &bitnot);
    assert_eq!(operators(&mutables), vec!["UnaryOperator_BitwiseNotOperator_Removal"]);
    assert_eq!(expr_replacement(&mutables[0]), &Expr::ident("a"));

    // typeof / void / delete / ! are other families' business
    for op in [UnaryOp::TypeOf, UnaryOp::Void, UnaryOp::Delete, UnaryOp::Not] {
        let expr = Expr::unary(op, Expr::ident("a"));
        assert!(mutate_expr(&UnaryOperatorMutator, &expr).is_empty());
    }
}

#[test]
fn update_operators_flip_and_keep_their_position() {
    for (prefix, op, expected_id) in [
        (true, UpdateOp::Inc, "UpdateOperator_PrefixIncrementOperator_Negation"),
        (true, UpdateOp::Dec, "UpdateOperator_PrefixDecrementOperator_Negation"),
        (false, UpdateOp::Inc, "UpdateOperator_PostfixIncrementOperator_Negation"),
        (false, UpdateOp::Dec, "UpdateOperator_PostfixDecrementOperator_Negation"),
    ] {
        let expr = Expr::update(op, prefix, Expr::ident("i"));
        let mutables = mutate_expr(&UpdateOperatorMutator, &expr);
        assert_eq!(operators(&mutables), vec![expected_id]);
        let ExprKind::Update {
            op: new_op,
            prefix: new_prefix,
            ..
        } = &expr_replacement(&mutables[0]).kind
        else {
            panic!("not an update expression");
        };
        assert_ne!(*new_op, op);
        assert_eq!(*new_prefix, prefix);
    }
}

#[test]
fn level_restriction_selects_a_subset() {
    let expr = Expr::binary(BinaryOp::Lt, Expr::ident("a"), Expr::ident("b"));
    assert_level_filtering(
        &EqualityOperatorMutator,
        Target::Expr(&expr),
        &ParentContext::VarInit,
        &["EqualityOperator_LessThanOperator_Boundary"],
    );
    // an id from another construct selects nothing on this node
    assert_level_filtering(
        &EqualityOperatorMutator,
        Target::Expr(&expr),
        &ParentContext::VarInit,
        &["EqualityOperator_GreaterThanOperator_Boundary"],
    );
}
