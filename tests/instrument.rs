//! End-to-end instrumentation tests: whole programs in, woven trees and
//! mutant lists out.

use mutweave::{
    ast::{
        BinaryOp, DeclKind, Expr, ExprKind, ParentContext, Program, Span, Stmt, StmtKind,
        SwitchCase, Target, VarDeclarator,
    },
    levels::MutationLevel,
    options::{InstrumenterOptions, Mutate},
    source::{Comment, Location, Position, SourceFile},
    transformer::{count_mutants, instrument, MutantIgnorer},
};
use similar_asserts::assert_eq;

fn file() -> SourceFile {
    SourceFile::new("test.js", "let x = true;\n")
}

fn let_stmt(name: &str, init: Expr) -> Stmt {
    Stmt::var_decl(
        DeclKind::Let,
        vec![VarDeclarator {
            name: name.into(),
            init: Some(init),
        }],
    )
}

fn activation(id: &str) -> Expr {
    Expr::call(Expr::ident("__mutantActive"), vec![Expr::string(id)])
}

#[test]
fn a_program_without_candidates_is_untouched() {
    let mut program = Program {
        body: vec![
            Stmt::new(StmtKind::Import {
                source: "./util".into(),
            }),
            let_stmt("x", Expr::ident("y")),
            Stmt::expr(Expr::call(Expr::ident("f"), vec![Expr::ident("x")])),
        ],
    };
    let original = program.clone();

    let mutants = instrument(&mut program, &file(), &InstrumenterOptions::default()).unwrap();
    assert!(mutants.is_empty());
    assert_eq!(program, original);
}

#[test]
fn an_expression_mutant_becomes_a_guarded_ternary() {
    let mut program = Program {
        body: vec![let_stmt("x", Expr::bool_lit(true))],
    };

    let mutants = instrument(&mut program, &file(), &InstrumenterOptions::default()).unwrap();
    assert_eq!(mutants.len(), 1);
    assert_eq!(mutants[0].id, 0);
    assert_eq!(mutants[0].operator, "BooleanLiteral_TrueLiteral_ToFalseLiteral");
    assert_eq!(mutants[0].origin_file, "test.js");
    assert!(!mutants[0].is_ignored());

    let expected = Program {
        body: vec![let_stmt(
            "x",
            Expr::conditional(activation("0"), Expr::bool_lit(false), Expr::bool_lit(true)),
        )],
    };
    assert_eq!(program, expected);
}

#[test]
fn several_mutants_on_one_node_chain_in_collection_order() {
    let lt = Expr::binary(BinaryOp::Lt, Expr::ident("a"), Expr::ident("b"));
    let mut program = Program {
        body: vec![Stmt::ret(Some(lt.clone()))],
    };

    let mutants = instrument(&mut program, &file(), &InstrumenterOptions::default()).unwrap();
    assert_eq!(
        mutants.iter().map(|m| m.operator).collect::<Vec<_>>(),
        vec![
            "ConditionalExpression_BooleanExpression_ToTrue",
            "ConditionalExpression_BooleanExpression_ToFalse",
            "EqualityOperator_LessThanOperator_Boundary",
            "EqualityOperator_LessThanOperator_ToGreaterThanEqualOperator",
        ]
    );

    let le = Expr::binary(BinaryOp::Le, Expr::ident("a"), Expr::ident("b"));
    let ge = Expr::binary(BinaryOp::Ge, Expr::ident("a"), Expr::ident("b"));
    let expected = Program {
        body: vec![Stmt::ret(Some(Expr::conditional(
            activation("0"),
            Expr::bool_lit(true),
            Expr::conditional(
                activation("1"),
                Expr::bool_lit(false),
                Expr::conditional(
                    activation("2"),
                    le,
                    Expr::conditional(activation("3"), ge, lt),
                ),
            ),
        )))],
    };
    assert_eq!(program, expected);
}

#[test]
fn a_statement_mutant_becomes_an_if_else() {
    let endless = Stmt::new(StmtKind::For {
        init: None,
        test: None,
        update: None,
        body: Box::new(Stmt::block(Vec::new())),
    });
    let mut program = Program {
        body: vec![endless.clone()],
    };

    let mutants = instrument(&mut program, &file(), &InstrumenterOptions::default()).unwrap();
    assert_eq!(mutants.len(), 1);
    assert_eq!(mutants[0].operator, "ConditionalExpression_ForCondition_ToFalse");

    let mut terminated = endless.clone();
    if let StmtKind::For { test, .. } = &mut terminated.kind {
        *test = Some(Expr::bool_lit(false));
    }
    let expected = Program {
        body: vec![Stmt::if_stmt(
            activation("0"),
            Stmt::block(vec![terminated]),
            Some(Stmt::block(vec![endless])),
        )],
    };
    assert_eq!(program, expected);
}

#[test]
fn a_switch_case_mutant_rewrites_the_consequent() {
    let call_f = Stmt::expr(Expr::call(Expr::ident("f"), Vec::new()));
    let mut program = Program {
        body: vec![Stmt::new(StmtKind::Switch {
            discriminant: Expr::ident("x"),
            cases: vec![SwitchCase {
                span: Span::DUMMY,
                test: Some(Expr::number("1")),
                consequent: vec![call_f.clone()],
            }],
        })],
    };

    let mutants = instrument(&mut program, &file(), &InstrumenterOptions::default()).unwrap();
    assert_eq!(mutants.len(), 1);
    assert_eq!(mutants[0].operator, "ConditionalExpression_SwitchCaseBody_Removal");

    let StmtKind::Switch { cases, .. } = &program.body[0].kind else {
        panic!("switch survived as something else");
    };
    let expected_consequent = vec![Stmt::if_stmt(
        activation("0"),
        Stmt::block(Vec::new()),
        Some(Stmt::block(vec![call_f])),
    )];
    assert_eq!(cases[0].consequent, expected_consequent);
    assert_eq!(cases[0].test, Some(Expr::number("1")));
}

#[test]
fn unplaceable_positions_anchor_on_an_ancestor() {
    // foo?.bar(): the optional member sits in callee position, where no
    // strategy places, so the weave happens at the enclosing call
    let optional_call = Expr::call(
        Expr::member(Expr::ident("foo"), Expr::ident("bar"), false, true),
        Vec::new(),
    );
    let mut program = Program {
        body: vec![Stmt::expr(optional_call.clone())],
    };

    let mutants = instrument(&mut program, &file(), &InstrumenterOptions::default()).unwrap();
    assert_eq!(mutants.len(), 1);
    assert_eq!(
        mutants[0].operator,
        "OptionalChaining_OptionalMemberExpression_OptionalRemoval"
    );

    let plain_call = Expr::call(
        Expr::member(Expr::ident("foo"), Expr::ident("bar"), false, false),
        Vec::new(),
    );
    let expected = Program {
        body: vec![Stmt::expr(Expr::conditional(
            activation("0"),
            plain_call,
            optional_call,
        ))],
    };
    assert_eq!(program, expected);
}

#[test]
fn instrumenting_the_same_program_twice_is_identical() {
    let make = || Program {
        body: vec![
            let_stmt("x", Expr::bool_lit(true)),
            Stmt::ret(Some(Expr::binary(
                BinaryOp::Lt,
                Expr::ident("a"),
                Expr::ident("b"),
            ))),
            Stmt::expr(Expr::call(
                Expr::member(Expr::ident("text"), Expr::ident("trim"), false, false),
                Vec::new(),
            )),
        ],
    };
    let mut first = make();
    let mut second = make();

    let first_mutants = instrument(&mut first, &file(), &InstrumenterOptions::default()).unwrap();
    let second_mutants = instrument(&mut second, &file(), &InstrumenterOptions::default()).unwrap();

    assert_eq!(first_mutants, second_mutants);
    assert_eq!(first, second);
}

#[test]
fn count_mutants_matches_instrument() {
    let make = || Program {
        body: vec![
            let_stmt("x", Expr::bool_lit(true)),
            Stmt::ret(Some(Expr::binary(
                BinaryOp::Lt,
                Expr::ident("a"),
                Expr::ident("b"),
            ))),
        ],
    };

    let count = count_mutants(&mut make(), &file(), &InstrumenterOptions::default()).unwrap();
    let mutants = instrument(&mut make(), &file(), &InstrumenterOptions::default()).unwrap();
    assert_eq!(count, mutants.len());
    // one boolean literal, two conditional constants, two equality swaps
    assert_eq!(count, 5);
}

#[test]
fn counting_never_rewrites_the_tree() {
    let mut program = Program {
        body: vec![let_stmt("x", Expr::bool_lit(true))],
    };
    let original = program.clone();
    count_mutants(&mut program, &file(), &InstrumenterOptions::default()).unwrap();
    assert_eq!(program, original);
}

#[test]
fn directive_comments_suppress_but_still_report() {
    let text = "// mutweave disable next-line all: too flaky\nlet x = true;\n";
    let newline = text.find('\n').unwrap() as u32;
    let true_at = text.find("true").unwrap() as u32;
    let file = SourceFile::new("test.js", text).with_comments(vec![Comment {
        span: Span::new(0, newline),
        text: text[2..newline as usize].to_owned(),
    }]);

    let mut program = Program {
        body: vec![let_stmt(
            "x",
            Expr::bool_lit(true).with_span(Span::new(true_at, true_at + 4)),
        )],
    };
    let original = program.clone();

    let mutants = instrument(&mut program, &file, &InstrumenterOptions::default()).unwrap();
    assert_eq!(mutants.len(), 1);
    assert_eq!(mutants[0].ignore_reason.as_deref(), Some("too flaky"));
    assert_eq!(program, original);
}

#[test]
fn excluded_mutations_suppress_by_family_or_operator() {
    let options = InstrumenterOptions::builder()
        .excluded_mutations(["BooleanLiteral"])
        .build()
        .unwrap();
    let mut program = Program {
        body: vec![let_stmt("x", Expr::bool_lit(true))],
    };
    let original = program.clone();

    let mutants = instrument(&mut program, &file(), &options).unwrap();
    assert_eq!(mutants.len(), 1);
    assert_eq!(
        mutants[0].ignore_reason.as_deref(),
        Some("Ignored because of excluded mutation \"BooleanLiteral\"")
    );
    assert_eq!(program, original);
}

struct ConsoleIgnorer;

impl MutantIgnorer for ConsoleIgnorer {
    fn should_ignore(&self, target: Target<'_>, _parent: &ParentContext) -> Option<String> {
        let Target::Expr(expr) = target else {
            return None;
        };
        let ExprKind::Call { callee, .. } = &expr.kind else {
            return None;
        };
        let ExprKind::Member { object, .. } = &callee.kind else {
            return None;
        };
        matches!(&object.kind, ExprKind::Ident(name) if name == "console")
            .then(|| "console statements are not mutated".to_owned())
    }
}

#[test]
fn ignorers_cover_whole_subtrees() {
    let console_log = Expr::call(
        Expr::member(Expr::ident("console"), Expr::ident("log"), false, false),
        vec![Expr::string("hi")],
    );
    let options = InstrumenterOptions::builder()
        .ignorer(Box::new(ConsoleIgnorer))
        .build()
        .unwrap();
    let mut program = Program {
        body: vec![
            Stmt::expr(console_log),
            let_stmt("x", Expr::string("kept")),
        ],
    };

    let mutants = instrument(&mut program, &file(), &options).unwrap();
    assert_eq!(mutants.len(), 2);
    assert_eq!(
        mutants[0].ignore_reason.as_deref(),
        Some("console statements are not mutated")
    );
    assert!(!mutants[1].is_ignored());
}

#[test]
fn mutate_ranges_limit_collection_to_overlapping_lines() {
    let text = "let a = true;\nlet b = false;\n";
    let file = SourceFile::new("test.js", text);
    let false_at = text.find("false").unwrap() as u32;

    let mut program = Program {
        body: vec![
            let_stmt("a", Expr::bool_lit(true).with_span(Span::new(8, 12))),
            let_stmt(
                "b",
                Expr::bool_lit(false).with_span(Span::new(false_at, false_at + 5)),
            ),
        ],
    };

    let options = InstrumenterOptions::builder()
        .mutate(Mutate::Ranges(vec![Location::new(
            Position::new(2, 0),
            Position::new(2, 14),
        )]))
        .build()
        .unwrap();
    let mutants = instrument(&mut program, &file, &options).unwrap();
    assert_eq!(mutants.len(), 1);
    assert_eq!(mutants[0].operator, "BooleanLiteral_FalseLiteral_ToTrueLiteral");
    assert_eq!(mutants[0].location.start.line, 2);
}

#[test]
fn a_level_disables_absent_families() {
    let level = MutationLevel::new("bool-only")
        .with_family("BooleanLiteral", ["BooleanLiteral_TrueLiteral_ToFalseLiteral"]);
    let options = InstrumenterOptions::builder().level(level).build().unwrap();

    let mut program = Program {
        body: vec![
            let_stmt("x", Expr::bool_lit(true)),
            let_stmt("y", Expr::bool_lit(false)),
            let_stmt("s", Expr::string("text")),
        ],
    };
    let mutants = instrument(&mut program, &file(), &options).unwrap();
    assert_eq!(
        mutants.iter().map(|m| m.operator).collect::<Vec<_>>(),
        vec!["BooleanLiteral_TrueLiteral_ToFalseLiteral"]
    );
}

#[test]
fn the_activation_helper_name_is_configurable() {
    let options = InstrumenterOptions::builder()
        .activation_helper("__covWeave")
        .build()
        .unwrap();
    let mut program = Program {
        body: vec![let_stmt("x", Expr::bool_lit(true))],
    };
    instrument(&mut program, &file(), &options).unwrap();

    let expected = Program {
        body: vec![let_stmt(
            "x",
            Expr::conditional(
                Expr::call(Expr::ident("__covWeave"), vec![Expr::string("0")]),
                Expr::bool_lit(false),
                Expr::bool_lit(true),
            ),
        )],
    };
    assert_eq!(program, expected);
}
