//! Unit tests for the parser module.
//!
//! This module contains tests for parsing various language constructs
//! including:
//! - Expression precedence and associativity
//! - Composite literals and call argument styles
//! - Type expressions and postfix shorthands
//! - Statements and bodies
//! - Contract/interface items, block desugaring and doc binding
//! - Error recovery and the recursion limit

use std::rc::Rc;

use crate::{
    ast::{
        ast::{Expr, ExprWrapper, Item, Stmt, Type, TypeType, TypeWrapper},
        expressions::{
            BinaryExpr, CallArgs, CallExpr, IntegerExpr, PrefixExpr, QueryExpr, StructValExpr,
            SymbolExpr, UnitExpr, VecExpr,
        },
        items::{
            ContractDefn, DocComment, EnumDefn, ErrorDefn, EventDefn, ExecDecl, ExecDefn,
            ImportAll, ImportItems, InstantiateDecl, InterfaceDefn, MigrateDefn, QueryDecl,
            QueryDefn, StateItem, StateMap, StructDefn, TypeAliasDefn, VariantKind,
        },
        statements::{AssignStmt, DirectiveKind, DirectiveStmt, ForStmt, IfStmt, LetStmt},
    },
    errors::errors::Error,
    lexer::{lexer::tokenize, tokens::TokenKind},
};

use super::{
    expr::parse_expr,
    lookups::{create_token_lookups, BindingPower},
    parser::{parse_module, parse_module_with_limit, Parser, DEFAULT_MAX_DEPTH},
    types::{create_token_type_lookups, parse_type},
};

fn test_parser(source: &str) -> Parser {
    let (tokens, errors) = tokenize(source.to_string(), Some("test.cws".to_string()));
    assert!(errors.is_empty(), "lex errors in test input: {:?}", errors);

    let mut parser = Parser::new(tokens, Rc::new("test.cws".to_string()), DEFAULT_MAX_DEPTH);
    create_token_lookups(&mut parser);
    create_token_type_lookups(&mut parser);
    parser
}

fn expr_of(source: &str) -> ExprWrapper {
    let mut parser = test_parser(source);
    parse_expr(&mut parser, BindingPower::Default).unwrap()
}

fn expr_err(source: &str) -> Error {
    let mut parser = test_parser(source);
    parse_expr(&mut parser, BindingPower::Default).unwrap_err()
}

fn type_of(source: &str) -> TypeWrapper {
    let mut parser = test_parser(source);
    parse_type(&mut parser, BindingPower::Default).unwrap()
}

fn canon_of(expr: &ExprWrapper) -> String {
    let mut out = String::new();
    expr.canon(&mut out);
    out
}

// EXPRESSIONS

#[test]
fn test_multiplication_binds_tighter_than_addition() {
    let expr = expr_of("1 + 2 * 3");

    let add = expr.as_any().downcast_ref::<BinaryExpr>().unwrap();
    assert_eq!(add.operator.kind, TokenKind::Plus);

    let lhs = add.left.as_any().downcast_ref::<IntegerExpr>().unwrap();
    assert_eq!(lhs.value, 1);

    let rhs = add.right.as_any().downcast_ref::<BinaryExpr>().unwrap();
    assert_eq!(rhs.operator.kind, TokenKind::Star);
}

#[test]
fn test_subtraction_is_left_associative() {
    let expr = expr_of("a - b - c");

    let outer = expr.as_any().downcast_ref::<BinaryExpr>().unwrap();
    assert_eq!(outer.operator.kind, TokenKind::Dash);

    let inner = outer.left.as_any().downcast_ref::<BinaryExpr>().unwrap();
    assert_eq!(inner.operator.kind, TokenKind::Dash);
    assert_eq!(
        inner.left.as_any().downcast_ref::<SymbolExpr>().unwrap().value,
        "a"
    );
    assert_eq!(
        outer.right.as_any().downcast_ref::<SymbolExpr>().unwrap().value,
        "c"
    );
}

#[test]
fn test_double_negation_is_right_associative() {
    let expr = expr_of("- -x");

    let outer = expr.as_any().downcast_ref::<PrefixExpr>().unwrap();
    assert_eq!(outer.operator.kind, TokenKind::Dash);

    let inner = outer
        .right_expr
        .as_any()
        .downcast_ref::<PrefixExpr>()
        .unwrap();
    assert_eq!(inner.operator.kind, TokenKind::Dash);
    assert!(inner.right_expr.as_any().downcast_ref::<SymbolExpr>().is_some());
}

#[test]
fn test_unary_binds_tighter_than_multiplication() {
    let expr = expr_of("-x * y");

    let mul = expr.as_any().downcast_ref::<BinaryExpr>().unwrap();
    assert_eq!(mul.operator.kind, TokenKind::Star);
    assert!(mul.left.as_any().downcast_ref::<PrefixExpr>().is_some());
}

#[test]
fn test_query_binds_loosest() {
    let expr = expr_of("query a or b");

    let query = expr.as_any().downcast_ref::<QueryExpr>().unwrap();
    let or = query.arg.as_any().downcast_ref::<BinaryExpr>().unwrap();
    assert_eq!(or.operator.kind, TokenKind::Or);
}

#[test]
fn test_and_binds_tighter_than_or() {
    let expr = expr_of("a or b and c");

    let or = expr.as_any().downcast_ref::<BinaryExpr>().unwrap();
    assert_eq!(or.operator.kind, TokenKind::Or);

    let and = or.right.as_any().downcast_ref::<BinaryExpr>().unwrap();
    assert_eq!(and.operator.kind, TokenKind::And);
}

#[test]
fn test_trailing_comma_in_struct_literal() {
    let with = expr_of("Point{x: 1, y: 2,}");
    let without = expr_of("Point{x: 1, y: 2}");

    assert_eq!(canon_of(&with), canon_of(&without));

    let literal = with.as_any().downcast_ref::<StructValExpr>().unwrap();
    assert_eq!(literal.members.len(), 2);
}

#[test]
fn test_unit_value() {
    let expr = expr_of("()");
    assert!(expr.as_any().downcast_ref::<UnitExpr>().is_some());
}

#[test]
fn test_vec_literal() {
    let expr = expr_of("[1, 2, 3]");

    let vec_val = expr.as_any().downcast_ref::<VecExpr>().unwrap();
    assert_eq!(vec_val.vals.len(), 3);
}

#[test]
fn test_positional_call() {
    let expr = expr_of("transfer(to, 5)");

    let call = expr.as_any().downcast_ref::<CallExpr>().unwrap();
    match &call.args {
        CallArgs::Positional(args) => assert_eq!(args.len(), 2),
        CallArgs::Named(_) => panic!("expected positional arguments"),
    }
}

#[test]
fn test_named_call() {
    let expr = expr_of("transfer(to: recipient, amount: 5)");

    let call = expr.as_any().downcast_ref::<CallExpr>().unwrap();
    match &call.args {
        CallArgs::Named(args) => {
            assert_eq!(args.len(), 2);
            assert_eq!(args[0].name, "to");
            assert_eq!(args[1].name, "amount");
        }
        CallArgs::Positional(_) => panic!("expected named arguments"),
    }
}

#[test]
fn test_mixed_call_arguments_rejected() {
    assert_eq!(
        expr_err("foo(a: 1, 2)").get_error_name(),
        "MixedCallArguments"
    );
    assert_eq!(
        expr_err("foo(1, a: 2)").get_error_name(),
        "MixedCallArguments"
    );
}

#[test]
fn test_member_access_and_table_lookup_chain() {
    let expr = expr_of("ledger.balances[owner]");
    let mut out = String::new();
    expr.canon(&mut out);
    assert_eq!(out, "ledger.balances[owner]");
}

// TYPES

#[test]
fn test_type_path_with_segments() {
    let ty = type_of("Msg::transfer");
    assert_eq!(ty.get_type_type(), TypeType::Path);

    let mut out = String::new();
    ty.canon(&mut out);
    assert_eq!(out, "Msg::transfer");
}

#[test]
fn test_postfix_type_shorthands_stack_left_to_right() {
    let ty = type_of("Addr?[]");
    assert_eq!(ty.get_type_type(), TypeType::ShortVec);

    let ty = type_of("Addr[]?");
    assert_eq!(ty.get_type_type(), TypeType::ShortOption);
}

#[test]
fn test_tuple_and_unit_types() {
    let ty = type_of("(Addr, u128)");
    assert_eq!(ty.get_type_type(), TypeType::Tuple);

    let unit = type_of("()");
    assert_eq!(unit.get_type_type(), TypeType::Tuple);
    let mut out = String::new();
    unit.canon(&mut out);
    assert_eq!(out, "()");
}

#[test]
fn test_infer_and_builtin_types() {
    assert_eq!(type_of("_").get_type_type(), TypeType::Infer);
    assert_eq!(type_of("u128").get_type_type(), TypeType::Builtin);
    assert_eq!(type_of("byte").get_type_type(), TypeType::Builtin);
}

// MODULES AND ITEMS

fn contract_of(source: &str) -> (ContractDefn, usize) {
    let (module, diagnostics) = parse_module(source, Some("test.cws".to_string()));
    assert!(
        diagnostics.is_empty(),
        "unexpected diagnostics: {:?}",
        diagnostics
    );
    let contract = module.items[0]
        .as_any()
        .downcast_ref::<ContractDefn>()
        .unwrap()
        .clone();
    let count = contract.body.len();
    (contract, count)
}

#[test]
fn test_empty_contract() {
    let (contract, count) = contract_of("contract Foo {}");
    assert_eq!(contract.name, "Foo");
    assert_eq!(count, 0);
}

#[test]
fn test_contract_extends_and_implements() {
    let (contract, _) = contract_of("contract Token extends Base, Mixin implements ICw20 {}");
    assert_eq!(contract.bases, vec!["Base", "Mixin"]);
    assert_eq!(contract.interfaces, vec!["ICw20"]);
}

#[test]
fn test_state_item_and_maps() {
    let source = r#"
contract Bank {
    state total: u128
    state balances[addr: Addr]: u128
    state allowances[owner: Addr][spender: Addr]: u128
}
"#;
    let (contract, count) = contract_of(source);
    assert_eq!(count, 3);

    let item = contract.body[0].as_any().downcast_ref::<StateItem>().unwrap();
    assert_eq!(item.key, "total");

    let map = contract.body[1].as_any().downcast_ref::<StateMap>().unwrap();
    assert_eq!(map.key, "balances");
    assert_eq!(map.keys.len(), 1);
    assert_eq!(map.keys[0].name.as_deref(), Some("addr"));

    let map = contract.body[2].as_any().downcast_ref::<StateMap>().unwrap();
    assert_eq!(map.keys.len(), 2);
    assert_eq!(map.keys[0].name.as_deref(), Some("owner"));
    assert_eq!(map.keys[1].name.as_deref(), Some("spender"));
}

#[test]
fn test_unnamed_map_key() {
    let (contract, _) = contract_of("contract C { state prices[Addr]: u128 }");

    let map = contract.body[0].as_any().downcast_ref::<StateMap>().unwrap();
    assert_eq!(map.keys.len(), 1);
    assert!(map.keys[0].name.is_none());
}

#[test]
fn test_error_block_desugars_to_singular_items() {
    let block = r#"
contract C {
    error {
        Unauthorized,
        InsufficientFunds{needed: u128, available: u128}
    }
}
"#;
    let singular = r#"
contract C {
    error Unauthorized
    error InsufficientFunds{needed: u128, available: u128}
}
"#;
    let (from_block, block_count) = contract_of(block);
    let (from_singular, singular_count) = contract_of(singular);

    assert_eq!(block_count, 2);
    assert_eq!(singular_count, 2);

    for body in [&from_block.body, &from_singular.body] {
        let first = body[0].as_any().downcast_ref::<ErrorDefn>().unwrap();
        assert_eq!(first.variant.name, "Unauthorized");
        assert!(matches!(first.variant.kind, VariantKind::Unit));

        let second = body[1].as_any().downcast_ref::<ErrorDefn>().unwrap();
        assert!(matches!(&second.variant.kind, VariantKind::Struct(members) if members.len() == 2));
    }
}

#[test]
fn test_event_item() {
    let (contract, _) = contract_of("contract C { event Transferred(Addr, Addr, u128) }");

    let event = contract.body[0].as_any().downcast_ref::<EventDefn>().unwrap();
    assert_eq!(event.variant.name, "Transferred");
    assert!(matches!(&event.variant.kind, VariantKind::Tuple(types) if types.len() == 3));
}

#[test]
fn test_state_block_form() {
    let source = r#"
contract C {
    state {
        count: u64
        owner: Addr
    }
}
"#;
    let (contract, count) = contract_of(source);
    assert_eq!(count, 2);
    assert!(contract.body[0].as_any().downcast_ref::<StateItem>().is_some());
    assert!(contract.body[1].as_any().downcast_ref::<StateItem>().is_some());
}

#[test]
fn test_exec_defn_with_body() {
    let source = r#"
contract C {
    exec transfer(to: Addr, amount?: u128) -> bool {
        return true
    }
}
"#;
    let (contract, _) = contract_of(source);

    let exec = contract.body[0].as_any().downcast_ref::<ExecDefn>().unwrap();
    assert_eq!(exec.name, "transfer");
    assert_eq!(exec.args.len(), 2);
    assert!(!exec.args[0].is_option);
    assert!(exec.args[1].is_option);
    assert!(exec.return_type.is_some());
    assert_eq!(exec.body.body.len(), 1);
}

#[test]
fn test_exec_block_form() {
    let source = r#"
contract C {
    exec {
        mint(to: Addr) {
            return ()
        }
        burn(from: Addr) {
            return ()
        }
    }
}
"#;
    let (contract, count) = contract_of(source);
    assert_eq!(count, 2);

    let mint = contract.body[0].as_any().downcast_ref::<ExecDefn>().unwrap();
    assert_eq!(mint.name, "mint");
    let burn = contract.body[1].as_any().downcast_ref::<ExecDefn>().unwrap();
    assert_eq!(burn.name, "burn");
}

#[test]
fn test_instantiate_and_migrate() {
    let source = r#"
contract C {
    instantiate(owner: Addr) {
        count = 0
    }
    migrate() {
        return ()
    }
}
"#;
    let (contract, count) = contract_of(source);
    assert_eq!(count, 2);
    assert!(contract.body[0]
        .as_any()
        .downcast_ref::<crate::ast::items::InstantiateDefn>()
        .is_some());
    assert!(contract.body[1].as_any().downcast_ref::<MigrateDefn>().is_some());
}

#[test]
fn test_interface_accepts_declarations_only() {
    let source = r#"
interface IToken {
    instantiate(owner: Addr)
    exec transfer(to: Addr, amount: u128)
    query balance(addr: Addr) -> u128
}
"#;
    let (module, diagnostics) = parse_module(source, Some("test.cws".to_string()));
    assert!(diagnostics.is_empty(), "{:?}", diagnostics);

    let interface = module.items[0]
        .as_any()
        .downcast_ref::<InterfaceDefn>()
        .unwrap();
    assert_eq!(interface.name, "IToken");
    assert_eq!(interface.body.len(), 3);
    assert!(interface.body[0].as_any().downcast_ref::<InstantiateDecl>().is_some());
    assert!(interface.body[1].as_any().downcast_ref::<ExecDecl>().is_some());
    assert!(interface.body[2].as_any().downcast_ref::<QueryDecl>().is_some());
}

#[test]
fn test_interface_item_with_body_is_rejected() {
    let source = "interface I { exec f() { return 1 } }";
    let (module, diagnostics) = parse_module(source, Some("test.cws".to_string()));

    assert!(!diagnostics.is_empty());
    assert!(diagnostics[0].message.contains("interface"));
    assert_eq!(module.items.len(), 1);
}

#[test]
fn test_enum_variant_shapes() {
    let source = r#"
contract C {
    enum Shape {
        Empty,
        Pair(u64, Addr),
        Named{value: u64},
        ParenNamed(value: u64)
    }
}
"#;
    let (contract, _) = contract_of(source);

    let defn = contract.body[0].as_any().downcast_ref::<EnumDefn>().unwrap();
    assert_eq!(defn.name, "Shape");
    assert_eq!(defn.variants.len(), 4);

    assert!(matches!(defn.variants[0].kind, VariantKind::Unit));
    assert!(matches!(&defn.variants[1].kind, VariantKind::Tuple(types) if types.len() == 2));
    assert!(matches!(&defn.variants[2].kind, VariantKind::Struct(members) if members.len() == 1));
    // Parenthesized `name: Type` members resolve to the struct shape.
    assert!(matches!(&defn.variants[3].kind, VariantKind::Struct(members) if members.len() == 1));
}

#[test]
fn test_ambiguous_variant_shape_is_reported() {
    let source = "contract C { enum E { Bad(a: u64, Addr) } }";
    let (_, diagnostics) = parse_module(source, Some("test.cws".to_string()));

    assert!(diagnostics
        .iter()
        .any(|d| d.message.contains("AmbiguousVariantShape")));
}

#[test]
fn test_struct_defn_and_type_alias() {
    let source = r#"
contract C {
    struct Point{x: u64, y: u64}
    type Pair = (u64, u64)
    type Wrapped = struct Inner(u64)
}
"#;
    let (contract, count) = contract_of(source);
    assert_eq!(count, 3);

    let point = contract.body[0].as_any().downcast_ref::<StructDefn>().unwrap();
    assert!(matches!(&point.variant.kind, VariantKind::Struct(members) if members.len() == 2));

    let alias = contract.body[1].as_any().downcast_ref::<TypeAliasDefn>().unwrap();
    assert_eq!(alias.name, "Pair");

    let wrapped = contract.body[2].as_any().downcast_ref::<TypeAliasDefn>().unwrap();
    assert_eq!(wrapped.ty.get_type_type(), TypeType::InlineDefn);
}

#[test]
fn test_imports_are_recorded_as_data() {
    let source = r#"
import * from "./std.cws"
import (transfer, balance as bal) from "./token.cws"
contract C {}
"#;
    let (module, diagnostics) = parse_module(source, Some("test.cws".to_string()));
    assert!(diagnostics.is_empty(), "{:?}", diagnostics);
    assert_eq!(module.items.len(), 3);

    let all = module.items[0].as_any().downcast_ref::<ImportAll>().unwrap();
    assert_eq!(all.path, "./std.cws");

    let items = module.items[1].as_any().downcast_ref::<ImportItems>().unwrap();
    assert_eq!(items.path, "./token.cws");
    assert_eq!(items.symbols.len(), 2);
    assert_eq!(items.symbols[0].symbol, "transfer");
    assert!(items.symbols[0].alias.is_none());
    assert_eq!(items.symbols[1].alias.as_deref(), Some("bal"));
}

// STATEMENTS

fn exec_body_of(source: &str) -> ExecDefn {
    let (contract, _) = contract_of(source);
    contract.body[0]
        .as_any()
        .downcast_ref::<ExecDefn>()
        .unwrap()
        .clone()
}

#[test]
fn test_let_with_type_annotation() {
    let exec = exec_body_of("contract C { exec f() { let total: u128 = 0 } }");

    let stmt = exec.body.body[0].as_any().downcast_ref::<LetStmt>().unwrap();
    match &stmt.binding {
        crate::ast::statements::Binding::Ident { name, ty } => {
            assert_eq!(name, "total");
            assert!(ty.is_some());
        }
        _ => panic!("expected an identifier binding"),
    }
}

#[test]
fn test_let_with_struct_unpack() {
    let exec = exec_body_of("contract C { exec f() { let {num, denom} = rate } }");

    let stmt = exec.body.body[0].as_any().downcast_ref::<LetStmt>().unwrap();
    assert!(matches!(
        &stmt.binding,
        crate::ast::statements::Binding::StructUnpack { names } if names.len() == 2
    ));
}

#[test]
fn test_compound_assignment() {
    let exec = exec_body_of("contract C { exec f(amount: u128) { total += amount } }");

    let stmt = exec.body.body[0].as_any().downcast_ref::<AssignStmt>().unwrap();
    assert_eq!(stmt.operator.kind, TokenKind::PlusEquals);
}

#[test]
fn test_assignment_to_table_lookup_target() {
    let exec = exec_body_of("contract C { exec f(to: Addr) { balances[to] = 0 } }");

    let stmt = exec.body.body[0].as_any().downcast_ref::<AssignStmt>().unwrap();
    assert_eq!(stmt.operator.kind, TokenKind::Assignment);
}

#[test]
fn test_if_else_if_else_chain() {
    let source = r#"
contract C {
    exec f(x: u64) {
        if x > 10 {
            return 1
        } else if x > 5 {
            return 2
        } else {
            return 3
        }
    }
}
"#;
    let exec = exec_body_of(source);

    let stmt = exec.body.body[0].as_any().downcast_ref::<IfStmt>().unwrap();
    assert_eq!(stmt.else_if_clauses.len(), 1);
    assert!(stmt.else_body.is_some());
}

#[test]
fn test_for_statement() {
    let exec = exec_body_of("contract C { exec f() { for {addr, amount} in entries { total += amount } } }");

    let stmt = exec.body.body[0].as_any().downcast_ref::<ForStmt>().unwrap();
    assert!(matches!(
        &stmt.binding,
        crate::ast::statements::Binding::StructUnpack { names } if names.len() == 2
    ));
}

#[test]
fn test_directive_statements() {
    let source = r#"
contract C {
    exec f() {
        exec transfer(to, 1)
        emit Transferred{to: to}
        fail Unauthorized{}
        return ()
    }
}
"#;
    let exec = exec_body_of(source);
    assert_eq!(exec.body.body.len(), 4);

    let kinds: Vec<DirectiveKind> = exec
        .body
        .body
        .iter()
        .map(|stmt| {
            stmt.as_any()
                .downcast_ref::<DirectiveStmt>()
                .unwrap()
                .directive
        })
        .collect();
    assert_eq!(
        kinds,
        vec![
            DirectiveKind::Exec,
            DirectiveKind::Emit,
            DirectiveKind::Fail,
            DirectiveKind::Return
        ]
    );
}

// DOC BINDING

#[test]
fn test_doc_lines_attach_to_following_declaration() {
    let source = "contract C {\n    /// moves funds\n    /// to a recipient\n    exec transfer(to: Addr) {\n        return ()\n    }\n}";
    let (contract, _) = contract_of(source);

    let exec = contract.body[0].as_any().downcast_ref::<ExecDefn>().unwrap();
    match exec.spec.as_ref().unwrap() {
        DocComment::Lines { lines, .. } => {
            assert_eq!(lines.len(), 2);
            assert_eq!(lines[0], " moves funds");
            assert_eq!(lines[1], " to a recipient");
        }
        DocComment::Block { .. } => panic!("expected a line run"),
    }
}

#[test]
fn test_blank_line_breaks_doc_attachment() {
    let source = "contract C {\n    /// stale comment\n\n    exec transfer(to: Addr) {\n        return ()\n    }\n}";
    let (contract, _) = contract_of(source);

    let exec = contract.body[0].as_any().downcast_ref::<ExecDefn>().unwrap();
    assert!(exec.spec.is_none());
}

#[test]
fn test_doc_block_attaches_to_contract() {
    let source = "/** the main token */\ncontract Token {}";
    let (module, diagnostics) = parse_module(source, Some("test.cws".to_string()));
    assert!(diagnostics.is_empty());

    let contract = module.items[0].as_any().downcast_ref::<ContractDefn>().unwrap();
    match contract.spec.as_ref().unwrap() {
        DocComment::Block { text, .. } => assert_eq!(text, " the main token "),
        DocComment::Lines { .. } => panic!("expected a block"),
    }
}

#[test]
fn test_doc_binding_inside_enum_body() {
    let source = r#"
contract C {
    enum E {
        /// the empty case
        Empty,
        Full(u64)
    }
}
"#;
    let (contract, _) = contract_of(source);

    let defn = contract.body[0].as_any().downcast_ref::<EnumDefn>().unwrap();
    assert!(defn.variants[0].spec.is_some());
    assert!(defn.variants[1].spec.is_none());
}

// RECOVERY AND LIMITS

#[test]
fn test_malformed_exec_is_recovered() {
    let (module, diagnostics) = parse_module("exec (", Some("test.cws".to_string()));

    assert!(!diagnostics.is_empty());
    assert!(diagnostics[0].message.contains("SyntaxError"));
    assert_eq!(module.items.len(), 0);
}

#[test]
fn test_recovery_produces_multiple_diagnostics() {
    let source = r#"
contract C {
    state count u64
    exec f() {
        return 1
    }
}
contract D {
    state ! broken
}
contract E {}
"#;
    let (module, diagnostics) = parse_module(source, Some("test.cws".to_string()));

    assert!(diagnostics.len() >= 2);
    assert_eq!(module.items.len(), 3);

    // The exec item after the broken state line survived recovery.
    let c = module.items[0].as_any().downcast_ref::<ContractDefn>().unwrap();
    assert!(c.body.iter().any(|item| item.as_any().downcast_ref::<ExecDefn>().is_some()));
}

#[test]
fn test_recursion_limit_aborts_with_diagnostic() {
    let nested = format!(
        "contract C {{ exec f() {{ return {}1{} }} }}",
        "(".repeat(64),
        ")".repeat(64)
    );
    let (_, diagnostics) = parse_module_with_limit(&nested, Some("test.cws".to_string()), 16);

    assert!(diagnostics
        .iter()
        .any(|d| d.message.contains("RecursionLimitExceeded")));
}

#[test]
fn test_deep_nesting_within_default_limit() {
    let nested = format!(
        "contract C {{ exec f() {{ return {}1{} }} }}",
        "(".repeat(64),
        ")".repeat(64)
    );
    let (module, diagnostics) = parse_module(&nested, Some("test.cws".to_string()));

    assert!(diagnostics.is_empty(), "{:?}", diagnostics);
    assert_eq!(module.items.len(), 1);
}

#[test]
fn test_lex_error_still_yields_items() {
    let source = "contract C {} #";
    let (module, diagnostics) = parse_module(source, Some("test.cws".to_string()));

    assert_eq!(module.items.len(), 1);
    assert!(diagnostics.iter().any(|d| d.message.contains("LexError")));
}

#[test]
fn test_query_defn_and_query_expression() {
    let source = r#"
contract C {
    query balance(addr: Addr) -> u128 {
        return balances[addr]
    }
    exec probe() {
        let total = query supply()
    }
}
"#;
    let (contract, count) = contract_of(source);
    assert_eq!(count, 2);
    assert!(contract.body[0].as_any().downcast_ref::<QueryDefn>().is_some());

    let exec = contract.body[1].as_any().downcast_ref::<ExecDefn>().unwrap();
    let stmt = exec.body.body[0].as_any().downcast_ref::<LetStmt>().unwrap();
    assert!(stmt.rhs.as_any().downcast_ref::<QueryExpr>().is_some());
}
