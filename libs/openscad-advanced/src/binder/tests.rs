//! Tests for argument binding.

use super::*;
use crate::context::{Expression, ScopeContext};
use crate::variant::{signature_for, OperationVariant};

fn lit(value: impl Into<Value>) -> Expression {
    Expression::literal(value)
}

fn bind_subdiv(
    args: &[CallArgument<Expression>],
    ctx: &mut ScopeContext,
) -> Result<ResolvedScope, EvalError> {
    bind("subdiv", signature_for(OperationVariant::Subdivision), args, ctx)
}

#[test]
fn positional_arguments_fill_in_order() {
    let mut ctx = ScopeContext::new();
    let args = [
        CallArgument::positional(lit(2.0)),
        CallArgument::positional(lit("loop")),
        CallArgument::positional(lit(4.0)),
    ];
    let scope = bind_subdiv(&args, &mut ctx).unwrap();
    assert_eq!(scope.get("level"), &Value::Number(2.0));
    assert_eq!(scope.get("type"), &Value::from("loop"));
    assert_eq!(scope.get("convexity"), &Value::Number(4.0));
    assert!(ctx.warnings.is_empty());
}

#[test]
fn positional_arguments_skip_named_slots() {
    let mut ctx = ScopeContext::new();
    let args = [
        CallArgument::positional(lit("sqrt3")),
        CallArgument::named("level", lit(3.0)),
        CallArgument::positional(lit(7.0)),
    ];
    let scope = bind_subdiv(&args, &mut ctx).unwrap();
    assert_eq!(scope.get("level"), &Value::Number(3.0));
    assert_eq!(scope.get("type"), &Value::from("sqrt3"));
    assert_eq!(scope.get("convexity"), &Value::Number(7.0));
}

#[test]
fn every_declared_name_is_present() {
    let mut ctx = ScopeContext::new();
    let scope = bind_subdiv(&[], &mut ctx).unwrap();
    assert_eq!(scope.names().collect::<Vec<_>>(), ["level", "type", "convexity"]);
    assert!(scope.get("level").is_undefined());
    assert!(scope.get("type").is_undefined());
    assert!(scope.get("not_declared").is_undefined());
}

#[test]
fn unknown_named_argument_is_ignored_with_warning() {
    let mut ctx = ScopeContext::new();
    let args = [CallArgument::named("bogus", lit(1.0))];
    let scope = bind("minkowski", signature_for(OperationVariant::Minkowski), &args, &mut ctx).unwrap();
    assert!(scope.get("convexity").is_undefined());
    assert_eq!(ctx.warning_messages(), ["minkowski(): ignoring unknown argument 'bogus'"]);
}

#[test]
fn extra_positional_argument_is_ignored_with_warning() {
    let mut ctx = ScopeContext::new();
    let args = [CallArgument::positional(lit(1.0))];
    let scope = bind("hull", signature_for(OperationVariant::Hull), &args, &mut ctx).unwrap();
    assert!(scope.is_empty());
    assert_eq!(ctx.warning_messages(), ["hull(): ignoring extra positional argument"]);
}

#[test]
fn repeated_named_argument_keeps_last_value() {
    let mut ctx = ScopeContext::new();
    let args = [
        CallArgument::named("convexity", lit(1.0)),
        CallArgument::named("convexity", lit(5.0)),
    ];
    let scope = bind("minkowski", signature_for(OperationVariant::Minkowski), &args, &mut ctx).unwrap();
    assert_eq!(scope.get("convexity"), &Value::Number(5.0));
    assert_eq!(ctx.warnings.len(), 1);
}

#[test]
fn missing_required_parameter_is_an_error() {
    let mut ctx = ScopeContext::new();
    let args = [CallArgument::named("convexity", lit(2.0))];
    let err = bind("glide", signature_for(OperationVariant::Glide), &args, &mut ctx).unwrap_err();
    assert_eq!(
        err,
        EvalError::UndefinedVariable {
            name: "path".to_string(),
            module: "glide".to_string(),
        }
    );
}

#[test]
fn required_parameter_bound_positionally() {
    let mut ctx = ScopeContext::new();
    ctx.scope.define("p", Value::Vector(vec![Value::Number(1.0)]));
    let args = [CallArgument::positional(Expression::variable("p"))];
    let scope = bind("glide", signature_for(OperationVariant::Glide), &args, &mut ctx).unwrap();
    assert_eq!(scope.get("path"), &Value::Vector(vec![Value::Number(1.0)]));
}

#[test]
fn warnings_follow_call_site_order() {
    let mut ctx = ScopeContext::new();
    let args = [
        CallArgument::positional(Expression::variable("a")),
        CallArgument::named("bogus", lit(1.0)),
        CallArgument::named("type", Expression::variable("b")),
        CallArgument::positional(Expression::variable("c")),
    ];
    let scope = bind_subdiv(&args, &mut ctx).unwrap();
    assert!(scope.get("level").is_undefined());
    assert!(scope.get("convexity").is_undefined());
    assert_eq!(
        ctx.warning_messages(),
        [
            "Ignoring unknown variable 'a'",
            "subdiv(): ignoring unknown argument 'bogus'",
            "Ignoring unknown variable 'b'",
            "Ignoring unknown variable 'c'",
        ]
    );
}

#[test]
fn extra_positional_is_not_evaluated() {
    let mut ctx = ScopeContext::new();
    let args = [
        CallArgument::positional(lit(2.0)),
        CallArgument::positional(Expression::variable("unused")),
    ];
    bind("minkowski", signature_for(OperationVariant::Minkowski), &args, &mut ctx).unwrap();
    assert_eq!(ctx.warning_messages(), ["minkowski(): ignoring extra positional argument"]);
}
