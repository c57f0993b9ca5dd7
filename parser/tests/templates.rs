// Copyright (C) 2022-2026 The Trellis Developers.
// This file is part of the Trellis library.

// The Trellis library is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// The Trellis library is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with the Trellis library. If not, see <https://www.gnu.org/licenses/>.

use trellis_ast::*;
use trellis_errors::Result;
use trellis_parser::{parse, parse_with_extensions, parse_with_options, Extension, ParserContext, Tags};

use std::rc::Rc;

fn parse_ok(src: &str) -> Template {
    match parse(src) {
        Ok(template) => template,
        Err(error) => panic!("failed to parse {src:?}: {error}"),
    }
}

fn parse_err(src: &str) -> String {
    match parse(src) {
        Ok(template) => panic!("expected {src:?} to fail, got {template:?}"),
        Err(error) => error.to_string(),
    }
}

fn single(src: &str) -> Statement {
    let mut template = parse_ok(src);
    assert_eq!(template.statements.len(), 1, "expected one statement in {src:?}");
    template.statements.remove(0)
}

fn single_output(src: &str) -> Expression {
    match single(src) {
        Statement::Output(output) => output.expression,
        other => panic!("expected an output statement, got {other:?}"),
    }
}

fn ident(expr: &Expression) -> &str {
    match expr {
        Expression::Identifier(identifier) => &identifier.name,
        other => panic!("expected an identifier, got {other:?}"),
    }
}

fn int(expr: &Expression) -> i64 {
    match expr {
        Expression::Literal(Literal::Integer(value, _)) => *value,
        other => panic!("expected an integer literal, got {other:?}"),
    }
}

fn data(statement: &Statement) -> &str {
    match statement {
        Statement::Output(OutputStatement {
            expression: Expression::TemplateData(data), ..
        }) => &data.value,
        other => panic!("expected template data, got {other:?}"),
    }
}

#[test]
fn text_and_interpolation() {
    let template = parse_ok("hello {{ name }}");
    assert_eq!(template.statements.len(), 2);
    assert_eq!(data(&template.statements[0]), "hello ");
    match &template.statements[1] {
        Statement::Output(output) => assert_eq!(ident(&output.expression), "name"),
        other => panic!("expected output, got {other:?}"),
    }
}

#[test]
fn if_else() {
    let Statement::Conditional(conditional) = single("{% if x %}a{% else %}b{% endif %}") else {
        panic!("expected a conditional");
    };
    assert_eq!(conditional.mode, ConditionalMode::If);
    assert_eq!(ident(&conditional.condition), "x");
    assert_eq!(data(&conditional.body.statements[0]), "a");
    match conditional.otherwise {
        Some(ElseBranch::Else(block)) => assert_eq!(data(&block.statements[0]), "b"),
        other => panic!("expected an else branch, got {other:?}"),
    }
}

#[test]
fn elif_chain() {
    let Statement::Conditional(conditional) =
        single("{% if a %}1{% elif b %}2{% else %}3{% endif %}")
    else {
        panic!("expected a conditional");
    };
    let Some(ElseBranch::Elif(chained)) = conditional.otherwise else {
        panic!("expected an elif continuation");
    };
    assert_eq!(ident(&chained.condition), "b");
    assert_eq!(data(&chained.body.statements[0]), "2");
    match chained.otherwise {
        Some(ElseBranch::Else(block)) => assert_eq!(data(&block.statements[0]), "3"),
        other => panic!("expected an else branch, got {other:?}"),
    }
}

#[test]
fn if_async_mode() {
    let Statement::Conditional(conditional) = single("{% ifAsync x %}a{% endif %}") else {
        panic!("expected a conditional");
    };
    assert_eq!(conditional.mode, ConditionalMode::IfAsync);
    assert!(conditional.otherwise.is_none());
}

#[test]
fn unclosed_if_reports_eof() {
    let message = parse_err("{% if x %}a");
    assert!(message.contains("end of file"), "got: {message}");
}

#[test]
fn for_with_unpacking() {
    let Statement::Iteration(iteration) = single("{% for k, v in d %}{{ k }}{% endfor %}")
    else {
        panic!("expected an iteration");
    };
    assert_eq!(iteration.mode, IterationMode::For);
    let Expression::Array(targets) = &iteration.name else {
        panic!("expected unpacking targets");
    };
    assert_eq!(ident(&targets.elements[0]), "k");
    assert_eq!(ident(&targets.elements[1]), "v");
    assert_eq!(ident(&iteration.iterable), "d");
    assert!(iteration.otherwise.is_none());
    match &iteration.body.statements[0] {
        Statement::Output(output) => assert_eq!(ident(&output.expression), "k"),
        other => panic!("expected output, got {other:?}"),
    }
}

#[test]
fn for_with_else() {
    let Statement::Iteration(iteration) = single("{% for x in xs %}a{% else %}b{% endfor %}")
    else {
        panic!("expected an iteration");
    };
    assert_eq!(ident(&iteration.name), "x");
    let otherwise = iteration.otherwise.expect("expected an else branch");
    assert_eq!(data(&otherwise.statements[0]), "b");
}

#[test]
fn async_loops_use_their_end_tags() {
    let Statement::Iteration(each) = single("{% asyncEach x in xs %}a{% endeach %}") else {
        panic!("expected an iteration");
    };
    assert_eq!(each.mode, IterationMode::AsyncEach);

    let Statement::Iteration(all) = single("{% asyncAll x in xs %}a{% endall %}") else {
        panic!("expected an iteration");
    };
    assert_eq!(all.mode, IterationMode::AsyncAll);
}

#[test]
fn for_requires_in() {
    let message = parse_err("{% for x of xs %}a{% endfor %}");
    assert!(message.contains("expected `in` keyword"), "got: {message}");
}

#[test]
fn filter_with_arguments() {
    let Expression::Filter(filter) = single_output("{{ a | upper(2) }}") else {
        panic!("expected a filter");
    };
    assert_eq!(filter.name.name, "upper");
    assert_eq!(filter.arguments.positional.len(), 2);
    assert_eq!(ident(&filter.arguments.positional[0]), "a");
    assert_eq!(int(&filter.arguments.positional[1]), 2);
}

#[test]
fn dotted_filter_name() {
    let Expression::Filter(filter) = single_output("{{ a | str.title }}") else {
        panic!("expected a filter");
    };
    assert_eq!(filter.name.name, "str.title");
}

#[test]
fn filter_chain_is_left_to_right() {
    let Expression::Filter(outer) = single_output("{{ a | trim | upper }}") else {
        panic!("expected a filter");
    };
    assert_eq!(outer.name.name, "upper");
    let Expression::Filter(inner) = &outer.arguments.positional[0] else {
        panic!("expected a nested filter");
    };
    assert_eq!(inner.name.name, "trim");
}

#[test]
fn arithmetic_precedence() {
    let Expression::Binary(add) = single_output("{{ 1 + 2 * 3 ** 2 }}") else {
        panic!("expected a binary expression");
    };
    assert_eq!(add.op, BinaryOperation::Add);
    assert_eq!(int(&add.left), 1);
    let Expression::Binary(mul) = add.right.as_ref() else {
        panic!("expected a multiplication");
    };
    assert_eq!(mul.op, BinaryOperation::Mul);
    assert_eq!(int(&mul.left), 2);
    let Expression::Binary(pow) = mul.right.as_ref() else {
        panic!("expected an exponentiation");
    };
    assert_eq!(pow.op, BinaryOperation::Pow);
    assert_eq!(int(&pow.left), 3);
    assert_eq!(int(&pow.right), 2);
}

#[test]
fn pow_is_left_associative() {
    let Expression::Binary(outer) = single_output("{{ 2 ** 3 ** 4 }}") else {
        panic!("expected a binary expression");
    };
    assert_eq!(outer.op, BinaryOperation::Pow);
    assert_eq!(int(&outer.right), 4);
    let Expression::Binary(inner) = outer.left.as_ref() else {
        panic!("expected a nested exponentiation");
    };
    assert_eq!(int(&inner.left), 2);
    assert_eq!(int(&inner.right), 3);
}

#[test]
fn filters_bind_tighter_than_addition() {
    let Expression::Binary(add) = single_output("{{ a + b | upper }}") else {
        panic!("expected a binary expression");
    };
    assert_eq!(add.op, BinaryOperation::Add);
    assert_eq!(ident(&add.left), "a");
    let Expression::Filter(filter) = add.right.as_ref() else {
        panic!("expected a filter on the right operand");
    };
    assert_eq!(ident(&filter.arguments.positional[0]), "b");
}

#[test]
fn filters_wrap_prefixed_operands() {
    let Expression::Filter(filter) = single_output("{{ -x | upper }}") else {
        panic!("expected a filter");
    };
    let Expression::Unary(neg) = &filter.arguments.positional[0] else {
        panic!("expected a negation inside the filter");
    };
    assert_eq!(neg.op, UnaryOperation::Neg);
    assert_eq!(ident(&neg.operand), "x");
}

#[test]
fn inline_if() {
    let Expression::InlineIf(inline) = single_output("{{ a if b else c }}") else {
        panic!("expected an inline conditional");
    };
    assert_eq!(ident(&inline.body), "a");
    assert_eq!(ident(&inline.condition), "b");
    assert_eq!(ident(inline.otherwise.as_ref().expect("expected an else arm")), "c");
}

#[test]
fn in_and_not_in() {
    let Expression::Binary(contains) = single_output("{{ a in b }}") else {
        panic!("expected a binary expression");
    };
    assert_eq!(contains.op, BinaryOperation::In);

    let Expression::Unary(not) = single_output("{{ a not in b }}") else {
        panic!("expected a negation");
    };
    assert_eq!(not.op, UnaryOperation::Not);
    let Expression::Binary(inner) = not.operand.as_ref() else {
        panic!("expected a containment inside the negation");
    };
    assert_eq!(inner.op, BinaryOperation::In);
}

#[test]
fn comparison_chain() {
    let Expression::Compare(compare) = single_output("{{ a < b <= c }}") else {
        panic!("expected a comparison");
    };
    assert_eq!(ident(&compare.left), "a");
    assert_eq!(compare.chain.len(), 2);
    assert_eq!(compare.chain[0].op, ComparisonOperation::Lt);
    assert_eq!(ident(&compare.chain[0].expr), "b");
    assert_eq!(compare.chain[1].op, ComparisonOperation::LtEq);
    assert_eq!(ident(&compare.chain[1].expr), "c");
}

#[test]
fn strict_comparisons() {
    let Expression::Compare(compare) = single_output("{{ a === b !== c }}") else {
        panic!("expected a comparison");
    };
    assert_eq!(compare.chain[0].op, ComparisonOperation::StrictEq);
    assert_eq!(compare.chain[1].op, ComparisonOperation::StrictNotEq);
}

#[test]
fn concat_and_boolean_operators() {
    let Expression::Binary(or) = single_output("{{ a ~ b or not c }}") else {
        panic!("expected a binary expression");
    };
    assert_eq!(or.op, BinaryOperation::Or);
    let Expression::Binary(concat) = or.left.as_ref() else {
        panic!("expected a concatenation");
    };
    assert_eq!(concat.op, BinaryOperation::Concat);
    let Expression::Unary(not) = or.right.as_ref() else {
        panic!("expected a negation");
    };
    assert_eq!(not.op, UnaryOperation::Not);
}

#[test]
fn floor_division_and_modulo() {
    let Expression::Binary(floor) = single_output("{{ a // b }}") else {
        panic!("expected a binary expression");
    };
    assert_eq!(floor.op, BinaryOperation::FloorDiv);

    let Expression::Binary(modulo) = single_output("{{ a % b }}") else {
        panic!("expected a binary expression");
    };
    assert_eq!(modulo.op, BinaryOperation::Mod);
}

#[test]
fn postfix_chain() {
    let Expression::Call(call) = single_output(r#"{{ user.name["x"](1) }}"#) else {
        panic!("expected a call");
    };
    assert_eq!(int(&call.arguments.positional[0]), 1);
    let Expression::Lookup(index) = call.function.as_ref() else {
        panic!("expected a subscript");
    };
    let Expression::Lookup(member) = index.target.as_ref() else {
        panic!("expected a member access");
    };
    assert_eq!(ident(&member.target), "user");
    match member.index.as_ref() {
        Expression::Literal(Literal::Str(name, _)) => assert_eq!(name, "name"),
        other => panic!("expected the member name literal, got {other:?}"),
    }
}

#[test]
fn multi_element_subscript_is_rejected() {
    let message = parse_err("{{ a[1, 2] }}");
    assert!(message.contains("invalid index"), "got: {message}");
}

#[test]
fn aggregates() {
    let Expression::Dict(dict) = single_output(r#"{{ {"a": 1, "b": [1, 2]} }}"#) else {
        panic!("expected a dict");
    };
    assert_eq!(dict.pairs.len(), 2);
    let Expression::Array(array) = &dict.pairs[1].value else {
        panic!("expected an array value");
    };
    assert_eq!(array.elements.len(), 2);

    let Expression::Group(group) = single_output("{{ (a, b) }}") else {
        panic!("expected a group");
    };
    assert_eq!(group.elements.len(), 2);
}

#[test]
fn trailing_commas_are_rejected() {
    let message = parse_err("{{ [1, 2,] }}");
    assert!(message.contains("unexpected token"), "got: {message}");
}

#[test]
fn literals() {
    match single_output("{{ 1.5 }}") {
        Expression::Literal(Literal::Float(value, _)) => assert_eq!(value, 1.5),
        other => panic!("expected a float, got {other:?}"),
    }
    assert!(matches!(single_output("{{ none }}"), Expression::Literal(Literal::None(_))));
    assert!(matches!(single_output("{{ null }}"), Expression::Literal(Literal::None(_))));
    assert!(matches!(
        single_output("{{ true }}"),
        Expression::Literal(Literal::Boolean(true, _))
    ));
    match single_output("{{ r/ab+/gi }}") {
        Expression::Literal(Literal::Regex { body, flags, .. }) => {
            assert_eq!(body, "ab+");
            assert_eq!(flags, "gi");
        }
        other => panic!("expected a regex literal, got {other:?}"),
    }
}

#[test]
fn block_statement() {
    let Statement::Block(block) = single("{% block content %}hi{% endblock %}") else {
        panic!("expected a block definition");
    };
    assert_eq!(block.name.name, "content");
    assert_eq!(data(&block.body.statements[0]), "hi");

    // The closing tag may repeat the block's name.
    let Statement::Block(named) = single("{% block x %}b{% endblock x %}") else {
        panic!("expected a block definition");
    };
    assert_eq!(named.name.name, "x");
}

#[test]
fn extends_and_include() {
    let Statement::Extends(extends) = single(r#"{% extends "base.html" %}"#) else {
        panic!("expected an extends statement");
    };
    assert!(matches!(&extends.template, Expression::Literal(Literal::Str(name, _)) if name == "base.html"));

    let Statement::Include(include) = single(r#"{% include "part.html" ignore missing %}"#)
    else {
        panic!("expected an include statement");
    };
    assert!(include.ignore_missing);

    let Statement::Include(plain) = single(r#"{% include "part.html" %}"#) else {
        panic!("expected an include statement");
    };
    assert!(!plain.ignore_missing);
}

#[test]
fn set_value_and_capture() {
    let Statement::Set(set) = single("{% set a, b = 2 %}") else {
        panic!("expected a set statement");
    };
    assert_eq!(set.targets.len(), 2);
    match &set.value {
        SetValue::Value(value) => assert_eq!(int(value), 2),
        other => panic!("expected an inline value, got {other:?}"),
    }

    let Statement::Set(capture) = single("{% set x %}hi{% endset %}") else {
        panic!("expected a set statement");
    };
    match &capture.value {
        SetValue::Capture(capture) => assert_eq!(data(&capture.body.statements[0]), "hi"),
        other => panic!("expected a capture, got {other:?}"),
    }
}

#[test]
fn set_requires_assignment_or_body() {
    let message = parse_err("{% set x y %}");
    assert!(message.contains("expected `=` or block end"), "got: {message}");
}

#[test]
fn macro_definition() {
    let Statement::Macro(macro_) =
        single(r#"{% macro field(name, value="") %}x{% endmacro %}"#)
    else {
        panic!("expected a macro definition");
    };
    assert_eq!(ident(&macro_.name), "field");
    assert_eq!(macro_.arguments.positional.len(), 1);
    assert_eq!(ident(&macro_.arguments.positional[0]), "name");
    assert_eq!(macro_.arguments.keywords.len(), 1);
    assert_eq!(ident(&macro_.arguments.keywords[0].key), "value");
}

#[test]
fn call_injects_the_caller_keyword() {
    let Expression::Call(call) = single_output("{% call(a) list(items) %}x{% endcall %}")
    else {
        panic!("expected a call");
    };
    assert_eq!(ident(&call.function), "list");
    assert_eq!(ident(&call.arguments.positional[0]), "items");
    assert_eq!(call.arguments.keywords.len(), 1);
    let caller_pair = &call.arguments.keywords[0];
    assert_eq!(ident(&caller_pair.key), "caller");
    let Expression::Caller(caller) = &caller_pair.value else {
        panic!("expected the caller body");
    };
    assert_eq!(ident(&caller.arguments.positional[0]), "a");
    assert_eq!(data(&caller.body.statements[0]), "x");
}

#[test]
fn call_requires_a_macro_call() {
    let message = parse_err("{% call foo %}x{% endcall %}");
    assert!(message.contains("expected a macro call"), "got: {message}");
}

#[test]
fn import_with_context() {
    let Statement::Import(import) = single(r#"{% import "forms.html" as forms with context %}"#)
    else {
        panic!("expected an import statement");
    };
    assert_eq!(ident(&import.target), "forms");
    assert_eq!(import.with_context, Some(true));

    let Statement::Import(without) =
        single(r#"{% import "forms.html" as forms without context %}"#)
    else {
        panic!("expected an import statement");
    };
    assert_eq!(without.with_context, Some(false));
}

#[test]
fn from_import() {
    let Statement::FromImport(from) = single(r#"{% from "t" import a, b as c %}"#) else {
        panic!("expected a from-import statement");
    };
    assert!(matches!(&from.template, Expression::Literal(Literal::Str(name, _)) if name == "t"));
    assert_eq!(from.names.len(), 2);
    assert_eq!(ident(&from.names[0].name), "a");
    assert!(from.names[0].alias.is_none());
    assert_eq!(ident(&from.names[1].name), "b");
    assert_eq!(ident(from.names[1].alias.as_ref().expect("expected an alias")), "c");
    assert_eq!(from.with_context, None);
}

#[test]
fn from_import_rejects_underscore_names() {
    let message = parse_err(r#"{% from "t" import _x %}"#);
    assert!(
        message.contains("names starting with an underscore cannot be imported"),
        "got: {message}"
    );
}

#[test]
fn from_import_requires_names() {
    let message = parse_err(r#"{% from "t" import %}"#);
    assert!(message.contains("at least one import name"), "got: {message}");
}

#[test]
fn from_import_context_resets_per_name() {
    // The context clause is re-read after every name; a later name without
    // one clears it.
    let Statement::FromImport(from) = single(r#"{% from "t" import a with context, b %}"#)
    else {
        panic!("expected a from-import statement");
    };
    assert_eq!(from.names.len(), 2);
    assert_eq!(from.with_context, None);
}

#[test]
fn filter_statement_captures_its_body() {
    let Expression::Filter(filter) = single_output("{% filter upper %}hi{% endfilter %}")
    else {
        panic!("expected a filter");
    };
    assert_eq!(filter.name.name, "upper");
    let Expression::Capture(capture) = &filter.arguments.positional[0] else {
        panic!("expected the captured body");
    };
    assert_eq!(data(&capture.body.statements[0]), "hi");
}

#[test]
fn raw_preserves_template_syntax() {
    assert_eq!(data(&single("{% raw %}{{ x }}{% endraw %}")), "{{ x }}");
    assert_eq!(data(&single("{% verbatim %}{% if %}{% endverbatim %}")), "{% if %}");
}

#[test]
fn raw_handles_nesting() {
    assert_eq!(
        data(&single("{% raw %}a{% raw %}b{% endraw %}c{% endraw %}")),
        "a{% raw %}b{% endraw %}c"
    );
}

#[test]
fn raw_with_whitespace_control() {
    let template = parse_ok("x {%- raw -%} {{ x }} {%- endraw -%} y");
    assert_eq!(template.statements.len(), 3);
    assert_eq!(data(&template.statements[0]), "x");
    assert_eq!(data(&template.statements[1]), "{{ x }}");
    assert_eq!(data(&template.statements[2]), "y");
}

#[test]
fn whitespace_control_around_tags() {
    let template = parse_ok("a {%- if x -%} b {%- endif %}");
    assert_eq!(data(&template.statements[0]), "a");
    let Statement::Conditional(conditional) = &template.statements[1] else {
        panic!("expected a conditional");
    };
    assert_eq!(data(&conditional.body.statements[0]), "b");
}

#[test]
fn whitespace_control_around_interpolations() {
    let template = parse_ok("a {{- x -}} b");
    assert_eq!(data(&template.statements[0]), "a");
    assert_eq!(data(&template.statements[2]), "b");
}

#[test]
fn comments_are_dropped_and_trim() {
    let template = parse_ok("a {# note #} b");
    assert_eq!(template.statements.len(), 2);
    assert_eq!(data(&template.statements[0]), "a ");
    assert_eq!(data(&template.statements[1]), " b");

    let trimmed = parse_ok("a {#- note -#} b");
    assert_eq!(data(&trimmed.statements[0]), "a");
    assert_eq!(data(&trimmed.statements[1]), "b");
}

#[test]
fn unknown_block_tag_fails() {
    let message = parse_err("{% spam %}");
    assert!(message.contains("unknown block tag: spam"), "got: {message}");
}

#[test]
fn errors_carry_one_based_positions() {
    let message = parse_err("hello\n{{ 1 + }}");
    assert!(message.contains("unexpected token"), "got: {message}");
    assert!(message.contains("2:8"), "got: {message}");
}

#[test]
fn error_codes_are_stable() {
    let error = parse("{% spam %}").unwrap_err();
    assert!(error.error_code().starts_with("EPAR"), "got: {}", error.error_code());
}

struct CacheExtension;

impl Extension for CacheExtension {
    fn tags(&self) -> &[&'static str] {
        &["cache"]
    }

    fn parse(&self, parser: &mut ParserContext<'_>) -> Result<Statement> {
        let begun = parser.advance_after_block_end(None)?;
        let body = parser.parse_until_blocks(&["endcache"])?;
        parser.advance_after_block_end(None)?;
        Ok(Statement::Output(OutputStatement {
            expression: Expression::Capture(CaptureExpression { body, span: begun.span }),
            span: begun.span,
        }))
    }
}

#[test]
fn extensions_claim_unknown_tags() {
    let extensions: Vec<Rc<dyn Extension>> = vec![Rc::new(CacheExtension)];
    let template =
        parse_with_extensions("{% cache %}hi {{ name }}{% endcache %}", extensions).unwrap();
    let Statement::Output(output) = &template.statements[0] else {
        panic!("expected the extension's output");
    };
    let Expression::Capture(capture) = &output.expression else {
        panic!("expected the extension's capture");
    };
    assert_eq!(capture.body.statements.len(), 2);
    assert_eq!(data(&capture.body.statements[0]), "hi ");
}

#[test]
fn custom_delimiters() {
    let tags = Tags {
        block_start: "<%".to_string(),
        block_end: "%>".to_string(),
        variable_start: "<<".to_string(),
        variable_end: ">>".to_string(),
        comment_start: "<#".to_string(),
        comment_end: "#>".to_string(),
    };
    let template =
        parse_with_options("<% if x %>a<% endif %><< name >>", Vec::new(), tags).unwrap();
    assert!(matches!(template.statements[0], Statement::Conditional(_)));
    match &template.statements[1] {
        Statement::Output(output) => assert_eq!(ident(&output.expression), "name"),
        other => panic!("expected output, got {other:?}"),
    }
}

#[test]
fn signature_without_parens_stops_at_block_end() {
    use trellis_parser::{Lexer, Token};

    let mut parser = ParserContext::new(Lexer::new("{% tag a, b=1 %}", Tags::default()), Vec::new());
    let open = parser.next_token().unwrap().unwrap();
    assert_eq!(open.token, Token::BlockStart { trim: false });
    assert!(parser.eat_symbol("tag").unwrap());
    let arguments = parser.parse_signature(false, true).unwrap().expect("expected a signature");
    assert_eq!(arguments.positional.len(), 1);
    assert_eq!(arguments.keywords.len(), 1);
    // The closing marker is left for the caller.
    parser.advance_after_block_end(Some("tag")).unwrap();
}

#[test]
fn tolerant_signature_returns_nothing_without_parens() {
    use trellis_parser::{Lexer, Token};

    let mut parser = ParserContext::new(Lexer::new("{% call foo() %}", Tags::default()), Vec::new());
    let open = parser.next_token().unwrap().unwrap();
    assert_eq!(open.token, Token::BlockStart { trim: false });
    assert!(parser.eat_symbol("call").unwrap());
    assert!(parser.parse_signature(true, false).unwrap().is_none());
}

#[test]
fn display_round_trips_canonical_templates() {
    for src in [
        "hello {{ name }}",
        "{% if x %}a{% else %}b{% endif %}",
        "{% for k, v in d %}{{ k }}{% endfor %}",
        "{% set x = 1 %}",
        r#"{% from "t" import a, b as c %}"#,
    ] {
        let template = parse_ok(src);
        assert_eq!(template.to_string(), src);
        let again = parse_ok(&template.to_string());
        assert_eq!(template, again, "round trip changed {src:?}");
    }
}

#[test]
fn serialization_round_trips() {
    let ast = Ast::new(parse_ok("{% for x in xs %}{{ x | trim }}{% endfor %}"));
    let json = ast.to_json_string().unwrap();
    let back = Ast::from_json_string(&json).unwrap();
    assert_eq!(ast, back);

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let statement = &value["statements"][0]["Iteration"];
    assert_eq!(statement["mode"], "For");
    assert_eq!(statement["iterable"]["Identifier"]["name"], "xs");
}
