// End-to-end scenarios for the expression builder
use calc_expr::{BracketAccounting, BuilderConfig, ExprBuilder, ExprState};
use pretty_assertions::assert_eq;
use tests::type_keys;

#[allow(dead_code)]
fn init_test_logger() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Debug)
        .try_init();
}

#[test]
fn test_open_bracket_sum_is_auto_closed() {
    let builder = type_keys(BuilderConfig::default(), "( 1 + 2");

    assert_eq!(builder.to_string(), "( 1 + 2");
    assert_eq!(builder.to_finalized_string(), "( 1 + 2 )");
}

#[test]
fn test_trailing_operator_is_dropped() {
    let builder = type_keys(BuilderConfig::default(), "1 +");
    assert_eq!(builder.to_finalized_string(), "1");
}

#[test]
fn test_balanced_expression_finalizes_to_itself() {
    let builder = type_keys(BuilderConfig::default(), "1 + 2");
    assert_eq!(builder.to_finalized_string(), "1 + 2");
}

#[test]
fn test_clear_then_empty() {
    init_test_logger();
    for accounting in [BracketAccounting::Tracked, BracketAccounting::Legacy] {
        let mut builder = type_keys(BuilderConfig { accounting }, "( 2 * ( 3");
        builder.clear();
        assert!(builder.is_empty());
        assert_eq!(builder.to_string(), "");
        assert_eq!(builder.state(), ExprState::Empty);
    }
}

#[test]
fn test_brackets_removed_one_by_one() {
    let mut builder = type_keys(BuilderConfig::default(), "( (");
    builder.remove_last();
    builder.remove_last();
    assert!(builder.is_empty());
}

#[test]
fn test_set_equals_typed_keys() {
    let input = "1 + ( 2 - 3";
    let mut builder = ExprBuilder::new();
    builder.set(Some(input));

    let typed = type_keys(BuilderConfig::default(), input);
    let kinds = |b: &ExprBuilder| b.tokens().iter().map(|t| t.kind).collect::<Vec<_>>();
    assert_eq!(kinds(&builder), kinds(&typed));
    assert_eq!(builder.expression().lexemes(), typed.expression().lexemes());
    assert_eq!(builder.balance(), typed.balance());
}

#[test]
fn test_rejected_bracket_after_number_changes_nothing() {
    for accounting in [BracketAccounting::Tracked, BracketAccounting::Legacy] {
        let mut builder = type_keys(BuilderConfig { accounting }, "( 1");
        let before = (builder.to_string(), builder.balance());
        builder.add("(");
        assert_eq!((builder.to_string(), builder.balance()), before);
    }
}

#[test]
fn test_get_returns_finalized_tokens() {
    let builder = type_keys(BuilderConfig::default(), "2 ^ ( 1 -");
    let tokens: Vec<String> = builder.get().iter().map(ToString::to_string).collect();

    assert_eq!(tokens, vec!["2", "^", "(", "1", ")"]);
    assert_eq!(builder.to_string(), "2 ^ ( 1 -");
}

#[test]
fn test_legacy_set_quirk_is_reproduced() {
    let mut builder = ExprBuilder::with_config(BuilderConfig::legacy());
    builder.set(Some("( ( 1 )"));

    assert_eq!(builder.to_string(), "( ( 1 )");
    assert_eq!(builder.balance().left(), 4);
    assert_eq!(builder.balance().right(), 2);
    // ends in ')', so no brackets are added
    assert_eq!(builder.to_finalized_string(), "( ( 1 )");
}
