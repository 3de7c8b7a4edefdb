use super::*;


/// Feed every whitespace separated word through `add`
fn typed(input: &str) -> ExprBuilder {
    crate::tests::init_test_logger();
    let mut builder = ExprBuilder::new();
    for word in input.split_whitespace() {
        builder.add(word);
    }
    builder
}
