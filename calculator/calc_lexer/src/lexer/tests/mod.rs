
#[allow(dead_code)]
fn init_test_logger() {
    let _ = env_logger::builder()
        .is_test(true)
        .parse_filters("trace")
        .try_init();
}
