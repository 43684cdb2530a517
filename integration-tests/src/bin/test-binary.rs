fn main() {
    integration_tests::test_binary_main();
}
