#[tokio::main(flavor = "current_thread")]
async fn main() {
    java_selector_lib::run().await
}
