#[tokio::main]
async fn main() {
    user_admin_backend::run().await;
}
