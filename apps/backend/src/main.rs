#[tokio::main]
async fn main() -> anyhow::Result<()> {
    courseware_admin_backend::run().await
}
