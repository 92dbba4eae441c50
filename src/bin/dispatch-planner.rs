use dispatch::planner::service;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    service::run().await
}
