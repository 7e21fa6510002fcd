use log_shipper::error::ShipperError;

#[tokio::main]
async fn main() -> Result<(), ShipperError> {
    log_shipper::app::run().await
}
