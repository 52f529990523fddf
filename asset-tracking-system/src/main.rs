fn main() {
    asset_tracking_system::server::run();
}
