fn main() -> eframe::Result<()> {
    env_logger::init();
    perfchart::run()
}
