fn main() -> anyhow::Result<()> {
    device_info_lib::run()
}
