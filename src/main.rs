fn main() -> anyhow::Result<()> {
    tags_drive_lib::run()
}
