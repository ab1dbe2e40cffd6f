fn main() -> anyhow::Result<()> {
    tabpad_lib::run()
}
