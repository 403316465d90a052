fn main() -> anyhow::Result<()> {
    backupset::cli::run()
}
