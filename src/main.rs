use anyhow::Result;

fn main() -> Result<()> {
    i18n_sync::cli::run()
}
