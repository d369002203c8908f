use anyhow::Result;

fn main() -> Result<()> {
    nn_train::cli::run()
}
