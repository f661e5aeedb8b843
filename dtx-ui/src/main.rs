//! Command line interface for DTX

mod clap;

#[tokio::main]
async fn main() -> dtx::Result<()> {
  dtx::misc::tracing_tree_init(None)?;
  clap::init().await
}
