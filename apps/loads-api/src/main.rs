use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = loads_api::Args::parse();
	loads_api::run(args).await
}
