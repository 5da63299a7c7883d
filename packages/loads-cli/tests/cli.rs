#[test]
fn version_is_the_bare_package_version() {
	assert_eq!(loads_cli::VERSION, env!("CARGO_PKG_VERSION"));
	assert!(!loads_cli::VERSION.contains("loads-cli"));
}
