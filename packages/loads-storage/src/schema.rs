pub fn render_schema(table: &str) -> String {
	include_str!("../../../sql/init.sql").replace("<TABLE>", table)
}
