#[tokio::main]
async fn main() {
    sea_orm_migration::cli::run_cli(academy_dashboard_migration::Migrator).await;
}
