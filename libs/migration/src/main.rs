//! Migration CLI for the products schema (`up`, `down`, `status`, `fresh`).
//! Reads `DATABASE_URL` from the environment.

use migration::Migrator;

#[tokio::main]
async fn main() {
    sea_orm_migration::cli::run_cli(Migrator).await;
}
