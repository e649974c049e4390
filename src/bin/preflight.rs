use dish_service::infra::config;
use sqlx::postgres::PgPoolOptions;

const REQUIRED_COLUMNS: &[&str] = &["id", "name", "description", "price"];

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: cargo run --bin preflight\n\
         \n\
         Checks that the postgres backend can start.\n\
         Requires env vars:\n\
           DATABASE_URL\n"
    );
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }

    let backend = config::backend()?;
    let database_url = config::database_url()?;

    println!("> Preflight:");
    println!("  DISH_BACKEND={}", backend.as_str());
    println!("  BIND_ADDR={}", config::bind_addr());

    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&database_url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to connect to DATABASE_URL: {}", e))?;

    let version: String = sqlx::query_scalar("SELECT version()")
        .fetch_one(&pool)
        .await?;
    println!("  Server version: {}", version);

    let columns: Vec<String> = sqlx::query_scalar(
        "SELECT column_name::TEXT
         FROM information_schema.columns
         WHERE table_schema = current_schema() AND table_name = 'dishes'
         ORDER BY ordinal_position",
    )
    .fetch_all(&pool)
    .await?;

    if columns.is_empty() {
        pool.close().await;
        return Err(anyhow::anyhow!(
            "Table 'dishes' does not exist. Create it first (see sql/dishes.sql)."
        ));
    }

    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|c| !columns.iter().any(|have| have == c))
        .collect();
    if !missing.is_empty() {
        pool.close().await;
        return Err(anyhow::anyhow!(
            "Table 'dishes' is missing columns: {}",
            missing.join(", ")
        ));
    }
    println!("  Table 'dishes' columns: {}", columns.join(", "));

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM dishes")
        .fetch_one(&pool)
        .await?;
    println!("  Rows in 'dishes': {}", count);

    pool.close().await;
    println!("> Preflight OK.");
    Ok(())
}
