use std::env;

use record_store::{db, Store};

fn print_matrix(label: &str, m: &matrix_engine::Matrix) {
    println!("{}:", label);
    for row in m {
        println!("  {:?}", row);
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    let mode = args.get(1).cloned().unwrap_or_else(|| "stats".to_string());

    let database_url =
        env::var("ALGOLAB_DB").unwrap_or_else(|_| "sqlite:algolab.db".to_string());
    let pool = db::init_pool(&database_url).await?;
    let store = Store::new(pool);

    match mode.as_str() {
        "multiply" => {
            let size: usize = args.get(2).unwrap_or(&"4".to_string()).parse()?;
            let name = args
                .get(3)
                .cloned()
                .unwrap_or_else(|| format!("{}x{}", size, size));

            let a = matrix_engine::generate(size, 1, 10)?;
            let b = matrix_engine::generate(size, 1, 10)?;
            let out = matrix_engine::multiply(&a, &b)?;

            print_matrix("Matrix A", &a);
            print_matrix("Matrix B", &b);
            print_matrix("Product", &out.product);
            println!(
                "{} operations in {:.6} s",
                out.operations,
                out.elapsed.as_secs_f64()
            );

            let id = store.save_matrices(&name, &a, &b, Some(&out.product)).await?;
            println!("Saved as record {}", id);
        }
        "list" => {
            for record in store.list_matrices().await? {
                let status = if record.result.is_some() {
                    "with result"
                } else {
                    "no result"
                };
                println!(
                    "#{} {} ({}x{}, {})",
                    record.id,
                    record.name,
                    record.matrix_a.len(),
                    record.matrix_a.len(),
                    status
                );
            }
        }
        "show" => {
            let id: i64 = args.get(2).unwrap_or(&"0".to_string()).parse()?;
            match store.get_matrices(id).await? {
                Some(record) => {
                    println!("#{} {}", record.id, record.name);
                    print_matrix("Matrix A", &record.matrix_a);
                    print_matrix("Matrix B", &record.matrix_b);
                    match &record.result {
                        Some(product) => print_matrix("Product", product),
                        None => println!("Product: not computed"),
                    }
                }
                None => println!("No record with id {}", id),
            }
        }
        "delete" => {
            let id: i64 = args.get(2).unwrap_or(&"0".to_string()).parse()?;
            store.delete_matrices(id).await?;
            println!("Deleted record {}", id);
        }
        "stats" => {
            let stats = store.stats().await?;
            println!("Graphs:        {}", stats.graphs);
            println!("Matrix pairs:  {}", stats.matrices);
            println!("Sort runs:     {}", stats.sorts);
            for (algorithm, s) in &stats.sort_stats {
                println!(
                    "  {}: avg {:.6} s, avg {:.1} comparisons",
                    algorithm, s.avg_time, s.avg_comparisons
                );
            }
        }
        "clear" => {
            store.clear_all().await?;
            println!("All records cleared");
        }
        _ => {
            eprintln!("Unknown mode: {}", mode);
            eprintln!("Usage: {} <mode> [args...]", args[0]);
            eprintln!("Modes:");
            eprintln!("  multiply <size> [name]  - Generate, multiply, and save a matrix pair");
            eprintln!("  list                    - List saved matrix records");
            eprintln!("  show <id>               - Print one matrix record");
            eprintln!("  delete <id>             - Delete one matrix record");
            eprintln!("  stats                   - Print store statistics");
            eprintln!("  clear                   - Delete every record");
            std::process::exit(1);
        }
    }

    Ok(())
}
