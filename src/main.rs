use inventory_ledger::Inventory;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // stdout belongs to the report.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> Result<(), inventory_ledger::Error> {
    init_tracing();

    let mut inv = Inventory::new();
    let mut logs: Vec<String> = Vec::new();

    inv.add_item("apple", 10, Some(&mut logs))?;
    inv.add_item("banana", 2, Some(&mut logs))?;
    // negative add as a correction/return
    inv.add_item("banana", -2, Some(&mut logs))?;

    inv.remove_item("apple", 3)?;
    inv.remove_item("orange", 1)?; // not stocked, ignored

    println!("Apple stock: {}", inv.get_qty("apple")?);
    println!("Low items: {:?}", inv.low_items());

    inv.save()?;
    inv.load()?;
    inv.print_report()?;

    for entry in &logs {
        println!("{entry}");
    }
    Ok(())
}
