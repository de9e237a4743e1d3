//! Core ledger type and builder.

use crate::error::{Error, Result};
use crate::persist::{load, overwrite, validate_path};
use crate::serializer::{JsonSerializer, Serializer};
use indexmap::IndexMap;
use std::io::Write;
use std::path::{Path, PathBuf};

/// File used by [`Inventory::load`] and [`Inventory::save`] unless the builder
/// says otherwise.
pub const DEFAULT_PATH: &str = "inventory.json";

/// Threshold used by [`Inventory::low_items`] unless the builder says otherwise.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

/// Item name -> quantity, in insertion order.
pub type Stock = IndexMap<String, i64>;

/// In-memory item ledger backed by a JSON file.
///
/// The mapping is the only state. Mutations go through [`add_item`](Self::add_item)
/// and [`remove_item`](Self::remove_item); [`load`](Self::load) replaces the
/// whole mapping and [`save`](Self::save) writes it out.
///
/// Not synchronized. One owner, one thread.
pub struct Inventory {
    stock: Stock,
    path: PathBuf,
    serializer: JsonSerializer,
    low_stock_threshold: i64,
}

impl Inventory {
    /// Empty ledger with default settings.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Build a ledger bound to `path` and load it. A missing file gives an
    /// empty ledger.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let mut inventory = Self::builder().path(path).build();
        inventory.load()?;
        Ok(inventory)
    }

    /// Start configuring a new ledger. Call [`.build()`](InventoryBuilder::build)
    /// when ready.
    pub fn builder() -> InventoryBuilder {
        InventoryBuilder::new()
    }

    // ---- writes ----

    /// Add `qty` to `item`, creating it if missing. Negative quantities are
    /// allowed and act as a correction.
    ///
    /// Unlike [`remove_item`](Self::remove_item), the item stays in the ledger
    /// even if its quantity ends up at or below zero.
    ///
    /// When `log` is given, one timestamped line is appended to it.
    pub fn add_item(&mut self, item: &str, qty: i64, log: Option<&mut Vec<String>>) -> Result<()> {
        validate_item(item)?;
        let current = self.stock.get(item).copied().unwrap_or(0);
        let updated = current.checked_add(qty).ok_or_else(|| {
            Error::invalid_quantity(format!("adding {qty} to {item:?} ({current}) overflows"))
        })?;

        match self.stock.get_mut(item) {
            Some(slot) => *slot = updated,
            None => {
                self.stock.insert(item.to_owned(), updated);
            }
        }
        tracing::debug!(item, qty, total = updated, "added item");

        if let Some(log) = log {
            log.push(log_entry(item, qty));
        }
        Ok(())
    }

    /// Take `qty` away from `item`. The item is dropped once its quantity
    /// reaches zero or below. Removing an unknown item does nothing.
    pub fn remove_item(&mut self, item: &str, qty: i64) -> Result<()> {
        validate_item(item)?;
        let Some(current) = self.stock.get(item).copied() else {
            tracing::debug!(item, "remove of unknown item ignored");
            return Ok(());
        };
        let remaining = current.checked_sub(qty).ok_or_else(|| {
            Error::invalid_quantity(format!("removing {qty} from {item:?} ({current}) overflows"))
        })?;

        if remaining <= 0 {
            self.stock.shift_remove(item);
            tracing::debug!(item, qty, "removed item");
        } else {
            self.stock.insert(item.to_owned(), remaining);
            tracing::debug!(item, qty, total = remaining, "reduced item");
        }
        Ok(())
    }

    // ---- reads ----

    /// Quantity of `item`, or 0 if the ledger has never seen it.
    pub fn get_qty(&self, item: &str) -> Result<i64> {
        validate_item(item)?;
        Ok(self.stock.get(item).copied().unwrap_or(0))
    }

    /// Names of items whose quantity is strictly below `threshold`, in ledger
    /// order.
    #[must_use]
    pub fn check_low_items(&self, threshold: i64) -> Vec<String> {
        self.stock
            .iter()
            .filter(|(_, qty)| **qty < threshold)
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// [`check_low_items`](Self::check_low_items) with the configured
    /// threshold.
    #[must_use]
    pub fn low_items(&self) -> Vec<String> {
        self.check_low_items(self.low_stock_threshold)
    }

    /// `true` if `item` is in the ledger, whatever its quantity.
    #[must_use]
    pub fn contains(&self, item: &str) -> bool {
        self.stock.contains_key(item)
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stock.len()
    }

    /// `true` when the ledger has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stock.is_empty()
    }

    /// `(name, quantity)` pairs in ledger order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> + '_ {
        self.stock.iter().map(|(name, &qty)| (name.as_str(), qty))
    }

    /// Item names in ledger order.
    #[must_use]
    pub fn items(&self) -> Vec<String> {
        self.stock.keys().cloned().collect()
    }

    /// Borrow the underlying mapping.
    #[must_use]
    pub fn stock(&self) -> &Stock {
        &self.stock
    }

    /// Path used by [`load`](Self::load) and [`save`](Self::save).
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Threshold used by [`low_items`](Self::low_items).
    #[must_use]
    pub fn low_stock_threshold(&self) -> i64 {
        self.low_stock_threshold
    }

    // ---- reporting ----

    /// Write the report to `out`: a header line, then `<name> -> <qty>` per item.
    pub fn write_report<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Items Report")?;
        for (name, qty) in &self.stock {
            writeln!(out, "{name} -> {qty}")?;
        }
        Ok(())
    }

    /// Print the report to standard output.
    pub fn print_report(&self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        self.write_report(&mut lock)
    }

    // ---- persistence ----

    /// Replace the ledger with the contents of the configured file.
    pub fn load(&mut self) -> Result<()> {
        let path = self.path.clone();
        self.load_from(path)
    }

    /// Replace the ledger with the contents of `path`. A missing file leaves
    /// the ledger as it is. On error the ledger is untouched.
    pub fn load_from(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        validate_path(path)?;
        match load(path, &self.serializer)? {
            Some(stock) => {
                tracing::info!(path = %path.display(), items = stock.len(), "loaded inventory");
                self.stock = stock;
            }
            None => tracing::debug!(path = %path.display(), "no inventory file, keeping ledger"),
        }
        Ok(())
    }

    /// Write the ledger to the configured file.
    pub fn save(&self) -> Result<()> {
        self.save_to(&self.path)
    }

    /// Write the ledger to `path`, overwriting whatever is there.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        validate_path(path)?;
        let bytes = self.serializer.serialize(&self.stock)?;
        overwrite(path, &bytes)?;
        tracing::info!(path = %path.display(), items = self.stock.len(), "saved inventory");
        Ok(())
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Inventory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Inventory")
            .field("path", &self.path)
            .field("items", &self.stock.len())
            .field("pretty", &self.serializer.is_pretty())
            .field("low_stock_threshold", &self.low_stock_threshold)
            .finish_non_exhaustive()
    }
}

fn validate_item(item: &str) -> Result<()> {
    if item.trim().is_empty() {
        return Err(Error::invalid_argument("item must be a non-empty string"));
    }
    Ok(())
}

/// `2026-10-18T09:15:02: Added 10 of apple`, local time.
fn log_entry(item: &str, qty: i64) -> String {
    let now = chrono::Local::now().format("%Y-%m-%dT%H:%M:%S");
    format!("{now}: Added {qty} of {item}")
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Configures an [`Inventory`].
///
/// ```rust,no_run
/// use inventory_ledger::Inventory;
///
/// let inv = Inventory::builder()
///     .path("stock.json")
///     .pretty(false)
///     .low_stock_threshold(3)
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct InventoryBuilder {
    path: PathBuf,
    pretty: bool,
    low_stock_threshold: i64,
}

impl InventoryBuilder {
    fn new() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_PATH),
            pretty: true,
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }

    /// Backing file for `load()` / `save()` (default: `inventory.json`).
    pub fn path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = path.as_ref().to_path_buf();
        self
    }

    /// Indent saved JSON by two spaces (default: `true`).
    pub fn pretty(mut self, yes: bool) -> Self {
        self.pretty = yes;
        self
    }

    /// Threshold for [`Inventory::low_items`] (default: 5).
    pub fn low_stock_threshold(mut self, threshold: i64) -> Self {
        self.low_stock_threshold = threshold;
        self
    }

    /// Create an empty ledger. Nothing is read from disk.
    pub fn build(self) -> Inventory {
        let serializer = if self.pretty {
            JsonSerializer::pretty()
        } else {
            JsonSerializer::new()
        };
        Inventory {
            stock: Stock::new(),
            path: self.path,
            serializer,
            low_stock_threshold: self.low_stock_threshold,
        }
    }
}
