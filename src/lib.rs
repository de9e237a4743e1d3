//! In-memory item ledger with low-stock queries and JSON file persistence.
//!
//! Add and remove quantities by item name, ask what is running low, and
//! save/load the whole thing as a JSON object of `name -> quantity`.
//!
//! ```rust,no_run
//! use inventory_ledger::Inventory;
//!
//! let mut inv = Inventory::open("inventory.json").unwrap();
//! inv.add_item("apple", 10, None).unwrap();
//! inv.remove_item("apple", 3).unwrap();
//! assert_eq!(inv.get_qty("apple").unwrap(), 7);
//! inv.save().unwrap();
//! ```
//!
//! **Single-process only.** Two processes writing the same file will clobber
//! each other, and writes are not atomic.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod ledger;
pub mod persist;
pub mod serializer;

pub use error::{Error, Result};
pub use ledger::{Inventory, InventoryBuilder, Stock, DEFAULT_LOW_STOCK_THRESHOLD, DEFAULT_PATH};
pub use serializer::{JsonSerializer, Serializer};
