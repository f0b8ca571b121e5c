//! A resizable, indexable sequence of opaque element handles.
//!
//! [`Sequence<T>`] stores handles contiguously and manages its own capacity
//! with an explicit load-factor policy: grow by 1.5× when occupancy would
//! pass 0.75, shrink by the same step on removal when occupancy allows.
//! Handles are never inspected; ordering, equality, and transformation are
//! supplied by the caller as closures.
//!
//! # Architecture
//!
//! ```text
//! Sequence<T>
//! ├── storage: Vec<T>          live region [0, len)
//! ├── capacity: usize          logical slot count, >= len, >= 1
//! └── config: SequenceConfig   initial capacity, growth factor, load threshold
//! ```
//!
//! Operations are grouped by module:
//!
//! - [`sequence`]: construction, index access, single insert/remove,
//!   stack (`push`/`pop`) and queue (`enqueue`/`dequeue`) forms.
//! - [`capacity`]: the growth/shrink policy and `ensure_capacity`.
//! - [`bulk`]: `copy`, `append_list`, `insert_list`, `slice`.
//! - [`search`]: `find`/`find_by`, `remove`/`remove_by`.
//! - [`order`]: `reverse`, `shuffle`, `sort_by`, `is_sorted_by`.
//! - [`functional`]: `map`, `filter`, `reduce`, `values`, iteration.
//! - [`dump`]: `Display` adapters for human-readable output.
//!
//! # Errors
//!
//! Out-of-range indices, zero initial capacity, and value-based removal of
//! an absent element return [`SequenceError`]. Searches return
//! `Option<usize>`. Allocation failure aborts, as with any `Vec`.
//!
//! ```
//! use shiftseq::Sequence;
//!
//! let mut seq = Sequence::new();
//! seq.append(3);
//! seq.append(1);
//! seq.append(2);
//! seq.sort_by(|a, b| a.cmp(b));
//! assert_eq!(seq.as_slice(), &[1, 2, 3]);
//! assert!(seq.get(3).is_err());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bulk;
pub mod capacity;
pub mod config;
pub mod dump;
pub mod error;
pub mod functional;
pub mod order;
pub mod search;
pub mod sequence;

// Public re-exports for the primary API surface.
pub use config::SequenceConfig;
pub use dump::Dump;
pub use error::SequenceError;
pub use search::NOT_FOUND;
pub use sequence::Sequence;
