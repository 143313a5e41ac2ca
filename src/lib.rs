//! Auto-translate table resolution
//!
//! Completion records carry a lookup reference such as `Item[1-3,col-2]`. This
//! crate parses those references into [`Selector`]s and resolves them against
//! language-parallel sheets, producing `(group, row) -> LocalisedText` entries
//! that have text in every configured language.
//!
//! # Example
//!
//! ```
//! use autotranslate_engine::{
//!     resolve_all, CompletionRecord, Language, MemorySheet, ResolveOptions, SheetStore,
//! };
//!
//! let mut store = SheetStore::new();
//! for (language, text) in [
//!     (Language::English, "Potion"),
//!     (Language::Japanese, "ポーション"),
//!     (Language::German, "Trank"),
//!     (Language::French, "Potion"),
//! ] {
//!     store.insert("Item", language, MemorySheet::new().with_row(4, [text]));
//! }
//!
//! let records = vec![CompletionRecord::new(2, 0, "Item[4]")];
//! let resolution = resolve_all(&records, &store, &ResolveOptions::default()).unwrap();
//!
//! let text = resolution.table.get((2, 4)).unwrap();
//! assert_eq!(text.get(Language::German), Some("Trank"));
//! ```

pub mod cli;
pub mod commands;
pub mod completion;
pub mod config;
pub mod error;
pub mod fs_utils;
pub mod lang;
pub mod localised;
pub mod output;
pub mod resolve;
pub mod selector;
pub mod sheet;
pub mod text;

// Re-export commonly used types
pub use cli::{Cli, OutputFormat};
pub use completion::{load_completions, CompletionRecord, DirectText};
pub use config::EngineConfig;
pub use error::{ResolveError, Result, SelectorSyntaxError, TranslateError};
pub use lang::Language;
pub use localised::LocalisedText;
pub use resolve::{
    resolve_all, resolve_lookup, resolve_record, EntryKey, LookupPlan, Resolution,
    ResolutionReport, ResolveOptions, ResolvedEntry, ResolvedTable, Resolver, RowFilter,
};
pub use selector::{parse, Selector, SelectorPart};
pub use sheet::{MemorySheet, Sheet, SheetProvider, SheetStore};
