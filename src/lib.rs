// Library root
// -----------
// The binary (`main.rs`) wires these modules into the interactive CLI.
//
// Module responsibilities:
// - `book`, `ledger`, `money`: the records the store keeps in memory.
// - `store`: the registry of books plus the add/purchase/report operations.
// - `error`: purchase rejections and malformed-input errors.
// - `input`: parsers and reprompt helpers for operator input.
// - `console`: terminal (`dialoguer`) and plain line-based prompting.
// - `ui`: the numbered menu loop and its flows.
// - `config`: built-in settings and console detection.
pub mod book;
pub mod config;
pub mod console;
pub mod error;
pub mod input;
pub mod ledger;
pub mod money;
pub mod store;
pub mod ui;
