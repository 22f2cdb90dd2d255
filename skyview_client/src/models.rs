pub mod fetch;
pub mod repl;
