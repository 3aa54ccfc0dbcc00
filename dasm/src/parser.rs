use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "dasm.pest"]
pub struct DasmParser;
