use proc_macro::TokenStream;

mod attr;
mod record;

/// Derive the record description for a struct with named fields.
///
/// Container option: `#[rowmap(table = "name")]` also implements `Table`.
/// Member options: `column = "name"`, `primary_key`, `auto_increment`,
/// `sort = N`, `statement`, `tag = "raw;tag"`, `skip`.
#[proc_macro_derive(Record, attributes(rowmap))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive_record(input.into()).into()
}
